use chrono::{Duration, Local};
use tagdom_fluent::{AgoExt, DaysExt};

#[test]
fn test_days_builds_a_duration() {
    assert_eq!(1.days(), Duration::days(1));
    assert_eq!(7i64.days(), Duration::days(7));
    assert_eq!((-2).days(), Duration::days(-2));
}

#[test]
fn test_ago_matches_manual_subtraction() {
    // Bracket with two clock reads in case the test runs across midnight
    let before = Local::now().date_naive();
    let yesterday = 1.days().ago();
    let after = Local::now().date_naive();

    assert!(
        yesterday == before - Duration::days(1) || yesterday == after - Duration::days(1),
        "1.days().ago() should be yesterday's date"
    );
}

#[test]
fn test_zero_days_ago_is_today() {
    let before = Local::now().date_naive();
    let today = 0.days().ago();
    let after = Local::now().date_naive();

    assert!(today == before || today == after);
}

#[test]
fn test_hence_mirrors_ago() {
    let before = Local::now().date_naive();
    let tomorrow = 1.days().hence();
    let after = Local::now().date_naive();

    assert!(
        tomorrow == before + Duration::days(1) || tomorrow == after + Duration::days(1),
        "1.days().hence() should be tomorrow's date"
    );
}
