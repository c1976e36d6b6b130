//! Relative-date sugar: `2.days().ago()`.

use chrono::{Duration, Local, NaiveDate};

/// Build a [`Duration`] from a day count.
pub trait DaysExt {
    fn days(self) -> Duration;
}

impl DaysExt for i64 {
    fn days(self) -> Duration {
        Duration::days(self)
    }
}

impl DaysExt for i32 {
    fn days(self) -> Duration {
        Duration::days(i64::from(self))
    }
}

/// Resolve a [`Duration`] against the current local date.
pub trait AgoExt {
    /// The local date this far in the past.
    fn ago(self) -> NaiveDate;

    /// The local date this far in the future.
    fn hence(self) -> NaiveDate;
}

impl AgoExt for Duration {
    fn ago(self) -> NaiveDate {
        Local::now().date_naive() - self
    }

    fn hence(self) -> NaiveDate {
        Local::now().date_naive() + self
    }
}
