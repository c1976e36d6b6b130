use tagdom_fluent::{CheckError, ShouldExt};

// ============================================================================
// Passing checks
// ============================================================================

#[test]
fn test_start_with_passes() {
    "kotlin".should().start_with("kot");
}

#[test]
fn test_end_with_passes() {
    "kotlin".should().end_with("in");
}

#[test]
fn test_checks_chain() {
    "kotlin".should().start_with("kot").end_with("in");
}

#[test]
fn test_empty_affixes_always_pass() {
    "kotlin".should().start_with("").end_with("");
    "".should().start_with("").end_with("");
}

// ============================================================================
// Failing checks
// ============================================================================

#[test]
#[should_panic(expected = "does not end with")]
fn test_end_with_wrong_suffix_panics() {
    "kotlin".should().end_with("kot");
}

#[test]
#[should_panic(expected = "does not start with")]
fn test_start_with_wrong_prefix_panics() {
    "kotlin".should().start_with("lin");
}

#[test]
fn test_failure_can_be_caught() {
    let result = std::panic::catch_unwind(|| {
        "kotlin".should().end_with("kot");
    });
    assert!(result.is_err(), "suffix check should have failed");
}

// ============================================================================
// Fallible variants
// ============================================================================

#[test]
fn test_try_variants_chain_with_question_mark() {
    fn run() -> Result<(), CheckError> {
        "kotlin".should().try_start_with("kot")?.try_end_with("in")?;
        Ok(())
    }
    assert_eq!(run(), Ok(()));
}

#[test]
fn test_try_end_with_reports_value_and_suffix() {
    let err = "kotlin".should().try_end_with("kot").unwrap_err();
    assert_eq!(
        err,
        CheckError::MissingSuffix {
            value: "kotlin".to_string(),
            suffix: "kot".to_string(),
        }
    );
    assert_eq!(err.to_string(), "\"kotlin\" does not end with \"kot\"");
}

#[test]
fn test_try_start_with_reports_value_and_prefix() {
    let err = "kotlin".should().try_start_with("java").unwrap_err();
    assert_eq!(err.to_string(), "\"kotlin\" does not start with \"java\"");
}
