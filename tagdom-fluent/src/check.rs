//! Fluent prefix/suffix checks over strings.
//!
//! `"kotlin".should().start_with("kot").end_with("in")` — each check
//! returns the wrapper so checks chain; a failed check panics with a
//! message naming the value and the unmet condition. The `try_` variants
//! return [`CheckError`] instead for callers that want to handle the
//! mismatch.

use thiserror::Error;

/// A failed fluent check.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckError {
    #[error("{value:?} does not start with {prefix:?}")]
    MissingPrefix { value: String, prefix: String },

    #[error("{value:?} does not end with {suffix:?}")]
    MissingSuffix { value: String, suffix: String },
}

/// Wrapper returned by [`ShouldExt::should`].
#[derive(Debug, Clone, Copy)]
pub struct Should<'a> {
    value: &'a str,
}

impl<'a> Should<'a> {
    pub fn try_start_with(self, prefix: &str) -> Result<Should<'a>, CheckError> {
        if self.value.starts_with(prefix) {
            Ok(self)
        } else {
            Err(CheckError::MissingPrefix {
                value: self.value.to_string(),
                prefix: prefix.to_string(),
            })
        }
    }

    pub fn try_end_with(self, suffix: &str) -> Result<Should<'a>, CheckError> {
        if self.value.ends_with(suffix) {
            Ok(self)
        } else {
            Err(CheckError::MissingSuffix {
                value: self.value.to_string(),
                suffix: suffix.to_string(),
            })
        }
    }

    /// Panics when the value does not start with `prefix`.
    #[track_caller]
    pub fn start_with(self, prefix: &str) -> Should<'a> {
        match self.try_start_with(prefix) {
            Ok(next) => next,
            Err(err) => panic!("{err}"),
        }
    }

    /// Panics when the value does not end with `suffix`.
    #[track_caller]
    pub fn end_with(self, suffix: &str) -> Should<'a> {
        match self.try_end_with(suffix) {
            Ok(next) => next,
            Err(err) => panic!("{err}"),
        }
    }
}

/// Entry point for fluent checks on any string.
pub trait ShouldExt {
    fn should(&self) -> Should<'_>;
}

impl ShouldExt for str {
    fn should(&self) -> Should<'_> {
        Should { value: self }
    }
}
