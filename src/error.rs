//! Error types.
//!
//! Only caller-input problems are errors. Data gaps discovered while
//! planning (unknown course codes, unplaceable sections, mirroring gaps)
//! are accumulated in the returned values instead.

use thiserror::Error;

/// Result type for timetable operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised before any calculation runs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Fewer than two periods per day leaves no teaching period after planning.
    #[error("periods per day must be at least 2, got {0}")]
    InvalidPeriodsPerDay(u32),

    /// Maximum class size must be positive.
    #[error("maximum class size must be greater than zero")]
    InvalidClassSize,

    /// Two catalog entries share a course code.
    #[error("duplicate course code in catalog: {0}")]
    DuplicateCourse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            Error::InvalidPeriodsPerDay(1).to_string(),
            "periods per day must be at least 2, got 1"
        );
        assert_eq!(
            Error::DuplicateCourse("ENG9".into()).to_string(),
            "duplicate course code in catalog: ENG9"
        );
    }
}
