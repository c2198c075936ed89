//! Error types for the Kudu core primitives.

use thiserror::Error;

/// A specialized Result type for core operations.
pub type KuduResult<T> = Result<T, KuduError>;

/// The error type for date, tenor and calendar operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KuduError {
    /// Error in date calculations or invalid date.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// A tenor string could not be parsed.
    #[error("Invalid tenor: '{input}' (expected e.g. 3M, 1Y, 2W, 10D)")]
    InvalidTenor {
        /// The offending input.
        input: String,
    },

    /// A floating rate index name could not be parsed.
    #[error("Invalid rate index: '{input}' (expected CCY.NAME.TENOR, e.g. ZAR.JIBAR.3M)")]
    InvalidIndex {
        /// The offending input.
        input: String,
    },

    /// No calendar is registered under the requested name.
    #[error("Unknown calendar: {name}")]
    UnknownCalendar {
        /// The requested calendar name.
        name: String,
    },

    /// Currency code is not supported.
    #[error("Unknown currency code: {code}")]
    UnknownCurrency {
        /// The requested code.
        code: String,
    },

    /// Day count convention name is not supported.
    #[error("Unknown day count convention: {name}")]
    UnknownDayCount {
        /// The requested name.
        name: String,
    },
}

impl KuduError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates an invalid tenor error.
    #[must_use]
    pub fn invalid_tenor(input: impl Into<String>) -> Self {
        Self::InvalidTenor {
            input: input.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = KuduError::invalid_date("2024-02-30 is not a valid date");
        assert!(err.to_string().contains("Invalid date"));
    }

    #[test]
    fn test_tenor_error_mentions_input() {
        let err = KuduError::invalid_tenor("3Q");
        assert!(err.to_string().contains("'3Q'"));
    }
}
