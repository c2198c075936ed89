//! Error types for products and their valuation protocol.

use kudu_core::KuduError;
use kudu_curves::CurveError;
use thiserror::Error;

/// A specialized Result type for product operations.
pub type ProductResult<T> = Result<T, ProductError>;

/// Errors raised by instruments and the valuation protocol.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProductError {
    /// Cash flows were requested before every required fixing was injected.
    #[error("Index values not set for {index}")]
    IndicesNotSet {
        /// The observable with missing fixings.
        index: String,
    },

    /// The number of injected values differs from the number of required dates.
    #[error("Argument mismatch: expected {expected} values, got {got}")]
    ArgumentMismatch {
        /// Number of required index dates.
        expected: usize,
        /// Number of values supplied.
        got: usize,
    },

    /// An observable the product does not depend on.
    #[error("Unknown index: {index}")]
    UnknownIndex {
        /// The offending observable.
        index: String,
    },

    /// A protocol call that needs a value date was made before one was set.
    #[error("Value date not set")]
    ValueDateNotSet,

    /// Schedule arrays are inconsistent or not strictly increasing.
    #[error("Invalid schedule: {reason}")]
    InvalidSchedule {
        /// What is wrong with the schedule.
        reason: String,
    },

    /// Contract terms that cannot describe a real instrument.
    #[error("Invalid terms: {reason}")]
    InvalidTerms {
        /// What is wrong with the terms.
        reason: String,
    },

    /// Date arithmetic failure.
    #[error(transparent)]
    Core(#[from] KuduError),

    /// Curve lookup failure.
    #[error(transparent)]
    Curve(#[from] CurveError),
}

impl ProductError {
    /// Creates an invalid schedule error.
    #[must_use]
    pub fn invalid_schedule(reason: impl Into<String>) -> Self {
        Self::InvalidSchedule {
            reason: reason.into(),
        }
    }

    /// Creates an invalid terms error.
    #[must_use]
    pub fn invalid_terms(reason: impl Into<String>) -> Self {
        Self::InvalidTerms {
            reason: reason.into(),
        }
    }

    /// Creates an unknown index error.
    #[must_use]
    pub fn unknown_index(index: impl ToString) -> Self {
        Self::UnknownIndex {
            index: index.to_string(),
        }
    }

    /// Creates an indices-not-set error.
    #[must_use]
    pub fn indices_not_set(index: impl ToString) -> Self {
        Self::IndicesNotSet {
            index: index.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ProductError::ArgumentMismatch {
            expected: 3,
            got: 2,
        };
        assert_eq!(err.to_string(), "Argument mismatch: expected 3 values, got 2");
        assert_eq!(ProductError::ValueDateNotSet.to_string(), "Value date not set");
    }
}
