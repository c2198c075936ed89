//! Error types for the pricing routines.

use kudu_core::KuduError;
use kudu_curves::CurveError;
use kudu_products::ProductError;
use thiserror::Error;

/// Error type for all analytics operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AnalyticsError {
    /// An input is outside the domain of the calculation.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A result key was looked up but never stored.
    #[error("key not found: {0}")]
    KeyNotFound(String),

    /// A result key was stored twice.
    #[error("duplicate key: {0}")]
    DuplicateKey(String),

    /// A closed-form solve hit a zero or non-finite denominator.
    #[error("division by zero: {0}")]
    DivisionByZero(String),

    /// A schedule could not be built from the contract terms.
    #[error("invalid schedule: {0}")]
    InvalidSchedule(String),

    /// Date or convention error.
    #[error(transparent)]
    Core(#[from] KuduError),

    /// Curve construction or lookup error.
    #[error(transparent)]
    Curve(#[from] CurveError),

    /// Product protocol error.
    #[error(transparent)]
    Product(#[from] ProductError),
}

/// Result type alias for analytics operations.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

impl AnalyticsError {
    /// Creates an invalid argument error.
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Creates an invalid schedule error.
    #[must_use]
    pub fn invalid_schedule(message: impl Into<String>) -> Self {
        Self::InvalidSchedule(message.into())
    }
}
