//! Error types for curve operations.

use kudu_core::types::{Currency, Date};
use kudu_core::KuduError;
use thiserror::Error;

/// A specialized Result type for curve operations.
pub type CurveResult<T> = Result<T, CurveError>;

/// Error types for curve construction and lookup.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    /// Not enough data points to build a curve.
    #[error("Insufficient points: need at least {required}, got {got}")]
    InsufficientPoints {
        /// Minimum required points.
        required: usize,
        /// Actual number of points provided.
        got: usize,
    },

    /// Parallel input arrays differ in length.
    #[error("Length mismatch: {dates} dates but {values} values")]
    LengthMismatch {
        /// Number of dates.
        dates: usize,
        /// Number of values.
        values: usize,
    },

    /// Pillar dates are not strictly increasing.
    #[error("Non-monotonic dates at index {index}: {prev} >= {current}")]
    NonMonotonicDates {
        /// Index where monotonicity violation occurred.
        index: usize,
        /// Previous pillar date.
        prev: Date,
        /// Current pillar date.
        current: Date,
    },

    /// A lookup was made before the curve's anchor date.
    #[error("Date {date} is before the curve anchor {anchor}")]
    DateBeforeAnchor {
        /// Requested date.
        date: Date,
        /// Curve anchor date.
        anchor: Date,
    },

    /// A cash flow is in a different currency from the discount curve.
    #[error("Currency mismatch: curve is {curve}, cash flow is {cashflow}")]
    CurrencyMismatch {
        /// Currency of the curve.
        curve: Currency,
        /// Currency of the offending cash flow.
        cashflow: Currency,
    },

    /// Invalid value (NaN, Inf, or domain error).
    #[error("Invalid value: {reason}")]
    InvalidValue {
        /// Description of why value is invalid.
        reason: String,
    },

    /// Error from the core date primitives.
    #[error(transparent)]
    Core(#[from] KuduError),
}

impl CurveError {
    /// Creates an insufficient points error.
    #[must_use]
    pub fn insufficient_points(required: usize, got: usize) -> Self {
        Self::InsufficientPoints { required, got }
    }

    /// Creates an invalid value error.
    #[must_use]
    pub fn invalid_value(reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            reason: reason.into(),
        }
    }
}
