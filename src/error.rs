//! Error types for the airfoil-lift library.
//!
//! [`UncertainError`] covers the propagation engine: bad distribution
//! parameters, mismatched sample curves and operations whose argument could
//! leave their domain. [`TableError`] covers reading the pressure-coefficient
//! table from disk.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while constructing or combining uncertain values.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UncertainError {
    /// Error when an invalid parameter value is provided.
    #[error("Invalid parameter '{parameter}': value {value} {constraint}")]
    InvalidParameter {
        /// The name of the parameter
        parameter: &'static str,
        /// The invalid value
        value: f64,
        /// A description of the constraint that was violated
        constraint: &'static str,
    },

    /// Error when a parameter is not finite (NaN or infinite).
    #[error("Non-finite parameter '{parameter}': {value}")]
    NonFiniteParameter {
        /// The name of the parameter
        parameter: &'static str,
        /// The non-finite value
        value: f64,
    },

    /// Error when an empty data vector is provided.
    #[error("Empty data: {what} cannot be empty")]
    EmptyData {
        /// What was empty
        what: &'static str,
    },

    /// Error when sample curves do not share one length.
    #[error("Shape mismatch: curve {curve} has {actual} positions, expected {expected}")]
    ShapeMismatch {
        /// Index of the offending curve
        curve: usize,
        /// Length of the first curve
        expected: usize,
        /// Length of the offending curve
        actual: usize,
    },

    /// Error when a divisor's support contains zero.
    #[error("Division by zero: divisor support [{lower}, {upper}] contains zero")]
    DivisionByZero {
        /// Lower bound of the divisor
        lower: f64,
        /// Upper bound of the divisor
        upper: f64,
    },

    /// Error when an operation's argument can leave the operation's domain.
    #[error("Invalid argument to {operation}: support [{lower}, {upper}] {constraint}")]
    InvalidArgument {
        /// The operation being applied
        operation: &'static str,
        /// Lower bound of the argument
        lower: f64,
        /// Upper bound of the argument
        upper: f64,
        /// A description of the domain that was violated
        constraint: &'static str,
    },

    /// Error when sample count is invalid (zero).
    #[error("Invalid sample count: {count} ({reason})")]
    InvalidSampleCount {
        /// The invalid sample count
        count: usize,
        /// The reason the count is invalid
        reason: &'static str,
    },

    /// Error when a quantile value is out of range [0, 1].
    #[error("Invalid quantile: {value} (must be in range [0, 1])")]
    InvalidQuantile {
        /// The invalid quantile value
        value: f64,
    },

    /// Error when a confidence level is out of range (0, 1).
    #[error("Invalid confidence level: {value} (must be in range (0, 1))")]
    InvalidConfidence {
        /// The invalid confidence level
        value: f64,
    },
}

/// A specialized `Result` type for uncertain operations.
pub type Result<T> = std::result::Result<T, UncertainError>;

impl UncertainError {
    /// Create an error for invalid parameter with constraint.
    ///
    /// # Example
    /// ```
    /// use airfoil_lift::error::UncertainError;
    ///
    /// let error = UncertainError::invalid_parameter("std_dev", -1.0, "must be non-negative");
    /// assert!(error.to_string().contains("std_dev"));
    /// ```
    #[must_use]
    pub fn invalid_parameter(
        parameter: &'static str,
        value: f64,
        constraint: &'static str,
    ) -> Self {
        Self::InvalidParameter {
            parameter,
            value,
            constraint,
        }
    }

    /// Create an error for non-finite parameter.
    #[must_use]
    pub fn non_finite(parameter: &'static str, value: f64) -> Self {
        Self::NonFiniteParameter { parameter, value }
    }

    /// Create an error for curves of unequal length.
    ///
    /// # Example
    /// ```
    /// use airfoil_lift::error::UncertainError;
    ///
    /// let error = UncertainError::shape_mismatch(2, 3, 2);
    /// assert!(error.to_string().contains("curve 2"));
    /// ```
    #[must_use]
    pub fn shape_mismatch(curve: usize, expected: usize, actual: usize) -> Self {
        Self::ShapeMismatch {
            curve,
            expected,
            actual,
        }
    }

    /// Create an error for an argument whose support leaves an operation's domain.
    #[must_use]
    pub fn invalid_argument(
        operation: &'static str,
        lower: f64,
        upper: f64,
        constraint: &'static str,
    ) -> Self {
        Self::InvalidArgument {
            operation,
            lower,
            upper,
            constraint,
        }
    }

    /// Create an error for invalid sample count.
    #[must_use]
    pub fn invalid_sample_count(count: usize, reason: &'static str) -> Self {
        Self::InvalidSampleCount { count, reason }
    }
}

/// Errors raised while loading the pressure-coefficient table.
#[derive(Error, Debug)]
pub enum TableError {
    #[error("table file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("failed to read table {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read table data")]
    Read(#[source] std::io::Error),

    #[error("malformed row {row}: {reason}")]
    MalformedInputRow { row: usize, reason: String },

    #[error("malformed value {token:?} at row {row}, column {column}")]
    MalformedToken {
        row: usize,
        column: usize,
        token: String,
    },

    #[error("table has {actual} rows, expected {expected}")]
    WrongRowCount { expected: usize, actual: usize },

    #[error(transparent)]
    Curves(#[from] UncertainError),
}
