//! Error types for grid construction and cascade operations

use std::fmt;

/// Main error type for all grid and engine operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CascadeError {
    /// Grid width or height is zero or exceeds the supported maximum
    ///
    /// Fatal to grid construction, no partial grid is produced.
    InvalidDimensions {
        /// Requested number of columns
        width: usize,
        /// Requested number of rows
        height: usize,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Coordinates passed to a selection fall outside the grid
    OutOfRange {
        /// Requested column
        x: usize,
        /// Requested row
        y: usize,
        /// Grid width at the time of the request
        width: usize,
        /// Grid height at the time of the request
        height: usize,
    },

    /// A selection arrived while the previous cascade awaits playback
    CascadeInProgress,
}

impl fmt::Display for CascadeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(f, "Invalid grid dimensions {width}x{height}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::OutOfRange {
                x,
                y,
                width,
                height,
            } => {
                write!(
                    f,
                    "Position ({x}, {y}) is outside the {width}x{height} grid"
                )
            }
            Self::CascadeInProgress => {
                write!(f, "Previous cascade has not finished playback")
            }
        }
    }
}

impl std::error::Error for CascadeError {}

/// Convenience type alias for cascade results
pub type Result<T> = std::result::Result<T, CascadeError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> CascadeError {
    CascadeError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an out-of-range error for a grid of the given dimensions
pub const fn out_of_range(x: usize, y: usize, dimensions: (usize, usize)) -> CascadeError {
    CascadeError::OutOfRange {
        x,
        y,
        width: dimensions.0,
        height: dimensions.1,
    }
}
