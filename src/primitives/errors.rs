//! Error types for NTA numeric operations.
//!
//! ## Purpose
//!
//! This module defines error conditions that can occur during curve fitting,
//! prediction-interval estimation, Box-Cox optimization, and occurrence
//! screening, including input validation and parameter constraints.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., actual vs. expected lengths).
//! * **Deferred**: Errors are often caught and stored during builder configuration.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Input validation**: Empty arrays, mismatched lengths, non-finite values.
//! 2. **Table bounds**: Confidence levels and degrees of freedom outside the
//!    Student's-t table are hard errors, never silent lookups.
//! 3. **Domain preconditions**: Box-Cox inputs must be strictly positive.
//! 4. **Threshold constraints**: Replicate percentages, CV limits, and MRL
//!    multipliers have bounded domains.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Error messages are consistent in tone and formatting.
//! * Degenerate fits (NaN R-squared, all-zero quadratic coefficients) are
//!   sentinels, not errors; nothing here models them.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for NTA numeric operations.
#[derive(Debug, Clone, PartialEq)]
pub enum NtaStatError {
    /// Input arrays are empty.
    EmptyInput,

    /// `x` and `y` arrays must have the same number of elements.
    MismatchedInputs {
        /// Number of elements in the `x` array.
        x_len: usize,
        /// Number of elements in the `y` array.
        y_len: usize,
    },

    /// Input data contains NaN or infinite values.
    InvalidNumericValue(String),

    /// Number of points is below the minimum requirement for the operation.
    TooFewPoints {
        /// Number of points provided.
        got: usize,
        /// Minimum required points.
        min: usize,
    },

    /// Box-Cox input value is zero or negative; the transform is undefined there.
    NonPositiveValue {
        /// Index of the offending value.
        index: usize,
        /// The offending value.
        value: f64,
    },

    /// Confidence level string is not one of the tabulated levels.
    UnsupportedConfidenceLevel(String),

    /// Degrees of freedom fall outside the Student's-t table range.
    DegreesOfFreedomOutOfRange {
        /// The degrees of freedom implied by the input (n - 2).
        df: usize,
        /// Largest tabulated degrees of freedom.
        max: usize,
    },

    /// Box-Cox search range must be finite with `min <= max`.
    InvalidLambdaRange {
        /// Lower bound of the lambda grid.
        min: f64,
        /// Upper bound of the lambda grid.
        max: f64,
    },

    /// Box-Cox grid step must be positive and finite.
    InvalidLambdaStep(f64),

    /// Replicate threshold percentage must be in the range [0, 100].
    InvalidPercent {
        /// Name of the threshold field.
        name: &'static str,
        /// The percentage provided.
        value: f64,
    },

    /// CV limit must be non-negative and finite.
    InvalidCvLimit(f64),

    /// MRL standard-deviation multiplier must be non-negative and finite.
    InvalidMrlMultiplier(f64),

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for NtaStatError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Input arrays are empty"),
            Self::MismatchedInputs { x_len, y_len } => {
                write!(f, "Length mismatch: x has {x_len} points, y has {y_len}")
            }
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::TooFewPoints { got, min } => {
                write!(f, "Too few points: got {got}, need at least {min}")
            }
            Self::NonPositiveValue { index, value } => {
                write!(
                    f,
                    "Non-positive value at index {index}: {value} (Box-Cox requires values > 0)"
                )
            }
            Self::UnsupportedConfidenceLevel(s) => {
                write!(
                    f,
                    "Unsupported confidence level: '{s}' (expected one of 50%, 60%, 70%, 80%, 90%, 95%, 98%, 99%)"
                )
            }
            Self::DegreesOfFreedomOutOfRange { df, max } => {
                write!(
                    f,
                    "Degrees of freedom out of range: {df} (table covers 1 through {max})"
                )
            }
            Self::InvalidLambdaRange { min, max } => {
                write!(
                    f,
                    "Invalid lambda range: [{min}, {max}] (must be finite with min <= max)"
                )
            }
            Self::InvalidLambdaStep(step) => {
                write!(f, "Invalid lambda step: {step} (must be > 0 and finite)")
            }
            Self::InvalidPercent { name, value } => {
                write!(f, "Invalid {name}: {value} (must be in [0, 100])")
            }
            Self::InvalidCvLimit(cv) => {
                write!(f, "Invalid CV limit: {cv} (must be >= 0 and finite)")
            }
            Self::InvalidMrlMultiplier(mult) => {
                write!(f, "Invalid MRL multiplier: {mult} (must be >= 0 and finite)")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for NtaStatError {}
