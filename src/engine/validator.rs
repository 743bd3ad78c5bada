//! Input validation for fit and screening configuration and data.
//!
//! ## Purpose
//!
//! This module provides the validation functions for regression inputs,
//! Box-Cox data and search grids, and screening thresholds. It checks
//! requirements such as input lengths, finite values, and parameter bounds.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Parameter Bounds**: Enforces constraints like percentages in [0, 100].
//! * **Finite Checks**: Ensures all inputs are finite (no NaN/Inf).
//! * **Domain Preconditions**: Box-Cox inputs must be strictly positive.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective mathematical constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not transform or filter input data.
//! * This module does not provide automatic correction of invalid inputs.
//! * This module does not perform the fitting or screening itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::NtaStatError;
use crate::screening::occurrence::FeatureRow;
use crate::screening::thresholds::ThresholdConfig;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for configuration and input data.
///
/// Provides static methods for validating parameters and input data. All
/// methods return `Result<(), NtaStatError>` and fail fast upon identifying
/// the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate paired x/y arrays for regression.
    pub fn validate_xy<T: Float>(x: &[T], y: &[T], min_points: usize) -> Result<(), NtaStatError> {
        // Check 1: Non-empty arrays
        if x.is_empty() || y.is_empty() {
            return Err(NtaStatError::EmptyInput);
        }

        // Check 2: Matching lengths
        let n = x.len();
        if n != y.len() {
            return Err(NtaStatError::MismatchedInputs {
                x_len: n,
                y_len: y.len(),
            });
        }

        // Check 3: Sufficient points for the requested operation
        if n < min_points {
            return Err(NtaStatError::TooFewPoints {
                got: n,
                min: min_points,
            });
        }

        // Check 4: All values finite (combined loop for cache locality)
        for i in 0..n {
            if !x[i].is_finite() {
                return Err(NtaStatError::InvalidNumericValue(format!(
                    "x[{}]={}",
                    i,
                    x[i].to_f64().unwrap_or(f64::NAN)
                )));
            }
            if !y[i].is_finite() {
                return Err(NtaStatError::InvalidNumericValue(format!(
                    "y[{}]={}",
                    i,
                    y[i].to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        Ok(())
    }

    /// Validate Box-Cox input values: non-empty, finite, strictly positive.
    pub fn validate_positive_values<T: Float>(values: &[T]) -> Result<(), NtaStatError> {
        if values.is_empty() {
            return Err(NtaStatError::EmptyInput);
        }

        for (i, &v) in values.iter().enumerate() {
            if !v.is_finite() {
                return Err(NtaStatError::InvalidNumericValue(format!(
                    "values[{}]={}",
                    i,
                    v.to_f64().unwrap_or(f64::NAN)
                )));
            }
            if v <= T::zero() {
                return Err(NtaStatError::NonPositiveValue {
                    index: i,
                    value: v.to_f64().unwrap_or(f64::NAN),
                });
            }
        }

        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the Box-Cox lambda search grid.
    pub fn validate_lambda_grid<T: Float>(min: T, max: T, step: T) -> Result<(), NtaStatError> {
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(NtaStatError::InvalidLambdaRange {
                min: min.to_f64().unwrap_or(f64::NAN),
                max: max.to_f64().unwrap_or(f64::NAN),
            });
        }

        if !step.is_finite() || step <= T::zero() {
            return Err(NtaStatError::InvalidLambdaStep(
                step.to_f64().unwrap_or(f64::NAN),
            ));
        }

        Ok(())
    }

    /// Validate one replicate-percentage threshold.
    pub fn validate_percent<T: Float>(value: T, name: &'static str) -> Result<(), NtaStatError> {
        let hundred = T::from(100.0).unwrap();
        if !value.is_finite() || value < T::zero() || value > hundred {
            return Err(NtaStatError::InvalidPercent {
                name,
                value: value.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(())
    }

    /// Validate the CV limit.
    pub fn validate_cv_limit<T: Float>(max_cv: T) -> Result<(), NtaStatError> {
        if !max_cv.is_finite() || max_cv < T::zero() {
            return Err(NtaStatError::InvalidCvLimit(
                max_cv.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate the MRL standard-deviation multiplier.
    pub fn validate_mrl_multiplier<T: Float>(multiplier: T) -> Result<(), NtaStatError> {
        if !multiplier.is_finite() || multiplier < T::zero() {
            return Err(NtaStatError::InvalidMrlMultiplier(
                multiplier.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate a whole threshold set.
    pub fn validate_thresholds<T: Float>(config: &ThresholdConfig<T>) -> Result<(), NtaStatError> {
        Self::validate_percent(
            config.sample_replicate_min_percent,
            "sample replicate minimum",
        )?;
        Self::validate_percent(
            config.blank_replicate_min_percent,
            "blank replicate minimum",
        )?;
        Self::validate_cv_limit(config.max_cv)?;
        Self::validate_mrl_multiplier(config.mrl_std_multiplier)?;
        Ok(())
    }

    /// Validate a slice of feature rows for screening.
    ///
    /// Only emptiness is checked here; malformed rows (empty feature
    /// identifier) are the screen's own concern and are skipped, not fatal.
    pub fn validate_rows<T: Float>(rows: &[FeatureRow<T>]) -> Result<(), NtaStatError> {
        if rows.is_empty() {
            return Err(NtaStatError::EmptyInput);
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), NtaStatError> {
        if let Some(param) = duplicate_param {
            return Err(NtaStatError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
