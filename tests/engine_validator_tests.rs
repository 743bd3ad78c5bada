#![cfg(feature = "dev")]

//! Unit tests for the engine validator.
//!
//! These tests verify every validation check and the error each one
//! raises, including the rendered messages callers see.
//!
//! ## Test Organization
//!
//! 1. Paired x/y arrays - emptiness, lengths, counts, finiteness
//! 2. Box-Cox inputs - positivity and the lambda grid
//! 3. Threshold parameters - percents, CV limit, MRL multiplier
//! 4. Screening rows and builder duplicates
//! 5. Error messages - Display spot checks

use ntastat::internals::engine::validator::Validator;
use ntastat::internals::primitives::errors::NtaStatError;
use ntastat::internals::screening::occurrence::FeatureRow;
use ntastat::internals::screening::thresholds::ThresholdConfig;

// ============================================================================
// Paired x/y Arrays
// ============================================================================

/// Test that well-formed paired arrays pass.
#[test]
fn test_xy_ok() {
    let x = [1.0, 2.0, 3.0];
    let y = [2.0, 4.0, 6.0];
    assert!(Validator::validate_xy(&x, &y, 2).is_ok());
}

/// Test that empty arrays are rejected.
#[test]
fn test_xy_empty() {
    let empty: [f64; 0] = [];
    let y = [1.0];
    assert_eq!(
        Validator::validate_xy(&empty, &empty, 2),
        Err(NtaStatError::EmptyInput)
    );
    assert_eq!(
        Validator::validate_xy(&empty, &y, 2),
        Err(NtaStatError::EmptyInput)
    );
}

/// Test that mismatched lengths are rejected with both counts.
#[test]
fn test_xy_mismatched_lengths() {
    let x = [1.0, 2.0];
    let y = [1.0, 2.0, 3.0];
    assert_eq!(
        Validator::validate_xy(&x, &y, 2),
        Err(NtaStatError::MismatchedInputs { x_len: 2, y_len: 3 })
    );
}

/// Test the minimum point count.
#[test]
fn test_xy_too_few_points() {
    let x = [1.0, 2.0];
    let y = [1.0, 2.0];
    assert_eq!(
        Validator::validate_xy(&x, &y, 3),
        Err(NtaStatError::TooFewPoints { got: 2, min: 3 })
    );
    assert!(Validator::validate_xy(&x, &y, 2).is_ok());
}

/// Test that non-finite values are rejected and located.
#[test]
fn test_xy_non_finite_values() {
    let x = [1.0, f64::NAN, 3.0];
    let y = [1.0, 2.0, 3.0];
    assert_eq!(
        Validator::validate_xy(&x, &y, 2),
        Err(NtaStatError::InvalidNumericValue(String::from("x[1]=NaN")))
    );

    let x = [1.0, 2.0, 3.0];
    let y = [f64::INFINITY, 2.0, 3.0];
    assert_eq!(
        Validator::validate_xy(&x, &y, 2),
        Err(NtaStatError::InvalidNumericValue(String::from("y[0]=inf")))
    );
}

// ============================================================================
// Box-Cox Inputs
// ============================================================================

/// Test that strictly positive values pass.
#[test]
fn test_positive_values_ok() {
    let values = [0.1, 1.0, 250.0];
    assert!(Validator::validate_positive_values(&values).is_ok());
}

/// Test that an empty value slice is rejected.
#[test]
fn test_positive_values_empty() {
    let values: [f64; 0] = [];
    assert_eq!(
        Validator::validate_positive_values(&values),
        Err(NtaStatError::EmptyInput)
    );
}

/// Test that zero and negative values are rejected with their index.
#[test]
fn test_positive_values_non_positive() {
    let with_zero = [1.0, 0.0, 2.0];
    assert_eq!(
        Validator::validate_positive_values(&with_zero),
        Err(NtaStatError::NonPositiveValue {
            index: 1,
            value: 0.0
        })
    );

    let with_negative = [1.0, 2.0, -3.5];
    assert_eq!(
        Validator::validate_positive_values(&with_negative),
        Err(NtaStatError::NonPositiveValue {
            index: 2,
            value: -3.5
        })
    );
}

/// Test that NaN is caught before the positivity check.
#[test]
fn test_positive_values_nan() {
    let values = [1.0, f64::NAN];
    assert_eq!(
        Validator::validate_positive_values(&values),
        Err(NtaStatError::InvalidNumericValue(String::from(
            "values[1]=NaN"
        )))
    );
}

/// Test lambda grid acceptance and rejection.
#[test]
fn test_lambda_grid() {
    assert!(Validator::validate_lambda_grid(-5.0, 5.0, 0.01).is_ok());
    assert!(Validator::validate_lambda_grid(0.0, 0.0, 1.0).is_ok());

    assert_eq!(
        Validator::validate_lambda_grid(2.0, 1.0, 0.1),
        Err(NtaStatError::InvalidLambdaRange { min: 2.0, max: 1.0 })
    );
    assert!(Validator::validate_lambda_grid(f64::NAN, 1.0, 0.1).is_err());
    assert!(Validator::validate_lambda_grid(0.0, f64::INFINITY, 0.1).is_err());
}

/// Test lambda step rejection.
#[test]
fn test_lambda_step() {
    assert_eq!(
        Validator::validate_lambda_grid(-1.0, 1.0, 0.0),
        Err(NtaStatError::InvalidLambdaStep(0.0))
    );
    assert_eq!(
        Validator::validate_lambda_grid(-1.0, 1.0, -0.5),
        Err(NtaStatError::InvalidLambdaStep(-0.5))
    );
    assert!(Validator::validate_lambda_grid(-1.0, 1.0, f64::NAN).is_err());
}

// ============================================================================
// Threshold Parameters
// ============================================================================

/// Test the percent range including both endpoints.
#[test]
fn test_percent_range() {
    assert!(Validator::validate_percent(0.0, "sample replicate minimum").is_ok());
    assert!(Validator::validate_percent(100.0, "sample replicate minimum").is_ok());
    assert!(Validator::validate_percent(66.7, "sample replicate minimum").is_ok());

    assert_eq!(
        Validator::validate_percent(-0.1, "sample replicate minimum"),
        Err(NtaStatError::InvalidPercent {
            name: "sample replicate minimum",
            value: -0.1
        })
    );
    assert!(Validator::validate_percent(100.1, "sample replicate minimum").is_err());
    assert!(Validator::validate_percent(f64::NAN, "sample replicate minimum").is_err());
}

/// Test the CV limit bounds.
#[test]
fn test_cv_limit() {
    assert!(Validator::validate_cv_limit(0.0).is_ok());
    assert!(Validator::validate_cv_limit(1.25).is_ok());

    assert_eq!(
        Validator::validate_cv_limit(-1.0),
        Err(NtaStatError::InvalidCvLimit(-1.0))
    );
    assert!(Validator::validate_cv_limit(f64::NAN).is_err());
    assert!(Validator::validate_cv_limit(f64::INFINITY).is_err());
}

/// Test the MRL multiplier bounds.
#[test]
fn test_mrl_multiplier() {
    assert!(Validator::validate_mrl_multiplier(0.0).is_ok());
    assert!(Validator::validate_mrl_multiplier(3.0).is_ok());

    assert_eq!(
        Validator::validate_mrl_multiplier(-2.0),
        Err(NtaStatError::InvalidMrlMultiplier(-2.0))
    );
    assert!(Validator::validate_mrl_multiplier(f64::NAN).is_err());
}

/// Test whole-set validation against both presets and a bad set.
#[test]
fn test_thresholds() {
    assert!(Validator::validate_thresholds(&ThresholdConfig::<f64>::preset_a()).is_ok());
    assert!(Validator::validate_thresholds(&ThresholdConfig::<f64>::preset_b()).is_ok());

    let bad = ThresholdConfig {
        sample_replicate_min_percent: 150.0,
        blank_replicate_min_percent: 66.7,
        max_cv: 1.25,
        mrl_std_multiplier: 3.0,
    };
    assert_eq!(
        Validator::validate_thresholds(&bad),
        Err(NtaStatError::InvalidPercent {
            name: "sample replicate minimum",
            value: 150.0
        })
    );

    let bad_blank = ThresholdConfig {
        sample_replicate_min_percent: 66.7,
        blank_replicate_min_percent: -5.0,
        max_cv: 1.25,
        mrl_std_multiplier: 3.0,
    };
    assert_eq!(
        Validator::validate_thresholds(&bad_blank),
        Err(NtaStatError::InvalidPercent {
            name: "blank replicate minimum",
            value: -5.0
        })
    );
}

// ============================================================================
// Screening Rows and Builder Duplicates
// ============================================================================

/// Test that an empty row slice is rejected and a populated one passes.
#[test]
fn test_rows() {
    let empty: Vec<FeatureRow<f64>> = Vec::new();
    assert_eq!(
        Validator::validate_rows(&empty),
        Err(NtaStatError::EmptyInput)
    );

    let rows = vec![FeatureRow::<f64> {
        feature_id: String::from("F1"),
        blank: None,
        occurrences: Vec::new(),
    }];
    assert!(Validator::validate_rows(&rows).is_ok());
}

/// Test duplicate-parameter detection.
#[test]
fn test_no_duplicates() {
    assert!(Validator::validate_no_duplicates(None).is_ok());
    assert_eq!(
        Validator::validate_no_duplicates(Some("intervals")),
        Err(NtaStatError::DuplicateParameter {
            parameter: "intervals"
        })
    );
}

// ============================================================================
// Error Messages
// ============================================================================

/// Test the rendered messages of the errors surfaced most often.
#[test]
fn test_error_messages() {
    assert_eq!(
        NtaStatError::EmptyInput.to_string(),
        "Input arrays are empty"
    );
    assert_eq!(
        NtaStatError::MismatchedInputs { x_len: 2, y_len: 3 }.to_string(),
        "Length mismatch: x has 2 points, y has 3"
    );
    assert_eq!(
        NtaStatError::TooFewPoints { got: 2, min: 3 }.to_string(),
        "Too few points: got 2, need at least 3"
    );
    assert_eq!(
        NtaStatError::NonPositiveValue {
            index: 4,
            value: -1.5
        }
        .to_string(),
        "Non-positive value at index 4: -1.5 (Box-Cox requires values > 0)"
    );
    assert_eq!(
        NtaStatError::InvalidLambdaRange { min: 2.0, max: 1.0 }.to_string(),
        "Invalid lambda range: [2, 1] (must be finite with min <= max)"
    );
    assert_eq!(
        NtaStatError::InvalidPercent {
            name: "sample replicate minimum",
            value: 150.0
        }
        .to_string(),
        "Invalid sample replicate minimum: 150 (must be in [0, 100])"
    );
    assert_eq!(
        NtaStatError::DuplicateParameter { parameter: "step" }.to_string(),
        "Parameter 'step' was set multiple times. Each parameter can only be configured once."
    );
}
