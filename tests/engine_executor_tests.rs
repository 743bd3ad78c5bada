#![cfg(feature = "dev")]

//! Unit tests for the engine executor.
//!
//! These tests verify that each run function assembles its report from
//! the right pieces: fitted coefficients, optional bands, likelihood
//! curves, and the paired A/B screening tables.
//!
//! ## Test Organization
//!
//! 1. Calibration runs - with and without a prediction band
//! 2. Box-Cox runs - winner, likelihood, and curve assembly
//! 3. Screening runs - paired threshold sets over one row list
//! 4. Config defaults - stock values of the three run configs

use approx::assert_relative_eq;
use core::f64::consts::E;
use ntastat::internals::engine::executor::{
    run_box_cox, run_cal_curve, run_screen, BoxCoxConfig, CalCurveConfig, ScreenConfig,
};
use ntastat::internals::math::ttable::ConfidenceLevel;
use ntastat::internals::primitives::errors::NtaStatError;
use ntastat::internals::screening::occurrence::{FeatureRow, Occurrence, Outcome};
use ntastat::internals::screening::thresholds::ThresholdConfig;

fn screen_fixture() -> Vec<FeatureRow<f64>> {
    vec![
        FeatureRow {
            feature_id: String::from("F00172"),
            blank: None,
            occurrences: vec![Occurrence {
                sample: String::from("Pool_1"),
                detection_count: 3,
                replicate_pct: 100.0,
                cv: 1.0,
                mean: 50.0,
            }],
        },
        FeatureRow {
            feature_id: String::new(),
            blank: None,
            occurrences: vec![],
        },
    ]
}

// ============================================================================
// Calibration Runs
// ============================================================================

/// Test a run without intervals.
///
/// Verifies the fit is attached, the band stays empty, and the point
/// count records the input size.
#[test]
fn test_cal_curve_without_band() {
    let x = [0.0, 1.0, 2.0];
    let y = [1.0, 3.0, 5.0];
    let config = CalCurveConfig { intervals: None };

    let curve = run_cal_curve(&x, &y, &config).unwrap();

    assert_relative_eq!(curve.fit.slope, 2.0, epsilon = 1e-12);
    assert_relative_eq!(curve.fit.intercept, 1.0, epsilon = 1e-12);
    assert_eq!(curve.points, 3);
    assert_eq!(curve.level, None);
    assert!(curve.band.is_none());
    assert!(!curve.has_band());
    assert_relative_eq!(curve.predict(3.0), 7.0, epsilon = 1e-12);
}

/// Test a run with a 95% band on residual-free data.
#[test]
fn test_cal_curve_with_band() {
    let x = [0.0, 1.0, 2.0];
    let y = [1.0, 3.0, 5.0];
    let config = CalCurveConfig {
        intervals: Some(ConfidenceLevel::P95),
    };

    let curve = run_cal_curve(&x, &y, &config).unwrap();

    assert_eq!(curve.level, Some(ConfidenceLevel::P95));
    assert!(curve.has_band());

    let band = curve.band.as_ref().unwrap();
    assert_eq!(band.len(), 3);
    for point in band {
        assert_relative_eq!(point.lower, point.y_hat, epsilon = 1e-12);
        assert_relative_eq!(point.upper, point.y_hat, epsilon = 1e-12);
    }
}

/// Test the band margin against hand arithmetic.
///
/// For x = [0, 1, 2], y = [0, 2, 3] the fit leaves SSE = 1/6 at df = 1,
/// and the 95% margin at the mean is 12.71 * sqrt(2/9).
#[test]
fn test_cal_curve_band_margin() {
    let x = [0.0, 1.0, 2.0];
    let y = [0.0, 2.0, 3.0];
    let config = CalCurveConfig {
        intervals: Some(ConfidenceLevel::P95),
    };

    let curve = run_cal_curve(&x, &y, &config).unwrap();
    let band = curve.band.as_ref().unwrap();

    let expected = 12.71 * (2.0f64 / 9.0).sqrt();
    assert_relative_eq!(band[1].upper - band[1].y_hat, expected, epsilon = 1e-9);
}

/// Test that a band request outside the t table fails the run.
#[test]
fn test_cal_curve_band_df_error() {
    let x: Vec<f64> = (0..23).map(|i| i as f64).collect();
    let y: Vec<f64> = x.iter().map(|&v| 2.0 * v).collect();
    let config = CalCurveConfig {
        intervals: Some(ConfidenceLevel::P95),
    };

    let result = run_cal_curve(&x, &y, &config);
    assert_eq!(
        result,
        Err(NtaStatError::DegreesOfFreedomOutOfRange { df: 21, max: 20 })
    );
}

/// Test that two points succeed when no band is requested.
#[test]
fn test_cal_curve_two_points_without_band() {
    let x = [0.0, 1.0];
    let y = [1.0, 3.0];
    let config = CalCurveConfig { intervals: None };

    let curve = run_cal_curve(&x, &y, &config).unwrap();
    assert_relative_eq!(curve.fit.slope, 2.0, epsilon = 1e-12);
    assert_eq!(curve.points, 2);
}

// ============================================================================
// Box-Cox Runs
// ============================================================================

/// Test the assembled report for log-normal shaped data.
///
/// The fixture's logs are [-2, -1, 0, 1, 2], so the scan picks lambda 0
/// with log-likelihood -(5/2) * ln(2), and the [-2, 2] grid at step 0.25
/// carries 17 candidates.
#[test]
fn test_box_cox_run() {
    let values = [E.powi(-2), E.powi(-1), 1.0, E, E * E];
    let config = BoxCoxConfig {
        lambda_min: -2.0,
        lambda_max: 2.0,
        lambda_step: 0.25,
    };

    let report = run_box_cox(&values, &config);

    assert_eq!(report.lambda, 0.0);
    assert_relative_eq!(report.log_likelihood, -2.5 * 2.0f64.ln(), epsilon = 1e-9);
    assert_eq!(report.curve.len(), 17);
}

/// Test that the reported likelihood is the curve maximum.
#[test]
fn test_box_cox_likelihood_is_curve_maximum() {
    let values = [E.powi(-2), E.powi(-1), 1.0, E, E * E];
    let config = BoxCoxConfig {
        lambda_min: -1.0,
        lambda_max: 1.0,
        lambda_step: 0.1,
    };

    let report = run_box_cox(&values, &config);

    for point in &report.curve {
        assert!(point.log_likelihood <= report.log_likelihood);
    }
}

/// Test that the report's transform applies the winning lambda.
#[test]
fn test_box_cox_transform_uses_winner() {
    let values = [E.powi(-2), E.powi(-1), 1.0, E, E * E];
    let config = BoxCoxConfig {
        lambda_min: -2.0,
        lambda_max: 2.0,
        lambda_step: 0.5,
    };

    let report = run_box_cox(&values, &config);

    // Winner is lambda = 0, the log transform.
    assert_relative_eq!(report.transform(E), 1.0, epsilon = 1e-12);
    assert_relative_eq!(report.transform(1.0), 0.0, epsilon = 1e-12);
}

// ============================================================================
// Screening Runs
// ============================================================================

/// Test one run feeding both threshold sets.
///
/// The single occurrence has CV 1.0: under preset A it passes the CV
/// gate, under preset B it fails, so the paired tables disagree while
/// sharing the same skipped-row count.
#[test]
fn test_screen_run_pairs_thresholds() {
    let report = run_screen(&screen_fixture(), &ScreenConfig::default());

    assert_eq!(report.skipped_rows, 1);
    assert_eq!(report.features_screened(), 1);

    assert_eq!(report.a.features[0].outcome, Outcome::PassCvOverMrl);
    assert_eq!(report.b.features[0].outcome, Outcome::FailCvOverMrl);

    assert_eq!(report.a.counts.occurrences.cv_pass, 1);
    assert_eq!(report.b.counts.occurrences.cv_pass, 0);
    assert_eq!(report.b.counts.occurrences.cv_fail, 1);
}

/// Test that each table remembers the thresholds that produced it.
#[test]
fn test_screen_run_records_configs() {
    let report = run_screen(&screen_fixture(), &ScreenConfig::default());

    assert_eq!(report.a.config, ThresholdConfig::preset_a());
    assert_eq!(report.b.config, ThresholdConfig::preset_b());
}

/// Test outcome lookup by feature identifier.
#[test]
fn test_screen_run_outcome_lookup() {
    let report = run_screen(&screen_fixture(), &ScreenConfig::default());

    assert_eq!(report.a.outcome_of("F00172"), Some(Outcome::PassCvOverMrl));
    assert_eq!(report.a.outcome_of("F99999"), None);
}

// ============================================================================
// Config Defaults
// ============================================================================

/// Test the stock calibration config.
#[test]
fn test_cal_curve_config_default() {
    assert_eq!(CalCurveConfig::default().intervals, None);
}

/// Test the stock Box-Cox grid.
#[test]
fn test_box_cox_config_default() {
    let config: BoxCoxConfig<f64> = BoxCoxConfig::default();
    assert_eq!(config.lambda_min, -5.0);
    assert_eq!(config.lambda_max, 5.0);
    assert_eq!(config.lambda_step, 0.01);
}

/// Test the stock screening presets.
#[test]
fn test_screen_config_default() {
    let config: ScreenConfig<f64> = ScreenConfig::default();
    assert_eq!(config.thresholds_a, ThresholdConfig::preset_a());
    assert_eq!(config.thresholds_b, ThresholdConfig::preset_b());
}
