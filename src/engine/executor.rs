//! Execution engine for calibration, transform search, and screening runs.
//!
//! ## Purpose
//!
//! This module orchestrates the three pipelines: the calibration-curve fit
//! with its optional prediction band, the Box-Cox lambda search, and the
//! two-set occurrence screen. Each pipeline has a configuration payload and
//! a single entry point that assembles the user-facing result.
//!
//! ## Design notes
//!
//! * Provides configuration-based entry points, one per pipeline.
//! * Delegates all numerics to the math, screening, and evaluation layers.
//! * Generic over `Float` types to support f32 and f64.
//! * Pipelines are one-shot; no state is carried between runs.
//!
//! ## Invariants
//!
//! * Inputs are assumed validated (lengths, finiteness, threshold ranges).
//! * A requested prediction band is aligned with the calibration points.
//! * Both screen halves are computed from the same rows, so their skipped
//!   totals agree.
//!
//! ## Non-goals
//!
//! * This module does not validate input data (handled by `validator`).
//! * This module does not format results for display (handled by `output`).
//! * This module does not implement the statistics themselves (lower layers).

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::output::{BoxCoxFit, CalCurveFit, ScreenReport, ThresholdScreen};
use crate::evaluation::intervals::prediction_band;
use crate::math::boxcox::scan;
use crate::math::regression::LinearFit;
use crate::math::ttable::ConfidenceLevel;
use crate::primitives::errors::NtaStatError;
use crate::screening::occurrence::FeatureRow;
use crate::screening::tally::screen_rows;
use crate::screening::thresholds::ThresholdConfig;

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for a calibration-curve run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CalCurveConfig {
    /// Confidence level for the prediction band, or `None` for a bare fit.
    pub intervals: Option<ConfidenceLevel>,
}

/// Configuration for a Box-Cox lambda search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxCoxConfig<T> {
    /// Lower end of the lambda grid.
    pub lambda_min: T,

    /// Upper end of the lambda grid.
    pub lambda_max: T,

    /// Grid increment.
    pub lambda_step: T,
}

impl<T: Float> Default for BoxCoxConfig<T> {
    fn default() -> Self {
        Self {
            lambda_min: T::from(-5.0).unwrap(),
            lambda_max: T::from(5.0).unwrap(),
            lambda_step: T::from(0.01).unwrap(),
        }
    }
}

/// Configuration for a two-set occurrence screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenConfig<T: Float> {
    /// Primary threshold set.
    pub thresholds_a: ThresholdConfig<T>,

    /// Comparison threshold set.
    pub thresholds_b: ThresholdConfig<T>,
}

impl<T: Float> Default for ScreenConfig<T> {
    fn default() -> Self {
        Self {
            thresholds_a: ThresholdConfig::preset_a(),
            thresholds_b: ThresholdConfig::preset_b(),
        }
    }
}

// ============================================================================
// Entry Points
// ============================================================================

/// Fit a calibration line and, when configured, its prediction band.
///
/// The only fallible step is the critical-value lookup for the band, which
/// requires `n - 2` to stay within the tabulated degrees of freedom.
pub fn run_cal_curve<T: Float>(
    x: &[T],
    y: &[T],
    config: &CalCurveConfig,
) -> Result<CalCurveFit<T>, NtaStatError> {
    let fit = LinearFit::fit(x, y);

    let band = match config.intervals {
        Some(level) => Some(prediction_band(x, y, &fit, level)?),
        None => None,
    };

    Ok(CalCurveFit {
        fit,
        points: x.len(),
        level: config.intervals,
        band,
    })
}

/// Search the lambda grid and package the winning transform.
pub fn run_box_cox<T: Float>(values: &[T], config: &BoxCoxConfig<T>) -> BoxCoxFit<T> {
    let (lambda, curve) = scan(
        values,
        config.lambda_min,
        config.lambda_max,
        config.lambda_step,
    );

    // The winner is always on the curve; NaN only on an empty grid.
    let log_likelihood = curve
        .iter()
        .find(|point| point.lambda == lambda)
        .map(|point| point.log_likelihood)
        .unwrap_or_else(T::nan);

    BoxCoxFit {
        lambda,
        log_likelihood,
        curve,
    }
}

/// Screen the rows under both threshold sets and pair up the results.
pub fn run_screen<T: Float>(rows: &[FeatureRow<T>], config: &ScreenConfig<T>) -> ScreenReport<T> {
    let tally_a = screen_rows(rows, &config.thresholds_a);
    let tally_b = screen_rows(rows, &config.thresholds_b);
    let skipped_rows = tally_a.skipped_rows;

    ScreenReport {
        a: ThresholdScreen {
            config: config.thresholds_a,
            counts: tally_a.counts,
            features: tally_a.features,
        },
        b: ThresholdScreen {
            config: config.thresholds_b,
            counts: tally_b.counts,
            features: tally_b.features,
        },
        skipped_rows,
    }
}
