//! High-level API for calibration fits, Box-Cox searches, and screens.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry points. It implements
//! one fluent builder per pipeline: calibration curves with optional
//! prediction bands, Box-Cox lambda searches, and two-set occurrence
//! screens.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builders with sensible defaults for all parameters.
//! * **Validated**: Parameters are validated when `.build()` is called; data
//!   is validated when the built model runs.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ## Key concepts
//!
//! * **Configuration Flow**: Builder pattern ending in `.build()`, which
//!   yields a validated model exposing `fit` or `run`.
//! * **Duplicate Detection**: Setting the same parameter twice is reported
//!   as an error at `.build()`.
//!
//! ### Configuration Flow
//!
//! 1. Create a builder via `CalCurve::new()`, `BoxCox::new()`, or
//!    `OccurrenceScreen::new()` (prelude names).
//! 2. Chain configuration methods (`.intervals()`, `.range()`, etc.).
//! 3. Call `.build()` to validate, then `fit`/`run` on the model.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::{run_box_cox, run_cal_curve, run_screen};
use crate::engine::executor::{BoxCoxConfig, CalCurveConfig, ScreenConfig};
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::engine::output::{BoxCoxFit, CalCurveFit, ScreenReport, ThresholdScreen};
pub use crate::evaluation::intervals::IntervalPoint;
pub use crate::math::boxcox::{LambdaPoint, log_likelihood as box_cox_log_likelihood};
pub use crate::math::regression::{LinearFit, QuadFit};
pub use crate::math::ttable::ConfidenceLevel;
pub use crate::primitives::errors::NtaStatError;
pub use crate::screening::occurrence::{BlankStats, FeatureRow, Occurrence, Outcome};
pub use crate::screening::tally::{FeatureDecision, OutcomeCounts, ScreenCounts};
pub use crate::screening::thresholds::ThresholdConfig;

// ============================================================================
// Calibration Curve Builder
// ============================================================================

/// Fluent builder for calibration-curve fits.
#[derive(Debug, Clone, Copy)]
pub struct CalCurveBuilder {
    /// Confidence level for the prediction band, if one was requested.
    pub intervals: Option<ConfidenceLevel>,

    /// Tracks if any parameter was set multiple times (for validation).
    duplicate_param: Option<&'static str>,
}

impl Default for CalCurveBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CalCurveBuilder {
    /// Create a new builder with default settings (no prediction band).
    pub fn new() -> Self {
        Self {
            intervals: None,
            duplicate_param: None,
        }
    }

    /// Request a prediction band at the given confidence level.
    pub fn intervals(mut self, level: ConfidenceLevel) -> Self {
        if self.intervals.is_some() {
            self.duplicate_param = Some("intervals");
        }
        self.intervals = Some(level);
        self
    }

    /// Build the calibration model.
    pub fn build(self) -> Result<CalCurveModel, NtaStatError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        Ok(CalCurveModel {
            config: CalCurveConfig {
                intervals: self.intervals,
            },
        })
    }
}

/// Calibration-curve processor.
pub struct CalCurveModel {
    config: CalCurveConfig,
}

impl CalCurveModel {
    /// Fit the calibration line to the provided data.
    ///
    /// Without a prediction band two points suffice. With one, the band's
    /// `n - 2` degrees of freedom must stay within the critical-value table,
    /// so 3 to 22 points are accepted.
    pub fn fit<T: Float>(self, x: &[T], y: &[T]) -> Result<CalCurveFit<T>, NtaStatError> {
        let min_points = if self.config.intervals.is_some() { 3 } else { 2 };
        Validator::validate_xy(x, y, min_points)?;

        run_cal_curve(x, y, &self.config)
    }
}

// ============================================================================
// Box-Cox Builder
// ============================================================================

/// Fluent builder for Box-Cox lambda searches.
#[derive(Debug, Clone, Copy)]
pub struct BoxCoxBuilder<T> {
    /// Lambda grid bounds as `(min, max)`.
    pub range: Option<(T, T)>,

    /// Grid increment.
    pub step: Option<T>,

    /// Tracks if any parameter was set multiple times (for validation).
    duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for BoxCoxBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> BoxCoxBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            range: None,
            step: None,
            duplicate_param: None,
        }
    }

    /// Set the lambda grid bounds (default -5 to 5).
    pub fn range(mut self, min: T, max: T) -> Self {
        if self.range.is_some() {
            self.duplicate_param = Some("range");
        }
        self.range = Some((min, max));
        self
    }

    /// Set the grid increment (default 0.01).
    pub fn step(mut self, step: T) -> Self {
        if self.step.is_some() {
            self.duplicate_param = Some("step");
        }
        self.step = Some(step);
        self
    }

    /// Build the search model.
    pub fn build(self) -> Result<BoxCoxModel<T>, NtaStatError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let defaults = BoxCoxConfig::default();
        let (lambda_min, lambda_max) = self
            .range
            .unwrap_or((defaults.lambda_min, defaults.lambda_max));
        let lambda_step = self.step.unwrap_or(defaults.lambda_step);

        Validator::validate_lambda_grid(lambda_min, lambda_max, lambda_step)?;

        Ok(BoxCoxModel {
            config: BoxCoxConfig {
                lambda_min,
                lambda_max,
                lambda_step,
            },
        })
    }
}

/// Box-Cox search processor.
pub struct BoxCoxModel<T: Float> {
    config: BoxCoxConfig<T>,
}

impl<T: Float> BoxCoxModel<T> {
    /// Search the lambda grid for the maximum-likelihood transform.
    ///
    /// All values must be finite and strictly positive.
    pub fn fit(self, values: &[T]) -> Result<BoxCoxFit<T>, NtaStatError> {
        Validator::validate_positive_values(values)?;

        Ok(run_box_cox(values, &self.config))
    }
}

// ============================================================================
// Occurrence Screen Builder
// ============================================================================

/// Fluent builder for two-set occurrence screens.
#[derive(Debug, Clone, Copy)]
pub struct ScreenBuilder<T: Float> {
    /// Primary threshold set override.
    pub thresholds_a: Option<ThresholdConfig<T>>,

    /// Comparison threshold set override.
    pub thresholds_b: Option<ThresholdConfig<T>>,

    /// Tracks if any parameter was set multiple times (for validation).
    duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for ScreenBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> ScreenBuilder<T> {
    /// Create a new builder with the default threshold presets.
    pub fn new() -> Self {
        Self {
            thresholds_a: None,
            thresholds_b: None,
            duplicate_param: None,
        }
    }

    /// Replace the primary threshold set (default: preset A).
    pub fn thresholds_a(mut self, config: ThresholdConfig<T>) -> Self {
        if self.thresholds_a.is_some() {
            self.duplicate_param = Some("thresholds_a");
        }
        self.thresholds_a = Some(config);
        self
    }

    /// Replace the comparison threshold set (default: preset B).
    pub fn thresholds_b(mut self, config: ThresholdConfig<T>) -> Self {
        if self.thresholds_b.is_some() {
            self.duplicate_param = Some("thresholds_b");
        }
        self.thresholds_b = Some(config);
        self
    }

    /// Build the screening model.
    pub fn build(self) -> Result<ScreenModel<T>, NtaStatError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let thresholds_a = self.thresholds_a.unwrap_or_else(ThresholdConfig::preset_a);
        let thresholds_b = self.thresholds_b.unwrap_or_else(ThresholdConfig::preset_b);

        Validator::validate_thresholds(&thresholds_a)?;
        Validator::validate_thresholds(&thresholds_b)?;

        Ok(ScreenModel {
            config: ScreenConfig {
                thresholds_a,
                thresholds_b,
            },
        })
    }
}

/// Occurrence-screen processor.
pub struct ScreenModel<T: Float> {
    config: ScreenConfig<T>,
}

impl<T: Float> ScreenModel<T> {
    /// Screen the feature rows under both threshold sets.
    ///
    /// Rows with an empty feature identifier are skipped and counted, never
    /// fatal; an entirely empty slice is an error.
    pub fn run(self, rows: &[FeatureRow<T>]) -> Result<ScreenReport<T>, NtaStatError> {
        Validator::validate_rows(rows)?;

        Ok(run_screen(rows, &self.config))
    }
}
