//! Output types and result structures for fits and screens.
//!
//! ## Purpose
//!
//! This module defines the user-facing result structs: the calibration fit
//! with its optional prediction band, the Box-Cox search result, and the
//! A/B screening report.
//!
//! ## Design notes
//!
//! * **Memory Efficiency**: Optional outputs use `Option<Vec<T>>`.
//! * **Generics**: Results are generic over `Float` types.
//! * **Ergonomics**: Implements `Display` for human-readable output; long
//!   tables print their first and last ten rows.
//!
//! ## Key concepts
//!
//! * **Prediction band**: present only when a confidence level was
//!   configured; aligned with the calibration points.
//! * **A/B report**: both threshold sets' counts and per-feature outcomes
//!   side by side, plus the skipped-row total.
//!
//! ## Invariants
//!
//! * A populated band has one entry per calibration point, in input order.
//! * The Box-Cox curve covers the full scanned grid, ascending in lambda.
//! * Both screen halves describe the same rows; `skipped_rows` applies to
//!   either.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.
//! * This module does not validate result consistency (engine's job).
//! * This module does not provide serialization/deserialization logic.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::evaluation::intervals::IntervalPoint;
use crate::math::boxcox::LambdaPoint;
use crate::math::regression::LinearFit;
use crate::math::ttable::ConfidenceLevel;
use crate::screening::occurrence::Outcome;
use crate::screening::tally::{FeatureDecision, ScreenCounts};
use crate::screening::thresholds::ThresholdConfig;

// ============================================================================
// Calibration Curve
// ============================================================================

/// Calibration-curve output: the fitted line plus its optional prediction
/// band.
#[derive(Debug, Clone, PartialEq)]
pub struct CalCurveFit<T: Float> {
    /// Fitted line coefficients and fit quality.
    pub fit: LinearFit<T>,

    /// Number of calibration points behind the fit.
    pub points: usize,

    /// Confidence level of the prediction band, when one was requested.
    pub level: Option<ConfidenceLevel>,

    /// Per-point prediction band, when one was requested. Aligned with the
    /// input points.
    pub band: Option<Vec<IntervalPoint<T>>>,
}

impl<T: Float> CalCurveFit<T> {
    /// Check if a prediction band was computed.
    pub fn has_band(&self) -> bool {
        self.band.is_some()
    }

    /// Predict the y-value for a given x using the fitted line.
    #[inline]
    pub fn predict(&self, x: T) -> T {
        self.fit.predict(x)
    }
}

impl<T: Float + Display> Display for CalCurveFit<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Points:    {}", self.points)?;
        writeln!(f, "  Slope:     {:.6}", self.fit.slope)?;
        writeln!(f, "  Intercept: {:.6}", self.fit.intercept)?;
        writeln!(f, "  R-squared: {:.6}", self.fit.r_squared)?;

        if let (Some(level), Some(band)) = (self.level, &self.band) {
            writeln!(f, "  Band:      {} prediction interval", level)?;
            writeln!(f)?;

            writeln!(f, "Prediction Band:")?;
            writeln!(
                f,
                "{:>8} {:>12} {:>12} {:>12}",
                "X", "Y_hat", "Lower", "Upper"
            )?;
            writeln!(f, "{:-<width$}", "", width = 47)?;

            let mut prev_idx = 0;
            for (i, idx) in table_rows(band.len()).into_iter().enumerate() {
                if i > 0 && idx != prev_idx + 1 {
                    writeln!(f, "{:>8}", "...")?;
                }
                prev_idx = idx;

                let point = &band[idx];
                writeln!(
                    f,
                    "{:>8.2} {:>12.6} {:>12.6} {:>12.6}",
                    point.x, point.y_hat, point.lower, point.upper
                )?;
            }
        }

        Ok(())
    }
}

// ============================================================================
// Box-Cox
// ============================================================================

/// Box-Cox search output: the selected lambda and the full profile curve.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxCoxFit<T: Float> {
    /// Lambda with the highest profile log-likelihood (first on ties).
    pub lambda: T,

    /// Profile log-likelihood at the selected lambda.
    pub log_likelihood: T,

    /// Full `(lambda, log-likelihood)` curve over the scanned grid, in
    /// ascending lambda order.
    pub curve: Vec<LambdaPoint<T>>,
}

impl<T: Float> BoxCoxFit<T> {
    /// Apply the selected transform to one value.
    #[inline]
    pub fn transform(&self, value: T) -> T {
        crate::math::boxcox::transform(value, self.lambda)
    }
}

impl<T: Float + Display> Display for BoxCoxFit<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Candidates:     {}", self.curve.len())?;
        writeln!(f, "  Lambda:         {:.4}", self.lambda)?;
        writeln!(f, "  Log-likelihood: {:.6}", self.log_likelihood)?;
        writeln!(f)?;

        writeln!(f, "Profile:")?;
        writeln!(f, "{:>10} {:>16}", "Lambda", "Log_Lik")?;
        writeln!(f, "{:-<width$}", "", width = 27)?;

        let mut prev_idx = 0;
        for (i, idx) in table_rows(self.curve.len()).into_iter().enumerate() {
            if i > 0 && idx != prev_idx + 1 {
                writeln!(f, "{:>10}", "...")?;
            }
            prev_idx = idx;

            let point = &self.curve[idx];
            writeln!(f, "{:>10.4} {:>16.6}", point.lambda, point.log_likelihood)?;
        }

        Ok(())
    }
}

// ============================================================================
// Screen Report
// ============================================================================

/// One threshold set's screening results.
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdScreen<T: Float> {
    /// Threshold set the results were produced under.
    pub config: ThresholdConfig<T>,

    /// Occurrence- and feature-level count tables.
    pub counts: ScreenCounts,

    /// Per-feature outcomes, in row order.
    pub features: Vec<FeatureDecision>,
}

impl<T: Float> ThresholdScreen<T> {
    /// Aggregate outcome of one feature, if it was screened.
    pub fn outcome_of(&self, feature_id: &str) -> Option<Outcome> {
        self.features
            .iter()
            .find(|feature| feature.feature_id == feature_id)
            .map(|feature| feature.outcome)
    }
}

/// Screening results for both threshold sets over the same rows.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenReport<T: Float> {
    /// Results under threshold set A.
    pub a: ThresholdScreen<T>,

    /// Results under threshold set B.
    pub b: ThresholdScreen<T>,

    /// Rows dropped for having an empty feature identifier (same rows for
    /// both sets).
    pub skipped_rows: usize,
}

impl<T: Float> ScreenReport<T> {
    /// Number of feature rows that were screened.
    pub fn features_screened(&self) -> usize {
        self.a.features.len()
    }
}

impl<T: Float + Display> Display for ScreenReport<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Features screened: {}", self.features_screened())?;
        writeln!(f, "  Rows skipped:      {}", self.skipped_rows)?;

        for (name, screen) in [("A", &self.a), ("B", &self.b)] {
            writeln!(f)?;
            writeln!(
                f,
                "Threshold Set {} (replicate >= {}%, blank replicate >= {}%, CV <= {}, MRL at {} std dev):",
                name,
                screen.config.sample_replicate_min_percent,
                screen.config.blank_replicate_min_percent,
                screen.config.max_cv,
                screen.config.mrl_std_multiplier
            )?;

            writeln!(f, "  {:<20} {:>12} {:>10}", "Category", "Occurrences", "Features")?;
            writeln!(f, "  {:-<width$}", "", width = 44)?;

            let occ = &screen.counts.occurrences;
            let feat = &screen.counts.features;
            let rows = [
                ("total", occ.total, feat.total),
                ("present", occ.present, feat.present),
                ("missing", occ.missing, feat.missing),
                ("replicate pass", occ.replicate_pass, feat.replicate_pass),
                ("replicate fail", occ.replicate_fail, feat.replicate_fail),
                ("CV pass", occ.cv_pass, feat.cv_pass),
                ("CV fail", occ.cv_fail, feat.cv_fail),
                (
                    "pass CV, over MRL",
                    occ.pass_cv_over_mrl,
                    feat.pass_cv_over_mrl,
                ),
                (
                    "pass CV, under MRL",
                    occ.pass_cv_under_mrl,
                    feat.pass_cv_under_mrl,
                ),
                (
                    "fail CV, over MRL",
                    occ.fail_cv_over_mrl,
                    feat.fail_cv_over_mrl,
                ),
                (
                    "fail CV, under MRL",
                    occ.fail_cv_under_mrl,
                    feat.fail_cv_under_mrl,
                ),
            ];

            for (label, occurrences, features) in rows {
                writeln!(f, "  {:<20} {:>12} {:>10}", label, occurrences, features)?;
            }
        }

        Ok(())
    }
}

// ============================================================================
// Helpers
// ============================================================================

// Row indices to print: everything when short, else first and last ten.
fn table_rows(n: usize) -> Vec<usize> {
    if n <= 20 {
        (0..n).collect()
    } else {
        (0..10).chain(n - 10..n).collect()
    }
}
