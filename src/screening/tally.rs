//! Count tables and the pure screening pass.
//!
//! ## Purpose
//!
//! This module aggregates per-occurrence decisions into the occurrence-level
//! and feature-level count tables the review UIs display, one pair per
//! threshold set.
//!
//! ## Design notes
//!
//! * **Pure pass**: `screen_rows` takes rows plus one threshold set and
//!   returns a fresh tally. Nothing is reset or shared; the A/B comparison
//!   is two independent calls over the same rows.
//! * **Shared recorder**: one `record` covers both levels. The occurrence
//!   table is fed each occurrence's outcome, the feature table the
//!   aggregated outcome; both levels increment the same categories.
//! * **Row skipping**: rows with an empty feature identifier are counted as
//!   skipped and contribute to neither table.
//!
//! ## Invariants
//!
//! * `total == missing + present` at both levels.
//! * `present == replicate_pass + replicate_fail` at the occurrence level;
//!   at the feature level a `Present` aggregate records neither, so only
//!   `>=` holds.
//! * `cv_pass == pass_cv_over_mrl + pass_cv_under_mrl` and
//!   `cv_fail == fail_cv_over_mrl + fail_cv_under_mrl`.
//!
//! ## Non-goals
//!
//! * This module does not decide individual occurrences (see `occurrence`).
//! * This module does not render tables (engine output does).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::string::String;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::screening::occurrence::{
    classify, feature_outcome, reporting_limit, Decision, FeatureRow, Outcome,
};
use crate::screening::thresholds::ThresholdConfig;

// ============================================================================
// Count Tables
// ============================================================================

/// Outcome counts at one level (occurrence or feature) for one threshold
/// set.
///
/// Categories are cumulative along the gate path: a `PassCvOverMrl`
/// outcome increments `total`, `present`, `replicate_pass`, `cv_pass`, and
/// `pass_cv_over_mrl`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OutcomeCounts {
    /// Everything recorded at this level.
    pub total: usize,

    /// Detected at least once.
    pub present: usize,

    /// Never detected.
    pub missing: usize,

    /// Passed the applicable replicate gate.
    pub replicate_pass: usize,

    /// Failed the applicable replicate gate.
    pub replicate_fail: usize,

    /// Passed the CV gate (blanks pass it by definition).
    pub cv_pass: usize,

    /// Failed the CV gate.
    pub cv_fail: usize,

    /// Passed both the CV and MRL gates.
    pub pass_cv_over_mrl: usize,

    /// Passed the CV gate, failed the MRL gate.
    pub pass_cv_under_mrl: usize,

    /// Failed the CV gate, passed the MRL gate.
    pub fail_cv_over_mrl: usize,

    /// Failed both the CV and MRL gates.
    pub fail_cv_under_mrl: usize,
}

impl OutcomeCounts {
    /// Record one outcome, incrementing every category on its gate path.
    pub fn record(&mut self, outcome: Outcome) {
        self.total += 1;

        match outcome {
            Outcome::Missing => {
                self.missing += 1;
            }
            Outcome::Present => {
                self.present += 1;
            }
            Outcome::UnderReplicate => {
                self.present += 1;
                self.replicate_fail += 1;
            }
            Outcome::FailCvUnderMrl => {
                self.present += 1;
                self.replicate_pass += 1;
                self.cv_fail += 1;
                self.fail_cv_under_mrl += 1;
            }
            Outcome::FailCvOverMrl => {
                self.present += 1;
                self.replicate_pass += 1;
                self.cv_fail += 1;
                self.fail_cv_over_mrl += 1;
            }
            Outcome::PassCvUnderMrl => {
                self.present += 1;
                self.replicate_pass += 1;
                self.cv_pass += 1;
                self.pass_cv_under_mrl += 1;
            }
            Outcome::PassCvOverMrl => {
                self.present += 1;
                self.replicate_pass += 1;
                self.cv_pass += 1;
                self.pass_cv_over_mrl += 1;
            }
        }
    }
}

/// Occurrence- and feature-level counts for one threshold set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenCounts {
    /// Counts over every occurrence of every screened row.
    pub occurrences: OutcomeCounts,

    /// Counts over screened rows, one aggregate outcome per feature.
    pub features: OutcomeCounts,
}

// ============================================================================
// Per-Feature Results
// ============================================================================

/// Screening result for one feature row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureDecision {
    /// Feature identifier from the source row.
    pub feature_id: String,

    /// Aggregate outcome under the pass hierarchy.
    pub outcome: Outcome,

    /// Tallied outcome of each occurrence, in row order.
    pub occurrence_outcomes: Vec<Outcome>,
}

/// Output of one screening pass: count tables, per-feature outcomes, and
/// the number of rows skipped for having no feature identifier.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Tally {
    /// Count tables at both levels.
    pub counts: ScreenCounts,

    /// Per-feature outcomes, in row order (skipped rows omitted).
    pub features: Vec<FeatureDecision>,

    /// Rows dropped for having an empty feature identifier.
    pub skipped_rows: usize,
}

// ============================================================================
// Screening Pass
// ============================================================================

/// Screen every row against one threshold set.
///
/// Pure function: calling it twice with different sets shares no state.
/// Occurrences are classified in row order; each feature aggregates to its
/// best-ranked occurrence contribution.
pub fn screen_rows<T: Float>(rows: &[FeatureRow<T>], config: &ThresholdConfig<T>) -> Tally {
    let mut counts = ScreenCounts::default();
    let mut features = Vec::with_capacity(rows.len());
    let mut skipped_rows = 0;

    for row in rows {
        if row.feature_id.is_empty() {
            skipped_rows += 1;
            continue;
        }

        // The reporting limit is a property of the row's blank, shared by
        // every occurrence in the row.
        let mrl = reporting_limit(row.blank.as_ref(), config);

        let decisions: Vec<Decision> = row
            .occurrences
            .iter()
            .map(|occurrence| classify(occurrence, mrl, config))
            .collect();

        for decision in &decisions {
            counts.occurrences.record(decision.outcome);
        }

        let aggregate = feature_outcome(&decisions);
        counts.features.record(aggregate);

        features.push(FeatureDecision {
            feature_id: row.feature_id.clone(),
            outcome: aggregate,
            occurrence_outcomes: decisions.iter().map(|d| d.outcome).collect(),
        });
    }

    Tally {
        counts,
        features,
        skipped_rows,
    }
}
