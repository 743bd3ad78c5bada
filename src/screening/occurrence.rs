//! Occurrence records and the per-occurrence decision sequence.
//!
//! ## Purpose
//!
//! This module classifies a single occurrence (one feature measured in one
//! sample group) through the ordered gates of the screening decision tree:
//! detection, replicate percentage, coefficient of variation, and minimum
//! reporting level (MRL).
//!
//! ## Design notes
//!
//! * **Ordered gates**: the detection and replicate gates short-circuit;
//!   past them, CV and MRL both evaluate and combine into one of four
//!   terminal outcomes.
//! * **Blank samples**: recognized by name. Blanks use their own replicate
//!   floor, bypass the CV gate, and never promote a feature past `Present`
//!   when they fail their replicate gate.
//! * **Pass-condition comparisons**: every gate is written as the condition
//!   that passes it, so a NaN field fails the gate instead of slipping
//!   through a negated comparison.
//!
//! ## Key concepts
//!
//! * **Occurrence vs. feature**: a feature (one spreadsheet row) carries one
//!   occurrence per sample group; the feature-level outcome is the best
//!   occurrence contribution under the fixed pass hierarchy.
//! * **MRL**: `blank mean + multiplier * blank std dev`, forced to zero when
//!   the blank's own replicate percentage misses its floor (an untrusted
//!   blank cannot set a reporting limit).
//!
//! ## Invariants
//!
//! * Outcome ranks are total and fixed; `Ord` on [`Outcome`] follows them.
//! * `classify` is a pure function of its arguments.
//!
//! ## Non-goals
//!
//! * This module does not aggregate counts (see `tally`).
//! * This module does not parse spreadsheet columns into records.

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
use core::fmt::{Display, Formatter};
use num_traits::Float;

// Internal dependencies
use crate::screening::thresholds::ThresholdConfig;

// ============================================================================
// Records
// ============================================================================

/// Substrings that mark a sample-group name as a method blank.
pub const BLANK_NAME_TOKENS: [&str; 8] =
    ["MB", "Mb", "mb", "BLANK", "Blank", "blank", "BLK", "Blk"];

/// `true` if the sample-group name contains any recognized blank token.
#[inline]
pub fn is_blank_sample(name: &str) -> bool {
    BLANK_NAME_TOKENS.iter().any(|token| name.contains(token))
}

/// One feature measured in one sample group.
#[derive(Debug, Clone, PartialEq)]
pub struct Occurrence<T: Float> {
    /// Sample-group name (e.g., `"53_T"` or `"MB"`). Blank-group membership
    /// is derived from this name.
    pub sample: String,

    /// Number of replicates in which the feature was detected.
    pub detection_count: u32,

    /// Percentage of replicates with a detection, in [0, 100].
    pub replicate_pct: T,

    /// Coefficient of variation across replicates.
    pub cv: T,

    /// Mean abundance across replicates.
    pub mean: T,
}

/// Blank-group summary statistics for one feature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlankStats<T: Float> {
    /// Mean blank abundance.
    pub mean: T,

    /// Blank abundance standard deviation.
    pub std_dev: T,

    /// Percentage of blank replicates with a detection, in [0, 100].
    pub replicate_pct: T,
}

/// One spreadsheet row: a feature with its blank statistics and its
/// occurrences across sample groups.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRow<T: Float> {
    /// Feature identifier. Rows with an empty identifier are skipped by the
    /// screening pass (header leakage or trailing blank lines).
    pub feature_id: String,

    /// Blank summary for the row, when blank columns exist. `None` behaves
    /// as an untrusted blank: the MRL is forced to zero.
    pub blank: Option<BlankStats<T>>,

    /// One occurrence per sample group.
    pub occurrences: Vec<Occurrence<T>>,
}

// ============================================================================
// Outcome
// ============================================================================

/// Terminal outcome of the decision sequence for one occurrence.
///
/// Declaration order is the pass hierarchy: later variants outrank earlier
/// ones when a feature aggregates its occurrences, so the derived `Ord`
/// picks the feature-level outcome directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Outcome {
    /// No detection in any replicate.
    Missing,

    /// Detected, but judged no further. Reachable as a feature aggregate
    /// when the only detected occurrences are blanks that failed the blank
    /// replicate gate.
    Present,

    /// Detected, but in too few replicates.
    UnderReplicate,

    /// Replicate gate passed; CV and MRL gates both failed.
    FailCvUnderMrl,

    /// Replicate gate passed; CV failed, MRL passed.
    FailCvOverMrl,

    /// Replicate gate passed; CV passed, MRL failed.
    PassCvUnderMrl,

    /// All gates passed.
    PassCvOverMrl,
}

impl Outcome {
    /// Position in the pass hierarchy (0 = `Missing` .. 6 = `PassCvOverMrl`).
    #[inline]
    pub const fn rank(&self) -> u8 {
        *self as u8
    }

    /// Short label for tables.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Missing => "missing",
            Self::Present => "present",
            Self::UnderReplicate => "under-replicate",
            Self::FailCvUnderMrl => "fail-CV under-MRL",
            Self::FailCvOverMrl => "fail-CV over-MRL",
            Self::PassCvUnderMrl => "pass-CV under-MRL",
            Self::PassCvOverMrl => "pass-CV over-MRL",
        }
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Decision
// ============================================================================

/// Decision for one occurrence: the tallied outcome plus the rank the
/// occurrence contributes to its feature's aggregate.
///
/// The two differ in exactly one case. A blank occurrence that fails the
/// blank replicate gate tallies as `UnderReplicate` but contributes only
/// `Present` to the feature, so an unreliable blank never drags a feature
/// to the under-replicate leaf on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    /// Outcome recorded in the occurrence-level counts.
    pub outcome: Outcome,

    /// Rank contributed to the feature-level aggregate.
    pub feature_rank: Outcome,
}

// ============================================================================
// Reporting Limit
// ============================================================================

/// Effective minimum reporting level for one feature.
///
/// `blank mean + multiplier * blank std dev` when the blank's replicate
/// percentage meets the blank floor; zero otherwise (including rows with no
/// blank data at all). With a zero MRL, the MRL gate in [`classify`]
/// reduces to `mean >= 0`.
pub fn reporting_limit<T: Float>(blank: Option<&BlankStats<T>>, config: &ThresholdConfig<T>) -> T {
    match blank {
        Some(stats) if stats.replicate_pct >= config.blank_replicate_min_percent => {
            stats.mean + config.mrl_std_multiplier * stats.std_dev
        }
        _ => T::zero(),
    }
}

// ============================================================================
// Classification
// ============================================================================

/// Run one occurrence through the ordered decision gates.
///
/// `mrl` is the feature-wide reporting limit from [`reporting_limit`],
/// shared by every occurrence of the row.
pub fn classify<T: Float>(
    occurrence: &Occurrence<T>,
    mrl: T,
    config: &ThresholdConfig<T>,
) -> Decision {
    if occurrence.detection_count == 0 {
        return Decision {
            outcome: Outcome::Missing,
            feature_rank: Outcome::Missing,
        };
    }

    let blank = is_blank_sample(&occurrence.sample);
    let replicate_floor = if blank {
        config.blank_replicate_min_percent
    } else {
        config.sample_replicate_min_percent
    };

    if occurrence.replicate_pct >= replicate_floor {
        // Blanks pass the CV gate unconditionally.
        let cv_ok = blank || occurrence.cv <= config.max_cv;
        let mrl_ok = occurrence.mean >= mrl;

        let outcome = match (cv_ok, mrl_ok) {
            (true, true) => Outcome::PassCvOverMrl,
            (true, false) => Outcome::PassCvUnderMrl,
            (false, true) => Outcome::FailCvOverMrl,
            (false, false) => Outcome::FailCvUnderMrl,
        };

        Decision {
            outcome,
            feature_rank: outcome,
        }
    } else {
        // A blank that misses its replicate floor leaves the feature at
        // `Present`; a regular sample drags it to `UnderReplicate`.
        let feature_rank = if blank {
            Outcome::Present
        } else {
            Outcome::UnderReplicate
        };

        Decision {
            outcome: Outcome::UnderReplicate,
            feature_rank,
        }
    }
}

/// Feature-level outcome: the best-ranked contribution of its occurrences.
///
/// An empty slice is `Missing`, matching a row whose sample columns are all
/// absent.
pub fn feature_outcome(decisions: &[Decision]) -> Outcome {
    decisions
        .iter()
        .fold(Outcome::Missing, |best, decision| {
            best.max(decision.feature_rank)
        })
}
