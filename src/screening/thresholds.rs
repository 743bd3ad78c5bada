//! Threshold sets for occurrence screening.
//!
//! ## Purpose
//!
//! This module defines the knobs of the screening decision sequence: the
//! replicate-percentage floors for regular and blank samples, the CV limit,
//! and the MRL standard-deviation multiplier.
//!
//! ## Design notes
//!
//! * **Presets**: Two stock sets ship as constructors, matching the slider
//!   defaults of the review UIs. Preset A is the `Default`.
//! * **Plain data**: No validation here; the engine validator checks ranges
//!   before a screen runs.
//!
//! ## Invariants (validated upstream)
//!
//! * Replicate percentages lie in [0, 100].
//! * The CV limit and MRL multiplier are non-negative and finite.

// External dependencies
use num_traits::Float;

// ============================================================================
// Threshold Configuration
// ============================================================================

/// One set of screening thresholds.
///
/// A screen evaluates every occurrence against two independent sets (A and
/// B) so reviewers can compare their effect side by side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdConfig<T: Float> {
    /// Minimum replicate-detection percentage for non-blank samples.
    pub sample_replicate_min_percent: T,

    /// Minimum replicate-detection percentage for blank samples. Also gates
    /// whether the blank is trusted enough to define an MRL.
    pub blank_replicate_min_percent: T,

    /// Largest acceptable coefficient of variation. Blank samples bypass
    /// this gate.
    pub max_cv: T,

    /// Number of blank standard deviations above the blank mean that
    /// defines the minimum reporting level.
    pub mrl_std_multiplier: T,
}

impl<T: Float> ThresholdConfig<T> {
    /// Stock preset A: replicate floors at 66.7%, CV limit 1.25, MRL at
    /// 3 blank standard deviations.
    pub fn preset_a() -> Self {
        Self {
            sample_replicate_min_percent: T::from(66.7).unwrap(),
            blank_replicate_min_percent: T::from(66.7).unwrap(),
            max_cv: T::from(1.25).unwrap(),
            mrl_std_multiplier: T::from(3.0).unwrap(),
        }
    }

    /// Stock preset B: replicate floors at 50%, CV limit 0.80, MRL at
    /// 3 blank standard deviations.
    pub fn preset_b() -> Self {
        Self {
            sample_replicate_min_percent: T::from(50.0).unwrap(),
            blank_replicate_min_percent: T::from(50.0).unwrap(),
            max_cv: T::from(0.80).unwrap(),
            mrl_std_multiplier: T::from(3.0).unwrap(),
        }
    }
}

impl<T: Float> Default for ThresholdConfig<T> {
    fn default() -> Self {
        Self::preset_a()
    }
}
