//! Student's-t critical values for prediction intervals.
//!
//! ## Purpose
//!
//! This module provides the tabulated two-tailed Student's-t critical values
//! used to scale prediction bands around a calibration fit. It covers the
//! eight confidence levels offered by the visualization UIs and degrees of
//! freedom from 1 through 20.
//!
//! ## Design notes
//!
//! * **Tabulated**: Values are fixed lookup data, not computed from the CDF.
//!   Calibration curves in this domain rarely exceed ~20 points, so the
//!   table bounds are a deliberate contract, not a limitation to paper over.
//! * **Fail loudly**: Degrees of freedom outside `1..=20` and unknown level
//!   strings are hard errors; there is no normal-approximation fallback.
//! * **Parseable**: Levels round-trip through the UI strings (`"95%"`).
//!
//! ## Key concepts
//!
//! * **Confidence level**: two-sided coverage of the interval (e.g., 95%).
//! * **Degrees of freedom**: `n - 2` for a simple linear fit on n points.
//!
//! ## Invariants
//!
//! * Every tabulated value is finite and positive.
//! * For a fixed level, values decrease monotonically as df grows.
//! * For a fixed df, values increase monotonically with the level.
//!
//! ## Non-goals
//!
//! * This module does not compute interval widths (see the evaluation layer).
//! * This module does not interpolate between tabulated df values.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter};
use core::str::FromStr;
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::NtaStatError;

// ============================================================================
// Critical Value Tables
// ============================================================================

/// Two-tailed critical values for 50% confidence, df 1..=20.
const T_50: [f64; 20] = [
    1.0, 0.816, 0.765, 0.741, 0.727, 0.718, 0.711, 0.706, 0.703, 0.7, 0.697, 0.695, 0.694, 0.692,
    0.691, 0.69, 0.689, 0.688, 0.688, 0.687,
];

/// Two-tailed critical values for 60% confidence, df 1..=20.
const T_60: [f64; 20] = [
    1.376, 1.061, 0.978, 0.941, 0.92, 0.906, 0.896, 0.889, 0.883, 0.879, 0.876, 0.873, 0.87,
    0.868, 0.866, 0.865, 0.863, 0.862, 0.861, 0.86,
];

/// Two-tailed critical values for 70% confidence, df 1..=20.
const T_70: [f64; 20] = [
    1.963, 1.386, 1.25, 1.19, 1.156, 1.134, 1.119, 1.108, 1.1, 1.093, 1.088, 1.083, 1.079, 1.076,
    1.074, 1.071, 1.069, 1.067, 1.066, 1.064,
];

/// Two-tailed critical values for 80% confidence, df 1..=20.
const T_80: [f64; 20] = [
    3.078, 1.886, 1.638, 1.533, 1.476, 1.44, 1.415, 1.397, 1.383, 1.372, 1.363, 1.356, 1.35,
    1.345, 1.341, 1.337, 1.333, 1.33, 1.328, 1.325,
];

/// Two-tailed critical values for 90% confidence, df 1..=20.
const T_90: [f64; 20] = [
    6.314, 2.92, 2.353, 2.132, 2.015, 1.943, 1.895, 1.86, 1.833, 1.812, 1.796, 1.782, 1.771,
    1.761, 1.753, 1.746, 1.74, 1.734, 1.729, 1.725,
];

/// Two-tailed critical values for 95% confidence, df 1..=20.
const T_95: [f64; 20] = [
    12.71, 4.303, 3.182, 2.776, 2.571, 2.447, 2.365, 2.306, 2.262, 2.228, 2.201, 2.179, 2.16,
    2.145, 2.131, 2.12, 2.11, 2.101, 2.093, 2.086,
];

/// Two-tailed critical values for 98% confidence, df 1..=20.
const T_98: [f64; 20] = [
    31.821, 6.965, 4.541, 3.747, 3.365, 3.143, 2.998, 2.896, 2.821, 2.764, 2.718, 2.681, 2.65,
    2.624, 2.602, 2.583, 2.567, 2.552, 2.539, 2.528,
];

/// Two-tailed critical values for 99% confidence, df 1..=20.
const T_99: [f64; 20] = [
    63.657, 9.925, 5.841, 4.604, 4.032, 3.707, 3.499, 3.355, 3.25, 3.169, 3.106, 3.055, 3.012,
    2.977, 2.947, 2.921, 2.898, 2.878, 2.861, 2.845,
];

// ============================================================================
// Confidence Level Enum
// ============================================================================

/// Two-sided confidence level for prediction bands.
///
/// Each level maps to a column of tabulated Student's-t critical values for
/// degrees of freedom 1 through 20. The string forms match the UI dropdowns
/// (`"50%"` through `"99%"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfidenceLevel {
    /// 50% coverage.
    P50,

    /// 60% coverage.
    P60,

    /// 70% coverage.
    P70,

    /// 80% coverage.
    P80,

    /// 90% coverage.
    P90,

    /// 95% coverage.
    ///
    /// This is the default and the conventional reporting choice.
    #[default]
    P95,

    /// 98% coverage.
    P98,

    /// 99% coverage.
    P99,
}

impl ConfidenceLevel {
    /// Smallest tabulated degrees of freedom.
    pub const MIN_DF: usize = 1;

    /// Largest tabulated degrees of freedom.
    pub const MAX_DF: usize = 20;

    /// All supported levels, in ascending coverage order.
    pub const ALL: [ConfidenceLevel; 8] = [
        ConfidenceLevel::P50,
        ConfidenceLevel::P60,
        ConfidenceLevel::P70,
        ConfidenceLevel::P80,
        ConfidenceLevel::P90,
        ConfidenceLevel::P95,
        ConfidenceLevel::P98,
        ConfidenceLevel::P99,
    ];

    // ========================================================================
    // Metadata Methods
    // ========================================================================

    /// Get the UI string form of the level (e.g., `"95%"`).
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ConfidenceLevel::P50 => "50%",
            ConfidenceLevel::P60 => "60%",
            ConfidenceLevel::P70 => "70%",
            ConfidenceLevel::P80 => "80%",
            ConfidenceLevel::P90 => "90%",
            ConfidenceLevel::P95 => "95%",
            ConfidenceLevel::P98 => "98%",
            ConfidenceLevel::P99 => "99%",
        }
    }

    /// Get the coverage as a percentage (e.g., `95.0`).
    #[inline]
    pub const fn percent(&self) -> f64 {
        match self {
            ConfidenceLevel::P50 => 50.0,
            ConfidenceLevel::P60 => 60.0,
            ConfidenceLevel::P70 => 70.0,
            ConfidenceLevel::P80 => 80.0,
            ConfidenceLevel::P90 => 90.0,
            ConfidenceLevel::P95 => 95.0,
            ConfidenceLevel::P98 => 98.0,
            ConfidenceLevel::P99 => 99.0,
        }
    }

    /// Get the tabulated column for this level.
    const fn table(&self) -> &'static [f64; 20] {
        match self {
            ConfidenceLevel::P50 => &T_50,
            ConfidenceLevel::P60 => &T_60,
            ConfidenceLevel::P70 => &T_70,
            ConfidenceLevel::P80 => &T_80,
            ConfidenceLevel::P90 => &T_90,
            ConfidenceLevel::P95 => &T_95,
            ConfidenceLevel::P98 => &T_98,
            ConfidenceLevel::P99 => &T_99,
        }
    }

    // ========================================================================
    // Critical Value Lookup
    // ========================================================================

    /// Look up the two-tailed critical t-value for the given degrees of freedom.
    ///
    /// # Errors
    ///
    /// Returns [`NtaStatError::DegreesOfFreedomOutOfRange`] when `df` is not
    /// in `1..=20`. The table is the contract; no extrapolation is attempted.
    #[inline]
    pub fn critical_value<T: Float>(&self, df: usize) -> Result<T, NtaStatError> {
        if !(Self::MIN_DF..=Self::MAX_DF).contains(&df) {
            return Err(NtaStatError::DegreesOfFreedomOutOfRange {
                df,
                max: Self::MAX_DF,
            });
        }
        Ok(T::from(self.table()[df - 1]).unwrap())
    }
}

// ============================================================================
// String Conversions
// ============================================================================

impl Display for ConfidenceLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConfidenceLevel {
    type Err = NtaStatError;

    /// Parse a UI level string (`"95%"`) into a [`ConfidenceLevel`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        for level in Self::ALL {
            if level.as_str() == trimmed {
                return Ok(level);
            }
        }
        Err(NtaStatError::UnsupportedConfidenceLevel(String::from(
            trimmed,
        )))
    }
}
