//! Prediction intervals for calibration-curve fits.
//!
//! ## Purpose
//!
//! This module quantifies the uncertainty of an ordinary least-squares
//! calibration fit: per-point prediction bands wide enough to contain a new
//! observation at the requested confidence.
//!
//! ## Design notes
//!
//! * **Methodology**: classical Student's-t prediction intervals on a
//!   two-parameter linear fit.
//! * **Exact critical values**: the t quantile comes from the tabulated
//!   [`ConfidenceLevel`] lookup, never a normal approximation. Degrees of
//!   freedom outside the table are a hard error.
//! * **Ordering**: output points are aligned with the input slices, one
//!   interval per calibration point.
//!
//! ## Key concepts
//!
//! * **MSE**: residual variance `SSE / (n - 2)` around the fitted line.
//! * **Leverage**: the `(x - x̄)² / Σ(x - x̄)²` term widens the band away
//!   from the center of the design.
//! * **Margin**: `t(level, n-2) * sqrt(mse * (1 + 1/n + leverage))`.
//!
//! ## Invariants
//!
//! * Bands are symmetric: `y_hat - lower == upper - y_hat`.
//! * Higher confidence produces strictly wider bands at every point.
//!
//! ## Non-goals
//!
//! * This module does not fit the line (see `math::regression`).
//! * This module does not provide confidence intervals for the mean curve.
//! * This module does not validate input lengths or finiteness.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::regression::LinearFit;
use crate::math::ttable::ConfidenceLevel;
use crate::primitives::errors::NtaStatError;

// ============================================================================
// Interval Point
// ============================================================================

/// Prediction band at one calibration point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntervalPoint<T> {
    /// The x-value the band is evaluated at.
    pub x: T,

    /// Fitted value at x.
    pub y_hat: T,

    /// Lower band edge.
    pub lower: T,

    /// Upper band edge.
    pub upper: T,
}

// ============================================================================
// Prediction Band
// ============================================================================

/// Compute the prediction band of an OLS fit at every input point.
///
/// `df = n - 2` must fall inside the Student's-t table (1 through 20, so
/// 3 to 22 points); anything else is a [`NtaStatError`]. All-identical x
/// makes the leverage term `0/0` and the band NaN, propagated unchanged
/// like the slope it comes from.
pub fn prediction_band<T: Float>(
    x: &[T],
    y: &[T],
    fit: &LinearFit<T>,
    level: ConfidenceLevel,
) -> Result<Vec<IntervalPoint<T>>, NtaStatError> {
    let n = x.len();
    let df = n.saturating_sub(2);
    let t_crit: T = level.critical_value(df)?;

    let n_t = T::from(n).unwrap_or(T::one());
    let df_t = T::from(df).unwrap_or(T::one());

    let mut sum_x = T::zero();
    for &xi in x {
        sum_x = sum_x + xi;
    }
    let x_mean = sum_x / n_t;

    let mut s_xx = T::zero();
    let mut sse = T::zero();
    for i in 0..n {
        let dx = x[i] - x_mean;
        s_xx = s_xx + dx * dx;

        let residual = y[i] - fit.predict(x[i]);
        sse = sse + residual * residual;
    }
    let mse = sse / df_t;

    let one = T::one();
    let mut band = Vec::with_capacity(n);

    for &xi in x {
        let y_hat = fit.predict(xi);
        let dx = xi - x_mean;
        let se_sq = mse * (one + one / n_t + (dx * dx) / s_xx);
        let margin = t_crit * se_sq.sqrt();

        band.push(IntervalPoint {
            x: xi,
            y_hat,
            lower: y_hat - margin,
            upper: y_hat + margin,
        });
    }

    Ok(band)
}
