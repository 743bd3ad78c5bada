//! Least-squares fits for calibration and run-sequence curves.
//!
//! ## Purpose
//!
//! This module provides the two regression primitives shared by the
//! visualization layers:
//! - Simple ordinary least squares (slope, intercept, R-squared).
//! - Degree-2 polynomial least squares via the normal equations, including
//!   generic and SIMD-optimized power-sum accumulation.
//!
//! ## Design notes
//!
//! * **Sentinels over errors**: degenerate inputs produce well-defined
//!   sentinel results (NaN R-squared, all-zero quadratic coefficients)
//!   rather than errors. Plotting callers treat sentinels as "no curve to
//!   draw". Input validation lives in the engine layer, not here.
//! * **No variance clamping**: an all-equal-x input yields a NaN/infinite
//!   slope that propagates to the caller unchanged.
//! * **SIMD**: power sums accumulate through `wide` lanes for `f32`/`f64`,
//!   with a scalar fallback for other `Float` types.
//!
//! ## Key concepts
//!
//! * **Normal equations**: `A·[a,b,c]ᵗ = B` with `A` built from power sums
//!   of x up to order 4 and `B` from `Σy, Σxy, Σx²y`.
//! * **Singularity test**: the determinant is compared against an epsilon
//!   scaled by a Hadamard-style bound (product of row magnitudes), so
//!   rank-deficient systems assembled under roundoff still hit the
//!   degenerate path.
//!
//! ## Invariants
//!
//! * `QuadFit::fit` never returns non-finite coefficients for finite input;
//!   a singular or under-determined system yields `{0, 0, 0}`.
//! * Fit results are pure functions of the input slices.
//!
//! ## Non-goals
//!
//! * This module does not compute prediction intervals (evaluation layer).
//! * This module does not validate input lengths or finiteness.

// External dependencies
use num_traits::Float;
use wide::{f32x8, f64x2};

// Internal dependencies
use crate::primitives::matrix::Matrix3;

// ============================================================================
// Power Sums
// ============================================================================

/// Accumulated power sums for the quadratic normal equations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerSums<T> {
    /// Sum of x.
    pub x: T,

    /// Sum of x^2.
    pub x2: T,

    /// Sum of x^3.
    pub x3: T,

    /// Sum of x^4.
    pub x4: T,

    /// Sum of y.
    pub y: T,

    /// Sum of x*y.
    pub xy: T,

    /// Sum of x^2*y.
    pub x2y: T,
}

impl<T: Float> PowerSums<T> {
    /// Create a zero-initialized accumulator.
    pub fn zero() -> Self {
        Self {
            x: T::zero(),
            x2: T::zero(),
            x3: T::zero(),
            x4: T::zero(),
            y: T::zero(),
            xy: T::zero(),
            x2y: T::zero(),
        }
    }
}

// ============================================================================
// Generic Accumulation
// ============================================================================

/// Scalar power-sum accumulation (generic Float).
#[inline]
pub fn accumulate_power_sums_scalar<T: Float>(x: &[T], y: &[T]) -> PowerSums<T> {
    let n = x.len();
    let mut sums = PowerSums::zero();

    for i in 0..n {
        let x_val = x[i];
        let y_val = y[i];
        let x_sq = x_val * x_val;

        sums.x = sums.x + x_val;
        sums.x2 = sums.x2 + x_sq;
        sums.x3 = sums.x3 + x_sq * x_val;
        sums.x4 = sums.x4 + x_sq * x_sq;
        sums.y = sums.y + y_val;
        sums.xy = sums.xy + x_val * y_val;
        sums.x2y = sums.x2y + x_sq * y_val;
    }

    sums
}

// ============================================================================
// Specialized Accumulation (SIMD)
// ============================================================================

/// SIMD-optimized power-sum accumulation (f64).
#[inline]
pub fn accumulate_power_sums_simd_f64(x: &[f64], y: &[f64]) -> PowerSums<f64> {
    let n = x.len();
    if n == 0 {
        return PowerSums::zero();
    }

    let mut i = 0;
    let mut s_x = f64x2::splat(0.0);
    let mut s_x2 = f64x2::splat(0.0);
    let mut s_x3 = f64x2::splat(0.0);
    let mut s_x4 = f64x2::splat(0.0);
    let mut s_y = f64x2::splat(0.0);
    let mut s_xy = f64x2::splat(0.0);
    let mut s_x2y = f64x2::splat(0.0);

    unsafe {
        while i + 2 <= n {
            let x_val = f64x2::new([*x.get_unchecked(i), *x.get_unchecked(i + 1)]);
            let y_val = f64x2::new([*y.get_unchecked(i), *y.get_unchecked(i + 1)]);

            let x_sq = x_val * x_val;

            s_x += x_val;
            s_x2 += x_sq;
            s_x3 += x_sq * x_val;
            s_x4 += x_sq * x_sq;
            s_y += y_val;
            s_xy += x_val * y_val;
            s_x2y += x_sq * y_val;

            i += 2;
        }
    }

    let mut sums = PowerSums {
        x: s_x.reduce_add(),
        x2: s_x2.reduce_add(),
        x3: s_x3.reduce_add(),
        x4: s_x4.reduce_add(),
        y: s_y.reduce_add(),
        xy: s_xy.reduce_add(),
        x2y: s_x2y.reduce_add(),
    };

    unsafe {
        while i < n {
            let x_val = *x.get_unchecked(i);
            let y_val = *y.get_unchecked(i);

            let x_sq = x_val * x_val;

            sums.x += x_val;
            sums.x2 += x_sq;
            sums.x3 += x_sq * x_val;
            sums.x4 += x_sq * x_sq;
            sums.y += y_val;
            sums.xy += x_val * y_val;
            sums.x2y += x_sq * y_val;

            i += 1;
        }
    }

    sums
}

/// SIMD-optimized power-sum accumulation (f32).
#[inline]
pub fn accumulate_power_sums_simd_f32(x: &[f32], y: &[f32]) -> PowerSums<f32> {
    let n = x.len();
    if n == 0 {
        return PowerSums::zero();
    }

    let mut i = 0;
    let mut s_x = f32x8::splat(0.0);
    let mut s_x2 = f32x8::splat(0.0);
    let mut s_x3 = f32x8::splat(0.0);
    let mut s_x4 = f32x8::splat(0.0);
    let mut s_y = f32x8::splat(0.0);
    let mut s_xy = f32x8::splat(0.0);
    let mut s_x2y = f32x8::splat(0.0);

    unsafe {
        while i + 8 <= n {
            let x_val = f32x8::new([
                *x.get_unchecked(i),
                *x.get_unchecked(i + 1),
                *x.get_unchecked(i + 2),
                *x.get_unchecked(i + 3),
                *x.get_unchecked(i + 4),
                *x.get_unchecked(i + 5),
                *x.get_unchecked(i + 6),
                *x.get_unchecked(i + 7),
            ]);
            let y_val = f32x8::new([
                *y.get_unchecked(i),
                *y.get_unchecked(i + 1),
                *y.get_unchecked(i + 2),
                *y.get_unchecked(i + 3),
                *y.get_unchecked(i + 4),
                *y.get_unchecked(i + 5),
                *y.get_unchecked(i + 6),
                *y.get_unchecked(i + 7),
            ]);

            let x_sq = x_val * x_val;

            s_x += x_val;
            s_x2 += x_sq;
            s_x3 += x_sq * x_val;
            s_x4 += x_sq * x_sq;
            s_y += y_val;
            s_xy += x_val * y_val;
            s_x2y += x_sq * y_val;

            i += 8;
        }
    }

    let mut sums = PowerSums {
        x: s_x.reduce_add(),
        x2: s_x2.reduce_add(),
        x3: s_x3.reduce_add(),
        x4: s_x4.reduce_add(),
        y: s_y.reduce_add(),
        xy: s_xy.reduce_add(),
        x2y: s_x2y.reduce_add(),
    };

    unsafe {
        while i < n {
            let x_val = *x.get_unchecked(i);
            let y_val = *y.get_unchecked(i);

            let x_sq = x_val * x_val;

            sums.x += x_val;
            sums.x2 += x_sq;
            sums.x3 += x_sq * x_val;
            sums.x4 += x_sq * x_sq;
            sums.y += y_val;
            sums.xy += x_val * y_val;
            sums.x2y += x_sq * y_val;

            i += 1;
        }
    }

    sums
}

// ============================================================================
// Solver Trait
// ============================================================================

/// Trait for type-specific power-sum accumulation.
pub trait QuadSolver: Float {
    /// Accumulate the power sums for the quadratic normal equations.
    #[inline]
    fn accumulate_power_sums(x: &[Self], y: &[Self]) -> PowerSums<Self> {
        accumulate_power_sums_scalar(x, y)
    }
}

impl QuadSolver for f64 {
    #[inline]
    fn accumulate_power_sums(x: &[f64], y: &[f64]) -> PowerSums<f64> {
        accumulate_power_sums_simd_f64(x, y)
    }
}

impl QuadSolver for f32 {
    #[inline]
    fn accumulate_power_sums(x: &[f32], y: &[f32]) -> PowerSums<f32> {
        accumulate_power_sums_simd_f32(x, y)
    }
}

// ============================================================================
// LinearFit
// ============================================================================

/// Simple linear regression fit result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit<T: Float> {
    /// Slope (beta_1).
    pub slope: T,

    /// Intercept (beta_0).
    pub intercept: T,

    /// Coefficient of determination. NaN when the total sum of squares is
    /// zero (all y identical); callers treat that as "undefined fit
    /// quality", not as a failure.
    pub r_squared: T,
}

impl<T: Float> LinearFit<T> {
    /// Create a zero-initialized fit.
    pub fn zero() -> Self {
        Self {
            slope: T::zero(),
            intercept: T::zero(),
            r_squared: T::zero(),
        }
    }

    /// Predict the y-value for a given x using the model.
    #[inline]
    pub fn predict(&self, x: T) -> T {
        self.intercept + self.slope * x
    }

    /// Fit ordinary least squares regression of y on x.
    ///
    /// Assumes `x` and `y` have equal length n >= 1 (the engine validates
    /// this before calling). An all-equal-x input produces a NaN or
    /// infinite slope, deliberately unclamped.
    pub fn fit(x: &[T], y: &[T]) -> Self {
        let n = x.len();
        let n_t = T::from(n).unwrap_or(T::one());

        let mut sum_x = T::zero();
        let mut sum_y = T::zero();

        for i in 0..n {
            sum_x = sum_x + x[i];
            sum_y = sum_y + y[i];
        }

        let x_mean = sum_x / n_t;
        let y_mean = sum_y / n_t;

        let mut s_xx = T::zero();
        let mut s_xy = T::zero();

        for i in 0..n {
            let dx = x[i] - x_mean;
            s_xx = s_xx + dx * dx;
            s_xy = s_xy + dx * (y[i] - y_mean);
        }

        let slope = s_xy / s_xx;
        let intercept = y_mean - slope * x_mean;

        let mut sse = T::zero();
        let mut sst = T::zero();

        for i in 0..n {
            let residual = y[i] - (intercept + slope * x[i]);
            let dy = y[i] - y_mean;
            sse = sse + residual * residual;
            sst = sst + dy * dy;
        }

        let r_squared = T::one() - sse / sst;

        Self {
            slope,
            intercept,
            r_squared,
        }
    }
}

// ============================================================================
// QuadFit
// ============================================================================

/// Degree-2 polynomial fit result for `y = a*x^2 + b*x + c`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadFit<T: Float> {
    /// Quadratic coefficient.
    pub a: T,

    /// Linear coefficient.
    pub b: T,

    /// Constant coefficient.
    pub c: T,
}

impl<T: Float> QuadFit<T> {
    /// Create the all-zero degenerate fit.
    pub fn zero() -> Self {
        Self {
            a: T::zero(),
            b: T::zero(),
            c: T::zero(),
        }
    }

    /// Predict the y-value for a given x using the model.
    #[inline]
    pub fn predict(&self, x: T) -> T {
        (self.a * x + self.b) * x + self.c
    }

    /// `true` for the all-zero sentinel, meaning "no curve to draw".
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.a == T::zero() && self.b == T::zero() && self.c == T::zero()
    }
}

impl<T: Float + QuadSolver> QuadFit<T> {
    /// Fit a degree-2 polynomial by ordinary least squares.
    ///
    /// Builds the 3x3 normal-equations system from power sums of x and
    /// solves it through [`Matrix3`]. Fewer than 3 points or a singular
    /// system yields the all-zero sentinel rather than an error.
    pub fn fit(x: &[T], y: &[T]) -> Self {
        let n = x.len();
        if n < 3 {
            return Self::zero();
        }

        let sums = T::accumulate_power_sums(x, y);
        let n_t = T::from(n).unwrap_or(T::one());

        let system = Matrix3::new([
            [sums.x2, sums.x, n_t],
            [sums.x3, sums.x2, sums.x],
            [sums.x4, sums.x3, sums.x2],
        ]);
        let rhs = [sums.y, sums.xy, sums.x2y];

        let det = system.determinant();

        // Hadamard-style scale: product of row magnitudes. Rank-deficient
        // systems (e.g., all-identical x) land at or below epsilon of this
        // bound even when roundoff keeps the determinant non-zero.
        let scale = row_magnitude(&system.m[0])
            * row_magnitude(&system.m[1])
            * row_magnitude(&system.m[2]);
        let tol = T::epsilon() * scale;

        if !det.is_finite() || det.abs() <= tol {
            return Self::zero();
        }

        let [a, b, c] = system.inverse(det).mul_vec(rhs);
        Self { a, b, c }
    }
}

// Largest absolute entry of one normal-equation row.
#[inline]
fn row_magnitude<T: Float>(row: &[T; 3]) -> T {
    row[0].abs().max(row[1].abs()).max(row[2].abs())
}
