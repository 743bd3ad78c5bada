//! Box-Cox power transform and profile-likelihood lambda search.
//!
//! ## Purpose
//!
//! This module provides the variance-stabilizing transform applied to
//! response-factor values before histogramming, and the brute-force grid
//! search that picks the transform parameter lambda by maximizing the
//! profile log-likelihood.
//!
//! ## Design notes
//!
//! * **Grid, not optimizer**: the search is a plain ascending scan at fixed
//!   step. No refinement or interpolation happens beyond grid resolution,
//!   and ties keep the first (smallest) lambda encountered.
//! * **Full curve returned**: every `(lambda, ll)` pair is kept so the
//!   caller can chart the likelihood profile next to the histogram.
//! * **Hoisted log term**: `Σ ln(xᵢ)` does not depend on lambda and is
//!   computed once per scan.
//!
//! ## Key concepts
//!
//! * **Transform**: `lambda == 0` maps to `ln(v)`; otherwise
//!   `(v^lambda - 1) / lambda`.
//! * **Profile log-likelihood**:
//!   `ll(λ) = (λ-1)·Σln(xᵢ) - (n/2)·ln(Σ(tᵢ-t̄)²/n)` over the transformed
//!   values `tᵢ`.
//!
//! ## Invariants
//!
//! * Inputs are strictly positive; the engine validates this before any
//!   call (the transform and `ln` are undefined at or below zero).
//! * A constant transformed sample yields `ll = -∞`, which the
//!   strict-greater comparison never selects.
//!
//! ## Non-goals
//!
//! * This module does not bin or histogram the transformed values.
//! * This module does not validate positivity (engine layer).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// ============================================================================
// Lambda Curve Point
// ============================================================================

/// One sample of the profile log-likelihood curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LambdaPoint<T> {
    /// Candidate transform parameter.
    pub lambda: T,

    /// Profile log-likelihood at that parameter.
    pub log_likelihood: T,
}

// ============================================================================
// Transform
// ============================================================================

/// Apply the Box-Cox transform to a single value.
///
/// `lambda == 0` returns `ln(value)`; any other lambda returns
/// `(value^lambda - 1) / lambda`. At `lambda == 1` this reduces to
/// `value - 1`.
#[inline]
pub fn transform<T: Float>(value: T, lambda: T) -> T {
    if lambda == T::zero() {
        value.ln()
    } else {
        (value.powf(lambda) - T::one()) / lambda
    }
}

// ============================================================================
// Profile Log-Likelihood
// ============================================================================

/// Sum of natural logs, the lambda-independent likelihood term.
fn log_sum<T: Float>(values: &[T]) -> T {
    values.iter().fold(T::zero(), |acc, &v| acc + v.ln())
}

/// Profile log-likelihood with a precomputed log-sum and scratch buffer.
fn profile_ll<T: Float>(lambda: T, values: &[T], log_term: T, transformed: &mut [T]) -> T {
    let n_t = T::from(values.len()).unwrap_or(T::one());
    let two = T::from(2.0).unwrap();

    for (slot, &v) in transformed.iter_mut().zip(values.iter()) {
        *slot = transform(v, lambda);
    }

    // A constant transformed sample has no likelihood maximum; park it at
    // -inf so the strict-greater scan never selects it. Checked on the
    // values themselves because the rounded mean can leave the two-pass
    // variance a hair above zero.
    if let Some((&first, rest)) = transformed.split_first() {
        if rest.iter().all(|&t| t == first) {
            return T::neg_infinity();
        }
    }

    let mut sum = T::zero();
    for &t in transformed.iter() {
        sum = sum + t;
    }
    let mean = sum / n_t;

    let mut sum_sq = T::zero();
    for &t in transformed.iter() {
        let dev = t - mean;
        sum_sq = sum_sq + dev * dev;
    }
    let variance = sum_sq / n_t;

    // Distinct values can still underflow to a zero variance.
    if variance <= T::zero() {
        return T::neg_infinity();
    }

    (lambda - T::one()) * log_term - (n_t / two) * variance.ln()
}

/// Compute the profile log-likelihood of the values at one lambda.
///
/// Values must be strictly positive. A sample whose transformed values
/// all coincide returns `-inf`.
pub fn log_likelihood<T: Float>(lambda: T, values: &[T]) -> T {
    let mut transformed = vec![T::zero(); values.len()];
    profile_ll(lambda, values, log_sum(values), &mut transformed)
}

// ============================================================================
// Grid Search
// ============================================================================

/// Scan lambda over `[min, max]` in increments of `step`, maximizing the
/// profile log-likelihood.
///
/// Returns the winning lambda and the full likelihood curve in scan order.
/// The grid walks by repeated addition, so the effective endpoint carries
/// ordinary floating-point accumulation; ties keep the first lambda
/// encountered.
pub fn scan<T: Float>(values: &[T], min: T, max: T, step: T) -> (T, Vec<LambdaPoint<T>>) {
    let grid_hint = ((max - min) / step).to_usize().unwrap_or(0) + 1;
    let mut curve = Vec::with_capacity(grid_hint);

    let log_term = log_sum(values);
    let mut transformed = vec![T::zero(); values.len()];

    let mut best_lambda = min;
    let mut best_ll = T::neg_infinity();

    let mut lambda = min;
    while lambda <= max {
        let ll = profile_ll(lambda, values, log_term, &mut transformed);
        curve.push(LambdaPoint {
            lambda,
            log_likelihood: ll,
        });

        if ll > best_ll {
            best_ll = ll;
            best_lambda = lambda;
        }

        lambda = lambda + step;
    }

    (best_lambda, curve)
}
