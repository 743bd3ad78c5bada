//! # ntastat — Statistics for Non-Targeted Analysis Review
//!
//! Calibration-curve regression, Box-Cox transform selection, and
//! threshold-based occurrence screening for non-targeted analysis (NTA)
//! mass-spectrometry data, in pure **Rust**.
//!
//! ## What is NTA screening?
//!
//! Non-targeted analysis detects chemical features without reference
//! standards, so every reported feature needs statistical vetting. This
//! crate covers the three numeric steps of that review: fitting calibration
//! lines (with Student's-t prediction bands) to concentration series,
//! finding the Box-Cox lambda that best normalizes skewed abundance data,
//! and classifying each feature occurrence against replicate-detection, CV,
//! and method-reporting-limit (MRL) thresholds under two threshold sets at
//! once.
//!
//! ## Quick Start
//!
//! ### Typical Use
//!
//! ```rust
//! use ntastat::prelude::*;
//!
//! let x = vec![0.0, 1.0, 2.0];
//! let y = vec![1.0, 3.0, 5.0];
//!
//! // Build the model
//! let model = CalCurve::new().build()?;
//!
//! // Fit the calibration line
//! let curve = model.fit(&x, &y)?;
//!
//! println!("{}", curve);
//! # Result::<(), NtaStatError>::Ok(())
//! ```
//!
//! ```text
//! Summary:
//!   Points:    3
//!   Slope:     2.000000
//!   Intercept: 1.000000
//!   R-squared: 1.000000
//! ```
//!
//! ### Full Features
//!
//! ```rust
//! use ntastat::prelude::*;
//!
//! // Calibration line with a 95% prediction band
//! let x = vec![0.0, 1.0, 2.0, 3.0, 4.0];
//! let y = vec![1.2, 2.9, 5.1, 7.0, 9.1];
//! let curve = CalCurve::new()
//!     .intervals(P95)
//!     .build()?
//!     .fit(&x, &y)?;
//! assert!(curve.has_band());
//!
//! // Box-Cox lambda search over a custom grid
//! let areas = vec![12.0, 55.0, 130.0, 210.0, 460.0, 980.0];
//! let transform = BoxCox::new()
//!     .range(-2.0, 2.0)
//!     .step(0.05)
//!     .build()?
//!     .fit(&areas)?;
//! assert!(transform.lambda >= -2.0 && transform.lambda <= 2.0);
//!
//! // Two-set occurrence screen with the default presets
//! let rows = vec![FeatureRow {
//!     feature_id: "F00172".into(),
//!     blank: Some(BlankStats {
//!         mean: 4.0e3,
//!         std_dev: 1.1e3,
//!         replicate_pct: 100.0,
//!     }),
//!     occurrences: vec![
//!         Occurrence {
//!             sample: "Pool_1".into(),
//!             detection_count: 3,
//!             replicate_pct: 100.0,
//!             cv: 0.22,
//!             mean: 9.4e4,
//!         },
//!         Occurrence {
//!             sample: "MB_1".into(),
//!             detection_count: 2,
//!             replicate_pct: 66.7,
//!             cv: 0.35,
//!             mean: 4.2e3,
//!         },
//!     ],
//! }];
//! let report = OccurrenceScreen::new().build()?.run(&rows)?;
//! assert_eq!(report.features_screened(), 1);
//! assert_eq!(report.a.counts.features.present, 1);
//! # Result::<(), NtaStatError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! The `fit` and `run` methods return `Result<_, NtaStatError>`, and the `?`
//! operator is idiomatic:
//!
//! ```rust
//! use ntastat::prelude::*;
//! # let x = vec![0.0, 1.0, 2.0];
//! # let y = vec![1.0, 3.0, 5.0];
//!
//! let model = CalCurve::new().intervals(P95).build()?;
//!
//! let curve = model.fit(&x, &y)?;
//! // or to be more explicit:
//! // let curve: CalCurveFit<f64> = model.fit(&x, &y)?;
//! # Result::<(), NtaStatError>::Ok(())
//! ```
//!
//! But you can also handle results explicitly:
//!
//! ```rust
//! use ntastat::prelude::*;
//! # let x = vec![0.0, 1.0, 2.0];
//! # let y = vec![1.0, 3.0, 5.0];
//!
//! let model = CalCurve::new().build()?;
//!
//! match model.fit(&x, &y) {
//!     Ok(curve) => {
//!         println!("slope: {:.4}", curve.fit.slope);
//!     }
//!     Err(e) => {
//!         eprintln!("fit failed: {}", e);
//!     }
//! }
//! # Result::<(), NtaStatError>::Ok(())
//! ```
//!
//! Degenerate *data* is reported through sentinels rather than errors, the
//! way downstream plotting code expects: a flat line yields `R² = NaN`, an
//! unsolvable quadratic yields all-zero coefficients, and a Box-Cox grid
//! point can sit at `-inf` log-likelihood.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments for instrument-adjacent and
//! resource-constrained systems. Disable default features and enable
//! `libm`, which supplies the float math the standard library normally
//! provides:
//!
//! ```toml
//! [dependencies]
//! ntastat = { version = "0.4", default-features = false, features = ["libm"] }
//! ```
//!
//! **Tips for embedded/no_std usage:**
//! - Use `f32` instead of `f64` to reduce memory footprint
//! - Keep the Box-Cox grid coarse (larger `step`) to reduce computation time
//! - Skip prediction bands when only slopes and intercepts are needed
//!
//! ## References
//!
//! - Box, G. E. P. and Cox, D. R. (1964). "An Analysis of Transformations"
//! - Draper, N. R. and Smith, H. (1998). "Applied Regression Analysis" (prediction intervals)
//!
//! ## License
//!
//! See the repository for license information and contribution guidelines.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - error types and small linear-algebra helpers.
mod primitives;

// Layer 2: Math - regression, critical values, Box-Cox.
mod math;

// Layer 3: Screening - occurrence classification and tallies.
mod screening;

// Layer 4: Evaluation - prediction bands.
mod evaluation;

// Layer 5: Engine - orchestration and execution control.
mod engine;

// High-level fluent API.
mod api;

// Standard prelude.
pub mod prelude {
    pub use crate::api::{
        BlankStats, BoxCoxBuilder as BoxCox, BoxCoxFit, CalCurveBuilder as CalCurve, CalCurveFit,
        ConfidenceLevel,
        ConfidenceLevel::{P50, P60, P70, P80, P90, P95, P98, P99},
        FeatureDecision, FeatureRow, IntervalPoint, LambdaPoint, LinearFit, NtaStatError,
        Occurrence, Outcome,
        Outcome::{
            FailCvOverMrl, FailCvUnderMrl, Missing, PassCvOverMrl, PassCvUnderMrl, Present,
            UnderReplicate,
        },
        OutcomeCounts, QuadFit, ScreenBuilder as OccurrenceScreen, ScreenCounts, ScreenReport,
        ThresholdConfig, ThresholdScreen, box_cox_log_likelihood,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod screening {
        pub use crate::screening::*;
    }
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
