//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer calculates higher-level statistics on top of the fitted
//! models: per-point prediction intervals for calibration curves.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Screening
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Prediction interval computation.
pub mod intervals;
