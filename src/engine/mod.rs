//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer orchestrates the pipelines by coordinating the math,
//! screening, and evaluation layers. It validates inputs, runs the fits and
//! screens, and assembles the user-facing result types.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Screening
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Execution entry points for the three pipelines.
pub mod executor;

/// Validation utilities.
pub mod validator;

/// Output types for fits and screens.
pub mod output;
