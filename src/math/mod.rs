//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure mathematical building blocks of the crate:
//! - Least-squares fits (linear and quadratic)
//! - Student's-t critical value lookup
//! - Box-Cox transform and lambda search
//!
//! These are reusable numeric routines with no screening- or
//! orchestration-specific logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Screening
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Linear and quadratic least-squares fits.
pub mod regression;

/// Student's-t critical values and confidence levels.
pub mod ttable;

/// Box-Cox transform and profile-likelihood search.
pub mod boxcox;
