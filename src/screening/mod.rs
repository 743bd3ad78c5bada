//! Layer 3: Screening
//!
//! # Purpose
//!
//! This layer classifies feature occurrences against configurable quality
//! thresholds (replicate percentage, coefficient of variation, minimum
//! reporting level) and aggregates the decisions into occurrence-level and
//! feature-level count tables.
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
//! Layer 3: Screening ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Threshold sets and stock presets.
pub mod thresholds;

/// Occurrence records and the per-occurrence decision sequence.
pub mod occurrence;

/// Count tables and the pure screening pass.
pub mod tally;
