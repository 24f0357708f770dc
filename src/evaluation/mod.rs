//! Layer 3: Evaluation
//!
//! # Purpose
//!
//! This layer derives high-level results from simulated statistics:
//! - Empirical p-value computation with a configurable tail rule
//! - Exact enumeration of the permutation null for small datasets
//! - Per-group descriptive summaries
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Evaluation ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Empirical p-value computation.
pub mod pvalue;

/// Exact enumeration of the permutation null distribution.
pub mod exact;

/// Per-group descriptive summaries.
pub mod summary;
