//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure statistic functions computed on a grouped
//! dataset. It is side-effect free and allocation free.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Evaluation
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Two-group test statistics.
pub mod statistic;
