//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer orchestrates the permutation test by coordinating between
//! primitives (dataset, RNG), math (statistics), and evaluation (p-values,
//! exact enumeration). It provides the resampling loop and result assembly.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Evaluation
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Resampling execution engine.
pub mod executor;

/// Validation utilities.
pub mod validator;

/// Output types for permutation test operations.
pub mod output;
