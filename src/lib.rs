//! # Permutest — Permutation Tests for Two-Sample Experiments
//!
//! A small, dependency-light permutation (randomization) test engine for
//! two-sample experiments with binary outcomes, such as randomized
//! controlled trials with a success/failure endpoint.
//!
//! ## What is a permutation test?
//!
//! A permutation test evaluates the null hypothesis that two groups are
//! exchangeable: if group membership carries no information, then any
//! relabeling of the observations is equally likely. The test computes an
//! observed statistic (by default the absolute difference of group
//! proportions), approximates the statistic's null distribution by
//! repeatedly relabeling the data uniformly at random while preserving
//! group sizes, and reports the empirical p-value — the fraction of
//! simulated statistics at least as extreme as the observed one.
//!
//! ## Quick Start
//!
//! ```rust
//! use permutest::prelude::*;
//!
//! // Binary outcomes: 1.0 = success, 0.0 = failure
//! let control = vec![1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0];
//! let treatment = vec![1.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0];
//!
//! let test = PermutationTest::new()
//!     .resamples(20_000)      // Monte Carlo repetitions
//!     .seed(42)               // Reproducible shuffling
//!     .build()?;
//!
//! let result = test.run(&control, &treatment)?;
//!
//! println!("observed = {}", result.observed);
//! println!("p-value  = {}", result.p_value);
//! # Result::<(), PermutationError>::Ok(())
//! ```
//!
//! ## Full Features
//!
//! ```rust
//! use permutest::prelude::*;
//!
//! let control = vec![1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
//! let treatment = vec![1.0, 1.0, 0.0, 1.0, 1.0];
//!
//! let test = PermutationTest::new()
//!     .resamples(10_000)                 // Monte Carlo repetitions
//!     .seed(7)                           // PRNG seed
//!     .statistic(AbsMeanDifference)      // Test statistic
//!     .comparison(GreaterOrEqual)        // Tail rule for the p-value
//!     .keep_null_distribution()          // Retain simulated statistics
//!     .return_summary()                  // Per-group counts and rates
//!     .build()?;
//!
//! let result = test.run(&control, &treatment)?;
//! println!("{}", result);
//! # Result::<(), PermutationError>::Ok(())
//! ```
//!
//! ## Exact Enumeration
//!
//! For small datasets the Monte Carlo loop can be replaced with a full
//! enumeration of all `C(n, k)` relabelings, which yields the exact
//! permutation p-value:
//!
//! ```rust
//! use permutest::prelude::*;
//!
//! let control: Vec<f64> = vec![1.0, 1.0, 0.0];
//! let treatment = vec![0.0, 0.0];
//!
//! let result = PermutationTest::new().exact().build()?.run(&control, &treatment)?;
//! assert!((result.p_value - 0.4).abs() < 1e-12);
//! # Result::<(), PermutationError>::Ok(())
//! ```
//!
//! ## Result and Error Handling
//!
//! The `run` methods return `Result<PermutationResult<T>, PermutationError>`.
//! Malformed input (empty group, non-binary outcome, mismatched label
//! length) aborts the whole computation; there are no partial results.
//!
//! ## Minimal Usage (no_std)
//!
//! The crate supports `no_std` environments. Disable default features to
//! remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! permutest = { version = "0.1", default-features = false }
//! ```
//!
//! ## References
//!
//! - Fisher, R. A. (1935). "The Design of Experiments"
//! - Ernst, M. D. (2004). "Permutation Methods: A Basis for Exact Inference"

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - data structures and basic utilities.
mod primitives;

// Layer 2: Math - pure statistic functions.
mod math;

// Layer 3: Evaluation - p-value rules, exact enumeration, summaries.
mod evaluation;

// Layer 4: Engine - validation, resampling execution, output types.
mod engine;

// High-level fluent API for permutation testing.
mod api;

// Standard permutest prelude.
pub mod prelude {
    pub use crate::api::{
        Comparison::GreaterOrEqual,
        Comparison::LessOrEqual,
        Group, PermutationError, PermutationResult, PermutationTestBuilder as PermutationTest,
        TestStatistic::AbsMeanDifference,
        TestStatistic::MeanDifference,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing
// purposes. It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
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
