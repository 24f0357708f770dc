//! Execution engine for permutation test operations.
//!
//! ## Purpose
//!
//! This module provides the core execution engine that orchestrates a
//! permutation test run. It computes the observed statistic, generates the
//! null distribution (by Monte Carlo relabeling or exact enumeration), and
//! derives the empirical p-value.
//!
//! ## Design notes
//!
//! * **Shuffle, don't rebuild**: The Monte Carlo loop shuffles a single
//!   working copy of the outcomes in place with Fisher-Yates and treats the
//!   first k entries as the relabeled control group. Each draw is a uniform
//!   relabeling that preserves both group sizes by construction.
//! * **Count-based statistic**: Only the control-side success sum changes
//!   per draw; the statistic is evaluated from counts.
//! * **Memory control**: The null distribution is retained only on request;
//!   the p-value is accumulated from a running extreme-count either way.
//! * **Generic over `Float` types** to support f32 and f64.
//!
//! ## Invariants
//!
//! * Every simulated relabeling has exactly `control_len` control members.
//! * The number of draws equals the configured resamples (Monte Carlo) or
//!   C(n, k) (exact).
//! * The reported p-value lies in [0, 1].
//!
//! ## Non-goals
//!
//! * This module does not validate input data (handled by `validator`).
//! * This module does not provide public-facing result formatting.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::evaluation::exact::for_each_statistic;
use crate::evaluation::pvalue::{p_value_from_counts, Comparison};
use crate::math::statistic::TestStatistic;
use crate::primitives::dataset::Dataset;
use crate::primitives::errors::PermutationError;
use crate::primitives::rng::{Lcg64, DEFAULT_SEED};

// ============================================================================
// Constants
// ============================================================================

/// Default Monte Carlo resample count.
pub const DEFAULT_RESAMPLES: usize = 10_000;

// ============================================================================
// Resampling Method
// ============================================================================

/// How the null distribution is generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resampling {
    /// Monte Carlo approximation with the configured resample count.
    MonteCarlo,

    /// Full enumeration of all C(n, k) relabelings.
    Exact,
}

// ============================================================================
// Executor Output
// ============================================================================

/// Output from permutation test execution.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutorOutput<T> {
    /// Observed statistic on the original labeling.
    pub observed: T,

    /// Empirical p-value under the configured comparison rule.
    pub p_value: T,

    /// Number of relabelings drawn (resamples, or C(n, k) for exact runs).
    pub draws: usize,

    /// Simulated null statistics (if retention was requested).
    pub null_distribution: Option<Vec<T>>,
}

// ============================================================================
// Executor
// ============================================================================

/// Unified executor for permutation test operations.
#[derive(Debug, Clone)]
pub struct PermutationExecutor {
    /// Test statistic computed on each relabeling.
    pub statistic: TestStatistic,

    /// Tail rule for the empirical p-value.
    pub comparison: Comparison,

    /// Monte Carlo resample count.
    pub resamples: usize,

    /// PRNG seed for Monte Carlo shuffling.
    pub seed: u64,

    /// Whether to retain the simulated null distribution in the output.
    pub keep_null: bool,
}

impl Default for PermutationExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl PermutationExecutor {
    // ========================================================================
    // Constructor and Builder Methods
    // ========================================================================

    /// Create a new executor with default parameters.
    pub fn new() -> Self {
        Self {
            statistic: TestStatistic::default(),
            comparison: Comparison::default(),
            resamples: DEFAULT_RESAMPLES,
            seed: DEFAULT_SEED,
            keep_null: false,
        }
    }

    /// Set the test statistic.
    pub fn statistic(mut self, statistic: TestStatistic) -> Self {
        self.statistic = statistic;
        self
    }

    /// Set the p-value comparison rule.
    pub fn comparison(mut self, comparison: Comparison) -> Self {
        self.comparison = comparison;
        self
    }

    /// Set the Monte Carlo resample count.
    pub fn resamples(mut self, resamples: usize) -> Self {
        self.resamples = resamples;
        self
    }

    /// Set the PRNG seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set whether the null distribution is retained in the output.
    pub fn keep_null(mut self, keep: bool) -> Self {
        self.keep_null = keep;
        self
    }

    // ========================================================================
    // Main Entry Point
    // ========================================================================

    /// Run the permutation test on a validated dataset.
    pub fn run<T: Float>(
        &self,
        data: &Dataset<T>,
        method: Resampling,
    ) -> Result<ExecutorOutput<T>, PermutationError> {
        let observed = self.statistic.observed(data);

        match method {
            Resampling::MonteCarlo => Ok(self.monte_carlo(data, observed)),
            Resampling::Exact => self.exact(data, observed),
        }
    }

    // ========================================================================
    // Resampling Implementations
    // ========================================================================

    /// Approximate the null distribution by repeated uniform relabeling.
    fn monte_carlo<T: Float>(&self, data: &Dataset<T>, observed: T) -> ExecutorOutput<T> {
        let k = data.control_len();
        let n_b = data.treatment_len();
        let total_successes = data.total_successes();

        let mut rng = Lcg64::new(self.seed);
        let mut pool = data.outcomes().to_vec();
        let mut null = if self.keep_null {
            Vec::with_capacity(self.resamples)
        } else {
            Vec::new()
        };
        let mut extreme = 0usize;

        for _ in 0..self.resamples {
            // Reshuffling the already-shuffled pool is still a uniform draw;
            // group sizes are fixed by the partition point k.
            rng.shuffle(&mut pool);

            let control_successes = pool[..k]
                .iter()
                .copied()
                .fold(T::zero(), |acc, v| acc + v);
            let treatment_successes = total_successes - control_successes;
            let simulated = self
                .statistic
                .evaluate(control_successes, k, treatment_successes, n_b);

            if self.comparison.is_extreme(simulated, observed) {
                extreme += 1;
            }
            if self.keep_null {
                null.push(simulated);
            }
        }

        ExecutorOutput {
            observed,
            p_value: p_value_from_counts(extreme, self.resamples),
            draws: self.resamples,
            null_distribution: if self.keep_null { Some(null) } else { None },
        }
    }

    /// Compute the null distribution exactly by full enumeration.
    fn exact<T: Float>(
        &self,
        data: &Dataset<T>,
        observed: T,
    ) -> Result<ExecutorOutput<T>, PermutationError> {
        let mut null = Vec::new();
        let mut extreme = 0usize;
        let mut draws = 0usize;

        let keep_null = self.keep_null;
        let comparison = self.comparison;
        for_each_statistic(data, self.statistic, |simulated| {
            draws += 1;
            if comparison.is_extreme(simulated, observed) {
                extreme += 1;
            }
            if keep_null {
                null.push(simulated);
            }
        })?;

        Ok(ExecutorOutput {
            observed,
            p_value: p_value_from_counts(extreme, draws),
            draws,
            null_distribution: if keep_null { Some(null) } else { None },
        })
    }
}
