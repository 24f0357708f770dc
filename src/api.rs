//! High-level API for permutation testing.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point for the crate.
//! It implements a fluent builder pattern for configuring a permutation
//! test and a validated runner that executes it against outcome data.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Parameters are validated when `.build()` is called;
//!   data is validated on every `run`.
//! * **Type-Safe**: Runs are generic over `Float` types for flexible precision.
//!
//! ## Key concepts
//!
//! * **Configuration Flow**: `PermutationTest::new()` (builder) →
//!   configuration methods → `.build()` → `PermutationRunner`.
//! * **Entry Points**: `run(control, treatment)` for pre-split groups,
//!   `run_labeled(outcomes, labels)` for combined tabular input.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::{PermutationExecutor, Resampling, DEFAULT_RESAMPLES};
use crate::engine::validator::Validator;
use crate::primitives::dataset::Dataset;
use crate::primitives::rng::DEFAULT_SEED;

// Publicly re-exported types
pub use crate::engine::output::PermutationResult;
pub use crate::evaluation::pvalue::Comparison;
pub use crate::evaluation::summary::GroupSummary;
pub use crate::math::statistic::TestStatistic;
pub use crate::primitives::dataset::Group;
pub use crate::primitives::errors::PermutationError;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring a permutation test.
#[derive(Debug, Clone, Default)]
pub struct PermutationTestBuilder {
    /// Monte Carlo resample count.
    pub resamples: Option<usize>,

    /// PRNG seed for reproducible shuffling.
    pub seed: Option<u64>,

    /// Test statistic.
    pub statistic: Option<TestStatistic>,

    /// Tail rule for the empirical p-value.
    pub comparison: Option<Comparison>,

    /// Use exact enumeration instead of Monte Carlo.
    pub exact: Option<bool>,

    /// Retain the simulated null distribution in the result.
    pub keep_null: Option<bool>,

    /// Include a per-group summary in the result.
    pub with_summary: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl PermutationTestBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the Monte Carlo resample count (default: 10,000).
    pub fn resamples(mut self, resamples: usize) -> Self {
        if self.resamples.is_some() {
            self.duplicate_param = Some("resamples");
        }
        self.resamples = Some(resamples);
        self
    }

    /// Set the PRNG seed for reproducible shuffling.
    ///
    /// Runs with the same seed, data, and configuration produce identical
    /// null distributions and p-values. A fixed default seed applies when
    /// this is not called.
    pub fn seed(mut self, seed: u64) -> Self {
        if self.seed.is_some() {
            self.duplicate_param = Some("seed");
        }
        self.seed = Some(seed);
        self
    }

    /// Set the test statistic (default: `AbsMeanDifference`).
    pub fn statistic(mut self, statistic: TestStatistic) -> Self {
        if self.statistic.is_some() {
            self.duplicate_param = Some("statistic");
        }
        self.statistic = Some(statistic);
        self
    }

    /// Set the p-value tail rule (default: `GreaterOrEqual`).
    pub fn comparison(mut self, comparison: Comparison) -> Self {
        if self.comparison.is_some() {
            self.duplicate_param = Some("comparison");
        }
        self.comparison = Some(comparison);
        self
    }

    /// Replace Monte Carlo resampling with exact enumeration of all
    /// C(n, k) relabelings. Only feasible for small datasets.
    pub fn exact(mut self) -> Self {
        if self.exact.is_some() {
            self.duplicate_param = Some("exact");
        }
        self.exact = Some(true);
        self
    }

    /// Retain the simulated null distribution in the result.
    pub fn keep_null_distribution(mut self) -> Self {
        self.keep_null = Some(true);
        self
    }

    /// Include per-group counts and rates in the result.
    pub fn return_summary(mut self) -> Self {
        self.with_summary = Some(true);
        self
    }

    /// Validate the configuration and build a runner.
    pub fn build(self) -> Result<PermutationRunner, PermutationError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let resamples = self.resamples.unwrap_or(DEFAULT_RESAMPLES);
        Validator::validate_resamples(resamples)?;

        let executor = PermutationExecutor::new()
            .statistic(self.statistic.unwrap_or_default())
            .comparison(self.comparison.unwrap_or_default())
            .resamples(resamples)
            .seed(self.seed.unwrap_or(DEFAULT_SEED))
            .keep_null(self.keep_null.unwrap_or(false));

        Ok(PermutationRunner {
            executor,
            method: if self.exact.unwrap_or(false) {
                Resampling::Exact
            } else {
                Resampling::MonteCarlo
            },
            with_summary: self.with_summary.unwrap_or(false),
        })
    }
}

// ============================================================================
// Runner
// ============================================================================

/// Validated permutation test, ready to run against outcome data.
#[derive(Debug, Clone)]
pub struct PermutationRunner {
    executor: PermutationExecutor,
    method: Resampling,
    with_summary: bool,
}

impl PermutationRunner {
    /// Run the test on two pre-split outcome groups.
    pub fn run<T: Float>(
        &self,
        control: &[T],
        treatment: &[T],
    ) -> Result<PermutationResult<T>, PermutationError> {
        Validator::validate_groups(control, treatment)?;
        let data = Dataset::from_groups(control, treatment)?;
        self.run_dataset(&data)
    }

    /// Run the test on a combined outcome slice plus per-row labels.
    pub fn run_labeled<T: Float>(
        &self,
        outcomes: &[T],
        labels: &[Group],
    ) -> Result<PermutationResult<T>, PermutationError> {
        Validator::validate_labeled(outcomes, labels)?;
        let data = Dataset::from_labels(outcomes, labels)?;
        self.run_dataset(&data)
    }

    /// Run the test on an already-constructed dataset.
    fn run_dataset<T: Float>(
        &self,
        data: &Dataset<T>,
    ) -> Result<PermutationResult<T>, PermutationError> {
        if self.method == Resampling::Exact {
            Validator::validate_exact(data.len(), data.control_len())?;
        }

        let output = self.executor.run(data, self.method)?;

        Ok(PermutationResult {
            observed: output.observed,
            p_value: output.p_value,
            draws: output.draws,
            statistic: self.executor.statistic,
            comparison: self.executor.comparison,
            seed: match self.method {
                Resampling::MonteCarlo => Some(self.executor.seed),
                Resampling::Exact => None,
            },
            control_n: data.control_len(),
            treatment_n: data.treatment_len(),
            null_distribution: output.null_distribution,
            summary: if self.with_summary {
                Some(GroupSummary::compute(data))
            } else {
                None
            },
        })
    }
}
