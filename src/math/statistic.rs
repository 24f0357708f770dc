//! Two-group test statistics.
//!
//! ## Purpose
//!
//! This module defines the scalar statistics a permutation test can compute
//! on a two-group partition of binary outcomes. For binary data the group
//! mean is the group success proportion, so the default statistic is the
//! absolute difference of proportions.
//!
//! ## Design notes
//!
//! * **Count-based**: Statistics are evaluated from (success sum, size)
//!   pairs rather than raw slices. The resampling loop exploits this: the
//!   total success count is fixed under relabeling, so only the control-side
//!   sum needs recomputation per draw.
//! * **Generics**: All computations are generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **AbsMeanDifference**: |mean(A) − mean(B)|, the conventional two-sided
//!   choice; symmetric under group swap.
//! * **MeanDifference**: mean(A) − mean(B), signed; supports directional
//!   alternatives when paired with a one-tailed comparison rule.
//!
//! ## Invariants
//!
//! * Both group sizes are non-zero (enforced upstream by validation).
//! * `AbsMeanDifference` is non-negative and bounded by 1 for binary data.
//!
//! ## Non-goals
//!
//! * This module does not resample or derive p-values.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::dataset::Dataset;

// ============================================================================
// Test Statistic
// ============================================================================

/// Scalar statistic computed on a two-group partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestStatistic {
    /// Absolute difference of group means: |mean(A) − mean(B)|.
    AbsMeanDifference,

    /// Signed difference of group means: mean(A) − mean(B).
    MeanDifference,
}

impl Default for TestStatistic {
    fn default() -> Self {
        TestStatistic::AbsMeanDifference
    }
}

impl TestStatistic {
    /// Human-readable statistic name.
    pub fn name(&self) -> &'static str {
        match self {
            TestStatistic::AbsMeanDifference => "|mean difference|",
            TestStatistic::MeanDifference => "mean difference",
        }
    }

    /// Whether the statistic is invariant under swapping the two groups.
    pub fn is_symmetric(&self) -> bool {
        matches!(self, TestStatistic::AbsMeanDifference)
    }

    /// Evaluate the statistic from per-group success sums and sizes.
    ///
    /// `n_a` and `n_b` must be non-zero.
    pub fn evaluate<T: Float>(&self, sum_a: T, n_a: usize, sum_b: T, n_b: usize) -> T {
        let mean_a = sum_a / T::from(n_a).unwrap();
        let mean_b = sum_b / T::from(n_b).unwrap();
        let diff = mean_a - mean_b;

        match self {
            TestStatistic::AbsMeanDifference => diff.abs(),
            TestStatistic::MeanDifference => diff,
        }
    }

    /// Evaluate the statistic on the dataset's observed partition.
    pub fn observed<T: Float>(&self, data: &Dataset<T>) -> T {
        let sum_control = data.control_successes();
        let sum_treatment = data.treatment_successes();
        self.evaluate(
            sum_control,
            data.control_len(),
            sum_treatment,
            data.treatment_len(),
        )
    }
}
