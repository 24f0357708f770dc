#![cfg(feature = "dev")]
//! Tests for two-group test statistics.
//!
//! These tests verify the statistic functions used by the permutation test:
//! - Difference-of-proportions values on known counts
//! - Symmetry under group swap
//! - Statistic metadata
//!
//! ## Test Organization
//!
//! 1. **Value Tests** - Known counts give known statistics
//! 2. **Symmetry** - Group-swap invariance
//! 3. **Metadata** - Names and defaults

use approx::assert_relative_eq;

use permutest::internals::math::statistic::TestStatistic;
use permutest::internals::primitives::dataset::Dataset;

// ============================================================================
// Value Tests
// ============================================================================

/// Test the absolute difference of proportions on known counts.
#[test]
fn test_abs_mean_difference_value() {
    // 2/16 vs 9/15: |0.125 - 0.6| = 0.475
    let stat = TestStatistic::AbsMeanDifference;
    let value = stat.evaluate(2.0, 16, 9.0, 15);
    assert_relative_eq!(value, 0.475, epsilon = 1e-12);
}

/// Test the signed difference of proportions on known counts.
#[test]
fn test_mean_difference_value() {
    let stat = TestStatistic::MeanDifference;
    assert_relative_eq!(stat.evaluate(2.0, 16, 9.0, 15), -0.475, epsilon = 1e-12);
    assert_relative_eq!(stat.evaluate(9.0, 15, 2.0, 16), 0.475, epsilon = 1e-12);
}

/// Test that the statistic computed on a dataset matches the raw counts.
#[test]
fn test_observed_on_dataset() {
    let control = vec![1.0, 0.0, 0.0, 0.0];
    let treatment = vec![1.0, 1.0, 1.0, 0.0, 0.0];
    let data = Dataset::from_groups(&control, &treatment).unwrap();

    let value = TestStatistic::AbsMeanDifference.observed(&data);
    assert_relative_eq!(value, (0.6f64 - 0.25).abs(), epsilon = 1e-12);
}

/// Test that a binary statistic is bounded by 1.
#[test]
fn test_abs_mean_difference_bounds() {
    let stat = TestStatistic::AbsMeanDifference;
    assert_relative_eq!(stat.evaluate(4.0, 4, 0.0, 3), 1.0);
    assert_relative_eq!(stat.evaluate(0.0, 4, 0.0, 3), 0.0);
}

// ============================================================================
// Symmetry Tests
// ============================================================================

/// Test that the absolute statistic is invariant under group swap.
#[test]
fn test_abs_statistic_symmetry() {
    let stat = TestStatistic::AbsMeanDifference;

    for &(sum_a, n_a, sum_b, n_b) in &[
        (2.0, 16usize, 9.0, 15usize),
        (0.0, 3, 3.0, 3),
        (5.0, 10, 5.0, 10),
        (1.0, 7, 6.0, 9),
    ] {
        assert_relative_eq!(
            stat.evaluate(sum_a, n_a, sum_b, n_b),
            stat.evaluate(sum_b, n_b, sum_a, n_a),
            epsilon = 1e-12
        );
    }
}

/// Test that the signed statistic negates under group swap.
#[test]
fn test_signed_statistic_antisymmetry() {
    let stat = TestStatistic::MeanDifference;
    assert_relative_eq!(
        stat.evaluate(1.0, 7, 6.0, 9),
        -stat.evaluate(6.0, 9, 1.0, 7),
        epsilon = 1e-12
    );
}

// ============================================================================
// Metadata Tests
// ============================================================================

/// Test statistic names and symmetry flags.
#[test]
fn test_statistic_metadata() {
    assert_eq!(TestStatistic::AbsMeanDifference.name(), "|mean difference|");
    assert_eq!(TestStatistic::MeanDifference.name(), "mean difference");

    assert!(TestStatistic::AbsMeanDifference.is_symmetric());
    assert!(!TestStatistic::MeanDifference.is_symmetric());

    assert_eq!(TestStatistic::default(), TestStatistic::AbsMeanDifference);
}
