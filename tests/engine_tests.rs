#![cfg(feature = "dev")]
//! Tests for the execution engine.
//!
//! These tests verify the resampling executor and the validator:
//! - Monte Carlo loop (draw counts, null retention, p-value accumulation)
//! - Exact execution through the engine
//! - Group-size preservation across simulated relabelings
//! - Validation of data and parameters
//!
//! ## Test Organization
//!
//! 1. **Executor Defaults** - Constructor and builder methods
//! 2. **Monte Carlo Execution** - Draws, retention, reproducibility
//! 3. **Relabeling Invariants** - Group sizes preserved
//! 4. **Exact Execution** - Engine-level enumeration
//! 5. **Validator** - Data and parameter checks

use approx::assert_relative_eq;

use permutest::internals::engine::executor::{
    PermutationExecutor, Resampling, DEFAULT_RESAMPLES,
};
use permutest::internals::engine::validator::Validator;
use permutest::internals::evaluation::pvalue::Comparison;
use permutest::internals::math::statistic::TestStatistic;
use permutest::internals::primitives::dataset::{Dataset, Group};
use permutest::internals::primitives::errors::PermutationError;

// ============================================================================
// Helper Functions
// ============================================================================

fn small_dataset() -> Dataset<f64> {
    Dataset::from_groups(&[1.0, 1.0, 0.0], &[0.0, 0.0]).unwrap()
}

// ============================================================================
// Executor Default Tests
// ============================================================================

/// Test executor defaults.
#[test]
fn test_executor_defaults() {
    let exec = PermutationExecutor::new();
    assert_eq!(exec.resamples, DEFAULT_RESAMPLES);
    assert_eq!(exec.statistic, TestStatistic::AbsMeanDifference);
    assert_eq!(exec.comparison, Comparison::GreaterOrEqual);
    assert!(!exec.keep_null);
}

// ============================================================================
// Monte Carlo Execution Tests
// ============================================================================

/// Test that the Monte Carlo run performs exactly the configured draws.
#[test]
fn test_monte_carlo_draw_count() {
    let data = small_dataset();
    let output = PermutationExecutor::new()
        .resamples(1_234)
        .seed(5)
        .keep_null(true)
        .run(&data, Resampling::MonteCarlo)
        .unwrap();

    assert_eq!(output.draws, 1_234);
    assert_eq!(output.null_distribution.as_ref().unwrap().len(), 1_234);
}

/// Test that the null distribution is dropped unless retention is requested.
#[test]
fn test_monte_carlo_null_not_retained_by_default() {
    let data = small_dataset();
    let output = PermutationExecutor::new()
        .resamples(100)
        .run(&data, Resampling::MonteCarlo)
        .unwrap();

    assert!(output.null_distribution.is_none());
    assert!(output.p_value >= 0.0 && output.p_value <= 1.0);
}

/// Test that the counted p-value matches the retained null distribution.
#[test]
fn test_p_value_matches_retained_null() {
    let data = small_dataset();
    let output = PermutationExecutor::new()
        .resamples(2_000)
        .seed(11)
        .keep_null(true)
        .run(&data, Resampling::MonteCarlo)
        .unwrap();

    let null = output.null_distribution.as_ref().unwrap();
    let recounted = null
        .iter()
        .filter(|&&s| s >= output.observed)
        .count() as f64
        / null.len() as f64;

    assert_relative_eq!(output.p_value, recounted, epsilon = 1e-12);
}

/// Test Monte Carlo reproducibility at the executor level.
#[test]
fn test_monte_carlo_reproducible() {
    let data = small_dataset();
    let run = |seed: u64| {
        PermutationExecutor::new()
            .resamples(500)
            .seed(seed)
            .keep_null(true)
            .run(&data, Resampling::MonteCarlo)
            .unwrap()
    };

    assert_eq!(run(21), run(21));
    assert_ne!(run(21).null_distribution, run(22).null_distribution);
}

// ============================================================================
// Relabeling Invariant Tests
// ============================================================================

/// Test that every simulated statistic is achievable under fixed group sizes.
///
/// For control size 3 of 5 with 2 total successes, the relabeled control
/// group holds 0, 1, or 2 successes; the simulated statistic must be one of
/// the three corresponding values. Anything else would mean the shuffle
/// changed a group size.
#[test]
fn test_simulated_statistics_respect_group_sizes() {
    let data = small_dataset();
    let output = PermutationExecutor::new()
        .resamples(5_000)
        .seed(17)
        .keep_null(true)
        .run(&data, Resampling::MonteCarlo)
        .unwrap();

    let achievable = [1.0, 1.0 / 6.0, 2.0 / 3.0];
    for &s in output.null_distribution.as_ref().unwrap() {
        assert!(
            achievable.iter().any(|&a| (s - a).abs() < 1e-12),
            "simulated statistic {s} not achievable with preserved group sizes"
        );
    }
}

// ============================================================================
// Exact Execution Tests
// ============================================================================

/// Test engine-level exact execution against the hand-computed p-value.
#[test]
fn test_exact_execution() {
    let data = small_dataset();
    let output = PermutationExecutor::new()
        .keep_null(true)
        .run(&data, Resampling::Exact)
        .unwrap();

    assert_eq!(output.draws, 10);
    assert_relative_eq!(output.observed, 2.0 / 3.0, epsilon = 1e-12);
    assert_relative_eq!(output.p_value, 0.4, epsilon = 1e-12);
}

/// Test that the inverted tail rule yields the complement distribution mass.
#[test]
fn test_exact_execution_less_or_equal() {
    let data = small_dataset();
    let output = PermutationExecutor::new()
        .comparison(Comparison::LessOrEqual)
        .run(&data, Resampling::Exact)
        .unwrap();

    // P(stat <= 2/3) counts the 6 draws at 1/6 and the 3 draws at 2/3.
    assert_relative_eq!(output.p_value, 0.9, epsilon = 1e-12);
}

// ============================================================================
// Validator Tests
// ============================================================================

/// Test group validation.
#[test]
fn test_validate_groups() {
    assert!(Validator::validate_groups(&[1.0, 0.0], &[0.0]).is_ok());

    assert_eq!(
        Validator::validate_groups::<f64>(&[], &[]).unwrap_err(),
        PermutationError::EmptyInput
    );
    assert_eq!(
        Validator::validate_groups(&[], &[1.0]).unwrap_err(),
        PermutationError::EmptyGroup { group: "Control" }
    );
    assert_eq!(
        Validator::validate_groups(&[1.0], &[]).unwrap_err(),
        PermutationError::EmptyGroup { group: "Treatment" }
    );
}

/// Test binary outcome validation and combined-index reporting.
#[test]
fn test_validate_binary_outcomes() {
    assert_eq!(
        Validator::validate_groups(&[0.5, 0.0], &[1.0]).unwrap_err(),
        PermutationError::NonBinaryOutcome {
            index: 0,
            value: 0.5
        }
    );

    // Treatment-slice violations report the combined row index.
    assert_eq!(
        Validator::validate_groups(&[1.0, 0.0], &[2.0]).unwrap_err(),
        PermutationError::NonBinaryOutcome {
            index: 2,
            value: 2.0
        }
    );
}

/// Test labeled-input validation.
#[test]
fn test_validate_labeled() {
    let labels = [Group::Control, Group::Treatment];
    assert!(Validator::validate_labeled(&[1.0, 0.0], &labels).is_ok());

    assert_eq!(
        Validator::validate_labeled(&[1.0], &labels).unwrap_err(),
        PermutationError::MismatchedInputs {
            outcomes_len: 1,
            labels_len: 2
        }
    );
    assert_eq!(
        Validator::validate_labeled::<f64>(&[], &[]).unwrap_err(),
        PermutationError::EmptyInput
    );
    assert_eq!(
        Validator::validate_labeled(&[1.0, 0.0], &[Group::Treatment, Group::Treatment])
            .unwrap_err(),
        PermutationError::EmptyGroup { group: "Control" }
    );
}

/// Test parameter validation.
#[test]
fn test_validate_parameters() {
    assert!(Validator::validate_resamples(1).is_ok());
    assert_eq!(
        Validator::validate_resamples(0).unwrap_err(),
        PermutationError::InvalidResamples(0)
    );

    assert!(Validator::validate_exact(20, 10).is_ok());
    assert!(matches!(
        Validator::validate_exact(80, 40).unwrap_err(),
        PermutationError::ExactTooLarge { .. }
    ));
    assert!(matches!(
        Validator::validate_exact(50, 25).unwrap_err(),
        PermutationError::ExactSpaceTooLarge { .. }
    ));

    assert!(Validator::validate_no_duplicates(None).is_ok());
    assert_eq!(
        Validator::validate_no_duplicates(Some("seed")).unwrap_err(),
        PermutationError::DuplicateParameter { parameter: "seed" }
    );
}
