//! Tests for the prelude module.
//!
//! These tests verify that the prelude exports all necessary types for
//! convenient usage of the permutation test API. The prelude should provide
//! a one-stop import for common functionality.
//!
//! ## Test Organization
//!
//! 1. **Import Verification** - All prelude exports are accessible
//! 2. **Type Usage** - Types can be used without qualification
//! 3. **Builder Pattern** - Complete workflows work with prelude imports

use permutest::prelude::*;

// ============================================================================
// Import Verification Tests
// ============================================================================

/// Test that all prelude imports work correctly.
///
/// Verifies that the prelude exports all necessary types for basic usage.
#[test]
fn test_prelude_imports() {
    let control = vec![1.0, 0.0, 0.0, 1.0];
    let treatment = vec![1.0, 1.0, 0.0];

    let result = PermutationTest::new()
        .resamples(200)
        .seed(1)
        .build()
        .unwrap()
        .run(&control, &treatment);

    assert!(result.is_ok(), "Basic run should work with prelude imports");
}

/// Test that statistic variants are available unqualified.
#[test]
fn test_prelude_statistic_variants() {
    let _ = PermutationTest::new().statistic(AbsMeanDifference);
    let _ = PermutationTest::new().statistic(MeanDifference);
}

/// Test that comparison variants are available unqualified.
#[test]
fn test_prelude_comparison_variants() {
    let _ = PermutationTest::new().comparison(GreaterOrEqual);
    let _ = PermutationTest::new().comparison(LessOrEqual);
}

/// Test that Group and PermutationError are available for labeled input.
#[test]
fn test_prelude_labeled_workflow() {
    let outcomes = vec![1.0, 0.0, 1.0, 0.0];
    let labels = vec![
        Group::Control,
        Group::Control,
        Group::Treatment,
        Group::Treatment,
    ];

    let result: Result<PermutationResult<f64>, PermutationError> = PermutationTest::new()
        .resamples(100)
        .build()
        .unwrap()
        .run_labeled(&outcomes, &labels);

    assert!(result.is_ok());
}
