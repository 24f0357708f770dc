//! Input validation for permutation test configuration and data.
//!
//! ## Purpose
//!
//! This module provides validation functions for permutation test
//! parameters and input data. It checks requirements such as non-empty
//! groups, binary outcome values, matching label lengths, and resample
//! counts.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective mathematical constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not transform or repair input data.
//! * This module does not perform the resampling itself.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::evaluation::exact::{combination_count, MAX_EXACT_COMBINATIONS, MAX_EXACT_N};
use crate::primitives::dataset::Group;
use crate::primitives::errors::PermutationError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for permutation test configuration and input data.
///
/// Provides static methods that return `Result<(), PermutationError>` and
/// fail fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate two outcome groups for a permutation test.
    pub fn validate_groups<T: Float>(
        control: &[T],
        treatment: &[T],
    ) -> Result<(), PermutationError> {
        // Check 1: Non-empty input
        if control.is_empty() && treatment.is_empty() {
            return Err(PermutationError::EmptyInput);
        }

        // Check 2: Both groups populated
        if control.is_empty() {
            return Err(PermutationError::EmptyGroup { group: "Control" });
        }
        if treatment.is_empty() {
            return Err(PermutationError::EmptyGroup { group: "Treatment" });
        }

        // Check 3: Binary outcome values
        Self::validate_outcomes(control)?;
        Self::validate_outcomes_offset(treatment, control.len())?;

        Ok(())
    }

    /// Validate a combined outcome slice plus per-row labels.
    pub fn validate_labeled<T: Float>(
        outcomes: &[T],
        labels: &[Group],
    ) -> Result<(), PermutationError> {
        // Check 1: Matching lengths
        if outcomes.len() != labels.len() {
            return Err(PermutationError::MismatchedInputs {
                outcomes_len: outcomes.len(),
                labels_len: labels.len(),
            });
        }

        // Check 2: Non-empty input
        if outcomes.is_empty() {
            return Err(PermutationError::EmptyInput);
        }

        // Check 3: Both groups populated
        if !labels.contains(&Group::Control) {
            return Err(PermutationError::EmptyGroup { group: "Control" });
        }
        if !labels.contains(&Group::Treatment) {
            return Err(PermutationError::EmptyGroup { group: "Treatment" });
        }

        // Check 4: Binary outcome values
        Self::validate_outcomes(outcomes)?;

        Ok(())
    }

    /// Validate that every outcome value is exactly 0 or 1.
    pub fn validate_outcomes<T: Float>(outcomes: &[T]) -> Result<(), PermutationError> {
        Self::validate_outcomes_offset(outcomes, 0)
    }

    /// Validate binary outcomes, reporting indices shifted by `offset`.
    ///
    /// Used so errors in the treatment slice report the combined row index.
    fn validate_outcomes_offset<T: Float>(
        outcomes: &[T],
        offset: usize,
    ) -> Result<(), PermutationError> {
        for (i, &value) in outcomes.iter().enumerate() {
            if value != T::zero() && value != T::one() {
                return Err(PermutationError::NonBinaryOutcome {
                    index: offset + i,
                    value: value.to_f64().unwrap_or(f64::NAN),
                });
            }
        }
        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the Monte Carlo resample count.
    pub fn validate_resamples(resamples: usize) -> Result<(), PermutationError> {
        if resamples == 0 {
            return Err(PermutationError::InvalidResamples(resamples));
        }
        Ok(())
    }

    /// Validate dataset dimensions for exact enumeration.
    pub fn validate_exact(n: usize, k: usize) -> Result<(), PermutationError> {
        if n > MAX_EXACT_N {
            return Err(PermutationError::ExactTooLarge { n, max: MAX_EXACT_N });
        }

        let combinations = combination_count(n, k);
        if combinations > MAX_EXACT_COMBINATIONS {
            return Err(PermutationError::ExactSpaceTooLarge {
                combinations,
                max: MAX_EXACT_COMBINATIONS,
            });
        }

        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), PermutationError> {
        if let Some(param) = duplicate_param {
            return Err(PermutationError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
