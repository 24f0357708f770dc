//! Error types for permutation test operations.
//!
//! ## Purpose
//!
//! This module defines error conditions that can occur while building and
//! running a permutation test, including input validation, parameter
//! constraints, and exact-enumeration limits.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., the offending index).
//! * **Deferred**: Builder misconfiguration is caught and stored until `build()`.
//! * **No-std**: Supports `no_std` environments; all variants are allocation-free.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Input validation**: Empty groups, non-binary outcomes, mismatched lengths.
//! 2. **Parameter validation**: Invalid resample counts, duplicate builder calls.
//! 3. **Exact-mode constraints**: Dataset size limits for full enumeration.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Error messages are consistent in tone and formatting.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(feature = "std")]
use std::error::Error;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for permutation test operations.
#[derive(Debug, Clone, PartialEq)]
pub enum PermutationError {
    /// Input arrays are empty; a two-sample test requires data in both groups.
    EmptyInput,

    /// One of the two groups contains no observations.
    EmptyGroup {
        /// Name of the empty group ("Control" or "Treatment").
        group: &'static str,
    },

    /// Outcome and label arrays must have the same number of elements.
    MismatchedInputs {
        /// Number of elements in the outcomes array.
        outcomes_len: usize,
        /// Number of elements in the labels array.
        labels_len: usize,
    },

    /// An outcome value is not exactly 0 or 1.
    NonBinaryOutcome {
        /// Index of the offending outcome.
        index: usize,
        /// The offending value, widened to f64 for reporting.
        value: f64,
    },

    /// Resample count must be at least 1.
    InvalidResamples(usize),

    /// Dataset is too large for exact enumeration (bitmask representation).
    ExactTooLarge {
        /// Number of observations provided.
        n: usize,
        /// Maximum supported observations for exact mode.
        max: usize,
    },

    /// The number of distinct relabelings exceeds the enumeration cap.
    ExactSpaceTooLarge {
        /// Number of distinct relabelings C(n, k).
        combinations: u128,
        /// Maximum permitted relabelings.
        max: u128,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for PermutationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Input arrays are empty"),
            Self::EmptyGroup { group } => {
                write!(f, "Group '{group}' contains no observations")
            }
            Self::MismatchedInputs {
                outcomes_len,
                labels_len,
            } => {
                write!(
                    f,
                    "Length mismatch: {outcomes_len} outcomes, {labels_len} labels"
                )
            }
            Self::NonBinaryOutcome { index, value } => {
                write!(
                    f,
                    "Non-binary outcome at index {index}: {value} (must be 0 or 1)"
                )
            }
            Self::InvalidResamples(r) => {
                write!(f, "Invalid resamples: {r} (must be at least 1)")
            }
            Self::ExactTooLarge { n, max } => {
                write!(
                    f,
                    "Exact enumeration not supported for {n} observations (max {max})"
                )
            }
            Self::ExactSpaceTooLarge { combinations, max } => {
                write!(
                    f,
                    "Exact enumeration space too large: {combinations} relabelings (max {max})"
                )
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for PermutationError {}
