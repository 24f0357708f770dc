//! Dataset and group-label types for two-sample experiments.
//!
//! ## Purpose
//!
//! This module defines the immutable container holding all observed binary
//! outcomes, partitioned into a control and a treatment group. The dataset
//! is constructed once and read-only thereafter; the resampler never
//! mutates it.
//!
//! ## Design notes
//!
//! * **Layout**: Outcomes are stored contiguously, control group first.
//!   The partition point is the only structural state.
//! * **Generics**: Outcomes are stored as `Float` values (0.0 or 1.0) so the
//!   statistic layer can work in the caller's precision.
//!
//! ## Invariants
//!
//! * Both groups are non-empty.
//! * The total count equals `control_len + treatment_len` and never changes.
//!
//! ## Non-goals
//!
//! * This module does not check that outcomes are binary (see the validator).
//! * This module does not compute statistics.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::PermutationError;

// ============================================================================
// Group Labels
// ============================================================================

/// Group membership label for a single observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Group {
    /// The control arm of the experiment.
    Control,
    /// The treatment arm of the experiment.
    Treatment,
}

impl Group {
    /// Human-readable group name.
    pub fn name(&self) -> &'static str {
        match self {
            Group::Control => "Control",
            Group::Treatment => "Treatment",
        }
    }
}

// ============================================================================
// Dataset
// ============================================================================

/// Immutable two-group dataset of binary outcomes.
///
/// Outcomes are stored control-first; `control_len` marks the partition.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset<T> {
    /// All outcomes, control group first.
    outcomes: Vec<T>,

    /// Number of leading outcomes belonging to the control group.
    control_len: usize,
}

impl<T: Float> Dataset<T> {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Build a dataset from two outcome slices.
    pub fn from_groups(control: &[T], treatment: &[T]) -> Result<Self, PermutationError> {
        if control.is_empty() && treatment.is_empty() {
            return Err(PermutationError::EmptyInput);
        }
        if control.is_empty() {
            return Err(PermutationError::EmptyGroup { group: "Control" });
        }
        if treatment.is_empty() {
            return Err(PermutationError::EmptyGroup { group: "Treatment" });
        }

        let mut outcomes = Vec::with_capacity(control.len() + treatment.len());
        outcomes.extend_from_slice(control);
        outcomes.extend_from_slice(treatment);

        Ok(Self {
            outcomes,
            control_len: control.len(),
        })
    }

    /// Build a dataset from a combined outcome slice plus per-row labels.
    ///
    /// Observations are partitioned by label; the relative order within each
    /// group is preserved (the test is order-invariant regardless).
    pub fn from_labels(outcomes: &[T], labels: &[Group]) -> Result<Self, PermutationError> {
        if outcomes.len() != labels.len() {
            return Err(PermutationError::MismatchedInputs {
                outcomes_len: outcomes.len(),
                labels_len: labels.len(),
            });
        }
        if outcomes.is_empty() {
            return Err(PermutationError::EmptyInput);
        }

        let mut control = Vec::new();
        let mut treatment = Vec::new();
        for (&value, &label) in outcomes.iter().zip(labels.iter()) {
            match label {
                Group::Control => control.push(value),
                Group::Treatment => treatment.push(value),
            }
        }

        Self::from_groups(&control, &treatment)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Total number of observations.
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    /// Whether the dataset holds no observations.
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Number of control observations.
    pub fn control_len(&self) -> usize {
        self.control_len
    }

    /// Number of treatment observations.
    pub fn treatment_len(&self) -> usize {
        self.outcomes.len() - self.control_len
    }

    /// All outcomes, control group first.
    pub fn outcomes(&self) -> &[T] {
        &self.outcomes
    }

    /// Outcomes belonging to the control group.
    pub fn control(&self) -> &[T] {
        &self.outcomes[..self.control_len]
    }

    /// Outcomes belonging to the treatment group.
    pub fn treatment(&self) -> &[T] {
        &self.outcomes[self.control_len..]
    }

    // ========================================================================
    // Aggregates
    // ========================================================================

    /// Sum of all outcomes (total success count).
    pub fn total_successes(&self) -> T {
        self.outcomes
            .iter()
            .copied()
            .fold(T::zero(), |acc, v| acc + v)
    }

    /// Sum of control outcomes (control success count).
    pub fn control_successes(&self) -> T {
        self.control()
            .iter()
            .copied()
            .fold(T::zero(), |acc, v| acc + v)
    }

    /// Sum of treatment outcomes (treatment success count).
    pub fn treatment_successes(&self) -> T {
        self.treatment()
            .iter()
            .copied()
            .fold(T::zero(), |acc, v| acc + v)
    }
}
