//! Per-group descriptive summaries.
//!
//! ## Purpose
//!
//! This module computes the descriptive statistics a reader wants next to a
//! p-value: group sizes, success counts, observed proportions, and the
//! pooled proportion under the null of exchangeability.
//!
//! ## Design notes
//!
//! * **Residual-free**: Everything derives from four counts; computation is
//!   a single pass over the dataset accessors.
//! * **Generics**: All computations are generic over `Float` types.
//!
//! ## Invariants
//!
//! * Rates lie in [0, 1] for validated binary data.
//! * `control_n + treatment_n` equals the dataset size.
//!
//! ## Non-goals
//!
//! * This module does not perform hypothesis testing.

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::primitives::dataset::Dataset;

// ============================================================================
// Group Summary
// ============================================================================

/// Descriptive summary of the two observed groups.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupSummary<T> {
    /// Number of control observations.
    pub control_n: usize,

    /// Number of treatment observations.
    pub treatment_n: usize,

    /// Success count in the control group.
    pub control_successes: T,

    /// Success count in the treatment group.
    pub treatment_successes: T,

    /// Observed control success proportion.
    pub control_rate: T,

    /// Observed treatment success proportion.
    pub treatment_rate: T,

    /// Pooled success proportion across both groups.
    pub pooled_rate: T,
}

impl<T: Float> GroupSummary<T> {
    /// Compute the summary from a validated dataset.
    pub fn compute(data: &Dataset<T>) -> Self {
        let control_n = data.control_len();
        let treatment_n = data.treatment_len();
        let control_successes = data.control_successes();
        let treatment_successes = data.treatment_successes();

        let control_rate = control_successes / T::from(control_n).unwrap();
        let treatment_rate = treatment_successes / T::from(treatment_n).unwrap();
        let pooled_rate =
            (control_successes + treatment_successes) / T::from(control_n + treatment_n).unwrap();

        Self {
            control_n,
            treatment_n,
            control_successes,
            treatment_successes,
            control_rate,
            treatment_rate,
            pooled_rate,
        }
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for GroupSummary<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Group Summary:")?;
        writeln!(
            f,
            "  {:>10} {:>6} {:>10} {:>8}",
            "Group", "N", "Successes", "Rate"
        )?;
        writeln!(
            f,
            "  {:>10} {:>6} {:>10} {:>8.4}",
            "Control", self.control_n, self.control_successes, self.control_rate
        )?;
        writeln!(
            f,
            "  {:>10} {:>6} {:>10} {:>8.4}",
            "Treatment", self.treatment_n, self.treatment_successes, self.treatment_rate
        )?;
        writeln!(f, "  Pooled rate: {:.4}", self.pooled_rate)?;
        Ok(())
    }
}
