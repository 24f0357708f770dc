//! Output types and result structures for permutation test operations.
//!
//! ## Purpose
//!
//! This module defines the `PermutationResult` struct which encapsulates
//! all outputs from a test run: the observed statistic, the empirical
//! p-value, run metadata, and the optional null distribution and group
//! summary.
//!
//! ## Design notes
//!
//! * **Memory Efficiency**: Optional outputs use `Option<Vec<T>>`.
//! * **Generics**: Results are generic over `Float` types.
//! * **Ergonomics**: Implements `Display` for human-readable output,
//!   including a text histogram of the retained null distribution.
//!
//! ## Invariants
//!
//! * `p_value` lies in [0, 1].
//! * When retained, the null distribution has exactly `draws` entries.
//! * `seed` is present for Monte Carlo runs and absent for exact runs.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.
//! * This module does not provide serialization/deserialization logic.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Debug, Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::evaluation::pvalue::Comparison;
use crate::evaluation::summary::GroupSummary;
use crate::math::statistic::TestStatistic;

// ============================================================================
// Result Structure
// ============================================================================

/// Comprehensive permutation test output.
#[derive(Debug, Clone, PartialEq)]
pub struct PermutationResult<T> {
    /// Observed statistic on the original labeling.
    pub observed: T,

    /// Empirical p-value under `comparison`.
    pub p_value: T,

    /// Number of relabelings drawn (resamples, or C(n, k) for exact runs).
    pub draws: usize,

    /// Statistic computed on each relabeling.
    pub statistic: TestStatistic,

    /// Tail rule used for the p-value.
    pub comparison: Comparison,

    /// PRNG seed used for shuffling (`None` for exact enumeration).
    pub seed: Option<u64>,

    /// Number of control observations.
    pub control_n: usize,

    /// Number of treatment observations.
    pub treatment_n: usize,

    /// Simulated null statistics (if retention was requested).
    pub null_distribution: Option<Vec<T>>,

    /// Per-group descriptive summary (if requested).
    pub summary: Option<GroupSummary<T>>,
}

impl<T: Float> PermutationResult<T> {
    // ========================================================================
    // Query Methods
    // ========================================================================

    /// Whether the run was an exact enumeration.
    pub fn is_exact(&self) -> bool {
        self.seed.is_none()
    }

    /// Check if the null distribution was retained.
    pub fn has_null_distribution(&self) -> bool {
        self.null_distribution.is_some()
    }

    /// Mean of the retained null distribution.
    pub fn null_mean(&self) -> Option<T> {
        self.null_distribution.as_ref().and_then(|null| {
            if null.is_empty() {
                return None;
            }
            let sum = null.iter().copied().fold(T::zero(), |acc, v| acc + v);
            Some(sum / T::from(null.len()).unwrap())
        })
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

/// Number of histogram bins rendered by `Display`.
const HISTOGRAM_BINS: usize = 10;

/// Maximum histogram bar width in characters.
const HISTOGRAM_WIDTH: usize = 40;

impl<T: Float + Display + Debug> Display for PermutationResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Permutation Test:")?;
        writeln!(
            f,
            "  Observations: {} (control {}, treatment {})",
            self.control_n + self.treatment_n,
            self.control_n,
            self.treatment_n
        )?;
        match self.seed {
            Some(seed) => writeln!(
                f,
                "  Method:       Monte Carlo ({} resamples, seed {})",
                self.draws, seed
            )?,
            None => writeln!(f, "  Method:       Exact ({} relabelings)", self.draws)?,
        }
        writeln!(f, "  Statistic:    {}", self.statistic.name())?;
        writeln!(f, "  Observed:     {:.6}", self.observed)?;
        writeln!(
            f,
            "  P-value:      {:.6}  ({})",
            self.p_value,
            self.comparison.name()
        )?;
        writeln!(f)?;

        if let Some(summary) = &self.summary {
            writeln!(f, "{}", summary)?;
        }

        if let Some(null) = &self.null_distribution {
            write_histogram(f, null)?;
        }

        Ok(())
    }
}

/// Render a fixed-width text histogram of the null distribution.
fn write_histogram<T: Float + Display>(f: &mut Formatter<'_>, null: &[T]) -> Result {
    if null.is_empty() {
        return Ok(());
    }

    let (min, max) = null.iter().fold((null[0], null[0]), |(lo, hi), &v| {
        (if v < lo { v } else { lo }, if v > hi { v } else { hi })
    });

    writeln!(f, "Null Distribution ({} draws):", null.len())?;

    // Degenerate case: every simulated statistic is identical.
    if max <= min {
        writeln!(f, "  {:>8.4}  all {} draws", min, null.len())?;
        return Ok(());
    }

    let width = (max - min) / T::from(HISTOGRAM_BINS).unwrap();
    let mut counts = [0usize; HISTOGRAM_BINS];
    for &v in null {
        let idx = ((v - min) / width).to_usize().unwrap_or(0);
        counts[idx.min(HISTOGRAM_BINS - 1)] += 1;
    }

    let peak = counts.iter().copied().max().unwrap_or(1).max(1);
    for (bin, &count) in counts.iter().enumerate() {
        let lo = min + width * T::from(bin).unwrap();
        let hi = lo + width;
        let bar_len = count * HISTOGRAM_WIDTH / peak;
        write!(f, "  [{:>8.4}, {:>8.4})  ", lo, hi)?;
        for _ in 0..bar_len {
            write!(f, "#")?;
        }
        writeln!(f, " {}", count)?;
    }

    Ok(())
}
