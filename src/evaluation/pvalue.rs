//! Empirical p-value computation.
//!
//! ## Purpose
//!
//! This module derives the empirical p-value from an observed statistic and
//! a collection of simulated null statistics: the fraction of simulated
//! values that are at least as extreme as the observed one.
//!
//! ## Design notes
//!
//! * **Configurable tail**: Which direction counts as "extreme" is an
//!   explicit [`Comparison`] parameter, never an implicit choice. The
//!   conventional rule for a large-values-extreme statistic is
//!   `GreaterOrEqual`; `LessOrEqual` computes the complement (ties counted
//!   in both) and exists because some published analyses use it, knowingly
//!   or not.
//! * **Streaming-friendly**: The per-value predicate is exposed so callers
//!   can count matches without retaining the null distribution.
//!
//! ## Invariants
//!
//! * The p-value lies in [0, 1] for any non-empty null distribution.
//! * Equality with the observed value counts as extreme under both rules.
//!
//! ## Non-goals
//!
//! * This module does not generate the null distribution.

// External dependencies
use num_traits::Float;

// ============================================================================
// Comparison Rule
// ============================================================================

/// Tail rule deciding which simulated statistics count as extreme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    /// Count simulated values >= observed (conventional one-sided rule for a
    /// statistic where large values favor the alternative).
    GreaterOrEqual,

    /// Count simulated values <= observed (the complement rule).
    LessOrEqual,
}

impl Default for Comparison {
    fn default() -> Self {
        Comparison::GreaterOrEqual
    }
}

impl Comparison {
    /// Human-readable rule name.
    pub fn name(&self) -> &'static str {
        match self {
            Comparison::GreaterOrEqual => "greater-or-equal",
            Comparison::LessOrEqual => "less-or-equal",
        }
    }

    /// Whether a simulated value counts as extreme relative to the observed one.
    pub fn is_extreme<T: Float>(&self, simulated: T, observed: T) -> bool {
        match self {
            Comparison::GreaterOrEqual => simulated >= observed,
            Comparison::LessOrEqual => simulated <= observed,
        }
    }
}

// ============================================================================
// P-value Computation
// ============================================================================

/// Empirical p-value: fraction of null statistics extreme under `comparison`.
///
/// Returns zero for an empty null distribution (validation upstream rules
/// this case out for all public entry points).
pub fn empirical_p_value<T: Float>(observed: T, null: &[T], comparison: Comparison) -> T {
    if null.is_empty() {
        return T::zero();
    }

    let extreme = null
        .iter()
        .filter(|&&sim| comparison.is_extreme(sim, observed))
        .count();

    T::from(extreme).unwrap() / T::from(null.len()).unwrap()
}

/// P-value from a pre-accumulated extreme-count and total draw count.
pub fn p_value_from_counts<T: Float>(extreme: usize, total: usize) -> T {
    if total == 0 {
        return T::zero();
    }
    T::from(extreme).unwrap() / T::from(total).unwrap()
}
