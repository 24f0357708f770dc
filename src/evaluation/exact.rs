//! Exact enumeration of the permutation null distribution.
//!
//! ## Purpose
//!
//! This module computes the permutation null exactly for small datasets by
//! visiting every one of the C(n, k) ways to assign k of the n outcomes to
//! the control group. Monte Carlo estimates converge to these values as the
//! resample count grows, which also makes this module the ground truth for
//! the resampler's tests.
//!
//! ## Design notes
//!
//! * **Bitmask walk**: Relabelings are 64-bit masks with exactly k set bits,
//!   enumerated in lexicographic order via Gosper's hack.
//! * **Counting trick**: Because outcomes are binary, the statistic of a
//!   relabeling depends only on how many successes land in the control
//!   group. Successes are packed into a mask once, so each relabeling costs
//!   one AND plus a popcount.
//! * **Bounded**: Enumeration is refused beyond 63 observations or beyond a
//!   hard cap on C(n, k), keeping memory and runtime predictable.
//!
//! ## Invariants
//!
//! * Every visited relabeling has exactly k control members.
//! * The number of visited relabelings equals C(n, k).
//!
//! ## Non-goals
//!
//! * This module does not decide between exact and Monte Carlo execution.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::statistic::TestStatistic;
use crate::primitives::dataset::Dataset;
use crate::primitives::errors::PermutationError;

// ============================================================================
// Limits
// ============================================================================

/// Maximum number of observations representable as a relabeling bitmask.
pub const MAX_EXACT_N: usize = 63;

/// Maximum number of relabelings the enumerator will visit.
///
/// Generous enough for the classic small-trial sizes (C(31, 16) is about
/// 3e8) while refusing enumeration spaces that could never finish.
pub const MAX_EXACT_COMBINATIONS: u128 = 1_000_000_000;

// ============================================================================
// Combinatorics
// ============================================================================

/// Number of distinct relabelings: C(n, k).
///
/// Uses the multiplicative formula with exact intermediate division; for
/// n <= 63 the result always fits in u128. Returns 0 when k > n.
pub fn combination_count(n: usize, k: usize) -> u128 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut c: u128 = 1;
    for i in 1..=k {
        c = c * (n - k + i) as u128 / i as u128;
    }
    c
}

// ============================================================================
// Relabeling Enumerator
// ============================================================================

/// Iterator over all n-bit masks with exactly k set bits (Gosper's hack).
///
/// Set bits mark the observations assigned to the control group.
#[derive(Debug, Clone)]
pub struct RelabelingMasks {
    mask: u64,
    limit: u64,
    done: bool,
}

impl RelabelingMasks {
    /// Enumerate control assignments of size `k` over `n` observations.
    ///
    /// Requires `1 <= k < n <= 63` (enforced upstream by validation).
    pub fn new(n: usize, k: usize) -> Self {
        Self {
            mask: (1u64 << k) - 1,
            limit: 1u64 << n,
            done: false,
        }
    }
}

impl Iterator for RelabelingMasks {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.done || self.mask >= self.limit {
            return None;
        }
        let current = self.mask;

        // Gosper's hack: next mask with the same popcount
        let c = self.mask & self.mask.wrapping_neg();
        let r = self.mask.wrapping_add(c);
        if c == 0 || r >= self.limit {
            self.done = true;
        } else {
            self.mask = (((r ^ self.mask) >> 2) / c) | r;
        }

        Some(current)
    }
}

// ============================================================================
// Exact Null Traversal
// ============================================================================

/// Visit the statistic of every relabeling of `data`.
///
/// The callback receives one statistic value per relabeling, C(n, k) calls
/// in total. Fails if the dataset exceeds the enumeration limits.
pub fn for_each_statistic<T, F>(
    data: &Dataset<T>,
    statistic: TestStatistic,
    mut visit: F,
) -> Result<(), PermutationError>
where
    T: Float,
    F: FnMut(T),
{
    let n = data.len();
    let k = data.control_len();

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

    // Pack successes into a bitmask: bit i set <=> outcome i is a success.
    let mut success_mask: u64 = 0;
    for (i, &outcome) in data.outcomes().iter().enumerate() {
        if outcome > T::from(0.5).unwrap() {
            success_mask |= 1u64 << i;
        }
    }

    let total_successes = data.total_successes();
    for mask in RelabelingMasks::new(n, k) {
        let control_successes = T::from((mask & success_mask).count_ones()).unwrap();
        let treatment_successes = total_successes - control_successes;
        visit(statistic.evaluate(control_successes, k, treatment_successes, n - k));
    }

    Ok(())
}
