//! Seedable pseudo-random number generation for label shuffling.
//!
//! ## Purpose
//!
//! This module provides the minimal PRNG used by the Monte Carlo resampler
//! to draw uniformly random relabelings. Shuffling is the only source of
//! randomness in the crate, so reproducibility reduces to fixing the seed.
//!
//! ## Design notes
//!
//! * **Determinism**: The generator is a pure function of its seed; there is
//!   no global or thread-local state.
//! * **No-std**: Requires no entropy source, making it usable in `no_std`.
//!
//! ## Key concepts
//!
//! * **LCG**: A 64-bit Linear Congruential Generator with constants from PCG.
//! * **Fisher-Yates**: In-place shuffle producing each permutation with equal
//!   probability (up to the generator's quality).
//!
//! ## Non-goals
//!
//! * This module is not a cryptographic RNG.

// ============================================================================
// Constants
// ============================================================================

/// Default seed used when the caller does not provide one.
///
/// A fixed default keeps runs reproducible out of the box; callers who want
/// varying draws pass their own seed.
pub const DEFAULT_SEED: u64 = 0x853c_49e6_748f_ea9b;

// ============================================================================
// Generator
// ============================================================================

/// Minimal seedable PRNG for shuffling.
///
/// Uses an LCG (Linear Congruential Generator) with the PCG multiplier.
#[derive(Debug, Clone)]
pub struct Lcg64 {
    state: u64,
}

impl Lcg64 {
    /// Create a generator from an explicit seed.
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Advance the generator and return the next 32 random bits.
    pub fn next_u32(&mut self) -> u32 {
        // LCG constants for 64-bit state
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }

    /// Draw an index uniformly from `0..bound`.
    ///
    /// `bound` must be non-zero.
    pub fn next_index(&mut self, bound: usize) -> usize {
        (self.next_u32() as usize) % bound
    }

    /// Shuffle a slice in place with the Fisher-Yates algorithm.
    ///
    /// After the call, the slice holds a uniformly random permutation of its
    /// previous contents; the multiset of elements is unchanged.
    pub fn shuffle<T>(&mut self, data: &mut [T]) {
        for i in (1..data.len()).rev() {
            let j = self.next_index(i + 1);
            data.swap(i, j);
        }
    }
}
