//! Deterministic workloads for benchmarking [`DynamicSequence`].
//!
//! Every builder takes an explicit seed so that benchmark runs are
//! reproducible across machines.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

use dynseq::DynamicSequence;
use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Default seed used by the benchmark suite.
pub const DEFAULT_SEED: u64 = 0x5eed;

/// `count` values drawn uniformly from `0..range`.
pub fn random_values(count: usize, range: u32, seed: u64) -> Vec<u32> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count).map(|_| rng.next_u32() % range.max(1)).collect()
}

/// Insertion positions for building a sequence of `count` elements one
/// insert at a time: the `i`-th position lies in `[0, i]`.
pub fn insert_positions(count: usize, seed: u64) -> Vec<isize> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|i| (rng.next_u64() % (i as u64 + 1)) as isize)
        .collect()
}

/// A sequence holding `0..count` in order, built by repeated appends from
/// the default capacity.
pub fn filled(count: u32) -> DynamicSequence<u32> {
    let mut seq = DynamicSequence::new();
    for v in 0..count {
        seq.add(v);
    }
    seq
}

/// A sequence of `count` present values with a single absent element at
/// the end, for worst-case absent-aware search.
pub fn filled_with_trailing_absent(count: u32) -> DynamicSequence<Option<u32>> {
    let mut seq = DynamicSequence::new();
    for v in 0..count {
        seq.add(Some(v));
    }
    seq.add(None);
    seq
}
