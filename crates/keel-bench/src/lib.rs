//! Deterministic workload builders for the Keel benchmarks.
//!
//! Every generator is seeded so repeated benchmark runs measure the
//! same operation sequence; regressions come from code changes, not
//! workload drift.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// One step of an insert/remove churn workload.
///
/// `Insert` adds the carried value; `Remove(i)` removes the i-th
/// oldest element still live (modulo the live count).
#[derive(Clone, Copy, Debug)]
pub enum ChurnOp {
    /// Insert a new element carrying this value.
    Insert(u64),
    /// Remove a live element picked by this index seed.
    Remove(usize),
}

/// Build a churn sequence of `len` operations, biased `insert_permille`
/// inserts per thousand.
pub fn churn_ops(len: usize, insert_permille: u32, seed: u64) -> Vec<ChurnOp> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len)
        .map(|i| {
            if rng.random_range(0..1000) < insert_permille {
                ChurnOp::Insert(i as u64)
            } else {
                ChurnOp::Remove(rng.random_range(0..usize::MAX))
            }
        })
        .collect()
}

/// Build `count` distinct `u32` keys, shuffled deterministically.
///
/// Keys are spread across the value range so checksum-hash clustering
/// reflects realistic identifiers rather than a dense 0..n run.
pub fn shuffled_keys(count: usize, seed: u64) -> Vec<u32> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    // Odd multiplier keeps the mapping bijective, so keys are distinct.
    let mut keys: Vec<u32> = (0..count as u32)
        .map(|i| i.wrapping_mul(2654435761))
        .collect();
    keys.shuffle(&mut rng);
    keys
}

/// Build `count` short ASCII keys for the string map benchmarks.
pub fn string_keys(count: usize, seed: u64) -> Vec<String> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let len = rng.random_range(4..12);
            (0..len)
                .map(|_| char::from(rng.random_range(b'a'..=b'z')))
                .collect()
        })
        .collect()
}
