//! Benchmark workloads for the Ferrule crates.
//!
//! Provides deterministic inputs shared by the criterion benches:
//!
//! - [`allocation_sizes`]: a mixed stream of small and large arena requests
//! - [`word_list`]: short byte strings for string-building workloads
//! - [`fill_arena`]: drives an arena through a full allocation stream

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use ferrule_arena::BumpArena;
use ferrule_core::GrowableBuffer;

/// Generate `n` deterministic allocation sizes in `1..=max`.
///
/// Roughly one request in sixteen is large (`max`); the rest are small.
pub fn allocation_sizes(n: usize, max: usize, seed: u64) -> Vec<usize> {
    let mut state = seed;
    (0..n)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            let r = (state >> 33) as usize;
            if r % 16 == 0 {
                max
            } else {
                1 + r % 64usize.min(max)
            }
        })
        .collect()
}

/// Build `n` short words of the form `item-<i>`.
pub fn word_list(n: usize) -> Vec<Vec<u8>> {
    (0..n).map(|i| format!("item-{i}").into_bytes()).collect()
}

/// Allocate every size in `sizes` and return the total requested bytes.
pub fn fill_arena(arena: &mut BumpArena, sizes: &[usize]) -> usize {
    sizes.iter().map(|&size| arena.allocate(size).len()).sum()
}

/// Push `n` sequential values into a fresh buffer.
pub fn push_sequence(n: u32) -> GrowableBuffer<u32> {
    let mut buf = GrowableBuffer::new();
    for i in 0..n {
        buf.push(i);
    }
    buf
}
