//! Fixed-capacity memory chunks with bump allocation.
//!
//! A [`Chunk`] is a zero-initialised, word-backed block with a cursor that
//! only moves forward. Chunks are never shrunk, compacted or reset; the
//! arena drops them all at once.

use crate::config::ArenaConfig;
use crate::raw;

/// A single contiguous block with bump allocation.
///
/// The backing words live in their own heap allocation, so the chunk's
/// data never moves even when the arena's chunk list does.
pub struct Chunk {
    /// Backing storage, allocated to full capacity at creation.
    words: Box<[u64]>,
    /// Bump pointer: next free byte offset. Always word-aligned.
    used_bytes: usize,
}

impl Chunk {
    /// Create a chunk holding at least `capacity_bytes`, rounded up to a
    /// whole word.
    pub fn new(capacity_bytes: usize) -> Self {
        let words = ArenaConfig::align(capacity_bytes) / ArenaConfig::WORD;
        Self {
            words: vec![0u64; words].into_boxed_slice(),
            used_bytes: 0,
        }
    }

    /// Bump-allocate `size` bytes, rounded up to a word.
    ///
    /// Returns the starting byte offset, or `None` if the remaining space
    /// is insufficient.
    pub fn try_bump(&mut self, size: usize) -> Option<usize> {
        let rounded = ArenaConfig::align(size);
        if rounded > self.remaining_bytes() {
            return None;
        }
        let offset = self.used_bytes;
        self.used_bytes += rounded;
        Some(offset)
    }

    /// Bytes `[offset, offset + len)`, or `None` if that range was never
    /// issued.
    pub fn bytes(&self, offset: usize, len: usize) -> Option<&[u8]> {
        let end = offset.checked_add(len)?;
        if end > self.used_bytes {
            return None;
        }
        Some(&raw::words_as_bytes(&self.words)[offset..end])
    }

    /// Mutable counterpart of [`bytes`](Self::bytes).
    pub fn bytes_mut(&mut self, offset: usize, len: usize) -> Option<&mut [u8]> {
        let end = offset.checked_add(len)?;
        if end > self.used_bytes {
            return None;
        }
        Some(&mut raw::words_as_bytes_mut(&mut self.words)[offset..end])
    }

    /// Total capacity in bytes.
    pub fn capacity_bytes(&self) -> usize {
        self.words.len() * ArenaConfig::WORD
    }

    /// Bytes handed out so far, including alignment padding.
    pub fn used_bytes(&self) -> usize {
        self.used_bytes
    }

    /// Bytes still available.
    pub fn remaining_bytes(&self) -> usize {
        self.capacity_bytes() - self.used_bytes
    }

    /// Address of the first byte, for identity checks.
    pub fn base_ptr(&self) -> *const u8 {
        self.words.as_ptr().cast()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_rounds_up_to_word() {
        let chunk = Chunk::new(13);
        assert_eq!(chunk.capacity_bytes(), 16);
        assert_eq!(chunk.used_bytes(), 0);
    }

    #[test]
    fn sequential_bumps_are_word_aligned() {
        let mut chunk = Chunk::new(1024);
        assert_eq!(chunk.try_bump(3), Some(0));
        assert_eq!(chunk.try_bump(9), Some(8));
        assert_eq!(chunk.try_bump(8), Some(24));
        assert_eq!(chunk.used_bytes(), 32);
    }

    #[test]
    fn bump_fails_when_full() {
        let mut chunk = Chunk::new(16);
        assert!(chunk.try_bump(16).is_some());
        assert!(chunk.try_bump(1).is_none());
        assert_eq!(chunk.try_bump(0), Some(16));
    }

    #[test]
    fn issued_bytes_start_zeroed() {
        let mut chunk = Chunk::new(64);
        let off = chunk.try_bump(10).unwrap();
        assert!(chunk.bytes(off, 10).unwrap().iter().all(|&b| b == 0));
    }

    #[test]
    fn bytes_round_trip() {
        let mut chunk = Chunk::new(64);
        let off = chunk.try_bump(5).unwrap();
        chunk.bytes_mut(off, 5).unwrap().copy_from_slice(b"hello");
        assert_eq!(chunk.bytes(off, 5).unwrap(), b"hello");
    }

    #[test]
    fn unissued_range_is_rejected() {
        let mut chunk = Chunk::new(64);
        chunk.try_bump(8).unwrap();
        assert!(chunk.bytes(0, 8).is_some());
        assert!(chunk.bytes(8, 1).is_none());
        assert!(chunk.bytes(usize::MAX, 2).is_none());
    }
}
