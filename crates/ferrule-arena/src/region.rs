//! Handles to arena allocations.
//!
//! An [`ArenaRegion`] encodes where an allocation lives: which chunk, at
//! what byte offset, and how long it is. It is epoch-scoped: the `epoch`
//! field lets the arena reject regions issued before a
//! [`release_all`](crate::BumpArena::release_all) in O(1).

use std::fmt;

/// Location of one allocation inside a [`BumpArena`](crate::BumpArena).
///
/// Regions are plain values; resolving one to bytes goes through the
/// arena that issued it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ArenaRegion {
    /// Arena epoch when this allocation was made.
    pub(crate) epoch: u32,
    /// Index of the chunk in the arena's chunk list.
    pub(crate) chunk: u32,
    /// Byte offset within the chunk. Always word-aligned.
    pub(crate) offset: usize,
    /// Requested length in bytes.
    pub(crate) len: usize,
}

impl ArenaRegion {
    pub(crate) fn new(epoch: u32, chunk: u32, offset: usize, len: usize) -> Self {
        Self {
            epoch,
            chunk,
            offset,
            len,
        }
    }

    /// The arena epoch this region belongs to.
    pub fn epoch(&self) -> u32 {
        self.epoch
    }

    /// Index of the chunk holding the region.
    pub fn chunk(&self) -> u32 {
        self.chunk
    }

    /// Byte offset within the chunk.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Length in bytes, as requested.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether this is a zero-length allocation.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether two regions share any byte. Empty regions overlap nothing.
    pub fn overlaps(&self, other: &ArenaRegion) -> bool {
        self.len != 0
            && other.len != 0
            && self.epoch == other.epoch
            && self.chunk == other.chunk
            && self.offset < other.offset + other.len
            && other.offset < self.offset + self.len
    }
}

impl fmt::Display for ArenaRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ArenaRegion(epoch={}, chunk={}, off={}, len={})",
            self.epoch, self.chunk, self.offset, self.len
        )
    }
}
