//! Chunked bump arena.
//!
//! [`BumpArena`] serves allocations from the last chunk in its chunk list
//! and appends a new chunk when the last one cannot fit a request. Nothing
//! is freed individually; [`BumpArena::release_all`] drops every chunk in
//! one pass.
//!
//! ```text
//! chunks: [ retired | retired | current ]
//!                                  └── used_bytes ──► free space
//! ```
//!
//! Retired chunks are never revisited, even when a larger request leaves
//! free space behind. No free list, no coalescing, no per-allocation
//! metadata.

use std::fmt;

use smallvec::SmallVec;
use tracing::debug;

use crate::chunk::Chunk;
use crate::config::ArenaConfig;
use crate::error::ArenaError;
use crate::region::ArenaRegion;

/// Bump allocator over an index-addressed list of chunks.
///
/// Issued regions stay valid until [`release_all`](Self::release_all):
/// chunks never move or shrink, so appending a chunk does not disturb
/// earlier allocations. After a release, old regions are rejected as stale.
pub struct BumpArena {
    /// Chunks in allocation order; the last one is current.
    chunks: SmallVec<[Chunk; 4]>,
    config: ArenaConfig,
    /// Incremented by every `release_all`.
    epoch: u32,
}

impl BumpArena {
    /// Create an empty arena with the default configuration.
    pub fn new() -> Self {
        Self::with_config(ArenaConfig::default())
    }

    /// Create an empty arena with a custom configuration.
    ///
    /// # Panics
    ///
    /// Panics if the configuration fails [`ArenaConfig::validate`].
    pub fn with_config(config: ArenaConfig) -> Self {
        match Self::try_with_config(config) {
            Ok(arena) => arena,
            Err(e) => panic!("{e}"),
        }
    }

    /// Create an empty arena, rejecting an invalid configuration.
    pub fn try_with_config(config: ArenaConfig) -> Result<Self, ArenaError> {
        config.validate()?;
        Ok(Self {
            chunks: SmallVec::new(),
            config,
            epoch: 0,
        })
    }

    /// Allocate `size` bytes, rounded up to a word.
    ///
    /// Serves from the current chunk when it has room, otherwise appends a
    /// chunk of `max(chunk_capacity_bytes, size)` bytes. The returned
    /// region is zero-initialised.
    ///
    /// # Panics
    ///
    /// Panics if the configured chunk limit would be exceeded.
    pub fn allocate(&mut self, size: usize) -> ArenaRegion {
        match self.try_allocate(size) {
            Ok(region) => region,
            Err(e) => panic!("{e}"),
        }
    }

    /// Allocate `size` bytes, returning
    /// [`ArenaError::CapacityExceeded`] instead of appending a chunk past
    /// the configured limit.
    pub fn try_allocate(&mut self, size: usize) -> Result<ArenaRegion, ArenaError> {
        if let Some(current) = self.chunks.last_mut() {
            if let Some(offset) = current.try_bump(size) {
                let index = self.chunks.len() - 1;
                return Ok(ArenaRegion::new(self.epoch, chunk_id(index), offset, size));
            }
        }

        if let Some(max_chunks) = self.config.max_chunks {
            if self.chunks.len() >= max_chunks {
                return Err(ArenaError::CapacityExceeded {
                    requested: size,
                    max_chunks,
                });
            }
        }

        let capacity = self
            .config
            .chunk_capacity_bytes
            .max(ArenaConfig::align(size));
        let mut chunk = Chunk::new(capacity);
        let offset = chunk
            .try_bump(size)
            .expect("fresh chunk is sized to fit the request");
        self.chunks.push(chunk);
        let index = self.chunks.len() - 1;
        debug!(
            chunk = index,
            capacity_bytes = capacity,
            requested = size,
            "arena chunk appended"
        );
        Ok(ArenaRegion::new(self.epoch, chunk_id(index), offset, size))
    }

    /// Allocate a region holding a copy of `data`.
    pub fn alloc_copy(&mut self, data: &[u8]) -> ArenaRegion {
        let region = self.allocate(data.len());
        self.bytes_mut(region).copy_from_slice(data);
        region
    }

    /// Resolve a region to its bytes.
    ///
    /// # Panics
    ///
    /// Panics if the region is stale or was not issued by this arena.
    pub fn bytes(&self, region: ArenaRegion) -> &[u8] {
        match self.try_bytes(region) {
            Ok(bytes) => bytes,
            Err(e) => panic!("{e}"),
        }
    }

    /// Resolve a region to its bytes, mutably.
    ///
    /// # Panics
    ///
    /// Panics if the region is stale or was not issued by this arena.
    pub fn bytes_mut(&mut self, region: ArenaRegion) -> &mut [u8] {
        match self.try_bytes_mut(region) {
            Ok(bytes) => bytes,
            Err(e) => panic!("{e}"),
        }
    }

    /// Resolve a region, reporting stale or foreign regions as errors.
    pub fn try_bytes(&self, region: ArenaRegion) -> Result<&[u8], ArenaError> {
        self.check_epoch(region)?;
        self.chunks
            .get(region.chunk as usize)
            .and_then(|chunk| chunk.bytes(region.offset, region.len))
            .ok_or(ArenaError::RegionOutOfBounds {
                chunk: region.chunk,
                offset: region.offset,
                len: region.len,
            })
    }

    /// Mutable counterpart of [`try_bytes`](Self::try_bytes).
    pub fn try_bytes_mut(&mut self, region: ArenaRegion) -> Result<&mut [u8], ArenaError> {
        self.check_epoch(region)?;
        self.chunks
            .get_mut(region.chunk as usize)
            .and_then(|chunk| chunk.bytes_mut(region.offset, region.len))
            .ok_or(ArenaError::RegionOutOfBounds {
                chunk: region.chunk,
                offset: region.offset,
                len: region.len,
            })
    }

    /// Drop every chunk and return to the empty state.
    ///
    /// Regions issued before this call become stale.
    ///
    /// # Panics
    ///
    /// Panics once the epoch counter reaches `u32::MAX`; a wrapped epoch
    /// would let a stale region resolve again.
    pub fn release_all(&mut self) {
        let released_chunks = self.chunks.len();
        let released_bytes = self.capacity_bytes();
        self.chunks.clear();
        self.epoch = self.epoch.checked_add(1).expect("arena epoch exhausted");
        debug!(
            released_chunks,
            released_bytes,
            epoch = self.epoch,
            "arena released"
        );
    }

    /// Number of chunks in the chain.
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Whether the arena holds no chunks.
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// The chunk at `index`, if present.
    pub fn chunk(&self, index: usize) -> Option<&Chunk> {
        self.chunks.get(index)
    }

    /// Bytes handed out across all chunks, including alignment padding.
    pub fn used_bytes(&self) -> usize {
        self.chunks.iter().map(Chunk::used_bytes).sum()
    }

    /// Total capacity across all chunks in bytes.
    pub fn capacity_bytes(&self) -> usize {
        self.chunks.iter().map(Chunk::capacity_bytes).sum()
    }

    /// Free bytes left in the current chunk.
    pub fn remaining_bytes(&self) -> usize {
        self.chunks.last().map_or(0, Chunk::remaining_bytes)
    }

    /// Number of completed [`release_all`](Self::release_all) calls.
    pub fn epoch(&self) -> u32 {
        self.epoch
    }

    /// The arena's configuration.
    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    fn check_epoch(&self, region: ArenaRegion) -> Result<(), ArenaError> {
        if region.epoch != self.epoch {
            return Err(ArenaError::StaleRegion {
                region_epoch: region.epoch,
                arena_epoch: self.epoch,
            });
        }
        Ok(())
    }
}

fn chunk_id(index: usize) -> u32 {
    u32::try_from(index).expect("chunk count exceeds u32::MAX")
}

impl Default for BumpArena {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for BumpArena {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BumpArena")
            .field("chunks", &self.chunk_count())
            .field("used_bytes", &self.used_bytes())
            .field("capacity_bytes", &self.capacity_bytes())
            .field("epoch", &self.epoch)
            .finish()
    }
}
