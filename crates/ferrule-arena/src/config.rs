//! Arena configuration parameters.

use crate::error::ArenaError;

/// Configuration for a [`BumpArena`](crate::BumpArena).
///
/// Controls chunk sizing and an optional cap on chunk count. Validated at
/// construction; immutable after creation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArenaConfig {
    /// Capacity of a regular chunk in bytes.
    ///
    /// Default: 8192 (1024 words). Requests larger than this get a
    /// dedicated chunk of exactly their (word-rounded) size. Rounded up to
    /// a whole word when chunks are created. Must be non-zero.
    pub chunk_capacity_bytes: usize,

    /// Maximum number of chunks the arena may hold.
    ///
    /// Default: `None` (unbounded). When set, [`BumpArena::try_allocate`]
    /// reports [`ArenaError::CapacityExceeded`] instead of appending past
    /// the limit.
    ///
    /// [`BumpArena::try_allocate`]: crate::BumpArena::try_allocate
    pub max_chunks: Option<usize>,
}

impl ArenaConfig {
    /// Allocation granularity and alignment in bytes.
    pub const WORD: usize = std::mem::size_of::<u64>();

    /// Default chunk capacity: 1024 words.
    pub const DEFAULT_CHUNK_CAPACITY_BYTES: usize = 1024 * Self::WORD;

    /// Create a config with the given chunk capacity and no chunk limit.
    pub fn new(chunk_capacity_bytes: usize) -> Self {
        Self {
            chunk_capacity_bytes,
            max_chunks: None,
        }
    }

    /// Cap the number of chunks.
    pub fn with_max_chunks(mut self, max_chunks: usize) -> Self {
        self.max_chunks = Some(max_chunks);
        self
    }

    /// Reject configurations under which no allocation could ever succeed.
    pub fn validate(&self) -> Result<(), ArenaError> {
        if self.chunk_capacity_bytes == 0 {
            return Err(ArenaError::InvalidConfig {
                reason: "chunk_capacity_bytes must be non-zero".into(),
            });
        }
        if self.max_chunks == Some(0) {
            return Err(ArenaError::InvalidConfig {
                reason: "max_chunks must be at least 1 when set".into(),
            });
        }
        Ok(())
    }

    /// Round `size` up to the next word boundary.
    ///
    /// # Panics
    ///
    /// Panics if the rounded size overflows `usize`.
    pub fn align(size: usize) -> usize {
        size.checked_add(Self::WORD - 1)
            .expect("allocation size overflow")
            & !(Self::WORD - 1)
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CHUNK_CAPACITY_BYTES)
    }
}
