//! Arena-specific error types.
//!
//! These surface only through the `try_*` entry points. The plain
//! entry points treat the same conditions as programmer errors and panic.

use std::error::Error;
use std::fmt;

/// Errors that can occur during arena operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// The configured chunk limit would be exceeded.
    CapacityExceeded {
        /// Number of bytes requested (before word rounding).
        requested: usize,
        /// The configured maximum chunk count.
        max_chunks: usize,
    },
    /// A region issued before the last [`release_all`].
    ///
    /// [`release_all`]: crate::BumpArena::release_all
    StaleRegion {
        /// The epoch encoded in the region.
        region_epoch: u32,
        /// The arena's current epoch.
        arena_epoch: u32,
    },
    /// A region that does not lie inside the arena's issued memory, e.g.
    /// one taken from a different arena.
    RegionOutOfBounds {
        /// Chunk index in the region.
        chunk: u32,
        /// Byte offset in the region.
        offset: usize,
        /// Byte length in the region.
        len: usize,
    },
    /// The arena configuration failed validation.
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExceeded {
                requested,
                max_chunks,
            } => {
                write!(
                    f,
                    "arena capacity exceeded: requested {requested} bytes with {max_chunks} chunks in use"
                )
            }
            Self::StaleRegion {
                region_epoch,
                arena_epoch,
            } => {
                write!(
                    f,
                    "stale region: epoch {region_epoch}, arena epoch {arena_epoch}"
                )
            }
            Self::RegionOutOfBounds { chunk, offset, len } => {
                write!(
                    f,
                    "region out of bounds: chunk {chunk}, offset {offset}, len {len}"
                )
            }
            Self::InvalidConfig { reason } => {
                write!(f, "invalid arena config: {reason}")
            }
        }
    }
}

impl Error for ArenaError {}
