//! Chunked bump arena with bulk release.
//!
//! A [`BumpArena`] hands out word-aligned byte regions from a chain of
//! fixed-capacity chunks. Allocation is a cursor bump; deallocation happens
//! only for the whole arena at once via [`BumpArena::release_all`].
//!
//! # Architecture
//!
//! ```text
//! BumpArena
//! ├── SmallVec<Chunk>   index-addressed chain, last chunk is current
//! │   └── Chunk         Box<[u64]> + used_bytes cursor (never moves)
//! └── epoch             bumped on release_all, stamped into every region
//! ```
//!
//! Allocations are returned as [`ArenaRegion`] handles (chunk index, byte
//! offset, length, epoch) and resolved through the arena. Because chunks
//! never move, a region's bytes keep their address for the arena's whole
//! lifetime, unlike the storage of a growable buffer.
//!
//! # Errors
//!
//! [`BumpArena::allocate`] and [`BumpArena::bytes`] panic on misuse; the
//! `try_*` variants return [`ArenaError`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod arena;
pub mod chunk;
pub mod config;
pub mod error;
mod raw;
pub mod region;

pub use arena::BumpArena;
pub use chunk::Chunk;
pub use config::ArenaConfig;
pub use error::ArenaError;
pub use region::ArenaRegion;
