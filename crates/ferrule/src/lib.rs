//! Ferrule: growable buffers, dynamic byte strings and a chunked bump arena.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Ferrule sub-crates. For most users, adding `ferrule` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use ferrule::prelude::*;
//!
//! // A buffer of any Copy element type.
//! let mut buf = GrowableBuffer::<u32>::new();
//! buf.append(&[1, 2, 3]);
//! assert_eq!(buf.capacity(), 256);
//! assert_eq!(buf.pop(), 3);
//!
//! // A byte string with a terminator available on demand.
//! let mut s = DynamicString::from_text("hello");
//! assert_eq!(s.to_c_view(), b"hello\0");
//! assert_eq!(s.len(), 5);
//!
//! // Arena regions stay put until the whole arena is released.
//! let mut arena = BumpArena::new();
//! let region = arena.alloc_copy(b"scoped");
//! assert_eq!(arena.bytes(region), b"scoped");
//! arena.release_all();
//! assert!(arena.try_bytes(region).is_err());
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`mem`] | `ferrule-core` | `GrowableBuffer`, `Slice`, `DynamicString`, growth policy |
//! | [`arena`] | `ferrule-arena` | `BumpArena`, chunks, regions, arena config |
//! | [`io`] | `ferrule-io` | File reads and writes over buffers and slices |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Buffers, slices and strings (`ferrule-core`).
pub use ferrule_core as mem;

/// Chunked bump arena (`ferrule-arena`).
pub use ferrule_arena as arena;

/// File I/O over buffers (`ferrule-io`).
pub use ferrule_io as io;

/// Common imports for typical Ferrule usage.
///
/// ```rust
/// use ferrule::prelude::*;
/// ```
pub mod prelude {
    // Buffers and strings
    pub use ferrule_core::{DynamicString, GrowableBuffer, GrowthPolicy, Slice, SliceMut};

    // Arena
    pub use ferrule_arena::{ArenaConfig, ArenaRegion, BumpArena};

    // Errors
    pub use ferrule_arena::ArenaError;
    pub use ferrule_core::ConfigError;
    pub use ferrule_io::FileError;
}
