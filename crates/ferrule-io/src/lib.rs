//! File I/O over Ferrule buffers.
//!
//! A pass-through consumer of the `ferrule-core` storage contract:
//!
//! - [`File::read_exact`] fills a caller-provided `SliceMut<u8>`.
//! - [`File::write`] writes a borrowed `Slice<u8>`.
//! - [`File::read_to_end`] pre-sizes a `DynamicString` to the file length
//!   with a seek-to-end/seek-back probe ([`file_size`]) and then fills it,
//!   replacing its content. [`File::append_to_end`] keeps the content.
//!
//! Environmental failures are returned as [`FileError`]; nothing here
//! panics on I/O.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod file;

pub use error::FileError;
pub use file::{file_size, read_to_end, write_file, File};
