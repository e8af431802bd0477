//! Growable buffers, borrowed slices and dynamic byte strings.
//!
//! This is the leaf crate of the Ferrule workspace. It has no internal
//! dependencies and defines the storage contract the other crates build
//! on:
//!
//! ```text
//! GrowableBuffer<T>  owned storage, len + capacity, policy-driven growth
//! ├── Slice / SliceMut   borrowed views (invalidated by growth)
//! └── DynamicString      GrowableBuffer<u8> with a zero sentinel in its slack
//! ```
//!
//! # Growth
//!
//! Capacity starts at [`GrowthPolicy::DEFAULT_INITIAL_CAPACITY`] elements
//! and multiplies by [`GrowthPolicy::DEFAULT_MULTIPLIER`] until a request
//! fits. Zero-filling of new slack is opt-in and used by
//! [`DynamicString`].
//!
//! # Errors
//!
//! Misuse (popping an empty buffer, indexing or slicing out of range)
//! panics with a diagnostic. The only recoverable error is an invalid
//! [`GrowthPolicy`], reported as [`ConfigError`].
//!
//! # Safety
//!
//! `unsafe` is confined to `raw.rs`, which owns the uninitialised storage
//! and its initialized watermark.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod buffer;
pub mod config;
pub mod error;
mod raw;
pub mod slice;
pub mod string;

pub use buffer::GrowableBuffer;
pub use config::GrowthPolicy;
pub use error::ConfigError;
pub use slice::{Slice, SliceMut};
pub use string::DynamicString;
