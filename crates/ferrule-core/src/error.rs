//! Error types for buffer configuration.
//!
//! Misuse of a live buffer (popping an empty buffer, indexing out of
//! bounds) is a programmer error and panics instead of returning one of
//! these.

use std::error::Error;
use std::fmt;

/// A [`GrowthPolicy`](crate::GrowthPolicy) that cannot make progress.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `initial_capacity` was zero, so growth would never leave zero.
    ZeroInitialCapacity,
    /// `multiplier` was below 2, so growth would never advance.
    MultiplierTooSmall {
        /// The rejected multiplier.
        multiplier: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroInitialCapacity => write!(f, "initial capacity must be at least 1"),
            Self::MultiplierTooSmall { multiplier } => {
                write!(f, "growth multiplier must be at least 2 (got {multiplier})")
            }
        }
    }
}

impl Error for ConfigError {}
