//! Growth configuration for [`GrowableBuffer`](crate::GrowableBuffer).

use crate::error::ConfigError;

/// Controls how a [`GrowableBuffer`](crate::GrowableBuffer) sizes its storage.
///
/// A buffer starts unallocated. The first growth allocates
/// `initial_capacity` elements; every later growth multiplies the capacity
/// by `multiplier` until the request fits. Validated at buffer construction;
/// immutable afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GrowthPolicy {
    /// Capacity (in elements) of the first allocation.
    ///
    /// Default: 256. Must be at least 1.
    pub initial_capacity: usize,

    /// Factor applied to the capacity on each growth step.
    ///
    /// Default: 2. Must be at least 2.
    pub multiplier: usize,

    /// Whether newly allocated slack is filled with `T::default()`.
    ///
    /// Off by default. The string layer turns it on so that the byte just
    /// past the logical end is always a zero sentinel.
    pub zero_fill: bool,
}

impl GrowthPolicy {
    /// Default capacity of the first allocation, in elements.
    pub const DEFAULT_INITIAL_CAPACITY: usize = 256;

    /// Default growth factor.
    pub const DEFAULT_MULTIPLIER: usize = 2;

    /// Create a policy with the default baseline and multiplier.
    pub const fn new() -> Self {
        Self {
            initial_capacity: Self::DEFAULT_INITIAL_CAPACITY,
            multiplier: Self::DEFAULT_MULTIPLIER,
            zero_fill: false,
        }
    }

    /// Set the capacity of the first allocation.
    pub const fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    /// Set the growth factor.
    pub const fn with_multiplier(mut self, multiplier: usize) -> Self {
        self.multiplier = multiplier;
        self
    }

    /// Enable or disable filling of new slack with `T::default()`.
    pub const fn with_zero_fill(mut self, zero_fill: bool) -> Self {
        self.zero_fill = zero_fill;
        self
    }

    /// Check that the policy can always make progress.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_capacity == 0 {
            return Err(ConfigError::ZeroInitialCapacity);
        }
        if self.multiplier < 2 {
            return Err(ConfigError::MultiplierTooSmall {
                multiplier: self.multiplier,
            });
        }
        Ok(())
    }

    /// Smallest capacity reachable from `current` that holds `required`.
    ///
    /// Starts at `initial_capacity` when `current` is zero, then multiplies.
    ///
    /// # Panics
    ///
    /// Panics if the computation overflows `usize`.
    pub fn next_capacity(&self, current: usize, required: usize) -> usize {
        let mut capacity = if current == 0 {
            self.initial_capacity
        } else {
            current
        };
        while capacity < required {
            capacity = capacity
                .checked_mul(self.multiplier)
                .expect("capacity overflow");
        }
        capacity
    }
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        Self::new()
    }
}
