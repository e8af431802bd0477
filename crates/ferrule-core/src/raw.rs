//! Low-level storage for [`GrowableBuffer`](crate::GrowableBuffer).
//!
//! [`RawStorage`] is a boxed slice of `MaybeUninit<T>` plus an initialized
//! watermark. Its length is exactly the capacity the growth policy asked
//! for, and slots past the watermark are never read. This is the only
//! module in the crate that may use `unsafe`; each block carries a
//! `// SAFETY:` comment and relies solely on the watermark invariant.

#![allow(unsafe_code)]

use std::mem::MaybeUninit;

/// Exactly-sized storage with an initialized prefix.
///
/// Invariant: slots `[0, initialized)` have been written.
pub(crate) struct RawStorage<T> {
    slots: Box<[MaybeUninit<T>]>,
    initialized: usize,
}

impl<T: Copy + Default> RawStorage<T> {
    /// Allocate uninitialised storage for exactly `capacity` elements.
    ///
    /// Allocation failure aborts through the global allocator's OOM handler.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Box::new_uninit_slice(capacity),
            initialized: 0,
        }
    }

    /// Number of slots.
    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Length of the initialized prefix.
    pub(crate) fn initialized_len(&self) -> usize {
        self.initialized
    }

    /// Copy the initialized prefix into fresh storage of `new_capacity`.
    ///
    /// # Panics
    ///
    /// Panics if `new_capacity` cannot hold the initialized prefix.
    pub(crate) fn reallocated(&self, new_capacity: usize) -> Self {
        assert!(
            new_capacity >= self.initialized,
            "reallocation would truncate initialized data"
        );
        let mut fresh = Self::with_capacity(new_capacity);
        fresh.slots[..self.initialized].copy_from_slice(&self.slots[..self.initialized]);
        fresh.initialized = self.initialized;
        fresh
    }

    /// Write `T::default()` into `[initialized, end)` and advance the
    /// watermark to `end`. No-op when `end` is already initialized.
    pub(crate) fn fill_default_to(&mut self, end: usize) {
        if end <= self.initialized {
            return;
        }
        for slot in &mut self.slots[self.initialized..end] {
            slot.write(T::default());
        }
        self.initialized = end;
    }

    /// Copy `items` into the slots starting at `start`.
    ///
    /// # Panics
    ///
    /// Panics if `start` lies past the watermark (which would leave a gap)
    /// or the items do not fit.
    pub(crate) fn write_at(&mut self, start: usize, items: &[T]) {
        assert!(start <= self.initialized, "write would leave a gap");
        let end = start + items.len();
        for (slot, item) in self.slots[start..end].iter_mut().zip(items) {
            slot.write(*item);
        }
        self.initialized = self.initialized.max(end);
    }

    /// The initialized slots `[0, end)`.
    ///
    /// # Panics
    ///
    /// Panics if `end` exceeds the watermark.
    pub(crate) fn prefix(&self, end: usize) -> &[T] {
        assert!(end <= self.initialized, "read past initialized data");
        let slots = &self.slots[..end];
        // SAFETY: `MaybeUninit<T>` is `repr(transparent)` over `T`, and every
        // slot below the watermark has been written.
        unsafe { &*(slots as *const [MaybeUninit<T>] as *const [T]) }
    }

    /// The initialized slots `[start, end)`, mutably.
    ///
    /// # Panics
    ///
    /// Panics if `end` exceeds the watermark.
    pub(crate) fn range_mut(&mut self, start: usize, end: usize) -> &mut [T] {
        assert!(end <= self.initialized, "write past initialized data");
        let slots = &mut self.slots[start..end];
        // SAFETY: same layout argument as `prefix`; the exclusive borrow is
        // carried over unchanged.
        unsafe { &mut *(slots as *mut [MaybeUninit<T>] as *mut [T]) }
    }
}
