//! Contiguous growable storage.
//!
//! A [`GrowableBuffer`] tracks a logical length and an allocated capacity.
//! Capacity follows its [`GrowthPolicy`]: a fixed baseline on the first
//! allocation, then repeated multiplication until a request fits. Growth
//! moves the storage, so any borrowed [`Slice`] must be dropped first (the
//! borrow checker enforces this).
//!
//! ```text
//! storage: [ content ........ | initialized slack | uninitialized ]
//!          0                 len              initialized       capacity
//! ```
//!
//! With `zero_fill` enabled the whole capacity is initialized and every slot
//! past `len` holds `T::default()`.

use std::fmt;
use std::ops::{Index, IndexMut};

use tracing::trace;

use crate::config::GrowthPolicy;
use crate::error::ConfigError;
use crate::raw::RawStorage;
use crate::slice::Slice;

/// An owned, contiguous, resizable run of `T`.
///
/// Starts unallocated. The buffer exclusively owns its storage;
/// [`append_move`](GrowableBuffer::append_move) copies another buffer's
/// content in and leaves that buffer released.
pub struct GrowableBuffer<T: Copy + Default> {
    /// `None` until the first growth and after [`release`](Self::release).
    storage: Option<RawStorage<T>>,
    /// Number of logically present elements. Never exceeds the storage's
    /// initialized watermark.
    len: usize,
    policy: GrowthPolicy,
}

impl<T: Copy + Default> GrowableBuffer<T> {
    /// Create an empty, unallocated buffer with the default policy.
    pub const fn new() -> Self {
        Self {
            storage: None,
            len: 0,
            policy: GrowthPolicy::new(),
        }
    }

    /// Create an empty buffer with a custom growth policy.
    ///
    /// # Panics
    ///
    /// Panics if the policy fails [`GrowthPolicy::validate`].
    pub fn with_policy(policy: GrowthPolicy) -> Self {
        match Self::try_with_policy(policy) {
            Ok(buf) => buf,
            Err(e) => panic!("invalid growth policy: {e}"),
        }
    }

    /// Create an empty buffer with a custom growth policy, rejecting
    /// policies that cannot make progress.
    pub fn try_with_policy(policy: GrowthPolicy) -> Result<Self, ConfigError> {
        policy.validate()?;
        Ok(Self {
            storage: None,
            len: 0,
            policy,
        })
    }

    /// Create a buffer holding a copy of `items`.
    pub fn from_slice(items: &[T]) -> Self {
        let mut buf = Self::new();
        buf.append(items);
        buf
    }

    /// The growth policy this buffer was built with.
    pub fn policy(&self) -> GrowthPolicy {
        self.policy
    }

    /// Number of elements logically present.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of elements the storage holds before it must grow.
    pub fn capacity(&self) -> usize {
        self.storage.as_ref().map_or(0, RawStorage::capacity)
    }

    /// Size of one element in bytes.
    pub fn element_size(&self) -> usize {
        std::mem::size_of::<T>()
    }

    /// Whether the buffer holds zero elements. It may still own storage.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether the buffer owns no storage at all.
    pub fn has_no_allocation(&self) -> bool {
        self.storage.is_none()
    }

    /// Copy `items` past the current logical end, growing if needed.
    ///
    /// Amortized O(1) per element; a call that forces a resize is O(n).
    pub fn append(&mut self, items: &[T]) {
        self.reserve(items.len());
        if let Some(storage) = self.storage.as_mut() {
            storage.write_at(self.len, items);
        }
        self.len += items.len();
    }

    /// Append a single element.
    pub fn push(&mut self, item: T) {
        self.append(std::slice::from_ref(&item));
    }

    /// Remove and return the last element, clearing its slot to
    /// `T::default()`.
    ///
    /// # Panics
    ///
    /// Panics if the buffer is empty.
    pub fn pop(&mut self) -> T {
        assert!(self.len > 0, "cannot pop from an empty buffer");
        let index = self.len - 1;
        let slot = &mut self.as_mut_slice()[index];
        let value = *slot;
        *slot = T::default();
        self.len = index;
        value
    }

    /// Drop all elements but keep the storage.
    pub fn clear(&mut self) {
        if self.policy.zero_fill {
            self.as_mut_slice().fill(T::default());
        }
        self.len = 0;
    }

    /// Free the storage and return to the unallocated state.
    ///
    /// Safe to call on a buffer that is already released.
    pub fn release(&mut self) {
        self.storage = None;
        self.len = 0;
    }

    /// Make room for `additional` more elements using the growth policy.
    ///
    /// The logical length is unchanged.
    ///
    /// # Panics
    ///
    /// Panics if the required capacity overflows `usize`.
    pub fn reserve(&mut self, additional: usize) {
        let required = self
            .len
            .checked_add(additional)
            .expect("capacity overflow");
        let capacity = self.capacity();
        if required > capacity {
            let new_capacity = self.policy.next_capacity(capacity, required);
            self.reallocate(new_capacity);
        }
    }

    /// Reallocate to exactly `new_capacity` if that exceeds the current
    /// capacity.
    ///
    /// Used to pre-size a buffer before a bulk fill without claiming the
    /// content exists yet. Returns whether a reallocation happened.
    pub fn try_grow(&mut self, new_capacity: usize) -> bool {
        if new_capacity <= self.capacity() {
            return false;
        }
        self.reallocate(new_capacity);
        true
    }

    /// Append `count` elements produced in place by `fill`.
    ///
    /// `fill` receives `count` initialized slots past the logical end. The
    /// slots become content only if it returns `Ok`; on `Err` the length is
    /// unchanged.
    pub fn append_with<E>(
        &mut self,
        count: usize,
        fill: impl FnOnce(&mut [T]) -> Result<(), E>,
    ) -> Result<(), E> {
        self.reserve(count);
        let start = self.len;
        let end = start + count;
        let zero_fill = self.policy.zero_fill;
        let Some(storage) = self.storage.as_mut() else {
            return fill(&mut []);
        };
        storage.fill_default_to(end);
        let region = storage.range_mut(start, end);
        match fill(&mut *region) {
            Ok(()) => {
                self.len = end;
                Ok(())
            }
            Err(e) => {
                if zero_fill {
                    region.fill(T::default());
                }
                Err(e)
            }
        }
    }

    /// Copy all of `source` onto the end of this buffer, then release
    /// `source`.
    pub fn append_move(&mut self, source: &mut Self) {
        self.append(source.as_slice());
        source.release();
    }

    /// Copy all of `source` onto the end of this buffer.
    pub fn append_copy(&mut self, source: &Self) {
        self.append(source.as_slice());
    }

    /// The logically present elements.
    pub fn as_slice(&self) -> &[T] {
        match self.storage.as_ref() {
            Some(storage) => storage.prefix(self.len),
            None => &[],
        }
    }

    /// The logically present elements, mutably.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        match self.storage.as_mut() {
            Some(storage) => storage.range_mut(0, self.len),
            None => &mut [],
        }
    }

    /// Every initialized slot: the content plus any slack that was
    /// zero-filled or cleared by [`pop`](Self::pop).
    pub fn initialized(&self) -> &[T] {
        match self.storage.as_ref() {
            Some(storage) => storage.prefix(storage.initialized_len()),
            None => &[],
        }
    }

    /// Element at `index`, if present.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    /// Iterate over the logically present elements.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Borrow `[from, to)` as a [`Slice`].
    ///
    /// # Panics
    ///
    /// Panics if `from > to` or `to > len`.
    pub fn view(&self, from: usize, to: usize) -> Slice<'_, T> {
        assert!(
            from <= to && to <= self.len,
            "slice range {from}..{to} out of bounds for length {}",
            self.len,
        );
        Slice::new(&self.as_slice()[from..to])
    }

    fn reallocate(&mut self, new_capacity: usize) {
        let old_capacity = self.capacity();
        let mut storage = match self.storage.as_ref() {
            Some(old) => old.reallocated(new_capacity),
            None => RawStorage::with_capacity(new_capacity),
        };
        if self.policy.zero_fill {
            storage.fill_default_to(new_capacity);
        }
        self.storage = Some(storage);
        trace!(
            old_capacity,
            new_capacity,
            element_size = self.element_size(),
            "buffer reallocated"
        );
    }
}

impl<T: Copy + Default> Default for GrowableBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy + Default> Clone for GrowableBuffer<T> {
    /// Deep copy into fresh storage sized by the same policy.
    fn clone(&self) -> Self {
        let mut copy = Self {
            storage: None,
            len: 0,
            policy: self.policy,
        };
        copy.append(self.as_slice());
        copy
    }
}

impl<T: Copy + Default + fmt::Debug> fmt::Debug for GrowableBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GrowableBuffer")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("items", &self.as_slice())
            .finish()
    }
}

impl<T: Copy + Default + PartialEq> PartialEq for GrowableBuffer<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Copy + Default + Eq> Eq for GrowableBuffer<T> {}

impl<T: Copy + Default> Index<usize> for GrowableBuffer<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

impl<T: Copy + Default> IndexMut<usize> for GrowableBuffer<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.as_mut_slice()[index]
    }
}

impl<T: Copy + Default> Extend<T> for GrowableBuffer<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<'a, T: Copy + Default + 'a> Extend<&'a T> for GrowableBuffer<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        for item in iter {
            self.push(*item);
        }
    }
}

impl<T: Copy + Default> FromIterator<T> for GrowableBuffer<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut buf = Self::new();
        buf.extend(iter);
        buf
    }
}

impl<'a, T: Copy + Default> IntoIterator for &'a GrowableBuffer<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_buffer_is_unallocated() {
        let buf = GrowableBuffer::<u32>::new();
        assert_eq!(buf.len(), 0);
        assert_eq!(buf.capacity(), 0);
        assert!(buf.is_empty());
        assert!(buf.has_no_allocation());
        assert!(buf.as_slice().is_empty());
    }

    #[test]
    fn first_append_allocates_baseline() {
        let mut buf = GrowableBuffer::<u64>::new();
        buf.push(7);
        assert_eq!(buf.len(), 1);
        assert_eq!(buf.capacity(), 256);
        assert_eq!(buf[0], 7);
    }

    #[test]
    fn large_append_doubles_past_baseline() {
        let mut buf = GrowableBuffer::<u8>::new();
        buf.append(&[1; 600]);
        assert_eq!(buf.capacity(), 1024);
        assert_eq!(buf.len(), 600);
    }

    #[test]
    fn empty_append_on_unallocated_is_noop() {
        let mut buf = GrowableBuffer::<u16>::new();
        buf.append(&[]);
        assert!(buf.has_no_allocation());
        assert!(buf.is_empty());
    }

    #[test]
    fn element_size_follows_type() {
        assert_eq!(GrowableBuffer::<u8>::new().element_size(), 1);
        assert_eq!(GrowableBuffer::<u64>::new().element_size(), 8);
        assert_eq!(GrowableBuffer::<[u32; 3]>::new().element_size(), 12);
    }

    #[test]
    fn pop_returns_last_and_clears_slot() {
        let mut buf = GrowableBuffer::<u32>::new();
        buf.append(&[10, 20, 30]);
        assert_eq!(buf.pop(), 30);
        assert_eq!(buf.len(), 2);
        assert_eq!(buf.as_slice(), &[10, 20]);
        assert_eq!(buf.initialized()[2], 0);
    }

    #[test]
    #[should_panic(expected = "cannot pop from an empty buffer")]
    fn pop_empty_panics() {
        let mut buf = GrowableBuffer::<u32>::new();
        buf.pop();
    }

    #[test]
    #[should_panic(expected = "cannot pop from an empty buffer")]
    fn pop_allocated_but_empty_panics() {
        let mut buf = GrowableBuffer::<u32>::new();
        buf.push(1);
        buf.pop();
        buf.pop();
    }

    #[test]
    fn release_is_idempotent() {
        let mut buf = GrowableBuffer::<u8>::new();
        buf.append(b"abc");
        buf.release();
        assert!(buf.has_no_allocation());
        assert_eq!(buf.capacity(), 0);
        buf.release();
        assert!(buf.has_no_allocation());
        assert_eq!(buf.len(), 0);
    }

    #[test]
    fn release_then_append_matches_fresh_buffer() {
        let mut reused = GrowableBuffer::<u32>::new();
        reused.append(&[0; 1000]);
        reused.release();
        reused.append(&[1, 2, 3]);

        let mut fresh = GrowableBuffer::<u32>::new();
        fresh.append(&[1, 2, 3]);

        assert_eq!(reused, fresh);
        assert_eq!(reused.capacity(), fresh.capacity());
    }

    #[test]
    fn empty_and_unallocated_are_distinct() {
        let mut buf = GrowableBuffer::<u8>::new();
        buf.push(1);
        buf.pop();
        assert!(buf.is_empty());
        assert!(!buf.has_no_allocation());
    }

    #[test]
    fn try_grow_only_grows() {
        let mut buf = GrowableBuffer::<u16>::new();
        assert!(buf.try_grow(10));
        assert_eq!(buf.capacity(), 10);
        assert_eq!(buf.len(), 0);
        assert!(!buf.try_grow(10));
        assert!(!buf.try_grow(5));
        assert_eq!(buf.capacity(), 10);
    }

    #[test]
    fn try_grow_preserves_content() {
        let mut buf = GrowableBuffer::<u32>::new();
        buf.append(&[4, 5, 6]);
        assert!(buf.try_grow(1000));
        assert_eq!(buf.as_slice(), &[4, 5, 6]);
        assert_eq!(buf.capacity(), 1000);
    }

    #[test]
    fn growth_from_exact_capacity_doubles() {
        let mut buf = GrowableBuffer::<u8>::new();
        buf.try_grow(3);
        buf.append(&[1, 2, 3]);
        buf.push(4);
        assert_eq!(buf.capacity(), 6);
    }

    #[test]
    fn zero_fill_slack_is_default() {
        let mut buf = GrowableBuffer::<u8>::with_policy(GrowthPolicy::new().with_zero_fill(true));
        buf.append(b"xyz");
        assert_eq!(buf.initialized().len(), buf.capacity());
        assert!(buf.initialized()[3..].iter().all(|&b| b == 0));
    }

    #[test]
    fn without_zero_fill_slack_is_not_exposed() {
        let mut buf = GrowableBuffer::<u8>::new();
        buf.append(b"xyz");
        assert_eq!(buf.initialized(), b"xyz");
    }

    #[test]
    fn clear_keeps_capacity_and_zeroes_when_configured() {
        let mut buf = GrowableBuffer::<u8>::with_policy(GrowthPolicy::new().with_zero_fill(true));
        buf.append(b"hello");
        buf.clear();
        assert!(buf.is_empty());
        assert_eq!(buf.capacity(), 256);
        assert!(buf.initialized().iter().all(|&b| b == 0));
    }

    #[test]
    fn append_move_releases_source() {
        let mut dst = GrowableBuffer::<u32>::from_slice(&[1, 2]);
        let mut src = GrowableBuffer::<u32>::from_slice(&[3, 4]);
        dst.append_move(&mut src);
        assert_eq!(dst.as_slice(), &[1, 2, 3, 4]);
        assert!(src.has_no_allocation());
        assert!(src.is_empty());
    }

    #[test]
    fn append_copy_keeps_source() {
        let mut dst = GrowableBuffer::<u32>::from_slice(&[1]);
        let src = GrowableBuffer::<u32>::from_slice(&[2, 3]);
        dst.append_copy(&src);
        assert_eq!(dst.as_slice(), &[1, 2, 3]);
        assert_eq!(src.as_slice(), &[2, 3]);
    }

    #[test]
    fn clone_is_independent() {
        let original = GrowableBuffer::<i64>::from_slice(&[-1, -2]);
        let mut copy = original.clone();
        copy[0] = 99;
        copy.push(5);
        assert_eq!(original.as_slice(), &[-1, -2]);
        assert_eq!(copy.as_slice(), &[99, -2, 5]);
    }

    #[test]
    fn append_with_commits_on_ok() {
        let mut buf = GrowableBuffer::<u8>::new();
        buf.append(b"ab");
        let result: Result<(), ()> = buf.append_with(3, |slots| {
            slots.copy_from_slice(b"cde");
            Ok(())
        });
        assert!(result.is_ok());
        assert_eq!(buf.as_slice(), b"abcde");
    }

    #[test]
    fn append_with_discards_on_err() {
        let mut buf = GrowableBuffer::<u8>::with_policy(GrowthPolicy::new().with_zero_fill(true));
        buf.append(b"ab");
        let result = buf.append_with(3, |slots| {
            slots.copy_from_slice(b"zzz");
            Err("boom")
        });
        assert_eq!(result, Err("boom"));
        assert_eq!(buf.as_slice(), b"ab");
        assert!(buf.initialized()[2..].iter().all(|&b| b == 0));
    }

    #[test]
    fn append_with_zero_count_on_unallocated() {
        let mut buf = GrowableBuffer::<u8>::new();
        let result: Result<(), ()> = buf.append_with(0, |slots| {
            assert!(slots.is_empty());
            Ok(())
        });
        assert!(result.is_ok());
        assert!(buf.has_no_allocation());
    }

    #[test]
    fn view_covers_half_open_range() {
        let buf = GrowableBuffer::<u16>::from_slice(&[1, 2, 3, 4, 5]);
        let view = buf.view(1, 4);
        assert_eq!(view.as_slice(), &[2, 3, 4]);
        assert_eq!(view.element_size(), 2);
        assert!(buf.view(5, 5).is_empty());
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn view_past_end_panics() {
        let buf = GrowableBuffer::<u16>::from_slice(&[1, 2, 3]);
        let _ = buf.view(1, 4);
    }

    #[test]
    fn collect_and_extend() {
        let mut buf: GrowableBuffer<u32> = (0..5).collect();
        buf.extend(&[5, 6]);
        assert_eq!(buf.len(), 7);
        assert_eq!(buf.iter().sum::<u32>(), 21);
    }

    #[test]
    #[should_panic(expected = "invalid growth policy")]
    fn invalid_policy_panics() {
        let _ = GrowableBuffer::<u8>::with_policy(GrowthPolicy::new().with_multiplier(1));
    }

    #[test]
    fn try_with_policy_reports_error() {
        let result =
            GrowableBuffer::<u8>::try_with_policy(GrowthPolicy::new().with_initial_capacity(0));
        assert!(matches!(result, Err(ConfigError::ZeroInitialCapacity)));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn appended_values_read_back_in_order(
                chunks in proptest::collection::vec(
                    proptest::collection::vec(any::<u32>(), 0..64),
                    0..32,
                ),
            ) {
                let mut buf = GrowableBuffer::<u32>::new();
                let mut expected = Vec::new();
                for chunk in &chunks {
                    buf.append(chunk);
                    expected.extend_from_slice(chunk);
                }
                prop_assert_eq!(buf.len(), expected.len());
                for (i, value) in expected.iter().enumerate() {
                    prop_assert_eq!(buf[i], *value);
                }
            }

            #[test]
            fn capacity_is_baseline_times_power_of_two(
                counts in proptest::collection::vec(0usize..700, 1..20),
            ) {
                let mut buf = GrowableBuffer::<u8>::new();
                for count in counts {
                    buf.append(&vec![1u8; count]);
                    prop_assert!(buf.capacity() >= buf.len());
                    if buf.capacity() > 0 {
                        let ratio = buf.capacity() / GrowthPolicy::DEFAULT_INITIAL_CAPACITY;
                        prop_assert_eq!(buf.capacity() % GrowthPolicy::DEFAULT_INITIAL_CAPACITY, 0);
                        prop_assert!(ratio.is_power_of_two());
                    }
                }
            }

            #[test]
            fn pop_undoes_push(
                prefix in proptest::collection::vec(any::<u64>(), 0..50),
                value in 1u64..,
            ) {
                let mut buf = GrowableBuffer::<u64>::from_slice(&prefix);
                let before = buf.len();
                buf.push(value);
                prop_assert_eq!(buf.pop(), value);
                prop_assert_eq!(buf.len(), before);
                prop_assert_eq!(buf.initialized()[before], 0);
            }
        }
    }
}
