//! Dynamic byte strings.
//!
//! [`DynamicString`] is a [`GrowableBuffer<u8>`] with zero-fill enabled.
//! Because every growth zeroes the slack, the byte just past the logical
//! end is a zero sentinel whenever capacity exceeds length, which is what
//! [`DynamicString::to_c_view`] relies on. The sentinel is never counted in
//! the length. Content is raw bytes; no encoding is validated.

use std::ffi::CStr;
use std::fmt;
use std::ops::Index;

use crate::buffer::GrowableBuffer;
use crate::config::GrowthPolicy;
use crate::slice::Slice;

/// A growable byte string with a zero sentinel kept in its slack.
#[derive(PartialEq, Eq)]
pub struct DynamicString {
    buf: GrowableBuffer<u8>,
}

impl DynamicString {
    /// Create an empty, unallocated string.
    pub fn new() -> Self {
        Self::with_policy(GrowthPolicy::new())
    }

    /// Create an empty string with a custom growth policy.
    ///
    /// Zero-fill is forced on regardless of `policy.zero_fill`.
    ///
    /// # Panics
    ///
    /// Panics if the policy fails [`GrowthPolicy::validate`].
    pub fn with_policy(policy: GrowthPolicy) -> Self {
        Self {
            buf: GrowableBuffer::with_policy(policy.with_zero_fill(true)),
        }
    }

    /// Create a string holding a copy of `text`.
    ///
    /// An empty `text` still allocates, so the result is empty but not
    /// unallocated.
    pub fn from_text(text: &str) -> Self {
        Self::from_bytes(text.as_bytes())
    }

    /// Create a string holding a copy of `bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut s = Self::new();
        s.append_bytes(bytes);
        s
    }

    /// Append the bytes of `text`. Returns the number of bytes appended.
    pub fn append_text(&mut self, text: &str) -> usize {
        self.append_bytes(text.as_bytes())
    }

    /// Append the bytes of a zero-terminated string, excluding the
    /// terminator. Returns the number of bytes appended.
    pub fn append_c_str(&mut self, text: &CStr) -> usize {
        self.append_bytes(text.to_bytes())
    }

    /// Append raw bytes. Returns the number of bytes appended.
    ///
    /// Appending nothing to an unallocated string allocates storage so a
    /// zero sentinel exists, without changing the length.
    pub fn append_bytes(&mut self, bytes: &[u8]) -> usize {
        if bytes.is_empty() {
            if self.buf.has_no_allocation() {
                self.buf.reserve(1);
            }
            return 0;
        }
        self.buf.append(bytes);
        bytes.len()
    }

    /// Append one byte.
    pub fn push_char(&mut self, c: u8) {
        self.buf.push(c);
    }

    /// Byte at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is outside `[0, len)`.
    pub fn at(&self, index: usize) -> u8 {
        self.check_index(index);
        self.buf.as_slice()[index]
    }

    /// Overwrite the byte at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is outside `[0, len)`.
    pub fn set_at(&mut self, index: usize, value: u8) {
        self.check_index(index);
        self.buf.as_mut_slice()[index] = value;
    }

    /// Content followed by one zero byte, for APIs that expect a
    /// terminator.
    ///
    /// When the string has no slack (`len == capacity`) this grows the
    /// storage first; it is the only operation that grows without adding
    /// content. The returned view is `len + 1` bytes long, but the string's
    /// own length is unchanged.
    pub fn to_c_view(&mut self) -> &[u8] {
        let len = self.buf.len();
        let capacity = self.buf.capacity();
        if len == capacity {
            let grown = self.buf.policy().next_capacity(capacity, capacity + 1);
            self.buf.try_grow(grown);
        }
        let view = &self.buf.initialized()[..=len];
        debug_assert_eq!(view[len], 0, "sentinel slot must be zero");
        view
    }

    /// The content as a [`CStr`], stopping at the first zero byte.
    ///
    /// Content containing interior zero bytes is truncated there; use
    /// [`to_c_view`](Self::to_c_view) to see every byte.
    pub fn as_c_str(&mut self) -> &CStr {
        CStr::from_bytes_until_nul(self.to_c_view()).unwrap_or_default()
    }

    /// Reverse the bytes in `[0, len)`. The sentinel stays where it is.
    pub fn reverse_in_place(&mut self) {
        self.buf.as_mut_slice().reverse();
    }

    /// Whether the string is non-empty and made only of spaces.
    pub fn is_whitespace(&self) -> bool {
        !self.is_empty() && self.as_bytes().iter().all(|&b| b == b' ')
    }

    /// Whether the string is empty or owns no storage.
    pub fn is_null_or_empty(&self) -> bool {
        self.is_empty() || self.has_no_allocation()
    }

    /// Copy `source`'s bytes onto the end of this string, then release
    /// `source`.
    pub fn append_move(&mut self, source: &mut DynamicString) {
        self.buf.append_move(&mut source.buf);
    }

    /// Copy `source`'s bytes onto the end of this string.
    pub fn append_copy(&mut self, source: &DynamicString) {
        self.buf.append_copy(&source.buf);
    }

    /// Append `count` bytes produced in place by `fill`; see
    /// [`GrowableBuffer::append_with`].
    pub fn append_with<E>(
        &mut self,
        count: usize,
        fill: impl FnOnce(&mut [u8]) -> Result<(), E>,
    ) -> Result<(), E> {
        self.buf.append_with(count, fill)
    }

    /// Borrow `[from, to)` as a [`Slice`].
    ///
    /// # Panics
    ///
    /// Panics if `from > to` or `to > len`.
    pub fn to_slice(&self, from: usize, to: usize) -> Slice<'_, u8> {
        self.buf.view(from, to)
    }

    /// Reallocate to exactly `new_capacity` bytes if larger than the
    /// current capacity. The length is unchanged.
    pub fn try_grow(&mut self, new_capacity: usize) -> bool {
        self.buf.try_grow(new_capacity)
    }

    /// Drop the content but keep the storage.
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Free the storage and return to the unallocated state.
    pub fn release(&mut self) {
        self.buf.release();
    }

    /// Number of content bytes, excluding any sentinel.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Allocated capacity in bytes.
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Whether the string has zero content bytes.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Whether the string owns no storage.
    pub fn has_no_allocation(&self) -> bool {
        self.buf.has_no_allocation()
    }

    /// The content bytes.
    pub fn as_bytes(&self) -> &[u8] {
        self.buf.as_slice()
    }

    /// The content bytes, mutably.
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        self.buf.as_mut_slice()
    }

    /// The underlying buffer.
    pub fn buffer(&self) -> &GrowableBuffer<u8> {
        &self.buf
    }

    /// The underlying buffer, mutably. Its policy cannot be changed
    /// through this handle, so zero-fill stays on.
    pub fn buffer_mut(&mut self) -> &mut GrowableBuffer<u8> {
        &mut self.buf
    }

    fn check_index(&self, index: usize) {
        assert!(!self.is_empty(), "cannot index an empty string");
        assert!(
            index < self.len(),
            "index {index} out of bounds for string of length {}",
            self.len(),
        );
    }
}

impl Default for DynamicString {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for DynamicString {
    /// Independent deep copy. An allocated source yields an allocated copy,
    /// even when empty.
    fn clone(&self) -> Self {
        let mut copy = Self {
            buf: self.buf.clone(),
        };
        if !self.has_no_allocation() && copy.has_no_allocation() {
            copy.buf.reserve(1);
        }
        copy
    }
}

impl From<&str> for DynamicString {
    fn from(text: &str) -> Self {
        Self::from_text(text)
    }
}

impl From<&[u8]> for DynamicString {
    fn from(bytes: &[u8]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl Index<usize> for DynamicString {
    type Output = u8;

    fn index(&self, index: usize) -> &u8 {
        self.check_index(index);
        &self.buf.as_slice()[index]
    }
}

impl PartialEq<str> for DynamicString {
    fn eq(&self, other: &str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<&str> for DynamicString {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<[u8]> for DynamicString {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes() == other
    }
}

impl fmt::Write for DynamicString {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.append_text(s);
        Ok(())
    }
}

impl fmt::Display for DynamicString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(self.as_bytes()))
    }
}

impl fmt::Debug for DynamicString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicString")
            .field("text", &String::from_utf8_lossy(self.as_bytes()))
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .finish()
    }
}
