//! Non-owning views over contiguous elements.
//!
//! A [`Slice`] is what buffers hand out when data must be passed along
//! without transferring ownership, e.g. to the file writers. It borrows
//! its source, so the source cannot grow, shrink or be released while the
//! view is alive. [`SliceMut`] is the writable counterpart used as the
//! destination of exact reads.

use std::ops::Index;

/// Borrowed, read-only view: data, element count, element size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slice<'a, T> {
    data: &'a [T],
}

impl<'a, T> Slice<'a, T> {
    /// Wrap an existing slice.
    pub fn new(data: &'a [T]) -> Self {
        Self { data }
    }

    /// Number of elements covered.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the view covers zero elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Size of one element in bytes.
    pub fn element_size(&self) -> usize {
        std::mem::size_of::<T>()
    }

    /// Total size of the viewed region in bytes.
    pub fn byte_len(&self) -> usize {
        self.len() * self.element_size()
    }

    /// The viewed elements.
    pub fn as_slice(&self) -> &'a [T] {
        self.data
    }

    /// Element at `index`, if covered.
    pub fn get(&self, index: usize) -> Option<&'a T> {
        self.data.get(index)
    }

    /// Iterate over the viewed elements.
    pub fn iter(&self) -> std::slice::Iter<'a, T> {
        self.data.iter()
    }
}

impl<'a> Slice<'a, u8> {
    /// The viewed bytes.
    pub fn as_bytes(&self) -> &'a [u8] {
        self.data
    }
}

impl<'a, T> From<&'a [T]> for Slice<'a, T> {
    fn from(data: &'a [T]) -> Self {
        Self::new(data)
    }
}

impl<T> Index<usize> for Slice<'_, T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<'a, T> IntoIterator for Slice<'a, T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

/// Borrowed, writable view over a caller-owned region.
#[derive(Debug, PartialEq, Eq)]
pub struct SliceMut<'a, T> {
    data: &'a mut [T],
}

impl<'a, T> SliceMut<'a, T> {
    /// Wrap an existing mutable slice.
    pub fn new(data: &'a mut [T]) -> Self {
        Self { data }
    }

    /// Number of elements covered.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the view covers zero elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Size of one element in bytes.
    pub fn element_size(&self) -> usize {
        std::mem::size_of::<T>()
    }

    /// Total size of the viewed region in bytes.
    pub fn byte_len(&self) -> usize {
        self.len() * self.element_size()
    }

    /// The viewed elements.
    pub fn as_slice(&self) -> &[T] {
        self.data
    }

    /// The viewed elements, mutably.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.data
    }

    /// Give up the view and return the underlying borrow.
    pub fn into_mut_slice(self) -> &'a mut [T] {
        self.data
    }
}

impl<'a, T> From<&'a mut [T]> for SliceMut<'a, T> {
    fn from(data: &'a mut [T]) -> Self {
        Self::new(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_reports_sizes() {
        let data = [1u32, 2, 3];
        let view = Slice::new(&data[..]);
        assert_eq!(view.len(), 3);
        assert_eq!(view.element_size(), 4);
        assert_eq!(view.byte_len(), 12);
        assert_eq!(view[1], 2);
        assert_eq!(view.get(3), None);
    }

    #[test]
    fn slice_is_copy() {
        let data = b"abc";
        let view = Slice::from(&data[..]);
        let again = view;
        assert_eq!(view.as_bytes(), again.as_bytes());
        assert_eq!(view.into_iter().count(), 3);
    }

    #[test]
    fn slice_mut_writes_through() {
        let mut data = [0u8; 4];
        {
            let mut view = SliceMut::new(&mut data[..]);
            assert_eq!(view.byte_len(), 4);
            view.as_mut_slice()[2] = 9;
        }
        assert_eq!(data, [0, 0, 9, 0]);
    }

    #[test]
    fn empty_views() {
        let empty: [u64; 0] = [];
        assert!(Slice::new(&empty[..]).is_empty());
        let mut also_empty: [u64; 0] = [];
        assert!(SliceMut::new(&mut also_empty[..]).is_empty());
    }
}
