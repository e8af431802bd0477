//! Byte views over word-backed chunk storage.
//!
//! Chunks store `u64` words so every chunk starts on a word boundary;
//! callers address them in bytes. This is the only module in the crate
//! that may use `unsafe`.

#![allow(unsafe_code)]

/// View words as their underlying bytes.
pub(crate) fn words_as_bytes(words: &[u64]) -> &[u8] {
    let len = std::mem::size_of_val(words);
    // SAFETY: `u8` has alignment 1 and no invalid bit patterns, the length
    // covers exactly the bytes of `words`, and the shared borrow is carried
    // over unchanged.
    unsafe { std::slice::from_raw_parts(words.as_ptr().cast::<u8>(), len) }
}

/// View words as their underlying bytes, mutably.
pub(crate) fn words_as_bytes_mut(words: &mut [u64]) -> &mut [u8] {
    let len = std::mem::size_of_val(words);
    // SAFETY: as above; every byte pattern is a valid `u64`, so writes
    // through the byte view cannot produce an invalid word.
    unsafe { std::slice::from_raw_parts_mut(words.as_mut_ptr().cast::<u8>(), len) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_view_covers_all_words() {
        let words = [0u64; 3];
        assert_eq!(words_as_bytes(&words).len(), 24);
    }

    #[test]
    fn writes_through_byte_view_land_in_words() {
        let mut words = [0u64; 2];
        words_as_bytes_mut(&mut words).fill(0xFF);
        assert_eq!(words, [u64::MAX, u64::MAX]);
    }
}
