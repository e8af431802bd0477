//! Integration test: the string layer's use of the buffer contract.
//!
//! Checks the sentinel, length and ownership rules a caller relies on when
//! handing strings to terminator-based APIs or to the file helpers.

use ferrule::prelude::*;
use proptest::prelude::*;

#[test]
fn hello_view_has_five_content_bytes() {
    let mut s = DynamicString::from_text("hello");
    let view = s.to_c_view();
    assert_eq!(&view[..5], b"hello");
    assert_eq!(view.len(), 6);
    assert_eq!(s.len(), 5);
}

#[test]
fn abcde_reverses_to_edcba() {
    let mut s = DynamicString::from_text("abcde");
    s.reverse_in_place();
    assert_eq!(s, "edcba");
    assert_eq!(s.len(), 5);
}

#[test]
fn empty_string_is_allocated_but_empty() {
    let s = DynamicString::from_text("");
    assert_eq!(s.len(), 0);
    assert!(!s.has_no_allocation());
}

#[test]
fn release_then_append_matches_fresh() {
    let mut s = DynamicString::from_text(&"z".repeat(700));
    s.release();
    s.append_text("abc");
    let fresh = DynamicString::from_text("abc");
    assert_eq!(s, fresh);
    assert_eq!(s.capacity(), fresh.capacity());
}

#[test]
fn string_written_and_read_through_files() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("roundtrip.txt");

    let mut original = DynamicString::from_text("line one\n");
    let mut second = DynamicString::from_text("line two\n");
    original.append_move(&mut second);
    assert!(second.has_no_allocation());

    ferrule::io::write_file(&path, original.to_slice(0, original.len())).unwrap();

    let mut loaded = DynamicString::new();
    ferrule::io::read_to_end(&path, &mut loaded).unwrap();
    assert_eq!(loaded, original);
    assert_eq!(loaded.as_c_str().to_bytes(), b"line one\nline two\n");
}

proptest! {
    #[test]
    fn c_view_never_counts_sentinel(bytes in proptest::collection::vec(1u8..=255, 0..600)) {
        let mut s = DynamicString::from_bytes(&bytes);
        let len = s.len();
        let view = s.to_c_view().to_vec();
        prop_assert_eq!(view.len(), len + 1);
        prop_assert_eq!(&view[..len], &bytes[..]);
        prop_assert_eq!(view[len], 0);
        prop_assert_eq!(s.len(), bytes.len());
    }

    #[test]
    fn double_reverse_is_identity(bytes in proptest::collection::vec(any::<u8>(), 0..300)) {
        let mut s = DynamicString::from_bytes(&bytes);
        s.reverse_in_place();
        s.reverse_in_place();
        prop_assert_eq!(s.as_bytes(), &bytes[..]);
    }

    #[test]
    fn push_then_pop_restores_buffer(
        bytes in proptest::collection::vec(any::<u8>(), 1..300),
        extra in any::<u8>(),
    ) {
        let mut buf = GrowableBuffer::<u8>::from_slice(&bytes);
        buf.push(extra);
        prop_assert_eq!(buf.pop(), extra);
        prop_assert_eq!(buf.as_slice(), &bytes[..]);
        prop_assert_eq!(buf.initialized()[bytes.len()], 0);
    }
}
