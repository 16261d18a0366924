use alloc::vec::Vec;

use quickcheck::QuickCheck;

use super::{arbitrary::CodePageText, test_count};
use crate::{
    StringEncoding, decode_bstring, decode_code_page, decode_plain_string, decode_string,
    decode_zstring, encode_bstring, encode_code_page, encode_string, encode_zstring,
    try_decode_bstring,
};

/// Property: representable text without NUL survives a null-terminated
/// round trip.
#[test]
fn zstring_round_trip() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(text: CodePageText) -> bool {
        decode_zstring(&encode_zstring(&text.0)) == text.0
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(CodePageText) -> bool);
}

/// Property: any non-empty representable text survives a length-prefixed
/// round trip, even with trailing bytes after the field.
#[test]
fn bstring_round_trip() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(text: CodePageText, trailer: Vec<u8>) -> bool {
        let mut bytes = encode_bstring(&text.0);
        bytes.extend_from_slice(&trailer);
        if text.0.is_empty() {
            // An empty string has a zero prefix, which reads as absent.
            try_decode_bstring(&bytes).is_none()
        } else {
            decode_bstring(&bytes) == text.0
        }
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(CodePageText, Vec<u8>) -> bool);
}

/// Property: every byte string survives decode then encode unchanged, so a
/// field the editor does not touch is written back byte for byte.
#[test]
fn code_page_bytes_round_trip() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(bytes: Vec<u8>) -> bool {
        encode_code_page(&decode_code_page(&bytes)) == bytes
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(Vec<u8>) -> bool);
}

/// Property: plain strings drop at most one trailing NUL and keep
/// everything else.
#[test]
fn plain_string_keeps_body() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(bytes: Vec<u8>) -> bool {
        let body = bytes.strip_suffix(&[0]).unwrap_or(&bytes);
        decode_plain_string(&bytes).chars().count() == body.len()
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(Vec<u8>) -> bool);
}

/// Property: the encoding-dispatching functions agree with each other.
#[test]
fn dispatch_round_trip() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(text: CodePageText, encoding: StringEncoding) -> bool {
        let decoded = decode_string(&encode_string(&text.0, encoding), encoding);
        decoded == text.0 || (text.0.is_empty() && decoded.is_empty())
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(CodePageText, StringEncoding) -> bool);
}
