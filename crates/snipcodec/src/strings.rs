//! Text fields: null-terminated, length-prefixed and plain strings.
//!
//! Decoding never fails. A missing terminator, an impossible length prefix
//! or an empty field each produce a defined fallback so one damaged field
//! cannot stop a record stream from being read.

use alloc::{string::String, vec::Vec};

use bstr::ByteSlice;
use log::{trace, warn};

use crate::{
    code_page::{decode_code_page, encode_code_page_with},
    error::{CodecError, Result},
    numeric::{encode_le, try_read},
    options::EncodeOptions,
    span::ByteSpan,
};

/// How a text field is framed in the record.
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StringEncoding {
    /// Text followed by a single `0` byte.
    ZString,
    /// Two-byte little-endian byte count, then exactly that many bytes.
    BString,
    /// The whole field is text; a final `0` byte, if any, is not part of it.
    Plain,
}

/// Decodes text up to the first `0` byte, or the whole span if there is
/// none.
///
/// ```rust
/// use snipcodec::decode_zstring;
///
/// assert_eq!(decode_zstring(b"Iron Sword\0junk"), "Iron Sword");
/// assert_eq!(decode_zstring(b"unterminated"), "unterminated");
/// ```
pub fn decode_zstring<'a>(span: impl Into<ByteSpan<'a>>) -> String {
    let bytes = span.into().as_bytes();
    let end = bytes.find_byte(0).unwrap_or(bytes.len());
    decode_code_page(&bytes[..end])
}

/// Decodes a length-prefixed string, or `None` when the prefix is zero or
/// claims more bytes than the span holds.
pub fn try_decode_bstring<'a>(span: impl Into<ByteSpan<'a>>) -> Option<String> {
    let bytes = span.into().as_bytes();
    let len = usize::from(try_read::<u16>(bytes)?);
    let body = &bytes[2..];
    if len == 0 || len > body.len() {
        trace!(
            "rejecting string prefix {len} with {} bytes available",
            body.len()
        );
        return None;
    }
    Some(decode_code_page(&body[..len]))
}

/// Decodes a length-prefixed string, falling back to `""`.
///
/// ```rust
/// use snipcodec::decode_bstring;
///
/// assert_eq!(decode_bstring(&[0x02, 0x00, b'O', b'K']), "OK");
/// // Claims five bytes, only two follow.
/// assert_eq!(decode_bstring(&[0x05, 0x00, b'A', b'B']), "");
/// ```
pub fn decode_bstring<'a>(span: impl Into<ByteSpan<'a>>) -> String {
    try_decode_bstring(span).unwrap_or_default()
}

/// Decodes the whole span, dropping a trailing `0` byte if present.
pub fn decode_plain_string<'a>(span: impl Into<ByteSpan<'a>>) -> String {
    let bytes = span.into().as_bytes();
    let bytes = bytes.strip_suffix(&[0]).unwrap_or(bytes);
    decode_code_page(bytes)
}

/// Decodes a text field framed as `encoding`.
pub fn decode_string<'a>(span: impl Into<ByteSpan<'a>>, encoding: StringEncoding) -> String {
    match encoding {
        StringEncoding::ZString => decode_zstring(span),
        StringEncoding::BString => decode_bstring(span),
        StringEncoding::Plain => decode_plain_string(span),
    }
}

/// Encodes `text` followed by a `0` terminator.
#[must_use]
pub fn encode_zstring(text: &str) -> Vec<u8> {
    encode_zstring_with(text, &EncodeOptions::default())
}

/// [`encode_zstring`] with explicit options.
#[must_use]
pub fn encode_zstring_with(text: &str, options: &EncodeOptions) -> Vec<u8> {
    let mut out = encode_code_page_with(text, options);
    out.push(0);
    out
}

/// Encodes `text` behind a two-byte little-endian length prefix.
///
/// The caller keeps the encoded text within 65535 bytes. Longer text is
/// still written in full, but its prefix only carries the low 16 bits of
/// the length, as the record format's own writer does; use
/// [`try_encode_bstring`] to reject it instead.
#[must_use]
pub fn encode_bstring(text: &str) -> Vec<u8> {
    encode_bstring_with(text, &EncodeOptions::default())
}

/// [`encode_bstring`] with explicit options.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn encode_bstring_with(text: &str, options: &EncodeOptions) -> Vec<u8> {
    let body = encode_code_page_with(text, options);
    if body.len() > usize::from(u16::MAX) {
        warn!(
            "string of {} bytes overflows its 16-bit length prefix",
            body.len()
        );
    }
    prefixed(body.len() as u16, &body)
}

/// Encodes `text` behind a two-byte length prefix, rejecting text that does
/// not fit.
///
/// # Errors
///
/// Returns [`CodecError::StringTooLong`] if the encoded text exceeds 65535
/// bytes.
pub fn try_encode_bstring(text: &str) -> Result<Vec<u8>> {
    try_encode_bstring_with(text, &EncodeOptions::default())
}

/// [`try_encode_bstring`] with explicit options.
///
/// # Errors
///
/// Returns [`CodecError::StringTooLong`] if the encoded text exceeds 65535
/// bytes.
pub fn try_encode_bstring_with(text: &str, options: &EncodeOptions) -> Result<Vec<u8>> {
    let body = encode_code_page_with(text, options);
    let len = u16::try_from(body.len()).map_err(|_| CodecError::StringTooLong { len: body.len() })?;
    Ok(prefixed(len, &body))
}

/// Encodes `text` framed as `encoding`. Plain text gets no terminator.
#[must_use]
pub fn encode_string(text: &str, encoding: StringEncoding) -> Vec<u8> {
    encode_string_with(text, encoding, &EncodeOptions::default())
}

/// [`encode_string`] with explicit options.
#[must_use]
pub fn encode_string_with(text: &str, encoding: StringEncoding, options: &EncodeOptions) -> Vec<u8> {
    match encoding {
        StringEncoding::ZString => encode_zstring_with(text, options),
        StringEncoding::BString => encode_bstring_with(text, options),
        StringEncoding::Plain => encode_code_page_with(text, options),
    }
}

fn prefixed(len: u16, body: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(2 + body.len());
    out.extend_from_slice(&encode_le(len));
    out.extend_from_slice(body);
    out
}
