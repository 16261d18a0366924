//! Hex rendering of raw field bytes for inspection views.

use alloc::string::{String, ToString};
use core::fmt;

use crate::span::ByteSpan;

/// Formats bytes as uppercase hex pairs, each followed by one space.
///
/// Formatting through this adapter writes straight into the destination
/// without building an intermediate string.
///
/// ```rust
/// use snipcodec::HexDump;
///
/// assert_eq!(format!("[{}]", HexDump::new(&[0xDE, 0xAD])), "[DE AD ]");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct HexDump<'a> {
    bytes: &'a [u8],
}

impl<'a> HexDump<'a> {
    /// Wraps `bytes` for formatting.
    #[must_use]
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    /// Wraps up to `count` bytes of `buffer` starting at `offset`, clipped to
    /// the end of the buffer.
    #[must_use]
    pub fn window(buffer: &'a [u8], offset: usize, count: usize) -> Self {
        let tail = buffer.get(offset..).unwrap_or_default();
        Self::new(&tail[..count.min(tail.len())])
    }
}

impl fmt::Display for HexDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.bytes {
            write!(f, "{byte:02X} ")?;
        }
        Ok(())
    }
}

/// Renders up to `count` bytes of `buffer` from `offset` as hex pairs.
///
/// Never reads past the end of `buffer`: the dump stops there, and an
/// `offset` at or beyond the end yields an empty string.
///
/// ```rust
/// use snipcodec::hex_dump;
///
/// assert_eq!(hex_dump(&[0x0A, 0xFF, 0x00], 0, 3), "0A FF 00 ");
/// assert_eq!(hex_dump(&[0x0A, 0xFF, 0x00], 2, 10), "00 ");
/// ```
#[must_use]
pub fn hex_dump(buffer: &[u8], offset: usize, count: usize) -> String {
    HexDump::window(buffer, offset, count).to_string()
}

/// Renders every byte of `span` as hex pairs.
pub fn hex_dump_span<'a>(span: impl Into<ByteSpan<'a>>) -> String {
    HexDump::new(span.into().as_bytes()).to_string()
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use quickcheck_macros::quickcheck;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(&[], 0, 4, "")]
    #[case(&[0x01, 0x02], 0, 0, "")]
    #[case(&[0x01, 0x02], 2, 1, "")]
    #[case(&[0x01, 0x02], 7, 1, "")]
    #[case(&[0x01, 0x02], 1, usize::MAX, "02 ")]
    #[case(&[0xAB, 0xCD, 0xEF], 0, 2, "AB CD ")]
    fn clips_to_buffer(
        #[case] buffer: &[u8],
        #[case] offset: usize,
        #[case] count: usize,
        #[case] expected: &str,
    ) {
        assert_eq!(hex_dump(buffer, offset, count), expected);
    }

    #[test]
    fn span_dump_covers_window() {
        let record = [0x00, 0x11, 0x22, 0x33];
        let span = ByteSpan::new(&record, 1, 2).unwrap();
        assert_eq!(hex_dump_span(span), "11 22 ");
    }

    #[quickcheck]
    #[allow(clippy::needless_pass_by_value)]
    fn window_matches_display(buffer: Vec<u8>, offset: usize, count: usize) -> bool {
        let window = HexDump::window(&buffer, offset, count);
        hex_dump(&buffer, offset, count) == window.to_string()
            && window.bytes.len() <= count
            && window.bytes.len() <= buffer.len()
    }
}
