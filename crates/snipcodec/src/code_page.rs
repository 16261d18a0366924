//! Windows-1252 text conversion.
//!
//! Decoding is total: every byte value maps to one character, the five bytes
//! Windows-1252 leaves undefined map to the C1 control with the same value.
//! Encoding is lossy: characters outside the code page become the configured
//! replacement byte.

use alloc::{string::String, vec, vec::Vec};

use encoding_rs::{EncoderResult, WINDOWS_1252};
use log::{trace, warn};

use crate::options::EncodeOptions;

/// Decodes `bytes` as Windows-1252. One character per byte.
///
/// ```rust
/// use snipcodec::decode_code_page;
///
/// assert_eq!(decode_code_page(b"caf\xE9 \x80"), "café €");
/// ```
#[must_use]
pub fn decode_code_page(bytes: &[u8]) -> String {
    let (text, _) = WINDOWS_1252.decode_without_bom_handling(bytes);
    text.into_owned()
}

/// Encodes `text` as Windows-1252, replacing unrepresentable characters
/// with `?`.
#[must_use]
pub fn encode_code_page(text: &str) -> Vec<u8> {
    encode_code_page_with(text, &EncodeOptions::default())
}

/// Encodes `text` as Windows-1252 with explicit options.
#[must_use]
pub fn encode_code_page_with(text: &str, options: &EncodeOptions) -> Vec<u8> {
    let mut encoder = WINDOWS_1252.new_encoder();
    let capacity = encoder
        .max_buffer_length_from_utf8_without_replacement(text.len())
        .unwrap_or(text.len());
    let mut out = vec![0u8; capacity];
    let mut read_total = 0;
    let mut written_total = 0;
    let mut replaced = 0usize;

    loop {
        let (result, read, written) = encoder.encode_from_utf8_without_replacement(
            &text[read_total..],
            &mut out[written_total..],
            true,
        );
        read_total += read;
        written_total += written;
        match result {
            EncoderResult::InputEmpty => break,
            EncoderResult::Unmappable(c) => {
                trace!("U+{:04X} is not in Windows-1252", u32::from(c));
                if written_total == out.len() {
                    out.push(0);
                }
                out[written_total] = options.replacement;
                written_total += 1;
                replaced += 1;
            }
            EncoderResult::OutputFull => out.resize(out.len() * 2 + 1, 0),
        }
    }

    if replaced > 0 {
        warn!("replaced {replaced} characters not representable in Windows-1252");
    }
    out.truncate(written_total);
    out
}
