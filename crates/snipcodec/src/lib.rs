//! Byte-level field codec for the binary record files of game-data editors.
//!
//! Record layers slice raw field bytes out of a record and hand them to this
//! crate to obtain typed values, or ask it for the bytes of a value they want
//! to write back. Four pieces are provided:
//!
//! - a numeric codec for fixed-width little-endian integers and floats,
//! - a string codec for null-terminated, length-prefixed and plain strings
//!   over the Windows-1252 code page,
//! - a cheap "does this look like text" heuristic for display hints,
//! - a hex-dump formatter.
//!
//! Every decoder is total: short or malformed input produces a zero or empty
//! value (or `None` from the `try_*` variants), never a panic.
//!
//! ```rust
//! use snipcodec::{ByteSpan, NumericKind, NumericValue, decode, decode_zstring, hex_dump};
//!
//! let record = [0x2A, 0x00, 0x00, 0x00, b'I', b'r', b'o', b'n', 0x00];
//! let span = ByteSpan::new(&record, 0, 4).unwrap();
//! assert_eq!(decode(span, NumericKind::U32), NumericValue::U32(42));
//! assert_eq!(decode_zstring(&record[4..]), "Iron");
//! assert_eq!(hex_dump(&record, 0, 4), "2A 00 00 00 ");
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod code_page;
mod error;
mod heuristic;
mod hex;
mod numeric;
mod options;
mod span;
mod strings;

#[cfg(test)]
mod tests;

pub use code_page::{decode_code_page, encode_code_page, encode_code_page_with};
pub use error::{CodecError, Result};
pub use heuristic::is_likely_text;
pub use hex::{HexDump, hex_dump, hex_dump_span};
pub use numeric::{
    EncodedNumber, Numeric, NumericKind, NumericValue, decode, encode, encode_into, encode_le,
    f32_from_bytes, i16_from_bytes, i32_from_bytes, read, try_decode, try_read, u16_from_bytes,
    u32_from_bytes,
};
pub use options::EncodeOptions;
pub use span::ByteSpan;
pub use strings::{
    StringEncoding, decode_bstring, decode_plain_string, decode_string, decode_zstring,
    encode_bstring, encode_bstring_with, encode_string, encode_string_with, encode_zstring,
    encode_zstring_with, try_decode_bstring, try_encode_bstring, try_encode_bstring_with,
};
