use alloc::string::String;

use thiserror::Error;

/// Errors reported by the checked parts of the codec.
///
/// Decoders never return these: they fall back to zero or empty values. Only
/// operations that would otherwise write out of bounds, or that were asked
/// to validate their input, report an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// An in-place write would run past the end of the destination buffer.
    #[error("write out of bounds at offset {offset} (need {need} bytes, have {have})")]
    OutOfBounds {
        /// Offset of the attempted write.
        offset: usize,
        /// Bytes the value needs.
        need: usize,
        /// Bytes available from `offset` to the end of the buffer.
        have: usize,
    },

    /// A span window does not fit inside its buffer.
    #[error("span {offset}+{len} exceeds buffer of {buffer_len} bytes")]
    SpanOutOfBounds {
        /// Requested start of the span.
        offset: usize,
        /// Requested length of the span.
        len: usize,
        /// Length of the underlying buffer.
        buffer_len: usize,
    },

    /// Encoded text does not fit a 16-bit length prefix.
    #[error("string of {len} bytes does not fit a 16-bit length prefix")]
    StringTooLong {
        /// Encoded byte length of the text.
        len: usize,
    },

    /// A numeric kind name was not recognized.
    #[error("unknown numeric kind '{0}'")]
    UnknownKind(String),
}

/// Result alias used across the crate.
pub type Result<T, E = CodecError> = core::result::Result<T, E>;
