/// Configuration for the text encoders.
///
/// Decoding needs no configuration: every byte maps to exactly one character
/// of the code page. Encoding can meet characters the code page cannot
/// represent, and these options say what to emit for them.
///
/// # Examples
///
/// ```rust
/// use snipcodec::{EncodeOptions, encode_zstring_with};
///
/// let options = EncodeOptions { replacement: b'_' };
/// assert_eq!(encode_zstring_with("a\u{4E2D}b", &options), b"a_b\0");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Byte written in place of each character that Windows-1252 cannot
    /// represent.
    ///
    /// Choosing `0` is allowed but makes the result unsafe to read back as a
    /// null-terminated string, since the replacement ends the text early.
    ///
    /// # Default
    ///
    /// `b'?'`
    pub replacement: u8,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self { replacement: b'?' }
    }
}
