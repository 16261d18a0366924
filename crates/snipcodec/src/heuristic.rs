use crate::{code_page::decode_code_page, span::ByteSpan};

/// Guesses whether `span` holds a null-terminated string.
///
/// True when the last byte is `0` and no byte before it decodes to a control
/// character. Cheap and approximate: suitable for choosing how to display an
/// unknown field, not for deciding how to parse one.
///
/// ```rust
/// use snipcodec::is_likely_text;
///
/// assert!(is_likely_text(b"AB\0"));
/// assert!(!is_likely_text(&[0x41, 0x01, 0x00]));
/// assert!(!is_likely_text(b"AB"));
/// ```
pub fn is_likely_text<'a>(span: impl Into<ByteSpan<'a>>) -> bool {
    let Some((&last, prefix)) = span.into().as_bytes().split_last() else {
        return false;
    };
    !decode_code_page(prefix).chars().any(char::is_control) && last == 0
}
