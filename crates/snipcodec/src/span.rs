//! Non-owning views into caller-owned record bytes.

use crate::error::{CodecError, Result};

/// A borrowed window `buffer[offset..offset + len]`.
///
/// The window is validated on construction, so every accessor can slice
/// without further checks. A span never outlives the buffer it borrows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ByteSpan<'a> {
    buffer: &'a [u8],
    offset: usize,
    len: usize,
}

impl<'a> ByteSpan<'a> {
    /// Creates a span over `len` bytes of `buffer` starting at `offset`.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::SpanOutOfBounds`] when the window does not fit
    /// inside `buffer`.
    ///
    /// ```rust
    /// use snipcodec::{ByteSpan, CodecError};
    ///
    /// let data = [1u8, 2, 3, 4];
    /// assert_eq!(ByteSpan::new(&data, 1, 2).unwrap().as_bytes(), &[2, 3]);
    /// assert!(matches!(
    ///     ByteSpan::new(&data, 3, 2),
    ///     Err(CodecError::SpanOutOfBounds { .. })
    /// ));
    /// ```
    pub fn new(buffer: &'a [u8], offset: usize, len: usize) -> Result<Self> {
        match offset.checked_add(len) {
            Some(end) if end <= buffer.len() => Ok(Self {
                buffer,
                offset,
                len,
            }),
            _ => Err(CodecError::SpanOutOfBounds {
                offset,
                len,
                buffer_len: buffer.len(),
            }),
        }
    }

    /// Span covering all of `buffer`.
    #[must_use]
    pub fn whole(buffer: &'a [u8]) -> Self {
        Self {
            buffer,
            offset: 0,
            len: buffer.len(),
        }
    }

    /// The bytes inside the window.
    #[must_use]
    pub fn as_bytes(&self) -> &'a [u8] {
        &self.buffer[self.offset..self.offset + self.len]
    }

    /// The whole underlying buffer.
    #[must_use]
    pub fn buffer(&self) -> &'a [u8] {
        self.buffer
    }

    /// Start of the window within [`Self::buffer`].
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Number of bytes in the window.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the window holds no bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// First byte of the window.
    #[must_use]
    pub fn first(&self) -> Option<u8> {
        self.as_bytes().first().copied()
    }

    /// Last byte of the window.
    #[must_use]
    pub fn last(&self) -> Option<u8> {
        self.as_bytes().last().copied()
    }

    /// Narrower window relative to this one, or `None` if it would escape.
    #[must_use]
    pub fn subspan(&self, start: usize, len: usize) -> Option<Self> {
        let end = start.checked_add(len)?;
        (end <= self.len).then(|| Self {
            buffer: self.buffer,
            offset: self.offset + start,
            len,
        })
    }

    /// Window with the first `n` bytes dropped; empty if `n` exceeds the length.
    #[must_use]
    pub fn skip(&self, n: usize) -> Self {
        let n = n.min(self.len);
        Self {
            buffer: self.buffer,
            offset: self.offset + n,
            len: self.len - n,
        }
    }
}

impl<'a> From<&'a [u8]> for ByteSpan<'a> {
    fn from(buffer: &'a [u8]) -> Self {
        Self::whole(buffer)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for ByteSpan<'a> {
    fn from(buffer: &'a [u8; N]) -> Self {
        Self::whole(buffer)
    }
}

impl<'a> From<&'a alloc::vec::Vec<u8>> for ByteSpan<'a> {
    fn from(buffer: &'a alloc::vec::Vec<u8>) -> Self {
        Self::whole(buffer)
    }
}

impl AsRef<[u8]> for ByteSpan<'_> {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}
