//! Fixed-width numeric fields.
//!
//! All multi-byte values are little-endian: byte 0 is the least significant
//! byte. Values are composed from and split into bytes with shifts and
//! masks, so the result never depends on the host's byte order and no state
//! is shared between calls.

use core::{fmt, ops::Deref, str::FromStr};

use alloc::string::ToString;
use log::trace;

use crate::{
    error::{CodecError, Result},
    span::ByteSpan,
};

/// The closed set of numeric field types a record can carry.
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericKind {
    /// Unsigned 32-bit integer.
    U32,
    /// Signed 32-bit integer.
    I32,
    /// Unsigned 16-bit integer.
    U16,
    /// Signed 16-bit integer.
    I16,
    /// IEEE-754 single precision float.
    F32,
    /// Unsigned byte.
    U8,
    /// Signed byte.
    I8,
}

impl NumericKind {
    /// Every kind, widest first.
    pub const ALL: [NumericKind; 7] = [
        Self::U32,
        Self::I32,
        Self::F32,
        Self::U16,
        Self::I16,
        Self::U8,
        Self::I8,
    ];

    /// Encoded size in bytes.
    #[must_use]
    pub const fn width(self) -> usize {
        match self {
            Self::U32 | Self::I32 | Self::F32 => 4,
            Self::U16 | Self::I16 => 2,
            Self::U8 | Self::I8 => 1,
        }
    }

    /// Short lowercase name, as accepted by [`FromStr`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::U32 => "u32",
            Self::I32 => "i32",
            Self::U16 => "u16",
            Self::I16 => "i16",
            Self::F32 => "f32",
            Self::U8 => "u8",
            Self::I8 => "i8",
        }
    }

    /// The value a truncated field of this kind decodes to.
    #[must_use]
    pub const fn zero(self) -> NumericValue {
        match self {
            Self::U32 => NumericValue::U32(0),
            Self::I32 => NumericValue::I32(0),
            Self::U16 => NumericValue::U16(0),
            Self::I16 => NumericValue::I16(0),
            Self::F32 => NumericValue::F32(0.0),
            Self::U8 => NumericValue::U8(0),
            Self::I8 => NumericValue::I8(0),
        }
    }
}

impl fmt::Display for NumericKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NumericKind {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| CodecError::UnknownKind(s.to_string()))
    }
}

/// A decoded numeric field, tagged with its kind.
///
/// Equality on [`NumericValue::F32`] compares bit patterns, so `NaN` equals a
/// `NaN` with the same payload and `0.0` differs from `-0.0`. That is the
/// equality a byte codec needs: two values are equal iff they encode to the
/// same bytes.
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy)]
pub enum NumericValue {
    /// Unsigned 32-bit integer.
    U32(u32),
    /// Signed 32-bit integer.
    I32(i32),
    /// Unsigned 16-bit integer.
    U16(u16),
    /// Signed 16-bit integer.
    I16(i16),
    /// IEEE-754 single precision float.
    F32(f32),
    /// Unsigned byte.
    U8(u8),
    /// Signed byte.
    I8(i8),
}

impl NumericValue {
    /// Kind tag of this value.
    #[must_use]
    pub const fn kind(&self) -> NumericKind {
        match self {
            Self::U32(_) => NumericKind::U32,
            Self::I32(_) => NumericKind::I32,
            Self::U16(_) => NumericKind::U16,
            Self::I16(_) => NumericKind::I16,
            Self::F32(_) => NumericKind::F32,
            Self::U8(_) => NumericKind::U8,
            Self::I8(_) => NumericKind::I8,
        }
    }

    /// Little-endian encoding, `self.kind().width()` bytes long.
    #[must_use]
    pub fn to_le_bytes(&self) -> EncodedNumber {
        match *self {
            Self::U32(v) => v.le_bytes(),
            Self::I32(v) => v.le_bytes(),
            Self::U16(v) => v.le_bytes(),
            Self::I16(v) => v.le_bytes(),
            Self::F32(v) => v.le_bytes(),
            Self::U8(v) => v.le_bytes(),
            Self::I8(v) => v.le_bytes(),
        }
    }
}

impl PartialEq for NumericValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::U32(a), Self::U32(b)) => a == b,
            (Self::I32(a), Self::I32(b)) => a == b,
            (Self::U16(a), Self::U16(b)) => a == b,
            (Self::I16(a), Self::I16(b)) => a == b,
            (Self::F32(a), Self::F32(b)) => a.to_bits() == b.to_bits(),
            (Self::U8(a), Self::U8(b)) => a == b,
            (Self::I8(a), Self::I8(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for NumericValue {}

impl fmt::Display for NumericValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::U32(v) => fmt::Display::fmt(v, f),
            Self::I32(v) => fmt::Display::fmt(v, f),
            Self::U16(v) => fmt::Display::fmt(v, f),
            Self::I16(v) => fmt::Display::fmt(v, f),
            Self::F32(v) => fmt::Display::fmt(v, f),
            Self::U8(v) => fmt::Display::fmt(v, f),
            Self::I8(v) => fmt::Display::fmt(v, f),
        }
    }
}

/// Up to four encoded bytes, stored inline.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct EncodedNumber {
    bytes: [u8; 4],
    len: u8,
}

impl EncodedNumber {
    #[allow(clippy::cast_possible_truncation)]
    fn from_array<const N: usize>(array: [u8; N]) -> Self {
        debug_assert!(N <= 4);
        let mut bytes = [0u8; 4];
        bytes[..N].copy_from_slice(&array);
        Self {
            bytes,
            len: N as u8,
        }
    }

    /// The encoded bytes.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes[..usize::from(self.len)]
    }
}

impl Deref for EncodedNumber {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl AsRef<[u8]> for EncodedNumber {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl fmt::Debug for EncodedNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

mod private {
    pub trait Sealed {}
}

/// Rust primitives that map one-to-one onto a [`NumericKind`].
///
/// This is the statically dispatched counterpart of [`NumericValue`]: record
/// layers that know a field's type at compile time call [`read`] or
/// [`encode_le`] with the primitive directly.
pub trait Numeric: Copy + Default + private::Sealed {
    /// Kind tag for this primitive.
    const KIND: NumericKind;
    /// Encoded size in bytes.
    const WIDTH: usize;

    /// Decodes from the first [`Self::WIDTH`] bytes, or `None` if `bytes`
    /// is shorter.
    fn from_le_slice(bytes: &[u8]) -> Option<Self>;

    /// Little-endian encoding.
    fn le_bytes(self) -> EncodedNumber;

    /// Wraps the primitive in its [`NumericValue`] variant.
    fn into_value(self) -> NumericValue;
}

const fn compose_u16(b0: u8, b1: u8) -> u16 {
    (b0 as u16) | ((b1 as u16) << 8)
}

const fn compose_u32(b0: u8, b1: u8, b2: u8, b3: u8) -> u32 {
    (b0 as u32) | ((b1 as u32) << 8) | ((b2 as u32) << 16) | ((b3 as u32) << 24)
}

#[allow(clippy::cast_possible_truncation)]
const fn split_u16(v: u16) -> [u8; 2] {
    [(v & 0xFF) as u8, (v >> 8) as u8]
}

#[allow(clippy::cast_possible_truncation)]
const fn split_u32(v: u32) -> [u8; 4] {
    [
        (v & 0xFF) as u8,
        ((v >> 8) & 0xFF) as u8,
        ((v >> 16) & 0xFF) as u8,
        (v >> 24) as u8,
    ]
}

macro_rules! impl_numeric {
    ($ty:ty, $kind:ident, $width:literal, |$b:ident| $decode:expr, |$v:ident| $encode:expr $(,)?) => {
        impl private::Sealed for $ty {}

        impl Numeric for $ty {
            const KIND: NumericKind = NumericKind::$kind;
            const WIDTH: usize = $width;

            #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
            fn from_le_slice(bytes: &[u8]) -> Option<Self> {
                let $b: [u8; $width] = bytes.get(..$width)?.try_into().ok()?;
                Some($decode)
            }

            #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
            fn le_bytes(self) -> EncodedNumber {
                let $v = self;
                EncodedNumber::from_array($encode)
            }

            fn into_value(self) -> NumericValue {
                NumericValue::$kind(self)
            }
        }

        impl From<$ty> for NumericValue {
            fn from(v: $ty) -> Self {
                NumericValue::$kind(v)
            }
        }
    };
}

impl_numeric!(u32, U32, 4, |b| compose_u32(b[0], b[1], b[2], b[3]), |v| split_u32(v));
impl_numeric!(i32, I32, 4, |b| compose_u32(b[0], b[1], b[2], b[3]) as i32, |v| split_u32(v as u32));
impl_numeric!(u16, U16, 2, |b| compose_u16(b[0], b[1]), |v| split_u16(v));
impl_numeric!(i16, I16, 2, |b| compose_u16(b[0], b[1]) as i16, |v| split_u16(v as u16));
impl_numeric!(
    f32,
    F32,
    4,
    |b| f32::from_bits(compose_u32(b[0], b[1], b[2], b[3])),
    |v| split_u32(v.to_bits()),
);
impl_numeric!(u8, U8, 1, |b| b[0], |v| [v]);
impl_numeric!(i8, I8, 1, |b| b[0] as i8, |v| [v as u8]);

/// Decodes a `T` from the start of `span`, or `None` if it is too short.
pub fn try_read<'a, T: Numeric>(span: impl Into<ByteSpan<'a>>) -> Option<T> {
    T::from_le_slice(span.into().as_bytes())
}

/// Decodes a `T` from the start of `span`, or zero if it is too short.
///
/// A zero produced this way means "field unavailable", not a stored zero;
/// use [`try_read`] when the difference matters.
pub fn read<'a, T: Numeric>(span: impl Into<ByteSpan<'a>>) -> T {
    let span = span.into();
    try_read(span).unwrap_or_else(|| {
        trace!(
            "{} field truncated: {} of {} bytes",
            T::KIND,
            span.len(),
            T::WIDTH
        );
        T::default()
    })
}

/// Decodes a value of `kind` from the start of `span`.
///
/// Returns `None` when the span holds fewer than `kind.width()` bytes. Bytes
/// past the width are ignored.
pub fn try_decode<'a>(span: impl Into<ByteSpan<'a>>, kind: NumericKind) -> Option<NumericValue> {
    fn value<T: Numeric>(bytes: &[u8]) -> Option<NumericValue> {
        T::from_le_slice(bytes).map(Numeric::into_value)
    }

    let bytes = span.into().as_bytes();
    match kind {
        NumericKind::U32 => value::<u32>(bytes),
        NumericKind::I32 => value::<i32>(bytes),
        NumericKind::U16 => value::<u16>(bytes),
        NumericKind::I16 => value::<i16>(bytes),
        NumericKind::F32 => value::<f32>(bytes),
        NumericKind::U8 => value::<u8>(bytes),
        NumericKind::I8 => value::<i8>(bytes),
    }
}

/// Decodes a value of `kind`, falling back to `kind.zero()` on short input.
///
/// ```rust
/// use snipcodec::{NumericKind, NumericValue, decode};
///
/// assert_eq!(decode(&[0xFE, 0xFF], NumericKind::I16), NumericValue::I16(-2));
/// assert_eq!(decode(&[0xFE], NumericKind::I16), NumericValue::I16(0));
/// ```
pub fn decode<'a>(span: impl Into<ByteSpan<'a>>, kind: NumericKind) -> NumericValue {
    let span = span.into();
    try_decode(span, kind).unwrap_or_else(|| {
        trace!(
            "{kind} field truncated: {} of {} bytes",
            span.len(),
            kind.width()
        );
        kind.zero()
    })
}

/// Little-endian bytes of `value`.
pub fn encode(value: impl Into<NumericValue>) -> EncodedNumber {
    value.into().to_le_bytes()
}

/// Little-endian bytes of a primitive.
pub fn encode_le<T: Numeric>(value: T) -> EncodedNumber {
    value.le_bytes()
}

/// Writes the little-endian bytes of `value` into `dest` at `offset`.
///
/// # Errors
///
/// Returns [`CodecError::OutOfBounds`] if the value does not fit between
/// `offset` and the end of `dest`. `dest` is left untouched in that case.
///
/// ```rust
/// use snipcodec::{CodecError, encode_into};
///
/// let mut record = [0u8; 6];
/// encode_into(0x0102_0304u32, &mut record, 2).unwrap();
/// assert_eq!(record, [0, 0, 4, 3, 2, 1]);
/// assert_eq!(
///     encode_into(1u32, &mut record, 4),
///     Err(CodecError::OutOfBounds { offset: 4, need: 4, have: 2 })
/// );
/// ```
pub fn encode_into(value: impl Into<NumericValue>, dest: &mut [u8], offset: usize) -> Result<()> {
    let bytes = value.into().to_le_bytes();
    let need = bytes.len();
    let have = dest.len().saturating_sub(offset);
    let target = offset
        .checked_add(need)
        .and_then(|end| dest.get_mut(offset..end))
        .ok_or(CodecError::OutOfBounds { offset, need, have })?;
    target.copy_from_slice(&bytes);
    Ok(())
}

/// Assembles a float from its four little-endian bytes.
#[must_use]
pub const fn f32_from_bytes(b0: u8, b1: u8, b2: u8, b3: u8) -> f32 {
    f32::from_bits(compose_u32(b0, b1, b2, b3))
}

/// Assembles an unsigned 32-bit integer from its four little-endian bytes.
#[must_use]
pub const fn u32_from_bytes(b0: u8, b1: u8, b2: u8, b3: u8) -> u32 {
    compose_u32(b0, b1, b2, b3)
}

/// Assembles a signed 32-bit integer from its four little-endian bytes.
#[must_use]
#[allow(clippy::cast_possible_wrap)]
pub const fn i32_from_bytes(b0: u8, b1: u8, b2: u8, b3: u8) -> i32 {
    compose_u32(b0, b1, b2, b3) as i32
}

/// Assembles an unsigned 16-bit integer from its two little-endian bytes.
#[must_use]
pub const fn u16_from_bytes(b0: u8, b1: u8) -> u16 {
    compose_u16(b0, b1)
}

/// Assembles a signed 16-bit integer from its two little-endian bytes.
#[must_use]
#[allow(clippy::cast_possible_wrap)]
pub const fn i16_from_bytes(b0: u8, b1: u8) -> i16 {
    compose_u16(b0, b1) as i16
}
