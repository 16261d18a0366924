use alloc::{string::String, vec::Vec};

use quickcheck::{Arbitrary, Gen};

use crate::{NumericKind, NumericValue, StringEncoding, decode_code_page};

impl Arbitrary for NumericKind {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&NumericKind::ALL).unwrap()
    }
}

impl Arbitrary for NumericValue {
    fn arbitrary(g: &mut Gen) -> Self {
        match NumericKind::arbitrary(g) {
            NumericKind::U32 => NumericValue::U32(u32::arbitrary(g)),
            NumericKind::I32 => NumericValue::I32(i32::arbitrary(g)),
            NumericKind::U16 => NumericValue::U16(u16::arbitrary(g)),
            NumericKind::I16 => NumericValue::I16(i16::arbitrary(g)),
            // Raw bits so NaN payloads and signed zeros show up.
            NumericKind::F32 => NumericValue::F32(f32::from_bits(u32::arbitrary(g))),
            NumericKind::U8 => NumericValue::U8(u8::arbitrary(g)),
            NumericKind::I8 => NumericValue::I8(i8::arbitrary(g)),
        }
    }
}

impl Arbitrary for StringEncoding {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&[
            StringEncoding::ZString,
            StringEncoding::BString,
            StringEncoding::Plain,
        ])
        .unwrap()
    }
}

/// Text made only of characters Windows-1252 can represent, without NUL.
#[derive(Debug, Clone)]
pub(crate) struct CodePageText(pub String);

impl Arbitrary for CodePageText {
    fn arbitrary(g: &mut Gen) -> Self {
        let bytes: Vec<u8> = Vec::<u8>::arbitrary(g)
            .into_iter()
            .filter(|&b| b != 0)
            .collect();
        Self(decode_code_page(&bytes))
    }
}
