#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use snipcodec::{
    ByteSpan, EncodeOptions, NumericKind, NumericValue, StringEncoding, decode, decode_code_page,
    decode_string, encode_into, encode_string_with, hex_dump, is_likely_text, try_decode,
};

#[derive(Debug, Arbitrary)]
struct Input {
    buffer: Vec<u8>,
    offset: usize,
    len: usize,
    write_at: usize,
    text: String,
    replacement: u8,
}

const ENCODINGS: [StringEncoding; 3] = [
    StringEncoding::ZString,
    StringEncoding::BString,
    StringEncoding::Plain,
];

fuzz_target!(|input: Input| {
    let Input {
        mut buffer,
        offset,
        len,
        write_at,
        text,
        replacement,
    } = input;

    // Decoders must accept every window the buffer allows.
    if let Ok(span) = ByteSpan::new(&buffer, offset, len) {
        for kind in NumericKind::ALL {
            let value = decode(span, kind);
            match try_decode(span, kind) {
                Some(v) => assert_eq!(v, value),
                None => {
                    assert!(span.len() < kind.width());
                    assert_eq!(value, kind.zero());
                }
            }
        }
        for encoding in ENCODINGS {
            let _ = decode_string(span, encoding);
        }
        let _ = is_likely_text(span);
        assert_eq!(decode_code_page(span.as_bytes()).chars().count(), span.len());
    }

    let dump = hex_dump(&buffer, offset, len);
    assert_eq!(dump.len() % 3, 0);

    // In-place writes either land entirely inside the buffer or not at all.
    let before = buffer.clone();
    let value = NumericValue::U32(0xDEAD_BEEF);
    match encode_into(value, &mut buffer, write_at) {
        Ok(()) => assert_eq!(&buffer[write_at..write_at + 4], &[0xEF, 0xBE, 0xAD, 0xDE]),
        Err(_) => assert_eq!(buffer, before),
    }

    // Encoders never fail, and the replacement byte stands in for
    // unrepresentable characters.
    let options = EncodeOptions { replacement };
    for encoding in ENCODINGS {
        let bytes = encode_string_with(&text, encoding, &options);
        if replacement != 0 && !text.contains('\0') && encoding == StringEncoding::ZString {
            assert_eq!(bytes.iter().filter(|&&b| b == 0).count(), 1);
        }
    }
});
