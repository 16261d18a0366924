//! Benchmark – field decoding and hex rendering
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use snipcodec::{
    ByteSpan, NumericKind, decode, decode_zstring, encode_zstring, hex_dump, is_likely_text,
};

/// Deterministic record body of `len` bytes mixing text and numbers.
fn make_record(len: usize) -> Vec<u8> {
    let mut body = Vec::with_capacity(len + 32);
    let mut i = 0u32;
    while body.len() < len {
        body.extend_from_slice(&encode_zstring("DwarvenOre"));
        body.extend_from_slice(&i.to_le_bytes());
        i = i.wrapping_add(1);
    }
    body.truncate(len);
    body
}

fn bench_numeric(c: &mut Criterion) {
    let record = make_record(4096);
    let mut group = c.benchmark_group("numeric_decode");
    for kind in NumericKind::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(kind), &kind, |b, &kind| {
            b.iter(|| {
                let mut acc = 0usize;
                for offset in (0..record.len() - 4).step_by(4) {
                    let span = ByteSpan::new(&record, offset, kind.width()).unwrap();
                    acc ^= decode(black_box(span), kind).to_le_bytes()[0] as usize;
                }
                acc
            });
        });
    }
    group.finish();
}

fn bench_text(c: &mut Criterion) {
    let record = make_record(4096);
    let mut group = c.benchmark_group("text");
    group.bench_function("decode_zstring", |b| {
        b.iter(|| decode_zstring(black_box(record.as_slice())));
    });
    group.bench_function("is_likely_text", |b| {
        b.iter(|| is_likely_text(black_box(&record[..11])));
    });
    for len in [16usize, 256, 4096] {
        group.bench_with_input(BenchmarkId::new("hex_dump", len), &len, |b, &len| {
            b.iter(|| hex_dump(black_box(&record), 0, len));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_numeric, bench_text);
criterion_main!(benches);
