//! Benchmarks for value parsing.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use sift_core::{FormatStyle, ValueParser};

fn bench_integers(c: &mut Criterion) {
    let tokens: Vec<String> = (0..256).map(|i| format!("{}", i * 7919)).collect();
    let bytes: usize = tokens.iter().map(String::len).sum();
    let parser = ValueParser::new();

    let mut group = c.benchmark_group("values");
    group.throughput(Throughput::Bytes(bytes as u64));

    group.bench_function("decimal_i64", |b| {
        b.iter(|| {
            let mut sum = 0i64;
            for token in &tokens {
                sum = sum.wrapping_add(parser.parse_i64(black_box(token), 10).unwrap());
            }
            sum
        })
    });

    group.finish();
}

fn bench_hex_prefixed(c: &mut Criterion) {
    let tokens: Vec<String> = (0..256).map(|i| format!("0x{:X}", i * 7919)).collect();
    let bytes: usize = tokens.iter().map(String::len).sum();
    let parser = ValueParser::new();

    let mut group = c.benchmark_group("values");
    group.throughput(Throughput::Bytes(bytes as u64));

    group.bench_function("hex_prefixed_i64", |b| {
        b.iter(|| {
            let mut sum = 0i64;
            for token in &tokens {
                sum = sum.wrapping_add(parser.parse_i64(black_box(token), 10).unwrap());
            }
            sum
        })
    });

    group.finish();
}

fn bench_floats(c: &mut Criterion) {
    let tokens: Vec<String> = (0..256).map(|i| format!("{}.{:03}e{}", i, i % 997, i % 20)).collect();
    let bytes: usize = tokens.iter().map(String::len).sum();
    let parser = ValueParser::with_style(FormatStyle::En);

    let mut group = c.benchmark_group("values");
    group.throughput(Throughput::Bytes(bytes as u64));

    group.bench_function("scientific_f64", |b| {
        b.iter(|| {
            let mut sum = 0f64;
            for token in &tokens {
                sum += parser.parse_f64(black_box(token), 10).unwrap();
            }
            sum
        })
    });

    group.finish();
}

criterion_group!(benches, bench_integers, bench_hex_prefixed, bench_floats);
criterion_main!(benches);
