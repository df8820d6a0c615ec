use ansimark::{compile, fill, FormatCache};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

const FORMATS: [&str; 3] = [
    "plain text without any markup",
    "#[Bold, 123]Text #$",
    "#[Bold, Underline, Red, 1:1:255, 220]Text #$ and ##hashes## #[Default]done",
];

pub fn run_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("format-string");

    group.bench_function("compile", |b| {
        b.iter(|| {
            for format in FORMATS {
                black_box(compile(black_box(format)).expect("valid format string"));
            }
        })
    });

    let cache = FormatCache::new();
    group.bench_function("cached", |b| {
        b.iter(|| {
            for format in FORMATS {
                black_box(cache.get(black_box(format)).expect("valid format string"));
            }
        })
    });

    let compiled = compile(FORMATS[2]).expect("valid format string");
    group.bench_function("fill", |b| b.iter(|| fill(black_box(&compiled), &[&42])));

    group.finish();
}

criterion_group!(benches, run_benchmarks);
criterion_main!(benches);
