#![allow(clippy::expect_used, clippy::unwrap_used, missing_docs)]
//! Benchmark for scalar and array color conversions.

use std::hint::black_box;

use chromaset::convert::{hsv_to_rgb, hsv_to_rgb_into, rgb8_to_hsv, rgb_to_hsv_array};
use chromaset::prelude::*;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

fn scalar_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalar");

    group.bench_function("rgb_to_hsv", |b| b.iter(|| rgb8_to_hsv(black_box([51, 102, 204]))));
    group.bench_function("hsv_to_rgb", |b| b.iter(|| hsv_to_rgb(black_box([220.0, 0.75, 0.8]))));
    group.bench_function("from_hex", |b| b.iter(|| Color::from_hex(black_box("#3366CC")).unwrap()));
    group.bench_function("to_lab", |b| {
        let color = Color::from_rgb(51, 102, 204);
        b.iter(|| black_box(color).to_lab(WhiteRef::D65));
    });

    group.finish();
}

fn array_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("array");

    for size in [1_000, 100_000, 1_000_000] {
        // Deterministic pixel spread over the cube
        let pixels: Vec<[u8; 3]> =
            (0..size).map(|i: usize| [(i % 256) as u8, ((i / 256) % 256) as u8, ((i * 7) % 256) as u8]).collect();
        let hsv = rgb_to_hsv_array(&pixels);
        let mut out = vec![[0u8; 3]; size];

        group.bench_with_input(BenchmarkId::new("rgb_to_hsv", size), &size, |b, _| {
            b.iter(|| rgb_to_hsv_array(black_box(&pixels)));
        });
        group.bench_with_input(BenchmarkId::new("hsv_to_rgb_into", size), &size, |b, _| {
            b.iter(|| hsv_to_rgb_into(black_box(&hsv), &mut out).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, scalar_benchmark, array_benchmark);
criterion_main!(benches);
