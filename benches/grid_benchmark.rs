#![allow(clippy::expect_used, clippy::unwrap_used, missing_docs)]
//! Benchmark for harmony edits and palette grid generation.

use std::hint::black_box;

use chromaset::prelude::*;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

fn modify_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("modify");
    let edit = Color::from_hex("2080E0").unwrap();

    for rule in HarmonyRule::ALL {
        let config = ColorSetConfig::new().with_seed(1).with_rule(rule);
        let mut set = ColorSet::new(&config).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(rule), &rule, |b, &rule| {
            b.iter(|| set.modify(rule, black_box(2), black_box(edit)).unwrap());
        });
    }

    group.finish();
}

fn grid_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid");
    let set = ColorSet::new(&ColorSetConfig::new().with_seed(1)).unwrap();

    for (rows, cols) in [(5, 9), (32, 32), (256, 256)] {
        let spec = GridSpec { rows, cols, row_channels: vec![Channel::S, Channel::V], ..GridSpec::default() };

        group.bench_with_input(BenchmarkId::from_parameter(format!("{rows}x{cols}")), &spec, |b, spec| {
            b.iter(|| generate(black_box(&set), spec).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, modify_benchmark, grid_benchmark);
criterion_main!(benches);
