//! Benchmarks for float-to-21-bit normalization.

use std::hint::black_box;

use blofeld_wt::{normalize, InputRate, TABLE_LENGTH};
use criterion::{BenchmarkId, Criterion};

use crate::saw_table;

pub fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("stages/normalize");

    for rate in [InputRate::Normal, InputRate::HalfRate] {
        let input = saw_table(TABLE_LENGTH * rate.step());
        group.bench_with_input(BenchmarkId::from_parameter(rate), &input, |b, input| {
            b.iter(|| normalize(black_box(input), rate).unwrap());
        });
    }

    group.finish();
}
