//! Benchmarks for frame encoding and container rendering.

use std::hint::black_box;

use blofeld_wt::io::{encode_output, OutputFormat};
use blofeld_wt::{normalize, Config, InputRate, WavetableEncoder, TABLE_LENGTH};
use criterion::{BenchmarkId, Criterion};

use crate::saw_table;

fn encoder() -> WavetableEncoder {
    let config = Config::builder().slot(80).name("Bench").build().unwrap();
    WavetableEncoder::new(&config)
}

pub fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("stages/encode");
    let encoder = encoder();
    let buffer = normalize(&saw_table(TABLE_LENGTH), InputRate::Normal).unwrap();

    // Single wave - header, 128 packed samples, checksum
    let wave = buffer.wave(0).unwrap();
    group.bench_function("wave", |b| {
        b.iter(|| encoder.encode_wave(black_box(0), black_box(wave)));
    });

    // All 64 waves
    group.bench_function("table", |b| {
        b.iter(|| encoder.encode(black_box(&buffer)));
    });

    group.finish();
}

pub fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("stages/render");
    let buffer = normalize(&saw_table(TABLE_LENGTH), InputRate::Normal).unwrap();
    let dump = encoder().encode(&buffer);

    for (label, format) in [("mid", OutputFormat::MidiFile), ("syx", OutputFormat::RawSysex)] {
        group.bench_with_input(BenchmarkId::from_parameter(label), &format, |b, &format| {
            b.iter(|| encode_output(black_box(&dump), format));
        });
    }

    group.finish();
}
