//! Benchmarks for end-to-end conversion of one table.

use std::hint::black_box;

use blofeld_wt::io::{encode_output, OutputFormat};
use blofeld_wt::{convert, Config, InputRate, TABLE_LENGTH};
use criterion::{BenchmarkId, Criterion};

use crate::saw_table;

pub fn bench_convert(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/convert");

    for rate in [InputRate::Normal, InputRate::HalfRate] {
        let input = saw_table(TABLE_LENGTH * rate.step());
        group.bench_with_input(BenchmarkId::new("midi_file", rate), &input, |b, input| {
            b.iter(|| {
                // Validation is part of every run
                let config = Config::builder()
                    .slot(80)
                    .name("Scenario")
                    .rate(rate)
                    .build()
                    .unwrap();
                let dump = convert(black_box(input), &config).unwrap();
                encode_output(&dump, OutputFormat::MidiFile)
            });
        });
    }

    group.finish();
}
