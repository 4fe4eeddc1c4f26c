//! Whole-table conversion benchmarks.
//!
//! These mirror a CLI run minus file I/O: validate, normalize, encode, render.

mod convert;

pub use convert::bench_convert;
