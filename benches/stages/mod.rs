//! Benchmarks for individual pipeline steps.

mod encode;
mod normalize;

pub use encode::{bench_encode, bench_render};
pub use normalize::bench_normalize;
