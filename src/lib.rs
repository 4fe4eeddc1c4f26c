pub mod config; // Validated slot/name/input-rate settings
pub mod error;
pub mod io;
pub mod normalize; // Float samples -> 21-bit integers
pub mod pipeline;
pub mod sysex; // Wavetable dump frames

pub use config::{Config, ConfigBuilder, InputRate, Slot, WaveName};
pub use error::{Error, NameError};
pub use normalize::{normalize, SampleBuffer, Wave};
pub use pipeline::{convert, run, Job, RunSummary};
pub use sysex::{Frame, WavetableDump, WavetableEncoder};

/// Waves per wavetable
pub const WAVE_COUNT: usize = 64;
/// Samples per wave
pub const WAVE_LENGTH: usize = 128;
/// Samples in a full wavetable
pub const TABLE_LENGTH: usize = WAVE_COUNT * WAVE_LENGTH;
/// Largest magnitude a 21-bit signed sample may hold
pub const SAMPLE_MAX: i32 = 1_048_575;
