//! Validate-then-execute conversion: read, check, normalize, encode, write.

use std::path::PathBuf;

use tracing::{info, info_span};

use crate::config::Config;
use crate::error::Error;
use crate::io::{self, OutputFormat};
use crate::normalize::normalize;
use crate::sysex::{WavetableDump, WavetableEncoder};

/// Normalize `samples` and encode them into a 64-frame dump.
///
/// Fails only on a wrong input length; the `Config` is already valid.
pub fn convert(samples: &[f64], config: &Config) -> Result<WavetableDump, Error> {
    let buffer = normalize(samples, config.rate)?;
    Ok(WavetableEncoder::new(config).encode(&buffer))
}

/// One file-to-file conversion
#[derive(Debug, Clone)]
pub struct Job {
    pub input: PathBuf,
    pub output: PathBuf,
    pub config: Config,
    pub format: OutputFormat,
}

impl Job {
    /// Output format inferred from the output file extension
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>, config: Config) -> Self {
        let output = output.into();
        Self {
            format: OutputFormat::from_path(&output),
            input: input.into(),
            output,
            config,
        }
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }
}

/// What a successful run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub frames: usize,
    pub bytes_written: usize,
    pub input_sample_rate: u32,
}

/// Run a job. The output file is only created once every stage has succeeded.
pub fn run(job: &Job) -> Result<RunSummary, Error> {
    let span = info_span!(
        "convert",
        slot = job.config.slot.get(),
        table = job.config.name.as_str()
    );
    let _enter = span.enter();

    let clip = io::read_first_channel(&job.input)?;
    let dump = convert(&clip.samples, &job.config)?;
    let bytes_written = io::write_output(&job.output, &dump, job.format)?;

    info!(frames = dump.len(), bytes_written, "conversion complete");

    Ok(RunSummary {
        frames: dump.len(),
        bytes_written,
        input_sample_rate: clip.sample_rate,
    })
}
