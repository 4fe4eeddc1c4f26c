use std::path::Path;

use hound::{SampleFormat, WavReader};
use tracing::info;

use crate::error::Error;

/// First channel of a decoded WAV file
#[derive(Debug, Clone)]
pub struct AudioClip {
    pub sample_rate: u32,
    pub channels: u16,
    pub bits_per_sample: u16,
    /// Channel 0 only, scaled to [-1, 1]
    pub samples: Vec<f64>,
}

/// Read channel 0 of a WAV file as doubles.
///
/// Integer PCM is divided by `2^(bits - 1)`; float data is widened as is.
/// Doubles keep all 31 fractional bits of 32-bit PCM.
pub fn read_first_channel(path: &Path) -> Result<AudioClip, Error> {
    let input_err = |source| Error::InputRead {
        path: path.to_path_buf(),
        source,
    };

    let reader = WavReader::open(path).map_err(input_err)?;
    let spec = reader.spec();
    let channels = spec.channels.max(1) as usize;

    let samples = match spec.sample_format {
        SampleFormat::Float => reader
            .into_samples::<f32>()
            .step_by(channels)
            .map(|s| s.map(f64::from))
            .collect::<Result<Vec<_>, _>>(),
        SampleFormat::Int => {
            let full_scale = (1i64 << (spec.bits_per_sample - 1)) as f64;
            reader
                .into_samples::<i32>()
                .step_by(channels)
                .map(|s| s.map(|v| f64::from(v) / full_scale))
                .collect::<Result<Vec<_>, _>>()
        }
    }
    .map_err(input_err)?;

    info!(
        path = %path.display(),
        sample_rate = spec.sample_rate,
        channels = spec.channels,
        bits = spec.bits_per_sample,
        format = ?spec.sample_format,
        frames = samples.len(),
        "read input audio"
    );

    Ok(AudioClip {
        sample_rate: spec.sample_rate,
        channels: spec.channels,
        bits_per_sample: spec.bits_per_sample,
        samples,
    })
}
