//! Sample normalizer: audio in [-1, 1] to the device's 21-bit integers.

use tracing::{debug, warn};

use crate::config::InputRate;
use crate::error::Error;
use crate::{SAMPLE_MAX, WAVE_COUNT, WAVE_LENGTH};

/// One wave's worth of quantized samples
pub type Wave = [i32; WAVE_LENGTH];

/// Exactly 8192 quantized samples, 64 waves of 128, wave-major.
/// Every value lies in `-SAMPLE_MAX..=SAMPLE_MAX`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleBuffer {
    waves: Box<[Wave; WAVE_COUNT]>,
}

impl SampleBuffer {
    /// A silent table
    pub fn zeroed() -> Self {
        Self {
            waves: Box::new([[0; WAVE_LENGTH]; WAVE_COUNT]),
        }
    }

    /// All 8192 samples in order
    pub fn as_slice(&self) -> &[i32] {
        self.waves.as_flattened()
    }

    /// The 128 samples of wave `index`, or `None` past wave 63
    pub fn wave(&self, index: usize) -> Option<&Wave> {
        self.waves.get(index)
    }

    /// All 64 waves in order
    pub fn waves(&self) -> impl ExactSizeIterator<Item = &Wave> {
        self.waves.iter()
    }
}

/// Scale one sample to 21 bits, truncating toward zero.
/// Values outside [-1, 1] are clamped; NaN becomes 0.
pub fn quantize(sample: f64) -> i32 {
    (sample.clamp(-1.0, 1.0) * SAMPLE_MAX as f64) as i32
}

/// Build the sample buffer from raw input.
///
/// `input` must hold exactly `rate.expected_len()` samples. In half-rate mode
/// only even-indexed samples are used (plain decimation, no filtering).
pub fn normalize(input: &[f64], rate: InputRate) -> Result<SampleBuffer, Error> {
    let expected = rate.expected_len();
    if input.len() != expected {
        return Err(Error::InvalidInputLength {
            expected,
            actual: input.len(),
            rate,
        });
    }

    let mut buffer = SampleBuffer::zeroed();
    let mut clipped = 0usize;

    let table = buffer.waves.as_flattened_mut();
    for (dst, &src) in table.iter_mut().zip(input.iter().step_by(rate.step())) {
        if !(-1.0..=1.0).contains(&src) {
            clipped += 1;
        }
        *dst = quantize(src);
    }

    if clipped > 0 {
        warn!(clipped, "input samples outside [-1, 1] were clamped");
    }
    debug!(%rate, input_len = input.len(), "normalized sample buffer");

    Ok(buffer)
}
