use tracing::debug;

use super::{
    checksum, pack_sample, Frame, BYTES_PER_SAMPLE, CHECKSUM_OFFSET, DEVICE_FAMILY_ID,
    DEVICE_ID, FORMAT, FORMAT_OFFSET, FRAME_LENGTH, MANUFACTURER_ID, NAME_OFFSET, SAMPLES_OFFSET,
    SYSEX_END, SYSEX_START, WAVETABLE_DUMP,
};
use crate::config::{Config, NAME_LENGTH};
use crate::error::Error;
use crate::normalize::{SampleBuffer, Wave};
use crate::{WAVE_COUNT, WAVE_LENGTH};

/// Builds the 64 dump frames for one slot and name
#[derive(Debug, Clone)]
pub struct WavetableEncoder {
    bank: u8,
    name: [u8; NAME_LENGTH],
}

impl WavetableEncoder {
    /// Takes a validated `Config`, so encoding itself cannot fail
    pub fn new(config: &Config) -> Self {
        Self {
            bank: config.slot.bank_byte(),
            name: config.name.field(),
        }
    }

    /// Encode one wave. The wave index is masked to 7 bits.
    pub fn encode_wave(&self, index: usize, samples: &Wave) -> Frame {
        let mut bytes = [0u8; FRAME_LENGTH];
        bytes[..FORMAT_OFFSET + 1].copy_from_slice(&[
            SYSEX_START,
            MANUFACTURER_ID,
            DEVICE_FAMILY_ID,
            DEVICE_ID,
            WAVETABLE_DUMP,
            self.bank,
            (index & 0x7F) as u8,
            FORMAT,
        ]);

        let sample_region = &mut bytes[SAMPLES_OFFSET..NAME_OFFSET];
        for (dst, &sample) in sample_region
            .chunks_exact_mut(BYTES_PER_SAMPLE)
            .zip(samples)
        {
            dst.copy_from_slice(&pack_sample(sample));
        }

        bytes[NAME_OFFSET..NAME_OFFSET + NAME_LENGTH].copy_from_slice(&self.name);
        // Reserved bytes 406 and 407 stay zero
        bytes[CHECKSUM_OFFSET] = checksum(&bytes);
        bytes[FRAME_LENGTH - 1] = SYSEX_END;

        Frame::from_bytes(bytes)
    }

    /// Like [`encode_wave`](Self::encode_wave) for a slice of unknown length.
    /// Anything but exactly 128 samples is rejected.
    pub fn encode_wave_slice(&self, index: usize, samples: &[i32]) -> Result<Frame, Error> {
        let wave: &Wave = samples
            .try_into()
            .map_err(|_| Error::InvalidWaveLength {
                expected: WAVE_LENGTH,
                actual: samples.len(),
            })?;
        Ok(self.encode_wave(index, wave))
    }

    /// Encode the whole table, one frame per wave in wave order
    pub fn encode(&self, buffer: &SampleBuffer) -> WavetableDump {
        let frames: Vec<Frame> = buffer
            .waves()
            .enumerate()
            .map(|(index, samples)| self.encode_wave(index, samples))
            .collect();

        debug!(bank = self.bank, frames = frames.len(), "encoded wavetable dump");

        WavetableDump { frames }
    }
}

/// The 64 frames of one wavetable, in wave order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WavetableDump {
    frames: Vec<Frame>,
}

impl WavetableDump {
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Always false for a dump built by `WavetableEncoder`
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Frame> {
        self.frames.iter()
    }

    /// All frames back to back, as a `.syx` file stores them
    pub fn to_sysex_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(WAVE_COUNT * FRAME_LENGTH);
        for frame in &self.frames {
            out.extend_from_slice(frame.as_bytes());
        }
        out
    }
}

impl<'a> IntoIterator for &'a WavetableDump {
    type Item = &'a Frame;
    type IntoIter = std::slice::Iter<'a, Frame>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.iter()
    }
}
