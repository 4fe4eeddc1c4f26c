use super::{
    checksum, unpack_sample, BANK_OFFSET, BYTES_PER_SAMPLE, CHECKSUM_OFFSET, FRAME_LENGTH,
    NAME_OFFSET, RESERVED_OFFSET, SAMPLES_OFFSET, WAVE_OFFSET,
};

/// One complete wavetable dump message for a single wave
#[derive(Clone, PartialEq, Eq)]
pub struct Frame {
    bytes: [u8; FRAME_LENGTH],
}

impl Frame {
    pub(crate) fn from_bytes(bytes: [u8; FRAME_LENGTH]) -> Self {
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8; FRAME_LENGTH] {
        &self.bytes
    }

    pub fn bank(&self) -> u8 {
        self.bytes[BANK_OFFSET]
    }

    pub fn wave_index(&self) -> u8 {
        self.bytes[WAVE_OFFSET]
    }

    /// The packed sample region, three bytes per sample
    pub fn sample_bytes(&self) -> &[u8] {
        &self.bytes[SAMPLES_OFFSET..NAME_OFFSET]
    }

    /// Sample values decoded back from their 7-bit groups
    pub fn samples(&self) -> impl Iterator<Item = i32> + '_ {
        self.sample_bytes()
            .chunks_exact(BYTES_PER_SAMPLE)
            .map(|b| unpack_sample([b[0], b[1], b[2]]))
    }

    pub fn name_field(&self) -> &[u8] {
        &self.bytes[NAME_OFFSET..RESERVED_OFFSET]
    }

    pub fn checksum(&self) -> u8 {
        self.bytes[CHECKSUM_OFFSET]
    }

    /// Recompute the checksum and compare with the stored byte
    pub fn has_valid_checksum(&self) -> bool {
        checksum(&self.bytes) == self.checksum()
    }
}

impl AsRef<[u8]> for Frame {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl std::fmt::Debug for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Frame")
            .field("bank", &format_args!("{:#04x}", self.bank()))
            .field("wave", &self.wave_index())
            .field("name", &String::from_utf8_lossy(self.name_field()))
            .field("checksum", &format_args!("{:#04x}", self.checksum()))
            .finish()
    }
}
