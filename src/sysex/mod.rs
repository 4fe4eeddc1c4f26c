//! Wavetable dump SysEx messages.
//!
//! One message ("frame") per wave, 410 bytes each:
//!
//! ```text
//! offset  len  content
//!      0    1  0xF0  start of exclusive
//!      1    1  0x3E  manufacturer
//!      2    1  0x13  device family
//!      3    1  0x00  device id
//!      4    1  0x12  wavetable dump
//!      5    1  bank  0x50 + (slot - 80)
//!      6    1  wave  0..=63
//!      7    1  0x00  format
//!      8  384  128 samples x 3 bytes, 7 bits each, most significant first
//!    392   14  name, 7-bit ASCII, zero padded
//!    406    2  0x00  reserved
//!    408    1  checksum of bytes 7..=406, low 7 bits
//!    409    1  0xF7  end of exclusive
//! ```

pub mod encoder;
pub mod frame;

pub use encoder::{WavetableDump, WavetableEncoder};
pub use frame::Frame;

use crate::config::NAME_LENGTH;
use crate::WAVE_LENGTH;

pub const SYSEX_START: u8 = 0xF0;
pub const SYSEX_END: u8 = 0xF7;
pub const MANUFACTURER_ID: u8 = 0x3E;
pub const DEVICE_FAMILY_ID: u8 = 0x13;
pub const DEVICE_ID: u8 = 0x00;
pub const WAVETABLE_DUMP: u8 = 0x12;
pub const FORMAT: u8 = 0x00;

pub const BANK_OFFSET: usize = 5;
pub const WAVE_OFFSET: usize = 6;
pub const FORMAT_OFFSET: usize = 7;
pub const SAMPLES_OFFSET: usize = 8;
pub const BYTES_PER_SAMPLE: usize = 3;
pub const NAME_OFFSET: usize = SAMPLES_OFFSET + WAVE_LENGTH * BYTES_PER_SAMPLE; // 392
pub const RESERVED_OFFSET: usize = NAME_OFFSET + NAME_LENGTH; // 406
pub const CHECKSUM_OFFSET: usize = RESERVED_OFFSET + 2; // 408
pub const FRAME_LENGTH: usize = CHECKSUM_OFFSET + 2; // 410

/// Checksum window: format byte through the first reserved byte
pub const CHECKSUM_RANGE: std::ops::RangeInclusive<usize> = FORMAT_OFFSET..=RESERVED_OFFSET;

/// Split the low 21 bits of a sample into three 7-bit groups, high group first.
///
/// Relies on two's-complement arithmetic shift, so negative samples come out
/// as the 21-bit two's-complement pattern the device expects.
pub fn pack_sample(sample: i32) -> [u8; 3] {
    [
        ((sample >> 14) & 0x7F) as u8,
        ((sample >> 7) & 0x7F) as u8,
        (sample & 0x7F) as u8,
    ]
}

/// Inverse of [`pack_sample`]: rebuild the 21-bit value and sign-extend it.
pub fn unpack_sample(bytes: [u8; 3]) -> i32 {
    let raw = ((bytes[0] as i32 & 0x7F) << 14)
        | ((bytes[1] as i32 & 0x7F) << 7)
        | (bytes[2] as i32 & 0x7F);
    // Move bit 20 into the sign bit and shift back
    (raw << 11) >> 11
}

/// Sum of `CHECKSUM_RANGE`, masked to 7 bits
pub fn checksum(frame: &[u8; FRAME_LENGTH]) -> u8 {
    let sum: u32 = frame[CHECKSUM_RANGE].iter().map(|&b| b as u32).sum();
    (sum & 0x7F) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SAMPLE_MAX;

    #[test]
    fn test_layout_offsets() {
        assert_eq!(NAME_OFFSET, 392);
        assert_eq!(RESERVED_OFFSET, 406);
        assert_eq!(CHECKSUM_OFFSET, 408);
        assert_eq!(FRAME_LENGTH, 410);
        assert_eq!(CHECKSUM_RANGE.count(), 400);
    }

    #[test]
    fn test_pack_positive() {
        assert_eq!(pack_sample(0), [0, 0, 0]);
        assert_eq!(pack_sample(1), [0, 0, 1]);
        assert_eq!(pack_sample(0x80), [0, 1, 0]);
        assert_eq!(pack_sample(0x4000), [1, 0, 0]);
        // 0x0FFFFF: bit 20 clear, everything below set
        assert_eq!(pack_sample(SAMPLE_MAX), [0x3F, 0x7F, 0x7F]);
    }

    #[test]
    fn test_pack_negative_is_twos_complement() {
        // -1 is all ones in the low 21 bits
        assert_eq!(pack_sample(-1), [0x7F, 0x7F, 0x7F]);
        // -1048575 = 0x100001 in 21-bit two's complement
        assert_eq!(pack_sample(-SAMPLE_MAX), [0x40, 0x00, 0x01]);
        // -128 = 0x1FFF80
        assert_eq!(pack_sample(-128), [0x7F, 0x7F, 0x00]);
    }

    #[test]
    fn test_arithmetic_shift_semantics() {
        // Shifts on i32 must keep the sign; mask after shifting
        assert_eq!(-1i32 >> 14, -1);
        assert_eq!((-1_048_575i32 >> 14) & 0x7F, 0x40);
        assert_eq!((-1_048_575i32 >> 7) & 0x7F, 0x00);
    }

    #[test]
    fn test_unpack_inverts_pack() {
        for sample in [0, 1, -1, 127, -128, 16_383, -16_384, SAMPLE_MAX, -SAMPLE_MAX, -1_048_576] {
            assert_eq!(unpack_sample(pack_sample(sample)), sample, "sample {}", sample);
        }
    }

    #[test]
    fn test_checksum_ignores_bytes_outside_window() {
        let mut frame = [0u8; FRAME_LENGTH];
        frame[0] = SYSEX_START;
        frame[6] = 0x7F;
        frame[407] = 0x55;
        frame[409] = SYSEX_END;
        assert_eq!(checksum(&frame), 0);

        frame[7] = 0x01;
        frame[406] = 0x02;
        assert_eq!(checksum(&frame), 0x03);
    }

    #[test]
    fn test_checksum_wraps_to_seven_bits() {
        let mut frame = [0u8; FRAME_LENGTH];
        frame[SAMPLES_OFFSET] = 0x7F;
        frame[SAMPLES_OFFSET + 1] = 0x02;
        // 0x81 & 0x7F
        assert_eq!(checksum(&frame), 0x01);
    }

    #[test]
    fn test_checksum_of_borrowed_slice_needs_full_frame() {
        let raw = vec![0x01u8; FRAME_LENGTH + 4];
        let short: Result<&[u8; FRAME_LENGTH], _> = raw[..FRAME_LENGTH - 1].try_into();
        assert!(short.is_err());

        let full: &[u8; FRAME_LENGTH] = raw[..FRAME_LENGTH].try_into().unwrap();
        // 400 bytes of 0x01
        assert_eq!(checksum(full), (400 & 0x7F) as u8);
    }
}
