#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, NameError};
use crate::TABLE_LENGTH;

pub const SLOT_MIN: i32 = 80;
pub const SLOT_MAX: i32 = 118;
/// Bank byte written for the lowest user slot
pub const BANK_BASE: u8 = 0x50;
/// Width of the name field in every frame
pub const NAME_LENGTH: usize = 14;

/// How densely the input file covers the wavetable
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputRate {
    /// One input sample per table sample
    #[default]
    Normal,
    /// Two input samples per table sample; odd samples are dropped
    HalfRate,
}

impl InputRate {
    /// Input samples consumed per output sample
    pub const fn step(self) -> usize {
        match self {
            InputRate::Normal => 1,
            InputRate::HalfRate => 2,
        }
    }

    /// Exact input length this rate accepts
    pub const fn expected_len(self) -> usize {
        TABLE_LENGTH * self.step()
    }
}

impl std::fmt::Display for InputRate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputRate::Normal => f.write_str("normal"),
            InputRate::HalfRate => f.write_str("half-rate"),
        }
    }
}

/// User wavetable slot on the device (80..=118)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot(u8);

impl Slot {
    pub fn new(slot: i32) -> Result<Self, Error> {
        if !(SLOT_MIN..=SLOT_MAX).contains(&slot) {
            return Err(Error::InvalidSlot(slot));
        }
        Ok(Slot(slot as u8))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Bank identifier byte: slot 80 is 0x50, slot 118 is 0x76
    pub fn bank_byte(self) -> u8 {
        BANK_BASE + (self.0 - SLOT_MIN as u8)
    }
}

/// Wavetable name as stored on the device: printable ASCII, up to 14 characters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaveName(String);

impl WaveName {
    pub fn new(name: impl Into<String>) -> Result<Self, Error> {
        let name = name.into();

        if let Some((index, ch)) = name
            .chars()
            .enumerate()
            .find(|&(_, ch)| !(' '..='\u{7f}').contains(&ch))
        {
            return Err(Error::InvalidName(NameError::InvalidChar { index, ch }));
        }

        // All ASCII past this point, so bytes == chars
        if name.len() > NAME_LENGTH {
            return Err(Error::InvalidName(NameError::TooLong {
                len: name.len(),
                max: NAME_LENGTH,
            }));
        }

        Ok(WaveName(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The 14-byte name field: 7-bit ASCII, left-justified, zero-padded
    pub fn field(&self) -> [u8; NAME_LENGTH] {
        let mut field = [0u8; NAME_LENGTH];
        for (dst, src) in field.iter_mut().zip(self.0.bytes()) {
            *dst = src & 0x7F;
        }
        field
    }
}

/// Fully validated settings for one conversion run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub slot: Slot,
    pub name: WaveName,
    pub rate: InputRate,
}

impl Config {
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Unvalidated settings, as they arrive from the command line or a file
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    slot: i32,
    name: String,
    rate: InputRate,
}

impl ConfigBuilder {
    pub fn slot(mut self, slot: i32) -> Self {
        self.slot = slot;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn rate(mut self, rate: InputRate) -> Self {
        self.rate = rate;
        self
    }

    /// Shorthand for `rate(InputRate::HalfRate)` when `half_rate` is set
    pub fn half_rate(self, half_rate: bool) -> Self {
        self.rate(if half_rate {
            InputRate::HalfRate
        } else {
            InputRate::Normal
        })
    }

    /// Validate everything at once. Nothing downstream runs without a `Config`.
    pub fn build(self) -> Result<Config, Error> {
        let slot = Slot::new(self.slot)?;
        let name = WaveName::new(self.name)?;

        Ok(Config {
            slot,
            name,
            rate: self.rate,
        })
    }
}
