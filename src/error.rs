use std::path::PathBuf;

use crate::config::{InputRate, SLOT_MAX, SLOT_MIN};

/// Everything that can stop a conversion run. None of these are recoverable.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("expected {expected} samples for {rate} input, got {actual}")]
    InvalidInputLength {
        expected: usize,
        actual: usize,
        rate: InputRate,
    },
    #[error("slot {0} is outside {min}..={max}", min = SLOT_MIN, max = SLOT_MAX)]
    InvalidSlot(i32),
    #[error("a wave holds {expected} samples, got {actual}")]
    InvalidWaveLength { expected: usize, actual: usize },
    #[error("invalid wavetable name: {0}")]
    InvalidName(NameError),
    #[error("failed to read audio from {}", .path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: hound::Error,
    },
    #[error("failed to write {}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Why a wavetable name was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameError {
    /// More than 14 bytes
    TooLong { len: usize, max: usize },
    /// A character outside printable ASCII (0x20..=0x7F)
    InvalidChar { index: usize, ch: char },
}

impl std::fmt::Display for NameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NameError::TooLong { len, max } => {
                write!(f, "{} characters long, at most {} allowed", len, max)
            }
            NameError::InvalidChar { index, ch } => {
                write!(
                    f,
                    "character {:?} (U+{:04X}) at position {} is not printable ASCII",
                    ch, *ch as u32, index
                )
            }
        }
    }
}

impl std::error::Error for NameError {}
