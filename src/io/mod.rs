// Purpose - external interfaces: WAV in, MIDI/SysEx files out

pub mod midi;
pub mod wav;

use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::error::Error;
use crate::sysex::WavetableDump;

pub use wav::{read_first_channel, AudioClip};

/// Container for the rendered dump
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Standard MIDI File, one SysEx event per wave
    MidiFile,
    /// Raw SysEx messages back to back (`.syx`)
    RawSysex,
}

impl OutputFormat {
    /// `.syx` (any case) selects raw SysEx; everything else is a MIDI file
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("syx") => OutputFormat::RawSysex,
            _ => OutputFormat::MidiFile,
        }
    }
}

/// Render the dump in the chosen container
pub fn encode_output(dump: &WavetableDump, format: OutputFormat) -> Vec<u8> {
    match format {
        OutputFormat::MidiFile => midi::smf_bytes(dump),
        OutputFormat::RawSysex => dump.to_sysex_bytes(),
    }
}

/// Render the dump and write it atomically.
///
/// The bytes go to a temporary file next to `path`, which is then renamed
/// over it. A failed write leaves any existing file at `path` untouched.
/// Returns the number of bytes written.
pub fn write_output(
    path: &Path,
    dump: &WavetableDump,
    format: OutputFormat,
) -> Result<usize, Error> {
    let output_err = |source| Error::OutputWrite {
        path: path.to_path_buf(),
        source,
    };

    let bytes = encode_output(dump, format);
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut staged = tempfile::NamedTempFile::new_in(dir).map_err(output_err)?;
    staged.write_all(&bytes).map_err(output_err)?;
    staged.as_file().sync_all().map_err(output_err)?;
    staged.persist(path).map_err(|e| output_err(e.error))?;

    info!(path = %path.display(), ?format, bytes = bytes.len(), "wrote dump");
    Ok(bytes.len())
}
