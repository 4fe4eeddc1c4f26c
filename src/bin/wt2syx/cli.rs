use std::path::PathBuf;

use blofeld_wt::io::OutputFormat;
use clap::{ArgAction, Parser, ValueEnum};
use tracing::Level;

/// Convert a WAV file into a Blofeld wavetable SysEx dump
#[derive(Parser, Debug)]
#[command(name = "wt2syx")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Input WAV file: 8192 samples (16384 with --half-rate), first channel used
    #[arg(short, long)]
    pub infile: PathBuf,

    /// Output file (.mid, or .syx for raw SysEx)
    #[arg(short, long)]
    pub outfile: PathBuf,

    /// Wavetable name, up to 14 printable ASCII characters
    #[arg(short, long)]
    pub name: String,

    /// Wavetable slot on the device (80-118)
    #[arg(short, long, allow_negative_numbers = true)]
    pub slot: i32,

    /// Input holds two samples per table sample; keep every other one
    #[arg(long)]
    pub half_rate: bool,

    /// Override the output container instead of inferring it from --outfile
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormatArg {
    /// Standard MIDI File
    Mid,
    /// Raw SysEx
    Syx,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Mid => OutputFormat::MidiFile,
            FormatArg::Syx => OutputFormat::RawSysex,
        }
    }
}

impl Cli {
    pub fn log_level(&self) -> Level {
        if self.quiet {
            return Level::ERROR;
        }
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}
