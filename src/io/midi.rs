//! Minimal Standard MIDI File writer for SysEx dumps.
//!
//! Produces a format 0 file with a single track. Only SysEx events and the
//! end-of-track meta event are supported, which is all a dump needs.

use crate::sysex::{WavetableDump, SYSEX_START};

/// Header division for dump files. Meaningless for SysEx, but required by the format.
pub const TICKS_PER_QUARTER: u16 = 100;

const HEADER_ID: [u8; 4] = *b"MThd";
const TRACK_ID: [u8; 4] = *b"MTrk";
const END_OF_TRACK: [u8; 3] = [0xFF, 0x2F, 0x00];

/// Append `value` as a MIDI variable-length quantity (7 bits per byte, MSB first).
pub fn write_vlq(out: &mut Vec<u8>, value: u32) {
    let mut groups = [0u8; 5];
    let mut n = 0;
    let mut v = value;
    loop {
        groups[n] = (v & 0x7F) as u8;
        n += 1;
        v >>= 7;
        if v == 0 {
            break;
        }
    }
    for i in (0..n).rev() {
        let continuation = if i > 0 { 0x80 } else { 0x00 };
        out.push(groups[i] | continuation);
    }
}

/// Accumulates track events, then renders the complete file
#[derive(Debug, Clone)]
pub struct SmfWriter {
    ticks_per_quarter: u16,
    track: Vec<u8>,
}

impl SmfWriter {
    pub fn new(ticks_per_quarter: u16) -> Self {
        Self {
            ticks_per_quarter,
            track: Vec::new(),
        }
    }

    /// Add a SysEx event. `message` is the full message including the
    /// leading 0xF0 and trailing 0xF7.
    pub fn push_sysex(&mut self, delta: u32, message: &[u8]) {
        let body = match message.split_first() {
            Some((&SYSEX_START, rest)) => rest,
            _ => message,
        };
        write_vlq(&mut self.track, delta);
        self.track.push(SYSEX_START);
        write_vlq(&mut self.track, body.len() as u32);
        self.track.extend_from_slice(body);
    }

    /// Close the track and render header + track chunk
    pub fn finish(mut self) -> Vec<u8> {
        write_vlq(&mut self.track, 0);
        self.track.extend_from_slice(&END_OF_TRACK);

        let mut out = Vec::with_capacity(14 + 8 + self.track.len());
        out.extend_from_slice(&HEADER_ID);
        out.extend_from_slice(&6u32.to_be_bytes());
        out.extend_from_slice(&0u16.to_be_bytes()); // format 0
        out.extend_from_slice(&1u16.to_be_bytes()); // one track
        out.extend_from_slice(&self.ticks_per_quarter.to_be_bytes());

        out.extend_from_slice(&TRACK_ID);
        out.extend_from_slice(&(self.track.len() as u32).to_be_bytes());
        out.extend_from_slice(&self.track);
        out
    }
}

/// Render a dump as a MIDI file: every frame at time 0, in wave order
pub fn smf_bytes(dump: &WavetableDump) -> Vec<u8> {
    let mut writer = SmfWriter::new(TICKS_PER_QUARTER);
    for frame in dump {
        writer.push_sysex(0, frame.as_bytes());
    }
    writer.finish()
}
