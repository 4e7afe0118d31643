use crate::prelude::*;
use std::io::Read;

#[doc = r#"
A track's starting position in SMPTE time code.

Decoded from the five-byte SMPTE-offset meta event. The first byte
packs the frame rate into its top three bits and the hours into the
low five; minutes, seconds, frames, and subframes (hundredths of a
frame) follow one byte each.
"#]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SmpteOffset {
    /// The frame rate the offset is expressed in.
    pub fps: SmpteFps,
    /// Hours (0-23).
    pub hours: u8,
    /// Minutes (0-59).
    pub minutes: u8,
    /// Seconds (0-59).
    pub seconds: u8,
    /// Frame within the current second.
    pub frames: u8,
    /// Hundredths of a frame.
    pub subframes: u8,
}

impl SmpteOffset {
    pub(crate) fn read<R: Read>(reader: &mut Reader<R>) -> DecodeResult<Self> {
        let hours_byte = reader.read_u8()?;
        let fps = SmpteFps::from_rate_code(hours_byte >> 5)
            .ok_or_else(|| reader.invalid(SmpteError::ReservedRate(hours_byte >> 5)))?;
        let [minutes, seconds, frames, subframes] = reader.read_array()?;
        Ok(Self {
            fps,
            hours: hours_byte & 0x1F,
            minutes,
            seconds,
            frames,
            subframes,
        })
    }

    /// The offset as milliseconds from zero.
    pub const fn as_millis(&self) -> u64 {
        let fps = self.fps.as_f64();
        let frames = (1_000. / fps) * self.frames as f64 + (10. / fps) * self.subframes as f64;
        3_600_000 * self.hours as u64
            + 60_000 * self.minutes as u64
            + 1_000 * self.seconds as u64
            + frames as u64
    }
}
