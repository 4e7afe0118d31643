use crate::prelude::*;
use num_enum::TryFromPrimitive;
use std::io::Read;

#[doc = r#"
The file header chunk.

The first chunk of every Standard MIDI File: the `"MThd"` tag, the
chunk size, the format, the track count, and the time-division decoded
into a [`Timing`]. Created once per file and immutable thereafter.
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FileHeader {
    size: u32,
    format: Format,
    num_tracks: u16,
    timing: Timing,
}

impl FileHeader {
    /// The declared header chunk size (6 in every published file).
    pub const fn size(&self) -> u32 {
        self.size
    }

    /// How the file's tracks relate to each other.
    pub const fn format(&self) -> Format {
        self.format
    }

    /// How many track chunks the file declares.
    pub const fn num_tracks(&self) -> u16 {
        self.num_tracks
    }

    /// The time-division.
    pub const fn timing(&self) -> &Timing {
        &self.timing
    }

    /// See [`Timing::tick_duration`].
    pub const fn tick_duration(&self, tempo: u32) -> u32 {
        self.timing.tick_duration(tempo)
    }
}

/// The header's format word: how tracks relate to each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u16)]
pub enum Format {
    /// Format 0: one track carrying all channels.
    SingleMultiChannel = 0,
    /// Format 1: tracks played together.
    Simultaneous = 1,
    /// Format 2: independent single-track patterns.
    SequentiallyIndependent = 2,
}

/// Decode the file header chunk.
///
/// Fails with the header tag error if the stream does not begin with
/// `"MThd"`, and with `Truncated` if any fixed-width field cannot be
/// read in full. Must complete before any track decode begins.
pub fn read_header<R: Read>(reader: &mut Reader<R>) -> DecodeResult<FileHeader> {
    let tag = reader.read_array::<4>()?;
    if &tag != b"MThd" {
        return Err(reader.invalid(HeaderError::BadTag(tag)));
    }

    let size = u32::from_be_bytes(reader.read_array()?);
    let format_word = u16::from_be_bytes(reader.read_array()?);
    let format = Format::try_from(format_word)
        .map_err(|_| reader.invalid(HeaderError::UnknownFormat(format_word)))?;
    let num_tracks = u16::from_be_bytes(reader.read_array()?);
    let division = u16::from_be_bytes(reader.read_array()?);
    let timing = Timing::from_division(division).map_err(|e| reader.invalid(e))?;

    Ok(FileHeader {
        size,
        format,
        num_tracks,
        timing,
    })
}
