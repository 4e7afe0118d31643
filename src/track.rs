#![doc = r#"
Track chunk decoding.

A track chunk is the `"MTrk"` tag, a declared byte size, and an event
stream. The declared size is declarative only: the authoritative
terminator is the end-of-track meta event, and real files disagree
with their declared sizes often enough that the event loop must not
use the size as its bound. It is still a sanity bound: a stream that
runs well past it without an end-of-track event is corrupt, and the
decoder gives up rather than read to the end of the file.
"#]

use crate::prelude::*;
use std::io::Read;

/// Bytes past the declared chunk size the event loop will tolerate
/// before giving up on finding an end-of-track event.
const SIZE_SLACK: u64 = 16;

/// A track chunk header: the declared size of the event stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackChunk {
    size: u32,
}

impl TrackChunk {
    fn read<R: Read>(reader: &mut Reader<R>) -> DecodeResult<Self> {
        let tag = reader.read_array::<4>()?;
        if &tag != b"MTrk" {
            return Err(reader.invalid(TrackError::BadTag(tag)));
        }
        let size = u32::from_be_bytes(reader.read_array()?);
        Ok(Self { size })
    }

    /// The declared byte size of the event stream.
    pub const fn size(&self) -> u32 {
        self.size
    }
}

/// One decoded track: its chunk header and its events.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Track {
    chunk: TrackChunk,
    events: EventList,
}

impl Track {
    /// The chunk header.
    pub const fn chunk(&self) -> &TrackChunk {
        &self.chunk
    }

    /// The decoded events, ending with the end-of-track event.
    pub const fn events(&self) -> &EventList {
        &self.events
    }

    /// Split into the chunk header and the event list.
    pub fn into_parts(self) -> (TrackChunk, EventList) {
        (self.chunk, self.events)
    }
}

/// Decode the next track chunk from the stream.
///
/// Runs the event loop until the end-of-track meta event, carrying
/// running status across events within this track only. On any error
/// the partially built track is dropped; no half-populated list is
/// ever returned as success.
pub fn decode_track<R: Read>(reader: &mut Reader<R>) -> DecodeResult<Track> {
    let chunk = TrackChunk::read(reader)?;
    let start = reader.position();
    let limit = start + u64::from(chunk.size()) + SIZE_SLACK;

    let mut events = EventList::new();
    // running status: kind and channel of the last explicit status byte
    let mut running: Option<(ChannelKind, u8)> = None;

    loop {
        if reader.position() > limit {
            return Err(reader.invalid(TrackError::MissingEndOfTrack {
                declared: chunk.size(),
            }));
        }

        let (delta_time, _) = read_vlv(reader)?;
        let status = reader.read_u8()?;

        match status {
            0xFF => {
                if read_meta_event(reader, &mut events, delta_time)? {
                    break;
                }
            }
            0xF0 | 0xF7 => {
                // sysex: skip, record nothing
                let (length, _) = read_vlv(reader)?;
                reader.skip(u64::from(length))?;
            }
            _ => {
                let (kind, channel, param1) = if status & 0x80 != 0 {
                    let kind = ChannelKind::try_from(status >> 4)
                        .map_err(|_| reader.invalid(TrackError::UnsupportedStatus(status)))?;
                    let channel = status & 0x0F;
                    running = Some((kind, channel));
                    (kind, channel, reader.read_u8()?)
                } else {
                    // running status: this byte is already the first parameter
                    let Some((kind, channel)) = running else {
                        return Err(reader.invalid(TrackError::OrphanRunningStatus));
                    };
                    (kind, channel, status)
                };
                let param2 = if kind.two_parameters() {
                    reader.read_u8()?
                } else {
                    0
                };
                events.append(Event::channel(
                    delta_time,
                    ChannelEvent {
                        kind,
                        channel,
                        param1,
                        param2,
                    },
                ));
            }
        }
    }

    #[cfg(feature = "tracing")]
    {
        let consumed = reader.position() - start;
        if consumed != u64::from(chunk.size()) {
            tracing::warn!(
                declared = chunk.size(),
                consumed,
                "track chunk size disagrees with its event stream"
            );
        }
    }
    Ok(Track { chunk, events })
}

/// Dispatch one meta event. Returns true for end-of-track.
fn read_meta_event<R: Read>(
    reader: &mut Reader<R>,
    events: &mut EventList,
    delta_time: u32,
) -> DecodeResult<bool> {
    let meta = reader.read_u8()?;
    let (length, _) = read_vlv(reader)?;

    let illegal_length =
        |reader: &Reader<R>| reader.invalid(TrackError::MetaLength { meta, length });

    match MetaKind::try_from(meta) {
        Ok(MetaKind::EndOfTrack) => {
            if length != 0 {
                return Err(illegal_length(reader));
            }
            events.append(Event::meta(delta_time, MetaEvent::EndOfTrack));
            Ok(true)
        }
        Ok(MetaKind::TempoChange) => {
            if length != 3 {
                return Err(illegal_length(reader));
            }
            let [b0, b1, b2] = reader.read_array()?;
            let tempo = u32::from_be_bytes([0, b0, b1, b2]);
            events.append(Event::meta(delta_time, MetaEvent::TempoChange(tempo)));
            Ok(false)
        }
        Ok(MetaKind::SmpteOffset) => {
            if length != 5 {
                return Err(illegal_length(reader));
            }
            let offset = SmpteOffset::read(reader)?;
            events.append(Event::meta(delta_time, MetaEvent::SmpteOffset(offset)));
            Ok(false)
        }
        // every other meta type, known or not, is skipped
        _ => {
            reader.skip(u64::from(length))?;
            Ok(false)
        }
    }
}

/// Step over one track chunk using its declared size.
///
/// The declared size is trusted here, unlike in [`decode_track`]; this
/// is the recovery hook for callers that want to drop a corrupt track
/// and try the next one.
pub fn skip_track<R: Read>(reader: &mut Reader<R>) -> DecodeResult<TrackChunk> {
    let chunk = TrackChunk::read(reader)?;
    reader.skip(u64::from(chunk.size()))?;
    Ok(chunk)
}
