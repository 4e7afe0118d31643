#![doc = r#"
File-level decoding: the header chunk and the [`MidiFile`] handle.
"#]

mod header;
pub use header::*;

mod timing;
pub use timing::*;

mod smpte;
pub use smpte::*;

use crate::prelude::*;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

#[doc = r#"
An open MIDI stream with its header already decoded.

Owns the stream; the header is read at construction, so a [`MidiFile`]
that exists is one whose header was valid. Tracks are then pulled one
at a time with [`next_track`](Self::next_track), or stepped over with
[`skip_track`](Self::skip_track); the header's
[`num_tracks`](FileHeader::num_tracks) says how many to expect. The
stream closes when the value drops.
"#]
#[derive(Debug)]
pub struct MidiFile<R> {
    reader: Reader<R>,
    header: FileHeader,
}

impl MidiFile<io::BufReader<fs::File>> {
    /// Open a file on disk and decode its header.
    pub fn open<P: AsRef<Path>>(path: P) -> DecodeResult<Self> {
        let file = fs::File::open(path)
            .map_err(|e| DecodeError::new(0, DecodeErrorKind::Io(e)))?;
        Self::new(io::BufReader::new(file))
    }
}

impl<R: Read> MidiFile<R> {
    /// Decode the header from the front of a stream.
    pub fn new(stream: R) -> DecodeResult<Self> {
        let mut reader = Reader::new(stream);
        let header = read_header(&mut reader)?;
        Ok(Self { reader, header })
    }

    /// The file header.
    pub const fn header(&self) -> &FileHeader {
        &self.header
    }

    /// Decode the next track chunk.
    pub fn next_track(&mut self) -> DecodeResult<Track> {
        decode_track(&mut self.reader)
    }

    /// Step over the next track chunk without decoding its events.
    pub fn skip_track(&mut self) -> DecodeResult<TrackChunk> {
        crate::track::skip_track(&mut self.reader)
    }

    /// The current byte offset into the stream.
    pub const fn position(&self) -> u64 {
        self.reader.position()
    }
}
