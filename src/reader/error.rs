use std::io;
use thiserror::Error;

#[doc = r#"
An error produced while decoding a MIDI stream.

Carries the absolute byte offset at which decoding stopped together
with the [`DecodeErrorKind`] describing what went wrong there.
"#]
#[derive(Debug, Error)]
#[error("decoding at byte {position}, {kind}")]
pub struct DecodeError {
    position: u64,
    kind: DecodeErrorKind,
}

impl DecodeError {
    /// Create an error from a position and kind.
    pub const fn new(position: u64, kind: DecodeErrorKind) -> Self {
        Self { position, kind }
    }

    /// Returns the kind of the decode error.
    pub fn kind(&self) -> &DecodeErrorKind {
        &self.kind
    }

    /// Returns the byte offset where decoding stopped.
    pub const fn position(&self) -> u64 {
        self.position
    }

    /// True if the stream ended before a complete field or record.
    pub const fn is_truncated(&self) -> bool {
        matches!(self.kind, DecodeErrorKind::Truncated)
    }
}

/// A kind of error that decoding can produce.
#[derive(Debug, Error)]
pub enum DecodeErrorKind {
    /// The underlying stream faulted.
    #[error("stream fault: {0}")]
    Io(#[source] io::Error),
    /// The stream ended before a complete field or record.
    #[error("unexpected end of stream")]
    Truncated,
    /// A variable-length quantity ran past its four-byte maximum.
    #[error("variable-length quantity exceeds four bytes")]
    MalformedVlv,
    /// The bytes were well formed but semantically illegal.
    #[error("{0}")]
    Invalid(#[from] FormatError),
}

/// Semantically illegal input, split by the area of the format it
/// violates.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    /// An illegal file header.
    #[error("header: {0}")]
    Header(#[from] HeaderError),
    /// An illegal track chunk or event stream.
    #[error("track: {0}")]
    Track(#[from] TrackError),
    /// An illegal SMPTE field.
    #[error("smpte: {0}")]
    Smpte(#[from] SmpteError),
}

/// Errors specific to the file header chunk.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HeaderError {
    /// The first four bytes were not `"MThd"`.
    #[error("tag {0:?} is not \"MThd\"")]
    BadTag([u8; 4]),
    /// The format word was not 0, 1, or 2.
    #[error("unknown format {0}")]
    UnknownFormat(u16),
    /// The SMPTE division code was not -24, -25, -29, or -30.
    #[error("unsupported frame rate code {0}")]
    FrameRate(i8),
    /// Metrical timing declared zero ticks per quarter note.
    #[error("zero ticks per quarter note")]
    ZeroTickRate,
}

/// Errors specific to track chunks and their event streams.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TrackError {
    /// The first four bytes of the chunk were not `"MTrk"`.
    #[error("tag {0:?} is not \"MTrk\"")]
    BadTag([u8; 4]),
    /// A status byte outside the channel and meta/sysex ranges.
    #[error("unsupported status byte {0:#04X}")]
    UnsupportedStatus(u8),
    /// A data byte arrived before any status byte established running
    /// status.
    #[error("running status referenced before any status byte")]
    OrphanRunningStatus,
    /// A meta event declared a length its type does not allow.
    #[error("meta event {meta:#04X} has illegal length {length}")]
    MetaLength {
        /// The meta type byte.
        meta: u8,
        /// The declared payload length.
        length: u32,
    },
    /// The event stream ran past the declared chunk size without an
    /// end-of-track event.
    #[error("no end-of-track event within the declared {declared} bytes")]
    MissingEndOfTrack {
        /// The chunk size the track header declared.
        declared: u32,
    },
}

/// Errors specific to SMPTE offset events.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SmpteError {
    /// The rate code in the hours byte was reserved.
    #[error("reserved frame rate code {0}")]
    ReservedRate(u8),
}

/// The decode result type (see [`DecodeError`]).
pub type DecodeResult<T> = Result<T, DecodeError>;
