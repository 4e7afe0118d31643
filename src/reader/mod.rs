#![doc = r#"
Positioned reads over a blocking byte stream.

[`Reader`] wraps any [`std::io::Read`] and tracks the absolute byte
offset, so every error can report exactly where in the file decoding
stopped. All multi-byte MIDI fields are big-endian on the wire; callers
read them as fixed-size byte arrays and convert with
`u16::from_be_bytes`/`u32::from_be_bytes`, which is correct on both
little- and big-endian hosts.
"#]

mod error;
pub use error::*;

use std::io::{self, Read};

/// A byte stream with a running offset.
///
/// One decode (header or track) may be in progress against a given
/// reader at a time; the header must be read before any track, since
/// both consume from the same sequential cursor.
#[derive(Debug)]
pub struct Reader<R> {
    stream: R,
    position: u64,
}

impl<R> Reader<R> {
    /// Wrap a stream, starting the offset at zero.
    pub const fn new(stream: R) -> Self {
        Self {
            stream,
            position: 0,
        }
    }

    /// Returns the absolute offset of the next byte to be read.
    pub const fn position(&self) -> u64 {
        self.position
    }

    /// Consumes the reader, returning the underlying stream.
    pub fn into_inner(self) -> R {
        self.stream
    }

    pub(crate) fn invalid(&self, err: impl Into<FormatError>) -> DecodeError {
        DecodeError::new(self.position, DecodeErrorKind::Invalid(err.into()))
    }
}

impl<R: Read> Reader<R> {
    /// Read a single byte.
    pub fn read_u8(&mut self) -> DecodeResult<u8> {
        Ok(self.read_array::<1>()?[0])
    }

    /// Read exactly `N` bytes into an array.
    pub fn read_array<const N: usize>(&mut self) -> DecodeResult<[u8; N]> {
        let mut bytes = [0u8; N];
        self.stream
            .read_exact(&mut bytes)
            .map_err(|e| self.eof_or_io(e))?;
        self.position += N as u64;
        Ok(bytes)
    }

    /// Discard exactly `count` bytes, failing with `Truncated` if the
    /// stream ends first.
    pub fn skip(&mut self, count: u64) -> DecodeResult<()> {
        let discarded = io::copy(&mut (&mut self.stream).take(count), &mut io::sink())
            .map_err(|e| self.eof_or_io(e))?;
        self.position += discarded;
        if discarded < count {
            return Err(DecodeError::new(self.position, DecodeErrorKind::Truncated));
        }
        Ok(())
    }

    fn eof_or_io(&self, err: io::Error) -> DecodeError {
        let kind = if err.kind() == io::ErrorKind::UnexpectedEof {
            DecodeErrorKind::Truncated
        } else {
            DecodeErrorKind::Io(err)
        };
        DecodeError::new(self.position, kind)
    }
}
