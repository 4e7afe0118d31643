#![doc = r#"
The variable-length-quantity codec.

MIDI stores delta-times and meta/sysex lengths as VLVs: big-endian,
seven bits per byte, the high bit flagging continuation. The format
guarantees a VLV never exceeds four bytes, so the largest legal value
is `0x0FFF_FFFF`; a fourth byte with its high bit still set is a
corrupt stream, never a large value.
"#]

use crate::reader::{DecodeError, DecodeErrorKind, DecodeResult, Reader};
use std::io::Read;

/// Decode one variable-length quantity.
///
/// Returns the value and the number of bytes consumed (1 to 4), for
/// progress accounting in the enclosing track loop. Fails with
/// `Truncated` if the stream ends before a terminating byte, and with
/// `MalformedVlv` if no terminating byte appears within four bytes.
pub fn read_vlv<R: Read>(reader: &mut Reader<R>) -> DecodeResult<(u32, usize)> {
    let mut value = 0u32;

    for count in 1..=4 {
        let byte = reader.read_u8()?;
        value = (value << 7) | u32::from(byte & 0x7F);
        if byte & 0x80 == 0 {
            return Ok((value, count));
        }
    }

    Err(DecodeError::new(
        reader.position(),
        DecodeErrorKind::MalformedVlv,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn encode_vlv(mut value: u32) -> Vec<u8> {
        let mut bytes = vec![(value & 0x7F) as u8];
        value >>= 7;
        while value > 0 {
            bytes.push((value & 0x7F) as u8 | 0x80);
            value >>= 7;
        }
        bytes.reverse();
        bytes
    }

    fn decode(bytes: &[u8]) -> DecodeResult<(u32, usize)> {
        read_vlv(&mut Reader::new(bytes))
    }

    #[test]
    fn known_encodings() {
        assert_eq!(decode(&[0x00]).unwrap(), (0, 1));
        assert_eq!(decode(&[0x7F]).unwrap(), (0x7F, 1));
        assert_eq!(decode(&[0x81, 0x00]).unwrap(), (0x80, 2));
        assert_eq!(decode(&[0xC0, 0x00]).unwrap(), (0x2000, 2));
        assert_eq!(decode(&[0xFF, 0x7F]).unwrap(), (0x3FFF, 2));
        assert_eq!(decode(&[0x81, 0x80, 0x00]).unwrap(), (0x4000, 3));
        assert_eq!(decode(&[0xFF, 0xFF, 0xFF, 0x7F]).unwrap(), (0x0FFF_FFFF, 4));
    }

    #[test]
    fn round_trip_across_the_legal_range() {
        let boundaries = [
            0,
            1,
            0x7F,
            0x80,
            0x3FFF,
            0x4000,
            0x001F_FFFF,
            0x0020_0000,
            0x0FFF_FFFF,
        ];
        for value in boundaries {
            let encoded = encode_vlv(value);
            let (decoded, consumed) = decode(&encoded).unwrap();
            assert_eq!(decoded, value);
            assert_eq!(consumed, encoded.len());
        }
        // a stride across the rest of the range
        for value in (0..=0x0FFF_FFFFu32).step_by(0x0002_4924) {
            let encoded = encode_vlv(value);
            let (decoded, consumed) = decode(&encoded).unwrap();
            assert_eq!(decoded, value);
            assert_eq!(consumed, encoded.len());
        }
    }

    #[test]
    fn four_continuation_bytes_are_malformed() {
        let err = decode(&[0x80, 0x80, 0x80, 0x80]).unwrap_err();
        assert!(matches!(err.kind(), DecodeErrorKind::MalformedVlv));
    }

    #[test]
    fn truncated_before_terminator() {
        let err = decode(&[0x81, 0x80]).unwrap_err();
        assert!(err.is_truncated());
    }
}
