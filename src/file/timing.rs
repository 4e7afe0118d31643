use crate::prelude::*;

#[doc = r#"
The header's time-division, decoded.

The raw 16-bit word means one of two things, distinguished by its high
bit:

- high bit 0: metrical timing, bits 0-14 are ticks per quarter note;
- high bit 1: SMPTE timing, the high byte is a negative frames-per-
  second code (-24, -25, -29, or -30) and the low byte is ticks per
  frame.
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Timing {
    /// Delta-times count ticks per quarter note.
    TicksPerQuarterNote(u16),
    /// Delta-times count ticks per SMPTE frame.
    Smpte(SmpteTiming),
}

impl Timing {
    /// Decode the raw time-division word from the file header.
    pub fn from_division(division: u16) -> Result<Self, HeaderError> {
        if division & 0x8000 == 0 {
            let tpqn = division & 0x7FFF;
            if tpqn == 0 {
                return Err(HeaderError::ZeroTickRate);
            }
            Ok(Self::TicksPerQuarterNote(tpqn))
        } else {
            let code = (division >> 8) as i8;
            let fps = SmpteFps::from_division_code(code).ok_or(HeaderError::FrameRate(code))?;
            Ok(Self::Smpte(SmpteTiming {
                fps,
                ticks_per_frame: (division & 0x00FF) as u8,
            }))
        }
    }

    /// Returns Some if the timing is defined as ticks per quarter note.
    pub const fn ticks_per_quarter_note(&self) -> Option<u16> {
        match self {
            Self::TicksPerQuarterNote(t) => Some(*t),
            Self::Smpte(_) => None,
        }
    }

    /// The factor converting delta-time ticks to microseconds, given
    /// `tempo` in microseconds per quarter note.
    ///
    /// Under metrical timing this is `tempo / ticks_per_quarter_note`;
    /// it must be recomputed after every tempo-change event observed in
    /// playback order. Under SMPTE timing tempo events do not scale
    /// ticks, the factor is the identity, and real time is
    /// `1_000_000 / (fps * ticks_per_frame)` microseconds per tick.
    pub const fn tick_duration(&self, tempo: u32) -> u32 {
        match self {
            Self::TicksPerQuarterNote(tpqn) => tempo / *tpqn as u32,
            Self::Smpte(_) => 1,
        }
    }
}

/// SMPTE time-division: frame rate plus ticks per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SmpteTiming {
    pub(crate) fps: SmpteFps,
    pub(crate) ticks_per_frame: u8,
}

impl SmpteTiming {
    /// Returns the frames per second.
    pub const fn fps(&self) -> SmpteFps {
        self.fps
    }

    /// Returns the ticks per frame.
    pub const fn ticks_per_frame(&self) -> u8 {
        self.ticks_per_frame
    }
}

/// The four frame rates MIDI can name.
///
/// `TwentyNine` is NTSC drop-frame, 30000/1001 fps; the other three are
/// exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SmpteFps {
    /// 24 frames per second, the film standard.
    TwentyFour,
    /// 25 frames per second, PAL/SECAM.
    TwentyFive,
    /// 29.97 frames per second, NTSC drop-frame.
    TwentyNine,
    /// 30 frames per second.
    Thirty,
}

/// NTSC drop-frame rate, 29.97002997... fps.
const DROP_FRAME: f64 = 30_000. / 1001.;

impl SmpteFps {
    /// Decode the 3-bit rate code from the top of an SMPTE hours byte.
    ///
    /// Codes 4 through 7 are reserved; `None` means the stream is
    /// corrupt, not that the rate is merely unusual.
    pub const fn from_rate_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::TwentyFour),
            1 => Some(Self::TwentyFive),
            2 => Some(Self::TwentyNine),
            3 => Some(Self::Thirty),
            _ => None,
        }
    }

    /// Decode the negative frames-per-second code from the high byte of
    /// an SMPTE time-division word.
    pub const fn from_division_code(code: i8) -> Option<Self> {
        match code {
            -24 => Some(Self::TwentyFour),
            -25 => Some(Self::TwentyFive),
            -29 => Some(Self::TwentyNine),
            -30 => Some(Self::Thirty),
            _ => None,
        }
    }

    /// The nominal integer rate used for division arithmetic.
    ///
    /// Drop-frame 29.97 returns 30 here.
    pub const fn as_division(&self) -> u8 {
        match self {
            Self::TwentyFour => 24,
            Self::TwentyFive => 25,
            Self::TwentyNine => 30,
            Self::Thirty => 30,
        }
    }

    /// The precise rate, fractional for drop-frame.
    pub const fn as_f64(&self) -> f64 {
        match self {
            Self::TwentyFour => 24.,
            Self::TwentyFive => 25.,
            Self::TwentyNine => DROP_FRAME,
            Self::Thirty => 30.,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn metrical_division_masks_the_high_bit() {
        let timing = Timing::from_division(0x0180).unwrap();
        assert_eq!(timing.ticks_per_quarter_note(), Some(384));
    }

    #[test]
    fn smpte_division_splits_rate_and_ticks() {
        // -25 in the high byte, 40 ticks per frame in the low byte
        let timing = Timing::from_division(0xE728).unwrap();
        let Timing::Smpte(smpte) = timing else {
            panic!("expected smpte timing");
        };
        assert_eq!(smpte.fps(), SmpteFps::TwentyFive);
        assert_eq!(smpte.ticks_per_frame(), 40);
    }

    #[test]
    fn unknown_division_codes_are_rejected() {
        assert_eq!(
            Timing::from_division(0x8328).unwrap_err(),
            HeaderError::FrameRate(-125),
        );
        assert_eq!(
            Timing::from_division(0x0000).unwrap_err(),
            HeaderError::ZeroTickRate,
        );
    }

    #[test]
    fn tick_duration_is_tempo_over_tpqn() {
        let timing = Timing::TicksPerQuarterNote(96);
        // 500_000 us per quarter note at 96 tpqn
        assert_eq!(timing.tick_duration(500_000), 5208);
    }

    #[test]
    fn tick_duration_is_identity_under_smpte() {
        let timing = Timing::from_division(0xE728).unwrap();
        assert_eq!(timing.tick_duration(500_000), 1);
    }
}
