#![doc = r#"
The decoded event model.

Every track event carries a delta-time (ticks since the previous event
in the same track) and a payload that is either a channel message or
one of the retained meta messages. The byte-level type tags become
proper enums here; payload ownership is explicit, and dropping an
[`EventList`] frees everything it holds.
"#]

mod list;
pub use list::*;

use crate::prelude::*;
use num_enum::TryFromPrimitive;

#[doc = r#"
One decoded track event.

`delta_time` is relative to the immediately preceding event in the same
track; the first event's delta is relative to the start of the track.
"#]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Event {
    delta_time: u32,
    payload: EventPayload,
}

impl Event {
    /// Create a channel event.
    pub const fn channel(delta_time: u32, event: ChannelEvent) -> Self {
        Self {
            delta_time,
            payload: EventPayload::Channel(event),
        }
    }

    /// Create a meta event.
    pub const fn meta(delta_time: u32, event: MetaEvent) -> Self {
        Self {
            delta_time,
            payload: EventPayload::Meta(event),
        }
    }

    /// Ticks since the previous event in the same track.
    pub const fn delta_time(&self) -> u32 {
        self.delta_time
    }

    /// The typed payload.
    pub const fn payload(&self) -> &EventPayload {
        &self.payload
    }

    /// True for the end-of-track marker.
    pub const fn is_end_of_track(&self) -> bool {
        matches!(self.payload, EventPayload::Meta(MetaEvent::EndOfTrack))
    }
}

/// The payload of an [`Event`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventPayload {
    /// A channel voice message.
    Channel(ChannelEvent),
    /// A retained meta message.
    Meta(MetaEvent),
}

/// A channel voice message: kind, channel, and its one or two data
/// bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChannelEvent {
    /// What the message does.
    pub kind: ChannelKind,
    /// Channel number, 0-15.
    pub channel: u8,
    /// First data byte.
    pub param1: u8,
    /// Second data byte; always 0 for the one-parameter kinds
    /// (program change, channel aftertouch).
    pub param2: u8,
}

impl ChannelEvent {
    /// For controller messages, the controller `param1` names.
    ///
    /// `None` for other kinds, or for controller numbers outside the
    /// named vocabulary.
    pub fn controller(&self) -> Option<Controller> {
        match self.kind {
            ChannelKind::Controller => Controller::try_from(self.param1).ok(),
            _ => None,
        }
    }
}

/// The meta messages the decoder retains.
///
/// Every other meta type is skipped over, not kept.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MetaEvent {
    /// The track terminator.
    EndOfTrack,
    /// Tempo in microseconds per quarter note; 24 bits on the wire,
    /// widened with a zero top byte.
    TempoChange(u32),
    /// The track's starting position in SMPTE time code.
    SmpteOffset(SmpteOffset),
}

/// Channel message kinds, by status nibble.
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum ChannelKind {
    /// Key released.
    NoteOff = 0x8,
    /// Key pressed.
    NoteOn = 0x9,
    /// Per-key pressure change.
    NoteAftertouch = 0xA,
    /// Controller value change; see [`Controller`].
    Controller = 0xB,
    /// Patch selection.
    ProgramChange = 0xC,
    /// Whole-channel pressure change.
    ChannelAftertouch = 0xD,
    /// Pitch wheel change.
    PitchBend = 0xE,
}

impl ChannelKind {
    /// True for the kinds that carry two data bytes.
    pub const fn two_parameters(&self) -> bool {
        !matches!(self, Self::ProgramChange | Self::ChannelAftertouch)
    }
}

/// Meta event types, by type byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
#[allow(missing_docs)]
pub enum MetaKind {
    SequenceNumber = 0x00,
    Text = 0x01,
    Copyright = 0x02,
    TrackName = 0x03,
    InstrumentName = 0x04,
    Lyrics = 0x05,
    Marker = 0x06,
    CuePoint = 0x07,
    ChannelPrefix = 0x20,
    EndOfTrack = 0x2F,
    TempoChange = 0x51,
    SmpteOffset = 0x54,
    TimeSignature = 0x58,
    KeySignature = 0x59,
    SequencerSpecific = 0x7F,
}

/// Named controller numbers for [`ChannelKind::Controller`] events.
///
/// Controllers 0x20-0x3F are the LSB halves of 0x00-0x1F, 0x46-0x4F
/// are sound controllers, and 0x79-0x7F are channel mode messages;
/// none of those get individual names here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
#[allow(missing_docs)]
pub enum Controller {
    BankSelect = 0x00,
    Modulation = 0x01,
    Breath = 0x02,
    Foot = 0x04,
    PortamentoTime = 0x05,
    DataEntry = 0x06,
    Volume = 0x07,
    Balance = 0x08,
    Pan = 0x0A,
    Expression = 0x0B,
    Effect1 = 0x0C,
    Effect2 = 0x0D,
    General1 = 0x10,
    General2 = 0x11,
    General3 = 0x12,
    General4 = 0x13,
    Damper = 0x40,
    Portamento = 0x41,
    Sostenuto = 0x42,
    Soft = 0x43,
    LegatoFootswitch = 0x44,
    Hold2 = 0x45,
    General5 = 0x50,
    General6 = 0x51,
    General7 = 0x52,
    General8 = 0x53,
    PortamentoControl = 0x54,
    Effect1Depth = 0x5B,
    Effect2Depth = 0x5C,
    Effect3Depth = 0x5D,
    Effect4Depth = 0x5E,
    Effect5Depth = 0x5F,
    DataIncrement = 0x60,
    DataDecrement = 0x61,
    NonRegisteredParamLsb = 0x62,
    NonRegisteredParamMsb = 0x63,
    RegisteredParamLsb = 0x64,
    RegisteredParamMsb = 0x65,
}
