#![doc = r#"
Decode Standard MIDI Files (SMF) into traversable event lists.

`midilist` reads the binary `.mid` format (the file header chunk, then
one event stream per track chunk) into owned, typed events. Channel
voice messages, tempo changes, and SMPTE offsets are retained; every
other meta type and all system-exclusive data are skipped without
desynchronizing the stream. The decoder understands running status, so
files that elide repeated status bytes decode like any other.

Playback is out of scope: this crate produces the event lists and the
tick/tempo conversion factors, and a scheduler downstream decides what
to do with them.

# Example

```rust
use midilist::prelude::*;

# fn main() -> Result<(), DecodeError> {
// A one-track file: note on, note off, end of track.
let bytes = [
    0x4D, 0x54, 0x68, 0x64, 0x00, 0x00, 0x00, 0x06, // "MThd", length 6
    0x00, 0x00, 0x00, 0x01, 0x00, 0x60,             // format 0, 1 track, 96 tpqn
    0x4D, 0x54, 0x72, 0x6B, 0x00, 0x00, 0x00, 0x0C, // "MTrk", length 12
    0x00, 0x90, 0x3C, 0x64,                         // note on, middle C
    0x60, 0x80, 0x3C, 0x40,                         // note off after 96 ticks
    0x00, 0xFF, 0x2F, 0x00,                         // end of track
];

let mut file = MidiFile::new(&bytes[..])?;
assert_eq!(file.header().num_tracks(), 1);

let track = file.next_track()?;
assert_eq!(track.events().len(), 3);
# Ok(())
# }
```
"#]
#![warn(missing_docs)]

pub mod event;
pub mod file;
pub mod reader;
pub mod track;
pub mod vlv;

pub mod prelude {
    //! Flat re-export of the crate's public surface.
    pub use crate::event::*;
    pub use crate::file::*;
    pub use crate::reader::*;
    pub use crate::track::*;
    pub use crate::vlv::*;
}
