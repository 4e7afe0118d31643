use crate::event::Event;

#[doc = r#"
An ordered sequence of events scoped to one track.

The decoder appends in stream order, so a decoded list ends with its
end-of-track event. Consumers building or editing streams use
[`Cursor`]s: a cursor names a position without borrowing the list, and
[`EventList::insert_after`] places a new event behind any position,
including the conceptual position before the first event.

Dropping the list releases every event and payload it owns.
"#]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EventList {
    events: Vec<Event>,
}

/// A position within an [`EventList`].
///
/// Cursors are plain indices: cheap to copy, never owning the event
/// they reference. A cursor taken before an insertion in front of it
/// no longer names the same event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor(Option<usize>);

impl Cursor {
    /// The position before the first event; inserting after it
    /// prepends.
    pub const FRONT: Self = Self(None);
}

impl EventList {
    /// Create an empty list.
    pub const fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// A cursor at the first event, or [`Cursor::FRONT`] when empty.
    pub fn start(&self) -> Cursor {
        if self.events.is_empty() {
            Cursor::FRONT
        } else {
            Cursor(Some(0))
        }
    }

    /// A cursor at the last event, or [`Cursor::FRONT`] when empty.
    pub fn end(&self) -> Cursor {
        match self.events.len() {
            0 => Cursor::FRONT,
            n => Cursor(Some(n - 1)),
        }
    }

    /// True iff no event follows the cursor.
    ///
    /// Check this before assuming [`advance`](Self::advance) made
    /// progress.
    pub fn is_end(&self, at: Cursor) -> bool {
        match at.0 {
            None => self.events.is_empty(),
            Some(i) => i + 1 >= self.events.len(),
        }
    }

    /// The cursor one event forward; a no-op at the end.
    pub fn advance(&self, at: Cursor) -> Cursor {
        match at.0 {
            None if self.events.is_empty() => at,
            None => Cursor(Some(0)),
            Some(i) if i + 1 < self.events.len() => Cursor(Some(i + 1)),
            Some(_) => at,
        }
    }

    /// The event the cursor references, if any.
    pub fn get(&self, at: Cursor) -> Option<&Event> {
        self.events.get(at.0?)
    }

    /// Insert immediately after the given position and return the new
    /// event's cursor. [`Cursor::FRONT`] inserts at the front.
    pub fn insert_after(&mut self, at: Cursor, event: Event) -> Cursor {
        let index = match at.0 {
            None => 0,
            Some(i) => (i + 1).min(self.events.len()),
        };
        self.events.insert(index, event);
        Cursor(Some(index))
    }

    /// Insert after the last event.
    pub fn append(&mut self, event: Event) -> Cursor {
        let end = self.end();
        self.insert_after(end, event)
    }

    /// The number of events in the list.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// True if the list holds no events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Iterate the events front to back.
    pub fn iter(&self) -> std::slice::Iter<'_, Event> {
        self.events.iter()
    }
}

impl<'a> IntoIterator for &'a EventList {
    type Item = &'a Event;
    type IntoIter = std::slice::Iter<'a, Event>;
    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

impl IntoIterator for EventList {
    type Item = Event;
    type IntoIter = std::vec::IntoIter<Event>;
    fn into_iter(self) -> Self::IntoIter {
        self.events.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;
    use pretty_assertions::assert_eq;

    fn note_on(delta: u32, param1: u8) -> Event {
        Event::channel(
            delta,
            ChannelEvent {
                kind: ChannelKind::NoteOn,
                channel: 0,
                param1,
                param2: 0x40,
            },
        )
    }

    #[test]
    fn empty_list_cursors_share_the_sentinel() {
        let list = EventList::new();
        assert_eq!(list.start(), list.end());
        assert!(list.is_end(list.start()));
        assert_eq!(list.advance(list.start()), list.start());
        assert_eq!(list.get(list.start()), None);
    }

    #[test]
    fn append_then_walk_visits_in_insertion_order() {
        let mut list = EventList::new();
        for i in 0..5 {
            list.append(note_on(i, i as u8));
        }

        let mut visited = Vec::new();
        let mut cursor = list.start();
        loop {
            visited.push(list.get(cursor).unwrap().delta_time());
            if list.is_end(cursor) {
                break;
            }
            cursor = list.advance(cursor);
        }
        assert_eq!(visited, [0, 1, 2, 3, 4]);
    }

    #[test]
    fn advance_stops_at_the_tail() {
        let mut list = EventList::new();
        list.append(note_on(0, 60));
        let tail = list.end();
        assert!(list.is_end(tail));
        assert_eq!(list.advance(tail), tail);
    }

    #[test]
    fn front_insertion_prepends() {
        let mut list = EventList::new();
        list.append(note_on(1, 61));
        list.insert_after(Cursor::FRONT, note_on(0, 60));

        let deltas: Vec<u32> = list.iter().map(Event::delta_time).collect();
        assert_eq!(deltas, [0, 1]);
    }

    #[test]
    fn insert_after_a_middle_cursor() {
        let mut list = EventList::new();
        list.append(note_on(0, 60));
        list.append(note_on(2, 62));
        let first = list.start();
        let inserted = list.insert_after(first, note_on(1, 61));

        assert_eq!(list.get(inserted).unwrap().delta_time(), 1);
        let deltas: Vec<u32> = list.iter().map(Event::delta_time).collect();
        assert_eq!(deltas, [0, 1, 2]);
    }

    #[test]
    fn append_equals_insert_after_end() {
        let mut list = EventList::new();
        let at = list.end();
        list.insert_after(at, note_on(0, 60));
        let at = list.end();
        list.insert_after(at, note_on(1, 61));

        let deltas: Vec<u32> = list.iter().map(Event::delta_time).collect();
        assert_eq!(deltas, [0, 1]);
    }
}
