//! Event history: a ring of the last `N` events with the scroll position each
//! was left at.
//!
//! Going back moves one slot without writing anything. With `N = 2` only the
//! previous event can be returned to; older events are overwritten.

use crate::events::Event;

/// Depth of the history kept by the game.
pub const HISTORY_DEPTH: usize = 2;

#[derive(Debug, Clone)]
pub struct EventHistory<const N: usize> {
    events: [Event; N],
    scroll: [usize; N],
    pos: usize,
}

impl<const N: usize> Default for EventHistory<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> EventHistory<N> {
    pub fn new() -> Self {
        Self {
            events: [Event::default(); N],
            scroll: [0; N],
            pos: 0,
        }
    }

    /// Forget everything and make `first` the current event, as if advancing
    /// to it from an empty slot.
    pub fn reset(&mut self, first: Event) {
        self.events = [Event::default(); N];
        self.scroll = [0; N];
        self.pos = 0;
        self.advance(first, 0);
    }

    /// Move to `event`, remembering `current_scroll` for the event being left.
    pub fn advance(&mut self, event: Event, current_scroll: usize) {
        self.scroll[self.pos] = current_scroll;
        self.pos = (self.pos + 1) % N;
        self.events[self.pos] = event;
        self.scroll[self.pos] = 0;
    }

    /// Step back one slot. The event and scroll found there are restored as stored.
    pub fn go_back(&mut self) {
        self.pos = (self.pos + N - 1) % N;
    }

    pub fn current(&self) -> &Event {
        &self.events[self.pos]
    }

    /// Replace the current event with a revised copy of itself.
    pub fn revise_current(&mut self, event: Event) {
        self.events[self.pos] = event;
    }

    /// Scroll position saved for the current event.
    pub fn saved_scroll(&self) -> usize {
        self.scroll[self.pos]
    }

    /// Index of the current slot.
    pub fn depth(&self) -> usize {
        self.pos
    }

    pub const fn capacity(&self) -> usize {
        N
    }
}
