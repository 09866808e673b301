//! Text Box - word-wrapped prose shown above the menu.
//!
//! The box holds the current scene's description in a fixed buffer and renders
//! any window of its wrapped lines. Line boundaries are recomputed on every
//! call (see [`wrap`]).

pub mod wrap;

use tower_rules::PlayerState;

use crate::buffer::Description;
use crate::display::{Display, Pen};
use crate::events::Event;

/// The description block of the screen.
#[derive(Debug, Clone, Default)]
pub struct DescriptionBox {
    text: Description,
    width_in_chars: usize,
}

impl DescriptionBox {
    pub fn new(width_in_chars: usize) -> Self {
        Self {
            text: Description::new(),
            width_in_chars,
        }
    }

    /// Replace the text with the description of `event`.
    pub fn load_event(&mut self, event: &Event, player: &PlayerState) {
        self.text.clear();
        event.load_description(player, &mut self.text);
    }

    /// Replace the text directly.
    pub fn load_text(&mut self, text: &str) {
        self.text.clear();
        self.text.append(text);
    }

    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    pub fn width_in_chars(&self) -> usize {
        self.width_in_chars
    }

    /// Number of wrapped lines.
    pub fn line_count(&self) -> usize {
        wrap::count_lines(self.text.as_str(), self.width_in_chars)
    }

    /// Draw up to `line_budget` wrapped lines, starting at line `start_line`.
    ///
    /// Each drawn line ends with a newline on the pen.
    pub fn render_window<D: Display + ?Sized>(
        &self,
        pen: &mut Pen<'_, D>,
        start_line: usize,
        line_budget: usize,
    ) -> usize {
        let mut drawn = 0;
        for line in wrap::lines(self.text.as_str(), self.width_in_chars)
            .skip(start_line)
            .take(line_budget)
        {
            pen.println(line);
            drawn += 1;
        }
        drawn
    }
}
