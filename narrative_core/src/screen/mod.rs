//! Game Screen - one scrollable column holding the description, the menu
//! heading and the menu.
//!
//! Logical lines are numbered from the top of the description:
//!
//! ```text
//! 0                    description
//! ..
//! description_lines    heading (one spacer, or spacer/title/spacer)
//! menu_top_line        menu
//! ..
//! line_count - 1       trailing blank line
//! ```
//!
//! `top_line` is the first logical line on screen. `select_line` is a second
//! cursor that runs ahead of `top_line` once the bottom of the content is in
//! view, and decides which menu line the focus is held on.

use tower_rules::PlayerState;
use tracing::{debug, trace};

use crate::buffer::MenuLabels;
use crate::config::InputTiming;
use crate::display::{Display, Pen, ScreenGeometry};
use crate::events::Event;
use crate::input::{Button, Buttons};
use crate::menu::{ChoiceMenu, MenuSignal};
use crate::text_box::DescriptionBox;

/// How the current scroll position splits the screen rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Rows taken by the description and heading.
    pub rows_above_menu: usize,
    /// Rows left for the menu.
    pub remaining_lines: usize,
    /// First menu line shown (0-based).
    pub start_on_line: usize,
}

#[derive(Debug, Clone)]
pub struct GameScreen {
    geometry: ScreenGeometry,
    description: DescriptionBox,
    menu: ChoiceMenu,
    menu_title: Option<&'static str>,

    screen_height: usize,
    line_count: usize,
    menu_top_line: usize,
    top_line: usize,
    top_line_limit: usize,
    select_line: usize,
    select_line_limit: usize,

    scroll_delay: u8,
    scrolled_up: bool,
    scrolled_down: bool,
}

impl GameScreen {
    pub fn new(geometry: ScreenGeometry, timing: InputTiming) -> Self {
        let width = geometry.width_cells();
        Self {
            geometry,
            description: DescriptionBox::new(width),
            menu: ChoiceMenu::new(width, timing.menu_repeat_delay),
            menu_title: None,
            screen_height: geometry.height_cells(),
            line_count: 0,
            menu_top_line: 0,
            top_line: 0,
            top_line_limit: 0,
            select_line: 0,
            select_line_limit: 0,
            scroll_delay: timing.scroll_repeat_delay,
            scrolled_up: false,
            scrolled_down: false,
        }
    }

    /// Show the description of `event`, scrolled to the top.
    pub fn load_event(&mut self, event: &Event, player: &PlayerState) {
        self.top_line = 0;
        self.select_line = 0;
        self.description.load_event(event, player);
        self.calculate_line_count();
    }

    /// Replace the menu and its heading, keeping the scroll position where possible.
    pub fn load_menu(&mut self, title: Option<&'static str>, labels: &MenuLabels) {
        self.menu_title = title;
        self.menu.load(labels);
        self.recalculate_line_count();
    }

    pub fn recalculate_line_count(&mut self) {
        self.calculate_line_count();
        self.set_scroll_position(self.top_line);
    }

    pub fn scroll_position(&self) -> usize {
        self.top_line
    }

    /// Move both cursors to `position`, clamped to the content.
    pub fn set_scroll_position(&mut self, position: usize) {
        self.top_line = position;
        self.select_line = position;
        self.check_and_correct_scroll();
    }

    pub fn geometry(&self) -> ScreenGeometry {
        self.geometry
    }

    pub fn description(&self) -> &DescriptionBox {
        &self.description
    }

    pub fn menu(&self) -> &ChoiceMenu {
        &self.menu
    }

    pub fn menu_title(&self) -> Option<&'static str> {
        self.menu_title
    }

    pub fn screen_height(&self) -> usize {
        self.screen_height
    }

    pub fn line_count(&self) -> usize {
        self.line_count
    }

    pub fn menu_top_line(&self) -> usize {
        self.menu_top_line
    }

    pub fn top_line(&self) -> usize {
        self.top_line
    }

    pub fn top_line_limit(&self) -> usize {
        self.top_line_limit
    }

    pub fn select_line(&self) -> usize {
        self.select_line
    }

    pub fn select_line_limit(&self) -> usize {
        self.select_line_limit
    }

    fn heading_line_count(&self) -> usize {
        match self.menu_title {
            Some(_) => 3,
            None => 1,
        }
    }

    fn calculate_line_count(&mut self) {
        let description_lines = self.description.line_count();
        let menu_lines = self.menu.line_count();

        self.menu_top_line = description_lines + self.heading_line_count();
        self.line_count = self.menu_top_line + menu_lines + 1;
        self.top_line_limit = self.line_count.saturating_sub(self.screen_height);

        // keeps the last menu line reachable without scrolling past it
        let adjust = match menu_lines {
            0..=2 => 0,
            3..=4 => menu_lines - 2,
            _ => 3,
        };

        self.select_line_limit = self.top_line_limit.min(self.menu_top_line)
            + (menu_lines.saturating_sub(1)).saturating_sub(adjust);
    }

    fn check_and_correct_scroll(&mut self) {
        if self.screen_height >= self.line_count {
            self.top_line = 0;
            self.select_line = 0;
            return;
        }

        if self.top_line > self.top_line_limit {
            self.top_line = self.top_line_limit;
            self.select_line = self.top_line_limit;
        }

        // screens shorter than the menu can put the selection limit below the top limit
        if self.select_line > self.select_line_limit {
            self.select_line = self.select_line_limit;
            self.top_line = self.top_line.min(self.select_line_limit);
        }
    }

    pub fn scroll_down(&mut self) {
        if self.select_line < self.select_line_limit {
            if self.select_line < self.top_line_limit {
                self.top_line = self.select_line + 1;
            }
            self.select_line += 1;
        }
    }

    pub fn scroll_up(&mut self) {
        if self.select_line > 0 {
            if self.select_line <= self.top_line_limit {
                self.top_line = self.select_line - 1;
            }
            self.select_line -= 1;
        }
    }

    /// Bring the menu into view from a position where none of it shows.
    fn jump_to_menu(&mut self) {
        let target = if self.top_line_limit < self.menu_top_line {
            self.top_line_limit
        } else {
            self.menu_top_line.saturating_sub(3)
        };
        debug!(from = self.top_line, to = target, "jump to menu");
        self.top_line = target;
        self.select_line = target;
    }

    pub fn viewport(&self) -> Viewport {
        let rows_above_menu = if self.top_line < self.menu_top_line {
            self.screen_height.min(self.menu_top_line - self.top_line)
        } else {
            0
        };

        Viewport {
            rows_above_menu,
            remaining_lines: self.screen_height - rows_above_menu,
            start_on_line: self.top_line.saturating_sub(self.menu_top_line),
        }
    }

    /// The single 1-based menu line the focus is held on.
    fn selection_line(&self, viewport: &Viewport) -> usize {
        let mut line = viewport.start_on_line + 1;

        if self.select_line >= self.top_line_limit {
            line = if self.top_line_limit > self.menu_top_line {
                self.select_line.saturating_sub(self.menu_top_line) + 1
            } else {
                self.select_line - self.top_line_limit + 1
            };
        }

        if viewport.remaining_lines >= 4 {
            line += viewport.remaining_lines - 3;
        }

        line
    }

    /// Apply this frame's input: scrolling, then menu movement and confirmation.
    ///
    /// A signal is returned as soon as the menu produces one; the caller is
    /// expected to reconfigure the screen before the next render.
    pub fn update<B: Buttons + ?Sized>(&mut self, input: &B) -> Option<MenuSignal> {
        self.scrolled_down = input.fired(Button::Down, self.scroll_delay);
        if self.scrolled_down {
            self.scroll_down();
        }
        self.scrolled_up = input.fired(Button::Up, self.scroll_delay);
        if self.scrolled_up {
            self.scroll_up();
        }
        if self.scrolled_down || self.scrolled_up {
            trace!(top = self.top_line, select = self.select_line, "scroll");
        }

        let viewport = self.viewport();
        if viewport.remaining_lines > 0 {
            if let Some(signal) = self.menu.process_input(input) {
                return Some(signal);
            }

            let line = self.selection_line(&viewport);
            self.menu.set_selection_window(line, line);

            // with one menu row showing, one step is not enough to see the next line
            if viewport.remaining_lines == 1 {
                if self.scrolled_down {
                    self.scroll_down();
                } else if self.scrolled_up {
                    self.scroll_up();
                }
            }
        } else if self.top_line + self.screen_height <= self.menu_top_line
            && (input.pressed(Button::A) || input.pressed(Button::B))
        {
            self.jump_to_menu();
        }

        None
    }

    pub fn render<D: Display + ?Sized>(&mut self, display: &mut D) {
        let viewport = self.viewport();
        let mut pen = Pen::new(display, self.geometry);

        self.description
            .render_window(&mut pen, self.top_line, self.screen_height);
        self.render_heading(&mut pen);

        if viewport.remaining_lines > 0 {
            let line = self.selection_line(&viewport);
            self.menu.set_selection_window(line, line);
            self.menu
                .render_window(&mut pen, viewport.start_on_line, viewport.remaining_lines);
        }
    }

    fn render_heading<D: Display + ?Sized>(&self, pen: &mut Pen<'_, D>) {
        let top = self.top_line;
        let menu_top = self.menu_top_line;

        match self.menu_title {
            None => {
                if top < menu_top {
                    spacer(pen);
                }
            }
            Some(title) => {
                if top + 2 < menu_top {
                    spacer(pen);
                }
                if top + 1 < menu_top && pen.is_on_screen() {
                    pen.println(title);
                }
                if top < menu_top {
                    spacer(pen);
                }
            }
        }
    }
}

fn spacer<D: Display + ?Sized>(pen: &mut Pen<'_, D>) {
    if pen.is_on_screen() {
        pen.newline();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::TextGrid;
    use crate::input::ButtonState;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const HALL: &str = "A red carpet leads between the entrance door and stairs that lead up and down.";

    fn screen_with(text: &'static str, title: Option<&'static str>, labels: &[&str]) -> GameScreen {
        screen_on(ScreenGeometry::default(), text, title, labels)
    }

    fn screen_on(
        geometry: ScreenGeometry,
        text: &'static str,
        title: Option<&'static str>,
        labels: &[&str],
    ) -> GameScreen {
        let mut screen = GameScreen::new(geometry, InputTiming::default());
        screen.load_event(&Event::narration(text), &PlayerState::new());
        screen.load_menu(title, &MenuLabels::from_list(labels));
        screen
    }

    fn rendered(screen: &mut GameScreen) -> TextGrid {
        let mut grid = TextGrid::new(screen.geometry());
        screen.render(&mut grid);
        grid
    }

    #[test]
    fn test_line_bookkeeping() {
        let screen = screen_with(HALL, Some("Select action"), &["Look", "Take", "Use", "Item"]);

        assert_eq!(screen.menu_top_line(), 10);
        assert_eq!(screen.line_count(), 13);
        assert_eq!(screen.top_line_limit(), 7);
        assert_eq!(screen.select_line_limit(), 8);
    }

    #[test]
    fn test_select_limit_adjustment_for_long_menus() {
        let labels = ["Window", "Angel Statue", "Stairs up", "Stairs down", "Curtain"];
        let screen = screen_with(HALL, Some("Which object?"), &labels);

        // one label per line except "Stairs down"/"Curtain" which do not fit together
        assert_eq!(screen.menu().line_count(), 5);
        assert_eq!(screen.line_count(), 16);
        assert_eq!(screen.top_line_limit(), 10);
        assert_eq!(screen.select_line_limit(), 10 + 4 - 3);
    }

    #[test]
    fn test_short_content_pins_scroll() {
        let mut screen = screen_with("Nothing happens.", None, &["Continue"]);
        assert_eq!(screen.line_count(), 5);

        screen.set_scroll_position(3);
        assert_eq!(screen.scroll_position(), 0);
        assert_eq!(screen.select_line(), 0);
    }

    #[test]
    fn test_scroll_position_clamped_to_limit() {
        let mut screen = screen_with(HALL, Some("Select action"), &["Look", "Take", "Use", "Item"]);
        screen.set_scroll_position(50);
        assert_eq!(screen.scroll_position(), 7);
        assert_eq!(screen.select_line(), 7);
    }

    #[test]
    fn test_render_top_of_description() {
        let mut screen = screen_with(HALL, Some("Select action"), &["Look", "Take", "Use", "Item"]);
        let grid = rendered(&mut screen);

        assert_eq!(grid.row(0).trim_end(), "A red carpet");
        assert_eq!(grid.row(5).trim_end(), "lead up and");
        assert!(grid.focus_rects().is_empty());
        assert_eq!(screen.viewport().remaining_lines, 0);
    }

    #[test]
    fn test_confirm_jumps_to_unreachable_menu() {
        let mut screen = screen_with(HALL, Some("Select action"), &["Look", "Take", "Use", "Item"]);

        assert_eq!(screen.update(&ButtonState::tap(Button::A)), None);
        assert_eq!(screen.scroll_position(), 7);

        let grid = rendered(&mut screen);
        assert_eq!(grid.row(0).trim_end(), "");
        assert_eq!(grid.row(1).trim_end(), "Select action");
        assert_eq!(grid.row(3).trim_end(), " Look Take");
        assert_eq!(grid.row(4).trim_end(), " Use Item");
        assert_eq!(grid.focus_rects().len(), 1);
        assert_eq!(screen.menu().selected(), 0);
    }

    #[test]
    fn test_scrolling_past_limit_moves_focus_down() {
        let mut screen = screen_with(HALL, Some("Select action"), &["Look", "Take", "Use", "Item"]);
        screen.set_scroll_position(7);

        screen.update(&ButtonState::tap(Button::Down));
        assert_eq!(screen.scroll_position(), 7);
        assert_eq!(screen.select_line(), 8);

        rendered(&mut screen);
        assert_eq!(screen.menu().selected(), 2);

        // already at the selection limit
        screen.update(&ButtonState::tap(Button::Down));
        assert_eq!(screen.select_line(), 8);

        screen.update(&ButtonState::tap(Button::Up));
        assert_eq!(screen.select_line(), 7);
        rendered(&mut screen);
        assert_eq!(screen.menu().selected(), 1);
    }

    #[test]
    fn test_menu_signal_passes_through() {
        let mut screen = screen_with("Nothing happens.", None, &["Continue"]);
        assert_eq!(
            screen.update(&ButtonState::tap(Button::A)),
            Some(MenuSignal::Selected(0))
        );
        assert_eq!(
            screen.update(&ButtonState::tap(Button::B)),
            Some(MenuSignal::Cancelled)
        );
    }

    #[test]
    fn test_render_without_title() {
        let mut screen = screen_with("Nothing happens.", None, &["Continue"]);
        let grid = rendered(&mut screen);

        assert_eq!(grid.row(0).trim_end(), "Nothing");
        assert_eq!(grid.row(1).trim_end(), "happens.");
        assert_eq!(grid.row(2).trim_end(), "");
        assert_eq!(grid.row(3).trim_end(), " Continue");
    }

    fn cells(columns: usize, rows: usize) -> ScreenGeometry {
        ScreenGeometry {
            width_px: (columns * 6) as u16,
            height_px: (rows * 8) as u16,
            font_width: 6,
            font_height: 8,
        }
    }

    fn assert_scroll_invariants(screen: &GameScreen) {
        let top = screen.top_line();
        let select = screen.select_line();
        assert!(top <= screen.top_line_limit(), "top {top} past limit");
        assert!(top <= select, "select {select} above top {top}");
        assert!(
            select <= screen.select_line_limit(),
            "select {select} past limit {}",
            screen.select_line_limit()
        );
    }

    #[test]
    fn test_short_screen_keeps_selection_within_limit() {
        let labels = ["Angel Statue", "Stairs down", "Silver Sword", "Key Machine", "Stairs up"];
        let mut screen = screen_on(cells(14, 4), HALL, Some("Which object?"), &labels);

        assert_eq!(screen.menu().line_count(), 5);
        assert_eq!(screen.top_line_limit(), 12);
        assert_eq!(screen.select_line_limit(), 11);

        screen.set_scroll_position(12);
        assert_eq!(screen.scroll_position(), 11);
        assert_eq!(screen.select_line(), 11);
        assert_scroll_invariants(&screen);

        // a restored position survives a menu switch within the limits
        screen.load_menu(Some("Select action"), &MenuLabels::from_list(&["Look", "Take", "Use", "Item"]));
        assert_scroll_invariants(&screen);
        rendered(&mut screen);
    }

    #[test]
    fn test_scroll_invariants_hold_under_random_input() {
        let texts = [
            "",
            "Nothing happens.",
            HALL,
            "The stairs lead down into the dark. You hear something moving around below you. The air is cold and damp and smells of old stone and older water.",
        ];
        let label_pool = [
            "Look", "Take", "Use", "Item", "Window", "Angel Statue", "Stairs up", "Stairs down",
            "Curtain", "Rope",
        ];
        let titles = [None, Some("Which object?")];
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..300 {
            let geometry = cells(rng.gen_range(2..=20), rng.gen_range(1..=8));
            let text = texts[rng.gen_range(0..texts.len())];
            let count = rng.gen_range(0..=label_pool.len());
            let mut screen = screen_on(geometry, text, titles[rng.gen_range(0..2)], &label_pool[..count]);
            assert_scroll_invariants(&screen);

            for _ in 0..60 {
                let mut input = ButtonState::new();
                match rng.gen_range(0..6) {
                    0 => input.update_held(&[Button::Up]),
                    1 => input.update_held(&[Button::Down]),
                    2 => input.update_held(&[Button::Right]),
                    3 => input.update_held(&[Button::A]),
                    4 => {
                        let count = rng.gen_range(0..=label_pool.len());
                        let labels = MenuLabels::from_list(&label_pool[..count]);
                        screen.load_menu(titles[rng.gen_range(0..2)], &labels);
                        assert_scroll_invariants(&screen);
                    }
                    _ => input.update_held(&[]),
                }
                screen.update(&input);
                assert_scroll_invariants(&screen);
                rendered(&mut screen);

                assert!(screen.menu().is_empty() || screen.menu().selected() < screen.menu().len());
            }
        }
    }
}
