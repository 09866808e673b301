//! Choice Menu - short labels packed onto lines with one focused entry.
//!
//! Labels are never split. Every line starts with a one-column margin and each
//! label takes its length plus one separator column, so a line holds as many
//! labels as fit in `1 + sum(len + 1) <= width`.
//!
//! The menu knows nothing about what is drawn above it. The screen passes in a
//! window of menu lines the focus must stay on, and the menu nudges the
//! selection while it renders.

use std::ops::Range;

use crate::buffer::MenuLabels;
use crate::display::{Display, Pen, Rect};
use crate::input::{Button, Buttons};

const MENU_SPACE: &str = " ";
const FOCUS_RADIUS: u8 = 3;

/// What the player did with the menu this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuSignal {
    /// Confirm was pressed on the entry at this index.
    Selected(usize),
    /// Cancel was pressed.
    Cancelled,
}

/// Horizontal menu of labels wrapped over several lines.
#[derive(Debug, Clone)]
pub struct ChoiceMenu {
    labels: MenuLabels,
    selected: usize,
    width_in_chars: usize,
    repeat_delay: u8,
    /// 1-based menu line range the selected label must stay within.
    min_line_for_selection: usize,
    max_line_for_selection: usize,
}

impl ChoiceMenu {
    pub fn new(width_in_chars: usize, repeat_delay: u8) -> Self {
        Self {
            labels: MenuLabels::new(),
            selected: 0,
            width_in_chars,
            repeat_delay,
            min_line_for_selection: 0,
            max_line_for_selection: usize::MAX,
        }
    }

    /// Show a new set of labels with the first one selected.
    pub fn load(&mut self, labels: &MenuLabels) {
        self.labels = labels.clone();
        self.selected = 0;
    }

    pub fn labels(&self) -> &MenuLabels {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_label(&self) -> Option<&str> {
        self.labels.get(self.selected)
    }

    /// Restrict the focus to menu lines `min_line..=max_line` (1-based).
    pub fn set_selection_window(&mut self, min_line: usize, max_line: usize) {
        self.min_line_for_selection = min_line;
        self.max_line_for_selection = max_line;
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.labels.len() {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Move the focus with left/right, then report confirm or cancel.
    pub fn process_input<B: Buttons + ?Sized>(&mut self, input: &B) -> Option<MenuSignal> {
        if input.fired(Button::Right, self.repeat_delay) {
            self.select_next();
        } else if input.fired(Button::Left, self.repeat_delay) {
            self.select_previous();
        }

        if input.pressed(Button::A) {
            Some(MenuSignal::Selected(self.selected))
        } else if input.pressed(Button::B) {
            Some(MenuSignal::Cancelled)
        } else {
            None
        }
    }

    /// Label index ranges, one per wrapped menu line.
    pub fn lines(&self) -> MenuLines<'_> {
        MenuLines {
            labels: &self.labels,
            next: 0,
            width: self.width_in_chars,
        }
    }

    /// Number of lines the menu occupies. An empty menu still takes one.
    pub fn line_count(&self) -> usize {
        self.lines().count().max(1)
    }

    /// 1-based menu line holding the label at `index`.
    pub fn line_of(&self, index: usize) -> Option<usize> {
        self.lines()
            .position(|range| range.contains(&index))
            .map(|line| line + 1)
    }

    /// Draw up to `line_budget` menu lines starting at line `start_line` (0-based).
    ///
    /// While walking the labels, a selected label sitting above the selection
    /// window pushes the focus forward, and one sitting below it pulls the focus
    /// back by one. Only the first label of the line just past the budget is
    /// walked, and it is not drawn, so a focus that slipped onto the start of
    /// that line is pulled back into view.
    pub fn render_window<D: Display + ?Sized>(
        &mut self,
        pen: &mut Pen<'_, D>,
        start_line: usize,
        line_budget: usize,
    ) {
        let min_visible = self.min_line_for_selection as i64 - start_line as i64;
        let max_visible = self.max_line_for_selection.saturating_sub(start_line) as i64;
        let lines = MenuLines {
            labels: &self.labels,
            next: 0,
            width: self.width_in_chars,
        };

        for (offset, range) in lines.skip(start_line).enumerate() {
            let line = offset + 1;
            if line > line_budget + 1 {
                break;
            }
            let visible = line <= line_budget;
            let walked = if visible {
                range
            } else {
                range.start..range.start + 1
            };

            if visible {
                if offset > 0 {
                    pen.newline();
                }
                pen.print(MENU_SPACE);
            }

            for index in walked {
                if visible {
                    self.print_item(pen, index);
                }
                if index != self.selected {
                    continue;
                }

                if line as i64 >= min_visible {
                    if visible {
                        self.print_focus(pen, index);
                    }
                } else if self.selected + 1 < self.labels.len() {
                    self.selected += 1;
                }

                if line as i64 > max_visible {
                    self.selected = self.selected.saturating_sub(1);
                }
            }
        }
    }

    fn print_item<D: Display + ?Sized>(&self, pen: &mut Pen<'_, D>, index: usize) {
        if let Some(label) = self.labels.get(index) {
            pen.print(label);
            pen.print(MENU_SPACE);
        }
    }

    /// Outline the label just printed.
    fn print_focus<D: Display + ?Sized>(&self, pen: &mut Pen<'_, D>, index: usize) {
        let Some(label) = self.labels.get(index) else {
            return;
        };
        let geometry = pen.geometry();
        let font_width = geometry.font_width as i32;
        let cursor = pen.cursor();

        let rect_width = (label.chars().count() as i32 + 1) * font_width;
        let go_back = (rect_width + font_width).min(cursor.x);

        pen.draw_round_rect(
            Rect {
                x: cursor.x - go_back + font_width / 2,
                y: cursor.y - 2,
                width: rect_width as u32,
                height: geometry.font_height as u32 + 3,
            },
            FOCUS_RADIUS,
        );
    }
}

/// Iterator over the label ranges of each menu line.
#[derive(Debug, Clone)]
pub struct MenuLines<'a> {
    labels: &'a MenuLabels,
    next: usize,
    width: usize,
}

impl Iterator for MenuLines<'_> {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.next;
        let mut used = 1;

        while let Some(label) = self.labels.get(self.next) {
            let item_width = label.chars().count() + 1;
            if self.next > start && used + item_width > self.width {
                break;
            }
            used += item_width;
            self.next += 1;
        }

        (self.next > start).then_some(start..self.next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::ScreenGeometry;
    use crate::headless::TextGrid;
    use crate::input::ButtonState;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn menu(labels: &[&str]) -> ChoiceMenu {
        let mut menu = ChoiceMenu::new(14, 5);
        menu.load(&MenuLabels::from_list(labels));
        menu
    }

    #[test]
    fn test_action_menu_packs_two_lines() {
        let menu = menu(&["Look", "Take", "Use", "Item"]);
        let lines: Vec<_> = menu.lines().collect();

        // " Look Take " is 11 wide, "Use " would make it 15
        assert_eq!(lines, vec![0..2, 2..4]);
        assert_eq!(menu.line_count(), 2);
        assert_eq!(menu.line_of(3), Some(2));
    }

    #[test]
    fn test_empty_menu_takes_one_line() {
        let menu = menu(&[]);
        assert_eq!(menu.lines().count(), 0);
        assert_eq!(menu.line_count(), 1);
    }

    #[test]
    fn test_wide_first_label_is_not_split() {
        let mut menu = ChoiceMenu::new(6, 5);
        menu.load(&MenuLabels::from_list(&["Stairs down", "Lamp"]));
        let lines: Vec<_> = menu.lines().collect();
        assert_eq!(lines, vec![0..1, 1..2]);
    }

    #[test]
    fn test_selection_saturates() {
        let mut menu = menu(&["Look", "Take", "Use"]);

        menu.select_previous();
        assert_eq!(menu.selected(), 0);

        for _ in 0..10 {
            menu.select_next();
        }
        assert_eq!(menu.selected(), 2);
    }

    #[test]
    fn test_process_input_signals() {
        let mut menu = menu(&["Look", "Take", "Use", "Item"]);

        assert_eq!(menu.process_input(&ButtonState::tap(Button::Right)), None);
        assert_eq!(menu.selected(), 1);
        assert_eq!(menu.selected_label(), Some("Take"));

        assert_eq!(
            menu.process_input(&ButtonState::tap(Button::A)),
            Some(MenuSignal::Selected(1))
        );
        assert_eq!(
            menu.process_input(&ButtonState::tap(Button::B)),
            Some(MenuSignal::Cancelled)
        );

        assert_eq!(menu.process_input(&ButtonState::tap(Button::Left)), None);
        assert_eq!(menu.selected(), 0);
    }

    #[test]
    fn test_render_draws_labels_and_focus() {
        let geometry = ScreenGeometry::default();
        let mut grid = TextGrid::new(geometry);
        let mut menu = menu(&["Look", "Take", "Use", "Item"]);
        menu.select_next();

        let mut pen = Pen::new(&mut grid, geometry);
        menu.render_window(&mut pen, 0, 6);

        assert_eq!(grid.row(0).trim_end(), " Look Take");
        assert_eq!(grid.row(1).trim_end(), " Use Item");

        // "Take " ends at column 11; the outline starts half a cell into the preceding space
        let focus = grid.focus_rects();
        assert_eq!(focus.len(), 1);
        assert_eq!(
            focus[0],
            Rect {
                x: 5 * 6 + 3,
                y: -2,
                width: 5 * 6,
                height: 11,
            }
        );
    }

    #[test]
    fn test_render_window_skips_lines() {
        let geometry = ScreenGeometry::default();
        let mut grid = TextGrid::new(geometry);
        let mut menu = menu(&["Look", "Take", "Use", "Item"]);

        let mut pen = Pen::new(&mut grid, geometry);
        menu.render_window(&mut pen, 1, 6);

        assert_eq!(grid.row(0).trim_end(), " Use Item");
        assert_eq!(grid.row(1).trim_end(), "");
    }

    #[test]
    fn test_focus_above_window_advances() {
        let geometry = ScreenGeometry::default();
        let mut grid = TextGrid::new(geometry);
        let mut menu = menu(&["Look", "Take", "Use", "Item"]);
        menu.set_selection_window(2, 2);

        let mut pen = Pen::new(&mut grid, geometry);
        menu.render_window(&mut pen, 0, 6);

        // both labels on line 1 are skipped in one pass
        assert_eq!(menu.selected(), 2);
        assert_eq!(grid.focus_rects().len(), 1);
    }

    #[test]
    fn test_focus_below_window_retreats() {
        let geometry = ScreenGeometry::default();
        let mut grid = TextGrid::new(geometry);
        let mut menu = menu(&["Look", "Take", "Use", "Item"]);
        menu.select_next();
        menu.select_next();
        menu.set_selection_window(1, 1);

        let mut pen = Pen::new(&mut grid, geometry);
        menu.render_window(&mut pen, 0, 6);

        assert_eq!(menu.selected(), 1);
    }

    #[test]
    fn test_focus_just_below_budget_is_pulled_back() {
        let geometry = ScreenGeometry::default();
        let mut grid = TextGrid::new(geometry);
        let mut menu = menu(&["Look", "Take", "Use", "Item"]);
        menu.select_next();
        menu.select_next();
        menu.set_selection_window(1, 1);

        let mut pen = Pen::new(&mut grid, geometry);
        menu.render_window(&mut pen, 0, 1);

        assert_eq!(grid.row(1).trim_end(), "");
        assert_eq!(menu.selected(), 1);
        assert!(grid.focus_rects().is_empty());
    }

    #[test]
    fn test_only_first_label_past_budget_is_walked() {
        let geometry = ScreenGeometry::default();
        let mut grid = TextGrid::new(geometry);
        let mut menu = menu(&["Look", "Take", "Use", "Item"]);
        for _ in 0..3 {
            menu.select_next();
        }
        menu.set_selection_window(1, 1);

        let mut pen = Pen::new(&mut grid, geometry);
        menu.render_window(&mut pen, 0, 1);

        // "Item" is the second label of the hidden line and is left alone
        assert_eq!(menu.selected(), 3);
        assert!(grid.focus_rects().is_empty());
    }

    #[test]
    fn test_packed_lines_fit_width() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..300 {
            let width = rng.gen_range(10..24);
            let count = rng.gen_range(0..=crate::buffer::MENU_CAPACITY);
            let names: Vec<String> = (0..count)
                .map(|_| "x".repeat(rng.gen_range(1..=width.min(12) - 2)))
                .collect();
            let refs: Vec<&str> = names.iter().map(String::as_str).collect();

            let mut menu = ChoiceMenu::new(width, 5);
            menu.load(&MenuLabels::from_list(&refs));

            let mut covered = 0;
            for range in menu.lines() {
                assert_eq!(range.start, covered, "labels must not be split or skipped");
                covered = range.end;
                let used: usize = 1 + range.clone().map(|i| refs[i].len() + 1).sum::<usize>();
                assert!(used <= width, "line {range:?} is {used} wide at width {width}");
            }
            assert_eq!(covered, refs.len());
        }
    }
}
