//! A character-grid display for running the engine without a device.
//!
//! Text lands in the cell under its pixel position; characters past the right
//! edge are clipped. Focus rectangles are recorded rather than drawn.

use std::fmt;

use crate::display::{Cursor, Display, Rect, ScreenGeometry};

#[derive(Debug, Clone)]
pub struct TextGrid {
    geometry: ScreenGeometry,
    cells: Vec<Vec<char>>,
    focus: Vec<Rect>,
}

impl TextGrid {
    pub fn new(geometry: ScreenGeometry) -> Self {
        let row = vec![' '; geometry.width_cells()];
        Self {
            geometry,
            cells: vec![row; geometry.height_cells()],
            focus: Vec::new(),
        }
    }

    /// Blank every cell and forget recorded rectangles.
    pub fn clear(&mut self) {
        for row in &mut self.cells {
            row.fill(' ');
        }
        self.focus.clear();
    }

    /// Row `index` as a string, padded to the full width. Out of range rows are empty.
    pub fn row(&self, index: usize) -> String {
        self.cells
            .get(index)
            .map(|row| row.iter().collect())
            .unwrap_or_default()
    }

    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        self.cells.iter().map(|row| row.iter().collect())
    }

    pub fn focus_rects(&self) -> &[Rect] {
        &self.focus
    }

    /// Row and column of the label outlined by the first focus rectangle.
    pub fn focus_cell(&self) -> Option<(usize, usize)> {
        let rect = self.focus.first()?;
        let fw = self.geometry.font_width as i32;
        let fh = self.geometry.font_height as i32;
        if fw == 0 || fh == 0 {
            return None;
        }
        let column = (rect.x + fw / 2) / fw;
        let row = (rect.y + 2) / fh;
        Some((row.max(0) as usize, column.max(0) as usize))
    }
}

impl Display for TextGrid {
    fn geometry(&self) -> ScreenGeometry {
        self.geometry
    }

    fn draw_text(&mut self, at: Cursor, text: &str) {
        let fw = self.geometry.font_width as i32;
        let fh = self.geometry.font_height as i32;
        if fw == 0 || fh == 0 || at.x < 0 || at.y < 0 {
            return;
        }

        let Some(row) = self.cells.get_mut((at.y / fh) as usize) else {
            return;
        };
        let start = (at.x / fw) as usize;
        for (cell, ch) in row.iter_mut().skip(start).zip(text.chars()) {
            *cell = ch;
        }
    }

    fn draw_round_rect(&mut self, rect: Rect, _radius: u8) {
        self.focus.push(rect);
    }
}

impl fmt::Display for TextGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let border: String = "-".repeat(self.geometry.width_cells());
        writeln!(f, "+{border}+")?;
        for row in self.rows() {
            writeln!(f, "|{row}|")?;
        }
        write!(f, "+{border}+")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_lands_in_cells() {
        let geometry = ScreenGeometry::default();
        let mut grid = TextGrid::new(geometry);

        grid.draw_text(Cursor { x: 6, y: 8 }, "Look");
        assert_eq!(grid.row(1), " Look         ");
        assert_eq!(grid.row(0).trim_end(), "");
    }

    #[test]
    fn test_text_is_clipped() {
        let geometry = ScreenGeometry::default();
        let mut grid = TextGrid::new(geometry);

        grid.draw_text(Cursor { x: 60, y: 0 }, "Stairs down");
        grid.draw_text(Cursor { x: 0, y: 48 }, "below");

        assert_eq!(grid.row(0), "          Stai");
        assert_eq!(grid.rows().count(), 6);
    }

    #[test]
    fn test_focus_cell() {
        let mut grid = TextGrid::new(ScreenGeometry::default());
        grid.draw_round_rect(
            Rect {
                x: 33,
                y: 22,
                width: 30,
                height: 11,
            },
            3,
        );
        assert_eq!(grid.focus_cell(), Some((3, 6)));

        grid.clear();
        assert_eq!(grid.focus_cell(), None);
    }

    #[test]
    fn test_display_frame() {
        let grid = TextGrid::new(ScreenGeometry {
            width_px: 12,
            height_px: 8,
            ..ScreenGeometry::default()
        });
        assert_eq!(grid.to_string(), "+--+\n|  |\n+--+");
    }
}
