//! Drawing services consumed by the engine.
//!
//! The device owns the pixels and the font. The engine only places text at a
//! cursor and outlines the focused menu label; [`Pen`] keeps track of where the
//! next piece of text goes.

use serde::{Deserialize, Serialize};

/// Screen size and font cell size, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenGeometry {
    pub width_px: u16,
    pub height_px: u16,
    pub font_width: u8,
    pub font_height: u8,
}

impl Default for ScreenGeometry {
    /// An 84x48 monochrome LCD with a 5x7 font plus one pixel of spacing.
    fn default() -> Self {
        Self {
            width_px: 84,
            height_px: 48,
            font_width: 6,
            font_height: 8,
        }
    }
}

impl ScreenGeometry {
    /// Number of character columns that fit on one line.
    pub fn width_cells(&self) -> usize {
        match self.font_width {
            0 => 0,
            w => self.width_px as usize / w as usize,
        }
    }

    /// Number of text lines that fit on the screen.
    pub fn height_cells(&self) -> usize {
        match self.font_height {
            0 => 0,
            h => self.height_px as usize / h as usize,
        }
    }
}

/// Pixel position of the top-left corner of the next character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub x: i32,
    pub y: i32,
}

/// Pixel rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

/// The drawing surface of the device.
pub trait Display {
    fn geometry(&self) -> ScreenGeometry;

    /// Draw `text` with its first character at `at`. No wrapping.
    fn draw_text(&mut self, at: Cursor, text: &str);

    /// Outline a rounded rectangle.
    fn draw_round_rect(&mut self, rect: Rect, radius: u8);

    fn screen_width_cells(&self) -> usize {
        self.geometry().width_cells()
    }

    fn screen_height_cells(&self) -> usize {
        self.geometry().height_cells()
    }
}

/// Text cursor over a [`Display`], advancing one font cell per character.
///
/// Text starting below the bottom edge is not drawn, but the cursor still moves.
pub struct Pen<'d, D: Display + ?Sized> {
    display: &'d mut D,
    geometry: ScreenGeometry,
    cursor: Cursor,
}

impl<'d, D: Display + ?Sized> Pen<'d, D> {
    /// Start at the top-left corner of the screen.
    pub fn new(display: &'d mut D, geometry: ScreenGeometry) -> Self {
        Self {
            display,
            geometry,
            cursor: Cursor::default(),
        }
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn geometry(&self) -> ScreenGeometry {
        self.geometry
    }

    pub fn is_on_screen(&self) -> bool {
        self.cursor.y < self.geometry.height_px as i32
    }

    pub fn print(&mut self, text: &str) {
        if self.is_on_screen() {
            self.display.draw_text(self.cursor, text);
        }
        self.cursor.x += text.chars().count() as i32 * self.geometry.font_width as i32;
    }

    pub fn newline(&mut self) {
        self.cursor.x = 0;
        self.cursor.y += self.geometry.font_height as i32;
    }

    pub fn println(&mut self, text: &str) {
        self.print(text);
        self.newline();
    }

    pub fn draw_round_rect(&mut self, rect: Rect, radius: u8) {
        self.display.draw_round_rect(rect, radius);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        texts: Vec<(Cursor, String)>,
    }

    impl Display for Recorder {
        fn geometry(&self) -> ScreenGeometry {
            ScreenGeometry::default()
        }

        fn draw_text(&mut self, at: Cursor, text: &str) {
            self.texts.push((at, text.to_string()));
        }

        fn draw_round_rect(&mut self, _rect: Rect, _radius: u8) {}
    }

    #[test]
    fn test_default_geometry_cells() {
        let geometry = ScreenGeometry::default();
        assert_eq!(geometry.width_cells(), 14);
        assert_eq!(geometry.height_cells(), 6);
    }

    #[test]
    fn test_zero_font_has_no_cells() {
        let geometry = ScreenGeometry {
            font_width: 0,
            font_height: 0,
            ..Default::default()
        };
        assert_eq!(geometry.width_cells(), 0);
        assert_eq!(geometry.height_cells(), 0);
    }

    #[test]
    fn test_pen_advances_by_cells() {
        let mut display = Recorder::default();
        let geometry = display.geometry();
        let mut pen = Pen::new(&mut display, geometry);

        pen.print(" ");
        pen.print("Look");
        assert_eq!(pen.cursor(), Cursor { x: 30, y: 0 });

        pen.println("!");
        assert_eq!(pen.cursor(), Cursor { x: 0, y: 8 });

        assert_eq!(display.texts[1], (Cursor { x: 6, y: 0 }, "Look".to_string()));
    }

    #[test]
    fn test_pen_skips_text_below_screen() {
        let mut display = Recorder::default();
        let geometry = display.geometry();
        let mut pen = Pen::new(&mut display, geometry);

        for _ in 0..geometry.height_cells() {
            pen.newline();
        }
        assert!(!pen.is_on_screen());
        pen.print("hidden");

        assert!(display.texts.is_empty());
    }
}
