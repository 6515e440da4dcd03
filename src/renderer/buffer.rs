//! FrameBuffer and drawing primitives.
//!
//! The FrameBuffer is a 2D grid of Cells that represents what a terminal host
//! should display. Drawing outside the buffer is silently clipped.

use crate::layout::CellRect;
use crate::theme::{CellBorder, CellStyle};
use crate::types::{Attr, Cell, Rgba, Sides};

/// A 2D buffer of terminal cells.
///
/// Uses flat storage with row-major indexing: `index = y * width + x`
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    /// Create a new buffer filled with default cells.
    pub fn new(width: u16, height: u16) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            cells: vec![Cell::default(); size],
        }
    }

    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> usize {
        y as usize * self.width as usize + x as usize
    }

    #[inline]
    pub fn in_bounds(&self, x: u16, y: u16) -> bool {
        x < self.width && y < self.height
    }

    /// Get a cell reference (returns None if out of bounds).
    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if self.in_bounds(x, y) {
            Some(&self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    /// Iterate over cells with their coordinates.
    pub fn iter(&self) -> impl Iterator<Item = (u16, u16, &Cell)> {
        self.cells.iter().enumerate().map(move |(i, cell)| {
            let x = (i % self.width as usize) as u16;
            let y = (i / self.width as usize) as u16;
            (x, y, cell)
        })
    }

    /// Clear the entire buffer to default cells.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    /// Draw a character, keeping the existing background when `bg` is None.
    pub fn draw_char(&mut self, x: u16, y: u16, char: char, fg: Rgba, bg: Option<Rgba>, attrs: Attr) {
        if !self.in_bounds(x, y) {
            return;
        }
        let idx = self.index(x, y);
        let cell = &mut self.cells[idx];
        cell.char = char;
        cell.fg = fg;
        if let Some(bg) = bg {
            cell.bg = bg;
        }
        cell.attrs = attrs;
    }

    /// Fill a rectangle's background.
    pub fn fill_rect(&mut self, rect: CellRect, bg: Rgba) {
        for y in rect.y..rect.y.saturating_add(rect.height) {
            for x in rect.x..rect.x.saturating_add(rect.width) {
                if self.in_bounds(x, y) {
                    let idx = self.index(x, y);
                    self.cells[idx].bg = bg;
                }
            }
        }
    }

    /// Draw the bordered edges of a cell.
    ///
    /// Corners are drawn only where two bordered edges meet; a lone edge
    /// runs the full length of the rectangle.
    pub fn draw_cell_border(&mut self, rect: CellRect, border: &CellBorder) {
        if rect.width < 2 || rect.height < 2 || border.sides.is_empty() {
            return;
        }

        let (horiz, vert, tl, tr, br, bl) = border.line.chars();
        let color = border.color;
        let x2 = rect.x.saturating_add(rect.width - 1);
        let y2 = rect.y.saturating_add(rect.height - 1);

        if border.sides.contains(Sides::TOP) {
            for col in rect.x..=x2 {
                self.draw_char(col, rect.y, horiz, color, None, Attr::NONE);
            }
        }
        if border.sides.contains(Sides::BOTTOM) {
            for col in rect.x..=x2 {
                self.draw_char(col, y2, horiz, color, None, Attr::NONE);
            }
        }
        if border.sides.contains(Sides::LEFT) {
            for row in rect.y..=y2 {
                self.draw_char(rect.x, row, vert, color, None, Attr::NONE);
            }
        }
        if border.sides.contains(Sides::RIGHT) {
            for row in rect.y..=y2 {
                self.draw_char(x2, row, vert, color, None, Attr::NONE);
            }
        }

        let corners = [
            (Sides::TOP | Sides::LEFT, rect.x, rect.y, tl),
            (Sides::TOP | Sides::RIGHT, x2, rect.y, tr),
            (Sides::BOTTOM | Sides::RIGHT, x2, y2, br),
            (Sides::BOTTOM | Sides::LEFT, rect.x, y2, bl),
        ];
        for (needs, x, y, ch) in corners {
            if border.sides.contains(needs) {
                self.draw_char(x, y, ch, color, None, Attr::NONE);
            }
        }
    }

    /// Draw one code cell: background, border, then the glyph centered.
    pub fn draw_code_cell(&mut self, rect: CellRect, style: &CellStyle, glyph: Option<char>) {
        if !style.bg.is_terminal_default() {
            self.fill_rect(rect, style.bg);
        }
        if let Some(border) = &style.border {
            self.draw_cell_border(rect, border);
        }
        if let Some(ch) = glyph {
            let x = rect.x.saturating_add(rect.width / 2);
            let y = rect.y.saturating_add(rect.height / 2);
            self.draw_char(x, y, ch, style.fg, None, style.attrs);
        }
    }

    /// Text of one row (for tests and plain-text hosts).
    pub fn row_text(&self, y: u16) -> String {
        if y >= self.height {
            return String::new();
        }
        (0..self.width)
            .map(|x| self.cells[self.index(x, y)].char)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{variant_border, CellVariant};
    use crate::types::{BorderStyle, Spacing};

    fn rect() -> CellRect {
        CellRect { x: 0, y: 0, width: 3, height: 3 }
    }

    fn border(variant: CellVariant) -> CellBorder {
        variant_border(variant, 1, 3, Rgba::WHITE).unwrap()
    }

    #[test]
    fn test_full_border() {
        let mut buffer = FrameBuffer::new(3, 3);
        buffer.draw_cell_border(rect(), &border(CellVariant::default()));
        assert_eq!(buffer.row_text(0), "╭─╮");
        assert_eq!(buffer.row_text(1), "│ │");
        assert_eq!(buffer.row_text(2), "╰─╯");
    }

    #[test]
    fn test_bottom_border_runs_full_width() {
        let mut buffer = FrameBuffer::new(3, 3);
        buffer.draw_cell_border(rect(), &border(CellVariant::BorderBottom));
        assert_eq!(buffer.row_text(0), "   ");
        assert_eq!(buffer.row_text(2), "───");
    }

    #[test]
    fn test_left_right_border() {
        let mut buffer = FrameBuffer::new(3, 3);
        buffer.draw_cell_border(rect(), &border(CellVariant::BorderLeftRight));
        assert_eq!(buffer.row_text(0), "│ │");
        assert_eq!(buffer.row_text(2), "│ │");
    }

    #[test]
    fn test_code_cell_glyph_centered() {
        let mut buffer = FrameBuffer::new(5, 3);
        let style = CellStyle {
            width: 3,
            height: 3,
            font_size: 1,
            fg: Rgba::GREEN,
            bg: Rgba::TERMINAL_DEFAULT,
            attrs: Attr::BOLD,
            border: Some(CellBorder {
                sides: Sides::all(),
                width: 1,
                radius: 0,
                color: Rgba::GRAY,
                line: BorderStyle::Single,
            }),
            margin: Spacing::ZERO,
        };
        buffer.draw_code_cell(CellRect { x: 2, y: 0, width: 3, height: 3 }, &style, Some('7'));
        assert_eq!(buffer.row_text(1), "  │7│");
        let glyph = buffer.get(3, 1).unwrap();
        assert_eq!(glyph.fg, Rgba::GREEN);
        assert_eq!(glyph.attrs, Attr::BOLD);
        assert_eq!(buffer.get(2, 0).unwrap().fg, Rgba::GRAY);
    }

    #[test]
    fn test_rect_at_coordinate_limit_is_clipped() {
        let mut buffer = FrameBuffer::new(4, 4);
        let far = CellRect { x: u16::MAX - 1, y: u16::MAX - 1, width: 3, height: 3 };
        buffer.draw_cell_border(far, &border(CellVariant::default()));
        let style = CellStyle {
            width: 3,
            height: 3,
            font_size: 1,
            fg: Rgba::WHITE,
            bg: Rgba::RED,
            attrs: Attr::NONE,
            border: Some(border(CellVariant::default())),
            margin: Spacing::ZERO,
        };
        buffer.draw_code_cell(far, &style, Some('1'));
        assert_eq!(buffer, FrameBuffer::new(4, 4));
    }

    #[test]
    fn test_drawing_is_clipped() {
        let mut buffer = FrameBuffer::new(2, 2);
        buffer.draw_cell_border(CellRect { x: 1, y: 1, width: 3, height: 3 }, &border(CellVariant::default()));
        assert_eq!(buffer.row_text(1), " ╭");
        assert!(buffer.get(5, 5).is_none());
    }
}
