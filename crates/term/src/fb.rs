//! Framebuffer of styled character cells, addressed as (x, y) screen columns
//! and rows. Writes outside the buffer are dropped.

use crate::types::Color;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
}

impl From<Color> for Rgb {
    fn from(c: Color) -> Self {
        Self::new(c.r, c.g, c.b)
    }
}

/// Foreground, background and weight of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl CellStyle {
    /// Plain style: `fg` on black, normal weight.
    pub const fn plain(fg: Rgb) -> Self {
        Self {
            fg,
            bg: Rgb::BLACK,
            bold: false,
            dim: false,
        }
    }

    pub const fn bold(self) -> Self {
        Self { bold: true, ..self }
    }

    pub const fn dim(self) -> Self {
        Self { dim: true, ..self }
    }

    pub const fn on(self, bg: Rgb) -> Self {
        Self { bg, ..self }
    }

    pub fn into_cell(self, ch: char) -> Cell {
        Cell { ch, style: self }
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        Self::plain(Rgb::new(220, 220, 220))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        CellStyle::default().into_cell(' ')
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Change dimensions, reusing the allocation. Contents are unspecified
    /// afterwards; callers clear before drawing.
    pub fn resize(&mut self, width: u16, height: u16) {
        if (self.width, self.height) != (width, height) {
            self.width = width;
            self.height = height;
            self.cells
                .resize(width as usize * height as usize, Cell::default());
        }
    }

    fn offset(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| y as usize * self.width as usize + x as usize)
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.offset(x, y).map(|i| self.cells[i])
    }

    /// Cells of row `y`, empty if out of range.
    pub fn row(&self, y: u16) -> &[Cell] {
        if y >= self.height {
            return &[];
        }
        let start = y as usize * self.width as usize;
        &self.cells[start..start + self.width as usize]
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.offset(x, y) {
            self.cells[i] = cell;
        }
    }

    pub fn clear(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        self.set(x, y, style.into_cell(ch));
    }

    /// Write `text` starting at (x, y). Returns the column after the last char.
    pub fn put_str(&mut self, x: u16, y: u16, text: &str, style: CellStyle) -> u16 {
        text.chars().fold(x, |cx, ch| {
            self.put_char(cx, y, ch, style);
            cx.saturating_add(1)
        })
    }

    /// Write `value` in decimal, left-padded with zeros to `min_width` digits.
    /// Returns the column after the last digit. Does not allocate.
    pub fn put_number(&mut self, x: u16, y: u16, value: u64, min_width: usize, style: CellStyle) -> u16 {
        let mut digits = [b'0'; 20];
        let mut len = 0;
        let mut rest = value;
        while rest > 0 || len == 0 {
            digits[digits.len() - 1 - len] = b'0' + (rest % 10) as u8;
            rest /= 10;
            len += 1;
        }
        let len = len.max(min_width.min(digits.len()));

        digits[digits.len() - len..]
            .iter()
            .fold(x, |cx, &d| {
                self.put_char(cx, y, d as char, style);
                cx.saturating_add(1)
            })
    }

    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, ch: char, style: CellStyle) {
        let cell = style.into_cell(ch);
        for cy in y..y.saturating_add(h) {
            for cx in x..x.saturating_add(w) {
                self.set(cx, cy, cell);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_text(fb: &FrameBuffer, y: u16) -> String {
        fb.row(y).iter().map(|c| c.ch).collect()
    }

    #[test]
    fn put_number_writes_digits() {
        let mut fb = FrameBuffer::new(12, 1);
        let end = fb.put_number(1, 0, 40210, 0, CellStyle::default());
        assert_eq!(end, 6);
        assert_eq!(row_text(&fb, 0), " 40210      ");
    }

    #[test]
    fn put_number_zero_and_padding() {
        let mut fb = FrameBuffer::new(5, 1);
        let style = CellStyle::default();
        let x = fb.put_number(0, 0, 7, 2, style);
        let x = fb.put_str(x, 0, ":", style);
        fb.put_number(x, 0, 42, 2, style);
        assert_eq!(row_text(&fb, 0), "07:42");

        let mut fb = FrameBuffer::new(2, 1);
        assert_eq!(fb.put_number(0, 0, 0, 0, style), 1);
        assert_eq!(row_text(&fb, 0), "0 ");
    }

    #[test]
    fn put_str_clips_at_edge() {
        let mut fb = FrameBuffer::new(3, 1);
        fb.put_str(1, 0, "abc", CellStyle::default());
        assert_eq!(row_text(&fb, 0), " ab");
    }

    #[test]
    fn fill_rect_clips() {
        let mut fb = FrameBuffer::new(3, 2);
        fb.fill_rect(1, 1, 5, 5, '#', CellStyle::default());
        assert_eq!(row_text(&fb, 0), "   ");
        assert_eq!(row_text(&fb, 1), " ##");
    }

    #[test]
    fn row_out_of_range_is_empty() {
        let fb = FrameBuffer::new(3, 2);
        assert_eq!(fb.row(1).len(), 3);
        assert!(fb.row(2).is_empty());
    }
}
