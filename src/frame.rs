// Copyright (c) 2026 rezky_nightky

use crate::cell::Cell;
use crate::color::{blend, Rgba};
use crate::surface::{Font, Surface};

/// Brightest channel below which a fading glyph is dropped. Stands in for
/// the 8-bit rounding that ends trails on a real canvas.
pub const FADE_FLOOR: f32 = 16.0;

/// Terminal columns used to show one glyph cell. Two, so wide glyphs fit.
pub const TERM_COLS_PER_CELL: u16 = 2;

/// Pixel canvas emulated on a grid of square glyph cells.
#[derive(Clone, Debug)]
pub struct Frame {
    pub cols: u16,
    pub rows: u16,
    cell_px: f64,
    cells: Vec<Cell>,
}

impl Frame {
    pub fn new(cols: u16, rows: u16, cell_px: f64) -> Self {
        assert!(cell_px > 0.0, "cell size must be positive, got {}", cell_px);
        Self {
            cols,
            rows,
            cell_px,
            cells: vec![Cell::BLANK; cols as usize * rows as usize],
        }
    }

    /// Sizes a frame for a terminal of `term_cols` x `term_rows`.
    pub fn for_terminal(term_cols: u16, term_rows: u16, cell_px: f64) -> Self {
        Self::new(term_cols / TERM_COLS_PER_CELL, term_rows, cell_px)
    }

    pub fn index(&self, col: u16, row: u16) -> Option<usize> {
        if col >= self.cols || row >= self.rows {
            return None;
        }
        Some(row as usize * self.cols as usize + col as usize)
    }

    pub fn get(&self, col: u16, row: u16) -> Option<&Cell> {
        self.index(col, row).map(|i| &self.cells[i])
    }

    pub fn row(&self, row: u16) -> &[Cell] {
        let start = row as usize * self.cols as usize;
        &self.cells[start..start + self.cols as usize]
    }

    fn cell_span(&self, start_px: f64, len_px: f64, limit: u16) -> (u16, u16) {
        let lo = (start_px / self.cell_px).floor().max(0.0);
        let hi = ((start_px + len_px) / self.cell_px).ceil().max(0.0);
        let lo = lo.min(limit as f64) as u16;
        let hi = hi.min(limit as f64) as u16;
        (lo, hi)
    }
}

impl Surface for Frame {
    fn size(&self) -> (f64, f64) {
        (
            self.cols as f64 * self.cell_px,
            self.rows as f64 * self.cell_px,
        )
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Rgba) {
        if width <= 0.0 || height <= 0.0 || color.a <= 0.0 {
            return;
        }
        let (c0, c1) = self.cell_span(x, width, self.cols);
        let (r0, r1) = self.cell_span(y, height, self.rows);
        let src = color.channels();
        let alpha = color.a as f32;

        for row in r0..r1 {
            for col in c0..c1 {
                let i = row as usize * self.cols as usize + col as usize;
                let cell = &mut self.cells[i];
                if cell.is_blank() {
                    continue;
                }
                cell.shade = blend(cell.shade, src, alpha);
                if cell.brightness() < FADE_FLOOR {
                    *cell = Cell::BLANK;
                }
            }
        }
    }

    fn draw_text(&mut self, glyph: char, x: f64, y: f64, _font: Font, color: Rgba) {
        if color.a <= 0.0 || x < 0.0 {
            return;
        }
        let col = (x / self.cell_px).floor();
        let row = (y / self.cell_px).floor() - 1.0;
        if row < 0.0 || col >= self.cols as f64 || row >= self.rows as f64 {
            return;
        }
        let Some(i) = self.index(col as u16, row as u16) else {
            return;
        };
        let cell = &mut self.cells[i];
        cell.ch = glyph;
        cell.shade = blend(cell.shade, color.channels(), color.a as f32);
    }
}
