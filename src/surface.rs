// Copyright (c) 2026 rezky_nightky

use crate::color::Rgba;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Font {
    pub size_px: f64,
    pub family: &'static str,
}

/// A pixel-addressed 2D drawing target. All calls take effect immediately.
pub trait Surface {
    /// Width and height in pixels.
    fn size(&self) -> (f64, f64);

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Rgba);

    /// `y` is the text baseline.
    fn draw_text(&mut self, glyph: char, x: f64, y: f64, font: Font, color: Rgba);
}
