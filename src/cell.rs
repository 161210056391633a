// Copyright (c) 2026 rezky_nightky

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cell {
    pub ch: char,
    /// Unquantised foreground shade, 0..=255 per channel.
    pub shade: [f32; 3],
}

impl Cell {
    pub const BLANK: Cell = Cell {
        ch: ' ',
        shade: [0.0; 3],
    };

    pub fn is_blank(&self) -> bool {
        self.ch == ' '
    }

    pub fn brightness(&self) -> f32 {
        self.shade[0].max(self.shade[1]).max(self.shade[2])
    }
}
