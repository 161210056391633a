// Copyright (c) 2026 rezky_nightky

use crossterm::style::Color;

use crate::runtime::ColorMode;

/// Straight (non-premultiplied) colour with an opacity in `0.0..=1.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }

    /// Parses `#RRGGBB` or `RRGGBB`.
    pub fn from_hex(s: &str) -> Result<Self, String> {
        let hex = s.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(format!("invalid hex colour: {}", s));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| format!("invalid hex colour: {}", s))
        };
        Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn channels(self) -> [f32; 3] {
        [self.r as f32, self.g as f32, self.b as f32]
    }
}

/// Source-over blend of `src` (at `alpha`) onto `dst`.
pub fn blend(dst: [f32; 3], src: [f32; 3], alpha: f32) -> [f32; 3] {
    let a = alpha.clamp(0.0, 1.0);
    [
        dst[0] + (src[0] - dst[0]) * a,
        dst[1] + (src[1] - dst[1]) * a,
        dst[2] + (src[2] - dst[2]) * a,
    ]
}

fn to_u8(v: f32) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

fn dist2(r0: u8, g0: u8, b0: u8, r1: u8, g1: u8, b1: u8) -> i32 {
    let dr = (r0 as i32) - (r1 as i32);
    let dg = (g0 as i32) - (g1 as i32);
    let db = (b0 as i32) - (b1 as i32);
    (dr * dr) + (dg * dg) + (db * db)
}

pub fn rgb_to_ansi256(r: u8, g: u8, b: u8) -> u8 {
    const CUBE_LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];

    let r6 = ((r as u16 * 5) + 127) / 255;
    let g6 = ((g as u16 * 5) + 127) / 255;
    let b6 = ((b as u16 * 5) + 127) / 255;

    let cube_idx = 16 + (36 * r6 as u8) + (6 * g6 as u8) + (b6 as u8);
    let cube_dist = dist2(
        r,
        g,
        b,
        CUBE_LEVELS[r6 as usize],
        CUBE_LEVELS[g6 as usize],
        CUBE_LEVELS[b6 as usize],
    );

    let avg = ((r as u16 + g as u16 + b as u16) / 3) as u8;
    let (gray_idx, gv) = match avg {
        0..=7 => (16, 0),
        239..=255 => (231, 255),
        _ => {
            let step = (avg - 8) / 10;
            (232 + step, 8 + 10 * step)
        }
    };
    let gray_dist = dist2(r, g, b, gv, gv, gv);

    if gray_dist < cube_dist {
        gray_idx
    } else {
        cube_idx
    }
}

fn rgb_to_color16(r: u8, g: u8, b: u8) -> Color {
    const TABLE: [(Color, (u8, u8, u8)); 16] = [
        (Color::Black, (0, 0, 0)),
        (Color::DarkGrey, (128, 128, 128)),
        (Color::Grey, (192, 192, 192)),
        (Color::White, (255, 255, 255)),
        (Color::DarkRed, (128, 0, 0)),
        (Color::Red, (255, 0, 0)),
        (Color::DarkGreen, (0, 128, 0)),
        (Color::Green, (0, 255, 0)),
        (Color::DarkBlue, (0, 0, 128)),
        (Color::Blue, (0, 0, 255)),
        (Color::DarkCyan, (0, 128, 128)),
        (Color::Cyan, (0, 255, 255)),
        (Color::DarkMagenta, (128, 0, 128)),
        (Color::Magenta, (255, 0, 255)),
        (Color::DarkYellow, (128, 128, 0)),
        (Color::Yellow, (255, 255, 0)),
    ];

    TABLE
        .iter()
        .min_by_key(|(_, (tr, tg, tb))| dist2(r, g, b, *tr, *tg, *tb))
        .map(|(c, _)| *c)
        .unwrap_or(Color::White)
}

/// Maps a blended cell shade onto what the terminal can show.
pub fn term_color(mode: ColorMode, shade: [f32; 3]) -> Color {
    let (r, g, b) = (to_u8(shade[0]), to_u8(shade[1]), to_u8(shade[2]));
    match mode {
        ColorMode::TrueColor => Color::Rgb { r, g, b },
        ColorMode::Color256 => Color::AnsiValue(rgb_to_ansi256(r, g, b)),
        ColorMode::Color16 => rgb_to_color16(r, g, b),
        ColorMode::Mono => {
            if r.max(g).max(b) >= 128 {
                Color::White
            } else {
                Color::DarkGrey
            }
        }
    }
}

pub fn background(mode: ColorMode) -> Color {
    match mode {
        ColorMode::TrueColor => Color::Rgb { r: 0, g: 0, b: 0 },
        ColorMode::Color256 => Color::AnsiValue(16),
        ColorMode::Color16 | ColorMode::Mono => Color::Black,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_hex_parses_glyph_green() {
        assert_eq!(Rgba::from_hex("#00FF46").unwrap(), Rgba::rgb(0x00, 0xFF, 0x46));
        assert_eq!(Rgba::from_hex("00ff46").unwrap(), Rgba::rgb(0x00, 0xFF, 0x46));
    }

    #[test]
    fn from_hex_rejects_garbage() {
        assert!(Rgba::from_hex("#00FF4").is_err());
        assert!(Rgba::from_hex("#00FG46").is_err());
    }

    #[test]
    fn blend_moves_toward_source_by_alpha() {
        let out = blend([200.0, 100.0, 0.0], [0.0, 0.0, 0.0], 0.25);
        assert_eq!(out, [150.0, 75.0, 0.0]);
        assert_eq!(blend([1.0, 2.0, 3.0], [9.0, 9.0, 9.0], 1.0), [9.0, 9.0, 9.0]);
    }

    #[test]
    fn ansi256_maps_extremes_and_cube() {
        assert_eq!(rgb_to_ansi256(0, 0, 0), 16);
        assert_eq!(rgb_to_ansi256(255, 255, 255), 231);
        assert_eq!(rgb_to_ansi256(0, 255, 0), 46);
    }

    #[test]
    fn term_color_respects_mode() {
        let green = Rgba::rgb(0x00, 0xFF, 0x46).channels();
        assert_eq!(
            term_color(ColorMode::TrueColor, green),
            Color::Rgb {
                r: 0x00,
                g: 0xFF,
                b: 0x46
            }
        );
        assert_eq!(term_color(ColorMode::Color16, green), Color::Green);
        assert_eq!(term_color(ColorMode::Mono, [10.0, 40.0, 20.0]), Color::DarkGrey);
    }
}
