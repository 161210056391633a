// Copyright (c) 2026 rezky_nightky

use std::env;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorMode {
    Mono,
    Color16,
    Color256,
    TrueColor,
}

impl ColorMode {
    pub fn label(self) -> &'static str {
        match self {
            ColorMode::TrueColor => "24-bit truecolor",
            ColorMode::Color256 => "8-bit (256-color)",
            ColorMode::Color16 => "16-color",
            ColorMode::Mono => "mono",
        }
    }

    /// Accepts the `--colormode` values: 0, 16, 8/256, 24/32.
    pub fn from_bits(bits: u16) -> Result<Self, String> {
        match bits {
            0 => Ok(ColorMode::Mono),
            16 => Ok(ColorMode::Color16),
            8 | 256 => Ok(ColorMode::Color256),
            24 | 32 => Ok(ColorMode::TrueColor),
            _ => Err(format!(
                "invalid --colormode: {} (allowed: 0,16,8/256,24/32)",
                bits
            )),
        }
    }
}

pub fn detect_color_mode_from(colorterm: &str, term: &str) -> ColorMode {
    let colorterm = colorterm.to_ascii_lowercase();
    if colorterm.contains("truecolor") || colorterm.contains("24bit") {
        return ColorMode::TrueColor;
    }

    let term = term.to_ascii_lowercase();
    if term == "dumb" {
        return ColorMode::Mono;
    }
    if term.contains("256color") {
        return ColorMode::Color256;
    }

    ColorMode::Color16
}

pub fn detect_color_mode_auto() -> ColorMode {
    detect_color_mode_from(
        &env::var("COLORTERM").unwrap_or_default(),
        &env::var("TERM").unwrap_or_default(),
    )
}

/// Non-UTF-8 locales cannot be trusted with CJK glyphs.
pub fn default_to_ascii() -> bool {
    locale_is_ascii(&env::var("LANG").unwrap_or_default())
}

fn locale_is_ascii(lang: &str) -> bool {
    let lang = lang.to_ascii_uppercase();
    !(lang.contains("UTF-8") || lang.contains("UTF8"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colorterm_wins_over_term() {
        assert_eq!(
            detect_color_mode_from("truecolor", "xterm"),
            ColorMode::TrueColor
        );
        assert_eq!(detect_color_mode_from("24bit", "dumb"), ColorMode::TrueColor);
    }

    #[test]
    fn term_fallbacks() {
        assert_eq!(detect_color_mode_from("", "dumb"), ColorMode::Mono);
        assert_eq!(
            detect_color_mode_from("", "xterm-256color"),
            ColorMode::Color256
        );
        assert_eq!(detect_color_mode_from("", "vt100"), ColorMode::Color16);
    }

    #[test]
    fn from_bits_accepts_aliases_only() {
        assert_eq!(ColorMode::from_bits(256).unwrap(), ColorMode::Color256);
        assert_eq!(ColorMode::from_bits(32).unwrap(), ColorMode::TrueColor);
        assert!(ColorMode::from_bits(4).is_err());
    }

    #[test]
    fn locale_detection() {
        assert!(!locale_is_ascii("en_US.UTF-8"));
        assert!(!locale_is_ascii("C.utf8"));
        assert!(locale_is_ascii("C"));
        assert!(locale_is_ascii(""));
    }
}
