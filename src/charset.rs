// Copyright (c) 2026 rezky_nightky

use rand::{seq::IndexedRandom, Rng};

/// Glyphs the rain is drawn from. Repeats are intentional: they weight the
/// uniform draw.
pub const GLYPHS: &str =
    "黑客帝国abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789@#$%^&*()*&^%+-/~{[|`]}";

/// Builds the glyph list, keeping only ASCII members when the terminal
/// locale cannot show the rest.
pub fn build_glyphs(ascii_only: bool) -> Vec<char> {
    GLYPHS
        .chars()
        .filter(|c| !ascii_only || c.is_ascii())
        .collect()
}

/// Uniformly random member of `charset`, or a space when it is empty.
pub fn random_glyph<R: Rng + ?Sized>(charset: &[char], rng: &mut R) -> char {
    charset.choose(rng).copied().unwrap_or(' ')
}
