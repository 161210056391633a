// Copyright (c) 2026 rezky_nightky

//! Drop simulation. Everything here is pure apart from the random source
//! handed in by the caller, so seeded generators give reproducible runs.

use rand::Rng;

/// Number of whole glyph columns that fit in `surface_width`.
///
/// Panics when `cell_size` is not positive or `surface_width` is negative.
pub fn column_count(surface_width: f64, cell_size: f64) -> usize {
    assert!(
        cell_size.is_finite() && cell_size > 0.0,
        "cell size must be positive, got {}",
        cell_size
    );
    assert!(
        surface_width.is_finite() && surface_width >= 0.0,
        "surface width must be non-negative, got {}",
        surface_width
    );
    (surface_width / cell_size).floor() as usize
}

pub fn init_drops(column_count: usize) -> Vec<u32> {
    vec![1; column_count]
}

fn check_domain(cell_size: f64, surface_height: f64, reset_probability: f64) {
    assert!(
        cell_size.is_finite() && cell_size > 0.0,
        "cell size must be positive, got {}",
        cell_size
    );
    assert!(
        surface_height.is_finite() && surface_height >= 0.0,
        "surface height must be non-negative, got {}",
        surface_height
    );
    assert!(
        (0.0..=1.0).contains(&reset_probability),
        "reset probability must be within [0, 1], got {}",
        reset_probability
    );
}

/// True once the drop has passed the bottom edge and the per-frame trial
/// fires. A drop still on the surface never draws from `rng`.
pub fn should_reset<R: Rng + ?Sized>(
    rng: &mut R,
    drop_row: u32,
    cell_size: f64,
    surface_height: f64,
    reset_probability: f64,
) -> bool {
    check_domain(cell_size, surface_height, reset_probability);
    drop_row as f64 * cell_size > surface_height && rng.random::<f64>() > reset_probability
}

/// The per-column transition: back to row 0 on reset, one row down otherwise.
pub fn advance<R: Rng + ?Sized>(
    rng: &mut R,
    drop_row: u32,
    cell_size: f64,
    surface_height: f64,
    reset_probability: f64,
) -> u32 {
    if should_reset(rng, drop_row, cell_size, surface_height, reset_probability) {
        0
    } else {
        drop_row.saturating_add(1)
    }
}
