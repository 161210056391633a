// Copyright (c) 2026 rezky_nightky

use rand::Rng;

use crate::charset::random_glyph;
use crate::color::Rgba;
use crate::config::RenderConfig;
use crate::sim::{advance, column_count, init_drops};
use crate::surface::Surface;

/// Owns the drop state and paints one frame of rain per call.
pub struct Renderer<S, R> {
    surface: S,
    rng: R,
    config: RenderConfig,
    charset: Vec<char>,
    width: f64,
    height: f64,
    drops: Vec<u32>,
    frames: u64,
}

impl<S: Surface, R: Rng> Renderer<S, R> {
    /// Reads the surface size once and lays out one drop per column.
    pub fn new(surface: S, config: RenderConfig, charset: Vec<char>, rng: R) -> Self {
        let (width, height) = surface.size();
        let columns = column_count(width, config.cell_size);
        log::debug!(
            "surface {}x{} px, {} columns of {} px",
            width,
            height,
            columns,
            config.cell_size
        );
        Self {
            surface,
            rng,
            config,
            charset,
            width,
            height,
            drops: init_drops(columns),
            frames: 0,
        }
    }

    /// Fades the previous frame, then draws and advances every column
    /// left to right.
    pub fn render_frame(&mut self) {
        let cfg = &self.config;
        self.surface.fill_rect(
            0.0,
            0.0,
            self.width,
            self.height,
            Rgba::BLACK.with_alpha(cfg.trail_alpha),
        );

        let font = cfg.font();
        for (i, drop) in self.drops.iter_mut().enumerate() {
            let glyph = random_glyph(&self.charset, &mut self.rng);
            self.surface.draw_text(
                glyph,
                i as f64 * cfg.cell_size,
                *drop as f64 * cfg.cell_size,
                font,
                cfg.glyph_color,
            );
            *drop = advance(
                &mut self.rng,
                *drop,
                cfg.cell_size,
                self.height,
                cfg.reset_probability,
            );
        }
        self.frames = self.frames.saturating_add(1);
    }

    pub fn drops(&self) -> &[u32] {
        &self.drops
    }

    pub fn column_count(&self) -> usize {
        self.drops.len()
    }

    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::charset::build_glyphs;
    use crate::frame::Frame;
    use crate::surface::Font;

    #[derive(Debug, PartialEq)]
    enum Call {
        Fill(f64, f64, f64, f64, Rgba),
        Text(char, f64, f64, Font, Rgba),
    }

    struct Recorder {
        width: f64,
        height: f64,
        calls: Vec<Call>,
    }

    impl Recorder {
        fn new(width: f64, height: f64) -> Self {
            Self {
                width,
                height,
                calls: Vec::new(),
            }
        }
    }

    impl Surface for Recorder {
        fn size(&self) -> (f64, f64) {
            (self.width, self.height)
        }

        fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Rgba) {
            self.calls.push(Call::Fill(x, y, width, height, color));
        }

        fn draw_text(&mut self, glyph: char, x: f64, y: f64, font: Font, color: Rgba) {
            self.calls.push(Call::Text(glyph, x, y, font, color));
        }
    }

    fn renderer(width: f64, height: f64) -> Renderer<Recorder, StdRng> {
        Renderer::new(
            Recorder::new(width, height),
            RenderConfig::DEFAULT,
            build_glyphs(false),
            StdRng::seed_from_u64(7),
        )
    }

    #[test]
    fn full_hd_first_frame_advances_every_column() {
        let mut r = renderer(1920.0, 1080.0);
        assert_eq!(r.column_count(), 192);
        assert!(r.drops().iter().all(|&d| d == 1));

        r.render_frame();
        assert_eq!(r.drops().len(), 192);
        assert!(r.drops().iter().all(|&d| d == 2));
        assert_eq!(r.frame_count(), 1);
    }

    #[test]
    fn frame_fades_first_then_draws_columns_in_order() {
        let mut r = renderer(30.0, 100.0);
        r.render_frame();

        let calls = &r.surface().calls;
        assert_eq!(calls.len(), 4);
        assert_eq!(
            calls[0],
            Call::Fill(0.0, 0.0, 30.0, 100.0, Rgba::BLACK.with_alpha(0.04))
        );
        let glyphs = build_glyphs(false);
        for (i, call) in calls[1..].iter().enumerate() {
            let Call::Text(ch, x, y, font, color) = call else {
                panic!("expected text call, got {:?}", call);
            };
            assert!(glyphs.contains(ch));
            assert_eq!(*x, i as f64 * 10.0);
            assert_eq!(*y, 10.0);
            assert_eq!(*font, RenderConfig::DEFAULT.font());
            assert_eq!(*color, RenderConfig::DEFAULT.glyph_color);
        }
    }

    #[test]
    fn glyph_position_follows_drop_row() {
        let mut r = renderer(10.0, 1000.0);
        for _ in 0..5 {
            r.render_frame();
        }
        let ys: Vec<f64> = r
            .surface()
            .calls
            .iter()
            .filter_map(|c| match c {
                Call::Text(_, _, y, _, _) => Some(*y),
                Call::Fill(..) => None,
            })
            .collect();
        assert_eq!(ys, vec![10.0, 20.0, 30.0, 40.0, 50.0]);
        assert_eq!(r.drops(), &[6]);
    }

    #[test]
    fn narrow_surface_has_no_columns() {
        let mut r = renderer(9.0, 100.0);
        assert_eq!(r.column_count(), 0);
        r.render_frame();
        assert_eq!(r.surface().calls.len(), 1);
    }

    #[test]
    fn drops_past_bottom_eventually_wrap() {
        let mut r = renderer(50.0, 30.0);
        let mut wrapped = false;
        for _ in 0..2000 {
            r.render_frame();
            wrapped |= r.drops().iter().any(|&d| d == 0);
        }
        assert!(wrapped);
    }

    #[test]
    fn empty_charset_draws_spaces() {
        let mut r = Renderer::new(
            Recorder::new(20.0, 50.0),
            RenderConfig::DEFAULT,
            Vec::new(),
            StdRng::seed_from_u64(9),
        );
        r.render_frame();
        assert!(r
            .surface()
            .calls
            .iter()
            .all(|c| !matches!(c, Call::Text(ch, ..) if *ch != ' ')));
    }

    #[test]
    fn same_seed_same_frames() {
        let mut a = renderer(200.0, 60.0);
        let mut b = renderer(200.0, 60.0);
        for _ in 0..50 {
            a.render_frame();
            b.render_frame();
        }
        assert_eq!(a.drops(), b.drops());
        assert_eq!(a.surface().calls, b.surface().calls);
    }

    #[test]
    fn renders_onto_terminal_frame() {
        let frame = Frame::new(4, 3, 10.0);
        let mut r = Renderer::new(
            frame,
            RenderConfig::DEFAULT,
            vec!['A'],
            StdRng::seed_from_u64(11),
        );
        r.render_frame();
        let f = r.surface();
        assert!(f.row(0).iter().all(|c| c.ch == 'A'));
        assert!(f.row(1).iter().all(|c| c.is_blank()));

        r.render_frame();
        let f = r.surface();
        assert!(f.row(0).iter().all(|c| c.ch == 'A' && c.brightness() < 255.0));
        assert!(f.row(1).iter().all(|c| c.ch == 'A' && c.brightness() == 255.0));
    }
}
