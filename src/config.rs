// Copyright (c) 2026 rezky_nightky

use std::io::IsTerminal;
use std::time::Duration;

use clap::Parser;

use crate::color::Rgba;
use crate::surface::Font;

/// Fixed look and pacing of the rain.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderConfig {
    /// Glyph cell edge and column width in pixels. Also the font size.
    pub cell_size: f64,
    /// Time between frames.
    pub interval: Duration,
    /// Opacity of the black overlay painted each frame.
    pub trail_alpha: f64,
    pub glyph_color: Rgba,
    /// Once a drop is past the bottom, it resets on a frame when a uniform
    /// draw exceeds this value.
    pub reset_probability: f64,
    pub font_family: &'static str,
}

impl RenderConfig {
    pub const DEFAULT: RenderConfig = RenderConfig {
        cell_size: 10.0,
        interval: Duration::from_millis(35),
        trail_alpha: 0.04,
        glyph_color: Rgba::rgb(0x00, 0xFF, 0x46),
        reset_probability: 0.975,
        font_family: "arial",
    };

    pub fn font(&self) -> Font {
        Font {
            size_px: self.cell_size,
            family: self.font_family,
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

pub fn color_enabled_stdout() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if matches!(std::env::var("CLICOLOR").ok().as_deref(), Some("0")) {
        return false;
    }
    std::io::stdout().is_terminal()
}

#[derive(Parser, Debug, Clone)]
#[command(
    name = "glyphrain",
    about = "Digital rain with fading glyph trails. Press q, Esc or Ctrl-C to quit.",
    version,
    disable_version_flag = true
)]
pub struct Args {
    #[arg(
        long = "duration",
        help_heading = "GENERAL",
        help = "Stop after N seconds (min 0.1 max 86400; <=0 disables)"
    )]
    pub duration: Option<f64>,

    #[arg(
        long = "seed",
        help_heading = "GENERAL",
        help = "Seed the random source for a reproducible run"
    )]
    pub seed: Option<u64>,

    #[arg(
        long = "colormode",
        help_heading = "APPEARANCE",
        help = "Force color mode (allowed: 0,16,8/256,24/32). Default: 24-bit if supported (COLORTERM), else 8-bit (TERM=...256color), else 16-color"
    )]
    pub colormode: Option<u16>,

    #[arg(
        long = "check-bitcolor",
        help_heading = "HELP",
        help = "Print detected terminal color capability and exit"
    )]
    pub check_bitcolor: bool,

    #[arg(
        long = "info",
        short = 'i',
        help_heading = "HELP",
        help = "Print version info and exit"
    )]
    pub info: bool,

    #[arg(
        long = "version",
        short = 'v',
        help_heading = "HELP",
        help = "Print version and exit"
    )]
    pub version: bool,
}

/// Validates `--duration`: `None` when absent or disabled (<= 0).
pub fn duration_limit(raw: Option<f64>) -> Result<Option<Duration>, String> {
    let Some(s) = raw else {
        return Ok(None);
    };
    if !s.is_finite() {
        return Err(format!(
            "failed to apply --duration {} (must be a finite number)",
            s
        ));
    }
    if s <= 0.0 {
        return Ok(None);
    }
    if !(0.1..=86400.0).contains(&s) {
        return Err(format!(
            "failed to apply --duration {} (min 0.1 max 86400)",
            s
        ));
    }
    Ok(Some(Duration::from_secs_f64(s)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_defaults_match_the_classic_look() {
        let cfg = RenderConfig::default();
        assert_eq!(cfg.cell_size, 10.0);
        assert_eq!(cfg.interval, Duration::from_millis(35));
        assert_eq!(cfg.trail_alpha, 0.04);
        assert_eq!(cfg.glyph_color, Rgba::from_hex("#00FF46").unwrap());
        assert_eq!(cfg.reset_probability, 0.975);
        assert_eq!(cfg.font().size_px, 10.0);
    }

    #[test]
    fn args_parse_flags() {
        let args = Args::try_parse_from([
            "glyphrain",
            "--duration",
            "2.5",
            "--seed",
            "42",
            "--colormode",
            "256",
        ])
        .unwrap();
        assert_eq!(args.duration, Some(2.5));
        assert_eq!(args.seed, Some(42));
        assert_eq!(args.colormode, Some(256));
        assert!(!args.info && !args.version && !args.check_bitcolor);
    }

    #[test]
    fn args_reject_unknown_flag() {
        assert!(Args::try_parse_from(["glyphrain", "--fps", "30"]).is_err());
    }

    #[test]
    fn duration_limit_rules() {
        assert_eq!(duration_limit(None).unwrap(), None);
        assert_eq!(duration_limit(Some(0.0)).unwrap(), None);
        assert_eq!(duration_limit(Some(-3.0)).unwrap(), None);
        assert_eq!(
            duration_limit(Some(1.5)).unwrap(),
            Some(Duration::from_millis(1500))
        );
        assert!(duration_limit(Some(0.05)).is_err());
        assert!(duration_limit(Some(f64::NAN)).is_err());
        assert!(duration_limit(Some(90000.0)).is_err());
    }
}
