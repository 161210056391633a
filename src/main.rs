// Copyright (c) 2026 rezky_nightky

use std::env;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use clap::builder::styling::{AnsiColor as ClapAnsiColor, Color as ClapColor};
use clap::builder::styling::{Effects as ClapEffects, Style as ClapStyle};
use clap::builder::Styles as ClapStyles;
use clap::{CommandFactory, FromArgMatches};
use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};
use rand::{rngs::StdRng, SeedableRng};

#[cfg(unix)]
use signal_hook::consts::{SIGHUP, SIGINT, SIGTERM};
#[cfg(unix)]
use signal_hook::iterator::Signals;

use glyphrain::charset::build_glyphs;
use glyphrain::config::{color_enabled_stdout, duration_limit, Args, RenderConfig};
use glyphrain::frame::Frame;
use glyphrain::renderer::Renderer;
use glyphrain::runtime::{default_to_ascii, detect_color_mode_auto, ColorMode};
use glyphrain::terminal::{restore_terminal_best_effort, Terminal};
use glyphrain::timer::{RepeatingTimer, StopHandle};
use glyphrain::Error;

const HELP_TEMPLATE_PLAIN: &str = "\
{before-help}{about-with-newline}
USAGE:
  {usage}

{all-args}{after-help}";

const HELP_TEMPLATE_COLOR: &str = "\
{before-help}{about-with-newline}
\x1b[1;36mUSAGE:\x1b[0m
  {usage}

{all-args}{after-help}";

fn clap_styles() -> ClapStyles {
    ClapStyles::styled()
        .header(
            ClapStyle::new()
                .effects(ClapEffects::BOLD)
                .fg_color(Some(ClapColor::Ansi(ClapAnsiColor::Cyan))),
        )
        .usage(
            ClapStyle::new()
                .effects(ClapEffects::BOLD)
                .fg_color(Some(ClapColor::Ansi(ClapAnsiColor::Green))),
        )
        .literal(ClapStyle::new().fg_color(Some(ClapColor::Ansi(ClapAnsiColor::Yellow))))
        .placeholder(ClapStyle::new().fg_color(Some(ClapColor::Ansi(ClapAnsiColor::Magenta))))
}

fn detect_color_mode(args: &Args) -> ColorMode {
    match args.colormode {
        Some(bits) => ColorMode::from_bits(bits).unwrap_or_else(|e| {
            eprintln!("{}", e);
            std::process::exit(1);
        }),
        None => detect_color_mode_auto(),
    }
}

fn print_bitcolor_check(args: &Args) {
    let colorterm = env::var("COLORTERM").unwrap_or_default();
    let term = env::var("TERM").unwrap_or_default();
    let or_unset = |s: &str| {
        if s.is_empty() {
            "(unset)".to_string()
        } else {
            s.to_string()
        }
    };

    println!("BITCOLOR CHECK:");
    println!("  COLORTERM: {}", or_unset(&colorterm));
    println!("  TERM: {}", or_unset(&term));
    println!("  auto_detected: {}", detect_color_mode_auto().label());
    let effective = detect_color_mode(args);
    if args.colormode.is_some() {
        println!("  forced: {}", effective.label());
    }
    println!("  effective: {}", effective.label());
}

fn print_info() {
    let sha = env!("GLYPHRAIN_GIT_SHA");
    println!("Version: v{}", env!("CARGO_PKG_VERSION"));
    if sha.is_empty() {
        println!("Build: {}", env!("GLYPHRAIN_BUILD"));
    } else {
        println!("Build: {} ({})", env!("GLYPHRAIN_BUILD"), sha);
    }
    println!("Copyright: (c) 2026 {}", env!("CARGO_PKG_AUTHORS"));
    println!("License: {}", env!("CARGO_PKG_LICENSE"));
    println!("Source: {}", env!("CARGO_PKG_REPOSITORY"));
}

fn is_quit_key(code: KeyCode, modifiers: KeyModifiers) -> bool {
    match code {
        KeyCode::Esc | KeyCode::Char('q') => true,
        KeyCode::Char('c') => modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Raw mode swallows Ctrl-C, so quitting is watched for on its own thread.
fn spawn_quit_watcher(stop: StopHandle) -> JoinHandle<()> {
    thread::spawn(move || {
        while !stop.is_stopped() {
            match Terminal::poll_event(Duration::from_millis(50)) {
                Ok(true) => {}
                Ok(false) => continue,
                Err(e) => {
                    log::warn!("input polling failed: {}", e);
                    return;
                }
            }
            match Terminal::read_event() {
                Ok(Event::Key(k)) if k.kind == KeyEventKind::Press => {
                    if is_quit_key(k.code, k.modifiers) {
                        stop.stop();
                    }
                }
                Ok(_) => {}
                Err(e) => {
                    log::warn!("input read failed: {}", e);
                    return;
                }
            }
        }
    })
}

fn main() -> std::io::Result<()> {
    std::panic::set_hook(Box::new(|info| {
        restore_terminal_best_effort();
        eprintln!("{}", info);
    }));

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    #[cfg(unix)]
    {
        if let Ok(mut signals) = Signals::new([SIGINT, SIGTERM, SIGHUP]) {
            thread::spawn(move || {
                if let Some(sig) = signals.forever().next() {
                    restore_terminal_best_effort();
                    std::process::exit(128 + sig);
                }
            });
        }
    }

    #[cfg(windows)]
    {
        if let Err(e) = ctrlc::set_handler(|| {
            restore_terminal_best_effort();
            std::process::exit(130);
        }) {
            eprintln!("failed to install Ctrl-C handler: {}", e);
        }
    }

    let mut cmd = Args::command();
    cmd = cmd.styles(clap_styles());
    let help_template = if color_enabled_stdout() {
        HELP_TEMPLATE_COLOR
    } else {
        HELP_TEMPLATE_PLAIN
    };
    cmd = cmd.help_template(help_template);
    cmd.build();
    if cmd.get_arguments().any(|a| a.get_id().as_str() == "help") {
        cmd = cmd.mut_arg("help", |a| a.help_heading("HELP"));
    }

    let matches = cmd.get_matches();
    let args = Args::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    if args.version {
        println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    if args.info {
        print_info();
        return Ok(());
    }

    if args.check_bitcolor {
        print_bitcolor_check(&args);
        return Ok(());
    }

    let color_mode = detect_color_mode(&args);
    let limit = duration_limit(args.duration).unwrap_or_else(|e| {
        eprintln!("{}", e);
        std::process::exit(1);
    });

    let config = RenderConfig::DEFAULT;
    let glyphs = build_glyphs(default_to_ascii());

    let mut term = match Terminal::acquire(color_mode) {
        Ok(t) => t,
        Err(Error::Unsupported(why)) => {
            eprintln!(
                "glyphrain needs an interactive terminal to draw on ({})",
                why
            );
            std::process::exit(1);
        }
        Err(e) => return Err(e.into()),
    };
    let (cols, rows) = term.size();

    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut renderer = Renderer::new(
        Frame::for_terminal(cols, rows, config.cell_size),
        config,
        glyphs,
        rng,
    );

    let mut timer = RepeatingTimer::new(config.interval);
    if let Some(d) = limit {
        timer = timer.with_deadline(d);
    }
    let stop = timer.handle();
    let watcher = spawn_quit_watcher(stop.clone());

    let start = Instant::now();
    let res = timer.schedule_repeating(|| -> glyphrain::Result<()> {
        renderer.render_frame();
        term.draw(renderer.surface())
    });

    stop.stop();
    let _ = watcher.join();
    drop(term);

    let ticks = res?;
    log::info!(
        "rendered {} frames over {} columns in {:.1}s",
        ticks,
        renderer.column_count(),
        start.elapsed().as_secs_f64()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quit_keys() {
        assert!(is_quit_key(KeyCode::Char('q'), KeyModifiers::NONE));
        assert!(is_quit_key(KeyCode::Esc, KeyModifiers::NONE));
        assert!(is_quit_key(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(!is_quit_key(KeyCode::Char('c'), KeyModifiers::NONE));
        assert!(!is_quit_key(KeyCode::Char(' '), KeyModifiers::NONE));
    }
}
