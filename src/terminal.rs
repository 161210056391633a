// Copyright (c) 2026 rezky_nightky

use std::io::{stdout, IsTerminal, Stdout, Write};

use crossterm::{
    cursor, event,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal, ExecutableCommand, QueueableCommand,
};
use unicode_width::UnicodeWidthChar;

use crate::color::{background, term_color};
use crate::error::{Error, Result};
use crate::frame::{Frame, TERM_COLS_PER_CELL};
use crate::runtime::ColorMode;

pub struct Terminal {
    stdout: Stdout,
    color_mode: ColorMode,
    cols: u16,
    rows: u16,
    line_buf: String,
}

impl Terminal {
    /// Claims the terminal as a drawing surface. Fails with
    /// [`Error::Unsupported`] when stdout is not a usable terminal.
    pub fn acquire(color_mode: ColorMode) -> Result<Self> {
        let mut out = stdout();
        if !out.is_terminal() {
            return Err(Error::Unsupported("stdout is not a terminal".into()));
        }
        let (cols, rows) = terminal::size()
            .map_err(|e| Error::Unsupported(format!("cannot query terminal size: {}", e)))?;
        if cols < TERM_COLS_PER_CELL || rows == 0 {
            return Err(Error::Unsupported(format!(
                "terminal too small ({}x{})",
                cols, rows
            )));
        }

        terminal::enable_raw_mode()?;
        let init_res: std::io::Result<()> = (|| {
            out.execute(terminal::EnterAlternateScreen)?;
            out.execute(cursor::Hide)?;
            let _ = out.execute(terminal::DisableLineWrap);
            out.execute(SetAttribute(Attribute::Reset))?;
            out.execute(SetBackgroundColor(background(color_mode)))?;
            out.execute(terminal::Clear(terminal::ClearType::All))?;
            out.flush()?;
            Ok(())
        })();
        if let Err(e) = init_res {
            restore_terminal_best_effort();
            return Err(e.into());
        }

        log::debug!(
            "acquired {}x{} terminal ({})",
            cols,
            rows,
            color_mode.label()
        );
        Ok(Self {
            stdout: out,
            color_mode,
            cols,
            rows,
            line_buf: String::with_capacity(cols as usize * 4),
        })
    }

    /// Size in terminal cells, as read once at acquisition.
    pub fn size(&self) -> (u16, u16) {
        (self.cols, self.rows)
    }

    pub fn poll_event(timeout: std::time::Duration) -> std::io::Result<bool> {
        event::poll(timeout)
    }

    pub fn read_event() -> std::io::Result<event::Event> {
        event::read()
    }

    /// Repaints the whole frame.
    pub fn draw(&mut self, frame: &Frame) -> Result<()> {
        let bg = background(self.color_mode);
        let mut cur_fg: Option<Color> = None;

        self.stdout.queue(SetBackgroundColor(bg))?;
        for y in 0..frame.rows {
            self.stdout.queue(cursor::MoveTo(0, y))?;
            for cell in frame.row(y) {
                let fg = term_color(self.color_mode, cell.shade);
                if Some(fg) != cur_fg && !cell.is_blank() {
                    self.stdout.queue(SetForegroundColor(fg))?;
                    cur_fg = Some(fg);
                }
                pad_glyph(&mut self.line_buf, cell.ch);
                self.stdout.queue(Print(self.line_buf.as_str()))?;
            }
        }

        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.queue(ResetColor)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Writes `ch` into `buf` padded to exactly one glyph cell of terminal
/// columns. Glyphs wider than a cell are replaced by spaces.
pub fn pad_glyph(buf: &mut String, ch: char) {
    buf.clear();
    let w = ch.width().unwrap_or(0) as u16;
    if w == 0 || w > TERM_COLS_PER_CELL {
        buf.extend(std::iter::repeat(' ').take(TERM_COLS_PER_CELL as usize));
        return;
    }
    buf.push(ch);
    buf.extend(std::iter::repeat(' ').take((TERM_COLS_PER_CELL - w) as usize));
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = self.stdout.flush();
        restore_terminal_best_effort();
    }
}

pub fn restore_terminal_best_effort() {
    let mut out = stdout();
    let _ = out.execute(SetAttribute(Attribute::Reset));
    let _ = out.execute(ResetColor);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::EnableLineWrap);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();
    let _ = out.flush();
}
