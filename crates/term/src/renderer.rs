//! Raw-mode terminal backend frames are presented on.
//!
//! Every frame is a full redraw with batched style switches. At the tick
//! rates this game runs at, diffing frames buys nothing.

use std::io::{self, Stdout, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{FrameBuffer, Rgb, Style, PLAIN};

/// Owns the raw-mode/alternate-screen lifecycle and flushes frames to it.
pub struct Screen {
    out: Stdout,
}

impl Screen {
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }

    /// Switch to the alternate screen and raw mode.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.out
            .queue(terminal::EnterAlternateScreen)?
            .queue(terminal::DisableLineWrap)?
            .queue(cursor::Hide)?
            .flush()?;
        Ok(())
    }

    /// Undo [`Screen::enter`], handing the terminal back to the caller.
    pub fn restore(&mut self) -> Result<()> {
        self.out
            .queue(SetAttribute(Attribute::Reset))?
            .queue(ResetColor)?
            .queue(cursor::Show)?
            .queue(terminal::EnableLineWrap)?
            .queue(terminal::LeaveAlternateScreen)?
            .flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Present one frame, anchored at the top-left corner.
    pub fn present(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.out
            .queue(terminal::Clear(terminal::ClearType::All))?;

        let mut active: Option<Style> = None;
        for y in 0..fb.height() {
            self.out.queue(cursor::MoveTo(0, y))?;
            for x in 0..fb.width() {
                let style = fb.style(x, y).unwrap_or(PLAIN);
                if active != Some(style) {
                    switch_style(&mut self.out, style)?;
                    active = Some(style);
                }
                self.out.queue(Print(fb.glyph(x, y).unwrap_or(' ')))?;
            }
        }

        self.out
            .queue(SetAttribute(Attribute::Reset))?
            .queue(ResetColor)?
            .flush()?;
        Ok(())
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

/// Attributes must be reset before colors are applied; SGR reset clears
/// colors as well.
fn switch_style(out: &mut Stdout, style: Style) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?
        .queue(SetForegroundColor(color(style.fg)))?
        .queue(SetBackgroundColor(color(style.bg)))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn color(Rgb(r, g, b): Rgb) -> Color {
    Color::Rgb { r, g, b }
}
