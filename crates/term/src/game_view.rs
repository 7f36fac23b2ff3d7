//! GameView: maps a `GameSession` into a framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use blockfall_core::GameSession;
use blockfall_types::PieceKind;

use crate::fb::{FrameBuffer, Rgb, Style};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const PLAYFIELD_BG: Rgb = Rgb(28, 28, 38);
const SETTLED: Style = Style::colored(Rgb(165, 165, 175), PLAYFIELD_BG);
const EMPTY: Style = Style::colored(Rgb(88, 88, 100), PLAYFIELD_BG).dimmed();
const BORDER: Style = Style::colored(Rgb(200, 200, 200), Rgb(0, 0, 0));
const LABEL: Style = Style::colored(Rgb(220, 220, 220), Rgb(0, 0, 0)).bold();
const VALUE: Style = Style::colored(Rgb(200, 200, 200), Rgb(0, 0, 0));
const OVERLAY: Style = Style::colored(Rgb(255, 255, 255), Rgb(0, 0, 0)).bold();

/// A lightweight terminal view for the playfield.
pub struct GameView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Grid cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // Terminal glyphs are roughly twice as tall as wide; 2x1 keeps
        // grid cells close to square.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render the current session state into a framebuffer.
    pub fn render(&self, session: &GameSession, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);

        let grid = session.grid();
        let frame_w = grid.cols() as u16 * self.cell_w + 2;
        let frame_h = grid.rows() as u16 * self.cell_h + 2;
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        self.draw_frame(&mut fb, start_x, start_y, frame_w, frame_h);

        // Settled cells render in one neutral color; the grid tracks
        // occupancy, not which piece filled a cell.
        for y in 0..grid.rows() as u16 {
            for x in 0..grid.cols() as u16 {
                let (ch, style) = if grid.is_occupied(i32::from(x), i32::from(y)) {
                    ('█', SETTLED)
                } else {
                    ('·', EMPTY)
                };
                self.fill_cell(&mut fb, start_x, start_y, x, y, ch, style);
            }
        }

        // Active piece, in its kind's highlight color.
        if let Some(piece) = session.active() {
            let style = Style::colored(piece_color(piece.kind()), PLAYFIELD_BG).bold();
            for (x, y) in piece.cells() {
                if (0..grid.cols() as i32).contains(&x) && (0..grid.rows() as i32).contains(&y) {
                    self.fill_cell(&mut fb, start_x, start_y, x as u16, y as u16, '█', style);
                }
            }
        }

        self.draw_score_panel(&mut fb, session, viewport, start_x, start_y, frame_w);

        if session.game_over() {
            draw_game_over(&mut fb, session.score(), start_x, start_y, frame_w, frame_h);
        }

        fb
    }

    fn draw_frame(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        if w < 2 || h < 2 {
            return;
        }

        let inner = usize::from(w) - 2;
        let top = format!("┌{}┐", "─".repeat(inner));
        let bottom = format!("└{}┘", "─".repeat(inner));
        fb.text(x, y, &top, BORDER);
        fb.text(x, y + h - 1, &bottom, BORDER);

        for dy in 1..h - 1 {
            fb.put(x, y + dy, '│', BORDER);
            fb.rect(x + 1, y + dy, w - 2, 1, ' ', EMPTY);
            fb.put(x + w - 1, y + dy, '│', BORDER);
        }
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: Style,
    ) {
        let px = start_x + 1 + cell_x * self.cell_w;
        let py = start_y + 1 + cell_y * self.cell_h;
        fb.rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_score_panel(
        &self,
        fb: &mut FrameBuffer,
        session: &GameSession,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if viewport.width.saturating_sub(panel_x) < 8 {
            return;
        }

        fb.text(panel_x, start_y, "SCORE", LABEL);
        fb.text(
            panel_x,
            start_y.saturating_add(1),
            &session.score().to_string(),
            VALUE,
        );
    }
}

fn draw_game_over(
    fb: &mut FrameBuffer,
    score: u32,
    start_x: u16,
    start_y: u16,
    frame_w: u16,
    frame_h: u16,
) {
    // Terminal stand-in for a translucent backdrop.
    fb.shade(start_x, start_y, frame_w, frame_h);

    let mid_y = start_y.saturating_add(frame_h / 2);
    let centered = |text: &str| {
        let text_w = text.chars().count() as u16;
        start_x.saturating_add(frame_w.saturating_sub(text_w) / 2)
    };

    let title = "GAME OVER";
    fb.text(centered(title), mid_y.saturating_sub(1), title, OVERLAY);

    let score_line = format!("SCORE {score}");
    fb.text(
        centered(&score_line),
        mid_y.saturating_add(1),
        &score_line,
        OVERLAY,
    );
}

fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb(90, 210, 220),
        PieceKind::O => Rgb(235, 215, 90),
        PieceKind::T => Rgb(195, 125, 215),
        PieceKind::L => Rgb(245, 165, 60),
        PieceKind::J => Rgb(95, 125, 225),
        PieceKind::S => Rgb(110, 215, 125),
        PieceKind::Z => Rgb(225, 90, 85),
    }
}
