//! GameView: maps a `core::Session` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, top to bottom:
//!
//! ```text
//! moves: 3                                Press ↑ ← ↓ → to play
//!
//! ┌──────────────────────────────────┐
//! │        2      []      []       2 │
//! │       ...                        │
//! └──────────────────────────────────┘
//! ```

use crate::core::{Session, TileGame};
use crate::fb::{text_width, CellStyle, FrameBuffer, Rgb};

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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Blank rows between the status pane and the board frame.
const PANE_GAP: u16 = 1;

/// Columns between the frame border and the board text.
const FRAME_PADDING: u16 = 1;

/// A lightweight terminal renderer for the two text panes.
pub struct GameView {
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render the session's panes into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is resized to the
    /// viewport when needed.
    pub fn render_into<G: TileGame>(
        &self,
        session: &Session<G>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let status = session.status_text();
        let board_lines: Vec<&str> = session.board_text().lines().collect();

        let content_w = board_lines
            .iter()
            .map(|line| text_width(line))
            .max()
            .unwrap_or(0);
        let frame_w = content_w + 2 * (FRAME_PADDING + 1);
        let frame_h = board_lines.len() as u16 + 2;
        let total_w = text_width(status).max(frame_w);
        let total_h = 1 + PANE_GAP + frame_h;

        let start_x = viewport.width.saturating_sub(total_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(total_h) / 2,
            AnchorY::Top => 0,
        };

        let status_style = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let bg = CellStyle {
            fg: Rgb::new(230, 230, 230),
            bg: Rgb::new(30, 30, 40),
            bold: false,
            dim: false,
        };
        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };
        let banner = CellStyle {
            fg: Rgb::new(240, 90, 90),
            bold: true,
            ..bg
        };

        fb.put_str(start_x, start_y, status, status_style);

        let frame_y = start_y + 1 + PANE_GAP;
        fb.fill_rect(
            start_x + 1,
            frame_y + 1,
            frame_w.saturating_sub(2),
            frame_h.saturating_sub(2),
            ' ',
            bg,
        );
        self.draw_border(fb, start_x, frame_y, frame_w, frame_h, border);

        let text_x = start_x + 1 + FRAME_PADDING;
        for (i, line) in board_lines.iter().enumerate() {
            let style = if i == 0 && session.is_game_over() {
                banner
            } else {
                bg
            };
            fb.put_str(text_x, frame_y + 1 + i as u16, line, style);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render<G: TileGame>(&self, session: &Session<G>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(session, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }
        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }
}
