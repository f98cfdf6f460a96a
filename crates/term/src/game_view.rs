//! GameView: maps a `core::ControllerSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::ControllerSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::Piece;

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

pub const TITLE: &str = "TETRIS STACK";
const EMPTY: &str = "(empty)";
const MIN_INNER_W: u16 = 38;
const PAD: u16 = 2;

const LABEL: CellStyle = CellStyle::fg(Rgb::new(220, 220, 220)).bold();
const TEXT: CellStyle = CellStyle::fg(Rgb::new(200, 200, 200));
const FAINT: CellStyle = CellStyle::fg(Rgb::new(140, 140, 140)).dim();
const BORDER: CellStyle = CellStyle::fg(Rgb::new(200, 200, 200));

/// Renders the queue panel, the reserve panel, the menu and a status line.
#[derive(Default)]
pub struct GameView {
    menu: Vec<String>,
}

impl GameView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines listed under the panels, e.g. the key bindings.
    pub fn with_menu<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.menu = lines.into_iter().map(Into::into).collect();
        self
    }

    /// Inner (content) size of the frame for this snapshot and status line.
    fn content_size(&self, snap: &ControllerSnapshot, status: Option<&str>) -> (u16, u16) {
        let mut w = MIN_INNER_W;
        let mut h: u16 = 1 + 1; // title, blank
        w = w.max(pieces_width(&snap.queue) + PAD);
        h += 3; // label, pieces, blank
        if snap.has_reserve() {
            w = w.max(pieces_width(&snap.reserve) + PAD);
            h += 3;
        }
        for line in &self.menu {
            w = w.max(text_width(line) + PAD);
        }
        h += self.menu.len() as u16;
        if let Some(msg) = status {
            w = w.max(text_width(msg) + PAD + 2);
            h += 2; // blank, status
        }
        (w, h)
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(
        &self,
        snap: &ControllerSnapshot,
        status: Option<&str>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Default::default());

        let (inner_w, inner_h) = self.content_size(snap, status);
        let frame_w = inner_w + 2;
        let frame_h = inner_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        draw_border(fb, start_x, start_y, frame_w, frame_h);

        let x = start_x + 2;
        let mut y = start_y + 1;

        fb.put_str(x, y, TITLE, LABEL);
        y += 2;

        let end = fb.put_str(x, y, "NEXT", LABEL);
        fb.put_str(end + 1, y, "(head -> tail)", FAINT);
        y += 1;
        draw_pieces(fb, x, y, &snap.queue);
        y += 2;

        if let Some(cap) = snap.reserve_capacity {
            let end = fb.put_str(x, y, "RESERVE", LABEL);
            let end = fb.put_str(end + 1, y, "(top -> base)", FAINT);
            let count = format!("{}/{}", snap.reserve.len(), cap);
            let style = if snap.reserve_full() {
                CellStyle::fg(Rgb::new(220, 80, 80)).bold()
            } else {
                TEXT
            };
            fb.put_str(end + 2, y, &count, style);
            y += 1;
            draw_pieces(fb, x, y, &snap.reserve);
            y += 2;
        }

        for line in &self.menu {
            fb.put_str(x, y, line, TEXT);
            y += 1;
        }

        if let Some(msg) = status {
            y += 1;
            let end = fb.put_str(x, y, ">", FAINT);
            fb.put_str(end + 1, y, msg, TEXT.bold());
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &ControllerSnapshot,
        status: Option<&str>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, status, viewport, &mut fb);
        fb
    }
}

fn text_width(s: &str) -> u16 {
    s.chars().count().min(u16::MAX as usize) as u16
}

/// Columns taken by `[K id] [K id] ...`, or by `(empty)`.
fn pieces_width(pieces: &[Piece]) -> u16 {
    if pieces.is_empty() {
        return text_width(EMPTY);
    }
    let total: usize = pieces.iter().map(|p| p.to_string().len() + 1).sum();
    (total - 1).min(u16::MAX as usize) as u16
}

fn draw_pieces(fb: &mut FrameBuffer, x: u16, y: u16, pieces: &[Piece]) {
    if pieces.is_empty() {
        fb.put_str(x, y, EMPTY, FAINT);
        return;
    }
    let mut cx = x;
    for piece in pieces {
        let style = CellStyle::fg(Rgb::for_piece(piece.kind)).bold();
        cx = fb.put_str(cx, y, &piece.to_string(), style) + 1;
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', BORDER);
    fb.put_char(x + w - 1, y, '┐', BORDER);
    fb.put_char(x, y + h - 1, '└', BORDER);
    fb.put_char(x + w - 1, y + h - 1, '┘', BORDER);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', BORDER);
        fb.put_char(x + dx, y + h - 1, '─', BORDER);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', BORDER);
        fb.put_char(x + w - 1, y + dy, '│', BORDER);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    fn snap(reserve: bool) -> ControllerSnapshot {
        ControllerSnapshot {
            queue: vec![
                Piece::new(PieceKind::T, 0),
                Piece::new(PieceKind::O, 1),
            ],
            reserve: Vec::new(),
            queue_capacity: 2,
            reserve_capacity: reserve.then_some(3),
            ..Default::default()
        }
    }

    #[test]
    fn pieces_width_counts_separators() {
        assert_eq!(pieces_width(&snap(false).queue), "[T 0] [O 1]".len() as u16);
        assert_eq!(pieces_width(&[]), 7);
    }

    #[test]
    fn content_grows_with_reserve_and_status() {
        let view = GameView::new();
        let (_, h_basic) = view.content_size(&snap(false), None);
        let (_, h_reserve) = view.content_size(&snap(true), None);
        let (_, h_status) = view.content_size(&snap(true), Some("hi"));
        assert_eq!(h_reserve, h_basic + 3);
        assert_eq!(h_status, h_reserve + 2);
    }

    #[test]
    fn long_status_widens_frame() {
        let view = GameView::new();
        let msg = "x".repeat(60);
        let (w, _) = view.content_size(&snap(false), Some(&msg));
        assert!(w >= 60);
    }

    #[test]
    fn frame_is_centered_in_viewport() {
        let view = GameView::new();
        let snap = snap(true);
        let (inner_w, inner_h) = view.content_size(&snap, None);
        let fb = view.render(&snap, None, Viewport::new(80, 40));

        let left = (80 - (inner_w + 2)) / 2;
        let top = (40 - (inner_h + 2)) / 2;
        assert_eq!(fb.get(left, top).map(|c| c.ch), Some('┌'));
        assert_eq!(fb.get(left + inner_w + 1, top + inner_h + 1).map(|c| c.ch), Some('┘'));
        assert!(fb.row_text(top).starts_with(&" ".repeat(left as usize)));
    }

    #[test]
    fn small_viewport_pins_frame_to_origin() {
        let view = GameView::new();
        let fb = view.render(&snap(false), None, Viewport::new(10, 4));
        assert_eq!(fb.get(0, 0).map(|c| c.ch), Some('┌'));
    }
}
