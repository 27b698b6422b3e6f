//! GameView: maps `core::Game` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{occupied_cells, ActivePiece, Game};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{PieceKind, Rotation};

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

const WELL_BG: Rgb = Rgb::new(30, 30, 40);
const STACK_FG: Rgb = Rgb::new(150, 150, 160);

/// A lightweight terminal renderer for the game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render the current game into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, game: &Game, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        // Boards wider or taller than a terminal are clipped, not wrapped.
        let board = game.board();
        let board_w = u16::try_from(board.width()).unwrap_or(u16::MAX);
        let board_h = u16::try_from(board.height()).unwrap_or(u16::MAX);
        let board_px_w = board_w.saturating_mul(self.cell_w);
        let board_px_h = board_h.saturating_mul(self.cell_h);
        let frame_w = board_px_w.saturating_add(2);
        let frame_h = board_px_h.saturating_add(2);

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        let bg = CellStyle::fg(Rgb::new(80, 80, 90)).with_bg(WELL_BG);
        let border = CellStyle::fg(Rgb::new(200, 200, 200));

        fb.fill_rect(start_x.saturating_add(1), start_y.saturating_add(1), board_px_w, board_px_h, ' ', bg);
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        // Stored cells carry no kind, so the stack is drawn in one color.
        let visible_w = usize::from(board_w.min(viewport.width));
        let visible_h = usize::from(board_h.min(viewport.height));
        for y in 0..visible_h {
            let Some(row) = board.row(y) else { break };
            for (x, cell) in row.iter().take(visible_w).enumerate() {
                let (cx, cy) = (x as u16, y as u16);
                if cell.is_filled() {
                    let style = CellStyle::fg(STACK_FG).with_bg(WELL_BG);
                    self.fill_cell_rect(fb, start_x, start_y, cx, cy, '█', style);
                } else {
                    let style = CellStyle::fg(Rgb::new(90, 90, 100)).with_bg(WELL_BG).dim();
                    self.fill_cell_rect(fb, start_x, start_y, cx, cy, '·', style);
                }
            }
        }

        if !game.is_over() {
            self.draw_active(fb, game, start_x, start_y);
        }

        self.draw_side_panel(fb, game, viewport, start_x, start_y, frame_w);

        if game.is_over() {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, game: &Game, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(game, viewport, &mut fb);
        fb
    }

    fn draw_active(&self, fb: &mut FrameBuffer, game: &Game, start_x: u16, start_y: u16) {
        let ActivePiece {
            kind,
            rotation,
            x,
            y,
        } = game.active();
        let style = CellStyle::fg(piece_color(kind)).with_bg(WELL_BG).bold();
        let board = game.board();
        for (row, col) in occupied_cells(kind, rotation) {
            let bx = x + col as i32;
            let by = y + row as i32;
            if board.is_out_of_bounds(bx, by) {
                continue;
            }
            if let (Ok(cx), Ok(cy)) = (u16::try_from(bx), u16::try_from(by)) {
                self.fill_cell_rect(fb, start_x, start_y, cx, cy, '█', style);
            }
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        let right = x.saturating_add(w - 1);
        let bottom = y.saturating_add(h - 1);

        fb.put_char(x, y, '┌', style);
        fb.put_char(right, y, '┐', style);
        fb.put_char(x, bottom, '└', style);
        fb.put_char(right, bottom, '┘', style);

        for dx in 1..(w - 1).min(fb.width()) {
            fb.put_char(x.saturating_add(dx), y, '─', style);
            fb.put_char(x.saturating_add(dx), bottom, '─', style);
        }
        for dy in 1..(h - 1).min(fb.height()) {
            fb.put_char(x, y.saturating_add(dy), '│', style);
            fb.put_char(right, y.saturating_add(dy), '│', style);
        }
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x
            .saturating_add(1)
            .saturating_add(cell_x.saturating_mul(self.cell_w));
        let py = start_y
            .saturating_add(1)
            .saturating_add(cell_y.saturating_mul(self.cell_h));
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        game: &Game,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 12 {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::fg(Rgb::new(200, 200, 200));

        let mut y = start_y;
        fb.put_str(panel_x, y, "LINES", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, game.lines_cleared(), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "PIECES", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, game.pieces_placed(), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "NEXT", label);
        y = y.saturating_add(1);
        let (kind, rotation) = game.next();
        fb.put_str(panel_x, y, piece_letter(kind), value);
        y = y.saturating_add(1);
        self.draw_preview(fb, panel_x, y, kind, rotation);
    }

    /// Draw the next piece's 5x5 grid with one column per local cell.
    fn draw_preview(&self, fb: &mut FrameBuffer, x: u16, y: u16, kind: PieceKind, rotation: Rotation) {
        let style = CellStyle::fg(piece_color(kind));
        for (row, col) in occupied_cells(kind, rotation) {
            fb.put_char(x.saturating_add(col as u16), y.saturating_add(row as u16), '▪', style);
        }
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle::fg(Rgb::new(255, 255, 255)).bold();
        fb.put_str(x, mid_y, text, style);
    }
}

fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::S => Rgb::new(100, 220, 120),
        PieceKind::Z => Rgb::new(220, 80, 80),
        PieceKind::J => Rgb::new(80, 120, 220),
        PieceKind::L => Rgb::new(255, 165, 0),
    }
}

fn piece_letter(kind: PieceKind) -> &'static str {
    match kind {
        PieceKind::O => "O",
        PieceKind::I => "I",
        PieceKind::L => "L",
        PieceKind::J => "J",
        PieceKind::Z => "Z",
        PieceKind::S => "S",
        PieceKind::T => "T",
    }
}
