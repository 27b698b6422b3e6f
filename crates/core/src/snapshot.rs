//! Snapshot module - serializable view of a game
//!
//! Used for headless output; the board is flattened to one string per row
//! (`#` = filled, `.` = free, `@` = active piece).

use serde::Serialize;

use crate::game::{ActivePiece, Game};
use crate::pieces::occupied_cells;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActiveSnapshot {
    pub kind: &'static str,
    pub rotation: &'static str,
    pub x: i32,
    pub y: i32,
}

impl From<ActivePiece> for ActiveSnapshot {
    fn from(value: ActivePiece) -> Self {
        Self {
            kind: value.kind.as_str(),
            rotation: value.rotation.as_str(),
            x: value.x,
            y: value.y,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    pub width: usize,
    pub height: usize,
    pub rows: Vec<String>,
    pub active: Option<ActiveSnapshot>,
    pub next: &'static str,
    pub lines_cleared: u32,
    pub pieces_placed: u32,
    pub game_over: bool,
}

impl GameSnapshot {
    pub fn from_game(game: &Game) -> Self {
        let board = game.board();
        let (width, height) = (board.width(), board.height());

        let mut grid: Vec<Vec<char>> = (0..height)
            .map(|y| {
                board
                    .row(y)
                    .unwrap_or_default()
                    .iter()
                    .map(|c| if c.is_filled() { '#' } else { '.' })
                    .collect()
            })
            .collect();

        // A finished game has no live piece to draw.
        let active = (!game.is_over()).then(|| game.active());
        if let Some(piece) = active {
            for (row, col) in occupied_cells(piece.kind, piece.rotation) {
                let x = piece.x + col as i32;
                let y = piece.y + row as i32;
                if !board.is_out_of_bounds(x, y) {
                    grid[y as usize][x as usize] = '@';
                }
            }
        }

        Self {
            width,
            height,
            rows: grid.into_iter().map(|r| r.into_iter().collect()).collect(),
            active: active.map(ActiveSnapshot::from),
            next: game.next().0.as_str(),
            lines_cleared: game.lines_cleared(),
            pieces_placed: game.pieces_placed(),
            game_over: game.is_over(),
        }
    }

    /// Plain-text board, one line per row
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for row in &self.rows {
            out.push_str(row);
            out.push('\n');
        }
        out
    }
}
