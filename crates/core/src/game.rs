//! Game module - the falling-piece loop
//!
//! `Game` owns the board, the active falling piece and the next piece. It is
//! the only caller of the board's placement rules: every move is tested with
//! [`Board::is_possible_movement`] before it is applied, and a piece that can no
//! longer fall is stored, full lines are deleted and the game-over row is
//! checked before the next piece spawns.

use log::{debug, info, trace};

use crate::board::{Board, BoardDimensions};
use crate::error::BoardError;
use crate::pieces::{top_row, x_initial_position, y_initial_position};
use crate::rng::SimpleRng;
use crate::snapshot::GameSnapshot;
use crate::types::{GameAction, PieceKind, Rotation, WAIT_TIME_MS};

/// Runtime configuration of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub dimensions: BoardDimensions,
    pub seed: u32,
    /// Gravity interval in milliseconds
    pub wait_time_ms: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            dimensions: BoardDimensions::default(),
            seed: 1,
            wait_time_ms: WAIT_TIME_MS,
        }
    }
}

/// The falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i32,
    pub y: i32,
}

impl ActivePiece {
    /// Place a new piece at its spawn position on `board`.
    ///
    /// The spawn offsets put the piece above the well; the board has no hidden
    /// rows, so the piece is lowered until its top block sits on row 0.
    pub fn spawn(kind: PieceKind, rotation: Rotation, board: &Board) -> Self {
        let x = (board.width() / 2) as i32 + x_initial_position(kind, rotation);
        let top = top_row(kind, rotation).unwrap_or(0) as i32;
        let y = y_initial_position(kind, rotation).max(-top);
        Self {
            kind,
            rotation,
            x,
            y,
        }
    }

    pub fn fits(&self, board: &Board) -> bool {
        board.is_possible_movement(self.x, self.y, self.kind, self.rotation)
    }

    fn shifted(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    fn rotated(&self) -> Self {
        Self {
            rotation: self.rotation.rotate_cw(),
            ..*self
        }
    }
}

/// What happened when a piece was stored on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub piece: ActivePiece,
    pub lines_cleared: usize,
    pub game_over: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    active: ActivePiece,
    next: (PieceKind, Rotation),
    rng: SimpleRng,
    seed: u32,
    wait_time_ms: u32,
    drop_timer_ms: u32,
    lines_cleared: u32,
    pieces_placed: u32,
    game_over: bool,
}

impl Game {
    /// Create a game and spawn its first piece
    pub fn new(config: GameConfig) -> Result<Self, BoardError> {
        let board = Board::with_dimensions(config.dimensions)?;
        let mut rng = SimpleRng::new(config.seed);
        let (kind, rotation) = rng.next_piece();
        let next = rng.next_piece();
        let active = ActivePiece::spawn(kind, rotation, &board);
        let game_over = !active.fits(&board);

        if game_over {
            info!("board {:?} cannot hold the first piece", config.dimensions);
        }

        Ok(Self {
            board,
            active,
            next,
            rng,
            seed: config.seed,
            wait_time_ms: config.wait_time_ms.max(1),
            drop_timer_ms: 0,
            lines_cleared: 0,
            pieces_placed: 0,
            game_over,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> ActivePiece {
        self.active
    }

    /// Kind and rotation of the piece that spawns after the active one
    pub fn next(&self) -> (PieceKind, Rotation) {
        self.next
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    pub fn pieces_placed(&self) -> u32 {
        self.pieces_placed
    }

    pub fn is_over(&self) -> bool {
        self.game_over
    }

    /// Promote the next piece to active and draw a new next piece.
    ///
    /// Ends the game when the spawn position is blocked.
    pub fn create_new_piece(&mut self) {
        let (kind, rotation) = self.next;
        self.active = ActivePiece::spawn(kind, rotation, &self.board);
        self.next = self.rng.next_piece();
        self.drop_timer_ms = 0;

        if self.active.fits(&self.board) {
            debug!(
                "spawned {} {} at ({}, {})",
                kind.as_str(),
                rotation.as_str(),
                self.active.x,
                self.active.y
            );
        } else {
            info!("spawn of {} blocked, game over", kind.as_str());
            self.game_over = true;
        }
    }

    fn try_replace(&mut self, candidate: ActivePiece) -> bool {
        if self.game_over || !candidate.fits(&self.board) {
            return false;
        }
        self.active = candidate;
        true
    }

    pub fn move_left(&mut self) -> bool {
        self.try_replace(self.active.shifted(-1, 0))
    }

    pub fn move_right(&mut self) -> bool {
        self.try_replace(self.active.shifted(1, 0))
    }

    pub fn move_down(&mut self) -> bool {
        self.try_replace(self.active.shifted(0, 1))
    }

    /// Rotate clockwise in place
    pub fn rotate(&mut self) -> bool {
        self.try_replace(self.active.rotated())
    }

    /// Drop the piece as far as it goes and store it
    pub fn drop_piece(&mut self) -> Result<Option<LockEvent>, BoardError> {
        if self.game_over {
            return Ok(None);
        }
        while self.move_down() {}
        self.lock_piece().map(Some)
    }

    /// Apply one action. Returns a lock event when the action stored a piece.
    pub fn apply_action(&mut self, action: GameAction) -> Result<Option<LockEvent>, BoardError> {
        trace!("action {}", action.as_str());
        match action {
            GameAction::MoveLeft => {
                self.move_left();
            }
            GameAction::MoveRight => {
                self.move_right();
            }
            GameAction::MoveDown => {
                self.move_down();
            }
            GameAction::Rotate => {
                self.rotate();
            }
            GameAction::Drop => return self.drop_piece(),
        }
        Ok(None)
    }

    /// Store the active piece, delete full lines and spawn the next piece
    fn lock_piece(&mut self) -> Result<LockEvent, BoardError> {
        let piece = self.active;
        self.board
            .store_piece(piece.x, piece.y, piece.kind, piece.rotation)?;
        self.pieces_placed += 1;

        let lines = self.board.delete_possible_lines();
        self.lines_cleared += lines as u32;
        debug!(
            "locked {} at ({}, {}), {} line(s) cleared",
            piece.kind.as_str(),
            piece.x,
            piece.y,
            lines
        );

        if self.board.is_game_over() {
            info!(
                "game over after {} pieces, {} lines",
                self.pieces_placed, self.lines_cleared
            );
            self.game_over = true;
        } else {
            self.create_new_piece();
        }

        Ok(LockEvent {
            piece,
            lines_cleared: lines,
            game_over: self.game_over,
        })
    }

    /// Advance gravity by `elapsed_ms`.
    ///
    /// Every `wait_time_ms` the piece falls one row; a piece that cannot fall
    /// is stored. At most one piece is stored per call.
    pub fn tick(&mut self, elapsed_ms: u32) -> Result<Option<LockEvent>, BoardError> {
        if self.game_over {
            return Ok(None);
        }

        self.drop_timer_ms = self.drop_timer_ms.saturating_add(elapsed_ms);
        while self.drop_timer_ms >= self.wait_time_ms {
            self.drop_timer_ms -= self.wait_time_ms;
            if !self.move_down() {
                self.drop_timer_ms = 0;
                return self.lock_piece().map(Some);
            }
        }
        Ok(None)
    }

    /// Serializable view of the current state
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::from_game(self)
    }
}
