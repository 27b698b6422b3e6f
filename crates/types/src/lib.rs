//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data with no external dependencies, so they can be used
//! by the simulation, the terminal view and the binary alike.
//!
//! # Board Dimensions
//!
//! The default playfield is a small 3D well:
//!
//! - **Width**: 7 columns (indexed 0-6)
//! - **Height**: 14 rows (indexed 0-13, row 0 is the top)
//! - **Depth**: 7 layers (allocated, only layer 0 is simulated)
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `WAIT_TIME_MS` | 700 | Time a piece rests before falling one row |
//! | `TICK_MS` | 16 | Fixed timestep used by the demo loop |
//!
//! # Examples
//!
//! ```
//! use tetris3d_types::{PieceKind, Rotation, BOARD_WIDTH, BOARD_HEIGHT};
//!
//! assert_eq!(PieceKind::T.as_str(), "t");
//! assert_eq!(PieceKind::ALL[PieceKind::L.index()], PieceKind::L);
//!
//! assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
//!
//! assert_eq!(BOARD_WIDTH, 7);
//! assert_eq!(BOARD_HEIGHT, 14);
//! ```

/// Board width in cells (7 columns)
pub const BOARD_WIDTH: usize = 7;

/// Board height in cells (14 rows)
pub const BOARD_HEIGHT: usize = 14;

/// Board depth in cells (7 layers)
pub const BOARD_DEPTH: usize = 7;

/// Side length of the square local grid a piece is defined in
pub const PIECE_BLOCKS: usize = 5;

/// Milliseconds a piece rests before gravity moves it one row down
pub const WAIT_TIME_MS: u32 = 700;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// The seven tetromino piece kinds, in shape-table order.
///
/// The discriminant is the index of the piece in the shape table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    /// 2x2 square
    O,
    /// Straight bar
    I,
    L,
    /// Mirrored L
    J,
    Z,
    /// Mirrored Z
    S,
    T,
}

impl PieceKind {
    /// Every kind, in table order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::O,
        PieceKind::I,
        PieceKind::L,
        PieceKind::J,
        PieceKind::Z,
        PieceKind::S,
        PieceKind::T,
    ];

    /// Row of this kind in the shape and spawn-offset tables
    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::O => "o",
            PieceKind::I => "i",
            PieceKind::L => "l",
            PieceKind::J => "j",
            PieceKind::Z => "z",
            PieceKind::S => "s",
            PieceKind::T => "t",
        }
    }
}

/// Rotation states (North = table rotation 0)
///
/// Rotating clockwise advances the table rotation index by one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    pub const ALL: [Rotation; 4] = [
        Rotation::North,
        Rotation::East,
        Rotation::South,
        Rotation::West,
    ];

    /// Column of this rotation in the shape and spawn-offset tables
    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Rotate clockwise
    pub fn rotate_cw(&self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            Rotation::North => "north",
            Rotation::East => "east",
            Rotation::South => "south",
            Rotation::West => "west",
        }
    }
}

/// State of one board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellState {
    #[default]
    Free,
    Filled,
}

impl CellState {
    #[inline(always)]
    pub fn is_free(self) -> bool {
        self == CellState::Free
    }

    #[inline(always)]
    pub fn is_filled(self) -> bool {
        self == CellState::Filled
    }
}

/// Code of one cell in a piece's 5x5 local grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockType {
    Empty = 0,
    Block = 1,
    /// The block the piece rotates around
    Pivot = 2,
}

impl BlockType {
    /// Numeric code as stored in the shape table
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Decode a table code; any nonzero code other than the pivot is a block
    pub fn from_code(code: u8) -> Self {
        match code {
            0 => BlockType::Empty,
            2 => BlockType::Pivot,
            _ => BlockType::Block,
        }
    }

    /// True for every code that occupies a cell
    #[inline(always)]
    pub fn is_occupied(self) -> bool {
        self != BlockType::Empty
    }
}

/// Game actions understood by the falling-piece loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    MoveDown,
    Rotate,
    Drop,
}

impl GameAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::MoveDown => "moveDown",
            GameAction::Rotate => "rotate",
            GameAction::Drop => "drop",
        }
    }
}
