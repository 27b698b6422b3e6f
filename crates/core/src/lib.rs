//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds the board rules and the falling-piece loop. It has no
//! dependency on terminals or I/O.
//!
//! # Module Structure
//!
//! - [`pieces`]: static 5x5 shape table and spawn offsets for 7 kinds x 4 rotations
//! - [`board`]: occupancy grid with placement checks, piece storage and line deletion
//! - [`game`]: active/next piece, gravity timer and the lock/clear/spawn cycle
//! - [`rng`]: deterministic LCG used to draw new pieces
//! - [`snapshot`]: serializable view of a game
//!
//! # Example
//!
//! ```
//! use tetris3d_core::{Board, pieces};
//! use tetris3d_core::types::{PieceKind, Rotation};
//!
//! let mut board = Board::new();
//! assert!(board.is_possible_movement(0, 0, PieceKind::T, Rotation::North));
//!
//! board.store_piece(0, 0, PieceKind::T, Rotation::North).unwrap();
//! // T North has a block at local (row 1, col 2) -> board (2, 1).
//! assert_eq!(board.is_free_block(2, 1), Ok(false));
//! assert_eq!(pieces::occupied_cells(PieceKind::T, Rotation::North).len(), 4);
//! ```

pub mod board;
pub mod error;
pub mod game;
pub mod pieces;
pub mod rng;
pub mod snapshot;

pub use tetris3d_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, BoardDimensions};
pub use error::BoardError;
pub use game::{ActivePiece, Game, GameConfig, LockEvent};
pub use pieces::{block_type, occupied_cells, x_initial_position, y_initial_position};
pub use rng::SimpleRng;
pub use snapshot::{ActiveSnapshot, GameSnapshot};
