//! Terminal view of a game.
//!
//! Renders into a simple framebuffer that is flushed to the terminal with
//! crossterm. The view itself does no I/O and can be unit-tested.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tetris3d_core as core;
pub use tetris3d_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
