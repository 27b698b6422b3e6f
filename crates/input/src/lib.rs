//! Keyboard input for the terminal front end.
//!
//! Maps `crossterm` key events onto [`crate::types::GameAction`]. Only key
//! presses are considered; terminals differ on whether repeats and releases
//! are reported at all.

pub mod map;

pub use tetris3d_types as types;

pub use map::{handle_key_event, should_quit};
