//! 3D falling-block demo (workspace facade crate).
//!
//! Re-exports the workspace crates as `tetris3d::{core,input,term,types}` so
//! tests, benches and the binary share one import path.

pub use tetris3d_core as core;
pub use tetris3d_input as input;
pub use tetris3d_term as term;
pub use tetris3d_types as types;
