//! Pieces module - tetromino shape table and spawn offsets
//!
//! Every piece kind has four rotation states. Each rotation is a 5x5 local
//! grid of block codes (0 = empty, 1 = block, 2 = pivot), indexed `[row][col]`.
//! When a piece is placed at board position `(x, y)`, local cell `(row, col)`
//! lands on board cell `(x + col, y + row)`.
//!
//! Both tables are `static` and never mutated.

use arrayvec::ArrayVec;

use crate::error::BoardError;
use crate::types::{BlockType, PieceKind, Rotation, PIECE_BLOCKS};

/// A cell of the local grid as `(row, col)`
pub type LocalCell = (usize, usize);

/// Occupied cells of one rotation; never allocates
pub type OccupiedCells = ArrayVec<LocalCell, { PIECE_BLOCKS * PIECE_BLOCKS }>;

type PieceGrid = [[u8; PIECE_BLOCKS]; PIECE_BLOCKS];

/// Shape table indexed `[kind][rotation][row][col]`
static PIECES: [[PieceGrid; 4]; 7] = [
    // O
    [
        [
            [0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0],
            [0, 0, 2, 1, 0],
            [0, 0, 1, 1, 0],
            [0, 0, 0, 0, 0],
        ],
        [
            [0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0],
            [0, 0, 2, 1, 0],
            [0, 0, 1, 1, 0],
            [0, 0, 0, 0, 0],
        ],
        [
            [0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0],
            [0, 0, 2, 1, 0],
            [0, 0, 1, 1, 0],
            [0, 0, 0, 0, 0],
        ],
        [
            [0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0],
            [0, 0, 2, 1, 0],
            [0, 0, 1, 1, 0],
            [0, 0, 0, 0, 0],
        ],
    ],
    // I
    [
        [
            [0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0],
            [0, 1, 2, 1, 1],
            [0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0],
        ],
        [
            [0, 0, 0, 0, 0],
            [0, 0, 1, 0, 0],
            [0, 0, 2, 0, 0],
            [0, 0, 1, 0, 0],
            [0, 0, 1, 0, 0],
        ],
        [
            [0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0],
            [1, 1, 2, 1, 0],
            [0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0],
        ],
        [
            [0, 0, 1, 0, 0],
            [0, 0, 1, 0, 0],
            [0, 0, 2, 0, 0],
            [0, 0, 1, 0, 0],
            [0, 0, 0, 0, 0],
        ],
    ],
    // L
    [
        [
            [0, 0, 0, 0, 0],
            [0, 0, 1, 0, 0],
            [0, 0, 2, 0, 0],
            [0, 0, 1, 1, 0],
            [0, 0, 0, 0, 0],
        ],
        [
            [0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0],
            [0, 1, 2, 1, 0],
            [0, 1, 0, 0, 0],
            [0, 0, 0, 0, 0],
        ],
        [
            [0, 0, 0, 0, 0],
            [0, 1, 1, 0, 0],
            [0, 0, 2, 0, 0],
            [0, 0, 1, 0, 0],
            [0, 0, 0, 0, 0],
        ],
        [
            [0, 0, 0, 0, 0],
            [0, 0, 0, 1, 0],
            [0, 1, 2, 1, 0],
            [0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0],
        ],
    ],
    // J
    [
        [
            [0, 0, 0, 0, 0],
            [0, 0, 1, 0, 0],
            [0, 0, 2, 0, 0],
            [0, 1, 1, 0, 0],
            [0, 0, 0, 0, 0],
        ],
        [
            [0, 0, 0, 0, 0],
            [0, 1, 0, 0, 0],
            [0, 1, 2, 1, 0],
            [0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0],
        ],
        [
            [0, 0, 0, 0, 0],
            [0, 0, 1, 1, 0],
            [0, 0, 2, 0, 0],
            [0, 0, 1, 0, 0],
            [0, 0, 0, 0, 0],
        ],
        [
            [0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0],
            [0, 1, 2, 1, 0],
            [0, 0, 0, 1, 0],
            [0, 0, 0, 0, 0],
        ],
    ],
    // Z
    [
        [
            [0, 0, 0, 0, 0],
            [0, 0, 0, 1, 0],
            [0, 0, 2, 1, 0],
            [0, 0, 1, 0, 0],
            [0, 0, 0, 0, 0],
        ],
        [
            [0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0],
            [0, 1, 2, 0, 0],
            [0, 0, 1, 1, 0],
            [0, 0, 0, 0, 0],
        ],
        [
            [0, 0, 0, 0, 0],
            [0, 0, 1, 0, 0],
            [0, 1, 2, 0, 0],
            [0, 1, 0, 0, 0],
            [0, 0, 0, 0, 0],
        ],
        [
            [0, 0, 0, 0, 0],
            [0, 1, 1, 0, 0],
            [0, 0, 2, 1, 0],
            [0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0],
        ],
    ],
    // S
    [
        [
            [0, 0, 0, 0, 0],
            [0, 0, 1, 0, 0],
            [0, 0, 2, 1, 0],
            [0, 0, 0, 1, 0],
            [0, 0, 0, 0, 0],
        ],
        [
            [0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0],
            [0, 0, 2, 1, 0],
            [0, 1, 1, 0, 0],
            [0, 0, 0, 0, 0],
        ],
        [
            [0, 0, 0, 0, 0],
            [0, 1, 0, 0, 0],
            [0, 1, 2, 0, 0],
            [0, 0, 1, 0, 0],
            [0, 0, 0, 0, 0],
        ],
        [
            [0, 0, 0, 0, 0],
            [0, 0, 1, 1, 0],
            [0, 1, 2, 0, 0],
            [0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0],
        ],
    ],
    // T
    [
        [
            [0, 0, 0, 0, 0],
            [0, 0, 1, 0, 0],
            [0, 0, 2, 1, 0],
            [0, 0, 1, 0, 0],
            [0, 0, 0, 0, 0],
        ],
        [
            [0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0],
            [0, 1, 2, 1, 0],
            [0, 0, 1, 0, 0],
            [0, 0, 0, 0, 0],
        ],
        [
            [0, 0, 0, 0, 0],
            [0, 0, 1, 0, 0],
            [0, 1, 2, 0, 0],
            [0, 0, 1, 0, 0],
            [0, 0, 0, 0, 0],
        ],
        [
            [0, 0, 0, 0, 0],
            [0, 0, 1, 0, 0],
            [0, 1, 2, 1, 0],
            [0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0],
        ],
    ],
];

/// Spawn displacement table indexed `[kind][rotation]` as `(dx, dy)`
static INITIAL_POSITIONS: [[(i32, i32); 4]; 7] = [
    // O
    [(-2, -3), (-2, -3), (-2, -3), (-2, -3)],
    // I
    [(-2, -2), (-2, -3), (-2, -2), (-2, -3)],
    // L
    [(-2, -3), (-2, -3), (-2, -3), (-2, -2)],
    // J
    [(-2, -3), (-2, -2), (-2, -3), (-2, -3)],
    // Z
    [(-2, -3), (-2, -3), (-2, -3), (-2, -2)],
    // S
    [(-2, -3), (-2, -3), (-2, -3), (-2, -2)],
    // T
    [(-2, -3), (-2, -3), (-2, -3), (-2, -2)],
];

#[inline(always)]
fn grid(kind: PieceKind, rotation: Rotation) -> &'static PieceGrid {
    &PIECES[kind.index()][rotation.index()]
}

/// Block code at local cell `(row, col)` of a piece rotation.
///
/// Fails with [`BoardError::LocalCellOutOfRange`] when `row` or `col` is not
/// in `0..PIECE_BLOCKS`.
pub fn block_type(
    kind: PieceKind,
    rotation: Rotation,
    row: usize,
    col: usize,
) -> Result<BlockType, BoardError> {
    grid(kind, rotation)
        .get(row)
        .and_then(|r| r.get(col))
        .map(|&code| BlockType::from_code(code))
        .ok_or(BoardError::LocalCellOutOfRange { row, col })
}

/// Horizontal displacement that spawns the piece in the right column
pub fn x_initial_position(kind: PieceKind, rotation: Rotation) -> i32 {
    INITIAL_POSITIONS[kind.index()][rotation.index()].0
}

/// Vertical displacement that spawns the piece in the right row
pub fn y_initial_position(kind: PieceKind, rotation: Rotation) -> i32 {
    INITIAL_POSITIONS[kind.index()][rotation.index()].1
}

/// All occupied local cells of a rotation, in row-major order
pub fn occupied_cells(kind: PieceKind, rotation: Rotation) -> OccupiedCells {
    let mut cells = OccupiedCells::new();
    for (row, line) in grid(kind, rotation).iter().enumerate() {
        for (col, &code) in line.iter().enumerate() {
            if code != 0 {
                cells.push((row, col));
            }
        }
    }
    cells
}

/// Topmost local row holding a block, `None` for an empty grid
pub fn top_row(kind: PieceKind, rotation: Rotation) -> Option<usize> {
    grid(kind, rotation)
        .iter()
        .position(|line| line.iter().any(|&code| code != 0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_rotation_has_four_blocks_and_one_pivot() {
        for kind in PieceKind::ALL {
            for rotation in Rotation::ALL {
                let cells = occupied_cells(kind, rotation);
                assert_eq!(cells.len(), 4, "{:?} {:?}", kind, rotation);

                let pivots = cells
                    .iter()
                    .filter(|&&(r, c)| {
                        block_type(kind, rotation, r, c) == Ok(BlockType::Pivot)
                    })
                    .count();
                assert_eq!(pivots, 1, "{:?} {:?}", kind, rotation);
            }
        }
    }

    #[test]
    fn pivot_sits_in_the_grid_center() {
        for kind in PieceKind::ALL {
            for rotation in Rotation::ALL {
                assert_eq!(block_type(kind, rotation, 2, 2), Ok(BlockType::Pivot));
            }
        }
    }

    #[test]
    fn block_type_rejects_out_of_range_local_cells() {
        assert_eq!(
            block_type(PieceKind::T, Rotation::North, 5, 0),
            Err(BoardError::LocalCellOutOfRange { row: 5, col: 0 })
        );
        assert_eq!(
            block_type(PieceKind::T, Rotation::North, 0, 5),
            Err(BoardError::LocalCellOutOfRange { row: 0, col: 5 })
        );
    }

    #[test]
    fn top_row_of_i_piece() {
        assert_eq!(top_row(PieceKind::I, Rotation::North), Some(2));
        assert_eq!(top_row(PieceKind::I, Rotation::West), Some(0));
    }
}
