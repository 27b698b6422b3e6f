//! Board module - manages the occupancy grid
//!
//! The board is a `width x height x depth` grid where each cell is either free
//! or filled. Only layer `z = 0` takes part in the simulation; the other layers
//! are allocated so the grid keeps its 3D shape.
//! Coordinates: (x, y) where x grows left to right and y grows top to bottom,
//! so row 0 is the top of the well.
//!
//! Cells live in one flat vector, layer-major then row-major
//! (`(z * height + y) * width + x`).

use log::debug;

use crate::error::BoardError;
use crate::pieces::occupied_cells;
use crate::types::{
    CellState, PieceKind, Rotation, BOARD_DEPTH, BOARD_HEIGHT, BOARD_WIDTH, PIECE_BLOCKS,
};

/// Size of a board, fixed at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardDimensions {
    pub width: usize,
    pub height: usize,
    pub depth: usize,
}

impl BoardDimensions {
    pub fn new(width: usize, height: usize, depth: usize) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    /// Total cell count, or `None` when it does not fit in `usize`
    fn cell_count(&self) -> Option<usize> {
        self.width
            .checked_mul(self.height)?
            .checked_mul(self.depth)
    }

    /// Every side is at least 1 and addressable with `i32` coordinates
    fn sides_in_range(&self) -> bool {
        let sides = [self.width, self.height, self.depth];
        sides.iter().all(|&n| n > 0 && n <= i32::MAX as usize)
    }
}

impl Default for BoardDimensions {
    fn default() -> Self {
        Self::new(BOARD_WIDTH, BOARD_HEIGHT, BOARD_DEPTH)
    }
}

/// The game board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    dims: BoardDimensions,
    cells: Vec<CellState>,
}

impl Board {
    /// Create an empty board with the default 7x14x7 dimensions
    pub fn new() -> Self {
        let dims = BoardDimensions::default();
        Self {
            dims,
            cells: vec![CellState::Free; BOARD_WIDTH * BOARD_HEIGHT * BOARD_DEPTH],
        }
    }

    /// Create an empty board of the given size.
    ///
    /// Every dimension must be in `1..=i32::MAX` and the grid must be
    /// allocatable; anything else is `InvalidDimensions`.
    pub fn with_dimensions(dims: BoardDimensions) -> Result<Self, BoardError> {
        let invalid = BoardError::InvalidDimensions {
            width: dims.width,
            height: dims.height,
            depth: dims.depth,
        };
        let count = match dims.cell_count() {
            Some(count) if dims.sides_in_range() => count,
            _ => return Err(invalid),
        };

        let mut cells = Vec::new();
        cells.try_reserve_exact(count).map_err(|_| invalid)?;
        cells.resize(count, CellState::Free);
        Ok(Self { dims, cells })
    }

    #[inline(always)]
    fn index(&self, x: i32, y: i32, z: i32) -> Option<usize> {
        if x < 0 || y < 0 || z < 0 {
            return None;
        }
        let (x, y, z) = (x as usize, y as usize, z as usize);
        if x >= self.dims.width || y >= self.dims.height || z >= self.dims.depth {
            return None;
        }
        Some((z * self.dims.height + y) * self.dims.width + x)
    }

    /// Board cell under local (row, col) of a piece placed at (x, y)
    #[inline(always)]
    fn target(x: i32, y: i32, row: usize, col: usize) -> Option<(i32, i32)> {
        Some((x.checked_add(col as i32)?, y.checked_add(row as i32)?))
    }

    #[inline(always)]
    fn checked_index(&self, x: i32, y: i32, z: i32) -> Result<usize, BoardError> {
        self.index(x, y, z).ok_or(BoardError::OutOfBounds { x, y, z })
    }

    pub fn width(&self) -> usize {
        self.dims.width
    }

    pub fn height(&self) -> usize {
        self.dims.height
    }

    pub fn depth(&self) -> usize {
        self.dims.depth
    }

    pub fn dimensions(&self) -> BoardDimensions {
        self.dims
    }

    /// Check if (x, y) lies on the simulated layer
    pub fn is_out_of_bounds(&self, x: i32, y: i32) -> bool {
        self.index(x, y, 0).is_none()
    }

    /// State of the cell at (x, y, z), any layer
    pub fn cell(&self, x: i32, y: i32, z: i32) -> Result<CellState, BoardError> {
        self.checked_index(x, y, z).map(|idx| self.cells[idx])
    }

    /// True iff the cell at (x, y, 0) is free.
    ///
    /// Coordinates outside the board are an error rather than a "blocked" answer.
    pub fn is_free_block(&self, x: i32, y: i32) -> Result<bool, BoardError> {
        self.cell(x, y, 0).map(CellState::is_free)
    }

    /// Check whether a piece fits at (x, y) without leaving the board or
    /// overlapping a filled cell.
    ///
    /// Local cell (row, col) is tested at board cell (x + col, y + row). Empty
    /// local cells are ignored, so a piece may hang its empty margin over the
    /// board edge.
    pub fn is_possible_movement(&self, x: i32, y: i32, kind: PieceKind, rotation: Rotation) -> bool {
        occupied_cells(kind, rotation).iter().all(|&(row, col)| {
            match Self::target(x, y, row, col).and_then(|(bx, by)| self.index(bx, by, 0)) {
                Some(idx) => self.cells[idx].is_free(),
                None => false,
            }
        })
    }

    /// Mark every occupied cell of the piece at (x, y) as filled.
    ///
    /// Overlap is not checked; call [`Board::is_possible_movement`] first.
    /// If any occupied cell would land outside the board nothing is written;
    /// the error names the first such cell, or the piece origin when the
    /// target coordinate itself overflows `i32`.
    pub fn store_piece(
        &mut self,
        x: i32,
        y: i32,
        kind: PieceKind,
        rotation: Rotation,
    ) -> Result<(), BoardError> {
        let cells = occupied_cells(kind, rotation);

        let mut targets = [0usize; PIECE_BLOCKS * PIECE_BLOCKS];
        for (slot, &(row, col)) in targets.iter_mut().zip(cells.iter()) {
            let (bx, by) =
                Self::target(x, y, row, col).ok_or(BoardError::OutOfBounds { x, y, z: 0 })?;
            *slot = self.checked_index(bx, by, 0)?;
        }

        for &idx in &targets[..cells.len()] {
            self.cells[idx] = CellState::Filled;
        }
        Ok(())
    }

    /// True iff any cell of the top row is filled
    pub fn is_game_over(&self) -> bool {
        self.cells[..self.dims.width].iter().any(|c| c.is_filled())
    }

    /// Check if a row of the simulated layer is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        match self.row(y) {
            Some(cells) => cells.iter().all(|c| c.is_filled()),
            None => false,
        }
    }

    /// Cells of row `y` on the simulated layer
    pub fn row(&self, y: usize) -> Option<&[CellState]> {
        if y >= self.dims.height {
            return None;
        }
        let start = y * self.dims.width;
        Some(&self.cells[start..start + self.dims.width])
    }

    /// Delete one row: every row above moves down by one and the top row
    /// becomes free.
    fn delete_line(&mut self, y: usize) {
        let width = self.dims.width;

        // copy_within handles the overlapping rows
        for row in (1..=y).rev() {
            let src_start = (row - 1) * width;
            self.cells
                .copy_within(src_start..src_start + width, row * width);
        }

        self.cells[..width].fill(CellState::Free);
    }

    /// Delete every full row, scanning from the top row down.
    ///
    /// Returns the number of rows deleted.
    pub fn delete_possible_lines(&mut self) -> usize {
        let mut deleted = 0;
        for y in 0..self.dims.height {
            if self.is_row_full(y) {
                debug!("deleting full row {}", y);
                self.delete_line(y);
                deleted += 1;
            }
        }
        deleted
    }

    /// Number of filled cells on the simulated layer
    pub fn filled_count(&self) -> usize {
        let layer = self.dims.width * self.dims.height;
        self.cells[..layer].iter().filter(|c| c.is_filled()).count()
    }

    /// Reset every cell to free
    pub fn clear(&mut self) {
        self.cells.fill(CellState::Free);
    }

    #[cfg(test)]
    fn fill(&mut self, x: i32, y: i32) {
        let idx = self.index(x, y, 0).unwrap();
        self.cells[idx] = CellState::Filled;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_index_calculation() {
        let board = Board::new();
        assert_eq!(board.index(0, 0, 0), Some(0));
        assert_eq!(board.index(6, 0, 0), Some(6));
        assert_eq!(board.index(0, 1, 0), Some(7));
        assert_eq!(board.index(6, 13, 0), Some(97));
        assert_eq!(board.index(0, 0, 1), Some(98));
        assert_eq!(board.index(-1, 0, 0), None);
        assert_eq!(board.index(7, 0, 0), None);
        assert_eq!(board.index(0, 14, 0), None);
        assert_eq!(board.index(0, 0, 7), None);
    }

    #[test]
    fn test_depth_is_allocated_but_untouched() {
        let mut board = Board::new();
        assert_eq!(board.cells.len(), 7 * 14 * 7);

        board
            .store_piece(1, 5, PieceKind::T, Rotation::North)
            .unwrap();
        for z in 1..7 {
            for y in 0..14 {
                for x in 0..7 {
                    assert_eq!(board.cell(x, y, z), Ok(CellState::Free));
                }
            }
        }
    }

    #[test]
    fn test_store_piece_out_of_bounds_writes_nothing() {
        let mut board = Board::new();

        // I North occupies row 2, cols 1..=4; at x = 4 the last block is at x = 8.
        let err = board.store_piece(4, 0, PieceKind::I, Rotation::North);
        assert_eq!(err, Err(BoardError::OutOfBounds { x: 7, y: 2, z: 0 }));
        assert_eq!(board.filled_count(), 0);
    }

    #[test]
    fn test_delete_line_shifts_and_frees_top_row() {
        let mut board = Board::new();
        for x in 0..7 {
            board.fill(x, 0);
            board.fill(x, 3);
        }
        board.fill(2, 1);

        assert_eq!(board.delete_possible_lines(), 2);

        // Row 0 goes first and (2, 1) drops to (2, 2); deleting row 3 then
        // pulls it down once more.
        assert_eq!(board.is_free_block(2, 3), Ok(false));
        assert_eq!(board.filled_count(), 1);
        assert!(!board.is_game_over());
    }

    #[test]
    fn test_adjacent_full_rows_all_cleared() {
        let mut board = Board::new();
        for y in 10..14 {
            for x in 0..7 {
                board.fill(x, y);
            }
        }
        board.fill(0, 9);

        assert_eq!(board.delete_possible_lines(), 4);
        assert_eq!(board.filled_count(), 1);
        assert_eq!(board.is_free_block(0, 13), Ok(false));
    }
}
