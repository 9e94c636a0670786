use arrayvec::ArrayVec;

use crate::Point;
use crate::error::BoardError;
use crate::stone::Stone;

/// Square board stored as a flat row-major array of i8 cells.
///
/// The size is fixed at construction. Out-of-bounds access is a harness
/// bug and comes back as `BoardError::OutOfBounds`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    board: Vec<i8>,
    size: u8,
}

impl Grid {
    /// Create an empty size x size grid.
    pub fn new(size: u8) -> Result<Self, BoardError> {
        if size == 0 {
            return Err(BoardError::InvalidSize);
        }
        Ok(Grid {
            board: vec![0i8; size as usize * size as usize],
            size,
        })
    }

    /// Build a grid from an explicit cell matrix (rows of i8 values).
    pub fn from_rows(rows: Vec<Vec<i8>>) -> Self {
        let size = rows.len() as u8;
        assert!(size > 0, "empty board matrix");
        assert!(
            rows.iter().all(|row| row.len() == size as usize),
            "malformed board matrix"
        );
        Grid {
            board: rows.into_iter().flatten().collect(),
            size,
        }
    }

    // -- Accessors --

    pub fn size(&self) -> u8 {
        self.size
    }

    /// Flat row-major cells: 1 = Black, -1 = White, 0 = empty.
    pub fn board(&self) -> &[i8] {
        &self.board
    }

    pub fn is_empty(&self) -> bool {
        self.board.iter().all(|&c| c == 0)
    }

    pub fn on_board(&self, (row, col): Point) -> bool {
        row < self.size && col < self.size
    }

    /// The stone at a position, or None for an empty cell.
    pub fn stone_at(&self, point: Point) -> Result<Option<Stone>, BoardError> {
        if !self.on_board(point) {
            return Err(BoardError::OutOfBounds);
        }
        Ok(self.cell(point))
    }

    // -- Mutation --

    pub fn set_stone(&mut self, point: Point, stone: Stone) -> Result<(), BoardError> {
        if !self.on_board(point) {
            return Err(BoardError::OutOfBounds);
        }
        let i = self.idx(point);
        self.board[i] = stone.to_int();
        Ok(())
    }

    pub fn clear_stone(&mut self, point: Point) -> Result<(), BoardError> {
        if !self.on_board(point) {
            return Err(BoardError::OutOfBounds);
        }
        let i = self.idx(point);
        self.board[i] = 0;
        Ok(())
    }

    // -- Adjacency --

    /// The in-bounds orthogonal neighbors, in the fixed order up, down,
    /// left, right (fewer at edges and corners).
    pub fn neighbors(&self, (row, col): Point) -> ArrayVec<Point, 4> {
        let mut result = ArrayVec::new();
        if row > 0 {
            result.push((row - 1, col));
        }
        if row + 1 < self.size {
            result.push((row + 1, col));
        }
        if col > 0 {
            result.push((row, col - 1));
        }
        if col + 1 < self.size {
            result.push((row, col + 1));
        }
        result
    }

    // -- Internal helpers --

    /// Cell lookup for points already known to be on the board.
    pub(crate) fn cell(&self, point: Point) -> Option<Stone> {
        Stone::from_int(self.board[self.idx(point)])
    }

    #[inline]
    pub(crate) fn idx(&self, (row, col): Point) -> usize {
        row as usize * self.size as usize + col as usize
    }
}
