use crate::Point;
use crate::error::BoardError;
use crate::grid::Grid;
use crate::rules::{MoveResult, apply_move};
use crate::stone::Stone;

/// A single game session: the board plus the side to move.
///
/// Constructed and owned by whatever harness hosts the game; there is no
/// global board state.
#[derive(Debug, Clone)]
pub struct Game {
    grid: Grid,
    turn: Stone,
}

impl Game {
    /// Start a game on an empty size x size board. Black moves first.
    pub fn new(size: u8) -> Result<Self, BoardError> {
        Ok(Game {
            grid: Grid::new(size)?,
            turn: Stone::Black,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn turn(&self) -> Stone {
        self.turn
    }

    /// Play at `point` for the side to move.
    ///
    /// The turn passes to the opponent on `Accepted` and `Captured`; an
    /// `Illegal` move leaves both the board and the turn untouched.
    pub fn play(&mut self, point: Point) -> Result<MoveResult, BoardError> {
        let result = apply_move(&mut self.grid, point, self.turn)?;
        if result != MoveResult::Illegal {
            self.turn = self.turn.opp();
        }
        Ok(result)
    }

    /// Whether a move at `point` would be accepted for the side to move,
    /// without mutating the board. Off-board points are simply not legal.
    pub fn is_legal(&self, point: Point) -> bool {
        if !self.grid.on_board(point) {
            return false;
        }
        let mut scratch = self.grid.clone();
        matches!(
            apply_move(&mut scratch, point, self.turn),
            Ok(MoveResult::Accepted | MoveResult::Captured(_))
        )
    }
}
