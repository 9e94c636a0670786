use std::fmt;

/// Caller contract violations. Rejected moves are not errors; they surface
/// as `MoveResult::Illegal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    InvalidSize,
    OutOfBounds,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidSize => write!(f, "invalid board size"),
            BoardError::OutOfBounds => write!(f, "position out of bounds"),
        }
    }
}

impl std::error::Error for BoardError {}
