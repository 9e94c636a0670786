pub mod chains;
pub mod error;
pub mod game;
pub mod grid;
pub mod rules;
pub mod stone;

/// Board coordinate as (row, col), 0-indexed from the top-left corner.
pub type Point = (u8, u8);

pub use chains::{Chain, find_chains, liberties};
pub use error::BoardError;
pub use game::Game;
pub use grid::Grid;
pub use rules::{MoveResult, apply_move};
pub use stone::Stone;
