use serde::{Deserialize, Serialize};

use crate::Point;
use crate::chains::{find_chains, liberties};
use crate::error::BoardError;
use crate::grid::Grid;
use crate::stone::Stone;

/// Outcome of a single move attempt.
///
/// `Illegal` is an expected result of user input, not an error; only
/// contract violations (off-board points) come back as `BoardError`.
/// Serializes as `{"status":"accepted"}`, `{"status":"illegal"}` or
/// `{"status":"captured","points":[[row,col],..]}` for the wasm boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "points", rename_all = "lowercase")]
pub enum MoveResult {
    Accepted,
    Captured(Vec<Point>),
    Illegal,
}

/// Place a stone and resolve captures.
///
/// An occupied target rejects the move outright. Otherwise the stone is
/// placed tentatively and the board is re-partitioned into chains. Enemy
/// chains left without liberties are removed and reported; failing that, a
/// placement that leaves its own chain without liberties is reverted and
/// rejected.
///
/// Capture resolution runs strictly before the self-capture check: a stone
/// that fills the opponent's last liberty is legal even if its own chain
/// has no liberties until the captured stones come off.
pub fn apply_move(grid: &mut Grid, point: Point, stone: Stone) -> Result<MoveResult, BoardError> {
    if grid.stone_at(point)?.is_some() {
        return Ok(MoveResult::Illegal);
    }

    grid.set_stone(point, stone)?;
    let chains = find_chains(grid);

    let mut captured: Vec<Point> = Vec::new();
    for chain in &chains {
        if chain.stone != stone && liberties(grid, chain).is_empty() {
            captured.extend(&chain.cells);
        }
    }
    if !captured.is_empty() {
        for &p in &captured {
            grid.clear_stone(p)?;
        }
        return Ok(MoveResult::Captured(captured));
    }

    let self_captured = chains
        .iter()
        .any(|chain| chain.stone == stone && liberties(grid, chain).is_empty());
    if self_captured {
        grid.clear_stone(point)?;
        return Ok(MoveResult::Illegal);
    }

    Ok(MoveResult::Accepted)
}
