use go_board::Game;
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Browser-facing board handle.
///
/// The JS harness owns the DOM: it builds the table, translates a click
/// into (row, col), calls `play`, and projects `board()` back into cell
/// classes. Everything rule-shaped stays on this side of the boundary.
#[wasm_bindgen]
pub struct WasmBoard {
    inner: Game,
}

#[derive(Serialize)]
struct ErrorReport {
    status: &'static str,
    message: String,
}

#[wasm_bindgen]
impl WasmBoard {
    /// Create a size x size board with Black to move.
    #[wasm_bindgen(constructor)]
    pub fn new(size: u8) -> Result<WasmBoard, JsError> {
        let inner = Game::new(size).map_err(|e| JsError::new(&e.to_string()))?;
        Ok(WasmBoard { inner })
    }

    pub fn size(&self) -> u8 {
        self.inner.grid().size()
    }

    /// Flat row-major cells: 1 = Black, -1 = White, 0 = empty.
    pub fn board(&self) -> js_sys::Int8Array {
        js_sys::Int8Array::from(self.inner.grid().board())
    }

    /// The cell at (row, col) as an i8, 0 for empty or off-board.
    pub fn stone_at(&self, row: u8, col: u8) -> i8 {
        match self.inner.grid().stone_at((row, col)) {
            Ok(Some(stone)) => stone.to_int(),
            _ => 0,
        }
    }

    /// The side to move: 1 = Black, -1 = White.
    pub fn current_turn(&self) -> i8 {
        self.inner.turn().to_int()
    }

    /// Non-mutating probe for hover styling and click gating.
    pub fn is_legal(&self, row: u8, col: u8) -> bool {
        self.inner.is_legal((row, col))
    }

    /// Attempt a move for the side to move. Returns the outcome as JSON:
    /// `{"status":"accepted"}`, `{"status":"illegal"}` or
    /// `{"status":"captured","points":[[row,col],..]}`. An off-board
    /// click reports `{"status":"error","message":..}` instead of
    /// trapping.
    pub fn play(&mut self, row: u8, col: u8) -> String {
        let report = match self.inner.play((row, col)) {
            Ok(result) => serde_json::to_string(&result),
            Err(e) => serde_json::to_string(&ErrorReport {
                status: "error",
                message: e.to_string(),
            }),
        };
        report.unwrap_or_else(|_| r#"{"status":"error","message":"encoding failed"}"#.to_string())
    }
}
