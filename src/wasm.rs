//! JavaScript bindings. Every method returns plain JS values built by
//! `serde-wasm-bindgen`; rule violations surface as thrown `Error`s.

use wasm_bindgen::prelude::*;

use crate::config::BoardConfig;
use crate::error::RulesError;
use crate::game::GameState;

#[wasm_bindgen]
pub struct CheckersGame {
    state: GameState,
}

#[wasm_bindgen]
impl CheckersGame {
    /// Standard layout on a `size`x`size` board.
    #[wasm_bindgen(constructor)]
    pub fn new(size: u8) -> Result<CheckersGame, JsError> {
        let state = GameState::new(BoardConfig::with_size(size))?;
        Ok(Self { state })
    }

    /// Accepts a `BoardConfig` object, e.g. `{ size: 8, promotion: false }`.
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(config: JsValue) -> Result<CheckersGame, JsError> {
        let config: BoardConfig = serde_wasm_bindgen::from_value(config)?;
        let state = GameState::new(config)?;
        Ok(Self { state })
    }

    #[wasm_bindgen(js_name = legalMoves)]
    pub fn legal_moves(&self, x: i32, y: i32) -> Result<JsValue, JsError> {
        let moves = self.state.legal_moves(x, y)?;
        Ok(serde_wasm_bindgen::to_value(&moves)?)
    }

    /// Plays the `index`-th entry of `legalMoves(x, y)`.
    #[wasm_bindgen(js_name = applyAndAdvance)]
    pub fn apply_and_advance(&mut self, x: i32, y: i32, index: usize) -> Result<JsValue, JsError> {
        let moves = self.state.legal_moves(x, y)?;
        let mv = moves.get(index).ok_or_else(|| {
            RulesError::IllegalMove(format!(
                "move index {index} out of range, ({x}, {y}) has {} moves",
                moves.len()
            ))
        })?;
        let outcome = self.state.apply_and_advance(x, y, mv)?;
        Ok(serde_wasm_bindgen::to_value(&outcome)?)
    }

    #[wasm_bindgen(js_name = hasLegalMoves)]
    pub fn has_legal_moves(&self) -> bool {
        self.state.has_legal_moves_for_current()
    }

    pub fn state(&self) -> Result<JsValue, JsError> {
        Ok(serde_wasm_bindgen::to_value(&self.state.to_view())?)
    }

    pub fn result(&self) -> Result<JsValue, JsError> {
        Ok(serde_wasm_bindgen::to_value(&self.state.to_game_result())?)
    }

    /// Board diagram, one line per row.
    #[wasm_bindgen(js_name = boardText)]
    pub fn board_text(&self) -> String {
        self.state.board().to_string()
    }
}
