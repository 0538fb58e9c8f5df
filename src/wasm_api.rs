//! Bindings consumed by the page script.

use wasm_bindgen::prelude::*;

use crate::ai::minimax;
use crate::board::{Board, Mark, check_winner};
use crate::error::GameError;
use crate::game::GameSession;
use crate::types::SearchReport;

fn to_js_error(err: GameError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen(js_name = checkWinner)]
pub fn check_winner_js(board: &[u8], player: u8) -> Result<bool, JsValue> {
    let board = Board::from_array(board).map_err(to_js_error)?;
    let mark = Mark::from_code(player).map_err(to_js_error)?;
    Ok(check_winner(&board, mark))
}

/// Returns `{ index?, score }` for `player` to move on `board`.
#[wasm_bindgen(js_name = minimax)]
pub fn minimax_js(board: &[u8], player: u8) -> Result<JsValue, JsValue> {
    let board = Board::from_array(board).map_err(to_js_error)?;
    let mark = Mark::from_code(player).map_err(to_js_error)?;
    let report = SearchReport::from(minimax(&board, mark));
    Ok(serde_wasm_bindgen::to_value(&report)?)
}

#[wasm_bindgen]
pub struct TicTacToe {
    session: GameSession,
}

#[wasm_bindgen]
impl TicTacToe {
    #[wasm_bindgen(constructor)]
    pub fn new() -> TicTacToe {
        TicTacToe {
            session: GameSession::new(),
        }
    }

    /// Human move at `index` followed by the computer's reply.
    pub fn play(&mut self, index: usize) -> Result<JsValue, JsValue> {
        self.session.play_turn(index).map_err(to_js_error)?;
        self.state()
    }

    pub fn restart(&mut self) {
        self.session.restart();
    }

    pub fn state(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.session.to_game_state())?)
    }
}

impl Default for TicTacToe {
    fn default() -> Self {
        Self::new()
    }
}
