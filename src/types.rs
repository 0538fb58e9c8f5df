use serde::Serialize;

use crate::ai::Move;

/// Public game state returned from WASM APIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    /// Cell codes: 0=empty, 1=X, 2=O.
    pub board: Vec<u8>,
    pub current_player: u8,
    pub is_game_over: bool,
    /// 0 while nobody has a line.
    pub winner: u8,
    /// Contract:
    /// - `None` while the game runs.
    /// - The win or draw announcement once it ends.
    pub status: Option<String>,
    pub last_ai_move: Option<u8>,
}

/// Result of a direct `minimax` call from the page script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchReport {
    /// Omitted when the searched board was already terminal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<u8>,
    pub score: i32,
}

impl From<Move> for SearchReport {
    fn from(mv: Move) -> Self {
        Self {
            index: mv.index.map(|index| index as u8),
            score: mv.score,
        }
    }
}
