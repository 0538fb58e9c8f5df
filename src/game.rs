use tracing::{debug, instrument};

use crate::ai::MinimaxSelector;
use crate::board::{Board, Mark, NUM_CELLS, check_winner};
use crate::error::GameError;
use crate::types::GameState;

pub const HUMAN: Mark = Mark::X;
pub const COMPUTER: Mark = Mark::O;

pub const DRAW_MESSAGE: &str = "It's a draw!";
pub const AI_WINS_MESSAGE: &str = "AI wins!";

pub trait MoveSelector: Send + Sync {
    fn select_move(&self, board: &Board, mark: Mark) -> Option<usize>;
}

/// How the board currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    InProgress,
    Won(Mark),
    Draw,
}

/// One game between the human (X, always opening) and the computer (O).
pub struct GameSession {
    board: Board,
    pub current_player: Mark,
    pub is_game_over: bool,
    pub status: Option<String>,
    pub last_ai_move: Option<usize>,
    selector: Box<dyn MoveSelector>,
}

impl GameSession {
    pub fn new() -> Self {
        Self::with_selector(Box::new(MinimaxSelector))
    }

    pub fn with_selector(selector: Box<dyn MoveSelector>) -> Self {
        Self {
            board: Board::new(),
            current_player: HUMAN,
            is_game_over: false,
            status: None,
            last_ai_move: None,
            selector,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Applies the human's move at `index`.
    #[instrument(skip(self))]
    pub fn place(&mut self, index: usize) -> Result<(), GameError> {
        if self.is_game_over {
            return Err(GameError::GameOver);
        }
        if self.current_player != HUMAN {
            return Err(GameError::NotHumanTurn);
        }

        self.apply_move(index, HUMAN)
    }

    /// Lets the selector pick and apply the computer's move.
    #[instrument(skip(self))]
    pub fn do_ai_move(&mut self) -> Result<(), GameError> {
        if self.is_game_over {
            return Err(GameError::GameOver);
        }
        if self.current_player != COMPUTER {
            return Err(GameError::NotComputerTurn);
        }

        // The selector gets a private copy; the live board is only touched below.
        let snapshot = self.board;
        let selected = self
            .selector
            .select_move(&snapshot, COMPUTER)
            .ok_or(GameError::NoMoveAvailable)?;

        self.apply_move(selected, COMPUTER)?;
        self.last_ai_move = Some(selected);
        Ok(())
    }

    /// A full click: the human's move, then the computer's reply while the
    /// game is still running.
    #[instrument(skip(self))]
    pub fn play_turn(&mut self, index: usize) -> Result<(), GameError> {
        self.place(index)?;
        if !self.is_game_over {
            self.do_ai_move()?;
        }
        Ok(())
    }

    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.board = Board::new();
        self.current_player = HUMAN;
        self.is_game_over = false;
        self.status = None;
        self.last_ai_move = None;
    }

    pub fn outcome(&self) -> GameOutcome {
        if check_winner(&self.board, HUMAN) {
            GameOutcome::Won(HUMAN)
        } else if check_winner(&self.board, COMPUTER) {
            GameOutcome::Won(COMPUTER)
        } else if self.board.is_full() {
            GameOutcome::Draw
        } else {
            GameOutcome::InProgress
        }
    }

    pub fn to_game_state(&self) -> GameState {
        GameState {
            board: self.board.to_array().to_vec(),
            current_player: self.current_player.code(),
            is_game_over: self.is_game_over,
            winner: match self.outcome() {
                GameOutcome::Won(mark) => mark.code(),
                GameOutcome::InProgress | GameOutcome::Draw => 0,
            },
            status: self.status.clone(),
            last_ai_move: self.last_ai_move.map(|index| index as u8),
        }
    }

    fn apply_move(&mut self, index: usize, mark: Mark) -> Result<(), GameError> {
        if index >= NUM_CELLS {
            return Err(GameError::OutOfRange(index));
        }
        if !self.board.place(index, mark) {
            return Err(GameError::CellOccupied(index));
        }

        if check_winner(&self.board, mark) {
            self.end_game(win_message(mark));
        } else if self.board.is_full() {
            self.end_game(DRAW_MESSAGE.to_string());
        } else {
            self.current_player = mark.opponent();
        }

        Ok(())
    }

    fn end_game(&mut self, message: String) {
        debug!(status = %message, "game over");
        self.is_game_over = true;
        self.status = Some(message);
    }

    #[cfg(test)]
    fn set_board_for_test(&mut self, board: Board, current_player: Mark) {
        self.board = board;
        self.current_player = current_player;
        self.is_game_over = false;
        self.status = None;
        self.last_ai_move = None;
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

fn win_message(mark: Mark) -> String {
    if mark == COMPUTER {
        AI_WINS_MESSAGE.to_string()
    } else {
        format!("Player {mark} wins!")
    }
}
