//! Errors raised at the session and wire boundaries.

use derive_more::{Display, Error};

/// Misuse of a [`GameSession`](crate::game::GameSession) or malformed data
/// arriving from the page script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// A move was attempted after the game ended.
    #[display("game is already over")]
    GameOver,
    /// The human tried to move while the computer is to play.
    #[display("it is not the player's turn")]
    NotHumanTurn,
    /// The computer was asked to move while the human is to play.
    #[display("it is not AI's turn")]
    NotComputerTurn,
    /// Cell index outside `0..=8`.
    #[display("cell index {_0} is out of range")]
    OutOfRange(#[error(not(source))] usize),
    /// Cell already holds a mark.
    #[display("cell {_0} is already occupied")]
    CellOccupied(#[error(not(source))] usize),
    /// The move selector produced nothing to play.
    #[display("AI could not select a move")]
    NoMoveAvailable,
    /// Cell code other than 0 (empty), 1 (X) or 2 (O).
    #[display("invalid cell code {_0}")]
    InvalidCellCode(#[error(not(source))] u8),
    /// Board snapshot without exactly nine cells.
    #[display("board must have 9 cells, got {_0}")]
    InvalidBoardLength(#[error(not(source))] usize),
    /// Player code other than 1 (X) or 2 (O).
    #[display("invalid player code {_0}")]
    InvalidPlayerCode(#[error(not(source))] u8),
}
