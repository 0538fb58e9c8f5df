use std::fmt;

use serde::Serialize;

use crate::error::GameError;

pub const BOARD_SIZE: usize = 3;
pub const NUM_CELLS: usize = BOARD_SIZE * BOARD_SIZE;

/// The eight index triples that win: rows, columns, diagonals.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

const CODE_EMPTY: u8 = 0;
const CODE_X: u8 = 1;
const CODE_O: u8 = 2;

/// Symbol occupying a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn opponent(self) -> Self {
        match self {
            Self::X => Self::O,
            Self::O => Self::X,
        }
    }

    /// Wire code used by the page script: 1=X, 2=O.
    pub fn code(self) -> u8 {
        match self {
            Self::X => CODE_X,
            Self::O => CODE_O,
        }
    }

    pub fn from_code(code: u8) -> Result<Self, GameError> {
        match code {
            CODE_X => Ok(Self::X),
            CODE_O => Ok(Self::O),
            _ => Err(GameError::InvalidPlayerCode(code)),
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => f.write_str("X"),
            Self::O => f.write_str("O"),
        }
    }
}

/// Tic-tac-toe board: nine cells in row-major order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Option<Mark>; NUM_CELLS],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            cells: [None; NUM_CELLS],
        }
    }

    /// Decodes a `[u8]` snapshot where 0=empty, 1=X, 2=O.
    pub fn from_array(codes: &[u8]) -> Result<Self, GameError> {
        if codes.len() != NUM_CELLS {
            return Err(GameError::InvalidBoardLength(codes.len()));
        }

        let mut board = Self::new();
        for (cell, &code) in board.cells.iter_mut().zip(codes) {
            *cell = match code {
                CODE_EMPTY => None,
                CODE_X => Some(Mark::X),
                CODE_O => Some(Mark::O),
                _ => return Err(GameError::InvalidCellCode(code)),
            };
        }
        Ok(board)
    }

    /// Converts board to `[u8; 9]` where 0=empty, 1=X, 2=O.
    pub fn to_array(&self) -> [u8; NUM_CELLS] {
        self.cells.map(|cell| cell.map_or(CODE_EMPTY, Mark::code))
    }

    /// Returns the mark at `index`, `None` for empty or out-of-range cells.
    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied().flatten()
    }

    pub fn is_empty_cell(&self, index: usize) -> bool {
        matches!(self.cells.get(index), Some(None))
    }

    /// Places `mark` at `index`.
    /// Returns `false` and leaves the board unchanged when the cell is
    /// occupied or out of range.
    pub fn place(&mut self, index: usize, mark: Mark) -> bool {
        if !self.is_empty_cell(index) {
            return false;
        }
        self.cells[index] = Some(mark);
        true
    }

    /// Empty cell indices in ascending order.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(index, cell)| cell.is_none().then_some(index))
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == Some(mark)).count()
    }

    #[cfg(test)]
    pub(crate) fn from_pattern(pattern: &str) -> Self {
        assert_eq!(pattern.len(), NUM_CELLS, "pattern must have 9 cells");
        let mut board = Self::new();
        for (cell, ch) in board.cells.iter_mut().zip(pattern.chars()) {
            *cell = match ch {
                'X' => Some(Mark::X),
                'O' => Some(Mark::O),
                _ => None,
            };
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns `true` if `mark` fills any of the eight winning lines.
pub fn check_winner(board: &Board, mark: Mark) -> bool {
    WINNING_LINES
        .iter()
        .any(|line| line.iter().all(|&index| board.get(index) == Some(mark)))
}

/// Full board with no line for either side.
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && !check_winner(board, Mark::X) && !check_winner(board, Mark::O)
}
