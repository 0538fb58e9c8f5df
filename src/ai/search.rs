use tracing::debug;
use web_time::Instant;

use crate::board::{Board, Mark, check_winner};
use crate::game::{COMPUTER, HUMAN, MoveSelector};

pub const HUMAN_WIN_SCORE: i32 = -10;
pub const COMPUTER_WIN_SCORE: i32 = 10;
pub const DRAW_SCORE: i32 = 0;

/// A scored candidate produced by [`minimax`].
///
/// `index` is `None` only when the searched board was already terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub index: Option<usize>,
    pub score: i32,
}

/// Exhaustive minimax search from the computer's perspective.
///
/// Scores are not depth-adjusted: every forced win is worth the same, and
/// among equal scores the lowest cell index wins.
/// Caller contract: only apply `index` when it is `Some`.
pub fn minimax(board: &Board, to_move: Mark) -> Move {
    let start_time = Instant::now();
    let mut nodes = 0u64;

    let best = search(*board, to_move, &mut nodes);

    debug!(
        index = ?best.index,
        score = best.score,
        nodes,
        elapsed_us = start_time.elapsed().as_micros() as u64,
        "minimax search finished"
    );
    best
}

fn search(board: Board, to_move: Mark, nodes: &mut u64) -> Move {
    *nodes += 1;

    if let Some(score) = terminal_score(&board) {
        return Move { index: None, score };
    }

    let mut best: Option<Move> = None;

    for index in board.empty_cells() {
        let mut next = board;
        let _ = next.place(index, to_move);
        let score = search(next, to_move.opponent(), nodes).score;

        if best.is_none_or(|best| is_better_score(to_move, score, best.score)) {
            best = Some(Move {
                index: Some(index),
                score,
            });
        }
    }

    // A non-terminal board always has an empty cell.
    best.unwrap_or(Move {
        index: None,
        score: DRAW_SCORE,
    })
}

/// Terminal checks in fixed precedence: human line, computer line, full board.
fn terminal_score(board: &Board) -> Option<i32> {
    if check_winner(board, HUMAN) {
        Some(HUMAN_WIN_SCORE)
    } else if check_winner(board, COMPUTER) {
        Some(COMPUTER_WIN_SCORE)
    } else if board.is_full() {
        Some(DRAW_SCORE)
    } else {
        None
    }
}

fn is_better_score(to_move: Mark, score: i32, best_score: i32) -> bool {
    if to_move == COMPUTER {
        score > best_score
    } else {
        score < best_score
    }
}

/// [`MoveSelector`] that plays the minimax choice.
#[derive(Debug, Default, Clone, Copy)]
pub struct MinimaxSelector;

impl MoveSelector for MinimaxSelector {
    fn select_move(&self, board: &Board, mark: Mark) -> Option<usize> {
        minimax(board, mark).index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opening(index: usize) -> Board {
        let mut board = Board::new();
        board.place(index, HUMAN);
        board
    }

    #[test]
    fn corner_opening_is_answered_in_the_center() {
        let result = minimax(&opening(0), COMPUTER);

        assert_eq!(result.index, Some(4));
        assert_eq!(result.score, DRAW_SCORE);
    }

    #[test]
    fn center_opening_is_answered_in_the_first_corner() {
        let result = minimax(&opening(4), COMPUTER);

        assert_eq!(result.index, Some(0));
        assert_eq!(result.score, DRAW_SCORE);
    }

    #[test]
    fn computer_blocks_an_open_row() {
        let board = Board::from_pattern("XX..O....");

        let result = minimax(&board, COMPUTER);

        assert_eq!(result.index, Some(2));
        assert_eq!(result.score, DRAW_SCORE);
    }

    #[test]
    fn forced_wins_tie_break_to_the_lowest_index() {
        // Index 6 wins at once, but 3 forks and also forces a win.
        let board = Board::from_pattern("XXO.O..X.");

        let result = minimax(&board, COMPUTER);

        assert_eq!(result.index, Some(3));
        assert_eq!(result.score, COMPUTER_WIN_SCORE);
    }

    #[test]
    fn human_branch_minimizes() {
        let board = Board::from_pattern("XX..O....");

        let result = minimax(&board, HUMAN);

        assert_eq!(result.index, Some(2));
        assert_eq!(result.score, HUMAN_WIN_SCORE);
    }

    #[test]
    fn terminal_boards_return_score_without_index() {
        let human_won = Board::from_pattern("XXXOO....");
        let computer_won = Board::from_pattern("OOOXX.X..");
        let drawn = Board::from_pattern("XOXXOOOXX");

        assert_eq!(
            minimax(&human_won, COMPUTER),
            Move {
                index: None,
                score: HUMAN_WIN_SCORE
            }
        );
        assert_eq!(
            minimax(&computer_won, HUMAN),
            Move {
                index: None,
                score: COMPUTER_WIN_SCORE
            }
        );
        assert_eq!(
            minimax(&drawn, COMPUTER),
            Move {
                index: None,
                score: DRAW_SCORE
            }
        );
    }

    #[test]
    fn human_line_takes_precedence_over_computer_line() {
        let board = Board::from_pattern("XXXOOO...");

        assert_eq!(minimax(&board, COMPUTER).score, HUMAN_WIN_SCORE);
    }

    #[test]
    fn search_leaves_the_input_board_untouched() {
        let board = Board::from_pattern("X...O....");
        let before = board;

        let _ = minimax(&board, HUMAN);

        assert_eq!(board, before);
    }

    #[test]
    fn selector_returns_the_minimax_index() {
        let board = opening(0);

        assert_eq!(MinimaxSelector.select_move(&board, COMPUTER), Some(4));
        assert_eq!(
            MinimaxSelector.select_move(&Board::from_pattern("XOXXOOOXX"), COMPUTER),
            None
        );
    }
}
