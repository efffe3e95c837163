//! Exhaustive game-tree search for the unbeatable difficulty
//!
//! The searcher walks every legal continuation of a position depth-first,
//! scoring finished games from O's perspective and backing the values up
//! minimax-style. With a depth bound of 9 plies the full tree is small
//! enough that no pruning is needed; a root call completes in well under a
//! millisecond.

use crate::{
    board::{Board, Cell, Player, Verdict},
    error::{Error, Result},
};

/// Terminal score magnitude for a decided game
const WIN_SCORE: i32 = 10;

/// Score a finished position, or `None` while the game is still open.
///
/// O wins score `10 - depth` and X wins `-10 + depth`, so among equally
/// decisive lines the search prefers the win it can reach soonest and puts
/// off a forced loss as long as possible. Draws are 0 at any depth.
fn terminal_score(verdict: Verdict, depth: i32) -> Option<i32> {
    match verdict {
        Verdict::Won(Player::O) => Some(WIN_SCORE - depth),
        Verdict::Won(Player::X) => Some(-WIN_SCORE + depth),
        Verdict::Draw => Some(0),
        Verdict::InProgress => None,
    }
}

/// Minimax value of `board` with `depth` plies already searched below the
/// root call. `maximizing` is true when O is to move.
///
/// Candidate cells are tried in row-major order. The board is mutated in
/// place while exploring and every mark is removed again before the frame
/// returns, unconditionally, so the caller's board comes back untouched.
pub fn minimax(board: &mut Board, depth: i32, maximizing: bool) -> i32 {
    if let Some(score) = terminal_score(board.verdict(), depth) {
        return score;
    }

    let mover = if maximizing { Cell::O } else { Cell::X };
    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    // A non-terminal board always has an empty cell, so `best` is always
    // replaced by at least one child score.
    for position in 0..9 {
        if board.cells[position] != Cell::Empty {
            continue;
        }

        board.cells[position] = mover;
        let score = minimax(board, depth + 1, !maximizing);
        board.cells[position] = Cell::Empty;

        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }

    best
}

/// Minimax value of every empty cell for `to_move`, in row-major order.
///
/// Each candidate is placed on a scratch copy of the board, valued by
/// [`minimax`] with the opponent to move, and removed again. Returns an
/// empty vector on a full board.
pub fn move_values(board: &Board, to_move: Player) -> Vec<(usize, i32)> {
    let mut scratch = *board;
    let mut values = Vec::new();

    for position in 0..9 {
        if scratch.cells[position] != Cell::Empty {
            continue;
        }

        scratch.cells[position] = to_move.to_cell();
        let score = minimax(&mut scratch, 0, to_move == Player::X);
        scratch.cells[position] = Cell::Empty;

        values.push((position, score));
    }

    values
}

/// Find the strongest move for `to_move` by exhaustive search.
///
/// O maximizes the zero-sum score and X minimizes it. Ties are resolved in
/// favor of the first candidate in row-major order (the lowest cell
/// index), so the result is deterministic: the empty board always opens at
/// position 0.
///
/// # Errors
///
/// Returns [`Error::GameOver`] when the position is already decided or the
/// board is full. Callers are expected to check for a finished game before
/// asking for a move.
///
/// # Examples
///
/// ```
/// use oxo::{Board, Player, find_best_move};
///
/// // X threatens the top row; O has to block at position 2
/// let board = Board::from_string("XX.......").unwrap();
/// assert_eq!(find_best_move(&board, Player::O).unwrap(), 2);
/// ```
pub fn find_best_move(board: &Board, to_move: Player) -> Result<usize> {
    if board.is_terminal() {
        return Err(Error::GameOver);
    }

    let mut best: Option<(usize, i32)> = None;
    for (position, score) in move_values(board, to_move) {
        let improved = match (best, to_move) {
            (None, _) => true,
            (Some((_, best_score)), Player::O) => score > best_score,
            (Some((_, best_score)), Player::X) => score < best_score,
        };
        if improved {
            best = Some((position, score));
        }
    }

    best.map(|(position, _)| position).ok_or(Error::NoValidMoves)
}
