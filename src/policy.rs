//! Computer move selection across the difficulty ladder

use clap::ValueEnum;
use rand::{Rng, prelude::IndexedRandom};
use serde::{Deserialize, Serialize};

use crate::{
    board::{Board, Player},
    error::{Error, Result},
    lines, search,
};

/// Strength of the computer player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum Difficulty {
    /// Uniform-random choice among empty cells
    Easy,
    /// Win if possible, block if necessary, otherwise random
    Medium,
    /// Exhaustive search; never loses
    Impossible,
}

/// Pick a uniformly random empty cell
pub fn random_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Result<usize> {
    board
        .empty_positions()
        .choose(rng)
        .copied()
        .ok_or(Error::NoValidMoves)
}

/// Single-ply tactics: complete an own winning line, else occupy the
/// opponent's completing cell, else play randomly.
///
/// When several cells win (or block) the lowest index is taken, so the
/// non-random branches are deterministic.
pub fn tactical_move<R: Rng + ?Sized>(board: &Board, to_move: Player, rng: &mut R) -> Result<usize> {
    if let Some(&win) = lines::winning_moves(&board.cells, to_move).first() {
        return Ok(win);
    }
    if let Some(&block) = lines::winning_moves(&board.cells, to_move.opponent()).first() {
        return Ok(block);
    }
    random_move(board, rng)
}

/// Select a computer move for `to_move` at the given difficulty.
///
/// # Errors
///
/// Returns [`Error::GameOver`] when the position is already decided or the
/// board is full.
pub fn choose_move<R: Rng + ?Sized>(
    board: &Board,
    to_move: Player,
    difficulty: Difficulty,
    rng: &mut R,
) -> Result<usize> {
    if board.is_terminal() {
        return Err(Error::GameOver);
    }

    match difficulty {
        Difficulty::Easy => random_move(board, rng),
        Difficulty::Medium => tactical_move(board, to_move, rng),
        Difficulty::Impossible => search::find_best_move(board, to_move),
    }
}
