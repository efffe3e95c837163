//! High-level game management

use serde::{Deserialize, Serialize};

use crate::board::{Board, Player, Verdict};

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub position: usize,
    pub player: Player,
}

/// Outcome of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

/// A game in progress, with history
///
/// Tracks the current board, whose turn it is, the moves played so far and
/// the outcome once the game is decided. X always moves first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub board: Board,
    pub to_move: Player,
    pub moves: Vec<Move>,
    pub outcome: Option<GameOutcome>,
}

impl Game {
    /// Create a new game on an empty board with X to move
    pub fn new() -> Self {
        Game {
            board: Board::new(),
            to_move: Player::X,
            moves: Vec::new(),
            outcome: None,
        }
    }

    /// Play a move for the side to move
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::GameOver`] once the game has a result, and
    /// the board's errors for out-of-range or occupied positions.
    pub fn play(&mut self, position: usize) -> Result<(), crate::Error> {
        if self.outcome.is_some() {
            return Err(crate::Error::GameOver);
        }

        self.board = self.board.apply(position, self.to_move)?;
        self.moves.push(Move {
            position,
            player: self.to_move,
        });
        self.to_move = self.to_move.opponent();

        self.outcome = match self.board.verdict() {
            Verdict::Won(winner) => Some(GameOutcome::Win(winner)),
            Verdict::Draw => Some(GameOutcome::Draw),
            Verdict::InProgress => None,
        };

        Ok(())
    }

    /// Check if the game has a result
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_alternation() {
        let mut game = Game::new();
        assert_eq!(game.to_move, Player::X);

        game.play(0).unwrap();
        assert_eq!(game.to_move, Player::O);

        game.play(4).unwrap();
        assert_eq!(game.to_move, Player::X);
        assert_eq!(game.moves.len(), 2);
        assert_eq!(game.moves[0], Move { position: 0, player: Player::X });
    }

    #[test]
    fn test_win_sets_outcome() {
        let mut game = Game::new();
        for position in [0, 3, 1, 4, 2] {
            game.play(position).unwrap();
        }
        assert_eq!(game.outcome, Some(GameOutcome::Win(Player::X)));
        assert!(game.is_over());
    }

    #[test]
    fn test_draw_sets_outcome() {
        let mut game = Game::new();
        for position in [0, 1, 2, 4, 3, 6, 5, 8, 7] {
            game.play(position).unwrap();
        }
        assert_eq!(game.outcome, Some(GameOutcome::Draw));
    }

    #[test]
    fn test_play_after_result_is_rejected() {
        let mut game = Game::new();
        for position in [0, 3, 1, 4, 2] {
            game.play(position).unwrap();
        }
        assert!(matches!(game.play(5), Err(crate::Error::GameOver)));
    }

    #[test]
    fn test_occupied_cell_is_rejected_without_state_change() {
        let mut game = Game::new();
        game.play(4).unwrap();
        let before = game.board;

        assert!(game.play(4).is_err());
        assert_eq!(game.board, before);
        assert_eq!(game.to_move, Player::O);
        assert_eq!(game.moves.len(), 1);
    }
}
