//! Noughts-and-crosses engine with an exhaustive-search computer player
//!
//! This crate provides:
//! - Complete tic-tac-toe board representation with validation
//! - An exhaustive minimax searcher whose moves never lose
//! - Lower-difficulty move policies (random, win-or-block)
//! - A console front end for playing, analyzing and verifying games

pub mod board;
pub mod cli;
pub mod error;
pub mod game;
pub mod lines;
pub mod policy;
pub mod search;

pub use board::{Board, Cell, Player, Verdict};
pub use error::{Error, Result};
pub use game::{Game, GameOutcome, Move};
pub use policy::Difficulty;
pub use search::{find_best_move, minimax, move_values};
