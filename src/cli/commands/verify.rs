//! Exhaustive no-loss verification of the search policy
//!
//! Walks every legal opponent continuation from the empty board while the
//! searcher answers its own turns through `find_best_move`, and tallies the
//! terminal results. A correct searcher never loses from either seat.

use anyhow::{Result, bail};
use clap::{Args, ValueEnum};
use indicatif::ProgressBar;

use crate::{
    board::{Board, Cell, Player, Verdict},
    cli::output,
    search,
};

/// Which seat the searcher defends
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum Seat {
    X,
    O,
}

#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Verify a single seat (defaults to both)
    #[arg(long, value_enum)]
    pub seat: Option<Seat>,
}

/// Terminal results of a sweep, from the searcher's perspective
#[derive(Debug, Default, Clone, Copy)]
struct SweepTally {
    wins: u64,
    draws: u64,
    losses: u64,
}

pub fn execute(args: VerifyArgs) -> Result<()> {
    output::print_section("Exhaustive no-loss verification");

    let seats: &[Player] = match args.seat {
        Some(Seat::X) => &[Player::X],
        Some(Seat::O) => &[Player::O],
        None => &[Player::X, Player::O],
    };

    for &searcher in seats {
        let pb = output::create_sweep_progress(&format!(
            "sweeping opponent lines against {searcher:?}"
        ));
        let mut tally = SweepTally::default();
        let mut board = Board::new();
        sweep(&mut board, searcher, Player::X, &mut tally, &pb)?;
        pb.finish_and_clear();

        output::print_subsection(&format!("Searcher in the {searcher:?} seat"));
        let games = tally.wins + tally.draws + tally.losses;
        output::print_kv("games", &games.to_string());
        output::print_kv("wins", &tally.wins.to_string());
        output::print_kv("draws", &tally.draws.to_string());
        output::print_kv("losses", &tally.losses.to_string());

        if tally.losses > 0 {
            bail!(
                "search lost {} game(s) from the {searcher:?} seat",
                tally.losses
            );
        }
    }

    println!("\nNo losses found.");
    Ok(())
}

/// Depth-first walk over all opponent continuations.
///
/// At the searcher's turns a single branch (its chosen move) is explored;
/// at the opponent's turns every empty cell branches. Marks are removed on
/// the way back up, so the caller's board is unchanged.
fn sweep(
    board: &mut Board,
    searcher: Player,
    to_move: Player,
    tally: &mut SweepTally,
    pb: &ProgressBar,
) -> Result<()> {
    match board.verdict() {
        Verdict::Won(winner) => {
            if winner == searcher {
                tally.wins += 1;
            } else {
                tally.losses += 1;
            }
            pb.inc(1);
            return Ok(());
        }
        Verdict::Draw => {
            tally.draws += 1;
            pb.inc(1);
            return Ok(());
        }
        Verdict::InProgress => {}
    }

    if to_move == searcher {
        let choice = search::find_best_move(board, searcher)?;
        board.cells[choice] = searcher.to_cell();
        sweep(board, searcher, to_move.opponent(), tally, pb)?;
        board.cells[choice] = Cell::Empty;
    } else {
        for position in 0..9 {
            if board.cells[position] != Cell::Empty {
                continue;
            }
            board.cells[position] = to_move.to_cell();
            sweep(board, searcher, to_move.opponent(), tally, pb)?;
            board.cells[position] = Cell::Empty;
        }
    }

    Ok(())
}
