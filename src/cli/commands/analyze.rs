//! Position analysis
//!
//! Prints per-move minimax values and the chosen best move for a supplied
//! position, or for a set of key opening positions.

use std::{fs::File, path::PathBuf};

use anyhow::{Context, Result, bail};
use clap::Args;
use serde::Serialize;

use crate::{
    board::{Board, Player},
    cli::output,
    search,
};

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Board to analyze, e.g. "XO..X...." (dots are empty cells)
    #[arg(long)]
    pub state: Option<String>,

    /// Write the per-move values to a JSON file
    #[arg(long)]
    pub export: Option<PathBuf>,
}

/// Per-position analysis result, also the JSON export shape
#[derive(Debug, Serialize)]
pub struct PositionReport {
    pub board: String,
    pub to_move: Player,
    pub values: Vec<MoveValue>,
    pub best_move: usize,
}

#[derive(Debug, Serialize)]
pub struct MoveValue {
    pub position: usize,
    pub row: usize,
    pub column: usize,
    pub score: i32,
}

pub fn execute(args: AnalyzeArgs) -> Result<()> {
    let mut reports = Vec::new();

    if let Some(s) = &args.state {
        output::print_section("Position analysis");
        let board = Board::from_string(s)?;
        reports.push(analyze_position(&board, "Custom state")?);
    } else {
        output::print_section("Key position analysis");
        reports.push(analyze_position(&Board::new(), "Empty board")?);
        let center = Board::from_string("....X....")?;
        reports.push(analyze_position(&center, "Center taken by X")?);
        let corner = Board::from_string("X........")?;
        reports.push(analyze_position(&corner, "Corner taken by X")?);
    }

    if let Some(path) = &args.export {
        let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
        serde_json::to_writer_pretty(file, &reports)?;
        println!("\nAnalysis exported to: {}", path.display());
    }

    Ok(())
}

/// Analyze a single position and print its move table
pub fn analyze_position(board: &Board, description: &str) -> Result<PositionReport> {
    if !board.is_valid() {
        bail!("board '{}' is not reachable by legal play", board.encode());
    }
    if board.is_terminal() {
        bail!("board '{}' is already decided", board.encode());
    }
    let to_move = board.turn()?;

    println!("\n{description} ({to_move:?} to move):");
    println!("{board}");

    let values: Vec<MoveValue> = search::move_values(board, to_move)
        .into_iter()
        .map(|(position, score)| MoveValue {
            position,
            row: position / 3,
            column: position % 3,
            score,
        })
        .collect();
    let best_move = search::find_best_move(board, to_move)?;

    for value in &values {
        let marker = if value.position == best_move {
            "  <- best"
        } else {
            ""
        };
        println!(
            "  position {} (row {}, col {}): {:+}{marker}",
            value.position, value.row, value.column, value.score
        );
    }

    Ok(PositionReport {
        board: board.encode(),
        to_move,
        values,
        best_move,
    })
}
