//! Output formatting and progress reporting for the CLI

use indicatif::{ProgressBar, ProgressStyle};

use crate::board::{Board, Cell};

/// Render the board as the numbered console grid.
///
/// Marks are shown as X/O; an open cell shows its 1-9 box number, which is
/// what the move prompt asks for.
pub fn render_board(board: &Board) -> String {
    let mut cells = [' '; 9];
    for (i, &cell) in board.cells.iter().enumerate() {
        cells[i] = match cell {
            Cell::Empty => char::from_digit(i as u32 + 1, 10).expect("box numbers are 1-9"),
            mark => mark.to_char(),
        };
    }

    let rows: Vec<String> = (0..3)
        .map(|r| {
            format!(
                "  {}  |  {}  |  {}  ",
                cells[r * 3],
                cells[r * 3 + 1],
                cells[r * 3 + 2]
            )
        })
        .collect();

    format!(
        "     |     |     \n{}\n_____|_____|_____\n     |     |     \n{}\n_____|_____|_____\n     |     |     \n{}\n     |     |     ",
        rows[0], rows[1], rows[2]
    )
}

/// Create a spinner that counts games during the verification sweep
pub fn create_sweep_progress(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg} ({pos} games)")
            .expect("Invalid spinner template"),
    );
    pb.set_message(message.to_string());
    pb
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a subsection header
pub fn print_subsection(title: &str) {
    println!("\n{title}");
    println!("{}", "-".repeat(40));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}
