//! Interactive console game

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use rand::{SeedableRng, rngs::StdRng};

use crate::{
    board::Player,
    cli::output,
    game::{Game, GameOutcome},
    policy::{self, Difficulty},
};

/// Who sits in the O seat
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum Opponent {
    /// A second human at the keyboard
    Human,
    /// The computer
    Computer,
}

#[derive(Args, Debug)]
pub struct PlayArgs {
    /// Opponent in the O seat
    #[arg(long, value_enum, default_value_t = Opponent::Computer)]
    pub opponent: Opponent,

    /// Computer difficulty
    #[arg(long, value_enum, default_value_t = Difficulty::Impossible)]
    pub difficulty: Difficulty,

    /// Random seed for the easy and medium difficulties
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    loop {
        run_game(&args, &mut rng)?;
        if !prompt_yes_no("\nDo you want to play again? (y/n): ")? {
            break;
        }
    }

    println!("\nThanks for playing!");
    Ok(())
}

/// Run a single game to completion and announce the result
fn run_game(args: &PlayArgs, rng: &mut StdRng) -> Result<()> {
    let mut game = Game::new();
    output::print_section("Tic-Tac-Toe");

    while !game.is_over() {
        println!("\n{}\n", output::render_board(&game.board));

        let position = match (game.to_move, args.opponent) {
            (Player::X, _) => prompt_move("Human (X)'s turn. Enter a box (1-9): ", &game)?,
            (Player::O, Opponent::Human) => {
                prompt_move("Player 2 (O)'s turn. Enter a box (1-9): ", &game)?
            }
            (Player::O, Opponent::Computer) => {
                let choice = policy::choose_move(&game.board, Player::O, args.difficulty, rng)?;
                println!("Computer (O) chose box {}.", choice + 1);
                choice
            }
        };

        game.play(position)?;
    }

    println!("\n{}\n", output::render_board(&game.board));
    match game.outcome {
        Some(GameOutcome::Win(Player::X)) => println!("Human (X) wins!"),
        Some(GameOutcome::Win(Player::O)) => match args.opponent {
            Opponent::Human => println!("Player 2 (O) wins!"),
            Opponent::Computer => println!("Computer (O) wins!"),
        },
        Some(GameOutcome::Draw) => println!("It's a draw!"),
        // The loop only exits once an outcome is recorded
        None => {}
    }

    Ok(())
}

/// Prompt until the player enters a legal box number
fn prompt_move(prompt: &str, game: &Game) -> Result<usize> {
    loop {
        print!("{prompt}");
        io::stdout().flush().context("flush stdout")?;

        let mut line = String::new();
        let read = io::stdin().read_line(&mut line).context("read move input")?;
        if read == 0 {
            anyhow::bail!("input closed before the game finished");
        }

        let choice: usize = match line.trim().parse() {
            Ok(n) => n,
            Err(_) => {
                println!("Invalid input. Please enter a number between 1 and 9.");
                continue;
            }
        };

        if !(1..=9).contains(&choice) {
            println!("Invalid input. Please enter a number between 1 and 9.");
            continue;
        }

        let position = choice - 1;
        if !game.board.is_empty(position) {
            println!("Box {choice} is already taken. Try again.");
            continue;
        }

        return Ok(position);
    }
}

fn prompt_yes_no(prompt: &str) -> Result<bool> {
    print!("{prompt}");
    io::stdout().flush().context("flush stdout")?;

    let mut line = String::new();
    io::stdin().read_line(&mut line).context("read answer")?;
    Ok(line.trim().eq_ignore_ascii_case("y"))
}
