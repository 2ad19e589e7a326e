//! Simple interactive CLI mode
//!
//! Text-based game loop without TUI

use crate::dictionary::Dictionary;
use crate::game::{Game, GameError, GameStatus};
use crate::output::formatters::{empty_row, guess_row, letter_bank_line};
use crate::output::print_share_grid;
use colored::Colorize;
use std::io::{self, Write};

/// Options for a simple-mode session
pub struct SimpleConfig {
    pub letter_count: usize,
    pub hard_mode: bool,
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if the
/// dictionary has no word of the requested length.
pub fn run_simple(dictionary: &Dictionary, config: &SimpleConfig) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Wordle - Interactive Mode                   ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!(
        "Guess the {}-letter word in {} tries.{}",
        config.letter_count,
        config.letter_count + 1,
        if config.hard_mode {
            " Hard mode: letters in the right spot must be kept."
        } else {
            ""
        }
    );
    println!("Commands: 'quit' to exit, 'new' for new game, 'give up' to surrender\n");

    let mut game = start_game(dictionary, config)?;
    let mut games_played = 0;
    let mut games_won = 0;

    loop {
        let input = get_user_input(&format!(
            "Guess {}/{}",
            game.guesses().len() + 1,
            game.max_guesses()
        ))?;

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                game = start_game(dictionary, config)?;
                println!("\n🔄 New game started!\n");
                continue;
            }
            "give up" | "surrender" => {
                if let Err(e) = game.surrender() {
                    println!("❌ {e}\n");
                    continue;
                }
            }
            guess => match game.submit_guess(guess, dictionary) {
                Ok(_) => {}
                Err(e @ GameError::GameOver) => {
                    println!("❌ {e}. Type 'new' to play again.\n");
                    continue;
                }
                Err(e) => {
                    println!("❌ {e}\n");
                    continue;
                }
            },
        }

        print_board(&game);

        if game.is_game_over() {
            games_played += 1;
            if game.status() == GameStatus::Won {
                games_won += 1;
            }
            print_result(&game);
            println!("\n  Played {games_played}, won {games_won}");

            match get_user_input("Play again? (yes/no)")?.to_lowercase().as_str() {
                "yes" | "y" => {
                    game = start_game(dictionary, config)?;
                    println!("\n🔄 New game started!\n");
                }
                _ => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
        }
    }
}

fn start_game(dictionary: &Dictionary, config: &SimpleConfig) -> Result<Game, String> {
    Game::new(
        dictionary,
        config.letter_count,
        config.hard_mode,
        "local",
        None,
        &mut rand::rng(),
    )
    .map_err(|e| e.to_string())
}

fn print_board(game: &Game) {
    let view = game.projection();

    println!();
    for (guess, feedback) in view.guesses.iter().zip(&view.feedback) {
        println!("  {}", guess_row(guess, feedback));
    }
    for _ in 0..view.guesses_remaining {
        println!("  {}", empty_row(view.letter_count));
    }
    println!("\n  {}\n", letter_bank_line(&view.letter_bank));
}

fn print_result(game: &Game) {
    let view = game.projection();
    let solution = view.solution.clone().unwrap_or_default().to_uppercase();

    println!("\n{}", "═".repeat(70).bright_cyan());
    match view.status {
        GameStatus::Won => {
            let performance = match view.guesses.len() {
                1 => "🏆 Hole in one!",
                2 => "⭐ Magnificent!",
                3 => "💫 Splendid!",
                4 => "✨ Great!",
                5 => "👍 Nice!",
                _ => "😅 Phew!",
            };
            println!("  {}", performance.bright_green().bold());
        }
        GameStatus::LostSurrendered => {
            println!("  {} {}", "🏳  You gave up. The word was".red(), solution.bold());
        }
        GameStatus::LostExhausted => {
            println!("  {} {}", "❌ Out of guesses. The word was".red(), solution.bold());
        }
        GameStatus::InProgress => {}
    }
    print_share_grid(&view);
    println!("{}", "═".repeat(70).bright_cyan());
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;
    if read == 0 {
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}
