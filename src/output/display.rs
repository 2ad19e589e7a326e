//! Display functions for command results

use super::formatters::{empty_row, guess_row, letter_bank_line};
use crate::commands::ScoreResult;
use crate::game::{GameStatus, GameView};
use colored::Colorize;

/// Print a game board with its letter bank and status
pub fn print_game_view(view: &GameView) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Game {}{}",
        view.game_id.bright_yellow().bold(),
        if view.hard_mode {
            "  [hard mode]".red().to_string()
        } else {
            String::new()
        }
    );
    println!("{}", "─".repeat(60).cyan());
    println!();

    for (guess, feedback) in view.guesses.iter().zip(&view.feedback) {
        println!("  {}", guess_row(guess, feedback));
    }
    if !view.game_over {
        for _ in 0..view.guesses_remaining {
            println!("  {}", empty_row(view.letter_count));
        }
    }

    println!("\n  {}", letter_bank_line(&view.letter_bank));
    println!();
    print_status_line(view);
}

fn print_status_line(view: &GameView) {
    let solution = view
        .solution
        .as_deref()
        .unwrap_or_default()
        .to_uppercase();

    match view.status {
        GameStatus::InProgress => println!(
            "{} {}",
            "Guesses remaining:".bright_cyan(),
            view.guesses_remaining.to_string().bright_yellow().bold()
        ),
        GameStatus::Won => println!(
            "{}",
            format!(
                "✅ Solved in {} {}!",
                view.guesses.len(),
                if view.guesses.len() == 1 { "guess" } else { "guesses" }
            )
            .green()
            .bold()
        ),
        GameStatus::LostSurrendered => println!(
            "{} {}",
            "🏳  Surrendered. The word was".red().bold(),
            solution.bright_yellow().bold()
        ),
        GameStatus::LostExhausted => println!(
            "{} {}",
            "❌ Out of guesses. The word was".red().bold(),
            solution.bright_yellow().bold()
        ),
    }
}

/// Print a one-line summary per game
pub fn print_game_list(views: &[GameView]) {
    if views.is_empty() {
        println!("No games yet. Start one with `new`.");
        return;
    }

    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "GAMES".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    for view in views {
        let status = match view.status {
            GameStatus::InProgress => format!("{} left", view.guesses_remaining).yellow(),
            GameStatus::Won => "won".green(),
            GameStatus::LostSurrendered => "surrendered".red(),
            GameStatus::LostExhausted => "lost".red(),
        };
        println!(
            "  {}  {} letters  {:>2} guesses  {}{}",
            view.game_id,
            view.letter_count,
            view.guesses.len(),
            status,
            if view.hard_mode { "  hard" } else { "" }
        );
    }
}

/// Print the result of scoring a single guess
pub fn print_score_result(result: &ScoreResult) {
    println!(
        "{}  {}",
        guess_row(&result.guess, &result.feedback),
        result.feedback.to_emoji()
    );
    println!(
        "{} correct, {} present",
        result.feedback.count_correct().to_string().green().bold(),
        result.feedback.count_present().to_string().yellow().bold()
    );
}

/// Print the emoji share grid of a finished game
pub fn print_share_grid(view: &GameView) {
    let score = if view.solved {
        view.guesses.len().to_string()
    } else {
        "X".to_string()
    };
    let max_guesses = view.letter_count + 1;
    println!("\nWordle {score}/{max_guesses}{}\n", if view.hard_mode { "*" } else { "" });
    println!("{}", view.share_grid());
}
