//! Wordle Engine - CLI
//!
//! Play in a TUI, in a plain terminal loop, or one command at a time against
//! games stored on disk.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use wordle_engine::{
    commands::{SimpleConfig, run_simple, score_words},
    dictionary::{Dictionary, loader},
    game::GameView,
    output::{print_game_list, print_game_view, print_score_result, print_share_grid},
    service::{JsonFileRepository, WordleService},
};

#[derive(Parser)]
#[command(
    name = "wordle_engine",
    about = "Wordle with any word length, hard mode and saved games",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary: 'embedded' (default) or path to a file with one word per line
    #[arg(short, long, global = true, default_value = "embedded")]
    dictionary: String,

    /// Word length for new games
    #[arg(short, long, global = true, default_value = "5")]
    letters: usize,

    /// Hard mode: letters placed correctly in the previous guess must stay put
    #[arg(long, global = true)]
    hard: bool,

    /// Directory where saved games live
    #[arg(long, global = true, default_value = ".wordle")]
    store: String,

    /// Owner of saved games; other users' games are hidden
    #[arg(short, long, global = true, env = "WORDLE_USER")]
    user: Option<String>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple,

    /// Start a saved game and print its id
    New,

    /// Play a guess in a saved game
    Guess {
        /// Game id
        id: String,

        /// The guess
        word: String,
    },

    /// Give up a saved game and reveal the word
    Surrender {
        /// Game id
        id: String,
    },

    /// Show a saved game
    Show {
        /// Game id
        id: String,
    },

    /// List saved games
    List,

    /// Score a guess against a solution without starting a game
    Score {
        /// The solution
        solution: String,

        /// The guess
        guess: String,
    },
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    let dictionary = loader::load(&cli.dictionary)
        .with_context(|| format!("Failed to load dictionary '{}'", cli.dictionary))?;

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&dictionary, &cli),
        Commands::Simple => run_simple_command(&dictionary, &cli),
        Commands::Score { solution, guess } => run_score_command(&solution, &guess, cli.json),
        stored => run_stored_command(stored, &dictionary, &cli),
    }
}

fn run_play_command(dictionary: &Dictionary, cli: &Cli) -> Result<()> {
    use wordle_engine::interactive::{App, run_tui};

    let app = App::new(dictionary, cli.letters, cli.hard)?;
    run_tui(app)
}

fn run_simple_command(dictionary: &Dictionary, cli: &Cli) -> Result<()> {
    let config = SimpleConfig {
        letter_count: cli.letters,
        hard_mode: cli.hard,
    };
    run_simple(dictionary, &config).map_err(|e| anyhow::anyhow!(e))
}

fn run_score_command(solution: &str, guess: &str, json: bool) -> Result<()> {
    let result = score_words(solution, guess).map_err(|e| anyhow::anyhow!(e))?;
    if json {
        print_json(&result)
    } else {
        print_score_result(&result);
        Ok(())
    }
}

fn run_stored_command(command: Commands, dictionary: &Dictionary, cli: &Cli) -> Result<()> {
    let repository = JsonFileRepository::open(&cli.store)
        .with_context(|| format!("Failed to open game store '{}'", cli.store))?;
    let mut service = WordleService::new(repository, dictionary);
    let user = cli.user.as_deref();

    let view = match command {
        Commands::New => service.create_game(cli.letters, cli.hard, user)?,
        Commands::Guess { id, word } => service.make_guess(&id, user, &word)?,
        Commands::Surrender { id } => service.surrender(&id, user)?,
        Commands::Show { id } => service.get_game(&id, user)?,
        Commands::List => {
            let views = service.list_games(user)?;
            return if cli.json {
                print_json(&views)
            } else {
                print_game_list(&views);
                Ok(())
            };
        }
        Commands::Play | Commands::Simple | Commands::Score { .. } => return Ok(()),
    };

    if cli.json {
        return print_json(&view);
    }
    print_view(&view);
    Ok(())
}

fn print_view(view: &GameView) {
    print_game_view(view);
    if view.status.is_terminal() {
        print_share_grid(view);
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{text}");
    Ok(())
}
