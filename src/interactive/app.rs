//! TUI application state and logic

use crate::dictionary::Dictionary;
use crate::game::{Game, GameError, GameStatus, GameView};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub dictionary: &'a Dictionary,
    pub letter_count: usize,
    pub hard_mode: bool,
    pub game: Game,
    pub view: GameView,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Wins by number of guesses; index 0 is unused
    pub guess_distribution: Vec<usize>,
}

impl<'a> App<'a> {
    /// Create the app and start the first game
    ///
    /// # Errors
    ///
    /// Returns `GameError::NoWordsOfLength` if the dictionary has no word of
    /// `letter_count` letters.
    pub fn new(
        dictionary: &'a Dictionary,
        letter_count: usize,
        hard_mode: bool,
    ) -> Result<Self, GameError> {
        let game = Self::start_game(dictionary, letter_count, hard_mode)?;
        let view = game.projection();

        Ok(Self {
            dictionary,
            letter_count,
            hard_mode,
            game,
            view,
            input_buffer: String::new(),
            messages: vec![Message {
                text: format!(
                    "Guess the {letter_count}-letter word in {} tries{}",
                    letter_count + 1,
                    if hard_mode { " (hard mode)" } else { "" }
                ),
                style: MessageStyle::Info,
            }],
            stats: Statistics {
                guess_distribution: vec![0; letter_count + 2],
                ..Statistics::default()
            },
            should_quit: false,
            input_mode: InputMode::Guessing,
        })
    }

    fn start_game(
        dictionary: &Dictionary,
        letter_count: usize,
        hard_mode: bool,
    ) -> Result<Game, GameError> {
        Game::new(
            dictionary,
            letter_count,
            hard_mode,
            "tui",
            None,
            &mut rand::rng(),
        )
    }

    pub fn type_letter(&mut self, c: char) {
        if self.input_buffer.len() < self.letter_count && c.is_ascii_alphabetic() {
            self.input_buffer.push(c.to_ascii_lowercase());
        }
    }

    pub fn submit_guess(&mut self) {
        let guess = self.input_buffer.clone();

        match self.game.submit_guess(&guess, self.dictionary) {
            Ok(_) => {
                self.input_buffer.clear();
                self.view = self.game.projection();
                if self.game.is_game_over() {
                    self.finish_game();
                }
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn surrender(&mut self) {
        match self.game.surrender() {
            Ok(()) => {
                self.view = self.game.projection();
                self.finish_game();
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    fn finish_game(&mut self) {
        self.stats.total_games += 1;
        self.input_mode = InputMode::GameOver;

        let solution = self.view.solution.clone().unwrap_or_default().to_uppercase();
        match self.game.status() {
            GameStatus::Won => {
                self.stats.games_won += 1;
                let guess_count = self.view.guesses.len();
                if let Some(slot) = self.stats.guess_distribution.get_mut(guess_count) {
                    *slot += 1;
                }

                let celebration = match guess_count {
                    1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                    3 => "✨ SPLENDID! Three guesses! ✨",
                    4 => "👏 GREAT JOB! Four guesses! 👏",
                    5 => "🎉 NICE WORK! Five guesses! 🎉",
                    _ => "😅 PHEW! Got it! 😅",
                };
                self.add_message(celebration, MessageStyle::Success);
            }
            GameStatus::LostSurrendered => {
                self.add_message(
                    &format!("You gave up. The word was {solution}"),
                    MessageStyle::Error,
                );
            }
            GameStatus::LostExhausted => {
                self.add_message(
                    &format!("Out of guesses. The word was {solution}"),
                    MessageStyle::Error,
                );
            }
            GameStatus::InProgress => {}
        }
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    pub fn new_game(&mut self) {
        match Self::start_game(self.dictionary, self.letter_count, self.hard_mode) {
            Ok(game) => {
                self.game = game;
                self.view = self.game.projection();
                self.input_buffer.clear();
                self.messages.clear();
                self.input_mode = InputMode::Guessing;
                self.add_message("New game started!", MessageStyle::Info);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match app.input_mode {
                InputMode::GameOver => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('q') | KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n') | KeyCode::Enter => {
                        app.new_game();
                    }
                    _ => {}
                },
                InputMode::Guessing => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('g') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.surrender();
                    }
                    KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Char(c) => {
                        app.type_letter(c);
                    }
                    KeyCode::Backspace => {
                        app.input_buffer.pop();
                    }
                    KeyCode::Enter => {
                        app.submit_guess();
                    }
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
