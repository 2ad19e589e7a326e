//! TUI rendering with ratatui
//!
//! Board, letter bank and status panels for a game in progress.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{AlphabetEntry, Feedback, LetterState, LetterStatus};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Board
            Constraint::Percentage(45), // Letter bank and messages
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = if app.hard_mode {
        format!("🎯 WORDLE - {} letters - Hard Mode", app.letter_count)
    } else {
        format!("🎯 WORDLE - {} letters", app.letter_count)
    };

    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn tile_style(state: LetterState) -> Style {
    let bg = match state {
        LetterState::Correct => Color::Green,
        LetterState::Present => Color::Yellow,
        LetterState::Absent => Color::DarkGray,
    };
    Style::default()
        .fg(Color::Black)
        .bg(bg)
        .add_modifier(Modifier::BOLD)
}

fn guess_line<'a>(guess: &str, feedback: &Feedback) -> Line<'a> {
    let spans: Vec<Span> = guess
        .chars()
        .zip(feedback.states())
        .flat_map(|(c, &state)| {
            [
                Span::styled(format!(" {} ", c.to_ascii_uppercase()), tile_style(state)),
                Span::raw(" "),
            ]
        })
        .collect();
    Line::from(spans)
}

fn pending_line<'a>(input: &str, letter_count: usize) -> Line<'a> {
    let spans: Vec<Span> = (0..letter_count)
        .flat_map(|i| {
            let c = input.chars().nth(i).map_or('_', |c| c.to_ascii_uppercase());
            [
                Span::styled(
                    format!(" {c} "),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" "),
            ]
        })
        .collect();
    Line::from(spans)
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let view = &app.view;
    let mut lines = vec![Line::from("")];

    for (guess, feedback) in view.guesses.iter().zip(&view.feedback) {
        lines.push(guess_line(guess, feedback));
        lines.push(Line::from(""));
    }

    let mut empty_rows = view.guesses_remaining;
    if app.input_mode == InputMode::Guessing && empty_rows > 0 {
        lines.push(pending_line(&app.input_buffer, view.letter_count));
        lines.push(Line::from(""));
        empty_rows -= 1;
    }
    for _ in 0..empty_rows {
        lines.push(Line::styled(
            " · ".repeat(view.letter_count),
            Style::default().fg(Color::DarkGray),
        ));
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(board, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Letter bank
            Constraint::Length(3), // Guesses used
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_letter_bank(f, &app.view.letter_bank, chunks[0]);
    render_progress(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn letter_span<'a>(entry: &AlphabetEntry) -> Span<'a> {
    let letter = format!(" {} ", entry.letter.to_ascii_uppercase());
    let style = match (entry.status, entry.in_position) {
        (LetterStatus::Present, true) => tile_style(LetterState::Correct),
        (LetterStatus::Present, false) => tile_style(LetterState::Present),
        (LetterStatus::Absent, _) => Style::default().fg(Color::DarkGray),
        (LetterStatus::Unused, _) => Style::default().fg(Color::White),
    };
    Span::styled(letter, style)
}

fn render_letter_bank(f: &mut Frame, bank: &[AlphabetEntry], area: Rect) {
    let lines: Vec<Line> = bank
        .chunks(9)
        .map(|row| Line::from(row.iter().map(letter_span).collect::<Vec<_>>()))
        .collect();

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Letters ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(paragraph, area);
}

fn render_progress(f: &mut Frame, app: &App, area: Rect) {
    let used = app.view.guesses.len();
    let max = app.game.max_guesses();
    let percent = u16::try_from(used * 100 / max.max(1)).unwrap_or(100);

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent.min(100))
        .label(format!("{used}/{max} guesses"));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::Guessing => (
            " Type your guess | Enter to submit ",
            app.input_buffer.to_uppercase(),
            Color::Yellow,
        ),
        InputMode::GameOver if app.view.solved => (
            " 🎉 CONGRATULATIONS! 🎉 | Press 'n' for new game or 'q' to quit ",
            String::new(),
            Color::Green,
        ),
        InputMode::GameOver => (
            " Game over | Press 'n' for new game or 'q' to quit ",
            app.view.solution.clone().unwrap_or_default().to_uppercase(),
            Color::Red,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(30),
            Constraint::Percentage(40),
        ])
        .split(area);

    let mode_text = format!("Status: {}", app.view.status);
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let win_rate = if app.stats.total_games > 0 {
        app.stats.games_won * 100 / app.stats.total_games
    } else {
        0
    };
    let stats_text = format!("Games: {} | Win Rate: {win_rate}%", app.stats.total_games);
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help_text = match app.input_mode {
        InputMode::GameOver => "q: Quit | n: New Game",
        InputMode::Guessing => "Esc: Quit | Ctrl+G: Give Up | Enter: Submit",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
