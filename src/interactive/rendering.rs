//! TUI rendering with ratatui
//!
//! Tile board, on-screen keyboard, messages and statistics.

use super::app::{App, MessageStyle};
use crate::core::{Letter, LetterVerdict, WORD_LENGTH};
use crate::game::{GameState, MAX_ATTEMPTS, TargetPicker};
use crate::output::formatters::KEYBOARD_ROWS;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui<P: TargetPicker>(f: &mut Frame, app: &App<'_, P>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(15),   // Board + side panel
            Constraint::Length(5), // Keyboard
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Board
            Constraint::Percentage(45), // Messages + stats
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);
    render_keyboard(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORD TILES 🟨")
        .style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Green)),
        );
    f.render_widget(header, area);
}

fn verdict_style(verdict: Option<LetterVerdict>) -> Style {
    match verdict {
        Some(LetterVerdict::Correct) => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Some(LetterVerdict::Present) => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        Some(LetterVerdict::Absent) => Style::default().fg(Color::White).bg(Color::DarkGray),
        None => Style::default().fg(Color::White),
    }
}

fn tile(ch: char, style: Style) -> Span<'static> {
    Span::styled(format!(" {ch} "), style)
}

fn render_board<P: TargetPicker>(f: &mut Frame, app: &App<'_, P>, area: Rect) {
    let session = &app.session;
    let buffer: Vec<char> = session.buffer().chars().collect();
    let empty = Style::default().fg(Color::DarkGray);
    let typed = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);

    let mut lines = Vec::with_capacity(MAX_ATTEMPTS * 2);
    for row in 0..MAX_ATTEMPTS {
        let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
        for col in 0..WORD_LENGTH {
            let span = if let Some((guess, result)) = session.history().get(row) {
                tile(guess.letter_at(col).as_char(), verdict_style(Some(result[col])))
            } else if row == session.current_row() && !session.is_over() {
                buffer
                    .get(col)
                    .map_or_else(|| tile('_', empty), |&ch| tile(ch, typed))
            } else {
                tile('·', empty)
            };
            spans.push(span);
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let title = format!(
        " Board ({} attempt{} left) ",
        session.attempts_remaining(),
        if session.attempts_remaining() == 1 { "" } else { "s" }
    );
    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_keyboard<P: TargetPicker>(f: &mut Frame, app: &App<'_, P>, area: Rect) {
    let keyboard = app.session.keyboard();
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .filter_map(Letter::from_char)
                .flat_map(|letter| {
                    [
                        tile(letter.as_char(), verdict_style(keyboard.get(letter))),
                        Span::raw(" "),
                    ]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let widget = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(widget, area);
}

fn render_side_panel<P: TargetPicker>(f: &mut Frame, app: &App<'_, P>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let items: Vec<ListItem> = app
        .messages
        .iter()
        .map(|msg| {
            let color = match msg.style {
                MessageStyle::Info => Color::Cyan,
                MessageStyle::Success => Color::Green,
                MessageStyle::Error => Color::Red,
            };
            ListItem::new(msg.text.as_str()).style(Style::default().fg(color))
        })
        .collect();

    let messages = List::new(items).block(
        Block::default()
            .title(" Messages ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(messages, chunks[0]);

    let stats = &app.stats;
    let most = stats.guess_distribution.iter().copied().max().unwrap_or(0).max(1);
    let mut lines = vec![
        Line::from(format!(
            "Played: {}   Win %: {}",
            stats.games_played,
            stats.win_percentage()
        )),
        Line::from(format!(
            "Streak: {}   Best: {}",
            stats.current_streak, stats.best_streak
        )),
        Line::from(""),
    ];
    for guesses in 1..=MAX_ATTEMPTS {
        let count = stats.guess_distribution[guesses];
        let bar_len = count * 12 / most;
        lines.push(Line::from(vec![
            Span::raw(format!("{guesses} ")),
            Span::styled("█".repeat(bar_len), Style::default().fg(Color::Green)),
            Span::raw(format!(" {count}")),
        ]));
    }

    let widget = Paragraph::new(lines).block(
        Block::default()
            .title(" Statistics ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(widget, chunks[1]);
}

fn render_status<P: TargetPicker>(f: &mut Frame, app: &App<'_, P>, area: Rect) {
    let status = match app.session.state() {
        GameState::Playing => {
            "Letters: type  |  Backspace: delete  |  Enter: submit  |  Esc: quit".to_string()
        }
        GameState::Won | GameState::Lost => format!(
            "Word: {}  |  Enter: play again  |  Esc: quit",
            app.session
                .revealed_target()
                .map(|w| w.text())
                .unwrap_or_default()
        ),
    };

    let widget = Paragraph::new(status)
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(widget, area);
}
