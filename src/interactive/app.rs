//! TUI application state and logic

use crate::game::{
    Dictionary, GameSession, GameState, Rejection, Statistics, SubmitOutcome, TargetPicker,
};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a, P: TargetPicker> {
    pub dictionary: &'a Dictionary,
    pub session: GameSession<'a>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    picker: P,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a, P: TargetPicker> App<'a, P> {
    #[must_use]
    pub fn new(dictionary: &'a Dictionary, mut picker: P) -> Self {
        let session = GameSession::new(dictionary, &mut picker);

        Self {
            dictionary,
            session,
            messages: vec![Message {
                text: "Guess the word! Type letters, Enter to submit, Esc to quit.".to_string(),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            should_quit: false,
            picker,
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Enter if self.session.is_over() => self.new_game(),
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace => {
                self.session.remove_letter();
            }
            KeyCode::Char(c) => {
                self.session.append_letter(c);
            }
            _ => {}
        }
    }

    pub fn submit(&mut self) {
        match self.session.submit() {
            SubmitOutcome::Rejected(Rejection::NotReady) => {
                if !self.session.is_over() {
                    self.add_message("Not enough letters", MessageStyle::Error);
                }
            }
            SubmitOutcome::Rejected(Rejection::NotInDictionary) => {
                self.add_message("Not in word list", MessageStyle::Error);
            }
            SubmitOutcome::Accepted(accepted) => match accepted.state {
                GameState::Playing => {}
                GameState::Won => {
                    self.stats.record(&self.session);
                    let celebration = match accepted.row_index + 1 {
                        1 => "🎯 Genius! First try!",
                        2 => "🔥 Magnificent!",
                        3 => "✨ Impressive!",
                        4 => "👏 Splendid!",
                        5 => "🎉 Great!",
                        _ => "😅 Phew!",
                    };
                    self.add_message(celebration, MessageStyle::Success);
                    self.add_message("Press Enter to play again or Esc to quit.", MessageStyle::Info);
                }
                GameState::Lost => {
                    self.stats.record(&self.session);
                    let target = accepted
                        .revealed_target
                        .map(|w| w.text())
                        .unwrap_or_default();
                    self.add_message(
                        &format!("Game over. The word was: {target}"),
                        MessageStyle::Error,
                    );
                    self.add_message("Press Enter to play again or Esc to quit.", MessageStyle::Info);
                }
            },
        }
    }

    /// Discard the current session and start another with a new target
    pub fn new_game(&mut self) {
        self.session = GameSession::new(self.dictionary, &mut self.picker);
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
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
/// Returns the statistics of the games finished before quitting.
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<P: TargetPicker>(app: App<'_, P>) -> Result<Statistics> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend, P: TargetPicker>(
    terminal: &mut Terminal<B>,
    mut app: App<'_, P>,
) -> Result<Statistics> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app.stats)
}
