//! TUI application state and logic

use crate::commands::{Session, SessionConfig, Statistics};
use crate::core::{Color, GameState, NUM_PEGS, Outcome};
use crate::output::board::status_line;
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
use tracing::debug;

/// Messages kept on screen
const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App {
    pub session: Session,
    pub game: GameState,
    pub input: Vec<Color>,
    pub messages: Vec<Message>,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
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

impl App {
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        let mut session = Session::new(config);
        let game = session.next_game();

        Self {
            session,
            game,
            input: Vec::with_capacity(NUM_PEGS),
            messages: vec![
                Message {
                    text: "Welcome! Crack the four-peg code in ten turns.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type digits 1-6 for colors, Enter to submit.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            should_quit: false,
            input_mode: InputMode::Guessing,
        }
    }

    #[must_use]
    pub const fn stats(&self) -> &Statistics {
        &self.session.stats
    }

    /// Add a peg from a typed digit
    pub fn push_peg(&mut self, digit: char) {
        if self.input.len() >= NUM_PEGS {
            self.add_message("Guess is full - press Enter to submit", MessageStyle::Error);
            return;
        }

        match Color::from_digit(digit) {
            Ok(color) => self.input.push(color),
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn pop_peg(&mut self) {
        self.input.pop();
    }

    /// Submit the pegs typed so far
    pub fn submit_guess(&mut self) {
        if self.input_mode != InputMode::Guessing {
            return;
        }

        let score = match self.game.submit(&self.input) {
            Ok(score) => score,
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                return;
            }
        };
        self.input.clear();

        debug!(turn = self.game.turns_taken(), "tui guess submitted");

        match self.game.outcome() {
            Outcome::Won => {
                let turns = self.game.turns_taken();
                let celebration = match turns {
                    1 => "🎯 HOLE IN ONE! First try! 🌟",
                    2..=4 => "🔥 MAGNIFICENT! Code broken! 🔥",
                    5..=7 => "✨ SPLENDID! Code broken! ✨",
                    _ => "😅 PHEW! Just in time! 😅",
                };
                self.add_message(celebration, MessageStyle::Success);
                self.finish_game();
            }
            Outcome::Lost => {
                let reveal = format!("The answer was {}", self.game.answer());
                self.add_message(&reveal, MessageStyle::Error);
                self.finish_game();
            }
            Outcome::Unknown => {
                self.add_message(
                    &format!(
                        "{} exact, {} color only - {} turns left",
                        score.exact(),
                        score.color_only(),
                        self.game.turns_remaining()
                    ),
                    MessageStyle::Info,
                );
            }
        }
    }

    fn finish_game(&mut self) {
        self.session.stats.record(&self.game);
        self.input_mode = InputMode::GameOver;
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    pub fn new_game(&mut self) {
        // Abandoned games do not count toward the statistics
        self.game = self.session.next_game();
        self.input.clear();
        self.messages.clear();
        self.input_mode = InputMode::Guessing;
        self.add_message("New game started! Good luck.", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    /// Status text for the finished game, if any
    #[must_use]
    pub const fn status(&self) -> Option<&'static str> {
        status_line(self.game.outcome())
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

            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Char('q') | KeyCode::Esc => {
                    app.should_quit = true;
                }
                KeyCode::Char('n') => {
                    app.new_game();
                }
                _ if app.input_mode == InputMode::GameOver => {
                    // Only new game / quit once the game is over
                }
                KeyCode::Char(c) => {
                    app.push_peg(c);
                }
                KeyCode::Backspace => {
                    app.pop_peg();
                }
                KeyCode::Enter => {
                    app.submit_guess();
                }
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
