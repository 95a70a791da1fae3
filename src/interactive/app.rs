//! TUI application state and logic

use crate::core::WORD_LENGTH;
use crate::game::{GameStatus, Practice, share_text, win_message};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::debug;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub practice: Practice,
    pub current_guess: String,
    pub messages: Vec<Message>,
    pub input_mode: InputMode,
    pub dark_mode: bool,
    pub show_stats: bool,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Typing,
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
    pub fn new(practice: Practice, dark_mode: bool) -> Self {
        let mut app = Self {
            practice,
            current_guess: String::new(),
            messages: Vec::new(),
            input_mode: InputMode::Typing,
            dark_mode,
            show_stats: false,
            should_quit: false,
        };
        app.add_message("Guess the word in six tries.", MessageStyle::Info);
        app.add_message(
            "Enter submits · F2 toggles hard mode · Tab shows statistics",
            MessageStyle::Info,
        );
        app
    }

    /// Route a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match (self.input_mode, key.code) {
            (_, KeyCode::Esc) => self.should_quit = true,
            (_, KeyCode::Tab) => self.show_stats = !self.show_stats,
            (_, KeyCode::F(2)) => self.toggle_hard_mode(),
            (InputMode::Typing, KeyCode::Char(c)) => self.type_letter(c),
            (InputMode::Typing, KeyCode::Backspace) => {
                self.current_guess.pop();
            }
            (InputMode::Typing, KeyCode::Enter) => self.submit_guess(),
            (InputMode::GameOver, KeyCode::Char('n' | 'N') | KeyCode::Enter) => self.new_game(),
            (InputMode::GameOver, KeyCode::Char('q' | 'Q')) => self.should_quit = true,
            (InputMode::GameOver, KeyCode::Char('s' | 'S')) => self.share(),
            _ => {}
        }
    }

    pub fn type_letter(&mut self, c: char) {
        if self.current_guess.len() < WORD_LENGTH && c.is_ascii_alphabetic() {
            self.current_guess.push(c.to_ascii_uppercase());
        }
    }

    pub fn submit_guess(&mut self) {
        let guess = self.current_guess.clone();
        match self.practice.submit(&guess) {
            Ok(submission) => {
                self.current_guess.clear();
                match submission.status {
                    GameStatus::Win => {
                        self.input_mode = InputMode::GameOver;
                        self.show_stats = true;
                        self.add_message(
                            &format!("🎉 {}!", win_message(submission.row_index)),
                            MessageStyle::Success,
                        );
                        self.add_message(
                            "Press 'n' for a new game, 's' to share, 'q' to quit.",
                            MessageStyle::Info,
                        );
                    }
                    GameStatus::Fail => {
                        self.input_mode = InputMode::GameOver;
                        self.show_stats = true;
                        let solution = submission
                            .solution
                            .map(|word| word.to_string())
                            .unwrap_or_default();
                        self.add_message(&format!("The word was {solution}"), MessageStyle::Error);
                        self.add_message(
                            "Press 'n' for a new game, 's' to share, 'q' to quit.",
                            MessageStyle::Info,
                        );
                    }
                    GameStatus::InProgress => {}
                }
            }
            Err(e) => {
                debug!("guess '{guess}' rejected: {e}");
                self.add_message(&e.to_string(), MessageStyle::Error);
            }
        }
    }

    pub fn new_game(&mut self) {
        self.practice.new_round();
        self.current_guess.clear();
        self.input_mode = InputMode::Typing;
        self.show_stats = false;
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
    }

    pub fn toggle_hard_mode(&mut self) {
        let enabled = !self.practice.state().hard_mode;
        match self.practice.set_hard_mode(enabled) {
            Ok(()) => self.add_message(
                if enabled { "Hard mode on" } else { "Hard mode off" },
                MessageStyle::Info,
            ),
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn share(&mut self) {
        let text = share_text(self.practice.state());
        for line in text.lines().filter(|line| !line.is_empty()) {
            self.add_message(line, MessageStyle::Info);
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 8 messages
        if self.messages.len() > 8 {
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
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
