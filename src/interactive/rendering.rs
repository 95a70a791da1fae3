//! TUI rendering with ratatui
//!
//! Board, keyboard, statistics and message panes for the game.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{Verdict, WORD_LENGTH};
use crate::game::{GameStatus, MAX_GUESSES};
use crate::output::formatters::KEYBOARD_ROWS;
use crate::rules::LetterStatusMap;
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
            Constraint::Min(20),   // Board and side panel
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_board_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);
    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

/// Background and foreground for a tile
fn tile_style(verdict: Option<Verdict>, dark_mode: bool) -> Style {
    let base = Style::default().add_modifier(Modifier::BOLD);
    match verdict {
        Some(Verdict::Correct) => base.bg(Color::Green).fg(Color::Black),
        Some(Verdict::Present) => base.bg(Color::Yellow).fg(Color::Black),
        Some(Verdict::Absent) => base.bg(Color::DarkGray).fg(Color::White),
        None if dark_mode => base.bg(Color::Black).fg(Color::White),
        None => base.bg(Color::Gray).fg(Color::Black),
    }
}

fn tile(letter: char, verdict: Option<Verdict>, dark_mode: bool) -> Span<'static> {
    Span::styled(format!(" {letter} "), tile_style(verdict, dark_mode))
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDULL 🟨")
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

fn render_board_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2 * MAX_GUESSES as u16 + 1), // Grid
            Constraint::Min(8),                              // Keyboard
        ])
        .split(area);

    render_grid(f, app, chunks[0]);
    render_keyboard(f, &app.practice.letters(), app.dark_mode, chunks[1]);
}

fn render_grid(f: &mut Frame, app: &App, area: Rect) {
    let state = app.practice.state();
    let mut lines = Vec::with_capacity(MAX_GUESSES * 2);

    for row in 0..MAX_GUESSES {
        let typed = row == state.row_index && state.status == GameStatus::InProgress;
        let letters: Vec<char> = if typed {
            app.current_guess.chars().collect()
        } else {
            state.board_state.get(row).map_or_else(Vec::new, |w| w.chars().collect())
        };
        let evaluation = state.evaluations.get(row).copied().flatten();

        let spans: Vec<Span> = (0..WORD_LENGTH)
            .flat_map(|i| {
                let letter = letters.get(i).copied().unwrap_or(' ');
                let verdict = evaluation.map(|e| e.verdicts()[i]);
                [tile(letter, verdict, app.dark_mode), Span::raw(" ")]
            })
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let title = format!(" Round {} ", app.practice.round());
    let grid = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(grid, area);
}

fn render_keyboard(f: &mut Frame, letters: &LetterStatusMap, dark_mode: bool, area: Rect) {
    let mut lines = Vec::with_capacity(KEYBOARD_ROWS.len() * 2);
    for row in KEYBOARD_ROWS {
        let spans: Vec<Span> = row
            .chars()
            .map(|key| tile(key, letters.get(key as u8), dark_mode))
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Keyboard ").borders(Borders::ALL));
    f.render_widget(keyboard, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    if app.show_stats {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(7),                    // Summary
                Constraint::Length(MAX_GUESSES as u16 + 3), // Distribution
                Constraint::Min(5),                       // Messages
            ])
            .split(area);

        render_summary(f, app, chunks[0]);
        render_distribution(f, app, chunks[1]);
        render_messages(f, app, chunks[2]);
    } else {
        render_messages(f, app, area);
    }
}

fn render_summary(f: &mut Frame, app: &App, area: Rect) {
    let stats = app.practice.stats();
    let content = vec![
        Line::from(format!("Played:          {}", stats.games_played)),
        Line::from(format!("Win %:           {}", stats.win_percentage)),
        Line::from(format!("Current streak:  {}", stats.current_streak)),
        Line::from(format!("Max streak:      {}", stats.max_streak)),
        Line::from(format!("Average guesses: {}", stats.average_guesses)),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Statistics ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_distribution(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Guess Distribution ")
        .borders(Borders::ALL);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let distribution = &app.practice.stats().guesses;
    let max = distribution.wins.iter().copied().max().unwrap_or(0);
    let state = app.practice.state();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1); MAX_GUESSES + 1])
        .split(inner);
    let max = max.max(distribution.fail);

    for (i, row) in rows.iter().take(MAX_GUESSES).enumerate() {
        let guesses = i + 1;
        let count = distribution.wins_in(guesses);
        let percent = if max == 0 { 0 } else { count * 100 / max };
        // Highlight the bar for the round just won
        let color = if state.status == GameStatus::Win && state.row_index == guesses {
            Color::Green
        } else {
            Color::DarkGray
        };
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(color))
            .percent(u16::try_from(percent).unwrap_or(100))
            .label(format!("{guesses}: {count}"));
        f.render_widget(gauge, *row);
    }

    if let Some(row) = rows.get(MAX_GUESSES) {
        let fail = distribution.fail;
        let percent = if max == 0 { 0 } else { fail * 100 / max };
        let color = if state.status == GameStatus::Fail {
            Color::Red
        } else {
            Color::DarkGray
        };
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(color))
            .percent(u16::try_from(percent).unwrap_or(100))
            .label(format!("X: {fail}"));
        f.render_widget(gauge, *row);
    }
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
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
    let (title, content, color) = match (app.input_mode, app.practice.state().status) {
        (InputMode::GameOver, GameStatus::Win) => (
            " 🎉 Solved! | 'n' new game · 's' share · 'q' quit ",
            String::new(),
            Color::Green,
        ),
        (InputMode::GameOver, _) => (
            " Out of guesses | 'n' new game · 's' share · 'q' quit ",
            String::new(),
            Color::Red,
        ),
        (InputMode::Typing, _) => (
            " Your Guess | Enter to submit · Backspace to delete ",
            format!("{:_<width$}", app.current_guess, width = WORD_LENGTH),
            Color::Yellow,
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
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let state = app.practice.state();
    let mode_text = format!(
        "Hard mode: {}",
        if state.hard_mode { "on" } else { "off" }
    );
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats = app.practice.stats();
    let stats_text = format!(
        "Games: {} | Win Rate: {}%",
        stats.games_played, stats.win_percentage
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help = Paragraph::new("Esc: Quit | F2: Hard Mode | Tab: Statistics")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
