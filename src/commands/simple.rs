//! Simple interactive CLI mode
//!
//! Line-based game without the TUI

use crate::core::WORD_LENGTH;
use crate::game::{GameStatus, Practice, share_text, win_message};
use crate::output::display::{print_board, print_statistics};
use colored::Colorize;
use std::io::{self, Write};

/// One line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimpleCommand {
    Guess(String),
    Quit,
    NewGame,
    Share,
    Stats,
    HardMode(bool),
    Help,
}

impl SimpleCommand {
    /// Parse a line of input
    ///
    /// `:`-prefixed input is always a command. Anything five characters long is a
    /// guess, so words like SHARE stay playable; other bare command words still work.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        if let Some(command) = input.strip_prefix(':') {
            return Self::command(command.trim()).unwrap_or(Self::Help);
        }
        if input.chars().count() == WORD_LENGTH {
            return Self::Guess(input.to_string());
        }
        Self::command(input).unwrap_or_else(|| Self::Guess(input.to_string()))
    }

    fn command(input: &str) -> Option<Self> {
        let command = match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => Self::Quit,
            "new" | "n" => Self::NewGame,
            "share" => Self::Share,
            "stats" => Self::Stats,
            "hard on" | "hard" => Self::HardMode(true),
            "hard off" => Self::HardMode(false),
            "help" | "?" => Self::Help,
            _ => return None,
        };
        Some(command)
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple(practice: &mut Practice) -> io::Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                     Wordull - Simple Mode                    ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    print_help();

    loop {
        let prompt = format!(
            "Guess {}/6{}",
            practice.state().row_index + 1,
            if practice.state().hard_mode { " (hard)" } else { "" }
        );
        let Some(line) = get_user_input(&prompt)? else {
            return Ok(());
        };

        match SimpleCommand::parse(&line) {
            SimpleCommand::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            SimpleCommand::NewGame => {
                practice.new_round();
                println!("\n🔄 New game started!\n");
            }
            SimpleCommand::Share => println!("\n{}", share_text(practice.state())),
            SimpleCommand::Stats => print_statistics(practice.stats()),
            SimpleCommand::Help => print_help(),
            SimpleCommand::HardMode(enabled) => match practice.set_hard_mode(enabled) {
                Ok(()) => println!("Hard mode {}", if enabled { "on" } else { "off" }),
                Err(e) => println!("{}", e.to_string().red()),
            },
            SimpleCommand::Guess(guess) if guess.is_empty() => {}
            SimpleCommand::Guess(guess) => match practice.submit(&guess) {
                Ok(submission) => {
                    println!();
                    print_board(practice.state(), &practice.letters());

                    if submission.status != GameStatus::InProgress {
                        announce_result(practice);
                        match get_user_input("Play again? (yes/no)")?
                            .unwrap_or_default()
                            .to_lowercase()
                            .as_str()
                        {
                            "yes" | "y" => {
                                practice.new_round();
                                println!("\n🔄 New game started!\n");
                            }
                            _ => {
                                println!("\n👋 Thanks for playing!\n");
                                return Ok(());
                            }
                        }
                    }
                }
                Err(e) => println!("{}", format!("❌ {e}").red()),
            },
        }
    }
}

fn announce_result(practice: &Practice) {
    let state = practice.state();
    println!("\n{}", "═".repeat(40).bright_cyan());
    if state.status == GameStatus::Win {
        println!("  {}", win_message(state.row_index).bright_green().bold());
    } else if let Some(solution) = practice.revealed_solution() {
        println!("  The word was {}", solution.to_string().bright_yellow().bold());
    }
    println!("{}", "═".repeat(40).bright_cyan());
    println!("\n{}", share_text(state));
    print_statistics(practice.stats());
}

fn print_help() {
    println!("Type a five-letter guess and press Enter.");
    println!("  🟩 right letter, right spot   🟨 right letter, wrong spot   ⬛ not in the word");
    println!("Commands: ':new', ':share', ':stats', ':hard on', ':hard off', ':help', ':quit'\n");
}

/// Get user input with a prompt, `None` at end of input
fn get_user_input(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::ANSWERS;

    #[test]
    fn parse_commands() {
        assert_eq!(SimpleCommand::parse("q"), SimpleCommand::Quit);
        assert_eq!(SimpleCommand::parse(" NEW "), SimpleCommand::NewGame);
        assert_eq!(SimpleCommand::parse("hard off"), SimpleCommand::HardMode(false));
        assert_eq!(SimpleCommand::parse("Hard"), SimpleCommand::HardMode(true));
        assert_eq!(SimpleCommand::parse("?"), SimpleCommand::Help);
    }

    #[test]
    fn prefixed_commands() {
        assert_eq!(SimpleCommand::parse(":share"), SimpleCommand::Share);
        assert_eq!(SimpleCommand::parse(": Stats"), SimpleCommand::Stats);
        assert_eq!(SimpleCommand::parse(":quit"), SimpleCommand::Quit);
        assert_eq!(SimpleCommand::parse(":bogus"), SimpleCommand::Help);
    }

    #[test]
    fn five_letter_input_is_always_a_guess() {
        assert_eq!(
            SimpleCommand::parse("share"),
            SimpleCommand::Guess("share".to_string())
        );
        assert_eq!(
            SimpleCommand::parse("STATS"),
            SimpleCommand::Guess("STATS".to_string())
        );
        for &word in ANSWERS {
            assert_eq!(
                SimpleCommand::parse(word),
                SimpleCommand::Guess(word.to_string()),
                "answer '{word}' must be playable"
            );
        }
    }

    #[test]
    fn anything_else_is_a_guess() {
        assert_eq!(
            SimpleCommand::parse(" crane "),
            SimpleCommand::Guess("crane".to_string())
        );
        assert_eq!(SimpleCommand::parse(""), SimpleCommand::Guess(String::new()));
    }
}
