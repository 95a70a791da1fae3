//! Wordull - CLI
//!
//! Five-letter word game with a TUI, a line-based mode and scripting commands.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::debug;
use std::path::PathBuf;
use wordull::{
    commands::{check_candidate, evaluate_guesses, run_simple},
    config::{Settings, load_import_stats},
    core::Word,
    game::{Practice, SolutionSource},
    interactive::{App, run_tui},
    output::{print_check_report, print_evaluation_report},
    wordlists::{ANSWERS, WordList, loader::{load_from_file, words_from_slice}},
};

#[derive(Parser)]
#[command(
    name = "wordull",
    about = "Guess the five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// JSON settings file (hardMode, darkMode, wordList)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Accepted guesses, one word per line (default: any five letters)
    #[arg(short = 'w', long, global = true)]
    words: Option<PathBuf>,

    /// Dark colour scheme in the TUI
    #[arg(long, global = true)]
    dark: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Full-screen terminal game (default)
    Play {
        #[command(flatten)]
        game: GameArgs,
    },

    /// Line-based game without the TUI
    Simple {
        #[command(flatten)]
        game: GameArgs,
    },

    /// Score guesses against a known solution
    Evaluate {
        /// The solution word
        solution: String,

        /// Guesses in the order they were played
        #[arg(required = true)]
        guesses: Vec<String>,
    },

    /// Check whether a guess is allowed in hard mode
    Check {
        /// The guess to check
        candidate: String,

        /// Previous rows as GUESS:PATTERN (G=green Y=yellow -=gray), oldest first
        #[arg(short, long = "row")]
        rows: Vec<String>,
    },
}

#[derive(clap::Args, Default)]
struct GameArgs {
    /// Fix the solution instead of picking a random one
    #[arg(short, long)]
    solution: Option<String>,

    /// Revealed hints must be used in later guesses
    #[arg(long)]
    hard: bool,

    /// Start from statistics exported as JSON
    #[arg(long, value_name = "PATH")]
    import: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    let command = cli.command.unwrap_or(Commands::Play {
        game: GameArgs::default(),
    });

    match command {
        Commands::Play { game } => {
            let settings = settings.with_overrides(game.hard, cli.dark, cli.words);
            let practice = new_practice(&game, &settings)?;
            run_tui(App::new(practice, settings.dark_mode))
        }
        Commands::Simple { game } => {
            let settings = settings.with_overrides(game.hard, cli.dark, cli.words);
            let mut practice = new_practice(&game, &settings)?;
            run_simple(&mut practice).context("simple mode I/O failed")
        }
        Commands::Evaluate { solution, guesses } => {
            let report = evaluate_guesses(&solution, &guesses)?;
            print_evaluation_report(&report);
            Ok(())
        }
        Commands::Check { candidate, rows } => {
            let report = check_candidate(&candidate, &rows)?;
            print_check_report(&report);
            if report.violation.is_some() {
                std::process::exit(1);
            }
            Ok(())
        }
    }
}

fn new_practice(game: &GameArgs, settings: &Settings) -> Result<Practice> {
    let words = load_word_list(settings)?;
    let solutions = match &game.solution {
        Some(solution) => SolutionSource::Fixed(
            Word::new(solution).with_context(|| format!("invalid solution '{solution}'"))?,
        ),
        None => SolutionSource::Random(words_from_slice(ANSWERS)),
    };
    debug!(
        "starting practice (hard mode: {}, {} accepted words)",
        settings.hard_mode,
        words.len()
    );
    let mut practice = Practice::new(solutions, words, settings.hard_mode)?;
    if let Some(path) = &game.import {
        practice.import_stats(&load_import_stats(path)?);
    }
    Ok(practice)
}

/// Accepted guesses from the settings path, or the any-five-letters fallback
fn load_word_list(settings: &Settings) -> Result<WordList> {
    match &settings.word_list {
        Some(path) => {
            let words = load_from_file(path)
                .with_context(|| format!("failed to read word list {}", path.display()))?;
            Ok(words.into_iter().collect())
        }
        None => Ok(WordList::any()),
    }
}
