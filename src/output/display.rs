//! Display functions for command results

use super::formatters::{colored_row, distribution_bar, keyboard_lines, letter_tile};
use crate::commands::{CheckReport, EvaluationReport};
use crate::game::{GameState, MAX_GUESSES, Statistics};
use crate::rules::LetterStatusMap;
use colored::Colorize;

/// Print the board rows played so far, blank rows, and the keyboard
pub fn print_board(state: &GameState, letters: &LetterStatusMap) {
    let history = state.history();
    for (guess, evaluation) in &history {
        println!("  {}", colored_row(guess, evaluation));
    }
    for _ in history.len()..MAX_GUESSES {
        println!("  {}", " _ ".repeat(5).bright_black());
    }
    println!();
    for line in keyboard_lines(letters) {
        println!("  {line}");
    }
    println!();
}

/// Print statistics with the guess distribution
pub fn print_statistics(stats: &Statistics) {
    println!("\n📊 {}", "Statistics".bright_cyan().bold());
    println!("   Played:          {}", stats.games_played);
    println!("   Win %:           {}", stats.win_percentage);
    println!("   Current streak:  {}", stats.current_streak);
    println!("   Max streak:      {}", stats.max_streak);
    println!("   Average guesses: {}", stats.average_guesses);

    println!("\n📈 {}", "Guess distribution:".bright_cyan().bold());
    let max = stats.guesses.wins.iter().copied().max().unwrap_or(0);
    for guess_count in 1..=MAX_GUESSES {
        let count = stats.guesses.wins_in(guess_count);
        println!(
            "   {guess_count}: {} {count}",
            distribution_bar(count, max, 30).green()
        );
    }
    println!("   X: {}\n", stats.guesses.fail);
}

/// Print the result of evaluating guesses against a solution
pub fn print_evaluation_report(report: &EvaluationReport) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Solution: {}",
        report.solution.to_string().bright_yellow().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    for (i, (guess, evaluation)) in report.rows.iter().enumerate() {
        println!(
            "  {}. {}  {}",
            (i + 1).to_string().bright_black(),
            colored_row(guess, evaluation),
            evaluation.to_tiles()
        );
    }

    println!();
    for line in keyboard_lines(&report.letters) {
        println!("  {line}");
    }
    println!();

    match report.solved_at {
        Some(row) => println!("{}", format!("✅ Solved on guess {row}").green().bold()),
        None => println!("{}", "❌ Not solved".red().bold()),
    }
}

/// Print the result of a hard-mode check
pub fn print_check_report(report: &CheckReport) {
    for (guess, evaluation) in &report.history {
        println!("  {}", colored_row(guess, evaluation));
    }
    let candidate: String = report
        .candidate
        .as_str()
        .chars()
        .map(|c| letter_tile(c, None).to_string())
        .collect();
    println!("  {candidate}\n");

    match &report.violation {
        Some(violation) => println!("{}", format!("❌ {violation}").red().bold()),
        None => println!("{}", "✅ Allowed in hard mode".green().bold()),
    }
}
