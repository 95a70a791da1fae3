//! Formatting utilities for terminal output

use crate::core::{Evaluation, Verdict, Word};
use crate::rules::LetterStatusMap;
use colored::{ColoredString, Colorize};

/// On-screen keyboard layout
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// A single letter tile coloured by its verdict
#[must_use]
pub fn letter_tile(letter: char, verdict: Option<Verdict>) -> ColoredString {
    let tile = format!(" {} ", letter.to_ascii_uppercase());
    match verdict {
        Some(Verdict::Correct) => tile.black().on_green().bold(),
        Some(Verdict::Present) => tile.black().on_yellow().bold(),
        Some(Verdict::Absent) => tile.white().on_bright_black(),
        None => tile.bold(),
    }
}

/// A guessed word as a row of coloured tiles
#[must_use]
pub fn colored_row(guess: &Word, evaluation: &Evaluation) -> String {
    guess
        .as_str()
        .chars()
        .zip(evaluation.verdicts())
        .map(|(letter, &verdict)| letter_tile(letter, Some(verdict)).to_string())
        .collect()
}

/// The keyboard with each key coloured by its best verdict so far
#[must_use]
pub fn keyboard_lines(letters: &LetterStatusMap) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let keys: String = row
                .chars()
                .map(|key| letter_tile(key, letters.get(key as u8)).to_string())
                .collect();
            format!("{}{keys}", " ".repeat(indent * 2))
        })
        .collect()
}

/// Horizontal bar for a share of a total
#[must_use]
pub fn distribution_bar(count: u32, max: u32, width: usize) -> String {
    let filled = if max == 0 {
        0
    } else {
        ((f64::from(count) / f64::from(max)) * width as f64).round() as usize
    };
    let filled = filled.min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::aggregate;

    #[test]
    fn colored_row_keeps_letters_in_order() {
        colored::control::set_override(false);
        let guess = Word::new("crane").unwrap();
        let evaluation: Evaluation = "G-Y--".parse().unwrap();
        assert_eq!(colored_row(&guess, &evaluation), " C  R  A  N  E ");
    }

    #[test]
    fn keyboard_has_three_indented_rows() {
        colored::control::set_override(false);
        let letters = aggregate(&[(Word::new("crane").unwrap(), "G----".parse().unwrap())]);
        let lines = keyboard_lines(&letters);
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with(" Q "));
        assert!(lines[1].starts_with("   A "));
        assert!(lines[2].starts_with("     Z "));
    }

    #[test]
    fn distribution_bar_bounds() {
        assert_eq!(distribution_bar(0, 10, 10), "░░░░░░░░░░");
        assert_eq!(distribution_bar(10, 10, 10), "██████████");
        assert_eq!(distribution_bar(5, 10, 10), "█████░░░░░");
        assert_eq!(distribution_bar(3, 0, 4), "░░░░");
    }
}
