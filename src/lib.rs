//! Wordull
//!
//! A five-letter word guessing game: duplicate-aware guess scoring, hard-mode
//! validation, keyboard letter colouring, statistics and a terminal UI.
//!
//! # Quick Start
//!
//! ```rust
//! use wordull::core::{Evaluation, Verdict, Word};
//! use wordull::rules::aggregate;
//!
//! // Score a guess against the solution
//! let guess = Word::new("lllll").unwrap();
//! let solution = Word::new("alley").unwrap();
//! let evaluation = Evaluation::calculate(&guess, &solution);
//! assert_eq!(evaluation.to_tiles(), "⬛🟩🟩⬛⬛");
//!
//! // Colour the keyboard from the rows played so far
//! let letters = aggregate(&[(guess, evaluation)]);
//! assert_eq!(letters.get(b'L'), Some(Verdict::Correct));
//! ```

// Core domain types
pub mod core;

// Hard mode and keyboard rules
pub mod rules;

// Game sessions, statistics and sharing
pub mod game;

// Word lists
pub mod wordlists;

// Settings file
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
