//! Guess evaluation against the day's solution
//!
//! Scoring runs in two passes so duplicate letters are never credited more times
//! than they occur in the solution:
//! 1. exact position matches become `Correct` and consume their solution letter
//! 2. every other position becomes `Present` if an unconsumed copy of its letter
//!    remains (consuming it), `Absent` otherwise

use super::{InvalidInput, Verdict, WORD_LENGTH, Word};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The five verdicts for one guess, in guess order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Evaluation([Verdict; WORD_LENGTH]);

impl Evaluation {
    /// All letters correct
    pub const SOLVED: Self = Self([Verdict::Correct; WORD_LENGTH]);

    #[must_use]
    pub const fn new(verdicts: [Verdict; WORD_LENGTH]) -> Self {
        Self(verdicts)
    }

    /// Score `guess` against `solution`
    ///
    /// # Examples
    /// ```
    /// use wordull::core::{Evaluation, Verdict, Word};
    ///
    /// let guess = Word::new("llama").unwrap();
    /// let solution = Word::new("alloy").unwrap();
    /// let evaluation = Evaluation::calculate(&guess, &solution);
    ///
    /// // L(present) L(correct) A(present) M(absent) A(absent)
    /// assert_eq!(evaluation.to_tiles(), "🟨🟩🟨⬛⬛");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, solution: &Word) -> Self {
        let guess = guess.letters();
        let solution = solution.letters();
        let mut verdicts = [Verdict::Absent; WORD_LENGTH];
        let mut unconsumed = [0u8; 26];

        // First pass: exact matches, everything else stays available
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if guess[i] == solution[i] {
                verdicts[i] = Verdict::Correct;
            } else {
                unconsumed[letter_index(solution[i])] += 1;
            }
        }

        // Second pass: wrong position, drawn from what the greens left behind
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if verdicts[i] == Verdict::Correct {
                continue;
            }
            let slot = &mut unconsumed[letter_index(guess[i])];
            if *slot > 0 {
                verdicts[i] = Verdict::Present;
                *slot -= 1;
            }
        }

        Self(verdicts)
    }

    #[inline]
    #[must_use]
    pub const fn verdicts(&self) -> &[Verdict; WORD_LENGTH] {
        &self.0
    }

    /// Every letter is correct
    #[inline]
    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Self::SOLVED
    }

    #[must_use]
    pub fn count(&self, verdict: Verdict) -> usize {
        self.0.iter().filter(|&&v| v == verdict).count()
    }

    /// Render as share tiles, e.g. "🟩🟨⬛⬛🟩"
    #[must_use]
    pub fn to_tiles(&self) -> String {
        self.0.iter().map(|v| v.tile()).collect()
    }
}

/// Score a guess against a solution given as text
///
/// Both inputs are case-insensitive.
///
/// # Errors
/// Returns `InvalidInput` when either word is not exactly five ASCII letters.
///
/// # Examples
/// ```
/// use wordull::core::{evaluate, InvalidInput, Verdict};
///
/// let evaluation = evaluate("crane", "SLATE").unwrap();
/// assert_eq!(evaluation.count(Verdict::Correct), 2);
///
/// assert_eq!(evaluate("cranes", "slate"), Err(InvalidInput::Length(6)));
/// ```
pub fn evaluate(guess: &str, solution: &str) -> Result<Evaluation, InvalidInput> {
    let guess = Word::new(guess)?;
    let solution = Word::new(solution)?;
    Ok(Evaluation::calculate(&guess, &solution))
}

#[inline]
fn letter_index(letter: u8) -> usize {
    usize::from(letter - b'A')
}

impl FromStr for Evaluation {
    type Err = String;

    /// Parse feedback such as "GY-GY" or "🟩🟨⬛🟩🟨"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s.chars().collect();
        if symbols.len() != WORD_LENGTH {
            return Err(format!("Invalid pattern string: {s}"));
        }

        let mut verdicts = [Verdict::Absent; WORD_LENGTH];
        for (slot, &symbol) in verdicts.iter_mut().zip(&symbols) {
            *slot = Verdict::from_symbol(symbol)
                .ok_or_else(|| format!("Invalid pattern string: {s}"))?;
        }

        Ok(Self(verdicts))
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_tiles())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use Verdict::{Absent as A, Correct as C, Present as P};

    fn eval(guess: &str, solution: &str) -> [Verdict; 5] {
        *evaluate(guess, solution).unwrap().verdicts()
    }

    #[test]
    fn all_absent() {
        assert_eq!(eval("abcde", "fghij"), [A, A, A, A, A]);
    }

    #[test]
    fn identical_words_are_solved() {
        for word in ["crane", "slate", "audio", "zzzzz", "aaaaa"] {
            assert!(evaluate(word, word).unwrap().is_solved());
        }
    }

    #[test]
    fn real_example() {
        // R is absent because SLATE has no R
        assert_eq!(eval("crane", "slate"), [A, A, C, A, C]);
    }

    #[test]
    fn repeated_guess_letter_limited_by_solution_count() {
        // ALLEY has two Ls; only those two are credited
        let verdicts = eval("lllll", "alley");
        assert_eq!(verdicts, [A, C, C, A, A]);
        let credited = verdicts.iter().filter(|&&v| v != A).count();
        assert_eq!(credited, 2);
    }

    #[test]
    fn duplicate_letters_present_then_correct() {
        // First O is present, second O correct
        assert_eq!(eval("robot", "floor"), [P, P, A, C, A]);
    }

    #[test]
    fn duplicate_letters_green_consumes_before_yellow() {
        // ERASE has two Es, enough for both guessed Es
        assert_eq!(eval("speed", "erase"), [P, A, P, P, A]);
        // THERE's final E goes to the green, leaving one E for the first guessed E
        assert_eq!(eval("eerie", "there"), [P, A, P, A, C]);
    }

    #[test]
    fn llama_vs_alloy() {
        assert_eq!(eval("llama", "alloy"), [P, C, P, A, A]);
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(eval("CrAnE", "sLaTe"), eval("crane", "slate"));
    }

    #[test]
    fn invalid_length_rejected() {
        assert_eq!(evaluate("cran", "slate"), Err(InvalidInput::Length(4)));
        assert_eq!(evaluate("crane", "slates"), Err(InvalidInput::Length(6)));
    }

    #[test]
    fn parse_feedback() {
        let a: Evaluation = "GY-GY".parse().unwrap();
        let b: Evaluation = "🟩🟨⬜🟩🟨".parse().unwrap();
        assert_eq!(a, b);
        assert_eq!(a.verdicts(), &[C, P, A, C, P]);
        assert!("GYG".parse::<Evaluation>().is_err());
        assert!("GXGQY".parse::<Evaluation>().is_err());
    }

    #[test]
    fn serializes_as_array() {
        let evaluation = Evaluation::new([C, P, A, A, A]);
        assert_eq!(
            serde_json::to_string(&evaluation).unwrap(),
            r#"["correct","present","absent","absent","absent"]"#
        );
    }

    fn word_strategy() -> impl Strategy<Value = String> {
        // Small alphabet so duplicates and overlaps are common
        "[a-f]{5}"
    }

    proptest! {
        #[test]
        fn self_evaluation_is_solved(word in word_strategy()) {
            prop_assert!(evaluate(&word, &word).unwrap().is_solved());
        }

        #[test]
        fn credited_letters_never_exceed_solution_count(
            guess in word_strategy(),
            solution in word_strategy(),
        ) {
            let evaluation = evaluate(&guess, &solution).unwrap();
            for letter in b'a'..=b'f' {
                let credited = guess
                    .bytes()
                    .zip(evaluation.verdicts())
                    .filter(|&(g, &v)| g == letter && v != Verdict::Absent)
                    .count();
                let in_guess = guess.bytes().filter(|&g| g == letter).count();
                let in_solution = solution.bytes().filter(|&s| s == letter).count();
                prop_assert_eq!(credited, in_guess.min(in_solution));
            }
        }

        #[test]
        fn correct_exactly_where_letters_match(
            guess in word_strategy(),
            solution in word_strategy(),
        ) {
            let evaluation = evaluate(&guess, &solution).unwrap();
            for ((g, s), &v) in guess.bytes().zip(solution.bytes()).zip(evaluation.verdicts()) {
                prop_assert_eq!(g == s, v == Verdict::Correct);
            }
        }

        #[test]
        fn deterministic(guess in word_strategy(), solution in word_strategy()) {
            prop_assert_eq!(evaluate(&guess, &solution), evaluate(&guess, &solution));
        }
    }
}
