//! Per-letter puzzle feedback
//!
//! Each attempted letter is answered with one of three indicators:
//! - Correct (right letter, right slot)
//! - Elsewhere (letter is in the word, wrong slot)
//! - Absent (letter is not in the word, or every copy of it is already accounted for)

use super::Word;
use std::fmt;

/// Feedback for a single attempted letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Indicator {
    Correct,
    Elsewhere,
    Absent,
}

impl Indicator {
    /// Parse a single feedback character
    ///
    /// Accepts `G`/`g`/🟩 for correct, `Y`/`y`/🟨 for elsewhere and `-`/`_`/`.`/⬜/⬛ for absent.
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Elsewhere),
            '-' | '_' | '.' | '⬜' | '⬛' => Some(Self::Absent),
            _ => None,
        }
    }

    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Elsewhere => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Feedback for a whole attempted word, one indicator per column
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<Indicator>);

impl Feedback {
    /// Wrap a row of indicators
    #[must_use]
    pub const fn new(indicators: Vec<Indicator>) -> Self {
        Self(indicators)
    }

    /// All-correct feedback of the given width
    #[must_use]
    pub fn perfect(width: usize) -> Self {
        Self(vec![Indicator::Correct; width])
    }

    #[must_use]
    pub fn indicators(&self) -> &[Indicator] {
        &self.0
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.0.len()
    }

    /// Check if every letter is correct
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&i| i == Indicator::Correct)
    }

    /// Calculate the feedback when `guess` is played and `answer` is hidden
    ///
    /// Duplicate letters follow the usual puzzle rules: exact matches are marked first and
    /// consume their letter, then the remaining copies of each answer letter are handed out left
    /// to right as elsewhere marks. Extra copies are absent.
    ///
    /// # Examples
    /// ```
    /// use wordle_bot::core::{Feedback, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let answer = Word::new("slate").unwrap();
    /// let feedback = Feedback::calculate(&guess, &answer);
    ///
    /// assert_eq!(feedback.to_string(), "--G-G");
    /// ```
    ///
    /// # Panics
    /// Panics in debug mode if the words differ in width
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        debug_assert_eq!(guess.width(), answer.width(), "words must share a width");

        let mut result = vec![Indicator::Absent; guess.width()];
        let mut answer_available = answer.char_counts();

        // First pass: exact position matches
        for (i, (&g, &a)) in guess.chars().iter().zip(answer.chars()).enumerate() {
            if g == a {
                result[i] = Indicator::Correct;
                if let Some(count) = answer_available.get_mut(&g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: right letter, wrong position, from what is left
        for (i, &g) in guess.chars().iter().enumerate() {
            if result[i] == Indicator::Correct {
                continue;
            }
            if let Some(count) = answer_available.get_mut(&g)
                && *count > 0
            {
                result[i] = Indicator::Elsewhere;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// Count the indicators of one kind
    #[must_use]
    pub fn count(&self, indicator: Indicator) -> usize {
        self.0.iter().filter(|&&i| i == indicator).count()
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|i| i.to_emoji()).collect()
    }
}

impl std::str::FromStr for Feedback {
    type Err = String;

    /// Parse feedback from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let indicators: Option<Vec<Indicator>> = s.trim().chars().map(Indicator::from_char).collect();
        match indicators {
            Some(indicators) if !indicators.is_empty() => Ok(Self(indicators)),
            _ => Err(format!("Invalid feedback string: {s}")),
        }
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for indicator in &self.0 {
            let ch = match indicator {
                Indicator::Correct => 'G',
                Indicator::Elsewhere => 'Y',
                Indicator::Absent => '-',
            };
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}
