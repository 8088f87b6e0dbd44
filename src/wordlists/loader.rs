//! Word list loading utilities
//!
//! Lists are whitespace-separated: one word per line and several words per line both work.

use crate::core::Word;
use log::warn;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// Entries that are not valid words are skipped with a warning.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_bot::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words-5.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path.as_ref())?;
    Ok(parse_words(&content))
}

fn parse_words(content: &str) -> Vec<Word> {
    content
        .split_whitespace()
        .filter_map(|token| match Word::new(token) {
            Ok(word) => Some(word),
            Err(e) => {
                warn!("skipping '{token}': {e}");
                None
            }
        })
        .collect()
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_bot::wordlists::loader::words_from_slice;
/// use wordle_bot::wordlists::WORDS_5;
///
/// let words = words_from_slice(WORDS_5);
/// assert_eq!(words.len(), WORDS_5.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

/// Keep only the words of exactly `width` letters, dropping duplicates
#[must_use]
pub fn words_of_width(words: Vec<Word>, width: usize) -> Vec<Word> {
    let mut seen = rustc_hash::FxHashSet::default();
    words
        .into_iter()
        .filter(|w| w.width() == width && seen.insert(w.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["crane", "slate", "irate"]);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[2].text(), "irate");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["crane", "", "ab3de", "slate"]);
        assert_eq!(words.len(), 2);
    }

    #[test]
    fn parse_accepts_spaces_and_newlines() {
        let words = parse_words("crane slate\n  trace\n\nREACT ca-t\n");
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["crane", "slate", "trace", "react"]);
    }

    #[test]
    fn width_filter_drops_other_lengths_and_repeats() {
        let words = words_from_slice(&["crane", "cat", "crane", "planet", "slate"]);
        let texts: Vec<String> = words_of_width(words, 5)
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(texts, vec!["crane", "slate"]);
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load_from_file("does/not/exist.txt").is_err());
    }
}
