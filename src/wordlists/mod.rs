//! Word lists for the elimination engine
//!
//! Provides embedded five-letter lists compiled into the binary, plus loaders for custom lists.

mod embedded;
pub mod loader;

pub use embedded::{STARTING_WORDS_5, STARTING_WORDS_5_COUNT, WORDS_5, WORDS_5_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS_5.len(), WORDS_5_COUNT);
        assert_eq!(STARTING_WORDS_5.len(), STARTING_WORDS_5_COUNT);
    }

    #[test]
    fn words_are_valid() {
        for &word in WORDS_5.iter().chain(STARTING_WORDS_5) {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn starting_words_are_candidates() {
        let all: std::collections::HashSet<_> = WORDS_5.iter().collect();
        for answer in STARTING_WORDS_5 {
            assert!(all.contains(answer), "Starting word '{answer}' not in word list");
        }
    }
}
