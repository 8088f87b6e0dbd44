//! Candidate pool narrowing

use super::patterns::WordPattern;
use crate::core::{LetterSet, Word};
use log::debug;
use rustc_hash::FxHashSet;

/// Narrow `pool` to the words consistent with both patterns
///
/// Steps, in order:
/// 1. keep words matching `exclusion`
/// 2. keep words matching `inclusion`
/// 3. drop words in `used_words`, then, if more than one word matched both patterns, keep only
///    words containing every letter of `priority`
///
/// The survivor count for saturation is taken before used words are dropped.
///
/// Pool order is preserved.
#[must_use]
pub fn narrow(
    pool: &[Word],
    exclusion: &WordPattern,
    inclusion: &WordPattern,
    used_words: &FxHashSet<Word>,
    priority: LetterSet,
) -> Vec<Word> {
    let mut survivors: Vec<Word> = pool
        .iter()
        .filter(|w| exclusion.matches(w))
        .cloned()
        .collect();
    debug!("exclusion {exclusion}: {} of {} left", survivors.len(), pool.len());

    survivors.retain(|w| inclusion.matches(w));
    debug!("inclusion {inclusion}: {} left", survivors.len());

    let multiple = survivors.len() > 1;
    survivors.retain(|w| !used_words.contains(w));

    if multiple && !priority.is_empty() {
        survivors.retain(|w| priority.iter().all(|letter| w.has_letter(letter)));
        debug!("priority letters '{priority}': {} left", survivors.len());
    }

    survivors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::patterns::SlotMatch;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    fn set(s: &str) -> LetterSet {
        s.bytes().collect()
    }

    #[test]
    fn open_patterns_keep_everything_in_order() {
        let pool = words(&["crane", "slate", "trace"]);
        let any = WordPattern::any(5);
        let result = narrow(&pool, &any, &any, &FxHashSet::default(), LetterSet::new());
        assert_eq!(result, pool);
    }

    #[test]
    fn both_patterns_apply() {
        let pool = words(&["crane", "slate", "trace", "brine"]);
        let exclusion = WordPattern::new(vec![
            SlotMatch::NoneOf(set("s")),
            SlotMatch::Any,
            SlotMatch::Any,
            SlotMatch::Any,
            SlotMatch::Any,
        ]);
        let inclusion = WordPattern::new(vec![
            SlotMatch::Any,
            SlotMatch::Exactly(b'r'),
            SlotMatch::Any,
            SlotMatch::Any,
            SlotMatch::Exactly(b'e'),
        ]);

        let result = narrow(&pool, &exclusion, &inclusion, &FxHashSet::default(), LetterSet::new());
        assert_eq!(result, words(&["crane", "trace", "brine"]));
    }

    #[test]
    fn used_words_are_dropped() {
        let pool = words(&["crane", "slate"]);
        let used: FxHashSet<Word> = words(&["crane"]).into_iter().collect();
        let any = WordPattern::any(5);
        assert_eq!(narrow(&pool, &any, &any, &used, LetterSet::new()), words(&["slate"]));
    }

    #[test]
    fn used_sole_survivor_is_dropped() {
        let pool = words(&["crane"]);
        let used: FxHashSet<Word> = pool.iter().cloned().collect();
        let any = WordPattern::any(5);
        assert!(narrow(&pool, &any, &any, &used, set("c")).is_empty());
    }

    #[test]
    fn priority_saturation_needs_every_letter() {
        let pool = words(&["crane", "slate", "trace", "react"]);
        let any = WordPattern::any(5);
        let result = narrow(&pool, &any, &any, &FxHashSet::default(), set("ct"));
        assert_eq!(result, words(&["trace", "react"]));
    }

    #[test]
    fn saturation_counts_used_words() {
        // crane was rejected but still sits in the pool; slate lacks the known 'r'
        let pool = words(&["crane", "slate"]);
        let used: FxHashSet<Word> = words(&["crane"]).into_iter().collect();
        let any = WordPattern::any(5);
        assert!(narrow(&pool, &any, &any, &used, set("r")).is_empty());
    }

    #[test]
    fn saturation_after_used_drop_keeps_matching_word() {
        let pool = words(&["crane", "trace"]);
        let used: FxHashSet<Word> = words(&["crane"]).into_iter().collect();
        let any = WordPattern::any(5);
        assert_eq!(narrow(&pool, &any, &any, &used, set("r")), words(&["trace"]));
    }

    #[test]
    fn priority_saturation_skipped_for_single_survivor() {
        let pool = words(&["slate"]);
        let any = WordPattern::any(5);
        let result = narrow(&pool, &any, &any, &FxHashSet::default(), set("qz"));
        assert_eq!(result, pool);
    }

    #[test]
    fn narrowing_twice_changes_nothing() {
        let pool = words(&["crane", "slate", "trace", "react", "brine"]);
        let exclusion = WordPattern::new(vec![SlotMatch::NoneOf(set("s")); 5]);
        let inclusion = WordPattern::any(5);
        let used: FxHashSet<Word> = words(&["react"]).into_iter().collect();

        let once = narrow(&pool, &exclusion, &inclusion, &used, set("r"));
        let twice = narrow(&once, &exclusion, &inclusion, &used, set("r"));
        assert_eq!(once, words(&["crane", "trace", "brine"]));
        assert_eq!(once, twice);
    }

    #[test]
    fn width_mismatch_is_dropped() {
        let pool = words(&["cat", "crane"]);
        let any = WordPattern::any(5);
        assert_eq!(
            narrow(&pool, &any, &any, &FxHashSet::default(), LetterSet::new()),
            words(&["crane"])
        );
    }
}
