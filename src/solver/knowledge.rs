//! Folding one attempt's feedback into the constraint store
//!
//! Rules, per locked-in cell:
//! - correct: the letter becomes the column's home
//! - elsewhere: the letter is never in this column, and becomes priority for every other column
//!   that has not ruled it out
//! - absent: the letter is blacklisted globally, unless some column already has it as home (the
//!   word may hold one copy and not another)

use super::SolverError;
use super::constraints::ConstraintStore;
use crate::core::{Indicator, Word};
use crate::game::Cell;
use log::debug;
use rustc_hash::FxHashSet;

/// Apply a locked-in row to the store, then retire the attempted word
///
/// Cells are processed left to right. The attempted word is removed from `pool` and added to
/// `used_words` afterwards.
///
/// # Errors
/// - `SolverError::FeedbackLetterMismatch` if a cell's letter differs from the attempted word's
///   letter in that column
/// - `SolverError::InconsistentHomeAssignment` if a correct cell names a different letter than
///   the column's existing home
///
/// The store is left untouched on error.
pub fn apply_feedback(
    store: &mut ConstraintStore,
    pool: &mut Vec<Word>,
    used_words: &mut FxHashSet<Word>,
    word: &Word,
    row: &[Cell],
) -> Result<(), SolverError> {
    check_letters(word, row)?;
    check_homes(store, row)?;

    debug!("committing '{word}' to letter memory");
    for cell in row {
        let (Some(letter), Some(indicator)) = (cell.letter(), cell.indicator()) else {
            continue;
        };
        let column = cell.column();

        match indicator {
            Indicator::Correct => {
                debug!("'{}' is correct, home of column {column}", letter as char);
                store.columns[column].home = Some(letter);
            }
            Indicator::Elsewhere => {
                debug!(
                    "'{}' is elsewhere, never in column {column}",
                    letter as char
                );
                let here = &mut store.columns[column];
                here.never.insert(letter);
                here.priority.remove(letter);

                for other in &mut store.columns {
                    if !other.never.contains(letter) {
                        other.priority.insert(letter);
                    }
                }
            }
            Indicator::Absent => {
                if !store.is_home_anywhere(letter) && store.absent.insert(letter) {
                    debug!("'{}' is absent from the word", letter as char);
                }
            }
        }
    }

    pool.retain(|w| w != word);
    used_words.insert(word.clone());
    Ok(())
}

fn check_letters(word: &Word, row: &[Cell]) -> Result<(), SolverError> {
    for cell in row {
        let Some(found) = cell.letter() else {
            continue;
        };
        let column = cell.column();
        let expected = word.chars().get(column).copied();
        if expected != Some(found) {
            return Err(SolverError::FeedbackLetterMismatch {
                column,
                expected: expected.map_or('?', char::from),
                found: char::from(found),
            });
        }
    }
    Ok(())
}

fn check_homes(store: &ConstraintStore, row: &[Cell]) -> Result<(), SolverError> {
    for cell in row {
        if cell.indicator() != Some(Indicator::Correct) {
            continue;
        }
        if let (Some(incoming), Some(existing)) = (cell.letter(), store.home(cell.column()))
            && incoming != existing
        {
            return Err(SolverError::InconsistentHomeAssignment {
                column: cell.column(),
                existing: existing as char,
                incoming: incoming as char,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Grid, RowFeedback};

    /// Lock `word` with `feedback` into row `row` of a scratch grid and return that row
    fn locked_row(row: usize, word: &str, feedback: &str) -> (Word, Vec<Cell>) {
        let word = Word::new(word).unwrap();
        let fb = RowFeedback::scored(row, &word, &feedback.parse().unwrap());
        let mut grid = Grid::new(row + 1, word.width());
        for (cell, cell_fb) in grid.row_mut(row).iter_mut().zip(&fb.cells) {
            cell.fill(cell_fb);
        }
        (word, grid.row(row).to_vec())
    }

    fn apply(store: &mut ConstraintStore, word: &str, feedback: &str) -> Result<(), SolverError> {
        let (word, cells) = locked_row(0, word, feedback);
        let mut pool = vec![word.clone()];
        let mut used = FxHashSet::default();
        apply_feedback(store, &mut pool, &mut used, &word, &cells)
    }

    fn assert_disjoint(store: &ConstraintStore) {
        for (i, column) in store.columns().iter().enumerate() {
            assert!(
                column.priority().difference(column.never()) == column.priority(),
                "column {i}: priority {} overlaps never {}",
                column.priority(),
                column.never()
            );
        }
    }

    #[test]
    fn cell_letter_must_match_word() {
        let mut store = ConstraintStore::new(5);
        let (_, cells) = locked_row(0, "zamed", "G----");
        let word = Word::new("tamed").unwrap();
        let mut pool = vec![word.clone()];
        let mut used = FxHashSet::default();

        assert_eq!(
            apply_feedback(&mut store, &mut pool, &mut used, &word, &cells),
            Err(SolverError::FeedbackLetterMismatch {
                column: 0,
                expected: 't',
                found: 'z',
            })
        );
        assert_eq!(store.home(0), None);
        assert!(store.global_absent().is_empty());
        assert_eq!(pool, vec![word]);
        assert!(used.is_empty());
    }

    #[test]
    fn place_feedback_fills_absent_and_never() {
        let mut store = ConstraintStore::new(5);
        apply(&mut store, "place", "--Y-Y").unwrap();

        for letter in [b'p', b'l', b'c'] {
            assert!(store.global_absent().contains(letter));
        }
        assert!(store.never(2).contains(b'a'));
        assert!(store.never(4).contains(b'e'));
        assert_disjoint(&store);
    }

    #[test]
    fn elsewhere_becomes_priority_for_other_columns() {
        let mut store = ConstraintStore::new(5);
        apply(&mut store, "place", "--Y-Y").unwrap();

        for column in [0, 1, 3, 4] {
            assert!(store.priority(column).contains(b'a'));
        }
        assert!(!store.priority(2).contains(b'a'));
        for column in [0, 1, 2, 3] {
            assert!(store.priority(column).contains(b'e'));
        }
        assert!(!store.priority(4).contains(b'e'));
    }

    #[test]
    fn elsewhere_removes_existing_priority_for_its_column() {
        let mut store = ConstraintStore::new(5);
        apply(&mut store, "tamed", "--YYY").unwrap();
        assert!(store.priority(0).contains(b'm'));

        apply(&mut store, "medic", "YGYG-").unwrap();
        assert!(!store.priority(0).contains(b'm'));
        assert!(store.never(0).contains(b'm'));
        assert!(!store.priority(2).contains(b'd'));
        assert!(store.never(2).contains(b'd'));
        // column 4 ruled out 'd' first, so it never becomes priority there
        assert!(!store.priority(4).contains(b'd'));
        assert_disjoint(&store);
    }

    #[test]
    fn correct_sets_home_and_is_idempotent() {
        let mut store = ConstraintStore::new(5);
        apply(&mut store, "medic", "-G-G-").unwrap();
        apply(&mut store, "devil", "GG-G-").unwrap();
        assert_eq!(store.home(0), Some(b'd'));
        assert_eq!(store.home(1), Some(b'e'));
        assert_eq!(store.home(3), Some(b'i'));
    }

    #[test]
    fn conflicting_home_is_rejected_without_changes() {
        let mut store = ConstraintStore::new(5);
        apply(&mut store, "devil", "G----").unwrap();
        let before = store.clone();

        let err = apply(&mut store, "tamed", "GG---").unwrap_err();
        assert_eq!(
            err,
            SolverError::InconsistentHomeAssignment {
                column: 0,
                existing: 'd',
                incoming: 't',
            }
        );
        assert_eq!(store, before);
    }

    #[test]
    fn absent_letter_already_home_is_not_blacklisted() {
        let mut store = ConstraintStore::new(5);
        apply(&mut store, "eerie", "G----").unwrap();
        // the first 'e' became home before the later copies were read
        assert!(!store.global_absent().contains(b'e'));
        assert!(store.global_absent().contains(b'r'));
        assert!(store.global_absent().contains(b'i'));
    }

    #[test]
    fn absent_before_home_in_same_row_is_blacklisted() {
        // cells are processed left to right, so an absent copy seen before its correct twin
        // still lands in the global absent set
        let mut store = ConstraintStore::new(5);
        apply(&mut store, "added", "-Y-G-").unwrap();
        assert!(store.global_absent().contains(b'd'));
        assert_eq!(store.home(3), Some(b'e'));
    }

    #[test]
    fn absent_letter_that_is_only_priority_is_still_blacklisted() {
        let mut store = ConstraintStore::new(5);
        apply(&mut store, "speed", "--Y--").unwrap();
        assert!(store.global_absent().contains(b'e'));
        assert!(store.priority(0).contains(b'e'));
    }

    #[test]
    fn every_absent_non_home_letter_ends_up_absent() {
        let mut store = ConstraintStore::new(5);
        let rows = [("crane", "-G--Y"), ("brute", "-GY-G"), ("fruit", "-GGY-")];
        for (word, feedback) in rows {
            apply(&mut store, word, feedback).unwrap();
            let (_, cells) = locked_row(0, word, feedback);
            for cell in &cells {
                let letter = cell.letter().unwrap();
                if cell.indicator() == Some(Indicator::Absent) && !store.is_home_anywhere(letter) {
                    assert!(store.global_absent().contains(letter));
                }
            }
            assert_disjoint(&store);
        }
    }

    #[test]
    fn attempted_word_moves_from_pool_to_used() {
        let mut store = ConstraintStore::new(5);
        let (word, cells) = locked_row(0, "tamed", "--YYY");
        let mut pool = vec![Word::new("denim").unwrap(), word.clone()];
        let mut used = FxHashSet::default();

        apply_feedback(&mut store, &mut pool, &mut used, &word, &cells).unwrap();

        assert_eq!(pool, vec![Word::new("denim").unwrap()]);
        assert!(used.contains(&word));
    }

    #[test]
    fn cells_without_indicator_are_ignored() {
        let mut store = ConstraintStore::new(5);
        let grid = Grid::new(1, 5);
        let word = Word::new("blank").unwrap();
        let mut pool = Vec::new();
        let mut used = FxHashSet::default();
        apply_feedback(&mut store, &mut pool, &mut used, &word, grid.row(0)).unwrap();
        assert_eq!(store, ConstraintStore::new(5));
    }
}
