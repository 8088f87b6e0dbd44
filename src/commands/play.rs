//! Playing games against a referee
//!
//! [`play_game`] drives one puzzle from the first guess to the end. [`run_session`] plays
//! simulated games back to back until the session controller says stop.

use crate::config::SessionConfig;
use crate::core::{Feedback, Word};
use crate::game::{GameResult, GameState, SessionAggregate, SessionController};
use crate::referee::{Referee, SimulatedPuzzle, Verdict};
use crate::solver::{Phase, SolverError};
use anyhow::{Context, Result, ensure};
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};
use rand::Rng;
use rand::seq::IndexedRandom;

/// One scored row of a game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub row: usize,
    pub word: Word,
    pub phase: Phase,
    pub feedback: Feedback,
    /// Candidates in play when the word was chosen
    pub candidates_before: usize,
}

/// Everything that happened in one game
#[derive(Debug, Clone)]
pub struct GameReport {
    pub result: GameResult,
    pub turns: Vec<Turn>,
    /// Words the referee refused, in the order they were tried
    pub rejected: Vec<Word>,
    /// Set when the engine gave up before the game was solved or lost
    pub failure: Option<SolverError>,
}

/// Play one game to the end
///
/// Rejected words are recorded and another guess is drawn for the same row. Engine errors end
/// the game early; the result is then neither solved nor lost.
///
/// # Errors
///
/// Returns an error if the referee cannot produce feedback.
pub fn play_game<F, R>(mut state: GameState, referee: &mut F, rng: &mut R) -> Result<GameReport>
where
    F: Referee + ?Sized,
    R: Rng + ?Sized,
{
    let mut turns = Vec::new();
    let mut rejected = Vec::new();
    let mut failure = None;

    while !state.is_over() {
        let Some(row) = state.next_row() else {
            break;
        };

        let (phase, word) = match state.next_guess(rng) {
            Ok(choice) => choice,
            Err(e) => {
                warn!("giving up on row {row}: {e}");
                failure = Some(e);
                break;
            }
        };
        let candidates_before = state.pool().len();

        let verdict = referee
            .submit(row, &word)
            .with_context(|| format!("failed to submit '{word}' on row {row}"))?;

        match verdict {
            Verdict::Rejected => {
                state.record_rejected_guess(&word);
                rejected.push(word);
            }
            Verdict::Abandoned => {
                info!("game abandoned on row {row}");
                break;
            }
            Verdict::Scored(row_feedback) => {
                if let Err(e) = state.record_attempt(&word, &row_feedback) {
                    warn!("feedback for '{word}' rejected: {e}");
                    failure = Some(e);
                    break;
                }
                let feedback =
                    Feedback::new(row_feedback.cells.iter().filter_map(|c| c.indicator).collect());
                turns.push(Turn {
                    row,
                    word,
                    phase,
                    feedback,
                    candidates_before,
                });
            }
        }
    }

    Ok(GameReport {
        result: state.finalize(),
        turns,
        rejected,
        failure,
    })
}

/// Play simulated games until the session is done
///
/// Each game draws a hidden answer from `answers` and guesses from `words`, opening with one of
/// `starting_words`.
///
/// # Errors
///
/// Returns an error if there are no answers, if a list does not match the configured width, or
/// if the progress bar template is invalid.
pub fn run_session<R: Rng + ?Sized>(
    config: &SessionConfig,
    words: &[Word],
    starting_words: &[Word],
    answers: &[Word],
    rng: &mut R,
) -> Result<SessionAggregate> {
    ensure!(!answers.is_empty(), "no answer words to play");

    let pb = if config.show_progress {
        ProgressBar::new(config.games as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
            .progress_chars("█▓▒░"),
    );

    let mut aggregate = SessionAggregate::new();
    let mut controller = SessionController::new(config.games);
    let mut game_number = 0;

    while controller.should_restart {
        game_number += 1;
        let answer = answers.choose(rng).context("no answer words to play")?;
        info!("game {game_number}: hidden answer '{answer}'");

        let state = GameState::new(
            config.game.rows,
            config.game.width,
            words.to_vec(),
            starting_words.to_vec(),
        )
        .context("word lists do not fit the puzzle")?;
        let mut puzzle = SimulatedPuzzle::new(answer.clone(), words.iter().cloned());
        let report = play_game(state, &mut puzzle, rng)?;
        if let Some(err) = &report.failure {
            warn!("game {game_number} stopped the session: {err}");
        }

        pb.inc(1);
        pb.set_message(format!(
            "{} solved, {} lost",
            aggregate.num_solved() + usize::from(report.result.is_solved()),
            aggregate.num_lost() + usize::from(report.result.is_lost())
        ));

        controller = controller.handle_end_of_game(&mut aggregate, report.result);
    }

    pb.finish_and_clear();
    Ok(aggregate.finalize())
}
