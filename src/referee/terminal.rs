//! A human reads the real puzzle and types the feedback back in

use super::{Referee, Verdict};
use crate::core::{Feedback, Word};
use crate::game::RowFeedback;
use anyhow::Context;
use colored::Colorize;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// Prompts for feedback on a line-based terminal
pub struct TerminalReferee<R, W> {
    input: R,
    output: W,
}

impl TerminalReferee<StdinLock<'static>, Stdout> {
    /// Read from stdin, write to stdout
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalReferee<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn read_line(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        write!(self.output, "{prompt}: ")?;
        self.output.flush().context("failed to flush prompt")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read feedback")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

impl<R: BufRead, W: Write> Referee for TerminalReferee<R, W> {
    fn submit(&mut self, row: usize, word: &Word) -> anyhow::Result<Verdict> {
        writeln!(
            self.output,
            "\nRow {}: enter {}",
            row + 1,
            word.text().to_uppercase().bright_white().bold()
        )?;

        loop {
            let Some(input) = self.read_line("Feedback (G/Y/-, 'win', 'x' if not accepted)")? else {
                return Ok(Verdict::Abandoned);
            };

            match input.to_lowercase().as_str() {
                "quit" | "q" | "exit" => return Ok(Verdict::Abandoned),
                "x" | "reject" | "rejected" => return Ok(Verdict::Rejected),
                "win" | "correct" | "solved" => {
                    let feedback = Feedback::perfect(word.width());
                    return Ok(Verdict::Scored(RowFeedback::scored(row, word, &feedback)));
                }
                _ => {}
            }

            match input.parse::<Feedback>() {
                Ok(feedback) if feedback.width() == word.width() => {
                    return Ok(Verdict::Scored(RowFeedback::scored(row, word, &feedback)));
                }
                Ok(feedback) => writeln!(
                    self.output,
                    "{} expected {} marks, got {}",
                    "✗".red(),
                    word.width(),
                    feedback.width()
                )?,
                Err(_) => writeln!(
                    self.output,
                    "{} use G/Y/- or 🟩🟨⬜, one mark per letter",
                    "✗".red()
                )?,
            }
        }
    }
}
