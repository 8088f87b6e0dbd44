//! Display functions for command results

use super::formatters::{create_progress_bar, format_duration, game_row};
use crate::commands::GameReport;
use crate::core::Word;
use crate::game::{GameResult, SessionAggregate};
use crate::solver::Phase;
use colored::Colorize;

/// Print the trace of a single game
pub fn print_game_report(report: &GameReport, verbose: bool) {
    let result = &report.result;

    println!("\n{}", "─".repeat(60).cyan());
    for turn in &report.turns {
        println!(
            "Row {}: {} {}",
            turn.row + 1,
            turn.word.text().to_uppercase(),
            turn.feedback.to_emoji()
        );

        if verbose {
            let phase = match turn.phase {
                Phase::Start => "opening word",
                Phase::Narrowing => "random pick",
                Phase::Single => "last candidate",
            };
            println!(
                "  {} of {} candidates ({phase})",
                turn.word.text(),
                turn.candidates_before
            );
        }
    }

    if verbose && !report.rejected.is_empty() {
        let rejected: Vec<String> = report.rejected.iter().map(|w| w.text().to_uppercase()).collect();
        println!("\n  Not accepted: {}", rejected.join(", ").bright_black());
    }

    println!();
    if result.is_solved() {
        println!(
            "{}",
            format!(
                "✅ Solved {} in {} of {} rows",
                result.solution().map_or("?", Word::text).to_uppercase(),
                result.rows_used(),
                result.rows_available()
            )
            .green()
            .bold()
        );
    } else if result.is_lost() {
        println!(
            "{}",
            format!("❌ Out of rows after {} guesses", result.rows_used())
                .red()
                .bold()
        );
    } else {
        let reason = report
            .failure
            .as_ref()
            .map_or_else(|| "stopped".to_string(), ToString::to_string);
        println!("{}", format!("⚠️  Game ended early: {reason}").yellow().bold());
    }
    println!("   Time taken: {}", format_duration(result.duration_secs()));
}

/// Print one line per game: game #, outcome, solution, duration, rows used
pub fn print_game_table(games: &[GameResult]) {
    println!(
        "{}",
        format!(
            "{:>4}  {:<9}  {:<8}  {:>7}  {}",
            "#", "OUTCOME", "SOLUTION", "TIME", "ROWS"
        )
        .bright_cyan()
        .bold()
    );
    for (i, result) in games.iter().enumerate() {
        let line = game_row(i + 1, result);
        if result.is_solved() {
            println!("{}", line.green());
        } else if result.is_lost() {
            println!("{}", line.red());
        } else {
            println!("{}", line.yellow());
        }
    }
}

/// Print the results of a session
pub fn print_session_result(session: &SessionAggregate) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SESSION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!();

    print_game_table(session.games());

    let percentage = session.success_percentage();
    let bar = create_progress_bar(f64::from(percentage), 100.0, 30);

    println!("\n📊 {}", "Summary:".bright_cyan().bold());
    println!("   Games played:  {}", session.num_games());
    println!(
        "   Solved:        {}",
        session.num_solved().to_string().green()
    );
    println!("   Lost:          {}", session.num_lost().to_string().red());
    println!(
        "   Success:       [{}] {}",
        bar.green(),
        format!("{percentage}%").bright_yellow().bold()
    );
    println!(
        "   Session time:  {}",
        format_duration(session.duration_secs())
    );
}
