//! Wordle Bot - CLI
//!
//! Plays word puzzles by accumulating letter knowledge and eliminating candidates.

use anyhow::{Context, Result, bail, ensure};
use clap::{ArgAction, Parser, Subcommand};
use log::{LevelFilter, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::PathBuf;
use wordle_bot::{
    commands::{run_session, run_simple, solve_word},
    config::{DEFAULT_GAMES, DEFAULT_ROWS, DEFAULT_WIDTH, GameConfig, SessionConfig},
    core::Word,
    output::{print_game_report, print_session_result},
    wordlists::{
        STARTING_WORDS_5, WORDS_5,
        loader::{load_from_file, words_from_slice, words_of_width},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_bot",
    about = "Word puzzle bot that narrows candidates from accumulated letter knowledge",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Rows in the grid
    #[arg(short, long, global = true, default_value_t = DEFAULT_ROWS)]
    rows: usize,

    /// Letters per row
    #[arg(short, long, global = true, default_value_t = DEFAULT_WIDTH)]
    letters: usize,

    /// Candidate word list (whitespace-separated); built in for 5 letters
    #[arg(short, long, global = true)]
    words: Option<PathBuf>,

    /// Opening word list; defaults to the built-in openers, or the candidate list
    #[arg(short, long, global = true)]
    starting_words: Option<PathBuf>,

    /// Seed for the random choices, to replay a run
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Log more (-d info, -dd debug); RUST_LOG overrides
    #[arg(short, long, global = true, action = ArgAction::Count)]
    debug: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a session of simulated games (default)
    Play {
        /// Number of games in the session
        #[arg(short, long, default_value_t = DEFAULT_GAMES)]
        games: usize,
    },

    /// Simple CLI mode (suggests words, you type in the feedback)
    Simple,

    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show candidate counts for each row
        #[arg(short, long)]
        verbose: bool,
    },
}

fn init_logging(debug: u8) {
    let level = match debug {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

/// Load candidate and opening words for the configured width
///
/// Returns (`words`, `starting_words`)
fn load_wordlists(cli: &Cli) -> Result<(Vec<Word>, Vec<Word>)> {
    let words = match &cli.words {
        Some(path) => load_from_file(path)
            .with_context(|| format!("failed to read word list {}", path.display()))?,
        None if cli.letters == DEFAULT_WIDTH => words_from_slice(WORDS_5),
        None => bail!(
            "no built-in word list for {} letters, pass one with --words",
            cli.letters
        ),
    };
    let words = words_of_width(words, cli.letters);
    ensure!(!words.is_empty(), "no {}-letter words in the word list", cli.letters);

    let starting_words = match &cli.starting_words {
        Some(path) => load_from_file(path)
            .with_context(|| format!("failed to read starting words {}", path.display()))?,
        None if cli.words.is_none() => words_from_slice(STARTING_WORDS_5),
        None => words.clone(),
    };
    let starting_words = words_of_width(starting_words, cli.letters);
    ensure!(
        !starting_words.is_empty(),
        "no {}-letter starting words",
        cli.letters
    );

    info!(
        "loaded {} words and {} starting words",
        words.len(),
        starting_words.len()
    );
    Ok((words, starting_words))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let (words, starting_words) = load_wordlists(&cli)?;
    let game = GameConfig::new(cli.rows, cli.letters);
    ensure!(game.rows > 0, "the grid needs at least one row");

    let seed = cli.seed.unwrap_or_else(|| rand::rng().random());
    info!("seed {seed}");
    let mut rng = StdRng::seed_from_u64(seed);

    let command = cli.command.unwrap_or(Commands::Play {
        games: DEFAULT_GAMES,
    });

    match command {
        Commands::Play { games } => {
            let config = SessionConfig {
                game,
                games,
                show_progress: true,
            };
            println!("Playing {games} games (seed {seed})...");
            let session = run_session(&config, &words, &starting_words, &words, &mut rng)?;
            print_session_result(&session);
        }
        Commands::Simple => {
            let report = run_simple(&game, &words, &starting_words, &mut rng)?;
            print_game_report(&report, true);
        }
        Commands::Solve { word, verbose } => {
            let report = solve_word(&game, &word, &words, &starting_words, &mut rng)?;
            println!("Solving {} (seed {seed})", word.to_uppercase());
            print_game_report(&report, verbose);
        }
    }

    Ok(())
}
