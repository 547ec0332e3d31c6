//! Wordle Sweep - CLI
//!
//! Plays Wordle with a human scorer, solves a known word, or sweeps the
//! explore/exploit settings over a whole word list.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::io;
use std::path::{Path, PathBuf};
use wordle_sweep::{
    commands::{SweepConfig, run_play, run_sweep, solve_word},
    core::Word,
    output::{print_solve_result, print_sweep_report, write_tables},
    solver::{DEFAULT_CACHE_CAPACITY, DEFAULT_TURNS, SolverConfig},
    wordlists::{DEFAULT_WORDLIST, load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_sweep",
    about = "Letter-frequency Wordle solver with an explore/exploit parameter sweep",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file, one word per line
    #[arg(short = 'w', long, global = true, default_value = DEFAULT_WORDLIST)]
    wordlist: PathBuf,

    /// Exploration is only allowed before this turn
    #[arg(short, long, global = true, default_value_t = 3)]
    cutoff: usize,

    /// Exploration stops once this many letters are known present
    #[arg(short, long, global = true, default_value_t = 3)]
    search: usize,

    /// Turn budget
    #[arg(short, long, global = true, default_value_t = DEFAULT_TURNS)]
    turns: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode: you score each guess (default)
    Play,

    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show the score and candidate counts for every turn
        #[arg(short, long)]
        verbose: bool,
    },

    /// Try every cutoff and search setting against every word in the list
    Sweep {
        /// Directory the CSV tables are written to
        #[arg(short, long, default_value = ".")]
        output: PathBuf,

        /// Run on a single thread
        #[arg(long)]
        sequential: bool,

        /// Candidate pools remembered per thread (0 disables the cache)
        #[arg(long, default_value_t = DEFAULT_CACHE_CAPACITY)]
        cache_size: usize,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let words = load_from_file(&cli.wordlist)?;
    let config = SolverConfig::new(cli.cutoff, cli.search).with_max_turns(cli.turns);

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play_command(&words, config),
        Commands::Solve { word, verbose } => run_solve_command(&words, &word, config, verbose),
        Commands::Sweep {
            output,
            sequential,
            cache_size,
        } => run_sweep_command(&words, cli.turns, &output, sequential, cache_size),
    }
}

fn run_play_command(words: &[Word], config: SolverConfig) -> Result<()> {
    if words.is_empty() {
        bail!("the word list is empty, nothing to guess from");
    }
    run_play(words, config, io::stdin().lock(), io::stdout()).context("interactive game failed")?;
    Ok(())
}

fn run_solve_command(
    words: &[Word],
    word: &str,
    config: SolverConfig,
    verbose: bool,
) -> Result<()> {
    let result =
        solve_word(words, word, config).with_context(|| format!("invalid target {word:?}"))?;
    print_solve_result(&result, verbose);
    Ok(())
}

fn run_sweep_command(
    words: &[Word],
    turns: usize,
    output: &Path,
    sequential: bool,
    cache_size: usize,
) -> Result<()> {
    let mut config = SweepConfig::new(turns)
        .with_progress(true)
        .with_cache_capacity(cache_size);
    if sequential {
        config = config.sequential();
    }

    let report = run_sweep(words, &config);
    print_sweep_report(&report);

    let written = write_tables(output, &report)?;
    println!("\n📁 {}", "Tables written".bright_cyan().bold());
    for path in written {
        println!("  {}", path.display());
    }
    Ok(())
}
