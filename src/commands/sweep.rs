//! Parameter sweep over every secret
//!
//! Plays the whole word list against itself for each (cutoff, search) pair, then
//! works out how many extra turns the missed secrets would have needed.

use crate::core::{WORD_LENGTH, Word};
use crate::feedback::OracleFeedback;
use crate::solver::{
    DEFAULT_CACHE_CAPACITY, DEFAULT_TURNS, GuessCache, LossReason, Outcome, Solver, SolverConfig,
};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Largest `search` value swept
pub const MAX_SEARCH: usize = WORD_LENGTH;

/// How a sweep is run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepConfig {
    /// Turn budget a secret must be solved within
    pub max_turns: usize,
    /// Spread pairs over the rayon thread pool
    pub parallel: bool,
    pub show_progress: bool,
    /// Pools remembered per worker's guess cache
    pub cache_capacity: usize,
}

impl SweepConfig {
    #[must_use]
    pub const fn new(max_turns: usize) -> Self {
        Self {
            max_turns,
            parallel: true,
            show_progress: false,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }

    #[must_use]
    pub const fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    #[must_use]
    pub const fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    #[must_use]
    pub const fn with_cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = capacity;
        self
    }
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self::new(DEFAULT_TURNS)
    }
}

/// Why a secret was not solved within the budget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissReason {
    NoCandidates,
    TurnBudget,
    /// Won, but only after the budget ran out
    SolvedLate(usize),
    Aborted,
}

impl MissReason {
    /// Reason for an outcome that does not count as solved
    #[must_use]
    pub const fn from_outcome(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Won { turns, .. } => Self::SolvedLate(turns),
            Outcome::Lost(LossReason::NoCandidates) => Self::NoCandidates,
            Outcome::Lost(LossReason::TurnBudgetExhausted) => Self::TurnBudget,
            Outcome::Aborted => Self::Aborted,
        }
    }
}

/// A secret missed by one pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Miss {
    pub word: Word,
    pub reason: MissReason,
}

/// Smallest budget found by raising the turn limit for missed secrets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnBudget {
    /// Last budget that solved at least one more secret
    pub turns: usize,
    /// Secrets no budget up to the stall solved
    pub unsolved: Vec<Word>,
}

/// Results for one (cutoff, search) pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepStats {
    pub cutoff: usize,
    pub search: usize,
    /// Secrets solved within the budget
    pub successes: usize,
    /// Wins by turn for turns `1..=max_turns`, then one bucket for later wins
    pub histogram: Vec<usize>,
    pub missed: Vec<Miss>,
    pub budget: TurnBudget,
}

impl SweepStats {
    /// Wins reported after the budget
    #[must_use]
    pub fn overflow(&self) -> usize {
        self.histogram.last().copied().unwrap_or(0)
    }

    #[must_use]
    pub fn solved_all(&self) -> bool {
        self.missed.is_empty()
    }

    /// Average turns over secrets solved within the budget
    #[must_use]
    pub fn average_turns(&self) -> f64 {
        let in_budget = &self.histogram[..self.histogram.len().saturating_sub(1)];
        let total: usize = in_budget
            .iter()
            .enumerate()
            .map(|(i, count)| (i + 1) * count)
            .sum();
        if self.successes == 0 {
            0.0
        } else {
            total as f64 / self.successes as f64
        }
    }
}

/// Results for every pair, in (cutoff, search) order
#[derive(Debug, Clone)]
pub struct SweepReport {
    pub max_turns: usize,
    pub word_count: usize,
    pub stats: Vec<SweepStats>,
    pub elapsed: Duration,
}

impl SweepReport {
    /// Pair with the most successes, earliest on ties
    #[must_use]
    pub fn best(&self) -> Option<&SweepStats> {
        self.stats
            .iter()
            .rev()
            .max_by_key(|stats| stats.successes)
    }

    /// Pairs that solved every secret within the budget
    pub fn perfect_pairs(&self) -> impl Iterator<Item = &SweepStats> {
        self.stats.iter().filter(|stats| stats.solved_all())
    }
}

/// Play one secret to the end with oracle feedback
fn play_secret(
    words: &[Word],
    secret: Word,
    config: SolverConfig,
    cache: &mut GuessCache,
) -> Outcome {
    Solver::new(words, config)
        .run(OracleFeedback::new(secret), cache)
        .unwrap_or_else(|never| match never {})
}

/// Raise the budget one turn at a time for the missed secrets
///
/// Stops once every secret is solved or a raise solves nothing new.
pub fn minimal_budget(
    words: &[Word],
    missed: &[Word],
    cutoff: usize,
    search: usize,
    max_turns: usize,
    cache: &mut GuessCache,
) -> TurnBudget {
    let mut pending = missed.to_vec();
    let mut budget = max_turns;
    let mut turns = max_turns;

    while !pending.is_empty() {
        budget += 1;
        let config = SolverConfig::new(cutoff, search).with_max_turns(budget);
        let before = pending.len();
        pending.retain(|&secret| {
            !play_secret(words, secret, config, cache).solves(&secret, budget)
        });

        if pending.len() == before {
            log::debug!(
                "cutoff {cutoff} search {search}: budget {budget} solved nothing, {} left",
                pending.len()
            );
            break;
        }
        turns = budget;
    }

    TurnBudget {
        turns,
        unsolved: pending,
    }
}

/// Play every secret for one pair and find its minimal budget
pub fn evaluate_pair(
    words: &[Word],
    cutoff: usize,
    search: usize,
    max_turns: usize,
    cache: &mut GuessCache,
) -> SweepStats {
    let config = SolverConfig::new(cutoff, search).with_max_turns(max_turns);
    let mut successes = 0;
    let mut histogram = vec![0; max_turns + 1];
    let mut missed = Vec::new();

    for &secret in words {
        let outcome = play_secret(words, secret, config, cache);
        if let Outcome::Won { turns, .. } = outcome {
            histogram[turns.min(max_turns + 1) - 1] += 1;
        }
        if outcome.solves(&secret, max_turns) {
            successes += 1;
        } else {
            missed.push(Miss {
                word: secret,
                reason: MissReason::from_outcome(outcome),
            });
        }
    }

    let missed_words: Vec<Word> = missed.iter().map(|miss| miss.word).collect();
    let budget = minimal_budget(words, &missed_words, cutoff, search, max_turns, cache);

    log::debug!(
        "cutoff {cutoff} search {search}: {successes}/{} solved, budget {}",
        words.len(),
        budget.turns
    );

    SweepStats {
        cutoff,
        search,
        successes,
        histogram,
        missed,
        budget,
    }
}

fn progress_bar(len: usize, show: bool) -> ProgressBar {
    if !show {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new(len as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} pairs ({eta}) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );
    pb
}

/// Sweep cutoff over `0..=max_turns` and search over `0..=5`
#[must_use]
pub fn run_sweep(words: &[Word], config: &SweepConfig) -> SweepReport {
    let max_turns = config.max_turns;
    let pairs: Vec<(usize, usize)> = (0..=max_turns)
        .flat_map(|cutoff| (0..=MAX_SEARCH).map(move |search| (cutoff, search)))
        .collect();

    log::info!(
        "sweeping {} pairs over {} words (budget {max_turns}, {})",
        pairs.len(),
        words.len(),
        if config.parallel { "parallel" } else { "sequential" }
    );

    let pb = progress_bar(pairs.len(), config.show_progress);
    let start = Instant::now();

    let evaluate = |cache: &mut GuessCache, &(cutoff, search): &(usize, usize)| {
        let stats = evaluate_pair(words, cutoff, search, max_turns, cache);
        pb.set_message(format!("cutoff {cutoff} search {search}"));
        pb.inc(1);
        stats
    };

    let stats: Vec<SweepStats> = if config.parallel {
        pairs
            .par_iter()
            .map_init(|| GuessCache::new(config.cache_capacity), evaluate)
            .collect()
    } else {
        let mut cache = GuessCache::new(config.cache_capacity);
        pairs.iter().map(|pair| evaluate(&mut cache, pair)).collect()
    };

    pb.finish_with_message("done");
    let elapsed = start.elapsed();
    log::info!("sweep finished in {:.2}s", elapsed.as_secs_f64());

    SweepReport {
        max_turns,
        word_count: words.len(),
        stats,
        elapsed,
    }
}
