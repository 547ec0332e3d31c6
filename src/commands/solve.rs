//! Word solving command
//!
//! Plays a known target with exact scoring and keeps the per-turn trace.

use crate::core::{Word, WordError};
use crate::feedback::OracleFeedback;
use crate::solver::{GuessCache, Outcome, Solver, SolverConfig, TurnRecord};

/// Result of solving a word
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub target: Word,
    pub config: SolverConfig,
    pub outcome: Outcome,
    pub turns: Vec<TurnRecord>,
}

impl SolveResult {
    /// The target itself was found within the turn budget
    #[must_use]
    pub fn success(&self) -> bool {
        self.outcome.solves(&self.target, self.config.max_turns)
    }
}

/// Solve `target` against `words`
///
/// A target missing from the list is still played. Its scores may leave some other
/// word as the lone survivor, which ends the game as a win on that word; such a
/// result is not a success.
///
/// # Errors
/// Returns an error if `target` is not a valid word.
pub fn solve_word(
    words: &[Word],
    target: &str,
    config: SolverConfig,
) -> Result<SolveResult, WordError> {
    let target = Word::new(target)?;
    if !words.contains(&target) {
        log::warn!("{target} is not in the word list");
    }

    let game = Solver::new(words, config)
        .play(OracleFeedback::new(target), &mut GuessCache::default())
        .unwrap_or_else(|never| match never {});

    Ok(SolveResult {
        target,
        config,
        outcome: game.outcome().unwrap_or(Outcome::Aborted),
        turns: game.history().to_vec(),
    })
}
