//! Main Wordle solver interface
//!
//! A [`Game`] is the per-game state machine; [`Solver`] runs games to completion.

use super::cache::GuessCache;
use super::facts::Facts;
use super::filter::filter_candidates;
use super::strategy::{ExploreScorer, Scorer};
use crate::core::{ScoreCode, Word};
use crate::feedback::{Feedback, FeedbackSource};

/// Turn budget used when none is given
pub const DEFAULT_TURNS: usize = 6;

/// Tuning for one game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    /// Exploration is only allowed on turns before this one
    pub cutoff: usize,
    /// Exploration stops once this many letters are known present
    pub search: usize,
    /// Hard limit on the number of turns played
    pub max_turns: usize,
}

impl SolverConfig {
    #[must_use]
    pub const fn new(cutoff: usize, search: usize) -> Self {
        Self {
            cutoff,
            search,
            max_turns: DEFAULT_TURNS,
        }
    }

    #[must_use]
    pub const fn with_max_turns(mut self, max_turns: usize) -> Self {
        self.max_turns = max_turns;
        self
    }
}

/// Which heuristic picked a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Explore,
    Exploit,
}

/// Why a game was lost
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LossReason {
    /// The facts ruled out every word in the list
    NoCandidates,
    /// The turn budget ran out
    TurnBudgetExhausted,
}

/// How a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Solved; `turns` counts the guess that would confirm a lone survivor
    Won { turns: usize, word: Word },
    Lost(LossReason),
    /// The scorer walked away
    Aborted,
}

impl Outcome {
    /// Won on `secret` itself within `budget` turns
    ///
    /// A secret outside the word list can leave some other word as the lone
    /// survivor; that win does not count.
    #[must_use]
    pub fn solves(&self, secret: &Word, budget: usize) -> bool {
        matches!(self, Self::Won { turns, word } if word == secret && *turns <= budget)
    }
}

/// One played turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnRecord {
    pub guess: Word,
    pub score: ScoreCode,
    pub phase: Phase,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// State of a single game
///
/// Starts in progress at turn 0 with no facts and the full word list. Once an
/// outcome is reached it never changes.
#[derive(Debug, Clone)]
pub struct Game {
    config: SolverConfig,
    facts: Facts,
    candidates: Vec<Word>,
    turn: usize,
    history: Vec<TurnRecord>,
    outcome: Option<Outcome>,
}

impl Game {
    #[must_use]
    pub fn new(words: &[Word], config: SolverConfig) -> Self {
        Self {
            config,
            facts: Facts::new(),
            candidates: words.to_vec(),
            turn: 0,
            history: Vec::new(),
            outcome: None,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &SolverConfig {
        &self.config
    }

    #[must_use]
    pub const fn facts(&self) -> &Facts {
        &self.facts
    }

    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    /// Turns played so far
    #[must_use]
    pub const fn turn(&self) -> usize {
        self.turn
    }

    #[must_use]
    pub fn history(&self) -> &[TurnRecord] {
        &self.history
    }

    /// `None` while the game is in progress
    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Whether the coming turn explores rather than exploits
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.turn < self.config.cutoff && self.facts.known().len() < self.config.search {
            Phase::Explore
        } else {
            Phase::Exploit
        }
    }

    /// The guess the coming turn will make
    pub fn next_guess(&self, cache: &mut GuessCache) -> Option<Word> {
        match self.phase() {
            Phase::Explore => ExploreScorer::new(self.facts.ignored_letters())
                .select_guess(&self.candidates)
                .copied(),
            Phase::Exploit => cache.exploit_guess(&self.candidates),
        }
    }

    fn finish(&mut self, outcome: Outcome) -> Option<Outcome> {
        log::debug!("game over after {} turns: {outcome:?}", self.turn);
        self.outcome = Some(outcome);
        self.outcome
    }

    /// Play one turn
    ///
    /// Returns the outcome once the game is over, `None` while it continues.
    /// Calling this on a finished game returns the existing outcome.
    ///
    /// # Errors
    /// Propagates the feedback source's error; the game stays in progress.
    pub fn step<F: FeedbackSource>(
        &mut self,
        feedback: &mut F,
        cache: &mut GuessCache,
    ) -> Result<Option<Outcome>, F::Error> {
        if self.outcome.is_some() {
            return Ok(self.outcome);
        }
        if self.turn >= self.config.max_turns {
            return Ok(self.finish(Outcome::Lost(LossReason::TurnBudgetExhausted)));
        }

        let phase = self.phase();
        let Some(guess) = self.next_guess(cache) else {
            return Ok(self.finish(Outcome::Lost(LossReason::NoCandidates)));
        };

        let score = match feedback.score(&guess, &self.facts)? {
            Feedback::Score(score) => score,
            Feedback::Abort => return Ok(self.finish(Outcome::Aborted)),
        };

        let candidates_before = self.candidates.len();
        if score.is_perfect() {
            self.record(guess, score, phase, candidates_before, candidates_before);
            return Ok(self.finish(Outcome::Won {
                turns: self.turn,
                word: guess,
            }));
        }

        self.facts.apply(&guess, score);
        self.candidates =
            filter_candidates(&self.candidates, &self.facts, phase == Phase::Explore);
        log::trace!(
            "turn {}: {guess} scored {score} ({phase:?}), {} -> {} candidates",
            self.turn + 1,
            candidates_before,
            self.candidates.len()
        );
        self.record(guess, score, phase, candidates_before, self.candidates.len());

        let outcome = match *self.candidates.as_slice() {
            [only] => Some(Outcome::Won {
                turns: self.turn + 1,
                word: only,
            }),
            [] => Some(Outcome::Lost(LossReason::NoCandidates)),
            _ if self.turn == self.config.max_turns => {
                Some(Outcome::Lost(LossReason::TurnBudgetExhausted))
            }
            _ => None,
        };
        Ok(outcome.and_then(|outcome| self.finish(outcome)))
    }

    fn record(
        &mut self,
        guess: Word,
        score: ScoreCode,
        phase: Phase,
        candidates_before: usize,
        candidates_after: usize,
    ) {
        self.turn += 1;
        self.history.push(TurnRecord {
            guess,
            score,
            phase,
            candidates_before,
            candidates_after,
        });
    }
}

/// Runs games over one word list with one configuration
#[derive(Debug, Clone, Copy)]
pub struct Solver<'a> {
    words: &'a [Word],
    config: SolverConfig,
}

impl<'a> Solver<'a> {
    #[must_use]
    pub const fn new(words: &'a [Word], config: SolverConfig) -> Self {
        Self { words, config }
    }

    #[must_use]
    pub const fn config(&self) -> &SolverConfig {
        &self.config
    }

    #[must_use]
    pub const fn words(&self) -> &'a [Word] {
        self.words
    }

    /// Start a fresh game
    #[must_use]
    pub fn new_game(&self) -> Game {
        Game::new(self.words, self.config)
    }

    /// Play a whole game, returning the finished game
    ///
    /// # Errors
    /// Propagates the feedback source's error.
    pub fn play<F: FeedbackSource>(
        &self,
        mut feedback: F,
        cache: &mut GuessCache,
    ) -> Result<Game, F::Error> {
        let mut game = self.new_game();
        while game.step(&mut feedback, cache)?.is_none() {}
        Ok(game)
    }

    /// Play a whole game, keeping only how it ended
    ///
    /// # Errors
    /// Propagates the feedback source's error.
    pub fn run<F: FeedbackSource>(
        &self,
        mut feedback: F,
        cache: &mut GuessCache,
    ) -> Result<Outcome, F::Error> {
        let mut game = self.new_game();
        loop {
            if let Some(outcome) = game.step(&mut feedback, cache)? {
                return Ok(outcome);
            }
        }
    }
}
