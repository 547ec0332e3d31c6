//! Wordle solving algorithms
//!
//! Facts accumulate from scores, filtering narrows the candidate pool, and the
//! engine alternates between the explore and exploit heuristics.

pub mod cache;
mod engine;
mod facts;
mod filter;
pub mod strategy;

pub use cache::{DEFAULT_CACHE_CAPACITY, GuessCache};
pub use engine::{
    DEFAULT_TURNS, Game, LossReason, Outcome, Phase, Solver, SolverConfig, TurnRecord,
};
pub use facts::Facts;
pub use filter::{filter_candidates, is_consistent};
pub use strategy::{ExploitScorer, ExploreScorer, FrequencyTable, Scorer};
