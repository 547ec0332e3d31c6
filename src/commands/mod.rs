//! Command implementations

pub mod play;
pub mod solve;
pub mod sweep;

pub use play::run_play;
pub use solve::{SolveResult, solve_word};
pub use sweep::{
    MAX_SEARCH, Miss, MissReason, SweepConfig, SweepReport, SweepStats, TurnBudget,
    evaluate_pair, minimal_budget, run_sweep,
};
