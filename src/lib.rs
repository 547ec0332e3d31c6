//! Wordle Sweep
//!
//! A Wordle solver driven by letter-frequency heuristics. Early turns may explore
//! (favouring words that cover unseen letters) before switching to exploitation
//! (favouring words that look like the remaining candidates). A sweep harness
//! measures every (cutoff, search) setting of that switch over a whole word list.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_sweep::core::Word;
//! use wordle_sweep::feedback::OracleFeedback;
//! use wordle_sweep::solver::{GuessCache, Outcome, Solver, SolverConfig};
//!
//! let words: Vec<Word> = ["words", "wrong", "solid", "abide"]
//!     .iter()
//!     .map(|w| Word::new(w).unwrap())
//!     .collect();
//!
//! let solver = Solver::new(&words, SolverConfig::new(3, 3));
//! let secret = OracleFeedback::new(words[1]);
//! let outcome = solver
//!     .run(secret, &mut GuessCache::default())
//!     .unwrap_or_else(|never| match never {});
//!
//! assert!(matches!(outcome, Outcome::Won { .. }));
//! ```

// Core domain types
pub mod core;

// Solving algorithms
pub mod solver;

// Where scores come from
pub mod feedback;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output and CSV tables
pub mod output;
