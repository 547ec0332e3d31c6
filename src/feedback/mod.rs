//! Feedback sources
//!
//! The solver never knows where its scores come from: an oracle that knows the
//! secret, or a human answering prompts. Both sit behind [`FeedbackSource`].

mod interactive;
mod oracle;

pub use interactive::{
    FeedbackError, InteractiveFeedback, QUIT_TOKEN, SCORING_HELP, ScoreRejection, validate_score,
};
pub use oracle::OracleFeedback;

use crate::core::{ScoreCode, Word};
use crate::solver::Facts;

/// What a feedback source answered for one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    /// The guess was scored
    Score(ScoreCode),
    /// The scorer gave up on the game
    Abort,
}

/// Supplies a score for each guess
pub trait FeedbackSource {
    /// Failure talking to the scorer; `Infallible` for sources that cannot fail
    type Error;

    /// Score `guess`, given everything the solver has learned so far
    ///
    /// # Errors
    /// Returns `Self::Error` if the scorer cannot be reached.
    fn score(&mut self, guess: &Word, facts: &Facts) -> Result<Feedback, Self::Error>;
}

impl<F: FeedbackSource + ?Sized> FeedbackSource for &mut F {
    type Error = F::Error;

    fn score(&mut self, guess: &Word, facts: &Facts) -> Result<Feedback, Self::Error> {
        (**self).score(guess, facts)
    }
}
