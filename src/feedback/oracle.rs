//! Scores computed from a known secret

use super::{Feedback, FeedbackSource};
use crate::core::{ScoreCode, Word};
use crate::solver::Facts;
use std::convert::Infallible;

/// Scores every guess exactly against a fixed secret
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OracleFeedback {
    secret: Word,
}

impl OracleFeedback {
    #[must_use]
    pub const fn new(secret: Word) -> Self {
        Self { secret }
    }

    #[must_use]
    pub const fn secret(&self) -> Word {
        self.secret
    }
}

impl FeedbackSource for OracleFeedback {
    type Error = Infallible;

    fn score(&mut self, guess: &Word, _facts: &Facts) -> Result<Feedback, Infallible> {
        Ok(Feedback::Score(ScoreCode::against(guess, &self.secret)))
    }
}
