//! Interactive mode
//!
//! The solver guesses, a human scores each guess against the word they have in mind.

use crate::core::Word;
use crate::feedback::{FeedbackError, InteractiveFeedback, SCORING_HELP};
use crate::output::outcome_message;
use crate::solver::{Game, GuessCache, Solver, SolverConfig};
use std::io::{BufRead, Write};

/// Play one game scored by a human
///
/// The help text is shown first, then each guess is prompted for on `writer`
/// with replies read from `reader`. Ends with a line describing the outcome.
///
/// # Errors
/// Returns an error if reading a reply or writing a prompt fails.
pub fn run_play<R: BufRead, W: Write>(
    words: &[Word],
    config: SolverConfig,
    reader: R,
    mut writer: W,
) -> Result<Game, FeedbackError> {
    writeln!(writer, "{SCORING_HELP}")?;

    let mut feedback = InteractiveFeedback::new(reader, writer);
    let game = Solver::new(words, config).play(&mut feedback, &mut GuessCache::default())?;

    let (_, mut writer) = feedback.into_inner();
    if let Some(outcome) = game.outcome() {
        writeln!(writer, "{}", outcome_message(&outcome))?;
    }
    writer.flush()?;
    Ok(game)
}
