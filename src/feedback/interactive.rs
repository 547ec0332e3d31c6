//! Scores typed in by a human
//!
//! Replies are checked against the facts already established, so an obvious typo
//! cannot silently wipe out the candidate list.

use super::{Feedback, FeedbackSource};
use crate::core::{Mark, ScoreCode, ScoreParseError, Word};
use crate::solver::Facts;
use std::io::{self, BufRead, Write};
use thiserror::Error;

/// Reply that abandons the game
pub const QUIT_TOKEN: &str = "q";

/// How to score a guess
pub const SCORING_HELP: &str = "\
Each turn the program will guess a word, you must then give it the feedback so it can make a best next guess

When scoring a word use the following:
 - If a letter is incorrect mark it 0
 - If a letter is in the wrong place, mark it 1
 - If a letter is in the correct place, mark it 2

If the correct word is:    WORDS
and the program suggested: WRONG
then the scoring would be: 21100

A repeated letter that is in the word is marked 1 or 2 at every position it appears
";

/// Failure while prompting for a score
#[derive(Debug, Error)]
pub enum FeedbackError {
    #[error("failed to talk to the scorer")]
    Io(#[from] io::Error),
}

/// Why a typed score was refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreRejection {
    #[error(transparent)]
    Malformed(#[from] ScoreParseError),
    #[error("{letter} (position {position}) is already known to be in the word")]
    AbsentButKnown { letter: char, position: usize },
    #[error("{letter} (position {position}) is already known not to be in the word")]
    PresentButFailed { letter: char, position: usize },
    #[error("position {position} is already known to be {letter}")]
    NotCorrectAtSolved { letter: char, position: usize },
    #[error("{letter} cannot be both absent and present; mark it 1 or 2 at every position")]
    Contradictory { letter: char },
}

/// Parse a typed score and check it against what is already known
///
/// Positions in rejection messages are 1-based.
///
/// # Errors
/// Returns a `ScoreRejection` describing the first problem found.
pub fn validate_score(
    input: &str,
    guess: &Word,
    facts: &Facts,
) -> Result<ScoreCode, ScoreRejection> {
    let score = ScoreCode::parse(input)?;
    let marks = score.marks();
    let present = facts.known().union(facts.pattern_letters());

    for (i, &mark) in marks.iter().enumerate() {
        let c = guess.char_at(i);
        let letter = char::from(c).to_ascii_uppercase();
        let position = i + 1;

        if mark == Mark::Absent && present.contains(c) {
            return Err(ScoreRejection::AbsentButKnown { letter, position });
        }
        if mark != Mark::Absent && facts.failed().contains(c) {
            return Err(ScoreRejection::PresentButFailed { letter, position });
        }
        if mark != Mark::Correct
            && let Some(solved) = facts.pattern()[i]
        {
            return Err(ScoreRejection::NotCorrectAtSolved {
                letter: char::from(solved).to_ascii_uppercase(),
                position,
            });
        }
    }

    for (i, &mark) in marks.iter().enumerate() {
        let c = guess.char_at(i);
        let clash = guess
            .chars()
            .iter()
            .zip(&marks)
            .any(|(&other, &other_mark)| {
                other == c && (other_mark == Mark::Absent) != (mark == Mark::Absent)
            });
        if clash {
            return Err(ScoreRejection::Contradictory {
                letter: char::from(c).to_ascii_uppercase(),
            });
        }
    }

    Ok(score)
}

/// Prompts a human for each score
pub struct InteractiveFeedback<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> InteractiveFeedback<R, W> {
    pub const fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Give back the reader and writer
    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }

    fn prompt(&mut self, guess: &Word) -> io::Result<()> {
        write!(
            self.writer,
            "Please score: {}\n            : ",
            guess.text().to_uppercase()
        )?;
        self.writer.flush()
    }
}

impl<R: BufRead, W: Write> FeedbackSource for InteractiveFeedback<R, W> {
    type Error = FeedbackError;

    fn score(&mut self, guess: &Word, facts: &Facts) -> Result<Feedback, FeedbackError> {
        loop {
            self.prompt(guess)?;

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                log::info!("scorer input closed, aborting game");
                return Ok(Feedback::Abort);
            }

            let reply = line.trim();
            if reply.eq_ignore_ascii_case(QUIT_TOKEN) {
                return Ok(Feedback::Abort);
            }

            match validate_score(reply, guess, facts) {
                Ok(score) => return Ok(Feedback::Score(score)),
                Err(rejection) => {
                    log::debug!("rejected score {reply:?} for {guess}: {rejection}");
                    writeln!(
                        self.writer,
                        "Invalid score: {rejection}. Enter again or enter {QUIT_TOKEN} to quit"
                    )?;
                    writeln!(self.writer, "{SCORING_HELP}")?;
                }
            }
        }
    }
}
