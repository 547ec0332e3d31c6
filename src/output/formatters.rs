//! Formatting utilities for terminal output

use crate::solver::{LossReason, Outcome};

/// Fixed-width bar for `value` out of `max`
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 {
        0
    } else {
        (value * width / max).min(width)
    };
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// `part` as a percentage of `whole`, 0 when `whole` is 0
#[must_use]
pub fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

/// One line describing how a game ended
#[must_use]
pub fn outcome_message(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Won { turns, word } => format!(
            "The word is: {}! It was guessed in {turns} turns",
            word.text().to_uppercase()
        ),
        Outcome::Lost(LossReason::NoCandidates) => {
            "Couldn't solve the word: no word in the list fits the scores".to_string()
        }
        Outcome::Lost(LossReason::TurnBudgetExhausted) => {
            "Couldn't solve the word: out of turns".to_string()
        }
        Outcome::Aborted => "Game abandoned".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0, 100, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50, 100, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_overfull_and_zero_max() {
        assert_eq!(create_progress_bar(200, 100, 4), "████");
        assert_eq!(create_progress_bar(3, 0, 4), "░░░░");
    }

    #[test]
    fn percentage_of_nothing_is_zero() {
        assert!(percentage(3, 0).abs() < f64::EPSILON);
        assert!((percentage(1, 4) - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn outcome_messages() {
        let won = Outcome::Won {
            turns: 3,
            word: Word::new("words").unwrap(),
        };
        assert_eq!(
            outcome_message(&won),
            "The word is: WORDS! It was guessed in 3 turns"
        );
        assert!(outcome_message(&Outcome::Lost(LossReason::NoCandidates)).starts_with("Couldn't"));
        assert_eq!(outcome_message(&Outcome::Aborted), "Game abandoned");
    }
}
