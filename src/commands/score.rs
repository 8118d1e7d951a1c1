//! Score command
//!
//! Scores one explicit guess against one explicit answer.

use crate::core::{Code, GuessError, Score, ScoringRule};

/// Result of scoring a guess
pub struct ScoreResult {
    pub guess: Code,
    pub answer: Code,
    pub rule: ScoringRule,
    pub score: Score,
}

/// Parse both codes and score `guess` against `answer`
///
/// # Errors
///
/// Returns an error if either code is not four digits in `1..=6`.
pub fn score_codes(guess: &str, answer: &str, rule: ScoringRule) -> Result<ScoreResult, GuessError> {
    let guess: Code = guess.parse()?;
    let answer: Code = answer.parse()?;

    Ok(ScoreResult {
        guess,
        answer,
        rule,
        score: Score::calculate(&guess, &answer, rule),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_valid_codes() {
        let result = score_codes("2136", "1234", ScoringRule::Standard).unwrap();
        assert_eq!(result.score, Score::from_counts(1, 2));
        assert_eq!(result.guess.to_string(), "2 1 3 6");
    }

    #[test]
    fn accepts_spaced_input() {
        let result = score_codes("1 1 1 6", "1 1 2 3", ScoringRule::FullAnswer).unwrap();
        assert_eq!(result.score, Score::from_counts(2, 1));
        assert_eq!(result.rule, ScoringRule::FullAnswer);
    }

    #[test]
    fn rejects_invalid_guess() {
        assert!(matches!(
            score_codes("123", "1234", ScoringRule::Standard),
            Err(GuessError::WrongLength { actual: 3, .. })
        ));
    }

    #[test]
    fn rejects_invalid_answer() {
        assert_eq!(
            score_codes("1234", "1204", ScoringRule::Standard).err(),
            Some(GuessError::UnknownColor('0'))
        );
    }
}
