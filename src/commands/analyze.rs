//! Guess analysis command
//!
//! Reports how a guess splits every possible answer by score.

use crate::analysis::{ScoreMetrics, calculate_metrics, score_distribution};
use crate::core::{Code, GuessError, Score, ScoringRule};

/// Result of analyzing a guess
pub struct AnalysisResult {
    pub guess: Code,
    pub metrics: ScoreMetrics,
    /// Partitions, best score first
    pub distribution: Vec<(Score, usize)>,
    pub total_answers: usize,
}

/// Analyze a guess against all 1296 possible answers
///
/// # Errors
///
/// Returns an error if the guess is not four digits in `1..=6`.
pub fn analyze_guess(guess: &str, rule: ScoringRule) -> Result<AnalysisResult, GuessError> {
    let guess: Code = guess.parse()?;
    let answers: Vec<Code> = Code::all().collect();

    Ok(AnalysisResult {
        guess,
        metrics: calculate_metrics(&guess, &answers, rule),
        distribution: score_distribution(&guess, &answers, rule),
        total_answers: answers.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analyze_valid_guess() {
        let result = analyze_guess("1122", ScoringRule::Standard).unwrap();

        assert_eq!(result.total_answers, 1296);
        assert_eq!(result.metrics.max_partition, 256);
        assert_eq!(result.metrics.distinct_scores, result.distribution.len());
        assert_eq!(
            result.distribution.iter().map(|(_, n)| n).sum::<usize>(),
            1296
        );
    }

    #[test]
    fn more_colors_split_further() {
        let mono = analyze_guess("1111", ScoringRule::Standard).unwrap();
        let mixed = analyze_guess("1234", ScoringRule::Standard).unwrap();

        assert!(mixed.metrics.entropy > mono.metrics.entropy);
        assert!(mixed.metrics.distinct_scores > mono.metrics.distinct_scores);
    }

    #[test]
    fn analyze_invalid_guess() {
        assert!(analyze_guess("12345", ScoringRule::Standard).is_err());
        assert!(analyze_guess("7777", ScoringRule::Standard).is_err());
    }
}
