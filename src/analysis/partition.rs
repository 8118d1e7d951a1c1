//! Score partitions and Shannon entropy
//!
//! Every possible answer is scored against the guess; answers that produce
//! the same score land in the same partition.

use crate::core::{Code, Score, ScoringRule};
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// Summary of how a guess partitions a set of answers
#[derive(Debug, Clone, Copy)]
pub struct ScoreMetrics {
    /// Shannon entropy of the score distribution, in bits
    pub entropy: f64,
    /// Expected size of the partition the real answer falls into
    pub expected_remaining: f64,
    /// Largest partition (worst case)
    pub max_partition: usize,
    /// Number of distinct scores observed
    pub distinct_scores: usize,
}

/// Count answers by the score they give `guess`
///
/// Answers are scored in parallel and the per-thread tallies merged.
#[must_use]
pub fn group_by_score(guess: &Code, answers: &[Code], rule: ScoringRule) -> FxHashMap<Score, usize> {
    answers
        .par_iter()
        .fold(FxHashMap::default, |mut counts, answer| {
            *counts
                .entry(Score::calculate(guess, answer, rule))
                .or_insert(0) += 1;
            counts
        })
        .reduce(FxHashMap::default, |mut left, right| {
            for (score, count) in right {
                *left.entry(score).or_insert(0) += count;
            }
            left
        })
}

/// Calculate Shannon entropy from a score distribution
///
/// H = -Σ p * log₂(p)
///
/// # Properties
/// - Returns 0.0 for a certain outcome (one score with p=1)
/// - Maximized for a uniform distribution
/// - Always in range [0, log₂(n)] for n scores
#[must_use]
pub fn shannon_entropy<S>(score_counts: &std::collections::HashMap<Score, usize, S>) -> f64
where
    S: std::hash::BuildHasher,
{
    let total = score_counts.values().sum::<usize>() as f64;

    if total == 0.0 {
        return 0.0;
    }

    score_counts
        .values()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Calculate entropy, expected and worst-case partition size for a guess
///
/// # Examples
/// ```
/// use mastermind::analysis::calculate_metrics;
/// use mastermind::core::{Code, ScoringRule};
///
/// let answers: Vec<Code> = Code::all().collect();
/// let guess: Code = "1122".parse().unwrap();
/// let metrics = calculate_metrics(&guess, &answers, ScoringRule::Standard);
///
/// assert_eq!(metrics.max_partition, 256);
/// assert!(metrics.entropy > 2.0);
/// ```
#[must_use]
pub fn calculate_metrics(guess: &Code, answers: &[Code], rule: ScoringRule) -> ScoreMetrics {
    let counts = group_by_score(guess, answers, rule);

    if answers.is_empty() {
        return ScoreMetrics {
            entropy: 0.0,
            expected_remaining: 0.0,
            max_partition: 0,
            distinct_scores: 0,
        };
    }

    let total = answers.len() as f64;
    let expected_remaining: f64 = counts
        .values()
        .map(|&count| count as f64 * count as f64 / total)
        .sum();

    ScoreMetrics {
        entropy: shannon_entropy(&counts),
        expected_remaining,
        max_partition: counts.values().copied().max().unwrap_or(0),
        distinct_scores: counts.len(),
    }
}

/// Score partitions ordered best first (most exact, then most color-only)
#[must_use]
pub fn score_distribution(guess: &Code, answers: &[Code], rule: ScoringRule) -> Vec<(Score, usize)> {
    let mut distribution: Vec<(Score, usize)> =
        group_by_score(guess, answers, rule).into_iter().collect();
    distribution.sort_by_key(|(score, _)| {
        std::cmp::Reverse((score.exact(), score.color_only()))
    });
    distribution
}
