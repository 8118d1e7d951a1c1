//! Guess scoring
//!
//! A score is one mark per peg: exact (right color, right place), color only
//! (right color, wrong place) or none. Marks are sorted exact first, so a
//! score does not map back to guess positions.

use super::code::{Code, NUM_COLORS, NUM_PEGS};

/// Outcome of comparing a single guess peg
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchKind {
    Exact,
    ColorOnly,
    None,
}

/// Which color-count table the color pass consults
///
/// `Standard` removes exact-matched answer pegs from the table, so a color
/// never registers more often than it occurs in the answer. `FullAnswer`
/// counts the whole answer and only strips exact matches from the guess
/// side; a color already matched exactly can then score again as a color
/// match.
///
/// `FullAnswer` is how the classic console game scores. `Standard` is the
/// default because it keeps repeated colors from double counting: answer
/// `1123` against guess `1116` is two exact and no color-only match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScoringRule {
    #[default]
    Standard,
    FullAnswer,
}

/// Feedback for one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Score([MatchKind; NUM_PEGS]);

impl Score {
    /// Every peg matched exactly
    pub const PERFECT: Self = Self([MatchKind::Exact; NUM_PEGS]);

    /// Build a score from match counts
    ///
    /// # Panics
    /// Panics in debug mode if `exact + color_only > NUM_PEGS`
    #[must_use]
    pub fn from_counts(exact: usize, color_only: usize) -> Self {
        debug_assert!(exact + color_only <= NUM_PEGS, "too many matches");

        let mut marks = [MatchKind::None; NUM_PEGS];
        for (i, mark) in marks.iter_mut().enumerate() {
            if i < exact {
                *mark = MatchKind::Exact;
            } else if i < exact + color_only {
                *mark = MatchKind::ColorOnly;
            }
        }
        Self(marks)
    }

    /// Score `guess` against `answer`
    ///
    /// # Algorithm
    /// 1. Exact pass: mark positions where the colors agree and mask them out
    /// 2. Color pass: walk the unmasked guess pegs against a per-color count
    ///    table, consuming one count per color match
    /// 3. Whatever is left scores as none
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Code, Score, ScoringRule};
    ///
    /// let answer: Code = "1234".parse().unwrap();
    /// let guess: Code = "2136".parse().unwrap();
    /// let score = Score::calculate(&guess, &answer, ScoringRule::Standard);
    ///
    /// assert_eq!(score.exact(), 1);
    /// assert_eq!(score.color_only(), 2);
    /// assert_eq!(score.none(), 1);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Code, answer: &Code, rule: ScoringRule) -> Self {
        let guess = guess.pegs();
        let answer = answer.pegs();

        let mut matched = [false; NUM_PEGS];
        let mut available: [u8; NUM_COLORS] = [0; NUM_COLORS];
        for peg in answer {
            available[peg.index()] += 1;
        }

        // First pass: exact position matches
        let mut exact = 0;
        for (i, (g, a)) in guess.iter().zip(answer).enumerate() {
            if g == a {
                matched[i] = true;
                exact += 1;
                if rule == ScoringRule::Standard {
                    available[g.index()] -= 1;
                }
            }
        }

        // Second pass: color matches among the pegs the first pass left
        let mut color_only = 0;
        for (peg, _) in guess.iter().zip(matched).filter(|(_, m)| !m) {
            let count = &mut available[peg.index()];
            if *count > 0 {
                *count -= 1;
                color_only += 1;
            }
        }

        Self::from_counts(exact, color_only)
    }

    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[MatchKind; NUM_PEGS] {
        &self.0
    }

    #[must_use]
    pub fn exact(&self) -> usize {
        self.count(MatchKind::Exact)
    }

    #[must_use]
    pub fn color_only(&self) -> usize {
        self.count(MatchKind::ColorOnly)
    }

    #[must_use]
    pub fn none(&self) -> usize {
        self.count(MatchKind::None)
    }

    #[inline]
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    fn count(&self, kind: MatchKind) -> usize {
        self.0.iter().filter(|&&m| m == kind).count()
    }
}
