//! Game state for a single match
//!
//! Owns the hidden answer and the guess/score history, and tracks whether the
//! match has been won or lost.

use super::code::{Code, Color, GuessError};
use super::score::{Score, ScoringRule};
use rand::Rng;
use tracing::{debug, info, warn};

/// Guesses allowed before the match is lost
pub const MAX_TURNS: usize = 10;

/// How a match ended, or `Unknown` while it is still running
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Outcome {
    #[default]
    Unknown,
    Won,
    Lost,
}

/// State of one Mastermind match
///
/// Mutated only through [`GameState::submit`]. Once [`GameState::is_finished`]
/// returns `true` the caller must stop submitting guesses; the state itself
/// does not refuse them.
#[derive(Debug, Clone)]
pub struct GameState {
    answer: Code,
    rule: ScoringRule,
    guesses: Vec<Code>,
    scores: Vec<Score>,
    outcome: Outcome,
}

impl GameState {
    /// Start a match with an answer drawn from the thread RNG
    #[must_use]
    pub fn new() -> Self {
        Self::from_rng(&mut rand::rng())
    }

    /// Start a match with an answer drawn from `rng`
    pub fn from_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::with_answer(Code::random(rng))
    }

    /// Start a match with a known answer
    #[must_use]
    pub fn with_answer(answer: Code) -> Self {
        info!("new game started");
        tracing::trace!(%answer, "answer chosen");

        Self {
            answer,
            rule: ScoringRule::default(),
            guesses: Vec::with_capacity(MAX_TURNS),
            scores: Vec::with_capacity(MAX_TURNS),
            outcome: Outcome::Unknown,
        }
    }

    /// Use a different scoring rule for this match
    #[must_use]
    pub fn with_rule(mut self, rule: ScoringRule) -> Self {
        self.rule = rule;
        self
    }

    /// Score a guess and record it
    ///
    /// Once the game is won or lost its outcome no longer changes.
    ///
    /// # Errors
    /// Returns `GuessError::WrongLength` if `guess` is not exactly four pegs.
    /// Nothing is recorded in that case.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Code, Color, GameState, Outcome};
    ///
    /// let answer: Code = "1234".parse().unwrap();
    /// let mut game = GameState::with_answer(answer);
    ///
    /// let score = game.submit(answer.pegs()).unwrap();
    /// assert!(score.is_perfect());
    /// assert_eq!(game.outcome(), Outcome::Won);
    ///
    /// assert!(game.submit(&[Color::Red; 3]).is_err());
    /// assert_eq!(game.guesses().len(), 1);
    /// ```
    pub fn submit(&mut self, guess: &[Color]) -> Result<Score, GuessError> {
        let guess = Code::from_slice(guess)?;

        if self.is_finished() {
            warn!(outcome = ?self.outcome, "guess submitted after the game finished");
        }

        let score = Score::calculate(&guess, &self.answer, self.rule);
        self.guesses.push(guess);
        self.scores.push(score);

        debug!(
            turn = self.guesses.len(),
            %guess,
            exact = score.exact(),
            color_only = score.color_only(),
            "guess scored"
        );

        // A finished game keeps its outcome
        if self.outcome != Outcome::Unknown {
            return Ok(score);
        }

        if score.is_perfect() {
            self.outcome = Outcome::Won;
            info!(turns = self.guesses.len(), "game won");
        } else if self.guesses.len() >= MAX_TURNS {
            self.outcome = Outcome::Lost;
            info!("game lost");
        }

        Ok(score)
    }

    /// Guesses in the order they were submitted
    #[inline]
    #[must_use]
    pub fn guesses(&self) -> &[Code] {
        &self.guesses
    }

    /// Scores, index-aligned with [`GameState::guesses`]
    #[inline]
    #[must_use]
    pub fn scores(&self) -> &[Score] {
        &self.scores
    }

    #[inline]
    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// The hidden answer, for revealing once the match is over
    #[inline]
    #[must_use]
    pub const fn answer(&self) -> &Code {
        &self.answer
    }

    #[inline]
    #[must_use]
    pub const fn rule(&self) -> ScoringRule {
        self.rule
    }

    /// Whether the match has been won or lost
    #[inline]
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        matches!(self.outcome, Outcome::Won | Outcome::Lost)
    }

    #[inline]
    #[must_use]
    pub fn turns_taken(&self) -> usize {
        self.guesses.len()
    }

    #[inline]
    #[must_use]
    pub fn turns_remaining(&self) -> usize {
        MAX_TURNS.saturating_sub(self.guesses.len())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
