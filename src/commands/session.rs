//! Per-run session settings and statistics
//!
//! A session spans any number of games played in one run of the program.

use crate::core::{GameState, Outcome, ScoringRule};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

/// Settings shared by every game in a session
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionConfig {
    /// Seed for answer generation; `None` seeds from the OS
    pub seed: Option<u64>,
    pub rule: ScoringRule,
}

impl SessionConfig {
    #[must_use]
    pub const fn new(seed: Option<u64>, rule: ScoringRule) -> Self {
        Self { seed, rule }
    }
}

/// Win/loss tally across a session
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Wins by number of turns taken (index 0 unused)
    pub guess_distribution: [usize; crate::core::MAX_TURNS + 1],
}

impl Statistics {
    /// Record a finished game; unfinished games are ignored
    pub fn record(&mut self, game: &GameState) {
        match game.outcome() {
            Outcome::Won => {
                self.total_games += 1;
                self.games_won += 1;
                if let Some(slot) = self.guess_distribution.get_mut(game.turns_taken()) {
                    *slot += 1;
                }
            }
            Outcome::Lost => self.total_games += 1,
            Outcome::Unknown => {}
        }
    }

    /// Percentage of finished games that were won
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games > 0 {
            self.games_won as f64 / self.total_games as f64 * 100.0
        } else {
            0.0
        }
    }
}

/// Source of new games for a session
pub struct Session {
    config: SessionConfig,
    rng: StdRng,
    pub stats: Statistics,
}

impl Session {
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        info!(seeded = config.seed.is_some(), rule = ?config.rule, "session started");

        Self {
            config,
            rng,
            stats: Statistics::default(),
        }
    }

    #[must_use]
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Start a new game with a freshly drawn answer
    pub fn next_game(&mut self) -> GameState {
        GameState::from_rng(&mut self.rng).with_rule(self.config.rule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Code;

    #[test]
    fn seeded_sessions_repeat_answers() {
        let config = SessionConfig::new(Some(99), ScoringRule::Standard);
        let mut a = Session::new(config);
        let mut b = Session::new(config);

        for _ in 0..5 {
            assert_eq!(a.next_game().answer(), b.next_game().answer());
        }
    }

    #[test]
    fn games_use_configured_rule() {
        let mut session = Session::new(SessionConfig::new(Some(1), ScoringRule::FullAnswer));
        assert_eq!(session.next_game().rule(), ScoringRule::FullAnswer);
    }

    #[test]
    fn statistics_record_outcomes() {
        let answer: Code = "1234".parse().unwrap();
        let mut stats = Statistics::default();

        let mut won = GameState::with_answer(answer);
        won.submit(&[crate::core::Color::Cyan; 4]).unwrap();
        won.submit(answer.pegs()).unwrap();
        stats.record(&won);

        let mut lost = GameState::with_answer(answer);
        for _ in 0..crate::core::MAX_TURNS {
            lost.submit(&[crate::core::Color::Cyan; 4]).unwrap();
        }
        stats.record(&lost);

        stats.record(&GameState::with_answer(answer));

        assert_eq!(stats.total_games, 2);
        assert_eq!(stats.games_won, 1);
        assert_eq!(stats.guess_distribution[2], 1);
        assert!((stats.win_rate() - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn late_win_is_counted_without_a_distribution_slot() {
        let answer: Code = "1234".parse().unwrap();
        let mut game = GameState::with_answer(answer);
        game.submit(answer.pegs()).unwrap();
        for _ in 0..crate::core::MAX_TURNS {
            game.submit(&[crate::core::Color::Cyan; 4]).unwrap();
        }
        assert_eq!(game.turns_taken(), crate::core::MAX_TURNS + 1);

        let mut stats = Statistics::default();
        stats.record(&game);

        assert_eq!(stats.games_won, 1);
        assert_eq!(stats.guess_distribution.iter().sum::<usize>(), 0);
    }

    #[test]
    fn empty_statistics_win_rate() {
        assert!(Statistics::default().win_rate().abs() < f64::EPSILON);
    }
}
