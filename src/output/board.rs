//! Plain-text board rendering
//!
//! Turns a `GameState` into the board the player sees: one placeholder row
//! per unplayed turn, then the played rows newest first, then a status line
//! once the match is over.

use crate::core::{Code, GameState, MAX_TURNS, MatchKind, NUM_PEGS, Outcome, Score};
use std::fmt::Write;

/// Separator between the pegs and the score marks
pub const SEPARATOR: &str = "  |  ";

/// Glyph for a single score mark
#[must_use]
pub const fn mark_glyph(mark: MatchKind) -> char {
    match mark {
        MatchKind::Exact => '#',
        MatchKind::ColorOnly => '*',
        MatchKind::None => '.',
    }
}

/// Status message for a finished match
#[must_use]
pub const fn status_line(outcome: Outcome) -> Option<&'static str> {
    match outcome {
        Outcome::Won => Some("You Won!"),
        Outcome::Lost => Some("You lost :("),
        Outcome::Unknown => None,
    }
}

/// Row shown for a turn that has not been played yet
#[must_use]
pub fn empty_row() -> String {
    let pegs = ["."; NUM_PEGS].join(" ");
    let marks = ["_"; NUM_PEGS].join(" ");
    format!("{pegs}{SEPARATOR}{marks}")
}

/// Row shown for a played turn, e.g. `1 2 3 4  |  # * . .`
#[must_use]
pub fn guess_row(guess: &Code, score: &Score) -> String {
    let marks: Vec<String> = score
        .marks()
        .iter()
        .map(|&m| mark_glyph(m).to_string())
        .collect();
    format!("{guess}{SEPARATOR}{}", marks.join(" "))
}

/// Render the whole board
///
/// Produces `MAX_TURNS` rows, plus one status row when the match is
/// finished. Every row ends with a newline.
///
/// # Examples
/// ```
/// use mastermind::core::{Code, GameState};
/// use mastermind::output::board::render;
///
/// let mut game = GameState::with_answer("1234".parse::<Code>().unwrap());
/// game.submit("1256".parse::<Code>().unwrap().pegs()).unwrap();
///
/// let board = render(&game);
/// assert_eq!(board.lines().count(), 10);
/// assert_eq!(board.lines().last(), Some("1 2 5 6  |  # # . ."));
/// ```
#[must_use]
pub fn render(state: &GameState) -> String {
    let mut board = String::new();

    for _ in state.guesses().len()..MAX_TURNS {
        board.push_str(&empty_row());
        board.push('\n');
    }

    for (guess, score) in state.guesses().iter().zip(state.scores()).rev() {
        board.push_str(&guess_row(guess, score));
        board.push('\n');
    }

    if let Some(status) = status_line(state.outcome()) {
        // Writing to a String cannot fail
        let _ = writeln!(board, "{status}");
    }

    board
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> Code {
        s.parse().unwrap()
    }

    #[test]
    fn fresh_board_is_all_placeholders() {
        let game = GameState::with_answer(code("1234"));
        let board = render(&game);

        assert_eq!(board.lines().count(), MAX_TURNS);
        assert!(board.lines().all(|line| line == ". . . .  |  _ _ _ _"));
        assert!(board.ends_with('\n'));
    }

    #[test]
    fn rows_are_newest_first() {
        let mut game = GameState::with_answer(code("1234"));
        game.submit(code("5555").pegs()).unwrap();
        game.submit(code("4321").pegs()).unwrap();

        let board = render(&game);
        let lines: Vec<&str> = board.lines().collect();

        assert_eq!(lines.len(), MAX_TURNS);
        assert_eq!(lines[7], ". . . .  |  _ _ _ _");
        assert_eq!(lines[8], "4 3 2 1  |  * * * *");
        assert_eq!(lines[9], "5 5 5 5  |  . . . .");
    }

    #[test]
    fn win_adds_status_line() {
        let mut game = GameState::with_answer(code("1234"));
        game.submit(code("1243").pegs()).unwrap();
        game.submit(code("1234").pegs()).unwrap();

        let board = render(&game);
        let lines: Vec<&str> = board.lines().collect();

        assert_eq!(lines.len(), MAX_TURNS + 1);
        assert_eq!(lines[8], "1 2 3 4  |  # # # #");
        assert_eq!(lines[9], "1 2 4 3  |  # # * *");
        assert_eq!(lines[10], "You Won!");
    }

    #[test]
    fn loss_fills_board_and_adds_status_line() {
        let mut game = GameState::with_answer(code("1234"));
        for _ in 0..MAX_TURNS {
            game.submit(code("6666").pegs()).unwrap();
        }

        let board = render(&game);
        let lines: Vec<&str> = board.lines().collect();

        assert_eq!(lines.len(), MAX_TURNS + 1);
        assert!(!lines.contains(&". . . .  |  _ _ _ _"));
        assert_eq!(lines[MAX_TURNS], "You lost :(");
    }

    #[test]
    fn render_is_idempotent() {
        let mut game = GameState::with_answer(code("1234"));
        game.submit(code("3456").pegs()).unwrap();
        assert_eq!(render(&game), render(&game));
    }

    #[test]
    fn glyphs() {
        assert_eq!(mark_glyph(MatchKind::Exact), '#');
        assert_eq!(mark_glyph(MatchKind::ColorOnly), '*');
        assert_eq!(mark_glyph(MatchKind::None), '.');
        assert_eq!(status_line(Outcome::Unknown), None);
    }
}
