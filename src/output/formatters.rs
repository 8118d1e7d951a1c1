//! Formatting utilities for terminal output

use super::board::{SEPARATOR, mark_glyph, status_line};
use crate::core::{Code, Color, GameState, MAX_TURNS, MatchKind, NUM_PEGS, Outcome, Score};
use colored::{ColoredString, Colorize};

/// Terminal color used for a peg
#[must_use]
pub const fn terminal_color(color: Color) -> colored::Color {
    match color {
        Color::Red => colored::Color::Red,
        Color::Blue => colored::Color::BrightBlue,
        Color::Green => colored::Color::Green,
        Color::Yellow => colored::Color::Yellow,
        Color::Magenta => colored::Color::Magenta,
        Color::Cyan => colored::Color::Cyan,
    }
}

/// A peg drawn as its digit in its own color
#[must_use]
pub fn colored_peg(color: Color) -> ColoredString {
    color
        .digit()
        .to_string()
        .color(terminal_color(color))
        .bold()
}

/// A score mark glyph, red for exact and yellow for color-only
#[must_use]
pub fn colored_mark(mark: MatchKind) -> ColoredString {
    let glyph = mark_glyph(mark).to_string();
    match mark {
        MatchKind::Exact => glyph.red().bold(),
        MatchKind::ColorOnly => glyph.bright_yellow().bold(),
        MatchKind::None => glyph.normal(),
    }
}

/// Pegs of a code in color, separated by spaces
#[must_use]
pub fn colored_code(code: &Code) -> String {
    code.pegs()
        .iter()
        .map(|&c| colored_peg(c).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Score marks in color, separated by spaces
#[must_use]
pub fn colored_score(score: &Score) -> String {
    score
        .marks()
        .iter()
        .map(|&m| colored_mark(m).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Palette legend listing every color with its digit
#[must_use]
pub fn palette_line() -> String {
    Color::ALL
        .iter()
        .map(|&c| format!("{}={}", colored_peg(c), c.name().color(terminal_color(c))))
        .collect::<Vec<_>>()
        .join("  ")
}

/// Colored counterpart of [`super::board::render`], row for row
#[must_use]
pub fn render_colored(state: &GameState) -> String {
    let mut board = String::new();
    let placeholder = format!(
        "{}{}{}",
        ["."; NUM_PEGS].join(" ").bright_black(),
        SEPARATOR.bright_black(),
        ["_"; NUM_PEGS].join(" ").bright_black()
    );

    for _ in state.guesses().len()..MAX_TURNS {
        board.push_str(&placeholder);
        board.push('\n');
    }

    for (guess, score) in state.guesses().iter().zip(state.scores()).rev() {
        board.push_str(&colored_code(guess));
        board.push_str(SEPARATOR);
        board.push_str(&colored_score(score));
        board.push('\n');
    }

    if let Some(status) = status_line(state.outcome()) {
        let status = if state.outcome() == Outcome::Won {
            status.green().bold()
        } else {
            status.red().bold()
        };
        board.push_str(&status.to_string());
        board.push('\n');
    }

    board
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain<T>(f: impl FnOnce() -> T) -> T {
        colored::control::set_override(false);
        f()
    }

    #[test]
    fn colored_board_matches_plain_board_without_ansi() {
        let mut game = GameState::with_answer("1234".parse().unwrap());
        game.submit("1243".parse::<Code>().unwrap().pegs()).unwrap();

        let colored = plain(|| render_colored(&game));
        assert_eq!(colored, super::super::board::render(&game));
    }

    #[test]
    fn palette_lists_every_color() {
        let palette = plain(palette_line);
        assert_eq!(
            palette,
            "1=red  2=blue  3=green  4=yellow  5=magenta  6=cyan"
        );
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(1.0, 0.0, 4), "░░░░");
    }
}
