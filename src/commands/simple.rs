//! Simple interactive CLI mode
//!
//! Line-based game loop without the TUI: print the board, read a guess,
//! score it, repeat until the game is won or lost, then offer another game.

use super::session::{Session, SessionConfig};
use crate::core::{Code, Outcome};
use crate::output::formatters::{colored_code, palette_line, render_colored};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple(config: SessionConfig) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(config);
    play_session(&mut session, &mut stdin.lock(), &mut stdout.lock())
}

/// Play games until the player quits, declines a rematch, or input ends
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn play_session<R: BufRead, W: Write>(
    session: &mut Session,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    writeln!(output, "\nLet's play Mastermind!")?;
    writeln!(
        output,
        "Guess the four-peg code. Type four digits, e.g. 1234.  {}",
        "'quit' to exit".bright_black()
    )?;
    writeln!(output, "Colors: {}", palette_line())?;
    writeln!(
        output,
        "Marks:  {} right color and place, {} right color only, . miss\n",
        "#".red().bold(),
        "*".bright_yellow().bold()
    )?;

    loop {
        let mut game = session.next_game();
        write!(output, "{}", render_colored(&game))?;

        while !game.is_finished() {
            let Some(line) = prompt(input, output, "Please enter your guess")? else {
                return Ok(());
            };

            if is_quit(&line) {
                writeln!(output, "\nThanks for playing Mastermind!")?;
                return Ok(());
            }

            let guess: Code = match line.parse() {
                Ok(guess) => guess,
                Err(e) => {
                    debug!(input = %line, error = %e, "rejected guess");
                    writeln!(output, "That wasn't a valid guess! {e}")?;
                    continue;
                }
            };

            game.submit(guess.pegs())?;
            writeln!(output)?;
            write!(output, "{}", render_colored(&game))?;
        }

        if game.outcome() == Outcome::Lost {
            writeln!(output, "The answer was: {}", colored_code(game.answer()))?;
        }
        session.stats.record(&game);

        let again = prompt(input, output, "Do you want to play again?")?;
        match again.as_deref().map(str::to_uppercase).as_deref() {
            Some("1" | "Y" | "YES") => writeln!(output)?,
            _ => {
                writeln!(
                    output,
                    "\nThanks for playing Mastermind! You won {} of {} games.",
                    session.stats.games_won, session.stats.total_games
                )?;
                return Ok(());
            }
        }
    }
}

fn is_quit(line: &str) -> bool {
    matches!(line.to_lowercase().as_str(), "quit" | "q" | "exit")
}

/// Print a prompt and read one trimmed line; `None` at end of input
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> Result<Option<String>> {
    write!(output, "{message}: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ScoringRule;
    use std::io::Cursor;

    const SEED: u64 = 2024;

    fn seeded_session() -> Session {
        Session::new(SessionConfig::new(Some(SEED), ScoringRule::Standard))
    }

    /// The answer the seeded session will deal first
    fn first_answer() -> String {
        let mut session = seeded_session();
        let game = session.next_game();
        game.answer().pegs().iter().map(|c| c.digit()).collect()
    }

    fn run(script: &str) -> (Session, String) {
        let mut session = seeded_session();
        let mut input = Cursor::new(script.to_string());
        let mut output = Vec::new();
        play_session(&mut session, &mut input, &mut output).unwrap();
        (session, String::from_utf8(output).unwrap())
    }

    #[test]
    fn winning_game_then_decline() {
        let script = format!("{}\nno\n", first_answer());
        let (session, output) = run(&script);

        assert!(output.contains("You Won!"));
        assert!(output.contains("Do you want to play again?"));
        assert!(output.contains("You won 1 of 1 games."));
        assert_eq!(session.stats.games_won, 1);
    }

    #[test]
    fn invalid_input_reprompts() {
        let script = format!("12\n1239\nhello\n{}\nn\n", first_answer());
        let (session, output) = run(&script);

        assert_eq!(output.matches("That wasn't a valid guess!").count(), 3);
        assert!(output.contains("You Won!"));
        assert_eq!(session.stats.total_games, 1);
    }

    #[test]
    fn quit_exits_immediately() {
        let (session, output) = run("quit\n");

        assert!(output.contains("Thanks for playing Mastermind!"));
        assert_eq!(session.stats.total_games, 0);
    }

    #[test]
    fn end_of_input_stops_cleanly() {
        let miss = if first_answer() == "1111" { "2222" } else { "1111" };
        let (session, output) = run(&format!("{miss}\n"));

        assert!(!output.contains("Thanks for playing"));
        assert_eq!(session.stats.total_games, 0);
    }

    #[test]
    fn losing_reveals_answer() {
        let answer = first_answer();
        // Any code other than the answer, ten times
        let miss = if answer == "6666" { "1111" } else { "6666" };
        let script = format!("{}n\n", format!("{miss}\n").repeat(10));
        let (session, output) = run(&script);

        assert!(output.contains("You lost :("));
        assert!(output.contains("The answer was:"));
        assert_eq!(session.stats.total_games, 1);
        assert_eq!(session.stats.games_won, 0);
    }

    #[test]
    fn play_again_starts_new_game() {
        let mut session = seeded_session();
        let first: String = session
            .next_game()
            .answer()
            .pegs()
            .iter()
            .map(|c| c.digit())
            .collect();
        let second: String = session
            .next_game()
            .answer()
            .pegs()
            .iter()
            .map(|c| c.digit())
            .collect();

        let script = format!("{first}\nyes\n{second}\nno\n");
        let (session, output) = run(&script);

        assert_eq!(output.matches("You Won!").count(), 2);
        assert_eq!(session.stats.total_games, 2);
    }

    #[test]
    fn quit_words() {
        assert!(is_quit("quit"));
        assert!(is_quit("Q"));
        assert!(is_quit("exit"));
        assert!(!is_quit("1234"));
    }
}
