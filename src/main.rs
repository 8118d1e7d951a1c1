//! Mastermind - CLI
//!
//! Play Mastermind in a full-screen TUI or a plain line-based loop, or score
//! and analyze codes from the command line.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use mastermind::{
    commands::{SessionConfig, analyze_guess, run_simple, score_codes},
    core::ScoringRule,
    interactive::{App, run_tui},
    output::{print_analysis_result, print_score_result},
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(
    name = "mastermind",
    about = "Mastermind: break the four-peg color code in ten turns",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Seed for the hidden code (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// How color-only matches are counted
    #[arg(short, long, global = true, value_enum, default_value_t = Rule::Standard)]
    rule: Rule,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Rule {
    /// Exact matches use up their color before color-only matching
    Standard,
    /// Color-only matching counts the whole answer
    FullAnswer,
}

impl From<Rule> for ScoringRule {
    fn from(rule: Rule) -> Self {
        match rule {
            Rule::Standard => Self::Standard,
            Rule::FullAnswer => Self::FullAnswer,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// Score a guess against a known answer
    Score {
        /// Guess as four digits 1-6, e.g. 1234
        guess: String,

        /// Answer as four digits 1-6
        answer: String,
    },

    /// Show how a guess splits all 1296 possible answers
    Analyze {
        /// Guess as four digits 1-6
        guess: String,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let config = SessionConfig::new(cli.seed, cli.rule.into());

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_tui(App::new(config)),
        Commands::Simple => run_simple(config),
        Commands::Score { guess, answer } => {
            let result = score_codes(&guess, &answer, config.rule)
                .with_context(|| format!("cannot score '{guess}' against '{answer}'"))?;
            print_score_result(&result);
            Ok(())
        }
        Commands::Analyze { guess } => {
            let result = analyze_guess(&guess, config.rule)
                .with_context(|| format!("cannot analyze '{guess}'"))?;
            print_analysis_result(&result);
            Ok(())
        }
    }
}
