//! Display functions for command results

use super::formatters::{colored_code, colored_score, create_progress_bar};
use crate::commands::{AnalysisResult, ScoreResult};
use crate::core::ScoringRule;
use colored::Colorize;

/// Distinct scores a guess can produce (3 exact + 1 color-only is impossible)
const REACHABLE_SCORES: usize = 14;

/// Entropy bar on a fixed scale, so bars compare across guesses
fn entropy_bar(entropy: f64, width: usize) -> String {
    create_progress_bar(entropy, (REACHABLE_SCORES as f64).log2(), width)
}

/// Print the result of scoring a guess
pub fn print_score_result(result: &ScoreResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!("Guess:   {}", colored_code(&result.guess));
    println!("Answer:  {}", colored_code(&result.answer));
    println!("{}", "─".repeat(40).cyan());
    println!("Score:   {}", colored_score(&result.score));
    println!(
        "         {} exact, {} color only, {} none",
        result.score.exact().to_string().red().bold(),
        result.score.color_only().to_string().bright_yellow().bold(),
        result.score.none()
    );
    if result.rule == ScoringRule::FullAnswer {
        println!("{}", "(full-answer color counting)".bright_black());
    }

    if result.score.is_perfect() {
        println!("\n{}", "✅ Code broken!".green().bold());
    }
}

/// Print the result of guess analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "GUESS ANALYSIS:".bright_cyan().bold(),
        colored_code(&result.guess)
    );
    println!("{}", "═".repeat(60).cyan());

    let metrics = &result.metrics;

    println!("\n📊 Against {} possible answers:", result.total_answers);
    println!(
        "   Entropy:     [{}] {}",
        entropy_bar(metrics.entropy, 30).green(),
        format!("{:.3} bits", metrics.entropy).bright_yellow()
    );
    println!("   Scores seen: {}", metrics.distinct_scores);
    println!(
        "   Expected:    {:.1} answers remain",
        metrics.expected_remaining
    );
    println!("   Worst case:  {} answers remain", metrics.max_partition);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (score, count) in &result.distribution {
        let pct = (*count as f64 / result.total_answers as f64) * 100.0;
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░"
                .repeat(40_usize.saturating_sub(bar_width))
                .bright_black()
        );
        println!("   {}  {bar} {count:4} ({pct:5.1}%)", colored_score(score));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(bar: &str) -> usize {
        bar.chars().filter(|&c| c == '█').count()
    }

    #[test]
    fn entropy_bar_uses_fixed_ceiling() {
        // log2(14) bits fills the bar; log2(5) bits does not
        assert_eq!(filled(&entropy_bar(14f64.log2(), 30)), 30);
        assert!(filled(&entropy_bar(5f64.log2(), 30)) < 30);
    }

    #[test]
    fn entropy_bar_compares_across_guesses() {
        assert!(filled(&entropy_bar(1.5, 30)) < filled(&entropy_bar(3.0, 30)));
        assert_eq!(entropy_bar(0.0, 10), "░".repeat(10));
    }
}
