//! Display functions for command results

use super::formatters::{entropy_bar, pattern_to_emoji};
use crate::commands::AnalysisResult;
use crate::solver::AttemptResult;
use crate::solver::entropy::ScoredGuess;
use colored::Colorize;

/// Print the result of solving a word
///
/// With `verbose`, each round also shows the pool it was chosen from and the
/// score breakdown of the guess.
pub fn print_solve_result(result: &AttemptResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, round) in result.rounds.iter().enumerate() {
        let report = &round.report;
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            report.guess.text().to_uppercase(),
            pattern_to_emoji(round.feedback)
        );

        if verbose {
            let after = result
                .rounds
                .get(i + 1)
                .map_or(0, |next| next.report.pool_size);
            println!("  Candidates: {} → {after}", report.pool_size);

            match report.score {
                Some(score) => {
                    println!("  Entropy:    {:.3} bits", score.entropy);
                    println!("  Popularity: {:.3}", score.popularity);
                    println!("  Score:      {:.3}", score.score);
                }
                None => println!("  Opening guess"),
            }
        }
    }

    println!();
    println!(
        "{}",
        format!(
            "✅ Solved in {} {}!",
            result.guesses,
            if result.guesses == 1 { "guess" } else { "guesses" }
        )
        .green()
        .bold()
    );
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "ENTROPY ANALYSIS:".bright_cyan().bold(),
        result.word.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let max_bits = (result.total_candidates.max(1) as f64).log2();
    let bar = entropy_bar(result.entropy, max_bits, 30);

    println!("\n📊 Against {} candidate words:", result.total_candidates);
    println!(
        "   Entropy:     [{}] {}",
        bar.green(),
        format!("{:.3} bits", result.entropy).bright_yellow()
    );
    println!(
        "   Info gain:   {:.1}x reduction",
        result.expected_reduction
    );
    println!(
        "   Expected:    {:.1} candidates remain",
        result.expected_remaining
    );
    println!("   Worst case:  {} candidates remain", result.max_partition);
    println!("   Popularity:  {:.3}", result.popularity);
    println!(
        "   Score:       {}",
        format!("{:.3}", result.score).bright_yellow()
    );
}

/// Print a ranking of opening guesses
pub fn print_openers(ranked: &[ScoredGuess]) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BEST OPENING GUESSES".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!(
        "\n   {:>3}  {:<7} {:>9} {:>11} {:>8}",
        "#", "word", "entropy", "popularity", "score"
    );

    for (i, guess) in ranked.iter().enumerate() {
        println!(
            "   {:>3}  {:<7} {:>9.3} {:>11.3} {:>8}",
            i + 1,
            guess.word.text().to_uppercase(),
            guess.entropy,
            guess.popularity,
            format!("{:.3}", guess.score).bright_yellow()
        );
    }
}
