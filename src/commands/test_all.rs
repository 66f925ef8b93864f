//! Test all answers - batch solver evaluation
//!
//! Runs independent attempts against many secret words in parallel and
//! summarises how many guesses each took.

use crate::core::Word;
use crate::solver::{SolveError, Solver};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use log::warn;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Words listed as hardest in the summary
const WORST_WORDS_SHOWN: usize = 10;

/// Result from testing a single word
#[derive(Debug, Clone, PartialEq)]
pub struct WordTestResult {
    pub word: Word,
    /// Guesses needed, or the error that ended the attempt
    pub outcome: Result<usize, SolveError>,
}

/// Statistics from a batch run
#[derive(Debug)]
pub struct TestAllStatistics {
    pub total_words: usize,
    pub solved: usize,
    /// Attempts that ended in a contradiction, e.g. secrets outside the vocabulary
    pub failed: Vec<Word>,
    /// Guess count to number of words solved in that many guesses
    pub guess_distribution: BTreeMap<usize, usize>,
    pub total_time: Duration,
    pub average_guesses: f64,
    pub max_guesses: usize,
    pub min_guesses: usize,
    /// Slowest solves, most guesses first
    pub worst_words: Vec<(Word, usize)>,
}

/// How the batch picks its secrets
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchOptions {
    /// Test only the first `limit` targets
    pub limit: Option<usize>,
    /// Test a random sample of this size instead
    pub sample: Option<usize>,
    /// Seed for the sample; random when absent
    pub seed: Option<u64>,
    pub show_progress: bool,
}

/// Narrow `targets` according to `options`
///
/// A sample takes precedence over a limit. Samples are drawn without
/// replacement and keep the order they were drawn in.
#[must_use]
pub fn select_targets(targets: &[Word], options: &BatchOptions) -> Vec<Word> {
    if let Some(size) = options.sample {
        let mut rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        return targets.choose_multiple(&mut rng, size).copied().collect();
    }

    let limit = options.limit.unwrap_or(targets.len());
    targets.iter().take(limit).copied().collect()
}

/// Run one automated attempt per target
///
/// Attempts share the solver read-only and run on the rayon pool.
#[must_use]
pub fn run_test_all(solver: &Solver, targets: &[Word], show_progress: bool) -> TestAllStatistics {
    let pb = if show_progress {
        ProgressBar::new(targets.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let start = Instant::now();

    let results: Vec<WordTestResult> = targets
        .par_iter()
        .map(|&word| {
            let outcome = solver.solve(&word).map(|result| result.guesses);
            if let Err(e) = &outcome {
                warn!("{word}: {e}");
            }
            pb.inc(1);
            WordTestResult { word, outcome }
        })
        .collect();

    pb.finish_with_message("Complete!");

    summarize(&results, start.elapsed())
}

/// Fold per-word results into statistics
#[must_use]
pub fn summarize(results: &[WordTestResult], total_time: Duration) -> TestAllStatistics {
    let mut guess_distribution = BTreeMap::new();
    let mut failed = Vec::new();
    let mut solved_words = Vec::new();

    for result in results {
        match result.outcome {
            Ok(guesses) => {
                *guess_distribution.entry(guesses).or_insert(0) += 1;
                solved_words.push((result.word, guesses));
            }
            Err(_) => failed.push(result.word),
        }
    }

    let solved = solved_words.len();
    let total_guesses: usize = solved_words.iter().map(|(_, n)| n).sum();
    let average_guesses = if solved > 0 {
        total_guesses as f64 / solved as f64
    } else {
        0.0
    };

    let max_guesses = solved_words.iter().map(|(_, n)| *n).max().unwrap_or(0);
    let min_guesses = solved_words.iter().map(|(_, n)| *n).min().unwrap_or(0);

    let mut worst_words = solved_words;
    worst_words.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    worst_words.truncate(WORST_WORDS_SHOWN);

    TestAllStatistics {
        total_words: results.len(),
        solved,
        failed,
        guess_distribution,
        total_time,
        average_guesses,
        max_guesses,
        min_guesses,
        worst_words,
    }
}

/// Print batch statistics
pub fn print_test_all_statistics(stats: &TestAllStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Test Results ");
    println!("{}", "═".repeat(70));

    let total = stats.total_words.max(1) as f64;

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Total words tested:  {}", stats.total_words);
    println!(
        "  Successfully solved: {} {}",
        stats.solved,
        format!("({:.1}%)", stats.solved as f64 / total * 100.0).green()
    );
    if !stats.failed.is_empty() {
        println!(
            "  Contradictions:      {} {}",
            stats.failed.len(),
            format!("({:.1}%)", stats.failed.len() as f64 / total * 100.0).red()
        );
    }
    println!(
        "  Average guesses:     {}",
        format!("{:.3}", stats.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!("  Best / worst:        {} / {}", stats.min_guesses, stats.max_guesses);
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );
    println!(
        "  Time per word:       {:.1}ms",
        stats.total_time.as_secs_f64() * 1000.0 / total
    );

    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    let max_count = stats.guess_distribution.values().copied().max().unwrap_or(1);
    for (&guesses, &count) in &stats.guess_distribution {
        let percentage = count as f64 / stats.solved.max(1) as f64 * 100.0;
        let bar_len = (count * 40 / max_count).max(usize::from(count > 0));
        let bar = format!(
            "{}{}",
            "█".repeat(bar_len).green(),
            "░".repeat(40_usize.saturating_sub(bar_len)).bright_black()
        );
        println!("  {guesses:2} guesses: {bar} {count:4} ({percentage:5.1}%)");
    }

    if !stats.worst_words.is_empty() {
        println!("\n😰 {}", "Hardest Words".yellow().bold());
        for (word, guesses) in &stats.worst_words {
            println!("  {} ({guesses} guesses)", word.text().to_uppercase().yellow());
        }
    }

    if !stats.failed.is_empty() {
        println!("\n❌ {}", "Contradicted".red().bold());
        for word in stats.failed.iter().take(WORST_WORDS_SHOWN) {
            println!("  {}", word.text().to_uppercase().red());
        }
    }
}
