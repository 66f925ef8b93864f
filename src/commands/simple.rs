//! Simple interactive CLI mode
//!
//! Line-based session: the solver suggests a guess, the player types the
//! `X`/`Y`/`G` feedback they got back, and the next guess follows.

use crate::core::Pattern;
use crate::output::formatters::pattern_to_emoji;
use crate::solver::entropy::calculate_metrics;
use crate::solver::{Attempt, GuessReport, Outcome, SolveError, Solver};
use anyhow::Result;
use colored::Colorize;
use log::{info, warn};
use std::io::{self, BufRead, Write};

/// Candidates are listed once the pool is at most this small
const SHOW_CANDIDATES_BELOW: usize = 10;

/// What happened over an interactive session
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    /// Guess counts of every solved attempt, in order
    pub solved: Vec<usize>,
    /// Attempts abandoned because the feedback contradicted itself
    pub contradictions: usize,
    /// Attempts abandoned with `new`
    pub abandoned: usize,
}

/// Run the interactive mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading from stdin or writing to stdout fails.
pub fn run_simple(solver: &Solver) -> Result<SessionSummary> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(solver, stdin.lock(), stdout.lock())
}

/// Run an interactive session over arbitrary input and output
///
/// Input lines are one of:
/// - a feedback pattern such as `XYGXX` (case-insensitive)
/// - `win`, shorthand for `GGGGG`
/// - `new` to abandon the attempt and start over
/// - `quit` to end the session
///
/// Malformed feedback re-prompts without touching the attempt. Feedback that
/// eliminates every candidate is reported and a fresh attempt begins. End of
/// input ends the session like `quit`.
///
/// # Errors
///
/// Returns an error on I/O failure.
pub fn run_session<R: BufRead, W: Write>(
    solver: &Solver,
    mut input: R,
    mut out: W,
) -> Result<SessionSummary> {
    print_banner(&mut out)?;

    let mut summary = SessionSummary::default();
    let mut attempt = solver.attempt();
    let mut report = attempt.next_guess()?;

    loop {
        print_turn(&mut out, &attempt, &report)?;

        let Some(line) = prompt(&mut input, &mut out, "Feedback (X/Y/G, 'win', 'new', 'quit')")?
        else {
            break;
        };

        let feedback = match line.to_lowercase().as_str() {
            "quit" | "q" | "exit" => break,
            "new" | "n" => {
                summary.abandoned += 1;
                writeln!(out, "\n{}\n", "New game started.".bright_cyan())?;
                attempt.reset();
                report = attempt.next_guess()?;
                continue;
            }
            "win" => Pattern::PERFECT.to_string(),
            _ => line,
        };

        match attempt.observe_str(&feedback) {
            Ok(Outcome::Continue(next)) => report = next,
            Ok(Outcome::Solved { guesses }) => {
                summary.solved.push(guesses);
                print_solved(&mut out, &attempt, guesses)?;
                info!("session attempt solved in {guesses} guesses");

                let again = prompt(&mut input, &mut out, "Play again? (yes/no)")?;
                if !matches!(again.as_deref().map(str::to_lowercase).as_deref(), Some("yes" | "y")) {
                    break;
                }
                attempt.reset();
                report = attempt.next_guess()?;
            }
            Err(SolveError::MalformedFeedback(e)) => {
                writeln!(out, "{} {e}\n", "Invalid feedback:".red())?;
            }
            Err(e @ SolveError::EmptyPool { .. }) => {
                summary.contradictions += 1;
                warn!("{e}");
                writeln!(out, "\n{} {e}", "No words left!".red().bold())?;
                writeln!(out, "Starting a new game.\n")?;
                attempt.reset();
                report = attempt.next_guess()?;
            }
            Err(e) => return Err(e.into()),
        }
    }

    writeln!(out, "\nThanks for playing!\n")?;
    Ok(summary)
}

fn print_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(60).cyan())?;
    writeln!(out, "{}", "  Wordle Entropy Solver - Interactive Mode".bright_cyan().bold())?;
    writeln!(out, "{}\n", "═".repeat(60).cyan())?;
    writeln!(out, "After each guess, enter the colours you got back:")?;
    writeln!(out, "  G = green (right letter, right spot)")?;
    writeln!(out, "  Y = yellow (right letter, wrong spot)")?;
    writeln!(out, "  X = grey (letter not in the word)\n")?;
    Ok(())
}

fn print_turn<W: Write>(out: &mut W, attempt: &Attempt<'_>, report: &GuessReport) -> io::Result<()> {
    let turn = attempt.history().len() + 1;
    writeln!(out, "{}", "─".repeat(60))?;
    writeln!(out, "Turn {turn}: {} candidates remaining", report.pool_size)?;
    writeln!(out, "{}", "─".repeat(60))?;

    writeln!(
        out,
        "\nSuggested guess: {}",
        report.guess.text().to_uppercase().bright_yellow().bold()
    )?;

    match report.score {
        Some(score) => {
            writeln!(out, "   Entropy:          {:.3} bits", score.entropy)?;
            writeln!(out, "   Popularity:       {:.3}", score.popularity)?;
            writeln!(out, "   Score:            {:.3}", score.score)?;
        }
        None => writeln!(out, "   (opening guess)")?,
    }

    let candidates = attempt.candidates();
    if candidates.len() <= SHOW_CANDIDATES_BELOW {
        let metrics = calculate_metrics(&report.guess, candidates);
        writeln!(out, "   Worst case:       {} candidates", metrics.max_partition)?;
        writeln!(out, "\nRemaining candidates:")?;
        for candidate in candidates {
            writeln!(out, "  • {}", candidate.text().to_uppercase())?;
        }
    }
    writeln!(out)
}

fn print_solved<W: Write>(out: &mut W, attempt: &Attempt<'_>, guesses: usize) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(60).bright_cyan())?;
    writeln!(
        out,
        "  {} in {} {}",
        "Solved".bright_green().bold(),
        guesses.to_string().bright_cyan().bold(),
        if guesses == 1 { "guess" } else { "guesses" }
    )?;
    for (i, (word, pattern)) in attempt.history().iter().enumerate() {
        writeln!(
            out,
            "    {}. {} {}",
            (i + 1).to_string().bright_black(),
            word.text().to_uppercase().bright_white().bold(),
            pattern_to_emoji(*pattern)
        )?;
    }
    writeln!(out, "{}\n", "═".repeat(60).bright_cyan())
}

/// Print `label` and read one trimmed line, skipping blank ones; `None` at end of input
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> io::Result<Option<String>> {
    loop {
        write!(out, "{label}: ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed = line.trim();
        if !trimmed.is_empty() {
            return Ok(Some(trimmed.to_string()));
        }
    }
}
