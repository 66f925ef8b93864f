//! Wordle Entropy Solver - CLI
//!
//! Entropy-driven Wordle solver with interactive, single-word, batch and
//! analysis modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use wordle_entropy::{
    commands::{
        BatchOptions, analyze_word, print_test_all_statistics, rank_openers, run_simple,
        run_test_all, select_targets, solve_word,
    },
    core::{DEFAULT_POPULARITY_OFFSET, PopularityTransform, Word},
    dictionary::{
        Dictionary, FrequencyKind, embedded_dictionary,
        loader::{load_from_file, load_word_list},
    },
    output::{print_analysis_result, print_openers, print_solve_result},
    solver::{DEFAULT_OPENING_GUESS, DEFAULT_POPULARITY_WEIGHT, Solver, SolverConfig},
};

#[derive(Parser)]
#[command(
    name = "wordle_entropy",
    about = "Wordle solver choosing guesses by expected information gain",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary file: JSON object of word to number, or one "word [number]" per line.
    /// Defaults to the built-in word-frequency sample
    #[arg(short = 'd', long, global = true)]
    dictionary: Option<PathBuf>,

    /// How to read dictionary numbers: raw usage frequencies or scores in [0, 1]
    #[arg(long, global = true, value_enum, default_value_t = FrequencyKind::Raw)]
    frequencies: FrequencyKind,

    /// Shift added to ln(frequency) before the logistic squash
    #[arg(long, global = true, default_value_t = DEFAULT_POPULARITY_OFFSET, allow_negative_numbers = true)]
    popularity_offset: f64,

    /// Weight of the popularity score against entropy; 0 picks on entropy alone
    #[arg(short = 'p', long, global = true, default_value_t = DEFAULT_POPULARITY_WEIGHT)]
    popularity_weight: f64,

    /// Opening guess used by every attempt
    #[arg(short = 'o', long, global = true, default_value = DEFAULT_OPENING_GUESS)]
    opening: String,

    /// Compute the opening guess from the dictionary instead of using --opening
    #[arg(long, global = true)]
    compute_opening: bool,

    /// Log each round's selection at debug level (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode: enter the feedback you get for each suggested guess (default)
    Simple,

    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show the candidate counts and score breakdown of every round
        #[arg(short, long)]
        breakdown: bool,
    },

    /// Analyze the entropy of a specific word as an opening guess
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Rank opening guesses over the whole dictionary
    Openers {
        /// Number of guesses to list
        #[arg(short = 'n', long, default_value = "10")]
        top: usize,
    },

    /// Solve many secret words and report statistics
    TestAll {
        /// File of secret words, one per line (default: the whole dictionary)
        #[arg(short, long)]
        targets: Option<PathBuf>,

        /// Limit number of words to test
        #[arg(short, long)]
        limit: Option<usize>,

        /// Test a random sample of this many words instead
        #[arg(short, long, conflicts_with = "limit")]
        sample: Option<usize>,

        /// Seed for --sample
        #[arg(long, requires = "sample")]
        seed: Option<u64>,

        /// Hide the progress bar
        #[arg(short, long)]
        quiet: bool,
    },
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn load_dictionary(cli: &Cli) -> Result<Dictionary> {
    let transform = PopularityTransform::new(cli.popularity_offset);

    match &cli.dictionary {
        Some(path) => load_from_file(path, cli.frequencies, &transform)
            .with_context(|| format!("failed to load dictionary {}", path.display())),
        None => embedded_dictionary(&transform).context("built-in dictionary is corrupt"),
    }
}

fn build_solver(cli: &Cli, dictionary: Dictionary) -> Result<Solver> {
    let mut config = SolverConfig::new()
        .with_popularity_weight(cli.popularity_weight)
        .context("invalid --popularity-weight")?;

    if !cli.compute_opening {
        let opening = Word::new(&cli.opening)
            .with_context(|| format!("invalid --opening '{}'", cli.opening))?;
        config = config.with_opening(opening);
    }

    let (vocabulary, popularity) = dictionary.into_parts();
    Solver::new(vocabulary, popularity, &config).context("failed to build solver")
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let dictionary = load_dictionary(&cli)?;
    let solver = build_solver(&cli, dictionary)?;

    // Default to the interactive mode if no command given
    match cli.command.as_ref().unwrap_or(&Commands::Simple) {
        Commands::Simple => run_simple(&solver).map(|_| ()),
        Commands::Solve { word, breakdown } => {
            let result = solve_word(word, &solver)?;
            print_solve_result(&result, *breakdown);
            Ok(())
        }
        Commands::Analyze { word } => {
            let result = analyze_word(word, &solver)?;
            print_analysis_result(&result);
            Ok(())
        }
        Commands::Openers { top } => {
            print_openers(&rank_openers(&solver, *top));
            Ok(())
        }
        Commands::TestAll {
            targets,
            limit,
            sample,
            seed,
            quiet,
        } => {
            let options = BatchOptions {
                limit: *limit,
                sample: *sample,
                seed: *seed,
                show_progress: !quiet,
            };
            run_test_all_command(&solver, targets.as_deref(), &options)
        }
    }
}

fn run_test_all_command(
    solver: &Solver,
    targets_path: Option<&Path>,
    options: &BatchOptions,
) -> Result<()> {
    let all_targets = match targets_path {
        Some(path) => load_word_list(path)
            .with_context(|| format!("failed to load targets {}", path.display()))?,
        None => solver.vocabulary().to_vec(),
    };
    let targets = select_targets(&all_targets, options);

    println!("\n{}", "═".repeat(70));
    println!(" Wordle Entropy Solver Test ");
    println!("{}", "═".repeat(70));
    println!("\nTesting {} of {} secret words", targets.len(), all_targets.len());
    println!("Opening guess: {}", solver.opening());
    println!("Popularity weight: {}", solver.popularity_weight());
    println!();

    let stats = run_test_all(solver, &targets, options.show_progress);
    print_test_all_statistics(&stats);
    Ok(())
}
