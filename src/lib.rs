//! Wordle Entropy Solver
//!
//! Picks each guess by expected information gain over the words still
//! possible, nudged toward common words by a popularity prior.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_entropy::core::{PopularityModel, Word};
//! use wordle_entropy::solver::{Outcome, Solver, SolverConfig};
//!
//! let vocabulary: Vec<Word> = ["abcde", "abcdf", "zzzzz"]
//!     .iter()
//!     .map(|w| Word::new(w).unwrap())
//!     .collect();
//! let config = SolverConfig::new()
//!     .with_opening(Word::new("abcde").unwrap())
//!     .with_popularity_weight(0.0)
//!     .unwrap();
//! let solver = Solver::new(vocabulary, PopularityModel::default(), &config).unwrap();
//!
//! // Interactive use: report the colours the game showed
//! let mut attempt = solver.attempt();
//! let first = attempt.next_guess().unwrap();
//! assert_eq!(first.guess.text(), "abcde");
//!
//! let Outcome::Continue(second) = attempt.observe_str("GGGGX").unwrap() else {
//!     unreachable!()
//! };
//! assert_eq!(second.guess.text(), "abcdf");
//! assert_eq!(attempt.observe_str("GGGGG").unwrap(), Outcome::Solved { guesses: 2 });
//! ```

// Core domain types
pub mod core;

// Guess selection and the attempt state machine
pub mod solver;

// Vocabulary and popularity loading
pub mod dictionary;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
