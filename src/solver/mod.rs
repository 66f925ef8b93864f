//! Wordle solving
//!
//! The entropy engine, the candidate pool, and the solver state machine that
//! ties them together across rounds.

mod config;
mod engine;
pub mod entropy;
mod error;
mod pool;

pub use config::{DEFAULT_OPENING_GUESS, DEFAULT_POPULARITY_WEIGHT, SolverConfig};
pub use engine::{Attempt, AttemptResult, AttemptState, GuessReport, Outcome, Round, Solver};
pub use error::SolveError;
pub use pool::CandidatePool;
