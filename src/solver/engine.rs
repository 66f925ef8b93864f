//! Main Wordle solver interface
//!
//! [`Solver`] holds what every attempt shares: the vocabulary, the popularity
//! prior and the resolved opening guess. [`Attempt`] is one puzzle: it owns a
//! candidate pool and the guess/feedback history and steps through
//! `AwaitingFirstGuess → AwaitingFeedback → Solved`.

use super::config::SolverConfig;
use super::entropy::{ScoredGuess, select_best_guess};
use super::error::SolveError;
use super::pool::CandidatePool;
use crate::core::{Pattern, PopularityModel, Word};
use log::{debug, info};

/// Main Wordle solver
pub struct Solver {
    vocabulary: Vec<Word>,
    popularity: PopularityModel,
    popularity_weight: f64,
    opening: Word,
}

impl Solver {
    /// Create a solver over `vocabulary`
    ///
    /// If the configuration has no opening guess, the highest-scoring word over
    /// the full vocabulary is computed here, once, and reused by every attempt.
    ///
    /// # Errors
    /// Returns `SolveError::EmptyVocabulary` if `vocabulary` is empty.
    pub fn new(
        vocabulary: Vec<Word>,
        popularity: PopularityModel,
        config: &SolverConfig,
    ) -> Result<Self, SolveError> {
        if vocabulary.is_empty() {
            return Err(SolveError::EmptyVocabulary);
        }

        let popularity_weight = config.popularity_weight();
        let opening = match config.opening() {
            Some(word) => word,
            None => {
                info!(
                    "computing opening guess over {} words",
                    vocabulary.len()
                );
                let best = select_best_guess(&vocabulary, &popularity, popularity_weight)
                    .ok_or(SolveError::EmptyVocabulary)?;
                info!(
                    "opening guess {} ({:.3} bits, score {:.3})",
                    best.word, best.entropy, best.score
                );
                best.word
            }
        };

        Ok(Self {
            vocabulary,
            popularity,
            popularity_weight,
            opening,
        })
    }

    /// The first guess of every attempt
    #[must_use]
    pub const fn opening(&self) -> Word {
        self.opening
    }

    #[must_use]
    pub fn vocabulary(&self) -> &[Word] {
        &self.vocabulary
    }

    #[must_use]
    pub const fn popularity(&self) -> &PopularityModel {
        &self.popularity
    }

    #[must_use]
    pub const fn popularity_weight(&self) -> f64 {
        self.popularity_weight
    }

    /// Start a new attempt with every word live
    #[must_use]
    pub fn attempt(&self) -> Attempt<'_> {
        Attempt {
            solver: self,
            pool: CandidatePool::new(self.vocabulary.clone()),
            history: Vec::new(),
            current: None,
            state: AttemptState::AwaitingFirstGuess,
        }
    }

    /// Solve for a known `target`, taking feedback from the pattern oracle
    ///
    /// # Errors
    /// Returns `SolveError::EmptyPool` if the target is not in the vocabulary
    /// and every candidate gets eliminated.
    ///
    /// # Examples
    /// ```
    /// use wordle_entropy::core::{PopularityModel, Word};
    /// use wordle_entropy::solver::{Solver, SolverConfig};
    ///
    /// let vocabulary: Vec<Word> = ["abcde", "abcdf", "zzzzz"]
    ///     .iter()
    ///     .map(|w| Word::new(w).unwrap())
    ///     .collect();
    /// let config = SolverConfig::new()
    ///     .with_opening(Word::new("abcde").unwrap())
    ///     .with_popularity_weight(0.0)
    ///     .unwrap();
    /// let solver = Solver::new(vocabulary, PopularityModel::default(), &config).unwrap();
    ///
    /// let result = solver.solve(&Word::new("abcdf").unwrap()).unwrap();
    /// assert_eq!(result.guesses, 2);
    /// ```
    pub fn solve(&self, target: &Word) -> Result<AttemptResult, SolveError> {
        let mut attempt = self.attempt();
        let mut report = attempt.next_guess()?;
        let mut rounds = Vec::new();

        loop {
            let feedback = Pattern::calculate(&report.guess, target);
            rounds.push(Round { report, feedback });

            match attempt.observe(feedback)? {
                Outcome::Solved { guesses } => {
                    return Ok(AttemptResult {
                        target: *target,
                        guesses,
                        rounds,
                    });
                }
                Outcome::Continue(next) => report = next,
            }
        }
    }
}

/// Where an attempt is in its round cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptState {
    /// Nothing guessed yet; the next call emits the opening guess
    AwaitingFirstGuess,
    /// A guess is out and its feedback is expected
    AwaitingFeedback,
    /// All-green feedback received
    Solved,
    /// Feedback eliminated every candidate
    Contradicted,
}

/// The guess emitted for a round plus what it was chosen from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuessReport {
    pub guess: Word,
    /// Live candidates the guess was selected over
    pub pool_size: usize,
    /// Score breakdown; absent for the precomputed opening guess
    pub score: Option<ScoredGuess>,
}

/// Result of feeding one feedback pattern to an attempt
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    Solved { guesses: usize },
    Continue(GuessReport),
}

/// One completed round of an automated attempt
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Round {
    pub report: GuessReport,
    pub feedback: Pattern,
}

/// A solved automated attempt
#[derive(Debug, Clone, PartialEq)]
pub struct AttemptResult {
    pub target: Word,
    /// Number of guesses up to and including the all-green one
    pub guesses: usize,
    pub rounds: Vec<Round>,
}

/// One puzzle attempt
pub struct Attempt<'a> {
    solver: &'a Solver,
    pool: CandidatePool,
    history: Vec<(Word, Pattern)>,
    current: Option<Word>,
    state: AttemptState,
}

impl Attempt<'_> {
    #[must_use]
    pub const fn state(&self) -> AttemptState {
        self.state
    }

    #[must_use]
    pub const fn is_solved(&self) -> bool {
        matches!(self.state, AttemptState::Solved)
    }

    /// Guess/feedback pairs observed so far, oldest first
    #[must_use]
    pub fn history(&self) -> &[(Word, Pattern)] {
        &self.history
    }

    /// Live candidates
    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        self.pool.live()
    }

    /// The guess awaiting feedback, if any
    #[must_use]
    pub const fn current_guess(&self) -> Option<Word> {
        self.current
    }

    /// Emit the opening guess
    ///
    /// # Errors
    /// Returns `SolveError::OutOfTurn` unless the attempt has not guessed yet.
    pub fn next_guess(&mut self) -> Result<GuessReport, SolveError> {
        if self.state != AttemptState::AwaitingFirstGuess {
            return Err(SolveError::OutOfTurn("opening guess already made"));
        }

        let guess = self.solver.opening;
        self.current = Some(guess);
        self.state = AttemptState::AwaitingFeedback;
        debug!("round 1: opening with {guess} over {} words", self.pool.len());

        Ok(GuessReport {
            guess,
            pool_size: self.pool.len(),
            score: None,
        })
    }

    /// Record feedback for the current guess and produce the next guess
    ///
    /// All-green feedback solves the attempt. Otherwise the pool is filtered on
    /// (current guess, feedback) and the best remaining word becomes the next guess.
    ///
    /// # Errors
    /// - `SolveError::OutOfTurn` if no guess is awaiting feedback
    /// - `SolveError::EmptyPool` if the feedback eliminates every candidate; the
    ///   attempt cannot continue after this
    pub fn observe(&mut self, feedback: Pattern) -> Result<Outcome, SolveError> {
        let guess = match (self.state, self.current) {
            (AttemptState::AwaitingFeedback, Some(guess)) => guess,
            _ => return Err(SolveError::OutOfTurn("no guess is awaiting feedback")),
        };

        self.history.push((guess, feedback));

        if feedback.is_perfect() {
            self.state = AttemptState::Solved;
            self.current = None;
            debug!("solved with {guess} in {} guesses", self.history.len());
            return Ok(Outcome::Solved {
                guesses: self.history.len(),
            });
        }

        let removed = self.pool.filter(&guess, feedback);
        debug!(
            "{guess} scored {feedback}: eliminated {removed}, {} remain",
            self.pool.len()
        );

        let Some(best) = select_best_guess(
            self.pool.live(),
            &self.solver.popularity,
            self.solver.popularity_weight,
        ) else {
            self.state = AttemptState::Contradicted;
            self.current = None;
            return Err(SolveError::EmptyPool { guess, feedback });
        };

        debug!(
            "round {}: {} (entropy {:.3}, popularity {:.3}, score {:.3})",
            self.history.len() + 1,
            best.word,
            best.entropy,
            best.popularity,
            best.score
        );
        self.current = Some(best.word);

        Ok(Outcome::Continue(GuessReport {
            guess: best.word,
            pool_size: self.pool.len(),
            score: Some(best),
        }))
    }

    /// Parse `X`/`Y`/`G` feedback text and [`observe`](Self::observe) it
    ///
    /// # Errors
    /// Returns `SolveError::MalformedFeedback` for text that is not a pattern,
    /// leaving the attempt untouched, plus anything `observe` returns.
    pub fn observe_str(&mut self, feedback: &str) -> Result<Outcome, SolveError> {
        let pattern: Pattern = feedback.trim().parse()?;
        self.observe(pattern)
    }

    /// Throw away the history and make every word live again
    pub fn reset(&mut self) {
        self.pool.reset();
        self.history.clear();
        self.current = None;
        self.state = AttemptState::AwaitingFirstGuess;
    }
}
