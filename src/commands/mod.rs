//! Command implementations

pub mod analyze;
pub mod simple;
pub mod solve;
pub mod test_all;

pub use analyze::{AnalysisResult, analyze_word, rank_openers};
pub use simple::{SessionSummary, run_session, run_simple};
pub use solve::solve_word;
pub use test_all::{
    BatchOptions, TestAllStatistics, WordTestResult, print_test_all_statistics, run_test_all,
    select_targets, summarize,
};
