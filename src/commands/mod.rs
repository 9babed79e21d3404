//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod play;
pub mod score;
pub mod solve;
pub mod test_all;

pub use analyze::{AnalysisResult, analyze_code, partition_by_feedback};
pub use benchmark::{BenchmarkResult, run_benchmark};
pub use play::{run_play, run_play_with};
pub use score::{ScoreResult, score_codes};
pub use solve::{GuessStep, SolveConfig, SolveResult, solve_code};
pub use test_all::{TestAllStatistics, print_test_all_statistics, run_test_all};
