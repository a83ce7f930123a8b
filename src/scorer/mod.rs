pub mod engine;
pub mod types;

pub use self::types::{PlayerStats, ScoreDetails, StatSpan, ALL_TIME_SENTINEL};
use crate::config::{Config, ScoringWeights, SpanParams};
use tracing::debug;

/// Player score calculator. Holds only the tuning constants, so it is cheap
/// to clone and safe to share between threads.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scorer {
    pub weights: ScoringWeights,
    pub span: SpanParams,
}

impl Scorer {
    pub fn new(weights: ScoringWeights, span: SpanParams) -> Self {
        Self { weights, span }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.weights.clone(), config.span.clone())
    }

    /// Leaderboard score. Zero games always yields 0.
    pub fn score(&self, stats: &PlayerStats) -> i64 {
        engine::score_debug(self, stats).score
    }

    /// Every intermediate term of the formula, for reports.
    pub fn score_debug(&self, stats: &PlayerStats) -> ScoreDetails {
        let details = engine::score_debug(self, stats);
        debug!(
            "score {} ({}): base={:.4} log={:.4} penalty={:.4}",
            details.score,
            stats.stat_span,
            details.base_score,
            details.log_scale,
            details.inverse_game_penalty
        );
        details
    }
}

/// Scores with the stock constants, taking the span as the integer sentinel
/// (`-1` for all-time, anything else for windowed stats).
pub fn calculate_player_score(
    games_played: u32,
    guess_score: i32,
    success_ratio: f64,
    speed_score: f64,
    stat_span: i64,
) -> i64 {
    Scorer::default().score(&PlayerStats::new(
        games_played,
        guess_score,
        success_ratio,
        speed_score,
        StatSpan::from_sentinel(stat_span),
    ))
}
