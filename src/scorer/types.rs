use crate::error::LexidayError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Integer flag the stats service uses for all-time aggregation.
pub const ALL_TIME_SENTINEL: i64 = -1;

/// Aggregation window the raw statistics were collected over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StatSpan {
    #[default]
    AllTime,
    /// Stats over a short span (usually a day count). The value itself is not
    /// used by the formula.
    Windowed(i64),
}

impl StatSpan {
    /// `-1` is all-time, every other value is a window.
    pub fn from_sentinel(value: i64) -> Self {
        if value == ALL_TIME_SENTINEL {
            Self::AllTime
        } else {
            Self::Windowed(value)
        }
    }

    pub fn sentinel(&self) -> i64 {
        match self {
            Self::AllTime => ALL_TIME_SENTINEL,
            Self::Windowed(span) => *span,
        }
    }

    pub fn is_all_time(&self) -> bool {
        matches!(self, Self::AllTime)
    }
}

impl From<i64> for StatSpan {
    fn from(value: i64) -> Self {
        Self::from_sentinel(value)
    }
}

impl fmt::Display for StatSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllTime => write!(f, "all-time"),
            Self::Windowed(span) => write!(f, "windowed({})", span),
        }
    }
}

impl FromStr for StatSpan {
    type Err = LexidayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.to_lowercase().as_str() {
            "all" | "all-time" | "all_time" | "alltime" => Ok(Self::AllTime),
            other => other.parse::<i64>().map(Self::from_sentinel).map_err(|_| {
                LexidayError::Validation(format!(
                    "Stat span '{}' is neither 'all-time' nor an integer",
                    s
                ))
            }),
        }
    }
}

/// Raw per-player statistics as delivered by the stats service.
///
/// Nothing here is range-checked: out-of-range values flow through the
/// formula and extrapolate linearly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub games_played: u32,
    /// Guesses needed to solve, nominally 1 (best) to 6 (worst).
    pub guess_score: i32,
    /// Percentage of games solved, 0 to 100.
    pub success_ratio: f64,
    /// Time metric, lower is better.
    pub speed_score: f64,
    pub stat_span: StatSpan,
}

impl PlayerStats {
    pub fn new(
        games_played: u32,
        guess_score: i32,
        success_ratio: f64,
        speed_score: f64,
        stat_span: StatSpan,
    ) -> Self {
        Self {
            games_played,
            guess_score,
            success_ratio,
            speed_score,
            stat_span,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreDetails {
    // Normalized terms (nominally 0..1, higher is better)
    pub guess_norm: f64,
    pub success_norm: f64,
    pub speed_norm: f64,

    // Weighted composite
    pub base_score: f64,

    // Experience factors
    pub log_scale: f64,
    pub inverse_game_penalty: f64,

    pub final_score: f64,
    pub score: i64,
}
