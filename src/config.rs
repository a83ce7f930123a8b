use crate::daily::WrapMode;
use crate::error::{LexResult, LexidayError};
use crate::scorer::StatSpan;
use chrono::NaiveDate;
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_EPOCH: &str = "2022-04-09";

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub weights: ScoringWeights,
    #[command(flatten)]
    pub span: SpanParams,
    #[command(flatten)]
    pub daily: DailyParams,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScoringWeights {
    // === COMPOSITE WEIGHTS ===
    // Guess accuracy dominates; the three weights sum to 1.0
    #[arg(long, default_value_t = 0.70)]
    pub guess_weight: f64,
    #[arg(long, default_value_t = 0.14)]
    pub success_weight: f64,
    #[arg(long, default_value_t = 0.16)]
    pub speed_weight: f64,

    // === NORMALIZATION ===
    #[arg(long, default_value_t = 6.0)]
    pub worst_guess_score: f64,
    #[arg(long, default_value_t = 5.0)]
    pub guess_score_range: f64,
    #[arg(long, default_value_t = 100.0)]
    pub max_success_ratio: f64,
    // Assumed ceiling, slower times go negative
    #[arg(long, default_value_t = 300.0)]
    pub max_speed_score: f64,

    // === OUTPUT ===
    #[arg(long, default_value_t = 1000.0)]
    pub score_scale: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            guess_weight: 0.70,
            success_weight: 0.14,
            speed_weight: 0.16,
            worst_guess_score: 6.0,
            guess_score_range: 5.0,
            max_success_ratio: 100.0,
            max_speed_score: 300.0,
            score_scale: 1000.0,
        }
    }
}

/// Experience constants for the two aggregation modes.
#[derive(Args, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SpanParams {
    #[arg(long, default_value_t = 120.0)]
    pub all_time_impact_cap: f64,
    #[arg(long, default_value_t = 10.0)]
    pub all_time_penalty_games: f64,
    #[arg(long, default_value_t = 3.0)]
    pub windowed_impact_cap: f64,
    #[arg(long, default_value_t = 3.0)]
    pub windowed_penalty_games: f64,
}

impl Default for SpanParams {
    fn default() -> Self {
        Self {
            all_time_impact_cap: 120.0,
            all_time_penalty_games: 10.0,
            windowed_impact_cap: 3.0,
            windowed_penalty_games: 3.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpanLimits {
    /// Games count at which the log scale stops growing.
    pub impact_cap: f64,
    /// Games count at which the low-sample penalty reaches 1.0.
    pub penalty_games: f64,
}

impl SpanParams {
    pub fn limits(&self, span: StatSpan) -> SpanLimits {
        match span {
            StatSpan::AllTime => SpanLimits {
                impact_cap: self.all_time_impact_cap,
                penalty_games: self.all_time_penalty_games,
            },
            StatSpan::Windowed(_) => SpanLimits {
                impact_cap: self.windowed_impact_cap,
                penalty_games: self.windowed_penalty_games,
            },
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DailyParams {
    // UTC date that maps to the first word of the list
    #[arg(long, default_value = DEFAULT_EPOCH)]
    pub epoch: String,
    #[arg(long, value_enum, default_value_t = WrapMode::Modulo)]
    pub wrap: WrapMode,
}

impl Default for DailyParams {
    fn default() -> Self {
        Self {
            epoch: DEFAULT_EPOCH.to_string(),
            wrap: WrapMode::Modulo,
        }
    }
}

impl DailyParams {
    pub fn get_epoch(&self) -> LexResult<NaiveDate> {
        NaiveDate::parse_from_str(self.epoch.trim(), "%Y-%m-%d").map_err(|e| {
            LexidayError::Config(format!("Invalid epoch date '{}': {}", self.epoch, e))
        })
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> LexResult<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Applies only the arguments the user actually typed on top of `self`.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        self.weights.merge_from_cli(&cli.weights, matches);
        self.span.merge_from_cli(&cli.span, matches);
        self.daily.merge_from_cli(&cli.daily, matches);
    }
}

macro_rules! update_if_present {
    ($target:ident, $source:ident, $matches:ident, $($field:ident),+ $(,)?) => {
        $(
            if $matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                $target.$field = $source.$field.clone();
            }
        )+
    };
}

impl SpanParams {
    pub fn merge_from_cli(&mut self, cli: &SpanParams, matches: &ArgMatches) {
        update_if_present!(
            self,
            cli,
            matches,
            all_time_impact_cap,
            all_time_penalty_games,
            windowed_impact_cap,
            windowed_penalty_games,
        );
    }
}

impl DailyParams {
    pub fn merge_from_cli(&mut self, cli: &DailyParams, matches: &ArgMatches) {
        update_if_present!(self, cli, matches, epoch, wrap);
    }
}

impl ScoringWeights {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> LexResult<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn merge_from_cli(&mut self, cli: &ScoringWeights, matches: &ArgMatches) {
        update_if_present!(
            self,
            cli,
            matches,
            guess_weight,
            success_weight,
            speed_weight,
            worst_guess_score,
            guess_score_range,
            max_success_ratio,
            max_speed_score,
            score_scale,
        );
    }

    pub fn weight_sum(&self) -> f64 {
        self.guess_weight + self.success_weight + self.speed_weight
    }
}
