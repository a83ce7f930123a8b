use super::{PlayerStats, ScoreDetails, Scorer};
use crate::config::ScoringWeights;

/// 1 guess maps to 1.0, the worst guess count maps to 0.0.
#[inline(always)]
pub fn normalize_guess(w: &ScoringWeights, guess_score: i32) -> f64 {
    (w.worst_guess_score - guess_score as f64) / w.guess_score_range
}

#[inline(always)]
pub fn normalize_success(w: &ScoringWeights, success_ratio: f64) -> f64 {
    success_ratio / w.max_success_ratio
}

/// Not clamped: anything slower than the ceiling goes negative.
#[inline(always)]
pub fn normalize_speed(w: &ScoringWeights, speed_score: f64) -> f64 {
    (w.max_speed_score - speed_score) / w.max_speed_score
}

pub fn base_score(w: &ScoringWeights, guess_norm: f64, success_norm: f64, speed_norm: f64) -> f64 {
    guess_norm * w.guess_weight + success_norm * w.success_weight + speed_norm * w.speed_weight
}

/// Diminishing reward for games played, flat once `impact_cap` games are reached.
pub fn log_scale(games_played: u32, impact_cap: f64) -> f64 {
    let earned = (games_played as f64 + 1.0).log10() / 2.0;
    let cap = impact_cap.log10() / 2.0;
    earned.min(cap)
}

/// Linear ramp from 0 to 1 over the first `penalty_games` games.
pub fn inverse_game_penalty(games_played: u32, penalty_games: f64) -> f64 {
    (games_played as f64 / penalty_games).min(1.0)
}

/// Round half up (toward positive infinity), so -2.5 becomes -2.
/// `f64::round` already sends positive ties up; negative ties are pulled back.
pub fn scale_and_round(final_score: f64, scale: f64) -> i64 {
    let x = final_score * scale;
    let r = x.round();
    if x - r == 0.5 {
        (r + 1.0) as i64
    } else {
        r as i64
    }
}

pub fn score_debug(scorer: &Scorer, stats: &PlayerStats) -> ScoreDetails {
    let w = &scorer.weights;
    let limits = scorer.span.limits(stats.stat_span);

    let guess_norm = normalize_guess(w, stats.guess_score);
    let success_norm = normalize_success(w, stats.success_ratio);
    let speed_norm = normalize_speed(w, stats.speed_score);
    let base = base_score(w, guess_norm, success_norm, speed_norm);

    let log = log_scale(stats.games_played, limits.impact_cap);
    let penalty = inverse_game_penalty(stats.games_played, limits.penalty_games);

    let final_score = base * log * penalty;

    ScoreDetails {
        guess_norm,
        success_norm,
        speed_norm,
        base_score: base,
        log_scale: log,
        inverse_game_penalty: penalty,
        final_score,
        score: scale_and_round(final_score, w.score_scale),
    }
}
