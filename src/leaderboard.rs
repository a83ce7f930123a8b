use crate::error::{LexResult, LexidayError};
use crate::scorer::{PlayerStats, Scorer, StatSpan};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// One CSV row: `name,games_played,guess_score,success_ratio,speed_score`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub name: String,
    pub games_played: u32,
    pub guess_score: i32,
    pub success_ratio: f64,
    pub speed_score: f64,
}

impl PlayerRecord {
    pub fn stats(&self, span: StatSpan) -> PlayerStats {
        PlayerStats::new(
            self.games_played,
            self.guess_score,
            self.success_ratio,
            self.speed_score,
            span,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedPlayer {
    /// 1-based competition rank; equal scores share a rank.
    pub rank: usize,
    pub name: String,
    pub score: i64,
    pub games_played: u32,
}

pub fn load_records<R: Read>(reader: R) -> LexResult<Vec<PlayerRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for result in rdr.deserialize::<PlayerRecord>() {
        records.push(result?);
    }
    debug!("loaded {} player records", records.len());
    Ok(records)
}

pub fn load_records_from_file<P: AsRef<Path>>(path: P) -> LexResult<Vec<PlayerRecord>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        LexidayError::Config(format!(
            "Could not open player stats at '{}': {}",
            path.display(),
            e
        ))
    })?;
    load_records(file)
}

/// Scores every record and orders them best first. Ties are broken by name
/// for a stable listing but keep the same rank.
pub fn rank(scorer: &Scorer, records: &[PlayerRecord], span: StatSpan) -> Vec<RankedPlayer> {
    let mut scored: Vec<(i64, &PlayerRecord)> = records
        .par_iter()
        .map(|r| (scorer.score(&r.stats(span)), r))
        .collect();

    scored.sort_by(|a, b| match b.0.cmp(&a.0) {
        Ordering::Equal => a.1.name.cmp(&b.1.name),
        other => other,
    });

    let mut ranked = Vec::with_capacity(scored.len());
    let mut current_rank = 0;
    let mut last_score = None;
    for (pos, (score, record)) in scored.into_iter().enumerate() {
        if last_score != Some(score) {
            current_rank = pos + 1;
            last_score = Some(score);
        }
        ranked.push(RankedPlayer {
            rank: current_rank,
            name: record.name.clone(),
            score,
            games_played: record.games_played,
        });
    }

    info!("🏆 Ranked {} players ({})", ranked.len(), span);
    ranked
}
