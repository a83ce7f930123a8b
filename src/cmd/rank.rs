use crate::reports;
use clap::Args;
use lexiday::config::{Config, ScoringWeights, SpanParams};
use lexiday::leaderboard;
use lexiday::scorer::{Scorer, StatSpan};
use lexiday::LexResult;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct RankArgs {
    /// CSV with header `name,games_played,guess_score,success_ratio,speed_score`
    #[arg(short, long)]
    pub players: String,

    #[arg(long, default_value = "all-time", allow_hyphen_values = true)]
    pub span: StatSpan,

    /// Only show the first N rows
    #[arg(short, long)]
    pub top: Option<usize>,

    #[arg(long, default_value_t = false)]
    pub json: bool,

    #[command(flatten)]
    pub weights: ScoringWeights,
    #[command(flatten)]
    pub limits: SpanParams,
}

pub fn run(args: &RankArgs, config: &Config) -> LexResult<()> {
    info!("📂 Loading Players: {}", args.players);
    let records = leaderboard::load_records_from_file(&args.players)?;

    let scorer = Scorer::from_config(config);
    let mut ranked = leaderboard::rank(&scorer, &records, args.span);
    if let Some(n) = args.top {
        ranked.truncate(n);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&ranked)?);
    } else {
        reports::print_leaderboard(&ranked, args.span);
    }
    Ok(())
}
