use crate::reports;
use clap::Args;
use lexiday::config::{Config, ScoringWeights, SpanParams};
use lexiday::scorer::{PlayerStats, Scorer, StatSpan};
use lexiday::LexResult;

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    pub games_played: u32,
    /// Guesses needed to solve (1 best, 6 worst)
    #[arg(allow_negative_numbers = true)]
    pub guess_score: i32,
    /// Percentage of games solved (0-100)
    #[arg(allow_negative_numbers = true)]
    pub success_ratio: f64,
    /// Time metric, lower is better
    #[arg(allow_negative_numbers = true)]
    pub speed_score: f64,

    /// `all-time` (or -1) for all-time stats, any other integer for a window
    #[arg(long, default_value = "all-time", allow_hyphen_values = true)]
    pub span: StatSpan,

    #[arg(long, default_value_t = false)]
    pub json: bool,

    #[command(flatten)]
    pub weights: ScoringWeights,
    #[command(flatten)]
    pub limits: SpanParams,
}

pub fn run(args: &ScoreArgs, config: &Config) -> LexResult<()> {
    let scorer = Scorer::from_config(config);
    let stats = PlayerStats::new(
        args.games_played,
        args.guess_score,
        args.success_ratio,
        args.speed_score,
        args.span,
    );
    let details = scorer.score_debug(&stats);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&details)?);
    } else {
        reports::print_score_report(&stats, &details, &scorer.weights);
        println!("Score: {}", details.score);
    }
    Ok(())
}
