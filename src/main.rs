use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use lexiday::config::Config;
use std::process;
use tracing::{error, info};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON config used as the base; flags typed on the command line win.
    #[arg(global = true, long)]
    weights: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Score(cmd::score::ScoreArgs),
    Rank(cmd::rank::RankArgs),
    Word(cmd::word::WordArgs),
    Board(cmd::board::BoardArgs),
}

fn main() {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let Some((_, sub_matches)) = matches.subcommand() else {
        error!("❌ No subcommand given");
        process::exit(2);
    };

    let mut config = match &cli.weights {
        Some(path) => {
            info!("⚖️  Loading Weights from: {}", path);
            Config::load_from_file(path).unwrap_or_else(|e| {
                error!("❌ Failed to load weights '{}': {}", path, e);
                process::exit(1);
            })
        }
        None => Config::default(),
    };

    let result = match cli.command {
        Commands::Score(args) => {
            config.weights.merge_from_cli(&args.weights, sub_matches);
            config.span.merge_from_cli(&args.limits, sub_matches);
            cmd::score::run(&args, &config)
        }
        Commands::Rank(args) => {
            config.weights.merge_from_cli(&args.weights, sub_matches);
            config.span.merge_from_cli(&args.limits, sub_matches);
            cmd::rank::run(&args, &config)
        }
        Commands::Word(args) => {
            config.daily.merge_from_cli(&args.daily, sub_matches);
            cmd::word::run(&args, &config)
        }
        Commands::Board(args) => cmd::board::run(&args),
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}
