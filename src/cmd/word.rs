use crate::reports;
use chrono::NaiveDate;
use clap::Args;
use lexiday::config::{Config, DailyParams};
use lexiday::{DailyWordSelector, LexResult, WordList};
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct WordArgs {
    /// Answer list, one word per line
    #[arg(short, long, default_value = "data/answers.txt")]
    pub words: String,

    /// UTC date to pick for (YYYY-MM-DD); defaults to today
    #[arg(short, long)]
    pub date: Option<NaiveDate>,

    #[arg(long, default_value_t = false)]
    pub json: bool,

    #[command(flatten)]
    pub daily: DailyParams,
}

pub fn run(args: &WordArgs, config: &Config) -> LexResult<()> {
    info!("📂 Loading Words: {}", args.words);
    let words = WordList::load_from_file(&args.words)?;
    let selector = DailyWordSelector::from_params(&config.daily)?;

    let word = match args.date {
        Some(date) => selector.select_on(date, &words)?,
        None => selector.select_today(&words)?,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&word)?);
    } else {
        reports::print_word_report(&word, words.len());
        println!("Answer: {}", word.answer);
    }
    Ok(())
}
