pub mod board;
pub mod config;
pub mod daily;
pub mod error;
pub mod leaderboard;
pub mod scorer;
pub mod words;
// cmd and reports belong to the binary (main.rs).

pub use self::daily::{get_word_of_the_day, DailyWordSelector, WordOfDay};
pub use self::error::{LexResult, LexidayError};
pub use self::scorer::{calculate_player_score, PlayerStats, Scorer, StatSpan};
pub use self::words::WordList;
