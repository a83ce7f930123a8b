mod grid;
mod tables;

pub use self::grid::print_board as print_board_grid;
pub use self::tables::{
    leaderboard as print_leaderboard, score as print_score_report, word as print_word_report,
};
