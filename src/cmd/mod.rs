pub mod board;
pub mod rank;
pub mod score;
pub mod word;
