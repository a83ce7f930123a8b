use thiserror::Error;

#[derive(Error, Debug)]
pub enum LexidayError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Data Validation Error: {0}")]
    Validation(String),

    #[error("Word list is empty")]
    EmptyWordList,

    #[error("Day index {day_index} is out of range for a list of {len} words")]
    DayOutOfRange { day_index: i64, len: usize },
}

pub type LexResult<T> = Result<T, LexidayError>;
