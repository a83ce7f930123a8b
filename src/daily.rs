use crate::config::DailyParams;
use crate::error::{LexResult, LexidayError};
use crate::words::WordList;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum_macros::Display;
use tracing::{debug, warn};

/// How a day offset past the end of the word list is folded back into it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum, Display, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum WrapMode {
    /// `day_index mod len`. Days before the epoch count back from the end.
    #[default]
    Modulo,
    /// Subtract the list length while the index is strictly greater than it.
    /// Lands on `len` (one past the end) whenever the index is a positive
    /// multiple of the length; such days are rejected.
    Legacy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordOfDay {
    pub answer: String,
    /// UTC calendar date the word was chosen for.
    pub date: NaiveDate,
    /// Whole days since the epoch (negative before it).
    pub day_index: i64,
    pub list_index: usize,
}

/// Calendar date of `now` in UTC, whatever zone it was expressed in.
pub fn utc_date<Tz: TimeZone>(now: &DateTime<Tz>) -> NaiveDate {
    now.with_timezone(&Utc).date_naive()
}

pub fn day_index(date: NaiveDate, epoch: NaiveDate) -> i64 {
    date.signed_duration_since(epoch).num_days()
}

/// `len` must be non-zero.
pub fn wrap_modulo(day_index: i64, len: usize) -> usize {
    debug_assert!(len > 0);
    day_index.rem_euclid(len as i64) as usize
}

/// Closed form of `while day > len { day -= len }`. The result can equal
/// `len` or be negative; callers must bounds-check it. `len` must be non-zero.
pub fn wrap_legacy(day_index: i64, len: usize) -> i64 {
    debug_assert!(len > 0);
    let len = len as i64;
    if day_index > len {
        (day_index - 1) % len + 1
    } else {
        day_index
    }
}

/// Picks the secret word for a UTC calendar day from a fixed list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyWordSelector {
    pub epoch: NaiveDate,
    pub wrap: WrapMode,
}

impl DailyWordSelector {
    pub fn new(epoch: NaiveDate, wrap: WrapMode) -> Self {
        Self { epoch, wrap }
    }

    pub fn from_params(params: &DailyParams) -> LexResult<Self> {
        Ok(Self::new(params.get_epoch()?, params.wrap))
    }

    /// Position in a list of `len` words for the given day offset.
    pub fn list_index(&self, day_index: i64, len: usize) -> LexResult<usize> {
        if len == 0 {
            return Err(LexidayError::EmptyWordList);
        }
        match self.wrap {
            WrapMode::Modulo => Ok(wrap_modulo(day_index, len)),
            WrapMode::Legacy => {
                let idx = wrap_legacy(day_index, len);
                if idx < 0 || idx >= len as i64 {
                    warn!(
                        "Legacy wrap left the word list: day {} -> index {} (len {})",
                        day_index, idx, len
                    );
                    return Err(LexidayError::DayOutOfRange { day_index, len });
                }
                Ok(idx as usize)
            }
        }
    }

    pub fn select_on(&self, date: NaiveDate, words: &WordList) -> LexResult<WordOfDay> {
        let day_index = day_index(date, self.epoch);
        let list_index = self.list_index(day_index, words.len())?;
        let answer = words[list_index].clone();

        debug!(
            "📅 {} is day {} since {} -> word #{} ({} mode)",
            date, day_index, self.epoch, list_index, self.wrap
        );

        Ok(WordOfDay {
            answer,
            date,
            day_index,
            list_index,
        })
    }

    /// Same UTC date, same word, regardless of the zone `now` carries.
    pub fn select_at<Tz: TimeZone>(
        &self,
        now: &DateTime<Tz>,
        words: &WordList,
    ) -> LexResult<WordOfDay> {
        self.select_on(utc_date(now), words)
    }

    pub fn select_today(&self, words: &WordList) -> LexResult<WordOfDay> {
        self.select_at(&Utc::now(), words)
    }
}

/// Today's word using the stock epoch and modulo wrapping.
pub fn get_word_of_the_day(words: &WordList) -> LexResult<WordOfDay> {
    DailyWordSelector::from_params(&DailyParams::default())?.select_today(words)
}
