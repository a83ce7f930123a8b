use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum LetterState {
    Correct,
    Present,
    Absent,
}

impl LetterState {
    /// Higher wins when the same letter shows up with different states.
    pub fn strength(&self) -> u8 {
        match self {
            Self::Absent => 0,
            Self::Present => 1,
            Self::Correct => 2,
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Absent => "⬛",
            Self::Present => "🟨",
            Self::Correct => "🟩",
        }
    }
}

/// A single square. `letter` is one character, or empty for a blank square.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterTile {
    pub letter: String,
    pub state: LetterState,
}

impl LetterTile {
    pub fn new(letter: &str, state: LetterState) -> Self {
        Self {
            letter: letter.to_string(),
            state,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.letter.is_empty()
    }
}

pub type Board = Vec<Vec<LetterTile>>;

/// A one-row board spelling `word`, every square in `state`.
pub fn word_to_board(word: &str, state: LetterState) -> Board {
    vec![word
        .chars()
        .map(|c| LetterTile {
            letter: c.to_string(),
            state,
        })
        .collect()]
}

/// Strongest state seen for each letter, blanks ignored.
pub fn letters_guessed(board: &Board) -> BTreeMap<String, LetterState> {
    let mut out: BTreeMap<String, LetterState> = BTreeMap::new();
    for tile in board.iter().flatten().filter(|t| !t.is_blank()) {
        out.entry(tile.letter.clone())
            .and_modify(|s| {
                if tile.state.strength() > s.strength() {
                    *s = tile.state;
                }
            })
            .or_insert(tile.state);
    }
    out
}

/// Boards the UI shows in place of a guess grid while waiting on the server.
#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash)]
#[strum(serialize_all = "kebab-case")]
pub enum CannedMessage {
    EnterYourName,
    Relay,
    Happy,
    Minds,
    Fight,
    Connecting,
}

type Row = &'static [(&'static str, LetterState)];

impl CannedMessage {
    pub fn rows(&self) -> &'static [Row] {
        use LetterState::{Absent as A, Correct as C, Present as P};

        match self {
            Self::EnterYourName => &[
                &[("i", C), ("s", C), ("i", C), ("m", C), ("", A)],
                &[("g", A), ("i", C), ("r", C), ("i", C), ("n", C)],
            ],
            Self::Relay => &[&[("u", A), ("l", A), ("t", A), ("r", A), ("a", C)]],
            Self::Happy => &[&[("s", A), ("ü", P), ("p", A), ("e", A), ("r", A)]],
            Self::Minds => &[&[("s", A), ("o", A), ("n", A), ("i", A), ("k", A)]],
            Self::Fight => &[&[("b", C), ("a", C), ("ş", C), ("l", C), ("a", C)]],
            Self::Connecting => &[
                &[("A", P), ("R", P), ("A", P), ("", A), ("", A)],
                &[("", A), ("K", A), ("İ", A), ("", A), ("", A)],
                &[("", A), ("", A), ("B", C), ("U", C), ("L", C)],
            ],
        }
    }

    pub fn board(&self) -> Board {
        self.rows()
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&(letter, state)| LetterTile::new(letter, state))
                    .collect()
            })
            .collect()
    }
}

pub fn all_messages() -> Vec<(CannedMessage, Board)> {
    CannedMessage::iter().map(|m| (m, m.board())).collect()
}
