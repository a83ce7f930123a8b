use crate::error::{LexResult, LexidayError};
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::ops::Index;
use std::path::Path;
use tracing::debug;

/// Ordered, immutable list of answer words. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

/// Trims and lowercases a raw word.
pub fn normalize_word(raw: &str) -> String {
    raw.trim().to_lowercase()
}

impl WordList {
    pub fn new(words: Vec<String>) -> LexResult<Self> {
        if words.is_empty() {
            return Err(LexidayError::EmptyWordList);
        }
        Ok(Self { words })
    }

    /// One word per line. Blank lines and `#` comments are skipped, words are
    /// trimmed and lowercased, order is kept.
    pub fn from_reader<R: Read>(reader: R) -> LexResult<Self> {
        let mut words = Vec::new();
        for line in BufReader::new(reader).lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            words.push(normalize_word(trimmed));
        }
        debug!("got {} words from word list", words.len());
        Self::new(words)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> LexResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            LexidayError::Config(format!(
                "Could not open word list at '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_reader(file)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; kept for API symmetry with slices.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.words
    }
}

impl Index<usize> for WordList {
    type Output = String;

    fn index(&self, index: usize) -> &Self::Output {
        &self.words[index]
    }
}

impl TryFrom<Vec<String>> for WordList {
    type Error = LexidayError;

    fn try_from(words: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(words)
    }
}
