//! Word list loading and the fixed-length `Word` type.
//!
//! Every word is normalised to ASCII lowercase once, when it is loaded. Lines that are not exactly
//! five ASCII letters are either skipped or rejected depending on the [`LinePolicy`].

use crate::debug_log;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use thiserror::Error;

pub const WORD_LENGTH: usize = 5;

pub const EMBEDDED_WORDBANK: &str = include_str!("resources/wordbank.txt");

/// A 1-based letter position within a word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position(u8);

impl Position {
    pub const ALL: [Position; WORD_LENGTH] =
        [Position(1), Position(2), Position(3), Position(4), Position(5)];

    /// Returns `None` unless `pos` is in `1..=5`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn new(pos: usize) -> Option<Self> {
        if (1..=WORD_LENGTH).contains(&pos) {
            Some(Self(pos as u8))
        } else {
            None
        }
    }

    /// Zero-based counterpart, for indexing.
    #[must_use]
    pub fn index(self) -> usize {
        usize::from(self.0) - 1
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A five-letter candidate word.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Word {
    letters: [char; WORD_LENGTH],
    text: String,
    letter_mask: u32,
}

impl Word {
    /// Builds a word from `text`, lowercasing it. Returns `None` unless the trimmed text is exactly
    /// five ASCII letters.
    #[must_use]
    pub fn new(text: &str) -> Option<Self> {
        let text = text.trim();
        if text.len() != WORD_LENGTH || !text.chars().all(|c| c.is_ascii_alphabetic()) {
            return None;
        }
        let text = text.to_ascii_lowercase();
        let mut letters = [' '; WORD_LENGTH];
        let mut letter_mask = 0;
        for (slot, c) in letters.iter_mut().zip(text.chars()) {
            *slot = c;
            letter_mask |= letter_bit(c);
        }
        Some(Self {
            letters,
            text,
            letter_mask,
        })
    }

    #[must_use]
    pub fn letter(&self, pos: Position) -> char {
        self.letters[pos.index()]
    }

    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Set of distinct letters, one bit per letter `a..=z`.
    #[must_use]
    pub fn letter_mask(&self) -> u32 {
        self.letter_mask
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

fn letter_bit(c: char) -> u32 {
    1 << (u32::from(c) - u32::from('a'))
}

/// What to do with word list lines that are not five ASCII letters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LinePolicy {
    #[default]
    Skip,
    Strict,
}

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("failed to read word list: {0}")]
    Io(#[from] io::Error),
    #[error("line {line_number}: '{line}' is not a 5-letter word")]
    InvalidLine { line_number: usize, line: String },
    #[error("word list contains no 5-letter words")]
    Empty,
}

/// The full, ordered list of candidate words.
///
/// Order is the load order and is used as the tie-break when ranking.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordCorpus {
    words: Vec<Word>,
}

impl WordCorpus {
    pub fn from_reader<R: BufRead>(reader: R, policy: LinePolicy) -> Result<Self, CorpusError> {
        let mut words = Vec::new();
        let mut skipped = 0usize;
        // Split on raw bytes so a line that is not UTF-8 is malformed, not an I/O failure
        for (index, bytes) in reader.split(b'\n').enumerate() {
            let bytes = bytes?;
            let line = String::from_utf8_lossy(&bytes);
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            let word = std::str::from_utf8(&bytes).ok().and_then(Word::new);
            match word {
                Some(word) => words.push(word),
                None if policy == LinePolicy::Strict => {
                    return Err(CorpusError::InvalidLine {
                        line_number: index + 1,
                        line: trimmed.to_string(),
                    });
                }
                None => {
                    debug_log!("Skipping line {}: '{}'", index + 1, trimmed);
                    skipped += 1;
                }
            }
        }
        if skipped > 0 {
            log::warn!("Skipped {skipped} word list lines that were not 5-letter words");
        }
        if words.is_empty() {
            return Err(CorpusError::Empty);
        }
        log::info!("Loaded {} words", words.len());
        Ok(Self { words })
    }

    pub fn from_file<P: AsRef<Path>>(path: P, policy: LinePolicy) -> Result<Self, CorpusError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file), policy)
    }

    pub fn parse(data: &str, policy: LinePolicy) -> Result<Self, CorpusError> {
        Self::from_reader(data.as_bytes(), policy)
    }

    /// Builds a corpus from an in-memory list. Every entry must be a valid word.
    pub fn from_words<I, S>(words: I) -> Result<Self, CorpusError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .enumerate()
            .map(|(index, word)| {
                Word::new(word.as_ref()).ok_or_else(|| CorpusError::InvalidLine {
                    line_number: index + 1,
                    line: word.as_ref().to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        if words.is_empty() {
            return Err(CorpusError::Empty);
        }
        Ok(Self { words })
    }

    /// The word list compiled into the binary.
    #[must_use]
    pub fn embedded() -> Self {
        Self {
            words: EMBEDDED_WORDBANK.lines().filter_map(Word::new).collect(),
        }
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }
}

impl<'a> IntoIterator for &'a WordCorpus {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}
