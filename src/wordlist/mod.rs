//! The 2048-word mnemonic dictionary.
//!
//! A wordlist is an ordered sequence of exactly 2048 unique, lowercase,
//! whitespace-free words; index i maps bijectively to word i. The list
//! is built once, then only read, so it can be shared across threads
//! without locking.

use std::collections::HashMap;
use std::sync::OnceLock;

use thiserror::Error;

/// Number of words every dictionary must contain (2^11).
pub const WORD_COUNT: usize = 2048;

/// The canonical English wordlist, one word per line.
const ENGLISH: &str = include_str!("english.txt");

/// Errors that can occur when loading a wordlist.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordlistError {
    #[error("wordlist must contain exactly {WORD_COUNT} words, got {0}")]
    WrongWordCount(usize),
    #[error("duplicate word {word:?} at index {index}")]
    Duplicate { word: String, index: usize },
    #[error("malformed word {word:?} at index {index} (must be lowercase ASCII, no whitespace)")]
    Malformed { word: String, index: usize },
}

/// An immutable 2048-word dictionary with O(1) lookup both ways.
#[derive(PartialEq)]
pub struct Wordlist {
    words: Vec<String>,
    index: HashMap<String, u16>,
}

impl Wordlist {
    /// Parses a wordlist from text with one word per line.
    ///
    /// Blank lines are ignored; everything else must satisfy the
    /// dictionary invariants.
    pub fn from_lines(text: &str) -> Result<Self, WordlistError> {
        let mut words = Vec::with_capacity(WORD_COUNT);
        let mut index = HashMap::with_capacity(WORD_COUNT);

        for line in text.lines() {
            let word = line.trim();
            if word.is_empty() {
                continue;
            }
            let position = words.len();
            if !word.bytes().all(|b| b.is_ascii_lowercase()) {
                return Err(WordlistError::Malformed {
                    word: word.to_string(),
                    index: position,
                });
            }
            if index.insert(word.to_string(), position as u16).is_some() {
                return Err(WordlistError::Duplicate {
                    word: word.to_string(),
                    index: position,
                });
            }
            words.push(word.to_string());
        }

        if words.len() != WORD_COUNT {
            return Err(WordlistError::WrongWordCount(words.len()));
        }

        Ok(Self { words, index })
    }

    /// Returns the embedded canonical English wordlist.
    ///
    /// Built on first use and shared for the process lifetime.
    pub fn english() -> &'static Wordlist {
        static LIST: OnceLock<Wordlist> = OnceLock::new();
        LIST.get_or_init(|| {
            Self::from_lines(ENGLISH).expect("embedded English wordlist is valid")
        })
    }

    /// Returns the word at `index`, or `None` past the end.
    #[inline]
    pub fn word(&self, index: u16) -> Option<&str> {
        self.words.get(usize::from(index)).map(String::as_str)
    }

    /// Returns the index of `word`, or `None` if absent.
    #[inline]
    pub fn index(&self, word: &str) -> Option<u16> {
        self.index.get(word).copied()
    }

    /// Returns true if `word` is in the dictionary.
    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    /// Number of words (always 2048 for a constructed list).
    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if empty (never the case for a constructed list).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl std::fmt::Debug for Wordlist {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Wordlist")
            .field("words", &self.words.len())
            .finish()
    }
}
