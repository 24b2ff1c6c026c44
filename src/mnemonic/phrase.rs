//! The mnemonic phrase type.

use zeroize::{Zeroize, ZeroizeOnDrop};

/// A mnemonic phrase: 12 to 24 space-separated dictionary words.
///
/// The phrase encodes secret material, so the inner string is zeroized
/// on drop and `Debug` prints only the word count.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Mnemonic {
    phrase: String,
    #[zeroize(skip)]
    word_count: usize,
}

impl Mnemonic {
    /// Builds a mnemonic from words already drawn from a dictionary.
    pub(crate) fn from_words(words: &[&str]) -> Self {
        Self {
            phrase: words.join(" "),
            word_count: words.len(),
        }
    }

    /// Returns the phrase as a single space-separated string.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.phrase
    }

    /// Returns the individual words in order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.phrase.split(' ')
    }

    /// Returns the number of words.
    #[inline]
    pub fn word_count(&self) -> usize {
        self.word_count
    }
}

impl std::fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.phrase)
    }
}

impl std::fmt::Debug for Mnemonic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mnemonic")
            .field("word_count", &self.word_count)
            .finish_non_exhaustive()
    }
}
