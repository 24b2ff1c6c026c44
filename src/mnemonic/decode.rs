//! Mnemonic to entropy.

use thiserror::Error;

use crate::entropy::{Entropy, Strength};
use crate::wordlist::Wordlist;

use super::bits::{scrub, BitWriter};
use super::checksum::checksum;
use super::WORD_BITS;

/// Errors that can occur while decoding a mnemonic phrase.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("invalid word count: {0} (expected 12, 15, 18, 21, or 24)")]
    InvalidWordCount(usize),
    #[error("unknown word {word:?} at position {position}")]
    UnknownWord {
        /// The offending word, verbatim.
        word: String,
        /// Zero-indexed position within the phrase.
        position: usize,
    },
    #[error("checksum mismatch")]
    ChecksumMismatch,
}

/// Decodes and validates a mnemonic phrase, returning its entropy.
///
/// The phrase is split on ASCII whitespace, so QR payload text and
/// hand-typed input normalize the same way. Validation order: word
/// count, dictionary membership per word, then the checksum over the
/// reassembled entropy. Each failure names the first offending item;
/// a wrong phrase never produces a silently wrong decode.
pub fn decode(phrase: &str, wordlist: &Wordlist) -> Result<Entropy, DecodeError> {
    let words: Vec<&str> = phrase.split_whitespace().collect();
    let strength = Strength::from_word_count(words.len())
        .ok_or(DecodeError::InvalidWordCount(words.len()))?;

    let mut writer = BitWriter::with_capacity(strength.total_bits());
    for (position, word) in words.iter().enumerate() {
        let index = wordlist.index(word).ok_or_else(|| DecodeError::UnknownWord {
            word: (*word).to_string(),
            position,
        })?;
        writer.push_bits(index, WORD_BITS);
    }
    debug_assert_eq!(writer.bit_len(), strength.total_bits());

    // Entropy occupies whole bytes, so the checksum bits always start
    // on a byte boundary in the packed stream.
    let packed = writer.into_bytes();
    let entropy_bytes = strength.entropy_bytes();
    let entropy = Entropy::from_raw(packed[..entropy_bytes].to_vec(), strength);

    let (expected, check_bits) = checksum(&entropy);
    let stored = packed[entropy_bytes] & (0xFFu8 << (8 - check_bits));
    scrub(packed);

    if stored != expected {
        tracing::debug!(words = words.len(), "Mnemonic checksum mismatch");
        return Err(DecodeError::ChecksumMismatch);
    }

    Ok(entropy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mnemonic::encode;

    const ZERO_12: &str = "abandon abandon abandon abandon abandon abandon \
                           abandon abandon abandon abandon abandon about";

    #[test]
    fn test_canonical_vector_decodes() {
        let entropy = decode(ZERO_12, Wordlist::english()).unwrap();
        assert_eq!(entropy.as_bytes(), &[0u8; 16]);
    }

    #[test]
    fn test_roundtrip_all_strengths() {
        let wordlist = Wordlist::english();
        for strength in Strength::ALL {
            let entropy = Entropy::random(strength);
            let mnemonic = encode(&entropy, wordlist);
            let recovered = decode(mnemonic.as_str(), wordlist).unwrap();
            assert_eq!(recovered, entropy);
        }
    }

    #[test]
    fn test_wrong_word_count_rejected() {
        for count in [0, 1, 11, 13, 16, 23, 25] {
            let phrase = vec!["abandon"; count].join(" ");
            assert_eq!(
                decode(&phrase, Wordlist::english()),
                Err(DecodeError::InvalidWordCount(count))
            );
        }
    }

    #[test]
    fn test_unknown_word_reported_with_position() {
        let mut words = ZERO_12.split_whitespace().collect::<Vec<_>>();
        words[7] = "notaword";
        let phrase = words.join(" ");

        assert_eq!(
            decode(&phrase, Wordlist::english()),
            Err(DecodeError::UnknownWord {
                word: "notaword".to_string(),
                position: 7,
            })
        );
    }

    #[test]
    fn test_substituted_word_fails_checksum() {
        // "about" → "abandon" keeps every word valid but breaks the
        // checksum.
        let phrase = vec!["abandon"; 12].join(" ");
        assert_eq!(
            decode(&phrase, Wordlist::english()),
            Err(DecodeError::ChecksumMismatch)
        );
    }

    #[test]
    fn test_whitespace_runs_are_normalized() {
        let phrase = ZERO_12.replace(' ', "  \t");
        let entropy = decode(&phrase, Wordlist::english()).unwrap();
        assert_eq!(entropy.as_bytes(), &[0u8; 16]);
    }

    #[test]
    fn test_empty_phrase_rejected() {
        assert_eq!(
            decode("", Wordlist::english()),
            Err(DecodeError::InvalidWordCount(0))
        );
    }
}
