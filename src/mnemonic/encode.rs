//! Entropy to mnemonic.

use crate::entropy::Entropy;
use crate::wordlist::Wordlist;

use super::bits::{scrub, BitReader, BitWriter};
use super::checksum::checksum;
use super::phrase::Mnemonic;
use super::WORD_BITS;

/// Encodes entropy as a mnemonic phrase.
///
/// Entropy bits (MSB-first per byte) are followed by the checksum bits
/// and split into consecutive 11-bit groups; each group indexes one
/// word. The mapping is a deterministic bijection for a fixed
/// wordlist, and [`decode()`](super::decode()) is its exact inverse.
///
/// The entropy length is already validated by [`Entropy`], so encoding
/// cannot fail.
pub fn encode(entropy: &Entropy, wordlist: &Wordlist) -> Mnemonic {
    let strength = entropy.strength();

    let mut writer = BitWriter::with_capacity(strength.total_bits());
    for &byte in entropy.as_bytes() {
        writer.push_byte(byte);
    }
    let (check, check_bits) = checksum(entropy);
    writer.push_bits(u16::from(check >> (8 - check_bits)), check_bits);
    debug_assert_eq!(writer.bit_len(), strength.total_bits());

    let packed = writer.into_bytes();
    let mut reader = BitReader::new(&packed);
    let words: Vec<&str> = (0..strength.word_count())
        .map(|_| {
            let index = reader.read_bits(WORD_BITS);
            // An 11-bit group can never exceed 2047
            wordlist
                .word(index)
                .expect("11-bit index is within the 2048-word dictionary")
        })
        .collect();

    let mnemonic = Mnemonic::from_words(&words);
    scrub(packed);

    tracing::trace!(
        words = mnemonic.word_count(),
        entropy_bits = strength.entropy_bits(),
        "Encoded entropy as mnemonic"
    );

    mnemonic
}
