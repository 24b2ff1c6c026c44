//! Validated entropy buffers.
//!
//! BIP39 permits exactly five entropy sizes. Rejecting everything else
//! at construction time means the encoder never has to reason about
//! partial words or truncated checksums.

use rand_core::{OsRng, RngCore};
use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Errors that can occur when constructing entropy material.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntropyError {
    #[error("invalid entropy length: {0} bytes (permitted: 16, 20, 24, 28, or 32)")]
    InvalidLength(usize),
}

/// The five entropy sizes BIP39 permits.
///
/// Each size fixes the checksum length (entropy bits / 32) and thereby
/// the word count; entropy plus checksum is always a multiple of 11.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strength {
    /// 128 bits of entropy, 12 words.
    Bits128,
    /// 160 bits of entropy, 15 words.
    Bits160,
    /// 192 bits of entropy, 18 words.
    Bits192,
    /// 224 bits of entropy, 21 words.
    Bits224,
    /// 256 bits of entropy, 24 words.
    #[default]
    Bits256,
}

impl Strength {
    /// All strengths, smallest first.
    pub const ALL: [Strength; 5] = [
        Strength::Bits128,
        Strength::Bits160,
        Strength::Bits192,
        Strength::Bits224,
        Strength::Bits256,
    ];

    /// Entropy length in bytes.
    #[inline]
    pub const fn entropy_bytes(self) -> usize {
        match self {
            Strength::Bits128 => 16,
            Strength::Bits160 => 20,
            Strength::Bits192 => 24,
            Strength::Bits224 => 28,
            Strength::Bits256 => 32,
        }
    }

    /// Entropy length in bits.
    #[inline]
    pub const fn entropy_bits(self) -> usize {
        self.entropy_bytes() * 8
    }

    /// Checksum length in bits (entropy bits / 32).
    #[inline]
    pub const fn checksum_bits(self) -> usize {
        self.entropy_bits() / 32
    }

    /// Combined entropy-plus-checksum length in bits.
    #[inline]
    pub const fn total_bits(self) -> usize {
        self.entropy_bits() + self.checksum_bits()
    }

    /// Number of words in a mnemonic of this strength.
    #[inline]
    pub const fn word_count(self) -> usize {
        self.total_bits() / 11
    }

    /// Looks up the strength for an entropy buffer length in bytes.
    pub fn from_entropy_len(bytes: usize) -> Result<Self, EntropyError> {
        match bytes {
            16 => Ok(Strength::Bits128),
            20 => Ok(Strength::Bits160),
            24 => Ok(Strength::Bits192),
            28 => Ok(Strength::Bits224),
            32 => Ok(Strength::Bits256),
            other => Err(EntropyError::InvalidLength(other)),
        }
    }

    /// Looks up the strength for a mnemonic word count.
    ///
    /// Returns `None` for anything outside {12, 15, 18, 21, 24}.
    pub fn from_word_count(words: usize) -> Option<Self> {
        match words {
            12 => Some(Strength::Bits128),
            15 => Some(Strength::Bits160),
            18 => Some(Strength::Bits192),
            21 => Some(Strength::Bits224),
            24 => Some(Strength::Bits256),
            _ => None,
        }
    }
}

/// Raw entropy material for a mnemonic.
///
/// Holds one of the five permitted byte lengths; the buffer is
/// zeroized on drop and `Debug` never prints the bytes.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Entropy {
    data: Vec<u8>,
    #[zeroize(skip)]
    strength: Strength,
}

impl Entropy {
    /// Creates entropy from raw bytes, validating the length.
    ///
    /// The length must be exactly 16, 20, 24, 28, or 32 bytes.
    pub fn from_bytes(data: impl Into<Vec<u8>>) -> Result<Self, EntropyError> {
        let data = data.into();
        let strength = Strength::from_entropy_len(data.len())?;
        Ok(Self { data, strength })
    }

    /// Draws fresh entropy of the given strength from the OS source.
    pub fn random(strength: Strength) -> Self {
        let mut data = vec![0u8; strength.entropy_bytes()];
        OsRng.fill_bytes(&mut data);
        Self { data, strength }
    }

    /// Creates entropy from a buffer whose length the caller has
    /// already established as valid.
    pub(crate) fn from_raw(data: Vec<u8>, strength: Strength) -> Self {
        debug_assert_eq!(data.len(), strength.entropy_bytes());
        Self { data, strength }
    }

    /// Returns the entropy bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Returns the length in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if empty (never the case for a constructed value).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the strength corresponding to this buffer's length.
    #[inline]
    pub fn strength(&self) -> Strength {
        self.strength
    }
}

impl std::fmt::Debug for Entropy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Entropy")
            .field("strength", &self.strength)
            .finish_non_exhaustive()
    }
}
