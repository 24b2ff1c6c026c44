//! Conditioning user input into fixed-length entropy.
//!
//! A user can supply their own randomness as a free-form transcript,
//! classically a long sequence of dice rolls typed in by hand. The
//! transcript is conditioned into a fixed-size entropy buffer with a
//! single documented transform:
//!
//! ```text
//! entropy = H(input)[..entropy_bytes]
//! ```
//!
//! The transform is deterministic, so the same transcript always yields
//! the same mnemonic. Input shorter than the target entropy size is
//! rejected rather than stretched.

use blake3::Hasher as Blake3Hasher;
use sha2::{Digest, Sha256};
use thiserror::Error;
use zeroize::Zeroize;

use super::{Entropy, Strength};

/// Supported hash algorithms for conditioning.
#[derive(Debug, Clone, Copy, Default)]
pub enum HashAlgorithm {
    /// SHA-256 - widely deployed, matches the checksum primitive.
    #[default]
    Sha256,
    /// BLAKE3 - fast alternative.
    Blake3,
}

/// Errors that can occur during input conditioning.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeriveError {
    #[error("insufficient input: got {got} bytes, need at least {need} bytes")]
    InsufficientInput { got: usize, need: usize },
}

/// Conditions free-form user input into entropy material.
///
/// The hash spreads every input byte over the output, so transcripts
/// that differ anywhere produce unrelated entropy.
pub struct Conditioner {
    algorithm: HashAlgorithm,
}

impl Conditioner {
    /// Creates a new conditioner with the specified algorithm.
    pub fn new(algorithm: HashAlgorithm) -> Self {
        Self { algorithm }
    }

    /// Derives entropy of the given strength from user input.
    ///
    /// The input must be at least as long as the target entropy size;
    /// a short transcript cannot be stretched into a strong mnemonic.
    pub fn derive(&self, input: &[u8], strength: Strength) -> Result<Entropy, DeriveError> {
        let need = strength.entropy_bytes();
        if input.len() < need {
            return Err(DeriveError::InsufficientInput {
                got: input.len(),
                need,
            });
        }

        let mut digest = match self.algorithm {
            HashAlgorithm::Sha256 => {
                let mut hasher = Sha256::new();
                hasher.update(input);
                let result = hasher.finalize();
                let mut digest = [0u8; 32];
                digest.copy_from_slice(&result);
                digest
            }
            HashAlgorithm::Blake3 => {
                let mut hasher = Blake3Hasher::new();
                hasher.update(input);
                *hasher.finalize().as_bytes()
            }
        };

        let entropy = Entropy::from_raw(digest[..need].to_vec(), strength);
        digest.zeroize();

        tracing::debug!(
            input_bytes = input.len(),
            entropy_bytes = need,
            algorithm = ?self.algorithm,
            "Conditioned user input into entropy"
        );

        Ok(entropy)
    }
}

impl Default for Conditioner {
    fn default() -> Self {
        Self::new(HashAlgorithm::default())
    }
}
