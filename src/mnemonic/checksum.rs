//! Checksum bits derived from SHA-256.
//!
//! The checksum is the first `ENT/32` bits of `SHA-256(entropy)`. With
//! entropy capped at 256 bits the checksum never exceeds 8 bits, so a
//! single left-aligned byte carries it. The hash is the standard sha2
//! implementation; wallet interoperability depends on bit-exact
//! conformance, so nothing here is hand-rolled.

use sha2::{Digest, Sha256};

use crate::entropy::Entropy;

/// Computes the checksum for `entropy`.
///
/// Returns the checksum bits left-aligned in a byte together with the
/// bit count; unused low bits are zero.
pub(crate) fn checksum(entropy: &Entropy) -> (u8, usize) {
    let digest = Sha256::digest(entropy.as_bytes());
    let bits = entropy.strength().checksum_bits();
    let mask = 0xFFu8 << (8 - bits);
    (digest[0] & mask, bits)
}
