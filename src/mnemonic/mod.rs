//! Mnemonic encoding and decoding.
//!
//! This module implements the BIP39 codec proper: entropy bits plus a
//! SHA-256-derived checksum are packed MSB-first into 11-bit groups,
//! each group indexing one dictionary word. Decoding inverts the
//! packing and verifies the checksum bit for bit.

mod bits;
mod checksum;
mod decode;
mod encode;
mod phrase;

pub use decode::{decode, DecodeError};
pub use encode::encode;
pub use phrase::Mnemonic;

/// Bits per word index: the dictionary holds 2^11 words.
pub(crate) const WORD_BITS: usize = 11;
