//! Dice Mnemonic Library
//!
//! A BIP39 mnemonic codec: converts raw entropy (OS randomness, a
//! high-entropy user transcript such as dice rolls, or a QR-scanned
//! payload) into a checksummed sequence of dictionary words, and
//! validates and decodes such a sequence back into entropy.
//!
//! # Architecture
//!
//! The system follows an explicit data flow:
//!
//! ```text
//! entropy (random / derived / QR) → encode → mnemonic
//! mnemonic → decode → entropy → QR render
//!                ↓
//!        wordlist (2048-word dictionary)
//! ```
//!
//! # Design Principles
//!
//! - **Bit-exact**: packing uses fixed-width buffers and explicit
//!   shifts; output is interoperable with any conforming wallet
//! - **Validate early**: entropy lengths and word counts are checked
//!   before any bit arithmetic happens
//! - **Uses standard primitives**: SHA-256 for the checksum, never a
//!   hand-rolled hash
//! - **No secret retention**: intermediate bit buffers are zeroized;
//!   nothing is logged beyond lengths and counts
//!
//! # Example
//!
//! ```
//! use dice_mnemonic::{decode, encode, Entropy, Wordlist};
//!
//! let wordlist = Wordlist::english();
//! let entropy = Entropy::from_bytes(vec![0u8; 16]).unwrap();
//!
//! let mnemonic = encode(&entropy, wordlist);
//! assert_eq!(
//!     mnemonic.as_str(),
//!     "abandon abandon abandon abandon abandon abandon \
//!      abandon abandon abandon abandon abandon about",
//! );
//!
//! let recovered = decode(mnemonic.as_str(), wordlist).unwrap();
//! assert_eq!(recovered, entropy);
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod config;
pub mod entropy;
pub mod mnemonic;
pub mod qr;
pub mod wordlist;

// Re-export commonly used types at crate root
pub use config::{ConfigError, FileConfig, MnemonicConfig, QrConfig};
pub use entropy::{Conditioner, DeriveError, Entropy, EntropyError, HashAlgorithm, Strength};
pub use mnemonic::{decode, encode, DecodeError, Mnemonic};
pub use qr::{MockQrCodec, QrCodec, QrError, QrFormat, QrRenderer};
pub use wordlist::{Wordlist, WordlistError};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
