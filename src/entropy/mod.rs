//! Entropy material and its sources.
//!
//! This module defines the validated entropy buffer the codec operates
//! on, along with the two ways of obtaining one besides a QR scan:
//! drawing from the OS randomness source, and conditioning a free-form
//! high-entropy user transcript (e.g. dice rolls) down to a fixed size.

mod derive;
mod material;

pub use derive::{Conditioner, DeriveError, HashAlgorithm};
pub use material::{Entropy, EntropyError, Strength};
