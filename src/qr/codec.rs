//! Byte-array codec abstraction.
//!
//! The core never interprets image bytes: payloads go in, payloads
//! come out. This trait lets a scanner-backed implementation plug in
//! while tests run against a mock.

use thiserror::Error;

/// Errors that can occur at the QR boundary.
#[derive(Debug, Clone, Error)]
pub enum QrError {
    #[error("failed to render QR code: {0}")]
    RenderFailed(String),
    #[error("failed to decode QR image: {0}")]
    DecodeFailed(String),
}

/// Trait for QR codec implementations.
///
/// Implementations treat the payload as opaque bytes; for this crate
/// the payload is always raw entropy.
pub trait QrCodec {
    /// Encodes a payload into image bytes.
    fn encode(&self, payload: &[u8]) -> Result<Vec<u8>, QrError>;

    /// Decodes image bytes back into the payload.
    fn decode(&self, image: &[u8]) -> Result<Vec<u8>, QrError>;
}

/// Mock codec for testing: the "image" is the payload itself.
#[derive(Debug, Default)]
pub struct MockQrCodec {
    fail_decode: bool,
}

impl MockQrCodec {
    pub fn new() -> Self {
        Self::default()
    }

    /// A codec whose decode side always fails, for error-path tests.
    pub fn failing() -> Self {
        Self { fail_decode: true }
    }
}

impl QrCodec for MockQrCodec {
    fn encode(&self, payload: &[u8]) -> Result<Vec<u8>, QrError> {
        Ok(payload.to_vec())
    }

    fn decode(&self, image: &[u8]) -> Result<Vec<u8>, QrError> {
        if self.fail_decode {
            return Err(QrError::DecodeFailed("mock decoder disabled".to_string()));
        }
        Ok(image.to_vec())
    }
}
