//! File-based configuration.
//!
//! The CLI reads an optional TOML file for defaults; command-line
//! flags always take precedence over file values.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::entropy::Strength;
use crate::qr::QrFormat;

/// Configuration validation errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid default word count: {0} (must be 12, 15, 18, 21, or 24)")]
    InvalidWordCount(usize),
    #[error("failed to read config file: {0}")]
    FileReadError(String),
    #[error("failed to parse config file: {0}")]
    ParseError(String),
}

/// Mnemonic generation defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MnemonicConfig {
    /// Default word count for generated mnemonics.
    pub words: usize,
}

impl Default for MnemonicConfig {
    fn default() -> Self {
        Self { words: 24 }
    }
}

impl MnemonicConfig {
    /// Returns the configured strength.
    pub fn strength(&self) -> Result<Strength, ConfigError> {
        Strength::from_word_count(self.words).ok_or(ConfigError::InvalidWordCount(self.words))
    }
}

/// QR rendering configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QrConfig {
    /// Output format for rendered codes.
    pub format: QrFormat,
    /// Render the quiet zone border.
    pub quiet_zone: bool,
}

impl Default for QrConfig {
    fn default() -> Self {
        Self {
            format: QrFormat::Ascii,
            quiet_zone: true,
        }
    }
}

/// Full configuration file format.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FileConfig {
    #[serde(default)]
    pub mnemonic: MnemonicConfig,
    #[serde(default)]
    pub qr: QrConfig,
}

impl FileConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::FileReadError(e.to_string()))?;
        let config: FileConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.mnemonic.strength()?;
        Ok(config)
    }
}
