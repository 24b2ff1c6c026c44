//! Dice Mnemonic CLI
//!
//! Command-line surface for the mnemonic codec: generate phrases from
//! OS randomness, explicit entropy, or a user transcript; validate and
//! decode phrases; and move entropy through QR codes.

use std::io::Read;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use zeroize::Zeroize;

use dice_mnemonic::{
    decode, encode, Conditioner, Entropy, FileConfig, HashAlgorithm, QrFormat, QrRenderer,
    Strength, Wordlist,
};

#[derive(Parser)]
#[command(name = "dice-mnemonic", version, about = "BIP39 mnemonic codec")]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a mnemonic from OS randomness.
    Generate {
        /// Word count: 12, 15, 18, 21, or 24.
        #[arg(long)]
        words: Option<usize>,
    },
    /// Encode explicit entropy, given as hex, into a mnemonic.
    Encode {
        /// Entropy as a hex string (16, 20, 24, 28, or 32 bytes).
        #[arg(long)]
        entropy: String,
    },
    /// Derive a mnemonic from free-form input read on stdin.
    ///
    /// Feed it a transcript of dice rolls or other high-entropy text;
    /// the same transcript always produces the same mnemonic.
    Derive {
        /// Word count: 12, 15, 18, 21, or 24.
        #[arg(long)]
        words: Option<usize>,
        /// Hash used to condition the input.
        #[arg(long, value_enum, default_value = "sha256")]
        hash: HashArg,
    },
    /// Validate a mnemonic and print its entropy as hex.
    Decode {
        /// The mnemonic words.
        #[arg(required = true)]
        phrase: Vec<String>,
    },
    /// Render a mnemonic's entropy as a QR code.
    ToQr {
        /// The mnemonic words.
        #[arg(required = true)]
        phrase: Vec<String>,
        /// Output format.
        #[arg(long, value_enum)]
        format: Option<FormatArg>,
    },
    /// Build a mnemonic from a scanner-decoded QR payload file.
    FromQr {
        /// File holding the raw payload bytes from the scanner.
        payload: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum HashArg {
    #[default]
    Sha256,
    Blake3,
}

impl From<HashArg> for HashAlgorithm {
    fn from(arg: HashArg) -> Self {
        match arg {
            HashArg::Sha256 => HashAlgorithm::Sha256,
            HashArg::Blake3 => HashAlgorithm::Blake3,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    Ascii,
    Svg,
}

impl From<FormatArg> for QrFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Ascii => QrFormat::Ascii,
            FormatArg::Svg => QrFormat::Svg,
        }
    }
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = match &cli.config {
        Some(path) => FileConfig::from_file(path)?,
        None => FileConfig::default(),
    };
    let wordlist = Wordlist::english();

    match cli.command {
        Command::Generate { words } => {
            let strength = resolve_strength(words, &config)?;
            let entropy = Entropy::random(strength);
            let mnemonic = encode(&entropy, wordlist);
            info!(words = mnemonic.word_count(), "Generated mnemonic");
            println!("{mnemonic}");
        }
        Command::Encode { entropy } => {
            let bytes = hex::decode(entropy.trim())?;
            let entropy = Entropy::from_bytes(bytes)?;
            let mnemonic = encode(&entropy, wordlist);
            println!("{mnemonic}");
        }
        Command::Derive { words, hash } => {
            let strength = resolve_strength(words, &config)?;
            let mut input = read_stdin()?;
            let conditioner = Conditioner::new(hash.into());
            let result = conditioner.derive(&input, strength);
            input.zeroize();
            let mnemonic = encode(&result?, wordlist);
            println!("{mnemonic}");
        }
        Command::Decode { phrase } => {
            let entropy = decode(&phrase.join(" "), wordlist)?;
            println!("{}", hex::encode(entropy.as_bytes()));
        }
        Command::ToQr { phrase, format } => {
            let entropy = decode(&phrase.join(" "), wordlist)?;
            let format = format.map(QrFormat::from).unwrap_or(config.qr.format);
            let renderer = QrRenderer::new(format).quiet_zone(config.qr.quiet_zone);
            println!("{}", renderer.render(entropy.as_bytes())?);
        }
        Command::FromQr { payload } => {
            let bytes = std::fs::read(&payload)?;
            let entropy = Entropy::from_bytes(bytes)?;
            let mnemonic = encode(&entropy, wordlist);
            println!("{mnemonic}");
        }
    }

    Ok(())
}

/// Picks the strength from the flag, falling back to the config file.
fn resolve_strength(
    words: Option<usize>,
    config: &FileConfig,
) -> Result<Strength, Box<dyn std::error::Error>> {
    match words {
        Some(count) => Strength::from_word_count(count)
            .ok_or_else(|| format!("invalid word count: {count} (expected 12, 15, 18, 21, or 24)").into()),
        None => Ok(config.mnemonic.strength()?),
    }
}

/// Reads stdin to the end, dropping trailing newline bytes so that
/// piped and interactive transcripts derive identically.
fn read_stdin() -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    let mut input = Vec::new();
    std::io::stdin().read_to_end(&mut input)?;
    while matches!(input.last(), Some(b'\n') | Some(b'\r')) {
        input.pop();
    }
    Ok(input)
}
