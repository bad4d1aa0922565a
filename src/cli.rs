use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::Threshold;

/// Parses and validates the `--needed` threshold.
fn parse_threshold(input: &str) -> Result<Threshold, String> {
    let value: u32 = input
        .parse()
        .map_err(|_| format!("'{input}' is not a valid number"))?;
    Threshold::new(value).map_err(|error| error.to_string())
}

#[derive(Parser)]
#[command(name = "seedshard")]
#[command(about = "Split BIP-0039 mnemonics into verifiable Shamir shares")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Split a secret mnemonic into share mnemonics
    Split {
        /// Number of shares to create
        #[arg(short = 'n', long)]
        shares: u32,

        /// Number of shares needed to recover the secret
        #[arg(short = 'k', long, value_parser = parse_threshold)]
        needed: Threshold,

        /// Salt mixed into the deterministic coefficient derivation
        #[arg(long, default_value_t = 0)]
        salt: u64,

        /// Where to write the verification metadata
        #[arg(long, default_value = "shares.json")]
        file: PathBuf,

        /// The secret mnemonic; prompted for when omitted
        mnemonic: Option<String>,

        /// An optional second secret carried by the same split
        mnemonic2: Option<String>,
    },
    /// Check that a share mnemonic belongs to a split
    Verify {
        /// The metadata file written by split
        #[arg(long)]
        file: PathBuf,

        /// The share mnemonic to check
        mnemonic: String,
    },
    /// Recover the secret mnemonic(s) from share mnemonics
    Recover {
        /// The metadata file written by split
        #[arg(long)]
        file: PathBuf,

        /// Share mnemonics, at least the split's threshold of them
        #[arg(required = true)]
        mnemonics: Vec<String>,
    },
}
