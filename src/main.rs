use std::io::Read;

use anyhow::{Context, Result, bail};
use clap::Parser;
use zeroize::Zeroizing;

use seedshard::cli::{Cli, Commands};
use seedshard::commands;
use seedshard::domain::{ShareCount, SplitConfig};

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Split {
            shares,
            needed,
            salt,
            file,
            mnemonic,
            mnemonic2,
        } => {
            let config = SplitConfig::new(needed, ShareCount::new(shares)?)?;
            let secret = match mnemonic {
                Some(secret) => Zeroizing::new(secret),
                None => read_secret()?,
            };
            commands::split_mnemonics(&secret, mnemonic2.as_deref(), config, salt, &file)?;
        }
        Commands::Verify { file, mnemonic } => {
            let index = commands::verify_share(&file, &mnemonic)?;
            println!("{}", index.get());
        }
        Commands::Recover { file, mnemonics } => {
            commands::recover_mnemonics(&file, &mnemonics)?;
        }
    }

    Ok(())
}

/// Reads the secret mnemonic without echo from a terminal, or from piped
/// stdin otherwise.
fn read_secret() -> Result<Zeroizing<String>> {
    let raw = if atty::is(atty::Stream::Stdin) {
        Zeroizing::new(
            rpassword::prompt_password("secret mnemonic: ")
                .context("failed to read the secret mnemonic")?,
        )
    } else {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read the secret mnemonic from stdin")?;
        Zeroizing::new(buffer)
    };
    let trimmed = Zeroizing::new(raw.trim().to_string());
    if trimmed.is_empty() {
        bail!("no secret mnemonic provided");
    }
    Ok(trimmed)
}
