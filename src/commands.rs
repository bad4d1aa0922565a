//! Command flows behind the CLI: split, verify and recover, plus the JSON
//! metadata file they exchange.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use zeroize::Zeroizing;

use crate::codec;
use crate::domain::{ShareIndex, SplitConfig};
use crate::error::Error;
use crate::gf::{FieldElement, get_modulus};
use crate::shamir::{self, MetadataFile, SplitMetadata};

/// Decodes a mnemonic into a field element; the field width follows from
/// the entropy length.
fn mnemonic_element(mnemonic: &str) -> Result<FieldElement> {
    let entropy = Zeroizing::new(codec::decode(mnemonic)?);
    let modulus = get_modulus(entropy.len() * 8)?;
    Ok(FieldElement::from_bytes(&entropy, modulus)?)
}

fn write_metadata(path: &Path, metadata: &SplitMetadata) -> Result<()> {
    let file = MetadataFile::from(metadata);
    let json = serde_json::to_string_pretty(&file)?;
    fs::write(path, json)
        .with_context(|| format!("failed to write metadata to {}", path.display()))
}

fn read_metadata(path: &Path) -> Result<SplitMetadata> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read metadata from {}", path.display()))?;
    let file: MetadataFile = serde_json::from_str(&json)
        .with_context(|| format!("{} is not a metadata file", path.display()))?;
    Ok(SplitMetadata::try_from(file)?)
}

/// Splits a secret mnemonic (optionally two) into share mnemonics.
///
/// Shares are printed to stdout as `x: mnemonic`, one per line, and the
/// verification metadata is written to `path`.
///
/// # Errors
/// Returns an error when a mnemonic fails to parse, the two secrets are of
/// different lengths, or the metadata file cannot be written.
pub fn split_mnemonics(
    secret: &str,
    second_secret: Option<&str>,
    config: SplitConfig,
    salt: u64,
    path: &Path,
) -> Result<()> {
    let element = mnemonic_element(secret).context("failed to parse the secret mnemonic")?;
    let second_element = second_secret
        .map(mnemonic_element)
        .transpose()
        .context("failed to parse the second secret mnemonic")?;
    if let Some(m2) = &second_element {
        if m2.modulus() != element.modulus() {
            bail!("both secret mnemonics must be the same length");
        }
    }

    let (shares, metadata) = shamir::split(&element, second_element.as_ref(), config, salt)?;
    for (i, share) in shares.iter().enumerate() {
        let mnemonic = Zeroizing::new(codec::encode(&share.to_bytes())?);
        println!("{}: {}", i + 1, &*mnemonic);
    }
    write_metadata(path, &metadata)?;
    eprintln!(
        "wrote verification data for {} shares (any {} recover) to {}",
        *config.share_count(),
        *config.threshold(),
        path.display()
    );
    Ok(())
}

/// Checks one share mnemonic against a metadata file and returns its
/// x-coordinate.
///
/// # Errors
/// Returns an error when the share does not belong to the split, so the
/// process exits nonzero for invalid shares.
pub fn verify_share(path: &Path, mnemonic: &str) -> Result<ShareIndex> {
    let metadata = read_metadata(path)?;
    let share = mnemonic_element(mnemonic).context("failed to parse the share mnemonic")?;
    match shamir::verify(&share, &metadata) {
        Some(index) => Ok(index),
        None => bail!("share does not belong to this split"),
    }
}

/// Recovers the secret mnemonic(s) from share mnemonics and prints them to
/// stdout, one per line.
///
/// # Errors
/// Returns an error when shares fail to parse or too few of them verify;
/// rejected shares are reported on stderr.
pub fn recover_mnemonics(path: &Path, mnemonics: &[String]) -> Result<()> {
    let metadata = read_metadata(path)?;
    let shares = mnemonics
        .iter()
        .enumerate()
        .map(|(i, mnemonic)| {
            mnemonic_element(mnemonic)
                .with_context(|| format!("failed to parse share mnemonic #{}", i + 1))
        })
        .collect::<Result<Vec<_>>>()?;

    let secrets = match shamir::recover(&shares, &metadata) {
        Ok(secrets) => secrets,
        Err(Error::TooFewValidShares {
            accepted,
            needed,
            rejected,
        }) => {
            for share in &rejected {
                eprintln!("rejected share: {}", codec::encode(&share.to_bytes())?);
            }
            bail!("only {accepted} of the {needed} required shares verified");
        }
        Err(error) => return Err(error.into()),
    };

    for secret in &secrets {
        let mnemonic = Zeroizing::new(codec::encode(&secret.to_bytes())?);
        println!("{}", &*mnemonic);
    }
    Ok(())
}
