use std::fs;
use std::path::PathBuf;

use seedshard::codec;
use seedshard::commands;
use seedshard::domain::{ShareCount, SplitConfig, Threshold};
use seedshard::gf::{FieldElement, get_modulus};
use seedshard::shamir;

fn config(k: u32, n: u32) -> SplitConfig {
    SplitConfig::new(Threshold::new(k).unwrap(), ShareCount::new(n).unwrap()).unwrap()
}

fn mnemonic_element(mnemonic: &str) -> FieldElement {
    let entropy = codec::decode(mnemonic).unwrap();
    FieldElement::from_bytes(&entropy, get_modulus(entropy.len() * 8).unwrap()).unwrap()
}

fn temp_file(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("seedshard-{}-{name}.json", std::process::id()))
}

const SECRET_12: &str = "legal winner thank year wave sausage worth useful legal winner thank yellow";
const SECRET_24: &str = "letter advice cage absurd amount doctor acoustic avoid letter advice cage \
                         absurd amount doctor acoustic avoid letter advice cage absurd amount \
                         doctor acoustic bless";

#[test]
fn split_verify_recover_through_the_metadata_file() {
    let path = temp_file("flow");
    commands::split_mnemonics(SECRET_12, None, config(2, 3), 5, &path).unwrap();

    // Splitting is deterministic, so the shares the command printed are
    // reproducible from the library.
    let secret = mnemonic_element(SECRET_12);
    let (shares, _) = shamir::split(&secret, None, config(2, 3), 5).unwrap();
    let share_mnemonics: Vec<String> = shares
        .iter()
        .map(|share| codec::encode(&share.to_bytes()).unwrap())
        .collect();

    // Each share verifies through the file and reports its coordinate.
    for (i, mnemonic) in share_mnemonics.iter().enumerate() {
        let index = commands::verify_share(&path, mnemonic).unwrap();
        assert_eq!(index.get() as usize, i + 1);
    }

    // Any two shares recover; the command prints, the library checks.
    commands::recover_mnemonics(&path, &share_mnemonics[1..]).unwrap();
    let metadata = shamir::split(&secret, None, config(2, 3), 5).unwrap().1;
    let recovered = shamir::recover(&shares[1..], &metadata).unwrap();
    assert_eq!(
        codec::encode(&recovered[0].to_bytes()).unwrap(),
        SECRET_12
    );

    fs::remove_file(&path).unwrap();
}

#[test]
fn verify_rejects_a_foreign_share() {
    let path = temp_file("foreign");
    commands::split_mnemonics(SECRET_12, None, config(2, 3), 0, &path).unwrap();

    // A valid mnemonic that was never part of the split.
    let foreign = "zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo wrong";
    assert!(commands::verify_share(&path, foreign).is_err());

    fs::remove_file(&path).unwrap();
}

#[test]
fn five_of_sixteen_over_the_largest_field() {
    let secret = mnemonic_element(SECRET_24);
    let (shares, metadata) = shamir::split(&secret, None, config(5, 16), 1).unwrap();
    assert_eq!(shares.len(), 16);

    for subset in [[0, 3, 7, 11, 15], [1, 2, 4, 8, 9], [15, 13, 10, 5, 0]] {
        let picked: Vec<FieldElement> = subset.iter().map(|&i| shares[i].clone()).collect();
        let recovered = shamir::recover(&picked, &metadata).unwrap();
        assert_eq!(recovered, vec![secret.clone()]);
    }

    // Four shares are not enough.
    assert!(shamir::recover(&shares[..4], &metadata).is_err());
}

#[test]
fn corrupting_the_file_kills_every_share() {
    let path = temp_file("tamper");
    commands::split_mnemonics(SECRET_12, None, config(2, 3), 0, &path).unwrap();

    // Flip one byte of c[0] in the persisted JSON.
    let json = fs::read_to_string(&path).unwrap();
    let mut value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let byte = value["c"][0][0].as_u64().unwrap();
    value["c"][0][0] = serde_json::Value::from((byte as u8 ^ 0x01) as u64);
    fs::write(&path, serde_json::to_string(&value).unwrap()).unwrap();

    let secret = mnemonic_element(SECRET_12);
    let (shares, _) = shamir::split(&secret, None, config(2, 3), 0).unwrap();
    let share_mnemonics: Vec<String> = shares
        .iter()
        .map(|share| codec::encode(&share.to_bytes()).unwrap())
        .collect();

    for mnemonic in &share_mnemonics {
        assert!(commands::verify_share(&path, mnemonic).is_err());
    }
    assert!(commands::recover_mnemonics(&path, &share_mnemonics).is_err());

    fs::remove_file(&path).unwrap();
}

#[test]
fn metadata_file_layout_on_disk() {
    let path = temp_file("layout");
    commands::split_mnemonics(SECRET_12, None, config(2, 3), 0, &path).unwrap();

    let secret = mnemonic_element(SECRET_12);
    let (_, metadata) = shamir::split(&secret, None, config(2, 3), 0).unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    let v = value["v"].as_array().unwrap();
    let c = value["c"].as_array().unwrap();
    let s = value["s"].as_array().unwrap();

    assert_eq!(v.len(), 3);
    assert_eq!(c.len(), 2);
    assert_eq!(s.len(), 1);
    assert_eq!(s[0].as_u64().unwrap(), 1);
    // 128-bit field: commitments are 32 bytes, coefficients 16.
    assert!(v.iter().all(|entry| entry.as_array().unwrap().len() == 32));
    assert!(c.iter().all(|entry| entry.as_array().unwrap().len() == 16));

    // The commitment array is persisted in reverse share order.
    let on_disk_first: Vec<u8> = v[0]
        .as_array()
        .unwrap()
        .iter()
        .map(|byte| byte.as_u64().unwrap() as u8)
        .collect();
    assert_eq!(&on_disk_first, metadata.commitments().last().unwrap());

    fs::remove_file(&path).unwrap();
}

#[test]
fn two_secrets_ride_one_split() {
    let path = temp_file("two-secrets");
    commands::split_mnemonics(SECRET_12, Some(SECRET_12_ALT), config(3, 5), 2, &path).unwrap();

    let m1 = mnemonic_element(SECRET_12);
    let m2 = mnemonic_element(SECRET_12_ALT);
    let (shares, metadata) = shamir::split(&m1, Some(&m2), config(3, 5), 2).unwrap();

    let recovered = shamir::recover(&shares[2..], &metadata).unwrap();
    assert_eq!(recovered.len(), 2);
    assert_eq!(codec::encode(&recovered[0].to_bytes()).unwrap(), SECRET_12);
    assert_eq!(
        codec::encode(&recovered[1].to_bytes()).unwrap(),
        SECRET_12_ALT
    );

    let share_mnemonics: Vec<String> = shares
        .iter()
        .map(|share| codec::encode(&share.to_bytes()).unwrap())
        .collect();
    commands::recover_mnemonics(&path, &share_mnemonics).unwrap();

    fs::remove_file(&path).unwrap();
}

const SECRET_12_ALT: &str = "army van defense carry jealous true garbage claim echo media make crunch";

#[test]
fn secrets_of_different_lengths_cannot_share_a_split() {
    let path = temp_file("mixed-widths");
    let result = commands::split_mnemonics(SECRET_12, Some(SECRET_24), config(3, 5), 0, &path);
    assert!(
        result
            .unwrap_err()
            .to_string()
            .contains("same length")
    );
}

#[test]
fn every_mnemonic_width_round_trips() {
    for entropy_len in codec::ENTROPY_LENGTHS {
        let entropy: Vec<u8> = (0..entropy_len as u8).map(|b| b.wrapping_mul(37)).collect();
        let mnemonic = codec::encode(&entropy).unwrap();
        let secret = mnemonic_element(&mnemonic);

        let (shares, metadata) = shamir::split(&secret, None, config(3, 4), 0).unwrap();
        let recovered = shamir::recover(&shares[1..], &metadata).unwrap();
        assert_eq!(recovered, vec![secret]);
        assert_eq!(
            codec::encode(&recovered[0].to_bytes()).unwrap(),
            mnemonic
        );
    }
}

#[test]
fn missing_metadata_file_is_reported() {
    let path = temp_file("missing");
    let error = commands::verify_share(&path, SECRET_12).unwrap_err();
    assert!(error.to_string().contains("failed to read metadata"));
}
