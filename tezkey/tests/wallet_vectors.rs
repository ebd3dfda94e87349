//! Known-answer and cross-path checks for wallet creation and import.

use ed25519_dalek::{Signer, Verifier};
use tezkey::hash::public_key_hash;
use tezkey::{
    create_wallet, import_encrypted_wallet, import_wallet, Error, ErrorKind, Field, Prefix, Wallet,
};

const MNEMONIC: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

struct Vector {
    password: &'static str,
    address: &'static str,
    public_key: &'static str,
    secret_key: &'static str,
    seed: &'static str,
}

const VECTORS: &[Vector] = &[
    Vector {
        password: "",
        address: "tz1XWx9KPmgGV1u8of8dD6Ya7DTvUS1up2NR",
        public_key: "edpkv9C3itT7XLs347UdyXZtUBAj3zazjz68fAfc5Srm7JSsu4Rodk",
        secret_key: "edskRpQGinbyLHw42twuoemyiX1TwEvYeB2wH7C21o6jJQ6bVmUMb5fbJErgLMDcAScuHD2Ch8Q9aghzPmjeNS5QM18JpZbaFa",
        seed: "edsk3Pbx1PMot7jQPHNqcpwACMR7LVu2TcYEvRNK9pXFHqDZPKFwon",
    },
    Vector {
        password: "TREZOR",
        address: "tz1W1VHYWCTYuzsFMD56XJ7hmXt6TkymNmDo",
        public_key: "edpkuG1bNHxCXwimdU3ybvn5wV4CuQn4qWmbYrVd9fASXYU7L59Nmt",
        secret_key: "edskS3q4eauEjCK1xMd1BkGrNRG8N3fFrnURrn3DZNc3RCH7BBS5Gw8WB5iWhyTT1jNw7swXHtTEQaeVymsPKcqmaV97xgndJg",
        seed: "edsk4AobYA4B3RDD6fdr9GChkU9dBsMAm46nWZawx5hHV4PUkKhQJK",
    },
];

const ALICE_ADDRESS: &str = "tz1VSUr8wwNhLAzempoch5d6hLRiTh8Cjcjb";
const ALICE_PUBLIC_KEY: &str = "edpkvGfYw3LyB1UcCahKQk4rF2tvbMUk8GFiTuMjL75uGXrpvKXhjn";
const ALICE_SEED: &str = "edsk3QoqBuvdamxouPhin7swCvkQNgq4jP5KZPbwWNnwdZpSpJiEbq";
const ALICE_SECRET_KEY: &str = "edskRpm2mUhvoUjHjXgMoDRxMKhtKfww1ixmWiHCWhHuMEEbGzdnz8Ks4vgarKDtxok7HmrEo1JzkXkdkvyw7Rtw6BNtSd7MJ7";

const ENCRYPTED_PASSWORD: &str = "correct horse battery staple";
const ENCRYPTED: &str = "edesk1GBQ31Tu4CffRwSAXsyyqvLuM78nV6pLgheB21RuUcJSWbJgHFsGxgvxGmoZyUdN8qVeCvhdRHuMDr4xBzC";

/// Swap one character for a different base58 character.
fn flip_char(text: &str, index: usize) -> String {
    let mut chars: Vec<char> = text.chars().collect();
    chars[index] = if chars[index] == 'a' { 'b' } else { 'a' };
    chars.into_iter().collect()
}

#[test]
fn create_matches_known_vectors() {
    for v in VECTORS {
        let wallet = create_wallet(MNEMONIC, v.password).unwrap();
        assert_eq!(wallet.address(), v.address, "password {:?}", v.password);
        assert_eq!(wallet.public_key(), v.public_key);
        assert_eq!(wallet.secret_key(), v.secret_key);
        assert_eq!(wallet.secret_key().len(), 98);
        assert_eq!(wallet.mnemonic(), MNEMONIC);
        assert_eq!(
            Prefix::Seed.encode(wallet.seed().unwrap()),
            v.seed,
            "seed encoding"
        );
    }
}

#[test]
fn every_path_derives_address_and_public_key_from_its_key_pair() {
    let v = &VECTORS[1];
    let wallets = [
        create_wallet(MNEMONIC, v.password).unwrap(),
        import_wallet(v.address, v.public_key, v.seed).unwrap(),
        import_wallet(v.address, v.public_key, v.secret_key).unwrap(),
        import_encrypted_wallet(ENCRYPTED_PASSWORD, ENCRYPTED).unwrap(),
        import_wallet(ALICE_ADDRESS, ALICE_PUBLIC_KEY, ALICE_SECRET_KEY).unwrap(),
    ];

    for wallet in &wallets {
        let public_key = wallet.keypair().public_key();
        assert_eq!(public_key_hash(public_key).unwrap(), wallet.address());
        assert_eq!(Prefix::PublicKey.encode(public_key), wallet.public_key());
        assert_eq!(
            Prefix::SecretKey.encode(wallet.keypair().secret_key()),
            wallet.secret_key()
        );
    }
}

#[test]
fn create_is_deterministic() {
    let a = create_wallet(MNEMONIC, "pw").unwrap();
    let b = create_wallet(MNEMONIC, "pw").unwrap();
    assert_eq!(a.address(), b.address());
    assert_eq!(a.public_key(), b.public_key());
    assert_eq!(a.secret_key(), b.secret_key());
}

#[test]
fn password_changes_identity() {
    let a = create_wallet(MNEMONIC, "").unwrap();
    let b = create_wallet(MNEMONIC, " ").unwrap();
    assert_ne!(a.address(), b.address());
}

#[test]
fn mnemonic_is_not_checked_against_word_list() {
    let wallet = create_wallet("not a real bip39 phrase", "").unwrap();
    assert!(wallet.address().starts_with("tz1"));
    assert_eq!(wallet.address().len(), 36);
}

#[test]
fn created_wallet_imports_back() {
    for v in VECTORS {
        let created = create_wallet(MNEMONIC, v.password).unwrap();
        let imported =
            import_wallet(created.address(), created.public_key(), created.secret_key()).unwrap();
        assert_eq!(imported.address(), created.address());
        assert_eq!(imported.public_key(), created.public_key());
        assert_eq!(imported.secret_key(), created.secret_key());
        assert_eq!(imported.mnemonic(), "");
    }
}

#[test]
fn seed_and_full_key_imports_agree() {
    for v in VECTORS {
        let from_seed = import_wallet(v.address, v.public_key, v.seed).unwrap();
        let from_full = import_wallet(v.address, v.public_key, v.secret_key).unwrap();

        assert_eq!(from_seed.address(), from_full.address());
        assert_eq!(from_seed.public_key(), from_full.public_key());
        assert_eq!(from_seed.secret_key(), from_full.secret_key());

        let message = b"tezos wallet test message";
        let sig_a = from_seed.keypair().signing_key().sign(message);
        let sig_b = from_full.keypair().signing_key().sign(message);
        assert_eq!(sig_a, sig_b);
        from_full
            .keypair()
            .signing_key()
            .verifying_key()
            .verify(message, &sig_a)
            .unwrap();
    }
}

#[test]
fn alice_imports() {
    let wallet = Wallet::import(ALICE_ADDRESS, ALICE_PUBLIC_KEY, ALICE_SEED).unwrap();
    assert_eq!(wallet.secret_key(), ALICE_SECRET_KEY);
    let wallet = Wallet::import(ALICE_ADDRESS, ALICE_PUBLIC_KEY, ALICE_SECRET_KEY).unwrap();
    assert_eq!(wallet.public_key(), ALICE_PUBLIC_KEY);
}

#[test]
fn tampered_address_is_rejected() {
    let v = &VECTORS[0];
    let address = flip_char(v.address, 10);
    let err = import_wallet(&address, v.public_key, v.secret_key).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Mismatch);
    assert!(matches!(
        err,
        Error::Mismatch {
            field: Field::Address,
            ..
        }
    ));
}

#[test]
fn tampered_public_key_is_rejected() {
    let v = &VECTORS[0];
    let public_key = flip_char(v.public_key, 20);
    let err = import_wallet(v.address, &public_key, v.seed).unwrap_err();
    assert!(matches!(
        err,
        Error::Mismatch {
            field: Field::PublicKey,
            ..
        }
    ));
}

#[test]
fn embedded_public_key_must_match_seed() {
    let wallet = create_wallet(MNEMONIC, "").unwrap();
    let mut bytes = *wallet.keypair().secret_key();
    bytes[63] ^= 0x01;
    let forged = Prefix::SecretKey.encode(&bytes);

    let err = import_wallet(wallet.address(), wallet.public_key(), &forged).unwrap_err();
    assert!(matches!(
        err,
        Error::Mismatch {
            field: Field::PublicKey,
            ..
        }
    ));
}

#[test]
fn secret_key_shape_is_validated() {
    let v = &VECTORS[0];

    let err = import_wallet(v.address, v.public_key, &v.secret_key[..97]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);

    let wrong_tag = format!("spsk{}", &v.secret_key[4..]);
    let err = import_wallet(v.address, v.public_key, &wrong_tag).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert!(matches!(err, Error::InvalidTag { .. }));
}

#[test]
fn secret_key_checksum_is_validated() {
    let v = &VECTORS[0];
    let corrupted = flip_char(v.secret_key, 50);
    let err = import_wallet(v.address, v.public_key, &corrupted).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Codec);
}

#[test]
fn encrypted_import_matches_mnemonic_wallet() {
    let wallet = import_encrypted_wallet(ENCRYPTED_PASSWORD, ENCRYPTED).unwrap();
    let v = &VECTORS[0];
    assert_eq!(wallet.address(), v.address);
    assert_eq!(wallet.public_key(), v.public_key);
    assert_eq!(wallet.secret_key(), v.secret_key);
    assert_eq!(wallet.mnemonic(), "");
}

#[test]
fn encrypted_import_rejects_wrong_password() {
    let err = import_encrypted_wallet("wrong", ENCRYPTED).unwrap_err();
    assert_eq!(err, Error::Authentication);
    assert_eq!(err.kind(), ErrorKind::Authentication);
}

#[test]
fn encrypted_import_rejects_bad_shape() {
    let err = import_encrypted_wallet(ENCRYPTED_PASSWORD, &ENCRYPTED[..80]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);

    let err = import_encrypted_wallet(ENCRYPTED_PASSWORD, ALICE_SECRET_KEY).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
}

#[test]
fn export_then_import_encrypted() {
    let wallet = create_wallet(MNEMONIC, "TREZOR").unwrap();
    let encrypted = wallet.export_encrypted("s3cret", &[7u8; 8]).unwrap();
    assert_eq!(encrypted.len(), 88);
    assert!(encrypted.starts_with("edesk"));

    let restored = import_encrypted_wallet("s3cret", &encrypted).unwrap();
    assert_eq!(restored.address(), wallet.address());
    assert_eq!(restored.secret_key(), wallet.secret_key());
}

#[test]
fn export_of_known_seed_is_stable() {
    let wallet = create_wallet(MNEMONIC, "").unwrap();
    let encrypted = wallet
        .export_encrypted(ENCRYPTED_PASSWORD, &[1, 2, 3, 4, 5, 6, 7, 8])
        .unwrap();
    assert_eq!(encrypted, ENCRYPTED);
}
