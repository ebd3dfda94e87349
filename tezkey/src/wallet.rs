//! Tezos `tz1` wallets and their three construction paths.

use zeroize::Zeroizing;

use crate::encoding::base58check_decode_raw;
use crate::error::Field;
use crate::hash::public_key_hash;
use crate::kdf::seed_from_mnemonic;
use crate::keypair::{KeyPair, SECRET_KEY_LEN, SEED_LEN};
use crate::prefix::Prefix;
use crate::secretbox::{self, SALT_LEN};
use crate::{Error, Result};

/// Lengths accepted for a plaintext secret key: full key or seed.
const SECRET_KEY_TEXT_LENS: &[usize] = &[98, 54];
const ENCRYPTED_KEY_TEXT_LENS: &[usize] = &[88];

/// An ed25519 account with its derived address and encodings.
///
/// A `Wallet` only exists fully populated: [`address`](Self::address) and
/// [`public_key`](Self::public_key) are always re-derived from the key pair
/// it owns, never copied from caller input.
pub struct Wallet {
    /// Account address (`tz1...`).
    address: String,
    /// Mnemonic phrase; empty for imported wallets.
    mnemonic: Zeroizing<String>,
    /// Seed the key pair was expanded from, when known.
    seed: Option<Zeroizing<[u8; SEED_LEN]>>,
    /// Signing key pair.
    keypair: KeyPair,
    /// `edsk...` encoding of the expanded secret key.
    secret_key: Zeroizing<String>,
    /// `edpk...` encoding of the public key.
    public_key: String,
}

impl Wallet {
    /// Generate a wallet from a fresh random mnemonic.
    ///
    /// # Arguments
    ///
    /// * `word_count` - Number of words (12, 15, 18, 21, or 24)
    /// * `password` - Password mixed into the seed derivation (may be empty)
    ///
    /// # Note
    ///
    /// This function requires the `rand` feature to be enabled.
    #[cfg(feature = "rand")]
    pub fn generate(word_count: usize, password: &str) -> Result<Self> {
        let mnemonic = crate::mnemonic::generate(word_count)?;
        Self::create(&mnemonic, password)
    }

    /// Derive a wallet from a mnemonic phrase and password.
    ///
    /// The seed is PBKDF2-HMAC-SHA512 of the phrase, salted with
    /// `"mnemonic" + password`, 2048 rounds, 32 bytes. The phrase is not
    /// checked against any word list.
    pub fn create(mnemonic: &str, password: &str) -> Result<Self> {
        let seed = seed_from_mnemonic(mnemonic, password)?;
        let keypair = KeyPair::from_seed(&seed);
        let secret_key = keypair.secret_key_encoded();

        let wallet = Self::assemble(
            keypair,
            Some(seed),
            Zeroizing::new(mnemonic.to_owned()),
            secret_key,
        )?;
        tracing::debug!(address = %wallet.address, "created wallet from mnemonic");
        Ok(wallet)
    }

    /// Import an unencrypted wallet and check it against the expected
    /// address and public key.
    ///
    /// `secret_key` is either a full 98-character `edsk` secret key or a
    /// 54-character `edsk` seed. The stored secret key is always the full
    /// form.
    ///
    /// # Errors
    ///
    /// Validation errors for a bad length or tag, codec errors for a bad
    /// checksum, and [`Error::Mismatch`] when the key does not produce the
    /// given `address` or `public_key`.
    ///
    /// A full secret key is stricter than a bare seed: its trailing 32
    /// bytes must be the public key its leading seed expands to, or the
    /// import fails with [`Error::Mismatch`] on [`Field::PublicKey`]. Keys
    /// that some tools accept because they only read the seed half are
    /// rejected here.
    pub fn import(address: &str, public_key: &str, secret_key: &str) -> Result<Self> {
        let wallet = Self::from_secret_key(secret_key)?;

        wallet.verify(Field::Address, &wallet.address, address)?;
        wallet.verify(Field::PublicKey, &wallet.public_key, public_key)?;

        tracing::debug!(address = %wallet.address, "imported wallet");
        Ok(wallet)
    }

    /// Load an unencrypted `edsk` secret key or seed without checking it
    /// against a known address.
    ///
    /// A full secret key must still carry the public key its seed expands
    /// to. Prefer [`Wallet::import`] whenever the address is known.
    pub fn from_secret_key(secret_key: &str) -> Result<Self> {
        check_shape(
            secret_key,
            Field::SecretKey,
            SECRET_KEY_TEXT_LENS,
            Prefix::SecretKey.tag(),
        )?;

        if secret_key.len() == Prefix::SecretKey.encoded_len() {
            let decoded = decode_payload(secret_key, Prefix::SecretKey, Field::SecretKey)?;
            let mut bytes = Zeroizing::new([0u8; SECRET_KEY_LEN]);
            bytes.copy_from_slice(&decoded);
            let keypair = KeyPair::from_keypair_bytes(&bytes)?;

            tracing::debug!("loading full secret key");
            Self::assemble(
                keypair,
                None,
                Zeroizing::default(),
                Zeroizing::new(secret_key.to_owned()),
            )
        } else {
            let decoded = decode_payload(secret_key, Prefix::Seed, Field::SecretKey)?;
            let mut seed = Zeroizing::new([0u8; SEED_LEN]);
            seed.copy_from_slice(&decoded);
            let keypair = KeyPair::from_seed(&seed);
            let encoded = keypair.secret_key_encoded();

            tracing::debug!("loading secret key seed");
            Self::assemble(keypair, Some(seed), Zeroizing::default(), encoded)
        }
    }

    /// Import a password-encrypted (`edesk...`) secret key.
    ///
    /// # Errors
    ///
    /// Validation errors for a bad length or tag, codec errors for a bad
    /// checksum, and [`Error::Authentication`] when the password does not
    /// open the envelope.
    pub fn import_encrypted(password: &str, encrypted_secret_key: &str) -> Result<Self> {
        let field = Field::EncryptedSecretKey;
        check_shape(
            encrypted_secret_key,
            field,
            ENCRYPTED_KEY_TEXT_LENS,
            Prefix::EncryptedSecretKey.tag(),
        )?;

        let payload = decode_payload(encrypted_secret_key, Prefix::EncryptedSecretKey, field)?;
        let seed = secretbox::open(&payload, password).map_err(|e| {
            tracing::warn!(error = %e, "could not open encrypted secret key");
            e
        })?;
        let keypair = KeyPair::from_seed(&seed);
        let secret_key = keypair.secret_key_encoded();

        let wallet = Self::assemble(keypair, Some(seed), Zeroizing::default(), secret_key)?;
        tracing::debug!(address = %wallet.address, "imported encrypted wallet");
        Ok(wallet)
    }

    fn assemble(
        keypair: KeyPair,
        seed: Option<Zeroizing<[u8; SEED_LEN]>>,
        mnemonic: Zeroizing<String>,
        secret_key: Zeroizing<String>,
    ) -> Result<Self> {
        let address = public_key_hash(keypair.public_key())?;
        let public_key = keypair.public_key_encoded();

        Ok(Self {
            address,
            mnemonic,
            seed,
            keypair,
            secret_key,
            public_key,
        })
    }

    fn verify(&self, field: Field, derived: &str, provided: &str) -> Result<()> {
        if derived == provided {
            return Ok(());
        }
        tracing::warn!(%field, derived, provided, "imported key does not match");
        Err(Error::Mismatch {
            field,
            expected: provided.to_owned(),
            actual: derived.to_owned(),
        })
    }

    /// Encrypt this wallet's seed under `password` as an `edesk` string.
    ///
    /// `salt` must be fresh random bytes for every export.
    pub fn export_encrypted(&self, password: &str, salt: &[u8; SALT_LEN]) -> Result<String> {
        secretbox::seal(self.keypair.seed(), password, salt)
    }

    /// Account address (`tz1...`).
    #[inline]
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Mnemonic phrase; empty when the wallet was imported.
    ///
    /// **Security Warning**: Handle this value carefully as it can
    /// reconstruct the secret key.
    #[inline]
    #[must_use]
    pub fn mnemonic(&self) -> &str {
        &self.mnemonic
    }

    /// Seed the key pair was derived from.
    ///
    /// `None` for wallets imported from a full secret key.
    #[inline]
    #[must_use]
    pub fn seed(&self) -> Option<&[u8; SEED_LEN]> {
        self.seed.as_deref()
    }

    /// Signing key pair.
    #[inline]
    #[must_use]
    pub fn keypair(&self) -> &KeyPair {
        &self.keypair
    }

    /// `edsk...` encoding of the full 64-byte secret key.
    #[inline]
    #[must_use]
    pub fn secret_key(&self) -> &str {
        &self.secret_key
    }

    /// `edpk...` encoding of the public key.
    #[inline]
    #[must_use]
    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    /// Whether this wallet was created from a mnemonic.
    #[must_use]
    pub fn has_mnemonic(&self) -> bool {
        !self.mnemonic.is_empty()
    }
}

impl core::fmt::Debug for Wallet {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Wallet")
            .field("address", &self.address)
            .field("public_key", &self.public_key)
            .field("has_mnemonic", &self.has_mnemonic())
            .field("has_seed", &self.seed.is_some())
            .finish_non_exhaustive()
    }
}

/// Create a wallet from a mnemonic and password. See [`Wallet::create`].
pub fn create_wallet(mnemonic: &str, password: &str) -> Result<Wallet> {
    Wallet::create(mnemonic, password)
}

/// Import an unencrypted wallet. See [`Wallet::import`].
pub fn import_wallet(address: &str, public_key: &str, secret_key: &str) -> Result<Wallet> {
    Wallet::import(address, public_key, secret_key)
}

/// Import an encrypted wallet. See [`Wallet::import_encrypted`].
pub fn import_encrypted_wallet(password: &str, encrypted_secret_key: &str) -> Result<Wallet> {
    Wallet::import_encrypted(password, encrypted_secret_key)
}

/// Check text length, then tag characters.
fn check_shape(text: &str, field: Field, lengths: &'static [usize], tag: &'static str) -> Result<()> {
    if !lengths.contains(&text.len()) {
        return Err(Error::InvalidLength {
            field,
            expected: lengths,
            actual: text.len(),
        });
    }
    if !text.starts_with(tag) {
        return Err(Error::InvalidTag {
            field,
            expected: tag,
            actual: text.chars().take(tag.len()).collect(),
        });
    }
    Ok(())
}

/// Decode `text`, require `prefix`'s binary tag, and return the payload.
fn decode_payload(text: &str, prefix: Prefix, field: Field) -> Result<Zeroizing<Vec<u8>>> {
    let raw = base58check_decode_raw(text).map_err(Error::codec(field))?;
    if !prefix.is_prefix_of(&raw) {
        return Err(Error::PrefixMismatch {
            field,
            expected: prefix,
        });
    }

    let payload = &raw[prefix.bytes().len()..];
    if payload.len() != prefix.payload_len() {
        return Err(Error::InvalidPayload {
            field,
            expected_len: prefix.payload_len(),
            actual_len: payload.len(),
        });
    }
    Ok(Zeroizing::new(payload.to_vec()))
}
