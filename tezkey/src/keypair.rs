//! Ed25519 key pairs in their expanded 64-byte form.

use ed25519_dalek::SigningKey;
use zeroize::Zeroizing;

use crate::error::Field;
use crate::prefix::Prefix;
use crate::{Error, Result};

/// Length of an ed25519 seed.
pub const SEED_LEN: usize = 32;
/// Length of an ed25519 public key.
pub const PUBLIC_KEY_LEN: usize = 32;
/// Length of an expanded secret key (seed followed by public key).
pub const SECRET_KEY_LEN: usize = 64;

/// An ed25519 signing key pair.
///
/// The secret half is the 64-byte `seed || public_key` layout used by the
/// `edsk` encoding. Both halves are always set together.
pub struct KeyPair {
    signing_key: SigningKey,
    secret_key: Zeroizing<[u8; SECRET_KEY_LEN]>,
    public_key: [u8; PUBLIC_KEY_LEN],
}

impl KeyPair {
    /// Expand a 32-byte seed into a key pair.
    #[must_use]
    pub fn from_seed(seed: &[u8; SEED_LEN]) -> Self {
        Self::from_signing_key(SigningKey::from_bytes(seed))
    }

    /// Rebuild a key pair from its expanded 64-byte form.
    ///
    /// Fails with [`Error::Mismatch`] if the trailing public key is not the
    /// one the leading seed expands to.
    pub fn from_keypair_bytes(bytes: &[u8; SECRET_KEY_LEN]) -> Result<Self> {
        let mut seed = Zeroizing::new([0u8; SEED_LEN]);
        seed.copy_from_slice(&bytes[..SEED_LEN]);
        let expanded = Self::from_seed(&seed);

        if expanded.public_key[..] != bytes[SEED_LEN..] {
            return Err(Error::Mismatch {
                field: Field::PublicKey,
                expected: Prefix::PublicKey.encode(&bytes[SEED_LEN..]),
                actual: expanded.public_key_encoded(),
            });
        }
        Ok(expanded)
    }

    fn from_signing_key(signing_key: SigningKey) -> Self {
        Self {
            secret_key: Zeroizing::new(signing_key.to_keypair_bytes()),
            public_key: signing_key.verifying_key().to_bytes(),
            signing_key,
        }
    }

    /// Expanded secret key (`seed || public_key`).
    #[inline]
    pub fn secret_key(&self) -> &[u8; SECRET_KEY_LEN] {
        &self.secret_key
    }

    /// The 32-byte seed half of the secret key.
    #[inline]
    pub fn seed(&self) -> &[u8; SEED_LEN] {
        self.signing_key.as_bytes()
    }

    /// Raw public key.
    #[inline]
    pub fn public_key(&self) -> &[u8; PUBLIC_KEY_LEN] {
        &self.public_key
    }

    /// Public key in hex format.
    #[inline]
    pub fn public_key_hex(&self) -> String {
        hex::encode(self.public_key)
    }

    /// `edpk...` encoding of the public key.
    #[inline]
    pub fn public_key_encoded(&self) -> String {
        Prefix::PublicKey.encode(&self.public_key)
    }

    /// `edsk...` encoding of the expanded secret key (zeroized on drop).
    #[inline]
    pub fn secret_key_encoded(&self) -> Zeroizing<String> {
        Zeroizing::new(Prefix::SecretKey.encode(self.secret_key.as_slice()))
    }

    /// Ed25519 signing key for this pair.
    pub fn signing_key(&self) -> SigningKey {
        self.signing_key.clone()
    }
}

impl core::fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("KeyPair")
            .field("public_key", &self.public_key_hex())
            .finish_non_exhaustive()
    }
}
