//! Password-encrypted secret keys (`edesk...`).
//!
//! The payload behind the tag is an 8-byte PBKDF2 salt followed by a NaCl
//! secretbox (XSalsa20-Poly1305, tag first) of the 32-byte seed. The nonce
//! is all zeros and is never transmitted; every export uses a fresh salt,
//! and therefore a fresh key.

use crypto_secretbox::aead::{Aead, KeyInit};
use crypto_secretbox::{Key, Nonce, XSalsa20Poly1305};
use zeroize::Zeroizing;

use crate::error::Field;
use crate::kdf::encryption_key;
use crate::keypair::SEED_LEN;
use crate::prefix::Prefix;
use crate::{Error, Result};

/// Salt length at the head of the payload.
pub const SALT_LEN: usize = 8;

/// Poly1305 authentication tag length.
pub const TAG_LEN: usize = 16;

/// Payload length: salt, tag and encrypted seed.
pub const PAYLOAD_LEN: usize = SALT_LEN + TAG_LEN + SEED_LEN;

const ZERO_NONCE: [u8; 24] = [0u8; 24];

/// Decrypt an encrypted-secret-key payload (tag bytes already stripped).
///
/// Returns the seed, or [`Error::Authentication`] when the password is
/// wrong or the ciphertext was altered.
pub fn open(payload: &[u8], password: &str) -> Result<Zeroizing<[u8; SEED_LEN]>> {
    if payload.len() != PAYLOAD_LEN {
        return Err(Error::InvalidPayload {
            field: Field::EncryptedSecretKey,
            expected_len: PAYLOAD_LEN,
            actual_len: payload.len(),
        });
    }
    let (salt, sealed) = payload.split_at(SALT_LEN);

    let key = encryption_key(password, salt)?;
    let cipher = XSalsa20Poly1305::new(Key::from_slice(key.as_slice()));
    let plaintext = Zeroizing::new(
        cipher
            .decrypt(Nonce::from_slice(&ZERO_NONCE), sealed)
            .map_err(|_| Error::Authentication)?,
    );

    let mut seed = Zeroizing::new([0u8; SEED_LEN]);
    seed.copy_from_slice(&plaintext);
    Ok(seed)
}

/// Encrypt a seed under `password` and encode it as `edesk...`.
///
/// `salt` must be unique per export; the zero nonce is only safe because
/// each salt yields a distinct key.
pub fn seal(seed: &[u8; SEED_LEN], password: &str, salt: &[u8; SALT_LEN]) -> Result<String> {
    let key = encryption_key(password, salt)?;
    let cipher = XSalsa20Poly1305::new(Key::from_slice(key.as_slice()));
    let sealed = cipher
        .encrypt(Nonce::from_slice(&ZERO_NONCE), seed.as_slice())
        .map_err(|_| Error::Hash("xsalsa20poly1305 seal"))?;

    let mut payload = Zeroizing::new(Vec::with_capacity(PAYLOAD_LEN));
    payload.extend_from_slice(salt);
    payload.extend_from_slice(&sealed);
    Ok(Prefix::EncryptedSecretKey.encode(&payload))
}
