//! PBKDF2-HMAC-SHA512 key stretching.
//!
//! Two derivations share the same primitive with different parameters:
//!
//! - a wallet seed from a mnemonic phrase (salt `"mnemonic" + password`,
//!   2048 rounds, identical to the first half of a BIP-39 seed);
//! - a secretbox key from an export password and an 8-byte salt
//!   (32768 rounds).

use hmac::Hmac;
use sha2::Sha512;
use zeroize::Zeroizing;

use crate::{Error, Result};

/// Rounds used to stretch a mnemonic into a seed.
pub const SEED_ITERATIONS: u32 = 2048;

/// Rounds used to stretch an export password into a secretbox key.
pub const ENCRYPTION_ITERATIONS: u32 = 32_768;

/// Salt prefix prepended to the mnemonic password.
pub const SEED_SALT_PREFIX: &str = "mnemonic";

/// Length of a seed and of a derived symmetric key.
pub const KEY_LEN: usize = 32;

/// Derive the 32-byte ed25519 seed for a mnemonic and optional password.
///
/// The mnemonic is used verbatim: no word-list or checksum validation and
/// no Unicode normalization are applied.
pub fn seed_from_mnemonic(mnemonic: &str, password: &str) -> Result<Zeroizing<[u8; KEY_LEN]>> {
    let mut salt = Zeroizing::new(String::with_capacity(SEED_SALT_PREFIX.len() + password.len()));
    salt.push_str(SEED_SALT_PREFIX);
    salt.push_str(password);

    stretch(mnemonic.as_bytes(), salt.as_bytes(), SEED_ITERATIONS)
}

/// Derive the secretbox key protecting an encrypted secret key.
pub fn encryption_key(password: &str, salt: &[u8]) -> Result<Zeroizing<[u8; KEY_LEN]>> {
    stretch(password.as_bytes(), salt, ENCRYPTION_ITERATIONS)
}

fn stretch(password: &[u8], salt: &[u8], rounds: u32) -> Result<Zeroizing<[u8; KEY_LEN]>> {
    let mut key = Zeroizing::new([0u8; KEY_LEN]);
    pbkdf2::pbkdf2::<Hmac<Sha512>>(password, salt, rounds, key.as_mut_slice())
        .map_err(|_| Error::Hash("pbkdf2-hmac-sha512"))?;
    Ok(key)
}
