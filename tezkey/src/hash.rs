//! Hash functions used for checksums and account addresses.

use blake2::digest::VariableOutput;
use blake2::Blake2bVar;
use sha2::{Digest, Sha256};

use crate::prefix::Prefix;
use crate::{Error, Result};

/// Length of the address digest in bytes.
pub const PUBLIC_KEY_HASH_LEN: usize = 20;

/// Compute SHA-256 hash
#[inline]
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Compute double SHA-256 hash (Base58Check checksum source)
#[inline]
pub fn double_sha256(data: &[u8]) -> [u8; 32] {
    sha256(&sha256(data))
}

/// Compute an unkeyed BLAKE2b digest truncated to 160 bits.
pub fn blake2b_160(data: &[u8]) -> Result<[u8; PUBLIC_KEY_HASH_LEN]> {
    let mut hasher =
        Blake2bVar::new(PUBLIC_KEY_HASH_LEN).map_err(|_| Error::Hash("blake2b-160 output size"))?;
    blake2::digest::Update::update(&mut hasher, data);

    let mut out = [0u8; PUBLIC_KEY_HASH_LEN];
    hasher
        .finalize_variable(&mut out)
        .map_err(|_| Error::Hash("blake2b-160 output buffer"))?;
    Ok(out)
}

/// Derive the `tz1` account address of an ed25519 public key.
///
/// The address is the 20-byte BLAKE2b digest of the key, Base58Check
/// encoded under [`Prefix::PublicKeyHash`].
pub fn public_key_hash(public_key: &[u8; 32]) -> Result<String> {
    let digest = blake2b_160(public_key)?;
    Ok(Prefix::PublicKeyHash.encode(&digest))
}
