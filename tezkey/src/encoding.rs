//! Base58Check framing for keys and addresses.
//!
//! The codec is prefix-agnostic: it prepends or strips however many tag
//! bytes it is given. Checking that a string carries the *right* tag is the
//! job of the caller (see [`crate::prefix::Prefix`]).

use zeroize::Zeroizing;

use crate::error::CodecError;
use crate::hash::double_sha256;

/// Checksum length appended to every Base58Check payload.
pub const CHECKSUM_LEN: usize = 4;

/// Encode `prefix || payload || checksum` as base58.
pub fn base58check_encode(prefix: &[u8], payload: &[u8]) -> String {
    let mut data = Zeroizing::new(Vec::with_capacity(prefix.len() + payload.len() + CHECKSUM_LEN));
    data.extend_from_slice(prefix);
    data.extend_from_slice(payload);

    let checksum = double_sha256(&data);
    data.extend_from_slice(&checksum[..CHECKSUM_LEN]);

    bs58::encode(data.as_slice()).into_string()
}

/// Decode a Base58Check string and verify its checksum.
///
/// Returns the checksummed data with the checksum removed and the tag
/// bytes still in place.
pub fn base58check_decode_raw(encoded: &str) -> Result<Zeroizing<Vec<u8>>, CodecError> {
    decode_checked(encoded, CHECKSUM_LEN)
}

/// Decode a Base58Check string and strip `prefix.len()` leading bytes.
///
/// The stripped bytes are not compared with `prefix`.
pub fn base58check_decode(encoded: &str, prefix: &[u8]) -> Result<Zeroizing<Vec<u8>>, CodecError> {
    let data = decode_checked(encoded, prefix.len() + CHECKSUM_LEN)?;
    Ok(Zeroizing::new(data[prefix.len()..].to_vec()))
}

fn decode_checked(encoded: &str, min: usize) -> Result<Zeroizing<Vec<u8>>, CodecError> {
    let mut data = Zeroizing::new(bs58::decode(encoded).into_vec()?);

    if data.len() < min {
        return Err(CodecError::TooShort {
            min,
            actual: data.len(),
        });
    }

    let body_len = data.len() - CHECKSUM_LEN;
    let computed = double_sha256(&data[..body_len]);
    if data[body_len..] != computed[..CHECKSUM_LEN] {
        return Err(CodecError::ChecksumMismatch);
    }

    data.truncate(body_len);
    Ok(data)
}
