//! Binary tags that make the kind of an encoded string recognizable.
//!
//! | Kind                 | Tag     | Bytes                | Payload | Encoded |
//! |----------------------|---------|----------------------|---------|---------|
//! | Public key hash      | `tz1`   | `06 a1 9f`           | 20      | 36      |
//! | Public key           | `edpk`  | `0d 0f 25 d9`        | 32      | 54      |
//! | Secret key           | `edsk`  | `2b f6 4e 07`        | 64      | 98      |
//! | Seed                 | `edsk`  | `0d 0f 3a 07`        | 32      | 54      |
//! | Encrypted secret key | `edesk` | `07 5a 3c b3 29`     | 56      | 88      |

use zeroize::Zeroizing;

use crate::encoding::{base58check_decode, base58check_encode};
use crate::error::CodecError;

/// Logical kind of a Base58Check-encoded key or address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Prefix {
    /// BLAKE2b-160 digest of an ed25519 public key (`tz1` address).
    PublicKeyHash,
    /// Raw 32-byte ed25519 public key.
    PublicKey,
    /// Expanded 64-byte ed25519 secret key (seed followed by public key).
    SecretKey,
    /// 32-byte ed25519 seed.
    Seed,
    /// Salt plus secretbox-encrypted seed.
    EncryptedSecretKey,
}

struct Entry {
    bytes: &'static [u8],
    tag: &'static str,
    payload_len: usize,
    encoded_len: usize,
}

#[rustfmt::skip]
static TABLE: [Entry; 5] = [
    Entry { bytes: &[6, 161, 159], tag: "tz1", payload_len: 20, encoded_len: 36 },
    Entry { bytes: &[13, 15, 37, 217], tag: "edpk", payload_len: 32, encoded_len: 54 },
    Entry { bytes: &[43, 246, 78, 7], tag: "edsk", payload_len: 64, encoded_len: 98 },
    Entry { bytes: &[13, 15, 58, 7], tag: "edsk", payload_len: 32, encoded_len: 54 },
    Entry { bytes: &[7, 90, 60, 179, 41], tag: "edesk", payload_len: 56, encoded_len: 88 },
];

impl Prefix {
    /// Every prefix, in table order.
    pub const ALL: [Self; 5] = [
        Self::PublicKeyHash,
        Self::PublicKey,
        Self::SecretKey,
        Self::Seed,
        Self::EncryptedSecretKey,
    ];

    fn entry(self) -> &'static Entry {
        match self {
            Self::PublicKeyHash => &TABLE[0],
            Self::PublicKey => &TABLE[1],
            Self::SecretKey => &TABLE[2],
            Self::Seed => &TABLE[3],
            Self::EncryptedSecretKey => &TABLE[4],
        }
    }

    /// Binary tag prepended before encoding.
    #[inline]
    pub fn bytes(self) -> &'static [u8] {
        self.entry().bytes
    }

    /// Leading characters every encoding of this kind starts with.
    #[inline]
    pub fn tag(self) -> &'static str {
        self.entry().tag
    }

    /// Payload size in bytes, excluding tag and checksum.
    #[inline]
    pub fn payload_len(self) -> usize {
        self.entry().payload_len
    }

    /// Character length of a well-formed encoding.
    #[inline]
    pub fn encoded_len(self) -> usize {
        self.entry().encoded_len
    }

    /// Base58Check-encode `payload` under this tag.
    pub fn encode(self, payload: &[u8]) -> String {
        base58check_encode(self.bytes(), payload)
    }

    /// Base58Check-decode `text`, stripping this tag's byte length.
    pub fn decode(self, text: &str) -> Result<Zeroizing<Vec<u8>>, CodecError> {
        base58check_decode(text, self.bytes())
    }

    /// Whether `raw` (checksum already removed) begins with this tag.
    pub fn is_prefix_of(self, raw: &[u8]) -> bool {
        raw.starts_with(self.bytes())
    }

    /// Whether `text` has this kind's tag characters and length.
    ///
    /// This is a shape check only; the checksum is not verified.
    pub fn matches(self, text: &str) -> bool {
        text.len() == self.encoded_len() && text.starts_with(self.tag())
    }

    /// Identify the kind of an encoded string by tag and length.
    pub fn detect(text: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|prefix| prefix.matches(text))
    }
}

impl core::fmt::Display for Prefix {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            Self::PublicKeyHash => "public key hash",
            Self::PublicKey => "public key",
            Self::SecretKey => "secret key",
            Self::Seed => "seed",
            Self::EncryptedSecretKey => "encrypted secret key",
        })
    }
}
