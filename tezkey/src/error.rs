//! Error types for wallet construction and key encoding.
//!
//! Every failure carries structured fields rather than pre-formatted text,
//! so callers can match on [`ErrorKind`] and inspect expected versus actual
//! values without parsing messages.

use core::fmt;

use crate::prefix::Prefix;

/// The input a failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Account address (`tz1...`).
    Address,
    /// Encoded public key (`edpk...`).
    PublicKey,
    /// Encoded secret key or seed (`edsk...`).
    SecretKey,
    /// Encoded encrypted secret key (`edesk...`).
    EncryptedSecretKey,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Address => "address",
            Self::PublicKey => "public key",
            Self::SecretKey => "secret key",
            Self::EncryptedSecretKey => "encrypted secret key",
        })
    }
}

/// Base58Check framing failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum CodecError {
    /// Text contains characters outside the base58 alphabet.
    #[error("invalid base58: {0}")]
    InvalidBase58(#[from] bs58::decode::Error),
    /// Decoded buffer cannot hold the prefix and the checksum.
    #[error("decoded data too short: need at least {min} bytes, got {actual}")]
    TooShort {
        /// Minimum byte length (prefix + checksum).
        min: usize,
        /// Decoded byte length.
        actual: usize,
    },
    /// Trailing four bytes do not match the double SHA-256 of the data.
    #[error("checksum mismatch")]
    ChecksumMismatch,
}

/// Errors that can occur while building or importing a wallet.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Encoded text has a length no accepted encoding produces.
    #[error("{field} must be {} characters long, got {actual}", join_lengths(.expected))]
    InvalidLength {
        /// Offending input.
        field: Field,
        /// Accepted lengths.
        expected: &'static [usize],
        /// Observed length.
        actual: usize,
    },
    /// Encoded text does not start with the expected tag.
    #[error("{field} must start with \"{expected}\", got \"{actual}\"")]
    InvalidTag {
        /// Offending input.
        field: Field,
        /// Required tag characters.
        expected: &'static str,
        /// Leading characters actually present.
        actual: String,
    },
    /// Decoded payload has the wrong binary prefix or size.
    #[error("{field} payload must be {expected_len} bytes, got {actual_len}")]
    InvalidPayload {
        /// Offending input.
        field: Field,
        /// Required payload length in bytes.
        expected_len: usize,
        /// Decoded payload length in bytes.
        actual_len: usize,
    },
    /// Decoded bytes do not begin with the binary tag of the expected kind.
    #[error("{field} does not carry the {expected} prefix")]
    PrefixMismatch {
        /// Offending input.
        field: Field,
        /// Kind the input was expected to encode.
        expected: Prefix,
    },
    /// Mnemonic generation was asked for an unsupported word count.
    #[error("invalid word count {0}, must be 12, 15, 18, 21, or 24")]
    InvalidWordCount(usize),
    /// BIP-39 mnemonic construction failed.
    #[error("mnemonic error: {0}")]
    Mnemonic(#[from] bip39::Error),
    /// Base58Check decoding failed.
    #[error("{field} is not valid base58check: {source}")]
    Codec {
        /// Offending input.
        field: Field,
        /// Underlying framing error.
        #[source]
        source: CodecError,
    },
    /// A value re-derived from the key disagrees with the caller's value.
    #[error("reconstructed {field} '{actual}' does not match provided {field} '{expected}'")]
    Mismatch {
        /// Which value disagreed.
        field: Field,
        /// Value supplied by the caller.
        expected: String,
        /// Value derived from the key material.
        actual: String,
    },
    /// The password-derived key failed to open the encrypted envelope.
    #[error("invalid password")]
    Authentication,
    /// A digest or key-stretching primitive could not be constructed.
    #[error("hash construction failed: {0}")]
    Hash(&'static str),
}

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Structurally malformed input (length, tag, payload size).
    Validation,
    /// Base58 or checksum failure.
    Codec,
    /// Re-derived value differs from the supplied one.
    Mismatch,
    /// Wrong password for an encrypted key.
    Authentication,
    /// Internal digest failure.
    Hash,
}

impl Error {
    /// Classify this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidLength { .. }
            | Self::InvalidTag { .. }
            | Self::InvalidPayload { .. }
            | Self::PrefixMismatch { .. }
            | Self::InvalidWordCount(_)
            | Self::Mnemonic(_) => ErrorKind::Validation,
            Self::Codec { .. } => ErrorKind::Codec,
            Self::Mismatch { .. } => ErrorKind::Mismatch,
            Self::Authentication => ErrorKind::Authentication,
            Self::Hash(_) => ErrorKind::Hash,
        }
    }

    pub(crate) fn codec(field: Field) -> impl FnOnce(CodecError) -> Self {
        move |source| Self::Codec { field, source }
    }
}

fn join_lengths(lengths: &[usize]) -> String {
    lengths
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" or ")
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;
