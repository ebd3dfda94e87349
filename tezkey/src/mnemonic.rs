//! BIP-39 phrases for fresh wallets.
//!
//! Wallet creation accepts any phrase; these helpers only produce
//! well-formed English phrases to feed it.

use bip39::Mnemonic;
use zeroize::Zeroizing;

#[cfg(feature = "rand")]
use crate::Error;
use crate::Result;

/// Word counts a generated phrase may have.
pub const WORD_COUNTS: [usize; 5] = [12, 15, 18, 21, 24];

/// Generate a random English mnemonic.
///
/// # Note
///
/// This function requires the `rand` feature to be enabled.
#[cfg(feature = "rand")]
pub fn generate(word_count: usize) -> Result<Zeroizing<String>> {
    if !WORD_COUNTS.contains(&word_count) {
        return Err(Error::InvalidWordCount(word_count));
    }

    let mnemonic = Mnemonic::generate(word_count)?;
    Ok(Zeroizing::new(mnemonic.to_string()))
}

/// Build an English mnemonic from raw entropy (16, 20, 24, 28 or 32 bytes).
///
/// Useful where the caller supplies its own entropy source.
pub fn from_entropy(entropy: &[u8]) -> Result<Zeroizing<String>> {
    let mnemonic = Mnemonic::from_entropy(entropy)?;
    Ok(Zeroizing::new(mnemonic.to_string()))
}
