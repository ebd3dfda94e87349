//! # Tezkey - Tezos `tz1` Wallet Identity Library
//!
//! Derives, imports, and validates ed25519 Tezos wallets.
//!
//! ## Features
//!
//! - **Mnemonic derivation**: PBKDF2-HMAC-SHA512 seeds compatible with existing Tezos wallets
//! - **Validated imports**: Every import re-derives the address and public key and
//!   rejects disagreement with the caller's values
//! - **Encrypted keys**: Opens and produces `edesk` password-encrypted secret keys
//! - **Secure by design**: Secret material is zeroized on drop
//!
//! ## Example
//!
//! ```
//! use tezkey::Wallet;
//!
//! let mnemonic = "abandon abandon abandon abandon abandon abandon \
//!                 abandon abandon abandon abandon abandon about";
//! let wallet = Wallet::create(mnemonic, "").unwrap();
//! assert_eq!(wallet.address(), "tz1XWx9KPmgGV1u8of8dD6Ya7DTvUS1up2NR");
//!
//! let imported = Wallet::import(
//!     wallet.address(),
//!     wallet.public_key(),
//!     wallet.secret_key(),
//! )
//! .unwrap();
//! assert_eq!(imported.public_key(), wallet.public_key());
//! ```

#![warn(
    missing_docs,
    rust_2018_idioms,
    clippy::all,
    clippy::pedantic,
    clippy::nursery
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::doc_markdown,
    clippy::missing_const_for_fn,
    clippy::use_self,
    clippy::uninlined_format_args,
    clippy::missing_fields_in_debug
)]
#![forbid(unsafe_code)]

pub mod encoding;
pub mod error;
pub mod hash;
pub mod kdf;
pub mod keypair;
pub mod mnemonic;
pub mod prefix;
pub mod secretbox;
mod wallet;

pub use error::{CodecError, Error, ErrorKind, Field, Result};
pub use keypair::KeyPair;
pub use prefix::Prefix;
pub use wallet::{create_wallet, import_encrypted_wallet, import_wallet, Wallet};
