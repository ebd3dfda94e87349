//! Wallet creation, import, and encryption commands.

use clap::Args;
use colored::Colorize;
use tezkey::secretbox::SALT_LEN;
use tezkey::Wallet;
use zeroize::Zeroizing;

use super::{print_wallet, OutputArgs};

/// Generate a new wallet from a random mnemonic.
#[derive(Args)]
pub struct NewCommand {
    /// Number of mnemonic words (12, 15, 18, 21, or 24).
    #[arg(short, long, default_value = "12")]
    words: usize,

    /// Password mixed into the seed derivation.
    #[arg(short, long, env = "TEZKEY_PASSWORD", hide_env_values = true, default_value = "")]
    password: String,
}

impl NewCommand {
    /// Execute the new command.
    pub fn execute(self, output: OutputArgs) -> Result<(), Box<dyn std::error::Error>> {
        let password = Zeroizing::new(self.password);
        let wallet = Wallet::generate(self.words, &password)?;
        print_wallet(&wallet, output);
        if !output.show_secrets {
            eprintln!(
                "{}",
                "Mnemonic hidden. Re-run with --show-secrets to record it.".yellow()
            );
        }
        Ok(())
    }
}

/// Derive a wallet from a mnemonic phrase.
#[derive(Args)]
pub struct CreateCommand {
    /// Mnemonic phrase.
    #[arg(short, long, env = "TEZKEY_MNEMONIC", hide_env_values = true)]
    mnemonic: String,

    /// Password used when the wallet was created.
    #[arg(short, long, env = "TEZKEY_PASSWORD", hide_env_values = true, default_value = "")]
    password: String,
}

impl CreateCommand {
    /// Execute the create command.
    pub fn execute(self, output: OutputArgs) -> Result<(), Box<dyn std::error::Error>> {
        let mnemonic = Zeroizing::new(self.mnemonic);
        let password = Zeroizing::new(self.password);
        let wallet = Wallet::create(&mnemonic, &password)?;
        print_wallet(&wallet, output);
        Ok(())
    }
}

/// Import and verify an unencrypted secret key.
#[derive(Args)]
pub struct ImportCommand {
    /// Expected address (tz1...).
    #[arg(short, long)]
    address: String,

    /// Expected public key (edpk...).
    #[arg(short = 'k', long)]
    public_key: String,

    /// Secret key or seed (edsk...).
    #[arg(short, long, env = "TEZKEY_SECRET_KEY", hide_env_values = true)]
    secret_key: String,
}

impl ImportCommand {
    /// Execute the import command.
    pub fn execute(self, output: OutputArgs) -> Result<(), Box<dyn std::error::Error>> {
        let secret_key = Zeroizing::new(self.secret_key);
        let wallet = Wallet::import(&self.address, &self.public_key, &secret_key)?;
        print_wallet(&wallet, output);
        Ok(())
    }
}

/// Import a password-encrypted secret key.
#[derive(Args)]
pub struct ImportEncryptedCommand {
    /// Encrypted secret key (edesk...).
    #[arg(short, long)]
    encrypted_key: String,

    /// Password the key was encrypted with.
    #[arg(short, long, env = "TEZKEY_PASSWORD", hide_env_values = true)]
    password: String,
}

impl ImportEncryptedCommand {
    /// Execute the import-encrypted command.
    pub fn execute(self, output: OutputArgs) -> Result<(), Box<dyn std::error::Error>> {
        let password = Zeroizing::new(self.password);
        let wallet = Wallet::import_encrypted(&password, &self.encrypted_key)?;
        print_wallet(&wallet, output);
        Ok(())
    }
}

/// Encrypt a secret key into an edesk string.
#[derive(Args)]
pub struct EncryptCommand {
    /// Secret key or seed (edsk...).
    #[arg(short, long, env = "TEZKEY_SECRET_KEY", hide_env_values = true)]
    secret_key: String,

    /// Password to encrypt with.
    #[arg(short, long, env = "TEZKEY_PASSWORD", hide_env_values = true)]
    password: String,
}

impl EncryptCommand {
    /// Execute the encrypt command.
    pub fn execute(self) -> Result<(), Box<dyn std::error::Error>> {
        let secret_key = Zeroizing::new(self.secret_key);
        let password = Zeroizing::new(self.password);
        if password.is_empty() {
            return Err("refusing to encrypt with an empty password".into());
        }

        let wallet = Wallet::from_secret_key(&secret_key)?;
        let mut salt = [0u8; SALT_LEN];
        getrandom::fill(&mut salt).map_err(|e| format!("failed to generate salt: {e}"))?;
        let encrypted = wallet.export_encrypted(&password, &salt)?;

        print_encrypted(wallet.address(), &encrypted);
        Ok(())
    }
}

#[rustfmt::skip]
fn print_encrypted(address: &str, encrypted: &str) {
    println!();
    println!("      {}        {}", "Address".cyan().bold(), address.green());
    println!("      {}  {}", "Encrypted Key".cyan().bold(), encrypted);
    println!();
}
