//! CLI command definitions and handlers.

mod inspect;
mod wallet;

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use tezkey::Wallet;

pub use inspect::InspectCommand;
pub use wallet::{
    CreateCommand, EncryptCommand, ImportCommand, ImportEncryptedCommand, NewCommand,
};

/// Tezkey - A Tezos wallet CLI tool.
#[derive(Parser)]
#[command(name = "tezkey")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub output: OutputArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Flags shared by every subcommand.
#[derive(Args, Clone, Copy)]
pub struct OutputArgs {
    /// Print debug logs to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print the mnemonic and secret key instead of masking them.
    #[arg(long, global = true)]
    pub show_secrets: bool,

    /// Display a QR code for the address.
    #[arg(long, global = true)]
    pub qr: bool,
}

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Generate a new wallet from a random mnemonic.
    New(NewCommand),

    /// Derive a wallet from a mnemonic phrase.
    Create(CreateCommand),

    /// Import and verify an unencrypted secret key.
    Import(ImportCommand),

    /// Import a password-encrypted (edesk) secret key.
    #[command(name = "import-encrypted")]
    ImportEncrypted(ImportEncryptedCommand),

    /// Encrypt a secret key into an edesk string.
    Encrypt(EncryptCommand),

    /// Identify an encoded Tezos value and show its payload.
    Inspect(InspectCommand),
}

impl Cli {
    /// Execute the selected command.
    pub fn execute(self) -> Result<(), Box<dyn std::error::Error>> {
        let output = self.output;
        match self.command {
            Commands::New(cmd) => cmd.execute(output)?,
            Commands::Create(cmd) => cmd.execute(output)?,
            Commands::Import(cmd) => cmd.execute(output)?,
            Commands::ImportEncrypted(cmd) => cmd.execute(output)?,
            Commands::Encrypt(cmd) => cmd.execute()?,
            Commands::Inspect(cmd) => cmd.execute()?,
        }
        Ok(())
    }
}

/// Mask all but the leading tag and last four characters.
fn mask(secret: &str, keep_head: usize) -> String {
    let chars = secret.chars().count();
    if chars <= keep_head + 4 {
        return "*".repeat(chars);
    }
    let head: String = secret.chars().take(keep_head).collect();
    let tail: String = secret.chars().skip(chars - 4).collect();
    format!("{head}{}{tail}", "*".repeat(chars - keep_head - 4))
}

/// Display a wallet.
#[rustfmt::skip]
fn print_wallet(wallet: &Wallet, output: OutputArgs) {
    let secret_key = if output.show_secrets {
        wallet.secret_key().to_owned()
    } else {
        mask(wallet.secret_key(), 4)
    };

    println!();
    if wallet.has_mnemonic() {
        let words = wallet.mnemonic().split_whitespace().count();
        let mnemonic = if output.show_secrets {
            wallet.mnemonic().to_owned()
        } else {
            format!("({words} words hidden, use --show-secrets)")
        };
        println!("      {}     {}", "Mnemonic".cyan().bold(), mnemonic);
    }
    println!("      {}      {}", "Address".cyan().bold(), wallet.address().green());
    println!("      {}   {}", "Public Key".cyan().bold(), wallet.public_key());
    println!("      {}   {}", "Secret Key".cyan().bold(), secret_key);
    if output.show_secrets {
        if let Some(seed) = wallet.seed() {
            println!("      {}         {}", "Seed".cyan().bold(), hex::encode(seed).dimmed());
        }
    }

    if output.qr {
        crate::qr::render_to_terminal(wallet.address());
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "tezkey",
            "create",
            "--mnemonic",
            "abandon about",
            "--show-secrets",
            "--qr",
        ])
        .unwrap();
        assert!(cli.output.show_secrets);
        assert!(cli.output.qr);
        assert!(!cli.output.verbose);
        assert!(matches!(cli.command, Commands::Create(_)));
    }

    #[test]
    fn test_mask() {
        assert_eq!(mask("edskABCDEFGH1234", 4), "edsk********1234");
        assert_eq!(mask("short", 4), "*****");
    }
}
