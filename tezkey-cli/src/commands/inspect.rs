//! Inspect an encoded Tezos value.

use clap::Args;
use colored::Colorize;
use tezkey::encoding::base58check_decode_raw;
use tezkey::Prefix;

/// Identify an encoded Tezos value and show its payload.
#[derive(Args)]
pub struct InspectCommand {
    /// Base58Check text (tz1, edpk, edsk, or edesk).
    text: String,
}

impl InspectCommand {
    /// Execute the inspect command.
    pub fn execute(self) -> Result<(), Box<dyn std::error::Error>> {
        let Some(prefix) = Prefix::detect(&self.text) else {
            return Err(format!("unrecognised value of length {}", self.text.len()).into());
        };

        let raw = base58check_decode_raw(&self.text)?;
        if !prefix.is_prefix_of(&raw) {
            return Err(format!("text looks like a {prefix} but its tag bytes differ").into());
        }
        let payload = &raw[prefix.bytes().len()..];

        print_inspection(prefix, payload);
        Ok(())
    }
}

/// Whether the payload is key material that must not be printed.
fn is_secret(prefix: Prefix) -> bool {
    matches!(prefix, Prefix::SecretKey | Prefix::Seed)
}

#[rustfmt::skip]
fn print_inspection(prefix: Prefix, payload: &[u8]) {
    let shown = if is_secret(prefix) {
        "(hidden)".dimmed().to_string()
    } else {
        hex::encode(payload)
    };

    println!();
    println!("      {}     {}", "Kind".cyan().bold(), prefix.to_string().green());
    println!("      {}      {}", "Tag".cyan().bold(), prefix.tag());
    println!("      {}   {} bytes", "Length".cyan().bold(), payload.len());
    println!("      {}  {}", "Payload".cyan().bold(), shown);
    println!();
}
