// Utility functions for CLI commands

use anyhow::{Context, Result};
use solana_sdk::pubkey::Pubkey;
use std::str::FromStr;
use sunpad::form::{StatusLevel, StatusLine};

/// Parse a pubkey from string
pub fn parse_pubkey(s: &str) -> Result<Pubkey> {
    Pubkey::from_str(s).with_context(|| format!("Invalid public key: {}", s))
}

/// Print success message with checkmark
pub fn success(msg: &str) {
    println!("[OK] {}", msg);
}

/// Print info message
pub fn info(msg: &str) {
    println!("[INFO] {}", msg);
}

/// Print warning message
pub fn warn(msg: &str) {
    eprintln!("[WARN] {}", msg);
}

/// Print error message
pub fn error(msg: &str) {
    eprintln!("[ERROR] {}", msg);
}

/// Print a rendered flow status
pub fn status(line: &StatusLine) {
    match line.level {
        StatusLevel::Info => info(&line.message),
        StatusLevel::Success => success(&line.message),
        StatusLevel::Warning => warn(&line.message),
        StatusLevel::Error => error(&line.message),
    }
}
