use std::path::PathBuf;

use clap::Parser;

use crate::domain::Amount;

/// Single-account banking shell
#[derive(Debug, Parser)]
#[command(name = "bank_account")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Identifier of the account opened at start-up
    #[arg(long, default_value = "123456")]
    pub account_id: String,

    /// Opening balance. Prompted for in interactive mode when omitted,
    /// zero in script mode.
    #[arg(long, allow_hyphen_values = true)]
    pub initial_balance: Option<Amount>,

    /// Replay a CSV file of `action,amount` rows instead of showing the menu
    #[arg(long)]
    pub script: Option<PathBuf>,

    /// Log more (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Config {
    pub fn default_log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}
