//! vowelscan - List the words of a text file that are made only of vowels
//!
//! vowelscan:
//! - Reads one text file
//! - Splits it into tokens on whitespace and common punctuation
//! - Reports the unique all-vowel words in first-seen order
//! - Outputs text (default), json or jsonl

use anyhow::Result;
use clap::Parser;

mod cli;
mod core;
mod flows;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::run(cli)
}
