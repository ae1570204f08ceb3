//! # BotEleitor Normalize Command
//!
//! File: cli/src/commands/normalize.rs
//!
//! Prints the normalized form of a text, i.e. what the matcher actually
//! compares against trigger phrases. Does not need any configuration.
//!
//! ```bash
//! $ boteleitor normalize "ÓNde Voto?"
//! onde voto?
//! ```
//!
use crate::chat::normalize::normalize;
use crate::core::error::Result;
use clap::Parser;
use tracing::debug;

/// # Normalize Arguments (`NormalizeArgs`)
#[derive(Parser, Debug)]
pub struct NormalizeArgs {
    /// Text to normalize. Several words are joined with single spaces.
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,
}

pub async fn handle_normalize(args: NormalizeArgs) -> Result<()> {
    let text = args.text.join(" ");
    let normalized = normalize(&text);
    debug!("Normalized {:?} to {:?}", text, normalized);
    println!("{normalized}");
    Ok(())
}
