//! # BotEleitor Intents Command
//!
//! File: cli/src/commands/intents.rs
//!
//! ## Overview
//!
//! `boteleitor intents` prints the active intent catalog (built-in or from
//! configuration) in precedence order. Given a name, it prints that intent's
//! triggers, raw and normalized, plus its full response.
//!
//! ## Examples
//!
//! ```text
//! $ boteleitor intents
//!
//! Intent catalog (precedence order):
//!
//!  #  | Name            | Triggers | Response
//! ----+-----------------+----------+--------------------------------------------------
//!   1 | candidatos      |        4 | 🗳️ Os candidatos são:
//!   ...
//!
//! Found 6 intent(s).
//! Use 'boteleitor intents <Name>' for details.
//! ```
//!
use crate::chat::intent::IntentMatcher;
use crate::core::error::{BotError, Result};
use clap::Parser;
use std::{
    io::{self, Write},
    path::Path,
};
use tracing::info;

/// # Intents Arguments (`IntentsArgs`)
#[derive(Parser, Debug)]
pub struct IntentsArgs {
    /// Show the triggers and full response of this intent.
    pub name: Option<String>,
}

/// # Handle Intents Command (`handle_intents`)
///
/// Fails with `BotError::IntentNotFound` when `name` is not in the catalog.
pub async fn handle_intents(args: IntentsArgs, config_path: Option<&Path>) -> Result<()> {
    info!("Handling intents command...");
    let bot = super::load_bot(config_path)?;
    let mut stdout = io::stdout().lock();
    match args.name {
        Some(name) => print_intent_details(bot.matcher(), &name, &mut stdout),
        None => print_intent_table(bot.matcher(), &mut stdout),
    }
}

fn print_intent_table<W: Write>(matcher: &IntentMatcher, out: &mut W) -> Result<()> {
    let name_width = matcher
        .intents()
        .map(|intent| intent.name.chars().count())
        .max()
        .unwrap_or(10)
        .clamp(10, 30);

    writeln!(out, "\nIntent catalog (precedence order):\n")?;
    writeln!(
        out,
        " #  | {:<width$} | Triggers | Response",
        "Name",
        width = name_width
    )?;
    writeln!(out, "----+-{:-<width$}-+----------+-{:-<50}", "", "", width = name_width)?;
    for (position, intent) in matcher.intents().enumerate() {
        let first_line = intent.response.lines().next().unwrap_or_default();
        writeln!(
            out,
            "{:>3} | {:<width$} | {:>8} | {}",
            position + 1,
            intent.name,
            intent.triggers.len(),
            first_line,
            width = name_width
        )?;
    }

    writeln!(out, "\nFound {} intent(s).", matcher.len())?;
    writeln!(out, "Use 'boteleitor intents <Name>' for details.")?;
    Ok(())
}

fn print_intent_details<W: Write>(matcher: &IntentMatcher, name: &str, out: &mut W) -> Result<()> {
    let (intent, normalized) = matcher.get(name).ok_or_else(|| BotError::IntentNotFound {
        name: name.to_string(),
    })?;
    let position = matcher
        .intents()
        .position(|i| i.name == intent.name)
        .map_or(0, |p| p + 1);

    writeln!(out, "Intent: {} (precedence {} of {})", intent.name, position, matcher.len())?;
    writeln!(out, "\nTriggers (checked in this order):")?;
    for (raw, norm) in intent.triggers.iter().zip(normalized) {
        if raw == norm {
            writeln!(out, "  - {raw}")?;
        } else {
            writeln!(out, "  - {raw}  (matches as \"{norm}\")")?;
        }
    }
    writeln!(out, "\nResponse:\n{}", intent.response)?;
    Ok(())
}
