//! # BotEleitor Ask Command
//!
//! File: cli/src/commands/ask.rs
//!
//! ## Overview
//!
//! `boteleitor ask` answers a single question given on the command line and
//! exits. With `--explain` it also reports which intent and trigger produced
//! the answer, which is handy when tuning a custom catalog.
//!
//! ## Examples
//!
//! ```bash
//! boteleitor ask "Quem são os candidatos?"
//! boteleitor ask --explain como funciona o peso do meu voto
//! ```
//!
//! Example `--explain` output:
//!
//! ```text
//! 📘 Regras principais:
//! ...
//!
//! intent: regras (trigger: "funciona")
//! ```
//!
use crate::chat::bot::Chatbot;
use crate::chat::intent::MatchResult;
use crate::core::error::Result;
use clap::Parser;
use std::{
    io::{self, Write},
    path::Path,
};
use tracing::info;

/// # Ask Arguments (`AskArgs`)
#[derive(Parser, Debug)]
pub struct AskArgs {
    /// The question. Several words are joined with single spaces.
    #[arg(required = true, num_args = 1..)]
    pub question: Vec<String>,

    /// Also print the matched intent and trigger (or that the fallback was used).
    #[arg(long, short)]
    pub explain: bool,
}

/// # Handle Ask Command (`handle_ask`)
///
/// Blank questions are rejected with `BotError::EmptyInput`, which `main`
/// reports as `Error: Input cannot be empty.` with exit status 1.
pub async fn handle_ask(args: AskArgs, config_path: Option<&Path>) -> Result<()> {
    info!("Handling ask command...");
    let mut bot = super::load_bot(config_path)?;
    let question = args.question.join(" ");
    let mut stdout = io::stdout().lock();
    answer(&mut bot, &question, args.explain, &mut stdout)
}

fn answer<W: Write>(bot: &mut Chatbot, question: &str, explain: bool, out: &mut W) -> Result<()> {
    let (_, reply) = bot.submit(question)?;
    writeln!(out, "{}", reply.text())?;

    if explain {
        writeln!(out)?;
        match bot.find(question) {
            MatchResult::Matched {
                intent, trigger, ..
            } => writeln!(out, "intent: {intent} (trigger: \"{trigger}\")")?,
            MatchResult::NoMatch => writeln!(out, "intent: none (fallback response)")?,
        }
    }
    Ok(())
}
