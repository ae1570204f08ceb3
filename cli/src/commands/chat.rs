//! # BotEleitor Chat Command
//!
//! File: cli/src/commands/chat.rs
//!
//! ## Overview
//!
//! This module implements `boteleitor chat`, an interactive session in the
//! terminal. It is the command-line counterpart of a chat screen:
//! - Shows the bot's greeting
//! - Reads one question per line from stdin
//! - Skips blank lines (they are never submitted to the bot)
//! - Prints each reply prefixed with the bot's name
//! - Optionally writes the full conversation log to a file at the end
//!
//! The session ends on `sair`, `exit` or `quit` (any case), or at end of input.
//!
//! ## Examples
//!
//! ```bash
//! boteleitor chat
//! boteleitor chat --transcript conversa.txt
//! printf 'Quem são os candidatos?\nsair\n' | boteleitor chat
//! ```
//!
use crate::chat::bot::Chatbot;
use crate::chat::conversation::ConversationLog;
use crate::core::error::Result;
use anyhow::Context;
use clap::Parser;
use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{debug, info};

/// Words that end an interactive session.
const EXIT_COMMANDS: &[&str] = &["sair", "exit", "quit"];

/// # Chat Arguments (`ChatArgs`)
///
/// Defines the command-line arguments accepted by `boteleitor chat`.
#[derive(Parser, Debug)]
pub struct ChatArgs {
    /// Write the conversation log to this file when the session ends.
    #[arg(long, short)]
    pub transcript: Option<PathBuf>,
}

/// # Handle Chat Command (`handle_chat`)
///
/// Loads the bot, runs the session over stdin/stdout and, if requested,
/// saves the transcript.
///
/// ## Returns
///
/// * `Result<()>`: `Err` if configuration loading fails, stdin/stdout cannot
///   be used, or the transcript cannot be written.
pub async fn handle_chat(args: ChatArgs, config_path: Option<&Path>) -> Result<()> {
    info!("Handling chat command...");
    let mut bot = super::load_bot(config_path)?;

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = io::stdout();
    run_session(&mut bot, stdin, &mut stdout).await?;

    if let Some(path) = args.transcript {
        write_transcript(bot.log(), &path)?;
        println!("Transcript saved to '{}'.", path.display());
    }
    Ok(())
}

/// Drives one conversation from `input` to `out` until an exit word or EOF.
pub async fn run_session<R, W>(bot: &mut Chatbot, input: R, out: &mut W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let name = bot.name().to_string();
    writeln!(out, "{name}: {}", bot.greeting())?;
    writeln!(out, "(Digite 'sair' para encerrar.)")?;

    let mut lines = input.lines();
    loop {
        write!(out, "Você: ")?;
        out.flush()?;

        let Some(line) = lines
            .next_line()
            .await
            .context("Failed to read from standard input")?
        else {
            writeln!(out)?;
            debug!("End of input reached.");
            break;
        };

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if is_exit_command(trimmed) {
            writeln!(out, "{name}: Até logo!")?;
            break;
        }

        let (_, reply) = bot.submit(trimmed)?;
        writeln!(out, "{name}: {}", reply.text())?;
    }

    info!(
        "Chat session ended after {} exchange(s).",
        bot.log().len() / 2
    );
    Ok(())
}

fn is_exit_command(text: &str) -> bool {
    EXIT_COMMANDS.iter().any(|cmd| text.eq_ignore_ascii_case(cmd))
}

fn write_transcript(log: &ConversationLog, path: &Path) -> Result<()> {
    let mut content = log.transcript();
    content.push('\n');
    fs::write(path, content)
        .with_context(|| format!("Failed to write transcript to '{}'", path.display()))?;
    info!("Wrote {} message(s) to {}", log.len(), path.display());
    Ok(())
}
