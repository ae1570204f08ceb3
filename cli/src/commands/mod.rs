//! # BotEleitor Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the top-level commands of the BotEleitor CLI. Each
//! command is a thin front end over the `chat` engine: it loads configuration,
//! builds a `Chatbot`, feeds it user text and prints what comes back.
//!
//! ## Commands
//!
//! - `chat`: Interactive session reading questions from stdin
//! - `ask`: One-shot question from the command line
//! - `intents`: Inspect the intent catalog in precedence order
//! - `normalize`: Show the normalized form of a text
//!
//! Each command module defines its own arguments structure and an async
//! `handle_*` function, routed from `main.rs`.
//!
use crate::chat::bot::Chatbot;
use crate::core::config;
use crate::core::error::Result;
use anyhow::Context;
use std::path::Path;

/// Interactive chat session (`boteleitor chat`).
pub mod chat;
/// One-shot question (`boteleitor ask`).
pub mod ask;
/// Catalog inspection (`boteleitor intents`).
pub mod intents;
/// Text normalization preview (`boteleitor normalize`).
pub mod normalize;

/// Loads configuration (explicit file or discovery) and builds the bot.
/// Shared by every command that needs the catalog.
pub(crate) fn load_bot(config_path: Option<&Path>) -> Result<Chatbot> {
    let cfg = config::load_config(config_path).context("Failed to load BotEleitor configuration")?;
    Chatbot::from_config(&cfg)
}
