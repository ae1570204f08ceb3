//! # Chatbot Session
//!
//! File: cli/src/chat/bot.rs
//!
//! ## Overview
//!
//! `Chatbot` ties the pieces together for one conversation: it owns the
//! intent matcher, the persona strings (name, greeting, fallback) and the
//! conversation log. Front ends call [`Chatbot::submit`] once per send action
//! and render [`Chatbot::log`].
//!
//! ## Flow
//!
//! 1. Trim the raw input; blank input is rejected with `BotError::EmptyInput`
//!    and the log is left untouched.
//! 2. Match the trimmed text against the catalog.
//! 3. Append the user message and the reply (matched response or fallback),
//!    in that order, and hand back references to both stored entries.
//!
//! `submit` takes `&mut self`, so a session has a single writer at a time.
//! Sharing one bot between tasks requires wrapping it in a mutex.
//!
//! ## Examples
//!
//! ```
//! use boteleitor::chat::bot::Chatbot;
//! use boteleitor::core::config::Config;
//!
//! let mut bot = Chatbot::from_config(&Config::default()).unwrap();
//! let (_user, reply) = bot.submit("Qual a data da eleição?").unwrap();
//! assert_eq!(reply.text(), "🗓️ A eleição será no dia 09 de outubro de 2025.");
//! assert_eq!(bot.log().len(), 2);
//! ```
//!
use crate::chat::conversation::{ConversationLog, Message};
use crate::chat::intent::{IntentMatcher, MatchResult};
use crate::core::config::Config;
use crate::core::error::{BotError, Result};
use anyhow::Context;
use tracing::{debug, info};

/// One conversation with the election assistant.
#[derive(Debug, Clone)]
pub struct Chatbot {
    name: String,
    greeting: String,
    fallback: String,
    matcher: IntentMatcher,
    log: ConversationLog,
}

impl Chatbot {
    /// Creates a bot with an empty log.
    pub fn new(
        name: impl Into<String>,
        greeting: impl Into<String>,
        fallback: impl Into<String>,
        matcher: IntentMatcher,
    ) -> Self {
        Self {
            name: name.into(),
            greeting: greeting.into(),
            fallback: fallback.into(),
            matcher,
            log: ConversationLog::new(),
        }
    }

    /// Builds a bot from loaded configuration, compiling its intent catalog.
    ///
    /// Fails if the catalog is invalid (empty, duplicate names, intents
    /// without triggers, or blank triggers).
    pub fn from_config(config: &Config) -> Result<Self> {
        let matcher = IntentMatcher::new(config.catalog())
            .context("Failed to build intent catalog from configuration")?;
        info!(
            "Chatbot '{}' ready with {} intent(s).",
            config.bot.name,
            matcher.len()
        );
        Ok(Self::new(
            config.bot.name.clone(),
            config.bot.greeting.clone(),
            config.bot.fallback.clone(),
            matcher,
        ))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Opening line for interactive sessions. Not part of the log.
    pub fn greeting(&self) -> &str {
        &self.greeting
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    pub fn matcher(&self) -> &IntentMatcher {
        &self.matcher
    }

    pub fn log(&self) -> &ConversationLog {
        &self.log
    }

    /// Runs the matcher on trimmed input without touching the log.
    pub fn find(&self, raw_input: &str) -> MatchResult<'_> {
        self.matcher.find(raw_input.trim())
    }

    /// The reply `submit` would log for this input: the matched response or
    /// the fallback text.
    pub fn reply(&self, raw_input: &str) -> &str {
        self.find(raw_input).response().unwrap_or(&self.fallback)
    }

    /// Processes one user submission and records the exchange.
    ///
    /// ## Errors
    ///
    /// Returns [`BotError::EmptyInput`] when `raw_input` is blank after
    /// trimming. Nothing is appended in that case.
    pub fn submit(&mut self, raw_input: &str) -> std::result::Result<(&Message, &Message), BotError> {
        let trimmed = raw_input.trim();
        if trimmed.is_empty() {
            return Err(BotError::EmptyInput);
        }

        let reply = self.reply(trimmed).to_string();
        debug!("Logging exchange #{}.", self.log.len() / 2 + 1);
        Ok(self
            .log
            .append_exchange(Message::user(trimmed), Message::bot(reply)))
    }
}
