//! # BotEleitor Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout BotEleitor. Failures are
//! rare by construction: matching is a total function and "no intent matched"
//! is a normal outcome answered with the fallback text, never an error. What
//! remains are configuration problems, an invalid intent catalog, blank input
//! and lookups of unknown intents from the CLI.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `BotError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! ## Examples
//!
//! ```rust
//! use boteleitor::core::error::BotError;
//!
//! fn check(input: &str) -> Result<&str, BotError> {
//!     let trimmed = input.trim();
//!     if trimmed.is_empty() {
//!         return Err(BotError::EmptyInput);
//!     }
//!     Ok(trimmed)
//! }
//!
//! assert!(check("   ").is_err());
//! ```
//!
//! Command handlers add context with `anyhow::Context` and let `main` print
//! the final message.
//!
use thiserror::Error;

/// Custom error type for the BotEleitor application.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum BotError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Input cannot be empty.")]
    EmptyInput,

    #[error("Intent catalog is empty; at least one intent is required.")]
    EmptyCatalog,

    #[error("Intent '{intent}' has no trigger phrases.")]
    NoTriggers { intent: String },

    #[error("Intent '{intent}' has a blank trigger phrase, which would match any input.")]
    BlankTrigger { intent: String },

    #[error("Intent '{name}' is declared more than once.")]
    DuplicateIntent { name: String },

    #[error("Intent '{name}' not found.")]
    IntentNotFound { name: String },
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
