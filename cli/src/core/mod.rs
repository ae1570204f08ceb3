//! # BotEleitor Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the infrastructure shared by the chat engine and the
//! command handlers:
//! - `config`: Configuration loading, merging, and validation
//! - `error`: Error types and the crate-wide `Result` alias
//!
//! ## Usage
//!
//! ```rust
//! use boteleitor::core::config; // For loading configuration
//! use boteleitor::core::error::{BotError, Result}; // For error handling
//! ```
//!
pub mod config;
pub mod error;
