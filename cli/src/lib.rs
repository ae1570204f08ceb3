//! # BotEleitor
//!
//! File: cli/src/lib.rs
//!
//! ## Overview
//!
//! Library half of the `boteleitor` crate. It exposes the matching engine
//! (`chat`), the shared infrastructure (`core`) and the command handlers
//! (`commands`) so that the binary in `main.rs` stays a thin entry point and
//! integration tests can exercise the public API directly.
//!
pub mod chat;
pub mod commands;
pub mod core;
