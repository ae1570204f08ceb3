//! # BotEleitor Chat Engine
//!
//! File: cli/src/chat/mod.rs
//!
//! ## Overview
//!
//! The decision logic of the assistant, consumed bottom-up:
//!
//! - **`normalize`**: Case folding and accent stripping applied to both user
//!   input and trigger phrases.
//! - **`intent`**: The ordered intent catalog and the first-match-wins,
//!   substring-containment search over it.
//! - **`catalog`**: The built-in election intents and persona strings.
//! - **`conversation`**: Messages and the append-only conversation log.
//! - **`bot`**: `Chatbot`, which runs normalize → match → append for each
//!   submission.
//!
//! Control flow for a submission:
//! 1. Raw text arrives from a front end (`commands::chat`, `commands::ask`).
//! 2. `Chatbot::submit` trims it and asks `IntentMatcher::find` for a match.
//! 3. The matched response, or the fallback text, is logged after the user
//!    message.
//!
pub mod bot;
pub mod catalog;
pub mod conversation;
pub mod intent;
pub mod normalize;
