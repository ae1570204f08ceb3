//! # BotEleitor CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration test files in `cli/tests/`. Every
//! command built here runs in an isolated temporary directory with `HOME` and
//! `XDG_CONFIG_HOME` pointing inside it, so configuration files on the machine
//! running the tests are never picked up.
//!

// Allow potentially unused code in this common module, as different test files might use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::{fs, path::PathBuf};
use tempfile::TempDir;

/// # Get BotEleitor Command (`bot_cmd`)
///
/// Creates an `assert_cmd::Command` for the compiled `boteleitor` binary,
/// isolated inside `sandbox`.
///
/// ## Panics
/// Panics if the `boteleitor` binary cannot be found via `Command::cargo_bin`.
pub fn bot_cmd(sandbox: &TempDir) -> Command {
    let mut cmd =
        Command::cargo_bin("boteleitor").expect("Failed to find boteleitor binary for testing");
    cmd.current_dir(sandbox.path())
        .env("HOME", sandbox.path())
        .env("XDG_CONFIG_HOME", sandbox.path().join(".config"))
        .env_remove("BOTELEITOR_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

/// Creates an empty sandbox directory.
pub fn sandbox() -> TempDir {
    tempfile::tempdir().expect("Failed to create sandbox directory")
}

/// Writes `content` to `name` inside the sandbox and returns its path.
pub fn write_file(sandbox: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = sandbox.path().join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    fs::write(&path, content).expect("Failed to write test file");
    path
}

/// A small two-intent catalog where both intents match "peso do voto".
pub const OVERLAP_CATALOG: &str = r#"
[bot]
name = "Rusty"
fallback = "❌ Não sei."

[[intents]]
name = "geral"
triggers = ["voto"]
response = "Resposta geral"

[[intents]]
name = "peso"
triggers = ["peso do voto"]
response = "Resposta de peso"
"#;
