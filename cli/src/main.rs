//! # BotEleitor Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file serves as the main entry point for the BotEleitor CLI.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to appropriate command handlers
//!
//! ## Examples
//!
//! ```bash
//! # Get help
//! boteleitor --help
//!
//! # Interactive session with matcher debug logs
//! boteleitor -vv chat
//!
//! # One-shot question with a custom catalog
//! boteleitor --config ~/eleicao.toml ask "Qual a data da eleição?"
//! ```
//!
//! Command processing flow:
//! 1. Parse command-line args via Clap
//! 2. Configure logging based on verbosity level
//! 3. Route to appropriate command handler
//! 4. Format and display any errors that occur
//!
use boteleitor::commands;
use boteleitor::core::config::CONFIG_ENV_VAR;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "boteleitor",
    about = "🤖 BotEleitor: assistant for the UEMASUL Reitor/Vice-Reitor election",
    long_about = "Answers questions about the Reitor/Vice-Reitor election by matching keywords\n\
                  against a catalog of intents. Works interactively (chat) or one-shot (ask).",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Configuration file to use instead of the discovered ones.
    #[arg(long, global = true, env = CONFIG_ENV_VAR)]
    config: Option<PathBuf>,
}

/// Enum defining all available top-level commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start an interactive session (reads questions from stdin).
    #[command(alias = "c")]
    Chat(commands::chat::ChatArgs),
    /// Answer a single question and exit.
    #[command(alias = "a")]
    Ask(commands::ask::AskArgs),
    /// List the intent catalog, or show one intent in detail.
    #[command(alias = "i")]
    Intents(commands::intents::IntentsArgs),
    /// Print the normalized (case- and accent-folded) form of a text.
    Normalize(commands::normalize::NormalizeArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let config_path = cli.config.as_deref();
    let command_result = match cli.command {
        Commands::Chat(args) => commands::chat::handle_chat(args, config_path).await,
        Commands::Ask(args) => commands::ask::handle_ask(args, config_path).await,
        Commands::Intents(args) => commands::intents::handle_intents(args, config_path).await,
        Commands::Normalize(args) => commands::normalize::handle_normalize(args).await,
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
