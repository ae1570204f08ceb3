//! # BotEleitor Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module implements the configuration system for BotEleitor, handling
//! loading, merging, validation, and access to configuration data. Everything
//! has a built-in default, so running without any configuration file gives the
//! stock election assistant.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. An explicit file passed with `--config` or the `BOTELEITOR_CONFIG`
//!    environment variable. When present, no other file is consulted.
//! 2. Project-specific `.boteleitor.toml` in the current directory or its
//!    ancestors (the search stops at a directory containing `.git`)
//! 3. User-specific `config.toml` in the platform config directory
//!    (e.g. `~/.config/boteleitor/config.toml` on Linux)
//! 4. Default values defined in the code (`chat::catalog`)
//!
//! The intent catalog is a TOML array of tables. Array order is match
//! precedence, so it is preserved exactly as written. A project catalog
//! replaces the user catalog as a whole; the two are never interleaved.
//!
//! ## Examples
//!
//! Configuration file format:
//!
//! ```toml
//! [bot]
//! name = "Yve"
//! fallback = "❌ Não sei responder. Reformule por favor."
//!
//! [[intents]]
//! name = "data_eleicao"
//! triggers = ["data", "quando"]
//! response = "🗓️ A eleição será no dia 09 de outubro de 2025."
//! ```
//!
//! Loading:
//!
//! ```no_run
//! use boteleitor::core::config;
//!
//! let cfg = config::load_config(None)?;
//! println!("{} knows {} intent(s)", cfg.bot.name, cfg.catalog().len());
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
use crate::chat::catalog::{default_intents, DEFAULT_BOT_NAME, DEFAULT_FALLBACK, DEFAULT_GREETING};
use crate::chat::intent::Intent;
use crate::core::error::{BotError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Name of the project-level configuration file.
pub const PROJECT_CONFIG_FILENAME: &str = ".boteleitor.toml";

/// Environment variable naming an explicit configuration file.
pub const CONFIG_ENV_VAR: &str = "BOTELEITOR_CONFIG";

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)] // Error if unknown fields are in TOML
pub struct Config {
    #[serde(default)]
    pub bot: BotConfig,
    /// Intent catalog in precedence order. Empty means the built-in catalog.
    #[serde(default)]
    pub intents: Vec<Intent>,
}

/// Persona settings for the assistant.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct BotConfig {
    /// Name shown in front of replies.
    #[serde(default = "default_bot_name")]
    pub name: String,
    /// Opening message for interactive sessions.
    #[serde(default = "default_greeting")]
    pub greeting: String,
    /// Reply used when no intent matches.
    #[serde(default = "default_fallback")]
    pub fallback: String,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            name: default_bot_name(),
            greeting: default_greeting(),
            fallback: default_fallback(),
        }
    }
}

impl Config {
    /// The effective intent catalog: the configured one, or the built-in
    /// election catalog when none is configured.
    pub fn catalog(&self) -> Vec<Intent> {
        if self.intents.is_empty() {
            default_intents()
        } else {
            self.intents.clone()
        }
    }
}

fn default_bot_name() -> String {
    DEFAULT_BOT_NAME.to_string()
}
fn default_greeting() -> String {
    DEFAULT_GREETING.to_string()
}
fn default_fallback() -> String {
    DEFAULT_FALLBACK.to_string()
}

/// Loads, merges and validates configuration.
///
/// With `explicit` set, only that file is read (after `~` expansion).
/// Otherwise the user and project files are discovered and merged.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let config = match explicit {
        Some(path) => {
            let path = expand_path(path);
            info!("Loading configuration from: {}", path.display());
            load_config_from_path(&path)?
        }
        None => {
            let user_config = load_user_config()?;
            let project_config = load_project_config()?;
            merge_configs(user_config.unwrap_or_default(), project_config)
        }
    };
    validate_config(&config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", config.bot);
    Ok(config)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("br", "UEMASUL", "boteleitor") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<Config>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    if let Some(project_config_path) = find_project_config_path(&current_dir) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!("No project configuration file ({PROJECT_CONFIG_FILENAME}) found in current directory or ancestors.");
        Ok(None)
    }
}

/// Walks from `start` towards the root looking for `.boteleitor.toml`,
/// stopping at the first directory that contains `.git`.
fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

fn expand_path(path: &Path) -> PathBuf {
    PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned())
}

fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let project_cfg = match project {
        Some(p) => p,
        None => return user,
    };
    let mut merged = Config::default();
    merged.bot.name = if project_cfg.bot.name != default_bot_name() {
        project_cfg.bot.name
    } else {
        user.bot.name
    };
    merged.bot.greeting = if project_cfg.bot.greeting != default_greeting() {
        project_cfg.bot.greeting
    } else {
        user.bot.greeting
    };
    merged.bot.fallback = if project_cfg.bot.fallback != default_fallback() {
        project_cfg.bot.fallback
    } else {
        user.bot.fallback
    };
    merged.intents = if !project_cfg.intents.is_empty() {
        project_cfg.intents
    } else {
        user.intents
    };
    merged
}

fn validate_config(config: &Config) -> Result<()> {
    debug!("Validating final configuration...");
    if config.bot.name.trim().is_empty() {
        return Err(anyhow!(BotError::Config(
            "Bot name cannot be empty.".to_string()
        )));
    }
    if config.bot.fallback.trim().is_empty() {
        return Err(anyhow!(BotError::Config(
            "Fallback response cannot be empty.".to_string()
        )));
    }
    for intent in &config.intents {
        if intent.response.trim().is_empty() {
            return Err(anyhow!(BotError::Config(format!(
                "Intent '{}' has an empty response.",
                intent.name
            ))));
        }
    }
    debug!("Configuration validation successful.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_deserialize_basic_toml() {
        let toml_content = r#"
            [bot]
            name = "Rusty"

            [[intents]]
            name = "zeta"
            triggers = ["z"]
            response = "last letter"

            [[intents]]
            name = "alfa"
            triggers = ["a", "alfa"]
            response = """
linha 1
linha 2"""
        "#;

        let config: Config = toml::from_str(toml_content).expect("Failed to parse TOML");

        assert_eq!(config.bot.name, "Rusty");
        assert_eq!(config.bot.fallback, DEFAULT_FALLBACK); // Default
        assert_eq!(config.bot.greeting, DEFAULT_GREETING); // Default
        let names: Vec<&str> = config.intents.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["zeta", "alfa"]); // Declaration order, not alphabetical
        assert_eq!(config.intents[1].triggers, ["a", "alfa"]);
        assert_eq!(config.intents[1].response, "linha 1\nlinha 2");
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let result: std::result::Result<Config, _> = toml::from_str("[bot]\ncolor = \"red\"\n");
        assert!(result.is_err());

        let result: std::result::Result<Config, _> =
            toml::from_str("[[intents]]\nname = \"x\"\ntriggers = [\"x\"]\nresponse = \"r\"\nweight = 2\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_catalog_falls_back_to_builtin() {
        let config = Config::default();
        assert_eq!(config.catalog(), default_intents());

        let custom = Config {
            intents: vec![Intent::new("x", ["x"], "r")],
            ..Default::default()
        };
        assert_eq!(custom.catalog().len(), 1);
    }

    #[test]
    fn test_merge_project_overrides_user() {
        let user = Config {
            bot: BotConfig {
                name: "UserBot".into(),
                fallback: "user fallback".into(),
                ..Default::default()
            },
            intents: vec![Intent::new("user", ["u"], "from user")],
        };
        let project = Config {
            bot: BotConfig {
                name: "ProjectBot".into(),
                ..Default::default()
            },
            intents: Vec::new(),
        };

        let merged = merge_configs(user.clone(), Some(project));
        assert_eq!(merged.bot.name, "ProjectBot");
        assert_eq!(merged.bot.fallback, "user fallback"); // Project left it at default
        assert_eq!(merged.intents, user.intents); // Project has no catalog

        let project_with_catalog = Config {
            intents: vec![Intent::new("proj", ["p"], "from project")],
            ..Default::default()
        };
        let merged = merge_configs(user.clone(), Some(project_with_catalog));
        assert_eq!(merged.intents.len(), 1);
        assert_eq!(merged.intents[0].name, "proj");
        assert_eq!(merged.bot.name, "UserBot");

        assert_eq!(merge_configs(user.clone(), None), user);
    }

    #[test]
    fn test_validate_config() {
        assert!(validate_config(&Config::default()).is_ok());

        let mut config = Config::default();
        config.bot.name = "  ".into();
        let err = validate_config(&config).unwrap_err();
        assert_eq!(
            err.downcast_ref::<BotError>(),
            Some(&BotError::Config("Bot name cannot be empty.".into()))
        );

        let mut config = Config::default();
        config.bot.fallback = String::new();
        assert!(validate_config(&config)
            .unwrap_err()
            .to_string()
            .contains("Fallback response cannot be empty"));

        let config = Config {
            intents: vec![Intent::new("mudo", ["x"], " ")],
            ..Default::default()
        };
        assert!(validate_config(&config)
            .unwrap_err()
            .to_string()
            .contains("Intent 'mudo' has an empty response"));
    }

    #[test]
    fn test_find_project_config_in_ancestor() {
        let temp_dir = tempdir().unwrap();
        let nested = temp_dir.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();
        fs::write(temp_dir.path().join(PROJECT_CONFIG_FILENAME), "").unwrap();

        assert_eq!(
            find_project_config_path(&nested),
            Some(temp_dir.path().join(PROJECT_CONFIG_FILENAME))
        );
    }

    #[test]
    fn test_find_project_config_stops_at_git_root() {
        let temp_dir = tempdir().unwrap();
        let repo = temp_dir.path().join("repo");
        fs::create_dir_all(repo.join(".git")).unwrap();
        fs::create_dir_all(repo.join("src")).unwrap();
        // Outside the repository; must not be picked up.
        fs::write(temp_dir.path().join(PROJECT_CONFIG_FILENAME), "").unwrap();

        assert_eq!(find_project_config_path(&repo.join("src")), None);
    }

    #[test]
    fn test_load_explicit_config() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("bot.toml");
        fs::write(
            &path,
            "[bot]\nname = \"Teste\"\n\n[[intents]]\nname = \"oi\"\ntriggers = [\"ola\"]\nresponse = \"Oi!\"\n",
        )
        .unwrap();

        let config = load_config(Some(&path)).expect("explicit config loads");
        assert_eq!(config.bot.name, "Teste");
        assert_eq!(config.catalog()[0].response, "Oi!");
    }

    #[test]
    fn test_load_explicit_config_errors() {
        let temp_dir = tempdir().unwrap();
        let missing = temp_dir.path().join("missing.toml");
        let err = load_config(Some(&missing)).unwrap_err();
        assert!(err.to_string().contains("Failed to read configuration file"));

        let broken = temp_dir.path().join("broken.toml");
        fs::write(&broken, "[bot\nname = ").unwrap();
        let err = load_config(Some(&broken)).unwrap_err();
        assert!(err.to_string().contains("Failed to parse TOML"));
    }

    #[test]
    fn test_expand_path() {
        let home = std::env::var("HOME").unwrap_or_default();
        if !home.is_empty() {
            assert_eq!(
                expand_path(Path::new("~/bot.toml")),
                Path::new(&home).join("bot.toml")
            );
        }
        assert_eq!(
            expand_path(Path::new("/etc/bot.toml")),
            PathBuf::from("/etc/bot.toml")
        );
    }
}
