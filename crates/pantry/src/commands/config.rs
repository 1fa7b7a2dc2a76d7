//! Config command implementation.
//!
//! View and manage configuration settings.
//! Config file is located at ~/.config/pantry/config.toml.

use std::env;
use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use super::{resolve_feed_url, CommandContext, CommandError, Result};
use crate::cli::ConfigCommands;

/// Current config file version. Increment when making breaking changes to
/// the schema.
const CONFIG_VERSION: u32 = 1;

/// Configuration file structure.
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Config schema version for migrations.
    /// Defaults to current version when not present in file.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Feed URL (can also use the PANTRY_FEED_URL env var).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feed_url: Option<String>,

    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Returns the current config version (used by serde default).
fn default_version() -> u32 {
    CONFIG_VERSION
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            feed_url: None,
            output: OutputConfig::default(),
        }
    }
}

/// Output configuration.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Enable colors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<bool>,
}

/// Resolves the config file path.
///
/// The `PANTRY_CONFIG` environment variable overrides the default XDG
/// location (useful in tests).
pub fn config_path() -> Result<PathBuf> {
    if let Ok(path) = env::var("PANTRY_CONFIG") {
        return Ok(PathBuf::from(path));
    }

    let dirs = ProjectDirs::from("", "", "pantry")
        .ok_or_else(|| CommandError::Config("could not determine config directory".to_string()))?;
    Ok(dirs.config_dir().join("config.toml"))
}

/// Loads the config file, or defaults when it does not exist.
pub fn load_config() -> Result<Config> {
    let path = config_path()?;
    if !path.exists() {
        return Ok(Config::default());
    }

    let contents = fs::read_to_string(&path)?;
    toml::from_str(&contents).map_err(|e| {
        CommandError::Config(format!("invalid config file '{}': {}", path.display(), e))
    })
}

/// Saves the config file, creating parent directories as needed.
pub fn save_config(config: &Config) -> Result<()> {
    let path = config_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let contents =
        toml::to_string_pretty(config).map_err(|e| CommandError::Config(e.to_string()))?;
    fs::write(&path, contents)?;
    Ok(())
}

/// Executes the config command.
pub fn execute(ctx: &CommandContext, command: Option<&ConfigCommands>) -> Result<()> {
    match command.unwrap_or(&ConfigCommands::Show) {
        ConfigCommands::Show => show(ctx),
        ConfigCommands::Path => {
            println!("{}", config_path()?.display());
            Ok(())
        }
        ConfigCommands::SetUrl { url } => set_url(ctx, url),
    }
}

/// Prints the resolved configuration.
fn show(ctx: &CommandContext) -> Result<()> {
    let config = load_config()?;
    let resolved_url = resolve_feed_url(ctx);

    if ctx.json_output {
        let output = serde_json::json!({
            "path": config_path()?,
            "feed_url": resolved_url,
            "color": config.output.color,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if !ctx.quiet {
        println!("Config file: {}", config_path()?.display());
        println!("Feed URL: {}", resolved_url);
        if let Some(color) = config.output.color {
            println!("Color: {}", color);
        }
    }

    Ok(())
}

/// Stores a new feed URL.
fn set_url(ctx: &CommandContext, url: &str) -> Result<()> {
    let mut config = load_config()?;
    config.feed_url = Some(url.to_string());
    save_config(&config)?;

    if !ctx.quiet && !ctx.json_output {
        println!("Feed URL set to {url}");
    } else if ctx.json_output {
        println!("{}", serde_json::json!({ "feed_url": url }));
    }

    Ok(())
}
