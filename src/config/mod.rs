//! Configuration system for observe-expr.
//!
//! Settings are read from `~/.config/observe-expr/config.toml`. Every field has
//! a default, so a partial file (or none at all) is fine. Command-line flags
//! take precedence over anything loaded here.
//!
//! # Example
//!
//! ```
//! use observe_expr::config::Config;
//! use observe_expr::output::OutputFormat;
//!
//! let config = Config::default();
//! assert_eq!(config.format, OutputFormat::Text);
//! assert_eq!(config.indent_size, 2);
//!
//! let custom = Config {
//!     format: OutputFormat::Json,
//!     ..Config::default()
//! };
//! assert!(!custom.fail_fast);
//! ```

use crate::output::OutputFormat;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for the observe-expr tool.
///
/// * `format` - How parsed expressions are printed (default: text)
/// * `indent_size` - Spaces per level in tree output (default: 2)
/// * `fail_fast` - Stop at the first invalid expression (default: false)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Output format for parsed expressions
    #[serde(default)]
    pub format: OutputFormat,

    /// Number of spaces per indentation level in tree output
    #[serde(default = "default_indent_size")]
    pub indent_size: usize,

    /// Stop processing at the first invalid expression
    #[serde(default)]
    pub fail_fast: bool,
}

fn default_indent_size() -> usize {
    2
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            indent_size: default_indent_size(),
            fail_fast: false,
        }
    }
}

impl Config {
    /// Returns the path to the config file.
    ///
    /// Uses `~/.config/observe-expr/config.toml` on all platforms.
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|mut path| {
            path.push(".config");
            path.push("observe-expr");
            path.push("config.toml");
            path
        })
    }

    /// Loads configuration from the default config file.
    ///
    /// Returns the default configuration if the file doesn't exist or can't be read.
    pub fn load() -> Self {
        let config_path = match Self::config_path() {
            Some(path) => path,
            None => return Self::default(),
        };

        if !config_path.exists() {
            return Self::default();
        }

        match Self::load_from(&config_path) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("ignoring config file: {:#}", err);
                Self::default()
            }
        }
    }

    /// Loads configuration from an explicit file.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = toml::from_str(&contents)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Saves configuration to the default config file.
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        self.save_to(&config_path)
    }

    /// Saves configuration to an explicit file.
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string)?;

        Ok(())
    }
}
