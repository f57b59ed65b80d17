//! Configuration management for selector-suggest
//!
//! This module handles loading, parsing, and managing configuration from:
//! - Configuration files (TOML format)
//! - Command-line arguments
//!
//! Configuration precedence (highest to lowest):
//! 1. Command-line arguments
//! 2. Configuration file
//! 3. Default values

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ConfigError, Result};
use crate::suggest::SelectorCatalog;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Selector catalog extensions
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Display configuration
    #[serde(default)]
    pub display: DisplayConfig,

    /// History configuration
    #[serde(default)]
    pub history: HistoryConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Extra selectors merged into the built-in catalog
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Trigger key to candidate list
    #[serde(default)]
    pub selectors: BTreeMap<String, Vec<String>>,
}

/// Display and output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Output format for one-shot commands (plain, json, json-pretty, table)
    #[serde(default = "default_format")]
    pub format: OutputFormat,

    /// Enable colored output
    #[serde(default = "default_color_output")]
    pub color_output: bool,

    /// Enable selector highlighting in the interactive editor
    #[serde(default = "default_syntax_highlighting")]
    pub syntax_highlighting: bool,

    /// Show inline hints for the first matching suggestion
    #[serde(default = "default_inline_hints")]
    pub inline_hints: bool,
}

/// Output format options
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// One suggestion per line
    Plain,

    /// Compact JSON format (single-line)
    Json,

    /// Pretty-printed JSON format (multi-line)
    JsonPretty,

    /// Table format (ASCII table layout)
    Table,
}

/// Line editor history configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Maximum number of history entries
    #[serde(default = "default_max_history_size")]
    pub max_size: usize,

    /// Path to history file
    #[serde(default = "default_history_file")]
    pub file_path: PathBuf,

    /// Enable history persistence
    #[serde(default = "default_persist_history")]
    pub persist: bool,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: LogLevel,

    /// Enable timestamps in logs
    #[serde(default = "default_log_timestamps")]
    pub timestamps: bool,
}

/// Log level options
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

// Default value functions
fn default_format() -> OutputFormat {
    OutputFormat::Plain
}

fn default_color_output() -> bool {
    true
}

fn default_syntax_highlighting() -> bool {
    true
}

fn default_inline_hints() -> bool {
    true
}

fn default_max_history_size() -> usize {
    1000
}

fn default_history_file() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".selector_suggest_history")
}

fn default_persist_history() -> bool {
    true
}

fn default_log_level() -> LogLevel {
    LogLevel::Warn
}

fn default_log_timestamps() -> bool {
    false
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            color_output: default_color_output(),
            syntax_highlighting: default_syntax_highlighting(),
            inline_hints: default_inline_hints(),
        }
    }
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_size: default_max_history_size(),
            file_path: default_history_file(),
            persist: default_persist_history(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            timestamps: default_log_timestamps(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a file
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file (TOML format)
    ///
    /// # Returns
    /// * `Result<Config>` - Loaded configuration or error
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::FileNotFound(path.display().to_string()).into()
            } else {
                crate::error::SelectorError::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load configuration from an explicit path or the default location
    ///
    /// An explicit path must exist. A missing default file yields defaults.
    ///
    /// # Arguments
    /// * `path` - Explicit configuration file, if given on the command line
    ///
    /// # Returns
    /// * `Result<Config>` - Loaded configuration or error
    pub fn load_from_file(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = Self::default_path();
                if default_path.exists() {
                    Self::from_file(default_path)
                } else {
                    debug!("No configuration file, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    /// Get the default configuration file path
    ///
    /// # Returns
    /// * `PathBuf` - Path to default configuration file
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".selector-suggest")
            .join("config.toml")
    }

    /// Save configuration to a file
    ///
    /// # Arguments
    /// * `path` - Path where to save the configuration
    ///
    /// # Returns
    /// * `Result<()>` - Success or error
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Serialize the configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Validate the configuration
    ///
    /// # Returns
    /// * `Result<()>` - Ok if valid, error otherwise
    pub fn validate(&self) -> Result<()> {
        if self.history.max_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "history.max_size".to_string(),
                value: "0".to_string(),
            }
            .into());
        }

        for (key, values) in &self.catalog.selectors {
            if values.iter().any(|v| v.trim().is_empty()) {
                return Err(ConfigError::InvalidValue {
                    field: format!("catalog.selectors.{key}"),
                    value: "\"\"".to_string(),
                }
                .into());
            }
        }

        self.build_catalog().map(|_| ())
    }

    /// Build the selector catalog described by this configuration
    pub fn build_catalog(&self) -> Result<SelectorCatalog> {
        SelectorCatalog::with_extra(&self.catalog.selectors)
    }
}

impl LogLevel {
    /// Convert to tracing::Level
    pub fn to_tracing_level(&self) -> tracing::Level {
        match self {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

impl OutputFormat {
    /// Parse a format name as given on the command line
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "plain" | "text" => Some(OutputFormat::Plain),
            "json" => Some(OutputFormat::Json),
            "json-pretty" | "pretty" => Some(OutputFormat::JsonPretty),
            "table" => Some(OutputFormat::Table),
            _ => None,
        }
    }

    /// Check if format is JSON-based
    pub fn is_json(&self) -> bool {
        matches!(self, OutputFormat::Json | OutputFormat::JsonPretty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("selector-suggest-test-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.display.format, OutputFormat::Plain);
        assert!(config.display.color_output);
        assert_eq!(config.history.max_size, 1000);
        assert_eq!(config.logging.level, LogLevel::Warn);
        assert!(config.catalog.selectors.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: Config = toml::from_str(
            r#"
            [display]
            format = "json-pretty"

            [catalog.selectors]
            "@" = ["password", "ip"]
            "#,
        )
        .unwrap();

        assert_eq!(config.display.format, OutputFormat::JsonPretty);
        assert!(config.display.syntax_highlighting);
        assert_eq!(config.history.max_size, 1000);

        let catalog = config.build_catalog().unwrap();
        assert_eq!(catalog.get("@").map(|v| v.len()), Some(2));
        assert!(catalog.get("$").is_some());
    }

    #[test]
    fn test_save_and_load() {
        let path = temp_path("config.toml");
        let mut config = Config::default();
        config.logging.level = LogLevel::Debug;
        config
            .catalog
            .selectors
            .insert("@".to_string(), vec!["token".to_string()]);

        config.save(&path).unwrap();
        let loaded = Config::from_file(&path).unwrap();
        assert_eq!(loaded, config);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let err = Config::load_from_file(Some(temp_path("missing.toml").as_path())).unwrap_err();
        assert!(matches!(
            err,
            crate::error::SelectorError::Config(ConfigError::FileNotFound(_))
        ));
    }

    #[test]
    fn test_validate_rejects_zero_history() {
        let mut config = Config::default();
        config.history.max_size = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_blank_candidates() {
        let mut config = Config::default();
        config
            .catalog
            .selectors
            .insert("@".to_string(), vec!["  ".to_string()]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!(OutputFormat::parse("JSON"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::parse("json-pretty"), Some(OutputFormat::JsonPretty));
        assert_eq!(OutputFormat::parse("table"), Some(OutputFormat::Table));
        assert_eq!(OutputFormat::parse("xml"), None);
        assert!(OutputFormat::JsonPretty.is_json());
        assert!(!OutputFormat::Table.is_json());
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(LogLevel::Trace.to_tracing_level(), tracing::Level::TRACE);
        assert_eq!(LogLevel::Error.to_tracing_level(), tracing::Level::ERROR);
    }
}
