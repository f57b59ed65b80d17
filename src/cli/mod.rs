//! Command-line interface for selector-suggest
//!
//! This module handles:
//! - Command-line argument parsing using clap
//! - Configuration loading and validation
//! - One-shot subcommands (suggest, catalog, config, completion)
//! - Mode selection (one-shot vs interactive)

pub mod completion;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

use crate::config::{Config, LogLevel, OutputFormat};
use crate::error::Result;
use crate::field::replay_line;
use crate::formatter::{Formatter, SuggestionReport};
use crate::suggest::SelectorCatalog;

/// Selector suggestion engine for data privacy rules
#[derive(Parser, Debug)]
#[command(
    name = "selector-suggest",
    version,
    about = "Suggest selectors for data privacy rules",
    long_about = "Interactive and one-shot suggestions for selector fields: type `$` for value
types, press space after a selector for boolean operators."
)]
pub struct CliArgs {
    /// Configuration file path
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Output format (plain, json, json-pretty, table)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,

    /// Disable colored output
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Quiet mode (minimal output)
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Verbose mode (detailed logging)
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Very verbose mode (trace logging)
    #[arg(long = "vv")]
    pub very_verbose: bool,

    /// Subcommands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands for selector-suggest
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show version information
    Version,

    /// Generate shell completion script
    Completion {
        /// Shell type (bash, zsh, fish)
        #[arg(value_name = "SHELL")]
        shell: String,
    },

    /// Show configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Validate configuration file
        #[arg(long)]
        validate: bool,
    },

    /// List the selector catalog
    Catalog,

    /// Type TEXT into a selector field and print the suggestions it shows
    Suggest {
        /// Text typed into the field
        #[arg(value_name = "TEXT", allow_hyphen_values = true)]
        text: String,
    },
}

/// CLI interface handler
pub struct CliInterface {
    /// Parsed command-line arguments
    args: CliArgs,

    /// Loaded configuration
    config: Config,
}

impl CliInterface {
    /// Create a new CLI interface from the process arguments
    ///
    /// # Returns
    /// * `Result<Self>` - New CLI interface or error
    pub fn new() -> Result<Self> {
        Self::from_args(CliArgs::parse())
    }

    /// Create a CLI interface from parsed arguments
    pub fn from_args(args: CliArgs) -> Result<Self> {
        let config = Self::load_config(&args)?;
        Ok(Self { args, config })
    }

    /// Load configuration from file and merge with arguments
    ///
    /// # Arguments
    /// * `args` - Command-line arguments
    ///
    /// # Returns
    /// * `Result<Config>` - Loaded configuration or error
    fn load_config(args: &CliArgs) -> Result<Config> {
        let mut config = Config::load_from_file(args.config_file.as_deref())?;

        if let Err(e) = config.validate() {
            eprintln!("Warning: Configuration validation failed: {}", e);
            eprintln!("Using default configuration instead.");
            config = Config::default();
        }

        Self::apply_args_to_config(&mut config, args);

        Ok(config)
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the CLI arguments
    pub fn args(&self) -> &CliArgs {
        &self.args
    }

    /// Get the configuration file path (from args or default)
    pub fn config_path(&self) -> PathBuf {
        self.args
            .config_file
            .clone()
            .unwrap_or_else(Config::default_path)
    }

    /// Build the selector catalog for this run
    ///
    /// Without catalog extensions the process-wide built-in catalog is shared.
    pub fn catalog(&self) -> Result<Arc<SelectorCatalog>> {
        if self.config.catalog.selectors.is_empty() {
            Ok(SelectorCatalog::shared_builtin())
        } else {
            Ok(Arc::new(self.config.build_catalog()?))
        }
    }

    /// Apply CLI arguments to configuration
    fn apply_args_to_config(config: &mut Config, args: &CliArgs) {
        Self::apply_display_args(config, args);
        Self::apply_logging_args(config, args);
    }

    /// Apply display-related CLI arguments to configuration
    fn apply_display_args(config: &mut Config, args: &CliArgs) {
        if let Some(format_str) = &args.format {
            config.display.format = OutputFormat::parse(format_str).unwrap_or_else(|| {
                eprintln!("Warning: Unknown format '{}', using plain", format_str);
                OutputFormat::Plain
            });
        }

        if args.no_color {
            config.display.color_output = false;
        }
    }

    /// Apply logging-related CLI arguments to configuration
    fn apply_logging_args(config: &mut Config, args: &CliArgs) {
        config.logging.level = if args.very_verbose {
            LogLevel::Trace
        } else if args.verbose {
            LogLevel::Debug
        } else if args.quiet {
            LogLevel::Error
        } else {
            config.logging.level
        };
    }

    /// Handle subcommands
    ///
    /// # Returns
    /// * `Result<bool>` - True if subcommand was handled, false to continue
    pub fn handle_subcommand(&self) -> Result<bool> {
        match &self.args.command {
            Some(Commands::Version) => {
                self.show_version();
                Ok(true)
            }
            Some(Commands::Completion { shell }) => {
                completion::generate_completion(shell)?;
                Ok(true)
            }
            Some(Commands::Config { show, validate }) => {
                self.handle_config_command(*show, *validate)?;
                Ok(true)
            }
            Some(Commands::Catalog) => {
                println!("{}", self.render_catalog()?);
                Ok(true)
            }
            Some(Commands::Suggest { text }) => {
                let output = self.render_suggestions(text)?;
                if !output.is_empty() {
                    println!("{}", output);
                }
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Render the suggestions shown after typing `text`
    pub fn render_suggestions(&self, text: &str) -> Result<String> {
        let engine = replay_line(self.catalog()?, text);
        let report = SuggestionReport::from_engine(&engine);
        Formatter::from_config(&self.config.display).format_report(&report)
    }

    /// Render the selector catalog
    pub fn render_catalog(&self) -> Result<String> {
        let catalog = self.catalog()?;
        Formatter::from_config(&self.config.display).format_catalog(&catalog)
    }

    /// Show version information
    fn show_version(&self) {
        println!("selector-suggest version {}", env!("CARGO_PKG_VERSION"));
        println!("Rust version: {}", env!("CARGO_PKG_RUST_VERSION"));
    }

    /// Handle config subcommand
    ///
    /// # Arguments
    /// * `show` - Whether to show configuration
    /// * `validate` - Whether to validate configuration
    fn handle_config_command(&self, show: bool, validate: bool) -> Result<()> {
        if validate {
            self.validate_config_file();
        }

        if show {
            self.show_config()?;
        }

        Ok(())
    }

    /// Validate configuration file
    fn validate_config_file(&self) {
        let path = self.config_path();
        println!("Validating configuration file: {}", path.display());

        if !path.exists() {
            println!("❌ Configuration file does not exist");
            return;
        }

        match Config::from_file(&path) {
            Ok(config) => match config.validate() {
                Ok(_) => println!("✅ Configuration is valid"),
                Err(e) => println!("❌ Configuration validation failed: {}", e),
            },
            Err(e) => println!("❌ Failed to load configuration: {}", e),
        }
    }

    /// Show effective configuration
    fn show_config(&self) -> Result<()> {
        println!("Configuration file: {}", self.config_path().display());
        println!();
        println!("=== Effective Configuration ===");
        println!();
        println!("{}", self.config.to_toml()?);
        Ok(())
    }

    /// Print banner for interactive mode
    pub fn print_banner(&self) {
        if !self.args.quiet {
            println!("selector-suggest {}", env!("CARGO_PKG_VERSION"));
            println!("Type `$` for value types, space for operators, Tab for the menu.");
        }
    }
}
