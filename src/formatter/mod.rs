//! Output formatting for one-shot commands
//!
//! This module renders suggestion reports and the selector catalog as:
//! - Plain text (one entry per line)
//! - JSON (compact or pretty-printed, optionally colored)
//! - Tables

mod json;
mod table;

use serde::Serialize;

use crate::config::{DisplayConfig, OutputFormat};
use crate::error::Result;
use crate::suggest::{SelectorCatalog, TokenSuggestionEngine};

pub use json::JsonFormatter;
pub use table::TableFormatter;

/// Snapshot of the engine after replaying an input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuggestionReport {
    /// The replayed input
    pub input: String,
    /// Key of the live selector
    pub selector: Option<String>,
    /// Fragment the live selector filters by
    pub fragment: Option<String>,
    /// Keys of every armed selector, oldest first
    pub history: Vec<String>,
    /// Visible suggestions
    pub suggestions: Vec<String>,
    /// Value each suggestion would produce when chosen
    pub completions: Vec<String>,
}

impl SuggestionReport {
    /// Build a report from engine state
    pub fn from_engine(engine: &TokenSuggestionEngine) -> Self {
        let suggestions = engine.suggestions().to_vec();
        let completions = suggestions
            .iter()
            .filter_map(|s| engine.compose(s))
            .collect();

        Self {
            input: engine.value().to_string(),
            selector: engine.active_selector().map(|s| s.key.clone()),
            fragment: engine.fragment().map(str::to_string),
            history: engine.selectors().iter().map(|s| s.key.clone()).collect(),
            suggestions,
            completions,
        }
    }
}

/// One catalog entry, as rendered by `catalog`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    /// Trigger key
    pub key: String,
    /// Candidates in catalog order
    pub values: Vec<String>,
}

impl CatalogEntry {
    /// Collect every entry of a catalog
    pub fn collect(catalog: &SelectorCatalog) -> Vec<Self> {
        catalog
            .entries()
            .map(|(key, values)| Self {
                key: key.to_string(),
                values: values.to_vec(),
            })
            .collect()
    }
}

/// Main formatter for command output
pub struct Formatter {
    /// Output format type
    format_type: OutputFormat,

    /// Enable colored output
    use_colors: bool,
}

impl Formatter {
    /// Create a new formatter
    ///
    /// # Arguments
    /// * `format_type` - Output format type
    /// * `use_colors` - Enable colored output
    pub fn new(format_type: OutputFormat, use_colors: bool) -> Self {
        Self {
            format_type,
            use_colors,
        }
    }

    /// Create a formatter from display configuration
    pub fn from_config(config: &DisplayConfig) -> Self {
        Self::new(config.format, config.color_output)
    }

    /// Format a suggestion report
    pub fn format_report(&self, report: &SuggestionReport) -> Result<String> {
        match self.format_type {
            OutputFormat::Plain => Ok(report.suggestions.join("\n")),
            OutputFormat::Json => JsonFormatter::new(false, self.use_colors).format(report),
            OutputFormat::JsonPretty => JsonFormatter::new(true, self.use_colors).format(report),
            OutputFormat::Table => Ok(TableFormatter::with_colors(self.use_colors).format_report(report)),
        }
    }

    /// Format the selector catalog
    pub fn format_catalog(&self, catalog: &SelectorCatalog) -> Result<String> {
        let entries = CatalogEntry::collect(catalog);

        match self.format_type {
            OutputFormat::Plain => Ok(entries
                .iter()
                .map(|e| format!("{}\t{}", e.key, e.values.join(" ")))
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Json => JsonFormatter::new(false, self.use_colors).format(&entries),
            OutputFormat::JsonPretty => JsonFormatter::new(true, self.use_colors).format(&entries),
            OutputFormat::Table => {
                Ok(TableFormatter::with_colors(self.use_colors).format_catalog(&entries))
            }
        }
    }
}
