//! Table formatting using tabled

use tabled::{
    Table,
    builder::Builder,
    settings::{Alignment, Color, Modify, Style, object::Columns, object::Rows, width::Width},
};

use super::{CatalogEntry, SuggestionReport};

/// Maximum width for a single column (characters)
const DEFAULT_MAX_COLUMN_WIDTH: usize = 60;

/// Table formatter for reports and catalogs
pub struct TableFormatter {
    /// Maximum column width
    max_column_width: usize,

    /// Enable colored output
    use_colors: bool,
}

impl TableFormatter {
    /// Create a new table formatter with default settings
    pub fn new() -> Self {
        Self {
            max_column_width: Self::terminal_column_width(),
            use_colors: false,
        }
    }

    /// Create a new table formatter with color support
    ///
    /// # Arguments
    /// * `use_colors` - Enable colored output
    pub fn with_colors(use_colors: bool) -> Self {
        Self {
            use_colors,
            ..Self::new()
        }
    }

    /// Set maximum column width
    pub fn with_max_column_width(mut self, width: usize) -> Self {
        self.max_column_width = width;
        self
    }

    /// Column width derived from the terminal, when there is one
    fn terminal_column_width() -> usize {
        crossterm::terminal::size()
            .map(|(cols, _)| (cols as usize).saturating_sub(24).max(20))
            .unwrap_or(DEFAULT_MAX_COLUMN_WIDTH)
            .min(DEFAULT_MAX_COLUMN_WIDTH * 2)
    }

    /// Format a suggestion report with one row per suggestion
    pub fn format_report(&self, report: &SuggestionReport) -> String {
        if report.suggestions.is_empty() {
            return "(no suggestions)".to_string();
        }

        let mut builder = Builder::default();
        builder.push_record(["suggestion".to_string(), "result".to_string()]);
        for (suggestion, completion) in report.suggestions.iter().zip(&report.completions) {
            builder.push_record([suggestion.clone(), completion.clone()]);
        }

        self.finish(builder.build(), 2)
    }

    /// Format catalog entries with one row per trigger key
    pub fn format_catalog(&self, entries: &[CatalogEntry]) -> String {
        let mut builder = Builder::default();
        builder.push_record(["trigger".to_string(), "candidates".to_string()]);
        for entry in entries {
            builder.push_record([entry.key.clone(), entry.values.join(", ")]);
        }

        self.finish(builder.build(), 2)
    }

    fn finish(&self, mut table: Table, columns: usize) -> String {
        table.with(Style::modern());

        for i in 0..columns {
            table.with(Modify::new(Columns::new(i..=i)).with(Width::wrap(self.max_column_width)));
        }

        table.with(Modify::new(Rows::first()).with(Alignment::center()));

        if self.use_colors {
            table.modify(Rows::first(), Color::FG_CYAN | Color::BOLD);
        }

        table.to_string()
    }
}

impl Default for TableFormatter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_report() {
        let report = SuggestionReport {
            input: "abc".to_string(),
            selector: None,
            fragment: None,
            history: Vec::new(),
            suggestions: Vec::new(),
            completions: Vec::new(),
        };
        assert_eq!(TableFormatter::new().format_report(&report), "(no suggestions)");
    }

    #[test]
    fn test_catalog_table_contains_rows() {
        let entries = vec![CatalogEntry {
            key: "$".to_string(),
            values: vec!["string".to_string(), "number".to_string()],
        }];
        let output = TableFormatter::new()
            .with_max_column_width(40)
            .format_catalog(&entries);
        assert!(output.contains("trigger"));
        assert!(output.contains("string, number"));
    }
}
