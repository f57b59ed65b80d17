//! JSON formatting for reports and catalog listings

use colored_json::prelude::*;
use serde::Serialize;

use crate::error::{Result, SelectorError};

/// JSON formatter with pretty printing support
pub struct JsonFormatter {
    /// Enable pretty printing
    pretty: bool,

    /// Indentation level
    indent: usize,

    /// Enable colored output
    use_colors: bool,
}

impl JsonFormatter {
    /// Create a new JSON formatter
    ///
    /// # Arguments
    /// * `pretty` - Enable pretty printing
    /// * `use_colors` - Enable colored output
    pub fn new(pretty: bool, use_colors: bool) -> Self {
        Self {
            pretty,
            indent: 2,
            use_colors,
        }
    }

    /// Set the indentation width used by pretty printing
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Serialize a value
    ///
    /// # Returns
    /// * `Result<String>` - JSON string or error
    pub fn format<T: Serialize>(&self, value: &T) -> Result<String> {
        let json_str = if self.pretty {
            self.to_pretty_string(value)?
        } else {
            serde_json::to_string(value)?
        };

        // Only apply colors for pretty-printed JSON
        // Compact JSON should remain as-is for piping
        if self.use_colors && self.pretty {
            Ok(json_str.to_colored_json_auto().unwrap_or(json_str))
        } else {
            Ok(json_str)
        }
    }

    /// Serialize with custom indentation
    fn to_pretty_string<T: Serialize>(&self, value: &T) -> Result<String> {
        let mut buf = Vec::new();
        let indent = " ".repeat(self.indent);
        let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        value.serialize(&mut ser)?;
        String::from_utf8(buf).map_err(|e| SelectorError::Output(e.to_string()))
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new(true, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Sample {
        key: &'static str,
        values: Vec<&'static str>,
    }

    fn sample() -> Sample {
        Sample {
            key: "$",
            values: vec!["string", "number"],
        }
    }

    #[test]
    fn test_compact_json() {
        let output = JsonFormatter::new(false, false).format(&sample()).unwrap();
        assert_eq!(output, r#"{"key":"$","values":["string","number"]}"#);
    }

    #[test]
    fn test_pretty_json_indent() {
        let output = JsonFormatter::new(true, false)
            .with_indent(4)
            .format(&sample())
            .unwrap();
        assert!(output.contains("\n    \"key\": \"$\""));
    }

    #[test]
    fn test_compact_json_never_colored() {
        let output = JsonFormatter::new(false, true).format(&sample()).unwrap();
        assert!(!output.contains('\u{1b}'));
    }
}
