//! Classification of accepted lines
//!
//! Tokens are classified one at a time against the catalog; there is no
//! grammar beyond "selector, operator, anything else".

use std::fmt;

use crate::suggest::{BOOLEAN_OPERATORS_KEY, SelectorCatalog};

/// Role of a whitespace-separated token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenClass {
    /// Trigger followed by a known candidate (`$string`)
    Selector,
    /// Trigger followed by an unknown value (`$strin`)
    UnknownSelector,
    /// One of the boolean operators
    Operator,
    /// Anything else
    Text,
}

/// Classify a single token
pub fn classify(catalog: &SelectorCatalog, token: &str) -> TokenClass {
    if catalog.contains_value(BOOLEAN_OPERATORS_KEY, token) {
        return TokenClass::Operator;
    }

    for trigger in catalog.typed_triggers() {
        if let Some(rest) = token.strip_prefix(trigger) {
            return if catalog.contains_value(trigger, rest) {
                TokenClass::Selector
            } else {
                TokenClass::UnknownSelector
            };
        }
    }

    TokenClass::Text
}

/// Outcome of an accepted line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineSummary {
    /// Value published by the field
    pub value: String,
    /// Recognized selectors
    pub selectors: Vec<String>,
    /// Boolean operators
    pub operators: Vec<String>,
    /// Selector tokens with unknown values
    pub unknown: Vec<String>,
}

impl LineSummary {
    /// Summarize a published value
    pub fn from_value(catalog: &SelectorCatalog, value: &str) -> Self {
        let mut summary = Self {
            value: value.to_string(),
            ..Self::default()
        };

        for token in value.split_whitespace() {
            match classify(catalog, token) {
                TokenClass::Selector => summary.selectors.push(token.to_string()),
                TokenClass::Operator => summary.operators.push(token.to_string()),
                TokenClass::UnknownSelector => summary.unknown.push(token.to_string()),
                TokenClass::Text => {}
            }
        }

        summary
    }

    /// Whether every selector token was recognized
    pub fn is_valid(&self) -> bool {
        self.unknown.is_empty()
    }
}

impl fmt::Display for LineSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "value: {}", self.value)?;
        if !self.selectors.is_empty() {
            write!(f, "\nselectors: {}", self.selectors.join(", "))?;
        }
        if !self.operators.is_empty() {
            write!(f, "\noperators: {}", self.operators.join(" "))?;
        }
        if !self.unknown.is_empty() {
            write!(f, "\nunknown: {}", self.unknown.join(", "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        let catalog = SelectorCatalog::builtin();
        assert_eq!(classify(&catalog, "$string"), TokenClass::Selector);
        assert_eq!(classify(&catalog, "$strin"), TokenClass::UnknownSelector);
        assert_eq!(classify(&catalog, "$"), TokenClass::UnknownSelector);
        assert_eq!(classify(&catalog, "&&"), TokenClass::Operator);
        assert_eq!(classify(&catalog, "!"), TokenClass::Operator);
        assert_eq!(classify(&catalog, "password"), TokenClass::Text);
    }

    #[test]
    fn test_summary() {
        let catalog = SelectorCatalog::builtin();
        let summary = LineSummary::from_value(&catalog, "$string && $frm || extra");
        assert_eq!(summary.selectors, vec!["$string"]);
        assert_eq!(summary.operators, vec!["&&", "||"]);
        assert_eq!(summary.unknown, vec!["$frm"]);
        assert!(!summary.is_valid());
    }

    #[test]
    fn test_summary_display() {
        let catalog = SelectorCatalog::builtin();
        let summary = LineSummary::from_value(&catalog, "$user");
        assert_eq!(summary.to_string(), "value: $user\nselectors: $user");
        assert!(summary.is_valid());
    }

    #[test]
    fn test_line_without_selectors_is_valid() {
        let catalog = SelectorCatalog::builtin();
        let summary = LineSummary::from_value(&catalog, "plain text");
        assert!(summary.selectors.is_empty());
        assert!(summary.is_valid());
    }
}
