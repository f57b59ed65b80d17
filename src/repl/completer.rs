//! Completer for reedline - provides completion suggestions

use std::sync::Arc;

use reedline::{Completer, Span, Suggestion};
use tracing::trace;

use crate::field::replay_line;
use crate::suggest::{ActiveSelector, SelectorCatalog, SelectorKind};

/// Selector completer for reedline
///
/// Each request replays the text before the cursor through a fresh engine.
/// The span starts after the committed part of the line, so accepting a
/// suggestion yields the same value as clicking it in the dropdown.
pub struct SelectorCompleter {
    catalog: Arc<SelectorCatalog>,
}

impl SelectorCompleter {
    /// Create a new completer over a catalog
    pub fn new(catalog: Arc<SelectorCatalog>) -> Self {
        Self { catalog }
    }

    fn describe(selector: &ActiveSelector) -> String {
        match selector.kind() {
            SelectorKind::BooleanOperator => "operator".to_string(),
            SelectorKind::Value => format!("{} selector", selector.key),
        }
    }
}

impl Completer for SelectorCompleter {
    /// Complete the input at the given cursor position
    ///
    /// # Arguments
    /// * `line` - The input line
    /// * `pos` - Cursor position (byte index)
    ///
    /// # Returns
    /// * `Vec<Suggestion>` - List of completion suggestions
    fn complete(&mut self, line: &str, pos: usize) -> Vec<Suggestion> {
        let pos = pos.min(line.len());
        if !line.is_char_boundary(pos) {
            return Vec::new();
        }

        let engine = replay_line(Arc::clone(&self.catalog), &line[..pos]);
        let Some(selector) = engine.active_selector() else {
            return Vec::new();
        };

        let start = engine.committed_prefix().len();
        let description = Self::describe(selector);
        trace!("Completing '{}' from byte {}", &line[..pos], start);

        engine
            .suggestions()
            .iter()
            .filter_map(|candidate| engine.compose(candidate))
            .map(|composed| Suggestion {
                value: composed[start..].to_string(),
                description: Some(description.clone()),
                style: None,
                extra: None,
                span: Span::new(start, pos),
                append_whitespace: false,
                match_indices: None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_completer() -> SelectorCompleter {
        SelectorCompleter::new(SelectorCatalog::shared_builtin())
    }

    #[test]
    fn test_complete_trigger_at_start() {
        let mut completer = create_test_completer();
        let suggestions = completer.complete("$st", 3);

        let values: Vec<&str> = suggestions.iter().map(|s| s.value.as_str()).collect();
        assert_eq!(values, vec!["$string", "$stacktrace", "$request"]);
        for suggestion in &suggestions {
            assert_eq!(suggestion.span.start, 0);
            assert_eq!(suggestion.span.end, 3);
            assert_eq!(suggestion.description.as_deref(), Some("$ selector"));
        }
    }

    #[test]
    fn test_complete_operator_after_space() {
        let mut completer = create_test_completer();
        let suggestions = completer.complete("$string ", 8);

        let values: Vec<&str> = suggestions.iter().map(|s| s.value.as_str()).collect();
        assert_eq!(values, vec![" ||", " &&", " !"]);
        assert_eq!(suggestions[0].span.start, 7);
        assert_eq!(suggestions[0].description.as_deref(), Some("operator"));
    }

    #[test]
    fn test_complete_second_selector() {
        let mut completer = create_test_completer();
        let line = "$string || $br";
        let suggestions = completer.complete(line, line.len());

        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].value, " $breadcrumb");
        assert_eq!(suggestions[0].span.start, 10);

        let mut accepted = line.to_string();
        accepted.replace_range(suggestions[0].span.start..suggestions[0].span.end, &suggestions[0].value);
        assert_eq!(accepted, "$string || $breadcrumb");
    }

    #[test]
    fn test_no_completion_for_plain_text() {
        let mut completer = create_test_completer();
        assert!(completer.complete("hello", 5).is_empty());
        assert!(completer.complete("", 0).is_empty());
    }

    #[test]
    fn test_ideographic_space_offers_nothing() {
        let mut completer = create_test_completer();
        let line = "$fr\u{3000}";
        assert!(completer.complete(line, line.len()).is_empty());
    }

    #[test]
    fn test_cursor_in_middle_uses_prefix() {
        let mut completer = create_test_completer();
        let suggestions = completer.complete("$fr || $x", 3);
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].value, "$frame");
        assert_eq!(suggestions[0].span.end, 3);
    }
}
