//! Armed selectors

use super::catalog::BOOLEAN_OPERATORS_KEY;

/// How the typed fragment after a selector is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorKind {
    /// Typed trigger immediately followed by a value (`$string`)
    Value,
    /// Operator typed as its own token after a space (`&&`)
    BooleanOperator,
}

/// A trigger that has been armed, together with its candidates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveSelector {
    /// Catalog key that armed this selector
    pub key: String,
    /// Full candidate list from the catalog
    pub values: Vec<String>,
}

impl ActiveSelector {
    /// Create a selector for a catalog entry
    pub fn new(key: impl Into<String>, values: &[String]) -> Self {
        Self {
            key: key.into(),
            values: values.to_vec(),
        }
    }

    /// Kind of this selector, derived from its key
    pub fn kind(&self) -> SelectorKind {
        if self.key == BOOLEAN_OPERATORS_KEY {
            SelectorKind::BooleanOperator
        } else {
            SelectorKind::Value
        }
    }

    /// Check if this is the boolean operator selector
    pub fn is_boolean(&self) -> bool {
        self.kind() == SelectorKind::BooleanOperator
    }

    /// Extract the fragment typed after the trigger from the last token
    ///
    /// Value selectors skip as many characters as the trigger key has. Boolean
    /// operator selectors use the token as typed.
    pub fn fragment<'a>(&self, last_token: &'a str) -> &'a str {
        match self.kind() {
            SelectorKind::BooleanOperator => last_token,
            SelectorKind::Value => {
                let skip = self.key.chars().count();
                match last_token.char_indices().nth(skip) {
                    Some((idx, _)) => &last_token[idx..],
                    None => "",
                }
            }
        }
    }

    /// Candidates whose lowercase form contains the lowercase fragment
    ///
    /// Order follows the catalog.
    pub fn filter(&self, fragment: &str) -> Vec<String> {
        let needle = fragment.to_lowercase();
        self.values
            .iter()
            .filter(|value| value.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    /// Text inserted for a chosen candidate, without separating whitespace
    pub fn insertion(&self, suggestion: &str) -> String {
        match self.kind() {
            SelectorKind::BooleanOperator => suggestion.to_string(),
            SelectorKind::Value => format!("{}{}", self.key, suggestion),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value_selector() -> ActiveSelector {
        let values: Vec<String> = ["string", "stacktrace", "frame"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        ActiveSelector::new("$", &values)
    }

    #[test]
    fn test_kind_from_key() {
        assert_eq!(value_selector().kind(), SelectorKind::Value);
        let ops = ActiveSelector::new(BOOLEAN_OPERATORS_KEY, &["||".to_string()]);
        assert!(ops.is_boolean());
    }

    #[test]
    fn test_fragment_strips_trigger() {
        let selector = value_selector();
        assert_eq!(selector.fragment("$str"), "str");
        assert_eq!(selector.fragment("$"), "");
        assert_eq!(selector.fragment(""), "");
    }

    #[test]
    fn test_fragment_is_char_aligned() {
        let selector = ActiveSelector::new("§", &[]);
        assert_eq!(selector.fragment("§ab"), "ab");
    }

    #[test]
    fn test_boolean_fragment_is_token() {
        let ops = ActiveSelector::new(BOOLEAN_OPERATORS_KEY, &[]);
        assert_eq!(ops.fragment("&"), "&");
    }

    #[test]
    fn test_filter_case_insensitive_substring() {
        let selector = value_selector();
        assert_eq!(selector.filter("ST"), vec!["string", "stacktrace"]);
        assert_eq!(selector.filter("ame"), vec!["frame"]);
        assert!(selector.filter("zzz").is_empty());
        assert_eq!(selector.filter("").len(), 3);
    }

    #[test]
    fn test_insertion() {
        assert_eq!(value_selector().insertion("frame"), "$frame");
        let ops = ActiveSelector::new(BOOLEAN_OPERATORS_KEY, &[]);
        assert_eq!(ops.insertion("&&"), "&&");
    }
}
