//! Suggestion engine - the selector field's state machine
//!
//! The engine has two entry points driven by the host: value changes and key
//! presses. A third one, suggestion clicks, composes the value the host should
//! propagate to its owner. Armed selectors are kept as a history so that one
//! input can hold several selectors joined by boolean operators; the last
//! entry is the live one.

use std::sync::Arc;

use tracing::{debug, trace};

use super::catalog::{BOOLEAN_OPERATORS_KEY, SelectorCatalog};
use super::key_event::KeyPress;
use super::selector::ActiveSelector;
use super::state::SuggestionState;

/// Incremental token-based suggestion engine
#[derive(Debug, Clone)]
pub struct TokenSuggestionEngine {
    /// Catalog of trigger keys
    catalog: Arc<SelectorCatalog>,
    /// Last value seen through `on_value_change`
    search_term: String,
    /// Armed selectors, oldest first
    selectors: Vec<ActiveSelector>,
    /// Dropdown state
    suggestions: SuggestionState,
}

impl TokenSuggestionEngine {
    /// Create an engine over a catalog
    ///
    /// # Arguments
    /// * `catalog` - Shared, read-only selector catalog
    pub fn new(catalog: Arc<SelectorCatalog>) -> Self {
        Self {
            catalog,
            search_term: String::new(),
            selectors: Vec::new(),
            suggestions: SuggestionState::default(),
        }
    }

    /// Last space-separated segment of a value
    ///
    /// Only the space character separates tokens, matching the key code that
    /// arms the boolean operators. A trailing space yields an empty token.
    pub fn last_token(value: &str) -> &str {
        value.rsplit(' ').next().unwrap_or_default()
    }

    /// Handle a change of the full input value
    ///
    /// # Arguments
    /// * `value` - The new value of the input
    pub fn on_value_change(&mut self, value: &str) {
        if value.is_empty() {
            trace!("Input cleared, resetting selectors");
            self.search_term.clear();
            self.selectors.clear();
            self.suggestions.reset();
            return;
        }

        let last_token = Self::last_token(value);

        if let Some(selector) = self.selectors.last()
            && last_token != selector.key
        {
            let fragment = selector.fragment(last_token);
            let settled = !selector.is_boolean() && selector.values.iter().any(|v| v == fragment);

            if !settled {
                let filtered = selector.filter(fragment);
                trace!(
                    "Filtered '{}' selector by '{}': {} of {} candidates",
                    selector.key,
                    fragment,
                    filtered.len(),
                    selector.values.len()
                );
                self.suggestions.show(filtered);
            }
        }

        self.search_term = value.to_string();
    }

    /// Handle a key press on the input
    ///
    /// Trigger keys arm their selector. The space key arms the boolean
    /// operator selector once some text has been typed. Other keys are ignored.
    ///
    /// # Arguments
    /// * `press` - The key press event
    pub fn on_key_press(&mut self, press: &KeyPress) {
        let key = if press.is_space() {
            if self.search_term.trim().is_empty() {
                return;
            }
            BOOLEAN_OPERATORS_KEY
        } else if press.key == BOOLEAN_OPERATORS_KEY {
            return;
        } else {
            press.key.as_str()
        };

        let Some(values) = self.catalog.get(key) else {
            return;
        };

        if self.active_selector().is_some_and(|s| s.key == key) {
            trace!("Selector '{}' already armed", key);
            return;
        }

        debug!("Arming selector '{}' with {} candidates", key, values.len());
        self.selectors.push(ActiveSelector::new(key, values));
        self.suggestions.show(values.to_vec());
    }

    /// Handle a click on a suggestion
    ///
    /// Hides the dropdown and returns the composed value the host should
    /// propagate. Returns `None` when no selector is armed.
    ///
    /// # Arguments
    /// * `suggestion` - The clicked candidate
    pub fn on_suggestion_click(&mut self, suggestion: &str) -> Option<String> {
        let composed = self.compose(suggestion)?;
        debug!("Suggestion '{}' composed into '{}'", suggestion, composed);
        self.search_term.clone_from(&composed);
        self.suggestions.hide();
        Some(composed)
    }

    /// Value that choosing `suggestion` would produce, without changing state
    pub fn compose(&self, suggestion: &str) -> Option<String> {
        let selector = self.active_selector()?;
        let committed = self.committed_prefix();
        let insertion = selector.insertion(suggestion);

        if committed.is_empty() {
            Some(insertion)
        } else {
            Some(format!("{committed} {insertion}"))
        }
    }

    /// Current value without the token being typed, trailing whitespace trimmed
    pub fn committed_prefix(&self) -> &str {
        let last = Self::last_token(&self.search_term);
        self.search_term[..self.search_term.len() - last.len()].trim_end()
    }

    /// Fragment the live selector filters by, if a selector is armed
    pub fn fragment(&self) -> Option<&str> {
        let last = Self::last_token(&self.search_term);
        self.active_selector().map(|s| s.fragment(last))
    }

    /// The live selector
    pub fn active_selector(&self) -> Option<&ActiveSelector> {
        self.selectors.last()
    }

    /// Every selector armed since the input was last empty
    pub fn selectors(&self) -> &[ActiveSelector] {
        &self.selectors
    }

    /// Dropdown state
    pub fn state(&self) -> &SuggestionState {
        &self.suggestions
    }

    /// Candidates to render, empty when the dropdown is hidden
    pub fn suggestions(&self) -> &[String] {
        self.suggestions.rendered()
    }

    /// Check if the dropdown is rendered
    pub fn is_shown(&self) -> bool {
        self.suggestions.is_shown()
    }

    /// Last value seen by the engine
    pub fn value(&self) -> &str {
        &self.search_term
    }

    /// Catalog in use
    pub fn catalog(&self) -> &SelectorCatalog {
        &self.catalog
    }
}
