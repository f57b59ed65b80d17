//! Selector field - the boundary between the suggestion engine and its owner
//!
//! The field mirrors the props of a form input: a value owned by the parent
//! form, an optional error message, a disabled flag and an optional blur
//! handler. Every value the field wants to publish goes through the single
//! `on_change` callback; the field never writes to its owner otherwise.

mod replay;

use std::sync::Arc;

use tracing::trace;

use crate::suggest::{CursorPosition, KeyPress, SelectorCatalog, TokenSuggestionEngine};

pub use replay::{EventTarget, replay_line, type_text};

/// Placeholder shown while the field is empty
pub const DEFAULT_PLACEHOLDER: &str = "ex. strings, numbers, custom";

/// Callback receiving every value the field publishes
pub type ChangeHandler<'a> = Box<dyn FnMut(&str) + 'a>;

/// Callback invoked when the field loses focus
pub type BlurHandler<'a> = Box<dyn FnMut() + 'a>;

/// Render model of the field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    /// Text in the input element
    pub value: String,
    /// Placeholder text
    pub placeholder: String,
    /// Error message shown under the input
    pub error: Option<String>,
    /// Whether the input accepts events
    pub disabled: bool,
    /// Suggestions in the dropdown, empty when it is hidden
    pub suggestions: Vec<String>,
}

/// Selector input with inline suggestions
pub struct SelectorField<'a> {
    engine: TokenSuggestionEngine,
    value: String,
    error: Option<String>,
    disabled: bool,
    placeholder: String,
    cursor: CursorPosition,
    on_change: ChangeHandler<'a>,
    on_blur: Option<BlurHandler<'a>>,
}

impl<'a> SelectorField<'a> {
    /// Create a field
    ///
    /// # Arguments
    /// * `catalog` - Selector catalog shared with other fields
    /// * `value` - Initial value from the owning form
    /// * `on_change` - Receives every value the field publishes
    pub fn new(
        catalog: Arc<SelectorCatalog>,
        value: impl Into<String>,
        on_change: impl FnMut(&str) + 'a,
    ) -> Self {
        let value = value.into();
        let mut engine = TokenSuggestionEngine::new(catalog);
        engine.on_value_change(&value);

        Self {
            engine,
            cursor: CursorPosition::At(value.len()),
            value,
            error: None,
            disabled: false,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            on_change: Box::new(on_change),
            on_blur: None,
        }
    }

    /// Set the error message
    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    /// Set the disabled flag
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the blur handler
    pub fn with_on_blur(mut self, on_blur: impl FnMut() + 'a) -> Self {
        self.on_blur = Some(Box::new(on_blur));
        self
    }

    /// Set the placeholder
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Handle the input reporting a new value
    pub fn handle_change(&mut self, value: &str) {
        if self.disabled {
            trace!("Ignoring change on disabled field");
            return;
        }

        self.engine.on_value_change(value);
        self.value = value.to_string();
        self.cursor = CursorPosition::At(self.value.len());
        (self.on_change)(value);
    }

    /// Handle a key press on the input
    pub fn handle_key_press(&mut self, press: &KeyPress) {
        if self.disabled {
            return;
        }
        self.engine.on_key_press(press);
    }

    /// Handle a click on a dropdown entry
    pub fn handle_suggestion_click(&mut self, suggestion: &str) {
        if self.disabled {
            return;
        }

        if let Some(composed) = self.engine.on_suggestion_click(suggestion) {
            self.cursor = CursorPosition::At(composed.len());
            (self.on_change)(&composed);
            self.value = composed;
        }
    }

    /// Handle the input losing focus
    pub fn handle_blur(&mut self) {
        if let Some(on_blur) = self.on_blur.as_mut() {
            on_blur();
        }
    }

    /// Accept a value pushed by the owning form
    ///
    /// Does not call `on_change`; the owner already knows the value.
    pub fn set_value(&mut self, value: impl Into<String>) {
        let value = value.into();
        if value != self.engine.value() {
            self.engine.on_value_change(&value);
        }
        self.cursor = CursorPosition::At(value.len());
        self.value = value;
    }

    /// Replace the error message
    pub fn set_error(&mut self, error: Option<String>) {
        self.error = error;
    }

    /// Enable or disable the field
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Record the caret position reported by the host
    pub fn set_cursor(&mut self, cursor: CursorPosition) {
        self.cursor = cursor;
    }

    /// Caret position, `CursorPosition::Unavailable` when the host could not tell
    pub fn cursor_position(&self) -> CursorPosition {
        self.cursor
    }

    /// Current value
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Whether the field is disabled
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Underlying suggestion engine
    pub fn engine(&self) -> &TokenSuggestionEngine {
        &self.engine
    }

    /// Render model for the current state
    pub fn view(&self) -> FieldView {
        FieldView {
            value: self.value.clone(),
            placeholder: self.placeholder.clone(),
            error: self.error.clone(),
            disabled: self.disabled,
            suggestions: self.engine.suggestions().to_vec(),
        }
    }
}

impl std::fmt::Debug for SelectorField<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectorField")
            .field("value", &self.value)
            .field("error", &self.error)
            .field("disabled", &self.disabled)
            .field("cursor", &self.cursor)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    #[test]
    fn test_changes_are_forwarded_unchanged() {
        let changes = RefCell::new(Vec::new());
        let mut field = SelectorField::new(SelectorCatalog::shared_builtin(), "", |v: &str| {
            changes.borrow_mut().push(v.to_string())
        });

        type_text(&mut field, "$s");
        drop(field);

        assert_eq!(*changes.borrow(), vec!["$".to_string(), "$s".to_string()]);
    }

    #[test]
    fn test_click_publishes_composed_value() {
        let changes = RefCell::new(Vec::new());
        let mut field = SelectorField::new(SelectorCatalog::shared_builtin(), "", |v: &str| {
            changes.borrow_mut().push(v.to_string())
        });

        type_text(&mut field, "$exc");
        assert_eq!(field.view().suggestions, vec!["exception".to_string()]);

        field.handle_suggestion_click("exception");
        assert_eq!(field.value(), "$exception");
        assert!(field.view().suggestions.is_empty());
        assert_eq!(field.cursor_position(), CursorPosition::At(10));
        drop(field);

        assert_eq!(changes.borrow().last().map(String::as_str), Some("$exception"));
    }

    #[test]
    fn test_disabled_field_ignores_events() {
        let calls = Cell::new(0);
        let mut field = SelectorField::new(SelectorCatalog::shared_builtin(), "", |_: &str| {
            calls.set(calls.get() + 1)
        })
        .with_disabled(true);

        type_text(&mut field, "$st");
        field.handle_suggestion_click("string");

        assert_eq!(field.value(), "");
        assert!(field.engine().active_selector().is_none());
        assert!(field.view().disabled);
        drop(field);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_blur_reaches_handler_even_when_disabled() {
        let blurred = Cell::new(false);
        let mut field = SelectorField::new(SelectorCatalog::shared_builtin(), "", |_: &str| {})
            .with_disabled(true)
            .with_on_blur(|| blurred.set(true));

        field.handle_blur();
        drop(field);
        assert!(blurred.get());
    }

    #[test]
    fn test_blur_without_handler() {
        let mut field = SelectorField::new(SelectorCatalog::shared_builtin(), "", |_: &str| {});
        field.handle_blur();
    }

    #[test]
    fn test_view_defaults() {
        let field = SelectorField::new(SelectorCatalog::shared_builtin(), "", |_: &str| {})
            .with_error("Invalid selector");
        let view = field.view();

        assert_eq!(view.placeholder, DEFAULT_PLACEHOLDER);
        assert_eq!(view.error.as_deref(), Some("Invalid selector"));
        assert!(!view.disabled);
        assert!(view.suggestions.is_empty());
    }

    #[test]
    fn test_set_value_empty_resets_engine() {
        let mut field = SelectorField::new(SelectorCatalog::shared_builtin(), "", |_: &str| {});
        type_text(&mut field, "$da");
        assert!(!field.view().suggestions.is_empty());

        field.set_value("");
        assert!(field.view().suggestions.is_empty());
        assert!(field.engine().selectors().is_empty());
    }

    #[test]
    fn test_cursor_position_sentinel() {
        let mut field = SelectorField::new(SelectorCatalog::shared_builtin(), "$user", |_: &str| {});
        assert_eq!(field.cursor_position().offset(), 5);

        field.set_cursor(CursorPosition::Unavailable);
        assert_eq!(field.cursor_position().offset(), -1);
        assert_eq!(field.value(), "$user");
    }
}
