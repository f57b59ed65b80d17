//! Replay of typed text as input events
//!
//! Line-oriented hosts only see whole lines. Replaying a line one character at
//! a time, in the order a browser input reports events (key press, then the
//! grown value), rebuilds the engine state a live field would have.

use std::sync::Arc;

use crate::suggest::{KeyPress, SelectorCatalog, TokenSuggestionEngine};

use super::SelectorField;

/// Anything that accepts input events
pub trait EventTarget {
    /// Current value as last reported
    fn current_value(&self) -> &str;

    /// Forward a key press
    fn key_press(&mut self, press: &KeyPress);

    /// Forward a new full value
    fn value_change(&mut self, value: &str);
}

impl EventTarget for TokenSuggestionEngine {
    fn current_value(&self) -> &str {
        self.value()
    }

    fn key_press(&mut self, press: &KeyPress) {
        self.on_key_press(press);
    }

    fn value_change(&mut self, value: &str) {
        self.on_value_change(value);
    }
}

impl EventTarget for SelectorField<'_> {
    fn current_value(&self) -> &str {
        self.value()
    }

    fn key_press(&mut self, press: &KeyPress) {
        self.handle_key_press(press);
    }

    fn value_change(&mut self, value: &str) {
        self.handle_change(value);
    }
}

/// Type `text` after the target's current value, one character at a time
pub fn type_text<T: EventTarget + ?Sized>(target: &mut T, text: &str) {
    let mut value = target.current_value().to_string();

    for ch in text.chars() {
        target.key_press(&KeyPress::character(ch));
        value.push(ch);
        target.value_change(&value);
    }
}

/// Engine state after typing `line` into an empty input
pub fn replay_line(catalog: Arc<SelectorCatalog>, line: &str) -> TokenSuggestionEngine {
    let mut engine = TokenSuggestionEngine::new(catalog);
    engine.on_value_change("");
    type_text(&mut engine, line);
    engine
}
