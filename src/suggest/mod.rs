//! Token suggestion engine for selector fields
//!
//! The engine watches the text a user types into a selector input and decides,
//! token by token, whether a dropdown of suggestions should be shown and which
//! candidates it contains.
//!
//! # Architecture
//!
//! - **Catalog**: fixed mapping from trigger keys (`$`, `booleanOperators`) to candidates
//! - **Selector**: a trigger that has been armed, plus its candidate list
//! - **KeyPress / CursorPosition**: the raw events a host forwards to the engine
//! - **SuggestionState**: what the dropdown currently shows
//! - **Engine**: the state machine tying the pieces together
//!
//! # Examples
//!
//! ```
//! use selector_suggest::suggest::{KeyPress, SelectorCatalog, TokenSuggestionEngine};
//!
//! let mut engine = TokenSuggestionEngine::new(SelectorCatalog::shared_builtin());
//!
//! engine.on_key_press(&KeyPress::character('$'));
//! engine.on_value_change("$");
//! engine.on_value_change("$str");
//!
//! assert_eq!(engine.suggestions(), ["string"]);
//! ```

mod catalog;
mod engine;
mod key_event;
mod selector;
mod state;

pub use catalog::{BOOLEAN_OPERATORS_KEY, SelectorCatalog, VALUE_TRIGGER_KEY};
pub use engine::TokenSuggestionEngine;
pub use key_event::{CursorPosition, KeyPress, SPACE_KEY_CODE};
pub use selector::{ActiveSelector, SelectorKind};
pub use state::SuggestionState;
