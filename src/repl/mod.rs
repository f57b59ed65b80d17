//! Interactive host for the selector field
//!
//! This module puts a selector field behind a terminal line editor:
//! - Tab opens a completion menu fed by the suggestion engine
//! - Inline hints show the rest of the first matching suggestion
//! - Selectors and operators are highlighted as they are typed
//! - Accepted lines are summarized and marked invalid when a selector is unknown

mod completer;
mod engine;
mod highlighter;
mod hinter;
mod prompt;
mod summary;

pub use completer::SelectorCompleter;
pub use engine::ReplEngine;
pub use highlighter::SelectorHighlighter;
pub use hinter::SelectorHinter;
pub use prompt::SelectorPrompt;
pub use summary::{LineSummary, TokenClass, classify};
