//! Selector Suggest Library
//!
//! Token suggestion engine for the selector field of data privacy rules,
//! with a terminal host built on reedline.
//!
//! # Modules
//!
//! - `cli`: Command-line interface and argument parsing
//! - `config`: Configuration management
//! - `error`: Error types and handling
//! - `field`: Selector field boundary and event replay
//! - `formatter`: Output formatting for one-shot commands
//! - `repl`: Interactive line editor host
//! - `suggest`: Catalog, selectors and the suggestion engine
//!
//! # Example
//!
//! ```
//! use selector_suggest::{SelectorCatalog, SelectorField};
//!
//! let mut published = Vec::new();
//! {
//!     let mut field = SelectorField::new(SelectorCatalog::shared_builtin(), "", |v: &str| {
//!         published.push(v.to_string())
//!     });
//!     selector_suggest::field::type_text(&mut field, "$fr");
//!     assert_eq!(field.view().suggestions, vec!["frame".to_string()]);
//! }
//! assert_eq!(published.last().map(String::as_str), Some("$fr"));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod field;
pub mod formatter;
pub mod repl;
pub mod suggest;

// Re-export commonly used types
pub use config::Config;
pub use error::{Result, SelectorError};
pub use field::SelectorField;
pub use formatter::Formatter;
pub use repl::ReplEngine;
pub use suggest::{SelectorCatalog, TokenSuggestionEngine};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library version string
///
/// # Returns
/// * `&str` - Version string
pub fn version() -> &'static str {
    VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
