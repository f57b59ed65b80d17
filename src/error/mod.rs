//! Error handling for selector-suggest.
//!
//! The suggestion engine itself never fails: malformed states degrade to "no
//! suggestions". Errors only come from the layers around it:
//! - Configuration loading and validation
//! - Terminal I/O in the interactive host
//! - Shell completion and output generation
//!
//! # Example
//!
//! ```rust
//! use selector_suggest::error::{ConfigError, Result, SelectorError};
//!
//! fn check(key: &str) -> Result<()> {
//!     if key.is_empty() {
//!         return Err(ConfigError::MissingField("catalog.selectors".into()).into());
//!     }
//!     Ok(())
//! }
//!
//! assert!(matches!(check(""), Err(SelectorError::Config(_))));
//! ```

pub mod kinds;

// Re-export commonly used types
pub use kinds::{ConfigError, Result, SelectorError};
