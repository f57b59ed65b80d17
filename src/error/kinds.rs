use std::{fmt, io};

/// Crate-wide `Result` type using [`SelectorError`] as the error.
///
/// This alias is re-exported by the parent `error` module and is intended
/// to be used throughout the crate for fallible operations.
pub type Result<T> = std::result::Result<T, SelectorError>;

/// Top-level error type for selector-suggest.
///
/// This type wraps more specific error kinds and provides a single
/// error type that can be used throughout the crate.
#[derive(Debug)]
pub enum SelectorError {
    /// Configuration errors.
    Config(ConfigError),

    /// I/O errors.
    Io(io::Error),

    /// Line editor errors raised by the interactive host.
    Repl(String),

    /// Output serialization errors.
    Output(String),

    /// Generic error with a free-form message.
    Generic(String),
}

/// Configuration-specific errors.
#[derive(Debug)]
pub enum ConfigError {
    /// Config file not found.
    FileNotFound(String),

    /// Invalid config format.
    InvalidFormat(String),

    /// Missing required field.
    MissingField(String),

    /// Invalid field value.
    InvalidValue { field: String, value: String },

    /// Generic configuration error.
    Generic(String),
}

/* ========================= Display & Error impls ========================= */

impl fmt::Display for SelectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectorError::Config(e) => write!(f, "Configuration error: {e}"),
            SelectorError::Io(e) => write!(f, "I/O error: {e}"),
            SelectorError::Repl(msg) => write!(f, "Line editor error: {msg}"),
            SelectorError::Output(msg) => write!(f, "Output error: {msg}"),
            SelectorError::Generic(msg) => write!(f, "{msg}"),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::FileNotFound(path) => write!(f, "Config file not found: {path}"),
            ConfigError::InvalidFormat(msg) => write!(f, "Invalid config format: {msg}"),
            ConfigError::MissingField(field) => write!(f, "Missing required field: {field}"),
            ConfigError::InvalidValue { field, value } => {
                write!(f, "Invalid value '{value}' for field '{field}'")
            }
            ConfigError::Generic(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for SelectorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SelectorError::Config(e) => Some(e),
            SelectorError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl std::error::Error for ConfigError {}

/* ========================= Conversions to SelectorError ========================= */

impl From<io::Error> for SelectorError {
    fn from(err: io::Error) -> Self {
        SelectorError::Io(err)
    }
}

impl From<ConfigError> for SelectorError {
    fn from(err: ConfigError) -> Self {
        SelectorError::Config(err)
    }
}

impl From<toml::de::Error> for SelectorError {
    fn from(err: toml::de::Error) -> Self {
        SelectorError::Config(ConfigError::InvalidFormat(err.to_string()))
    }
}

impl From<toml::ser::Error> for SelectorError {
    fn from(err: toml::ser::Error) -> Self {
        SelectorError::Config(ConfigError::Generic(format!(
            "Failed to serialize config: {err}"
        )))
    }
}

impl From<serde_json::Error> for SelectorError {
    fn from(err: serde_json::Error) -> Self {
        SelectorError::Output(err.to_string())
    }
}

impl From<reedline::ReedlineError> for SelectorError {
    fn from(err: reedline::ReedlineError) -> Self {
        SelectorError::Repl(err.to_string())
    }
}

impl From<String> for SelectorError {
    fn from(msg: String) -> Self {
        SelectorError::Generic(msg)
    }
}

impl From<&str> for SelectorError {
    fn from(msg: &str) -> Self {
        SelectorError::Generic(msg.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = SelectorError::from(ConfigError::InvalidValue {
            field: "logging.level".to_string(),
            value: "loud".to_string(),
        });
        assert_eq!(
            err.to_string(),
            "Configuration error: Invalid value 'loud' for field 'logging.level'"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let err: SelectorError = io::Error::new(io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(err, SelectorError::Io(_)));
        assert!(err.to_string().starts_with("I/O error"));
    }

    #[test]
    fn test_toml_error_maps_to_invalid_format() {
        let parsed: std::result::Result<toml::Table, _> = toml::from_str("not = [valid");
        let err: SelectorError = parsed.unwrap_err().into();
        assert!(matches!(
            err,
            SelectorError::Config(ConfigError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_string_conversion() {
        let err: SelectorError = "boom".into();
        assert_eq!(err.to_string(), "boom");
    }
}
