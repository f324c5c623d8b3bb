//! Error types for multimemo.

use thiserror::Error;

/// Default result type for multimemo.
pub type MemoResult<T> = Result<T, MemoError>;

/// Errors that can occur while building or running a privatized function.
#[derive(Error, Debug)]
pub enum MemoError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Error parsing TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Error serializing TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("'{0}' is not a valid variable name")]
    InvalidName(String),

    #[error("'{0}' is a reserved word and cannot name a slot")]
    ReservedName(String),

    #[error("Slot '{0}' is declared more than once")]
    DuplicateName(String),

    #[error("At least one slot name is required")]
    EmptyNames,

    #[error("Slot '{0}' was not declared for this function")]
    UndeclaredSlot(String),

    #[error("Slot '{name}' does not hold a value of type {expected}")]
    SlotTypeMismatch { name: String, expected: &'static str },

    #[error("'{0}' leaked into the ambient namespace")]
    Leaked(String),

    #[error("{0}")]
    Other(String),
}

impl MemoError {
    /// Creates a generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Self::Other(msg.into())
    }

    /// Creates a configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Whether this error was raised while constructing the private scope.
    pub fn is_generation_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidName(_) | Self::ReservedName(_) | Self::DuplicateName(_) | Self::EmptyNames
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_errors() {
        assert!(MemoError::EmptyNames.is_generation_error());
        assert!(MemoError::InvalidName("1x".into()).is_generation_error());
        assert!(!MemoError::UndeclaredSlot("x".into()).is_generation_error());
        assert!(!MemoError::other("boom").is_generation_error());
    }

    #[test]
    fn test_error_messages() {
        let err = MemoError::SlotTypeMismatch {
            name: "iSeed".to_string(),
            expected: "i64",
        };
        assert_eq!(err.to_string(), "Slot 'iSeed' does not hold a value of type i64");
        assert_eq!(MemoError::config("bad").to_string(), "Configuration error: bad");
    }
}
