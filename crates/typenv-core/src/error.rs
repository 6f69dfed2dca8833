//! Error types.
//!
//! A missing or empty variable is not an error: the accessor returns its
//! default. Only a value that is present but unusable surfaces here.

use thiserror::Error;

/// A converter rejected a raw string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("could not convert \"{value}\" to {target}: {reason}")]
pub struct ConvertError {
    /// Human-readable name of the requested type, e.g. "bool" or "i64"
    pub target: String,
    /// The offending input (an element of a collection, or the whole value)
    pub value: String,
    pub reason: String,
}

impl ConvertError {
    pub fn new(target: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }
}

/// Errors returned when reading a typed environment variable.
#[derive(Debug, Error)]
pub enum EnvError {
    #[error("environment variable {name}={value:?} is invalid: {source}")]
    Convert {
        name: String,
        value: String,
        #[source]
        source: ConvertError,
    },

    #[error("environment variable {name} is set but is not valid unicode")]
    NotUnicode { name: String },
}

impl EnvError {
    /// Name of the variable that produced the error.
    pub fn name(&self) -> &str {
        match self {
            EnvError::Convert { name, .. } | EnvError::NotUnicode { name } => name,
        }
    }
}

pub type Result<T> = std::result::Result<T, EnvError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_error_display() {
        let err = ConvertError::new("bool", "maybe", "unrecognized token");
        assert_eq!(
            err.to_string(),
            "could not convert \"maybe\" to bool: unrecognized token"
        );
    }

    #[test]
    fn test_env_error_carries_name_and_source() {
        let err = EnvError::Convert {
            name: "APP_DEBUG".to_string(),
            value: "maybe".to_string(),
            source: ConvertError::new("bool", "maybe", "unrecognized token"),
        };
        assert_eq!(err.name(), "APP_DEBUG");
        let msg = err.to_string();
        assert!(msg.contains("APP_DEBUG"));
        assert!(msg.contains("unrecognized token"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
