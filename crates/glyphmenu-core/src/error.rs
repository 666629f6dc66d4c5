//! Error types for glyphmenu-core.

use thiserror::Error;

/// Errors raised while loading or saving a [`MenuStyle`](crate::MenuStyle).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// TOML could not be parsed (including malformed colors).
    #[error("failed to parse menu style: {0}")]
    Parse(#[from] toml::de::Error),

    /// The style could not be written as TOML.
    #[error("failed to serialize menu style: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A field holds a value the layout cannot use.
    #[error("invalid {field}: {reason}")]
    Invalid {
        /// Offending field name
        field: &'static str,
        /// Why the value was rejected
        reason: String,
    },
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_display() {
        let err = ConfigError::invalid("spacing", "must be finite");
        assert_eq!(err.to_string(), "invalid spacing: must be finite");
    }

    #[test]
    fn test_parse_from_toml_error() {
        let toml_err = toml::from_str::<toml::Table>("spacing = ").unwrap_err();
        let err: ConfigError = toml_err.into();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("failed to parse menu style"));
    }
}
