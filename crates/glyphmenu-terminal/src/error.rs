//! Error types for glyphmenu-terminal.

use glyphmenu_core::ConfigError;
use thiserror::Error;

/// Errors raised by the terminal backend.
#[derive(Debug, Error)]
pub enum TerminalError {
    /// IO error from terminal operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Menu style could not be loaded.
    #[error("Invalid menu configuration: {0}")]
    Config(#[from] ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use glyphmenu_core::MenuStyle;

    #[test]
    fn test_terminal_error_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "tty missing");
        let err: TerminalError = io_err.into();
        assert!(matches!(err, TerminalError::Io(_)));
        assert!(err.to_string().contains("IO error"));
    }

    #[test]
    fn test_terminal_error_config() {
        let config_err = MenuStyle::from_toml_str("spacing = -2.0").unwrap_err();
        let err: TerminalError = config_err.into();
        assert!(matches!(err, TerminalError::Config(_)));
        assert!(err.to_string().contains("spacing"));
    }
}
