//! Error types for scratchio.
//!
//! Read and write operations return [`std::io::Result`] and hand back the
//! endpoint's own error untouched. [`ScratchError`] only covers what this
//! crate decides by itself.

use std::fmt;

/// Errors produced by scratchio itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScratchError {
    /// Invalid configuration parameter.
    InvalidConfig {
        /// Description of what was invalid.
        message: &'static str,
    },
}

impl fmt::Display for ScratchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScratchError::InvalidConfig { message } => {
                write!(f, "invalid config: {}", message)
            }
        }
    }
}

impl std::error::Error for ScratchError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_display() {
        let err = ScratchError::InvalidConfig {
            message: "initial_capacity must be a power of 2",
        };
        assert!(err.to_string().contains("invalid config"));
        assert!(err.source().is_none());
    }

    #[test]
    fn test_config_validation_yields_invalid_config() {
        let err = crate::ScratchConfig::new(1000).unwrap_err();
        assert!(matches!(err, ScratchError::InvalidConfig { .. }));
    }
}
