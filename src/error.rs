use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building pattern objects or loading demo settings.
#[derive(Error, Debug)]
pub enum PatternError {
    /// A required collaborator (wrapped item, draw strategy, config value) was missing or unusable.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    #[error("failed to read config file {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, PatternError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_message() {
        let err = PatternError::InvalidArgument("Invalid item");
        assert_eq!(err.to_string(), "invalid argument: Invalid item");
    }

    #[test]
    fn config_read_mentions_path() {
        let err = PatternError::ConfigRead {
            path: PathBuf::from("/nowhere/patterns.toml"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/nowhere/patterns.toml"));
        assert!(msg.contains("gone"));
    }
}
