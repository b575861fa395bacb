//! Configuration error types.
//!
//! The simulation has no failure path of its own: every grid index comes from
//! loop bounds and every random pick is drawn from a non-empty candidate set.
//! The only fallible surface is loading tuning and settings from JSON.

use std::fmt;

/// Errors raised while loading or validating configuration
#[derive(Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    Io(std::io::Error),

    /// The file was read but is not valid JSON for the target type.
    Parse(serde_json::Error),

    /// A value parsed fine but is outside its usable range.
    Invalid {
        /// Name of the offending field.
        field: &'static str,
        /// Human-readable description of the accepted range.
        reason: &'static str,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "could not read configuration: {err}"),
            Self::Parse(err) => write!(f, "malformed configuration: {err}"),
            Self::Invalid { field, reason } => write!(f, "invalid `{field}`: {reason}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
            Self::Invalid { .. } => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}
