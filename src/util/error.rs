// PageShell - util/error.rs
//
// Typed errors for configuration consumption.
// No string-based error propagation; every variant names the exact
// contract violation so callers can match on it.

use std::fmt;

/// Errors raised by the configuration consumption contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The base domain was read before the embedding application set one.
    /// `domain` defaults to empty, and empty means unset.
    DomainNotSet,

    /// An override attempted to set an empty (or all-whitespace) domain,
    /// which would be indistinguishable from "unset".
    EmptyDomain,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DomainNotSet => write!(
                f,
                "Base domain is not set. The embedding application must \
                 provide one via AppConfig::with_domain before use."
            ),
            Self::EmptyDomain => write!(
                f,
                "Base domain must be non-empty; an empty domain is \
                 indistinguishable from an unset one."
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Convenience type alias for configuration results.
pub type Result<T> = std::result::Result<T, ConfigError>;
