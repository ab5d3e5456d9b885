use serde::{Deserialize, Serialize};

/// How identifiers (columns, tables, schemas, aliases) are quoted.
///
/// - `WhenNeeded`: quote only identifiers PostgreSQL would otherwise fold or reject.
/// - `Always`: quote every identifier.
/// - `Never`: emit identifiers verbatim.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum IdentifierQuoting {
    /// Quote identifiers with uppercase letters, special characters or reserved words (default).
    #[default]
    WhenNeeded,
    /// Always wrap identifiers in double quotes.
    Always,
    /// Never quote; the caller guarantees identifiers are safe.
    Never,
}

/// Serializer configuration.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// Quoting strategy for identifiers
    #[serde(default)]
    pub identifier_quoting: IdentifierQuoting,
}

impl Config {
    /// Create default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration with an explicit quoting strategy.
    pub fn from(identifier_quoting: IdentifierQuoting) -> Self {
        Self { identifier_quoting }
    }

    /// Convenience: quote every identifier.
    pub fn always_quote() -> Self {
        Self::from(IdentifierQuoting::Always)
    }

    /// Convenience: never quote identifiers.
    pub fn never_quote() -> Self {
        Self::from(IdentifierQuoting::Never)
    }
}
