use std::fmt::Display;

/// Failures surfaced by the connection-facing half of the crate.
///
/// Serialization itself never fails.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The underlying connection reported an error while running a query.
    Connection(String),
    /// A decoded row did not carry the requested column.
    MissingColumn(String),
    /// A column held a value of the wrong kind.
    Decode { column: String, expected: &'static str, found: &'static str },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn connection(message: impl Into<String>) -> Self {
        Error::Connection(message.into())
    }

    pub fn err<T>(self) -> Result<T> {
        Err(self)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Connection(message) => write!(f, "connection error: {}", message),
            Error::MissingColumn(column) => write!(f, "missing column '{}'", column),
            Error::Decode { column, expected, found } => write!(
                f,
                "cannot decode column '{}': expected {}, found {}",
                column,
                expected,
                found
            ),
        }
    }
}

impl std::error::Error for Error {}
