use thiserror::Error;

/// Errors returned by the strict parsing entry points.
///
/// The display-oriented functions never fail; they degrade to an empty
/// string instead of surfacing one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Symbology token outside the known table
    #[error("unknown symbology token: {0:?}")]
    UnknownSymbology(String),
    /// Timestamp that is not ISO-8601
    #[error("invalid ISO-8601 timestamp: {0:?}")]
    InvalidTimestamp(String),
}

/// Result alias for fallible operations in this crate.
pub type Result<T> = std::result::Result<T, Error>;
