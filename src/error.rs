//! Error types for arXiv API operations.

use std::fmt;

/// Convenience result alias used throughout the crate
pub type Result<T> = std::result::Result<T, ArxivError>;

/// Errors that can occur when talking to the arXiv API
#[derive(Debug, thiserror::Error)]
pub enum ArxivError {
    /// The relative API path could not be resolved, or the request could not be built
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The HTTP call failed or its body could not be decoded
    #[error("error reading response from {method} {uri}: {source}")]
    ResponseRead {
        method: String,
        uri: String,
        #[source]
        source: ReadCause,
    },

    /// The feed came back without any entries
    #[error("e-print not found: {0}")]
    EprintNotFound(NotFound),

    /// Configuration could not be loaded or the HTTP client could not be built
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ArxivError {
    /// Whether this error means the upstream feed was empty
    pub fn is_not_found(&self) -> bool {
        matches!(self, ArxivError::EprintNotFound(_))
    }
}

impl From<config::ConfigError> for ArxivError {
    fn from(err: config::ConfigError) -> Self {
        ArxivError::Config(err.to_string())
    }
}

/// Underlying cause of a [`ArxivError::ResponseRead`]
#[derive(Debug, thiserror::Error)]
pub enum ReadCause {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected HTTP status {0}")]
    Status(reqwest::StatusCode),

    #[error("XML: {0}")]
    Decode(#[from] quick_xml::DeError),
}

/// What an empty feed was answering
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotFound {
    /// A lookup of a single e-print by identifier
    Id(String),
    /// A list query that matched nothing
    Query,
}

impl fmt::Display for NotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotFound::Id(id) => write!(f, "no e-print with id {}", id),
            NotFound::Query => write!(f, "no e-prints matched the query"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_messages() {
        let err = ArxivError::EprintNotFound(NotFound::Id("2301.12345".to_string()));
        assert!(err.is_not_found());
        assert_eq!(
            err.to_string(),
            "e-print not found: no e-print with id 2301.12345"
        );

        let err = ArxivError::EprintNotFound(NotFound::Query);
        assert_eq!(err.to_string(), "e-print not found: no e-prints matched the query");
    }

    #[test]
    fn test_response_read_message() {
        let err = ArxivError::ResponseRead {
            method: "GET".to_string(),
            uri: "/api/query?id_list=1".to_string(),
            source: ReadCause::Status(reqwest::StatusCode::BAD_GATEWAY),
        };
        assert!(!err.is_not_found());
        assert_eq!(
            err.to_string(),
            "error reading response from GET /api/query?id_list=1: unexpected HTTP status 502 Bad Gateway"
        );
    }
}
