//! Error types for the annotator.
//!
//! Uses `thiserror` for structured error handling with automatic `From`
//! implementations. Only infrastructure failures live here; a DOI that the
//! API does not know is not an error, it degrades the annotation instead.

/// Errors that abort a run.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// HTTP transport error (connection, DNS, TLS, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing error
    #[error("Failed to parse response: {0}")]
    Json(#[from] serde_json::Error),

    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed bibliography input
    #[error("Failed to parse bibliography: {0}")]
    Bibliography(String),
}

/// Result type alias for annotator operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bibliography_error_message() {
        let err = Error::Bibliography("unexpected token at 3:14".to_string());
        assert!(err.to_string().contains("unexpected token"));
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.bib");
        let err = Error::from(io);
        assert!(matches!(err, Error::Io(_)));
    }
}
