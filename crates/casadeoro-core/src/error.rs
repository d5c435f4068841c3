//! Error types for the Casa De Oro site

use thiserror::Error;

/// Main error type for site operations.
///
/// A missing navigation target is deliberately not represented here: the
/// navigator drops such requests without failing.
#[derive(Error, Debug)]
pub enum SiteError {
    /// General I/O error (config file access)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file was not valid JSON or had the wrong shape
    #[error("Config parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Config values parsed but are unusable
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Identifier does not name a known page section
    #[error("Unknown section: {0}")]
    UnknownSection(String),

    /// Script evaluation in the webview failed
    #[error("Bridge error: {0}")]
    Bridge(String),
}

/// Result type alias using SiteError
pub type SiteResult<T> = Result<T, SiteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SiteError::UnknownSection("menu".to_string());
        assert_eq!(format!("{}", err), "Unknown section: menu");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: SiteError = io_err.into();
        assert!(matches!(err, SiteError::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: SiteError = json_err.into();
        assert!(matches!(err, SiteError::Json(_)));
    }
}
