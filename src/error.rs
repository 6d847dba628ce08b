//! Error types for md2hml library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for md2hml operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during conversion.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading the input or writing the output.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// An embedded resource (image) could not be located.
    #[error("Resource not found: {}", .0.display())]
    ResourceNotFound(PathBuf),

    /// An embedded resource exists but could not be read.
    #[error("Failed to read resource {}: {source}", path.display())]
    ResourceReadFailure {
        /// Path of the resource
        path: PathBuf,
        /// Underlying read error
        #[source]
        source: io::Error,
    },

    /// A table-like block had fewer than the two lines a table needs.
    #[error("Malformed table: {0} line(s), expected a header and a separator row")]
    MalformedTable(usize),

    /// The input is not valid UTF-8 text.
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Error during rendering (HWPML, JSON).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Whether the conversion pipeline recovers from this error locally.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::ResourceNotFound(_)
                | Error::ResourceReadFailure { .. }
                | Error::MalformedTable(_)
        )
    }
}

impl From<std::string::FromUtf8Error> for Error {
    fn from(err: std::string::FromUtf8Error) -> Self {
        Error::Encoding(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::ResourceNotFound(PathBuf::from("missing.png"));
        assert_eq!(err.to_string(), "Resource not found: missing.png");

        let err = Error::MalformedTable(1);
        assert_eq!(
            err.to_string(),
            "Malformed table: 1 line(s), expected a header and a separator row"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_recoverable_errors() {
        let read = Error::ResourceReadFailure {
            path: PathBuf::from("a.png"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(read.is_recoverable());
        assert!(read.to_string().contains("a.png"));
        assert!(Error::MalformedTable(0).is_recoverable());
    }

    #[test]
    fn test_utf8_error_conversion() {
        let err: Error = String::from_utf8(vec![0xFF, 0xFE]).unwrap_err().into();
        assert!(matches!(err, Error::Encoding(_)));
    }
}
