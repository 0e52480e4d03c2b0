//! Error types for the search engine.
//!
//! This module defines all error types that can occur while loading a document,
//! extracting page text and building the match index.

/// Result type alias for library operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during document search and navigation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Document bytes could not be obtained or decoded
    #[error("Error loading document: {0}")]
    DocumentLoad(String),

    /// A page's text could not be produced by the document source
    #[error("Failed to read page {page}: {reason}")]
    PageFetch {
        /// 1-based page number
        page: usize,
        /// Reason for the failure
        reason: String,
    },

    /// Page number outside the document
    #[error("Page {page} out of range (document has {page_count} pages)")]
    PageOutOfRange {
        /// Requested 1-based page number
        page: usize,
        /// Number of pages in the document
        page_count: usize,
    },

    /// Search pattern could not be compiled
    #[error("Invalid search pattern: {0}")]
    InvalidPattern(String),

    /// Malformed viewer configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether the user may simply retry the operation that produced this error.
    ///
    /// Page fetch failures abort a search but leave the document usable.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::PageFetch { .. } | Error::PageOutOfRange { .. } | Error::InvalidPattern(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_load_error() {
        let err = Error::DocumentLoad("connection reset".to_string());
        let msg = format!("{}", err);
        assert!(msg.contains("Error loading document"));
        assert!(msg.contains("connection reset"));
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_page_fetch_error() {
        let err = Error::PageFetch {
            page: 7,
            reason: "stream truncated".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("page 7"));
        assert!(msg.contains("stream truncated"));
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_page_out_of_range_error() {
        let err = Error::PageOutOfRange {
            page: 4,
            page_count: 3,
        };
        assert_eq!(format!("{}", err), "Page 4 out of range (document has 3 pages)");
    }

    #[test]
    fn test_io_error_conversion() {
        let err: Error = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(format!("{}", err).contains("IO error"));
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }
}
