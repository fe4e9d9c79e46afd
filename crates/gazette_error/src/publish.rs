//! Content-store publishing errors.

/// Publishing error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum PublishErrorKind {
    /// HTTP transport failure reaching the content store
    #[display("HTTP error: {_0}")]
    Http(String),

    /// Content store returned a non-success status
    #[display("API error {status}: {message}")]
    Api {
        /// HTTP status code returned by the API
        status: u16,
        /// Response body accompanying the error
        message: String,
    },

    /// Response body could not be deserialized
    #[display("Response parsing failed: {_0}")]
    ResponseParsing(String),

    /// Document create succeeded but returned no document id
    #[display("Document create returned no id")]
    MissingDocumentId,
}

/// Publishing error with source location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Publish Error: {} at {}:{}", kind, file, line)]
pub struct PublishError {
    /// The specific error kind
    pub kind: PublishErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// Source file where error occurred
    pub file: &'static str,
}

impl PublishError {
    /// Create a new publishing error.
    #[track_caller]
    pub fn new(kind: PublishErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Result type for publishing operations.
pub type PublishResult<T> = Result<T, PublishError>;
