//! Content generation errors.

/// Content generation error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ContentErrorKind {
    /// HTTP transport failure reaching the completion endpoint
    #[display("HTTP error: {_0}")]
    Http(String),

    /// Completion endpoint returned a non-success status
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

    /// Response contained no completion choices
    #[display("Completion response contained no choices")]
    EmptyResponse,

    /// Invalid client configuration (missing key, bad model name)
    #[display("Invalid configuration: {_0}")]
    InvalidConfiguration(String),

    /// Builder error (derive_builder failures)
    #[display("Builder error: {_0}")]
    Builder(String),
}

/// Content generation error with source location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Content Error: {} at {}:{}", kind, file, line)]
pub struct ContentError {
    /// The specific error kind
    pub kind: ContentErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// Source file where error occurred
    pub file: &'static str,
}

impl ContentError {
    /// Create a new content error.
    #[track_caller]
    pub fn new(kind: ContentErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Result type for content generation operations.
pub type ContentResult<T> = Result<T, ContentError>;
