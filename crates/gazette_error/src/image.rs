//! Image search and download errors.

/// Image fetch error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ImageErrorKind {
    /// HTTP transport failure reaching the search endpoint
    #[display("HTTP error: {_0}")]
    Http(String),

    /// Search endpoint returned a non-success status
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

    /// Search returned zero results for the query
    #[display("No results for query: {_0}")]
    NoResults(String),

    /// Downloading the chosen image failed
    #[display("Download failed: {_0}")]
    Download(String),
}

/// Image fetch error with source location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Image Error: {} at {}:{}", kind, file, line)]
pub struct ImageError {
    /// The specific error kind
    pub kind: ImageErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// Source file where error occurred
    pub file: &'static str,
}

impl ImageError {
    /// Create a new image error.
    #[track_caller]
    pub fn new(kind: ImageErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Result type for image operations.
pub type ImageResult<T> = Result<T, ImageError>;
