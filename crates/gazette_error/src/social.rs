//! Social platform errors (microblog and forum).

/// Social platform error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum SocialErrorKind {
    /// HTTP transport failure reaching the platform
    #[display("HTTP error: {_0}")]
    Http(String),

    /// Platform returned a non-success status
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

    /// Token grant for the forum account failed
    #[display("Authentication failed: {_0}")]
    AuthenticationFailed(String),

    /// Community lookup reported a different name than requested
    #[display("Community not found: {_0}")]
    CommunityNotFound(String),

    /// Link submission was rejected by the platform
    #[display("Submission failed: {_0}")]
    SubmissionFailed(String),

    /// Moderator approval of a submission failed
    #[display("Approval failed: {_0}")]
    ApprovalFailed(String),
}

/// Social platform error with source location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Social Error: {} at {}:{}", kind, file, line)]
pub struct SocialError {
    /// The specific error kind
    pub kind: SocialErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// Source file where error occurred
    pub file: &'static str,
}

impl SocialError {
    /// Create a new social platform error.
    #[track_caller]
    pub fn new(kind: SocialErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Result type for social platform operations.
pub type SocialResult<T> = Result<T, SocialError>;
