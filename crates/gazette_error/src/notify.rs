//! Email notification errors.

/// Notification error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum NotifyErrorKind {
    /// A configured address could not be parsed as a mailbox
    #[display("Invalid address: {_0}")]
    InvalidAddress(String),

    /// The message could not be assembled
    #[display("Message build failed: {_0}")]
    MessageBuild(String),

    /// The SMTP transport could not be constructed
    #[display("Transport setup failed: {_0}")]
    Transport(String),

    /// Sending the message failed
    #[display("Send failed: {_0}")]
    SendFailed(String),
}

/// Notification error with source location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Notify Error: {} at {}:{}", kind, file, line)]
pub struct NotifyError {
    /// The specific error kind
    pub kind: NotifyErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// Source file where error occurred
    pub file: &'static str,
}

impl NotifyError {
    /// Create a new notification error.
    #[track_caller]
    pub fn new(kind: NotifyErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Result type for notification operations.
pub type NotifyResult<T> = Result<T, NotifyError>;
