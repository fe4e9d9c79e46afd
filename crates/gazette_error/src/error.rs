//! Top-level error wrapper types.

use crate::{
    ConfigError, ContentError, ImageError, NotifyError, PublishError, SocialError,
};

/// This is the foundation error enum. Each pipeline stage contributes a
/// variant, so any stage error can be carried through `GazetteResult`.
///
/// # Examples
///
/// ```
/// use gazette_error::{ConfigError, GazetteError};
///
/// let config_err = ConfigError::new("SITE_URL not set");
/// let err: GazetteError = config_err.into();
/// assert!(format!("{}", err).contains("Config Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum GazetteErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Content generation error
    #[from(ContentError)]
    Content(ContentError),
    /// Image search/download error
    #[from(ImageError)]
    Image(ImageError),
    /// Content-store publishing error
    #[from(PublishError)]
    Publish(PublishError),
    /// Social platform error
    #[from(SocialError)]
    Social(SocialError),
    /// Email notification error
    #[from(NotifyError)]
    Notify(NotifyError),
}

/// Gazette error with kind discrimination.
///
/// # Examples
///
/// ```
/// use gazette_error::{GazetteResult, ConfigError};
///
/// fn might_fail() -> GazetteResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Gazette Error: {}", _0)]
pub struct GazetteError(Box<GazetteErrorKind>);

impl GazetteError {
    /// Create a new error from a kind.
    pub fn new(kind: GazetteErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &GazetteErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to GazetteErrorKind
impl<T> From<T> for GazetteError
where
    T: Into<GazetteErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Gazette operations.
///
/// # Examples
///
/// ```
/// use gazette_error::{ConfigError, GazetteResult};
///
/// fn load_setting() -> GazetteResult<String> {
///     Err(ConfigError::new("ADMIN_EMAIL not set"))?
/// }
/// ```
pub type GazetteResult<T> = std::result::Result<T, GazetteError>;
