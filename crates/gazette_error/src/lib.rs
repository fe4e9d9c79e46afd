//! Error types for the Gazette pipeline.
//!
//! This crate provides the foundation error types used throughout the
//! Gazette workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use gazette_error::{ConfigError, GazetteResult};
//!
//! fn load_setting() -> GazetteResult<String> {
//!     Err(ConfigError::new("SITE_URL not set"))?
//! }
//!
//! match load_setting() {
//!     Ok(value) => println!("Got: {}", value),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod content;
mod error;
mod image;
mod notify;
mod publish;
mod social;

pub use config::ConfigError;
pub use content::{ContentError, ContentErrorKind, ContentResult};
pub use error::{GazetteError, GazetteErrorKind, GazetteResult};
pub use image::{ImageError, ImageErrorKind, ImageResult};
pub use notify::{NotifyError, NotifyErrorKind, NotifyResult};
pub use publish::{PublishError, PublishErrorKind, PublishResult};
pub use social::{SocialError, SocialErrorKind, SocialResult};
