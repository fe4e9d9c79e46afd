//! Content-store publishing for the Gazette pipeline.
//!
//! Performs the two-phase document write against a Sanity-style HTTP API:
//! upload the cover image asset (when present), create the post document,
//! then patch it with the author and cover-image references.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod content_key;

pub use client::SanityClient;
pub use content_key::content_key;
