//! Core data types for the Gazette cross-posting pipeline.
//!
//! Provides the `PostDraft` record that flows through the pipeline, the
//! completion request type, slug derivation, environment configuration,
//! and tracing setup. Network clients live in the sibling crates.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod draft;
mod report;
mod request;
mod slug;
mod telemetry;

pub use config::GazetteConfig;
pub use draft::{CoverImage, CrosspostOutcome, PostDraft, PostDraftBuilder, PostDraftBuilderError};
pub use report::RunReport;
pub use request::CompletionRequest;
pub use slug::slugify;
pub use telemetry::init_tracing;
