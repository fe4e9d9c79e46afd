//! Trait seams for the Gazette pipeline's external collaborators.
//!
//! Every network-facing stage is reached through one of these traits, so
//! the orchestrator can be exercised with in-memory fakes and clients can
//! be swapped without touching the pipeline.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::{CompletionDriver, ContentStore, Forum, ImageSource, Mailer, Microblog};
