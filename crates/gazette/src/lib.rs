//! Automated weekly blog cross-posting pipeline.
//!
//! One invocation generates an article with a language model, fetches a
//! cover image, publishes the post to a headless content store, announces
//! it on a microblog and a set of forum communities, and emails the admin
//! a run report.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod pipeline;

pub use pipeline::{Pipeline, PipelineResponse};
