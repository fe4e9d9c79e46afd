//! Email reporting for the Gazette pipeline.
//!
//! After a run, the admin receives one HTML email summarizing the draft,
//! the communities that accepted the crosspost, and any failures.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod mailer;
mod report;

pub use mailer::SesMailer;
pub use report::{compose_body, compose_subject};
