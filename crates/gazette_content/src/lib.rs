//! Content generation for the Gazette pipeline.
//!
//! Wraps a text-completion API behind [`gazette_interface::CompletionDriver`],
//! builds the weekly prompt, and parses the free-text response into a
//! [`gazette_core::PostDraft`] using literal field markers with explicit
//! fallbacks for each marker-presence combination.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod dto;
mod generator;
mod parse;
mod prompt;

pub use client::OpenAiClient;
pub use dto::{CompletionChoice, OpenAiCompletionRequest, OpenAiCompletionResponse};
pub use generator::ContentGenerator;
pub use parse::parse_response;
pub use prompt::{weekly_prompt, weekly_prompt_for_now};
