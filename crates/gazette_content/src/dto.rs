//! Completion API data transfer objects.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Completion API request parameters.
#[derive(Debug, Clone, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct OpenAiCompletionRequest {
    /// Model identifier
    model: String,
    /// Prompt text to complete
    prompt: String,
    /// Maximum tokens to generate
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    /// Sampling temperature
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    /// Number of completions to request
    #[builder(default = "1")]
    n: u32,
}

impl OpenAiCompletionRequest {
    /// Creates a new builder for `OpenAiCompletionRequest`.
    pub fn builder() -> OpenAiCompletionRequestBuilder {
        OpenAiCompletionRequestBuilder::default()
    }
}

/// One completion choice in the API response.
#[derive(Debug, Clone, Serialize, Deserialize, Getters)]
pub struct CompletionChoice {
    /// Generated text
    text: String,
}

/// Completion API response.
#[derive(Debug, Clone, Serialize, Deserialize, Getters)]
pub struct OpenAiCompletionResponse {
    /// Generated completion choices
    choices: Vec<CompletionChoice>,
}
