//! Request type for text completion.

use serde::{Deserialize, Serialize};

/// Generic text-completion request.
///
/// # Examples
///
/// ```
/// use gazette_core::CompletionRequest;
///
/// let request = CompletionRequest {
///     model: Some("gpt-3.5-turbo-instruct".to_string()),
///     prompt: "Write a haiku".to_string(),
///     max_tokens: Some(800),
///     temperature: Some(0.85),
///     n: 1,
/// };
///
/// assert_eq!(request.n, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CompletionRequest {
    /// Model identifier to use; the driver supplies its default when absent
    pub model: Option<String>,
    /// The prompt text to complete
    pub prompt: String,
    /// Maximum number of tokens to generate
    pub max_tokens: Option<u32>,
    /// Sampling temperature (0.0 to 1.0)
    pub temperature: Option<f32>,
    /// Number of completions to request
    pub n: u32,
}
