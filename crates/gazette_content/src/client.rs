//! Completion API client.

use crate::dto::{OpenAiCompletionRequest, OpenAiCompletionResponse};
use async_trait::async_trait;
use gazette_core::CompletionRequest;
use gazette_error::{ContentError, ContentErrorKind, ContentResult};
use gazette_interface::CompletionDriver;
use reqwest::Client;
use tracing::{debug, error, instrument};

const OPENAI_COMPLETIONS_URL: &str = "https://api.openai.com/v1/completions";

/// OpenAI completions API client.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl OpenAiClient {
    /// Creates a new OpenAI client.
    ///
    /// # Arguments
    ///
    /// * `api_key` - OpenAI API key
    /// * `model` - Model identifier (e.g., "gpt-3.5-turbo-instruct")
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        let api_key = api_key.into();
        let model = model.into();
        debug!("Creating new OpenAI client");
        Self {
            client: Client::new(),
            api_key,
            model,
            base_url: OPENAI_COMPLETIONS_URL.to_string(),
        }
    }

    /// Override the completions endpoint, e.g. for an API-compatible proxy.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sends a completion request to the API.
    #[instrument(skip(self, request), fields(model = %request.model()))]
    async fn send(
        &self,
        request: &OpenAiCompletionRequest,
    ) -> ContentResult<OpenAiCompletionResponse> {
        debug!("Sending request to completions API");

        let response = self
            .client
            .post(&self.base_url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Failed to send completion request");
                ContentError::new(ContentErrorKind::Http(format!("Request failed: {}", e)))
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            error!(status = status, body = %body, "Completions API returned error");
            return Err(ContentError::new(ContentErrorKind::Api {
                status,
                message: body,
            }));
        }

        response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse completion response");
            ContentError::new(ContentErrorKind::ResponseParsing(format!(
                "Failed to parse response: {}",
                e
            )))
        })
    }

    fn convert_request(&self, req: &CompletionRequest) -> ContentResult<OpenAiCompletionRequest> {
        let model = req.model.clone().unwrap_or_else(|| self.model.clone());

        let mut builder = OpenAiCompletionRequest::builder();
        builder.model(model).prompt(req.prompt.clone()).n(req.n);
        if let Some(max_tokens) = req.max_tokens {
            builder.max_tokens(Some(max_tokens));
        }
        if let Some(temperature) = req.temperature {
            builder.temperature(Some(temperature));
        }

        builder
            .build()
            .map_err(|e| ContentError::new(ContentErrorKind::InvalidConfiguration(e.to_string())))
    }
}

#[async_trait]
impl CompletionDriver for OpenAiClient {
    #[instrument(skip(self, req), fields(provider = "openai", model = %self.model))]
    async fn complete(&self, req: &CompletionRequest) -> ContentResult<String> {
        let request = self.convert_request(req)?;
        let response = self.send(&request).await?;

        let choice = response
            .choices()
            .first()
            .ok_or_else(|| ContentError::new(ContentErrorKind::EmptyResponse))?;

        debug!(text_len = choice.text().len(), "Received completion");
        Ok(choice.text().clone())
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }
}
