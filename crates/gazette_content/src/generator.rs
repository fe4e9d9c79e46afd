//! The content generation stage.

use crate::{parse, prompt};
use gazette_core::{CompletionRequest, PostDraft};
use gazette_error::ContentResult;
use gazette_interface::CompletionDriver;
use std::sync::Arc;
use tracing::{info, instrument};

/// Runs the weekly prompt through a completion driver and parses the
/// response into a draft.
pub struct ContentGenerator {
    driver: Arc<dyn CompletionDriver>,
    site_url: String,
}

impl ContentGenerator {
    /// Create a generator over a completion driver.
    ///
    /// `site_url` is the base URL the derived slug is appended to.
    pub fn new(driver: Arc<dyn CompletionDriver>, site_url: impl Into<String>) -> Self {
        Self {
            driver,
            site_url: site_url.into(),
        }
    }

    /// Generate this week's article and parse it into a draft.
    ///
    /// # Errors
    ///
    /// Propagates any transport or API error from the completion call;
    /// the pipeline treats this stage as mandatory.
    #[instrument(skip(self), fields(provider = %self.driver.provider_name()))]
    pub async fn generate(&self) -> ContentResult<PostDraft> {
        let request = CompletionRequest {
            model: None,
            prompt: prompt::weekly_prompt_for_now(),
            max_tokens: Some(prompt::MAX_TOKENS),
            temperature: Some(prompt::TEMPERATURE),
            n: 1,
        };

        let text = self.driver.complete(&request).await?;
        let draft = parse::parse_response(&text, &self.site_url)?;

        info!(title = %draft.title(), slug = %draft.slug(), "Generated post draft");
        Ok(draft)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use gazette_error::{ContentError, ContentErrorKind};

    struct FixedDriver(String);

    #[async_trait]
    impl CompletionDriver for FixedDriver {
        async fn complete(&self, _req: &CompletionRequest) -> ContentResult<String> {
            Ok(self.0.clone())
        }

        fn provider_name(&self) -> &'static str {
            "fixed"
        }
    }

    struct FailingDriver;

    #[async_trait]
    impl CompletionDriver for FailingDriver {
        async fn complete(&self, _req: &CompletionRequest) -> ContentResult<String> {
            Err(ContentError::new(ContentErrorKind::Http(
                "connection refused".to_string(),
            )))
        }

        fn provider_name(&self) -> &'static str {
            "failing"
        }
    }

    #[tokio::test]
    async fn generates_draft_from_response() {
        let response = "Keyword: tea\nHashtag: #tea\nTitle: On Tea\nArticle:\nOn Tea\n\nA fine drink.\n\nMore detail.";
        let generator = ContentGenerator::new(
            Arc::new(FixedDriver(response.to_string())),
            "https://example.com/",
        );

        let draft = generator.generate().await.unwrap();
        assert_eq!(draft.title(), "On Tea");
        assert_eq!(draft.url(), "https://example.com/on-tea");
        assert_eq!(draft.intro(), "A fine drink.");
    }

    #[tokio::test]
    async fn propagates_driver_errors() {
        let generator = ContentGenerator::new(Arc::new(FailingDriver), "https://example.com/");
        assert!(generator.generate().await.is_err());
    }
}
