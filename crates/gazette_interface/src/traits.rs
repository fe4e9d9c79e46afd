//! Trait definitions for the pipeline's external collaborators.

use async_trait::async_trait;
use gazette_core::{CompletionRequest, CoverImage, CrosspostOutcome, PostDraft, RunReport};
use gazette_error::{ContentResult, ImageResult, NotifyResult, PublishResult, SocialResult};

/// Text-completion backend.
///
/// This is the only mandatory collaborator: every downstream stage depends
/// on the fields parsed from its response.
#[async_trait]
pub trait CompletionDriver: Send + Sync {
    /// Request a single text completion and return the raw response text.
    async fn complete(&self, req: &CompletionRequest) -> ContentResult<String>;

    /// Provider name (e.g., "openai").
    fn provider_name(&self) -> &'static str;
}

/// Image search and download backend.
#[async_trait]
pub trait ImageSource: Send + Sync {
    /// Search for `keyword` and download one candidate image in full.
    async fn fetch_cover(&self, keyword: &str) -> ImageResult<CoverImage>;
}

/// Headless content store that receives the structured post document.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Publish the draft: upload the cover image when present, create the
    /// post document, then patch it with the author and asset references.
    ///
    /// Returns the created document id.
    async fn publish(&self, draft: &PostDraft, cover: Option<&CoverImage>)
    -> PublishResult<String>;
}

/// Microblog platform that receives a short announcement status.
#[async_trait]
pub trait Microblog: Send + Sync {
    /// Post a status announcing the draft's title and URL.
    async fn announce(&self, draft: &PostDraft) -> SocialResult<()>;
}

/// Link forum that receives the post URL across several communities.
#[async_trait]
pub trait Forum: Send + Sync {
    /// Submit the draft's link to the selected communities, recording each
    /// per-target outcome. Never fails as a whole; individual failures are
    /// carried in the outcome.
    async fn crosspost(&self, draft: &PostDraft) -> CrosspostOutcome;
}

/// Transactional email backend for the run report.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Compose and send the summary email for a finished run.
    async fn send_report(&self, report: &RunReport) -> NotifyResult<()>;
}