//! The run orchestrator.

use gazette_content::ContentGenerator;
use gazette_core::{CoverImage, RunReport};
use gazette_interface::{ContentStore, Forum, ImageSource, Mailer, Microblog};
use serde_json::Value;
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

/// HTTP-style terminal status of one pipeline invocation.
///
/// The status is binary: 400 when content generation fails, 200 otherwise.
/// Per-target failures downstream never change the status; they surface in
/// the emailed report instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineResponse {
    /// 200 on success, 400 on a content-generation failure
    pub status_code: u16,
    /// JSON-encoded message body
    pub body: String,
}

impl PipelineResponse {
    fn success() -> Self {
        Self {
            status_code: 200,
            body: Value::String("Success".to_string()).to_string(),
        }
    }

    fn failure(error: impl std::fmt::Display) -> Self {
        Self {
            status_code: 400,
            body: Value::String(format!("Error: {}", error)).to_string(),
        }
    }
}

/// One-shot orchestrator wiring the five stages together.
///
/// Stage ordering is a data dependency, not a preference: the draft feeds
/// every later stage, and the published document must exist before the
/// announcements point readers at its URL. Only the two announcements run
/// concurrently with each other.
pub struct Pipeline {
    generator: ContentGenerator,
    images: Arc<dyn ImageSource>,
    store: Arc<dyn ContentStore>,
    microblog: Arc<dyn Microblog>,
    forum: Arc<dyn Forum>,
    mailer: Arc<dyn Mailer>,
}

impl Pipeline {
    /// Assemble a pipeline from its stage collaborators.
    pub fn new(
        generator: ContentGenerator,
        images: Arc<dyn ImageSource>,
        store: Arc<dyn ContentStore>,
        microblog: Arc<dyn Microblog>,
        forum: Arc<dyn Forum>,
        mailer: Arc<dyn Mailer>,
    ) -> Self {
        Self {
            generator,
            images,
            store,
            microblog,
            forum,
            mailer,
        }
    }

    /// Run one full invocation.
    ///
    /// Content generation is the only fatal stage; its failure returns a
    /// 400 before anything else runs. Every later stage is tolerated:
    /// failures are logged, recorded in the report, and the run ends 200.
    #[instrument(skip(self))]
    pub async fn run(&self) -> PipelineResponse {
        let draft = match self.generator.generate().await {
            Ok(draft) => draft,
            Err(e) => {
                error!(error = %e, "Content generation failed; aborting run");
                return PipelineResponse::failure(e);
            }
        };

        let cover: Option<CoverImage> = match self.images.fetch_cover(draft.keyword()).await {
            Ok(cover) => Some(cover),
            Err(e) => {
                warn!(error = %e, "Cover image fetch failed; publishing without a cover");
                None
            }
        };

        match self.store.publish(&draft, cover.as_ref()).await {
            Ok(document_id) => info!(document_id = %document_id, "Published post document"),
            Err(e) => warn!(error = %e, "Document publish failed; announcements may dangle"),
        }

        let (microblog_result, outcome) =
            tokio::join!(self.microblog.announce(&draft), self.forum.crosspost(&draft));

        let microblog_error = match microblog_result {
            Ok(()) => None,
            Err(e) => {
                warn!(error = %e, "Microblog announcement failed");
                Some(e.to_string())
            }
        };

        let report = RunReport::new(draft, outcome, microblog_error);
        if let Err(e) = self.mailer.send_report(&report).await {
            warn!(error = %e, "Report email failed");
        }

        info!(
            published = report.outcome().published.len(),
            failed = report.failed_targets().len(),
            "Pipeline run complete"
        );
        PipelineResponse::success()
    }
}
