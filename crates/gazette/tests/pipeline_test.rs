//! Orchestrator behavior with in-memory stage fakes.

use async_trait::async_trait;
use gazette_content::ContentGenerator;
use gazette_core::{
    CompletionRequest, CoverImage, CrosspostOutcome, PostDraft, RunReport,
};
use gazette_error::{
    ContentError, ContentErrorKind, ContentResult, ImageError, ImageErrorKind, ImageResult,
    NotifyError, NotifyErrorKind, NotifyResult, PublishResult, SocialError, SocialErrorKind,
    SocialResult,
};
use gazette_interface::{
    CompletionDriver, ContentStore, Forum, ImageSource, Mailer, Microblog,
};
use gazette::Pipeline;
use std::sync::{Arc, Mutex};

const RESPONSE: &str = "Keyword: tea\nHashtag: #tea\nTitle: On Tea\nArticle:\nOn Tea\n\nA fine drink.\n\nMore detail.";

struct FixedDriver;

#[async_trait]
impl CompletionDriver for FixedDriver {
    async fn complete(&self, _req: &CompletionRequest) -> ContentResult<String> {
        Ok(RESPONSE.to_string())
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
            "completion endpoint unreachable".to_string(),
        )))
    }

    fn provider_name(&self) -> &'static str {
        "failing"
    }
}

struct NoImages;

#[async_trait]
impl ImageSource for NoImages {
    async fn fetch_cover(&self, keyword: &str) -> ImageResult<CoverImage> {
        Err(ImageError::new(ImageErrorKind::NoResults(
            keyword.to_string(),
        )))
    }
}

struct MemoryStore {
    published: Arc<Mutex<Vec<(PostDraft, bool)>>>,
}

#[async_trait]
impl ContentStore for MemoryStore {
    async fn publish(
        &self,
        draft: &PostDraft,
        cover: Option<&CoverImage>,
    ) -> PublishResult<String> {
        self.published
            .lock()
            .unwrap()
            .push((draft.clone(), cover.is_some()));
        Ok("doc-1".to_string())
    }
}

struct FailingMicroblog;

#[async_trait]
impl Microblog for FailingMicroblog {
    async fn announce(&self, _draft: &PostDraft) -> SocialResult<()> {
        Err(SocialError::new(SocialErrorKind::Api {
            status: 401,
            message: "Unauthorized".to_string(),
        }))
    }
}

struct QuietMicroblog;

#[async_trait]
impl Microblog for QuietMicroblog {
    async fn announce(&self, _draft: &PostDraft) -> SocialResult<()> {
        Ok(())
    }
}

struct FixedForum;

#[async_trait]
impl Forum for FixedForum {
    async fn crosspost(&self, _draft: &PostDraft) -> CrosspostOutcome {
        let mut outcome = CrosspostOutcome::default();
        outcome.record_success("ExampleBlog");
        outcome.record_missing("blogs");
        outcome
    }
}

struct RecordingMailer {
    reports: Arc<Mutex<Vec<RunReport>>>,
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send_report(&self, report: &RunReport) -> NotifyResult<()> {
        self.reports.lock().unwrap().push(report.clone());
        Ok(())
    }
}

struct FailingMailer;

#[async_trait]
impl Mailer for FailingMailer {
    async fn send_report(&self, _report: &RunReport) -> NotifyResult<()> {
        Err(NotifyError::new(NotifyErrorKind::SendFailed(
            "relay refused connection".to_string(),
        )))
    }
}

fn generator(driver: Arc<dyn CompletionDriver>) -> ContentGenerator {
    ContentGenerator::new(driver, "https://example.com/")
}

#[tokio::test]
async fn tolerated_failures_still_end_in_success() {
    let published = Arc::new(Mutex::new(Vec::new()));
    let pipeline = Pipeline::new(
        generator(Arc::new(FixedDriver)),
        Arc::new(NoImages),
        Arc::new(MemoryStore {
            published: published.clone(),
        }),
        Arc::new(QuietMicroblog),
        Arc::new(FixedForum),
        Arc::new(FailingMailer),
    );

    let response = pipeline.run().await;
    assert_eq!(response.status_code, 200);
    assert_eq!(response.body, "\"Success\"");

    // Publish still ran, without a cover image.
    let published = published.lock().unwrap();
    assert_eq!(published.len(), 1);
    assert_eq!(published[0].0.slug(), "on-tea");
    assert!(!published[0].1);
}

#[tokio::test]
async fn generation_failure_returns_400_before_any_stage_runs() {
    let published = Arc::new(Mutex::new(Vec::new()));
    let reports = Arc::new(Mutex::new(Vec::new()));
    let pipeline = Pipeline::new(
        generator(Arc::new(FailingDriver)),
        Arc::new(NoImages),
        Arc::new(MemoryStore {
            published: published.clone(),
        }),
        Arc::new(QuietMicroblog),
        Arc::new(FixedForum),
        Arc::new(RecordingMailer {
            reports: reports.clone(),
        }),
    );

    let response = pipeline.run().await;
    assert_eq!(response.status_code, 400);
    assert!(response.body.contains("completion endpoint unreachable"));

    assert!(published.lock().unwrap().is_empty());
    assert!(reports.lock().unwrap().is_empty());
}

#[tokio::test]
async fn report_carries_outcome_and_microblog_failure() {
    let reports = Arc::new(Mutex::new(Vec::new()));
    let pipeline = Pipeline::new(
        generator(Arc::new(FixedDriver)),
        Arc::new(NoImages),
        Arc::new(MemoryStore {
            published: Arc::new(Mutex::new(Vec::new())),
        }),
        Arc::new(FailingMicroblog),
        Arc::new(FixedForum),
        Arc::new(RecordingMailer {
            reports: reports.clone(),
        }),
    );

    let response = pipeline.run().await;
    assert_eq!(response.status_code, 200);

    let reports = reports.lock().unwrap();
    assert_eq!(reports.len(), 1);
    let report = &reports[0];
    assert_eq!(report.draft().title(), "On Tea");
    assert_eq!(report.outcome().published, vec!["ExampleBlog"]);

    let failed = report.failed_targets();
    assert_eq!(failed.len(), 2);
    assert_eq!(failed[0], "Reddit - blogs does not exist");
    assert!(failed[1].starts_with("twitter - "));
    assert!(failed[1].contains("401"));
}
