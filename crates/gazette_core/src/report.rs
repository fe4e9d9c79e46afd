//! Summary of one pipeline run, handed to the notifier.

use crate::{CrosspostOutcome, PostDraft};
use derive_getters::Getters;

/// Everything the notifier needs to describe a run: the finished draft,
/// the forum outcome lists, and the microblog result.
#[derive(Debug, Clone, Getters)]
pub struct RunReport {
    /// The fully populated post draft
    draft: PostDraft,
    /// Forum announcement results, in attempt order
    outcome: CrosspostOutcome,
    /// Error description when the microblog announcement failed
    microblog_error: Option<String>,
}

impl RunReport {
    /// Assemble a report from the run's products.
    pub fn new(
        draft: PostDraft,
        outcome: CrosspostOutcome,
        microblog_error: Option<String>,
    ) -> Self {
        Self {
            draft,
            outcome,
            microblog_error,
        }
    }

    /// All failure entries for the email: forum failures in attempt order,
    /// followed by the microblog failure when present.
    pub fn failed_targets(&self) -> Vec<String> {
        let mut failed = self.outcome.failed.clone();
        if let Some(err) = &self.microblog_error {
            failed.push(format!("twitter - {}", err));
        }
        failed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> PostDraft {
        PostDraft::builder()
            .keyword("k")
            .hashtag("#h")
            .title("t")
            .slug("t")
            .url("https://example.com/t")
            .intro("i")
            .body("b")
            .build()
            .unwrap()
    }

    #[test]
    fn microblog_failure_appends_to_failed_targets() {
        let mut outcome = CrosspostOutcome::default();
        outcome.record_missing("blogs");
        let report = RunReport::new(draft(), outcome, Some("401 Unauthorized".to_string()));

        let failed = report.failed_targets();
        assert_eq!(failed.len(), 2);
        assert_eq!(failed[1], "twitter - 401 Unauthorized");
    }
}
