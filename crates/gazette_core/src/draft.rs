//! The in-flight post record and its companions.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// The in-flight record of all fields produced by content generation and
/// consumed by the publishing and announcement stages.
///
/// A draft is created fresh per pipeline run, fully populated by the
/// content generator, and never mutated afterwards. It has no persistence
/// beyond the run.
///
/// # Examples
///
/// ```
/// use gazette_core::PostDraft;
///
/// let draft = PostDraft::builder()
///     .keyword("gardening")
///     .hashtag("#gardening")
///     .title("Spring Planting")
///     .slug("spring-planting")
///     .url("https://example.com/spring-planting")
///     .intro("A short excerpt.")
///     .body("The full article text.")
///     .build()
///     .unwrap();
///
/// assert_eq!(draft.slug(), "spring-planting");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct PostDraft {
    /// Image search term derived from the generated text
    keyword: String,
    /// Hashtag for the microblog announcement; may be empty
    hashtag: String,
    /// Article title
    title: String,
    /// URL-safe slug derived from the title
    slug: String,
    /// Canonical post URL (site base URL + slug)
    url: String,
    /// Excerpt paragraph; may be empty
    intro: String,
    /// Full article body
    body: String,
}

impl PostDraft {
    /// Creates a new builder for `PostDraft`.
    pub fn builder() -> PostDraftBuilder {
        PostDraftBuilder::default()
    }
}

/// Raw cover image payload downloaded from the image search provider.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct CoverImage {
    /// Raw image bytes
    bytes: Vec<u8>,
    /// MIME content type reported by the download response
    content_type: String,
}

impl CoverImage {
    /// Create a cover image from raw bytes and a MIME type.
    pub fn new(bytes: Vec<u8>, content_type: impl Into<String>) -> Self {
        Self {
            bytes,
            content_type: content_type.into(),
        }
    }
}

/// Per-target results of the forum announcement loop.
///
/// Both lists preserve attempt order. Failure entries are formatted
/// `"<name> - <error>"`; communities that fail the existence check are
/// recorded as `"Reddit - <name> does not exist"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrosspostOutcome {
    /// Community names that accepted the link post
    pub published: Vec<String>,
    /// Formatted failure entries, one per target that failed
    pub failed: Vec<String>,
}

impl CrosspostOutcome {
    /// Record a successful post to `name`.
    pub fn record_success(&mut self, name: impl Into<String>) {
        self.published.push(name.into());
    }

    /// Record a failed post to `name` with the error description.
    pub fn record_failure(&mut self, name: &str, error: impl std::fmt::Display) {
        self.failed.push(format!("{} - {}", name, error));
    }

    /// Record a community that failed the existence check.
    pub fn record_missing(&mut self, name: &str) {
        self.failed.push(format!("Reddit - {} does not exist", name));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_preserves_order() {
        let mut outcome = CrosspostOutcome::default();
        outcome.record_success("Blogging");
        outcome.record_missing("BlogExchange");
        outcome.record_failure("blogs", "403 Forbidden");

        assert_eq!(outcome.published, vec!["Blogging"]);
        assert_eq!(
            outcome.failed,
            vec![
                "Reddit - BlogExchange does not exist",
                "blogs - 403 Forbidden"
            ]
        );
    }

    #[test]
    fn draft_builder_requires_all_fields() {
        let result = PostDraft::builder().title("only a title").build();
        assert!(result.is_err());
    }
}
