//! Status-update client for an OAuth 1.0a microblog API.

use crate::microblog::OAuth1Credentials;
use async_trait::async_trait;
use gazette_core::PostDraft;
use gazette_error::{SocialError, SocialErrorKind, SocialResult};
use gazette_interface::Microblog;
use reqwest::Client;
use tracing::{debug, error, info, instrument};

const STATUS_UPDATE_URL: &str = "https://api.twitter.com/1.1/statuses/update.json";

/// Microblog client that announces a published post as a status update.
#[derive(Debug, Clone)]
pub struct TwitterClient {
    client: Client,
    credentials: OAuth1Credentials,
    site_hashtag: String,
    base_url: Option<String>,
}

impl TwitterClient {
    /// Creates a new microblog client.
    ///
    /// `site_hashtag` is appended to every announcement after the
    /// article's own hashtag.
    pub fn new(credentials: OAuth1Credentials, site_hashtag: impl Into<String>) -> Self {
        debug!("Creating new microblog client");
        Self {
            client: Client::new(),
            credentials,
            site_hashtag: site_hashtag.into(),
            base_url: None,
        }
    }

    /// Override the API endpoint, e.g. for an API-compatible proxy.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    fn endpoint(&self) -> String {
        match &self.base_url {
            Some(url) => format!("{}/1.1/statuses/update.json", url),
            None => STATUS_UPDATE_URL.to_string(),
        }
    }

    /// Compose the announcement text for a draft.
    pub fn status_text(&self, draft: &PostDraft) -> String {
        format!(
            "{} {} {} {}",
            draft.title(),
            draft.hashtag(),
            self.site_hashtag,
            draft.url()
        )
    }
}

#[async_trait]
impl Microblog for TwitterClient {
    #[instrument(skip(self, draft), fields(slug = %draft.slug()))]
    async fn announce(&self, draft: &PostDraft) -> SocialResult<()> {
        let status = self.status_text(draft);
        let url = self.endpoint();

        // Form-encoded body parameters participate in the signature.
        let authorization = self.credentials.authorization_header(
            "POST",
            &url,
            &[("status", &status)],
            &mut rand::thread_rng(),
        );

        let response = self
            .client
            .post(&url)
            .header("Authorization", authorization)
            .form(&[("status", &status)])
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Status update request failed");
                SocialError::new(SocialErrorKind::Http(format!("Request failed: {}", e)))
            })?;

        if !response.status().is_success() {
            let status_code = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            error!(status = status_code, body = %body, "Status update returned error");
            return Err(SocialError::new(SocialErrorKind::Api {
                status: status_code,
                message: body,
            }));
        }

        info!("Posted status update");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> PostDraft {
        PostDraft::builder()
            .keyword("gardening")
            .hashtag("#gardening")
            .title("Five Gardening Myths")
            .slug("five-gardening-myths")
            .url("https://example.com/posts/five-gardening-myths")
            .intro("An intro.")
            .body("A body.")
            .build()
            .unwrap()
    }

    #[test]
    fn status_text_concatenates_title_hashtags_and_url() {
        let client = TwitterClient::new(
            OAuth1Credentials::new("ck", "cs", "tok", "ts"),
            "#example",
        );
        assert_eq!(
            client.status_text(&draft()),
            "Five Gardening Myths #gardening #example \
             https://example.com/posts/five-gardening-myths"
        );
    }
}
