//! Link-forum client for a Reddit-style OAuth2 API.

use crate::forum::select_targets;
use async_trait::async_trait;
use gazette_core::{CrosspostOutcome, PostDraft};
use gazette_error::{SocialError, SocialErrorKind, SocialResult};
use gazette_interface::Forum;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, error, info, instrument, warn};

const TOKEN_URL: &str = "https://www.reddit.com/api/v1/access_token";
const API_URL: &str = "https://oauth.reddit.com";

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct CommunityData {
    #[serde(default)]
    display_name: String,
}

#[derive(Debug, Deserialize)]
struct CommunityAbout {
    #[serde(default)]
    data: Option<CommunityData>,
}

#[derive(Debug, Deserialize)]
struct SubmitData {
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SubmitBody {
    #[serde(default)]
    errors: Vec<serde_json::Value>,
    data: Option<SubmitData>,
}

#[derive(Debug, Deserialize)]
struct SubmitResponse {
    json: SubmitBody,
}

/// Forum client that crossposts a published article as a link submission
/// to the home community and a random selection of blogging communities.
#[derive(Debug, Clone)]
pub struct RedditClient {
    client: Client,
    client_id: String,
    client_secret: String,
    username: String,
    password: String,
    home_community: String,
    user_agent: String,
    token_url: String,
    api_url: String,
}

impl RedditClient {
    /// Creates a new forum client.
    ///
    /// Posts to `home_community` are moderator-approved after submission;
    /// posts to drawn communities are left to their own moderation.
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
        home_community: impl Into<String>,
    ) -> Self {
        debug!("Creating new forum client");
        let username = username.into();
        let user_agent = format!("gazette/0.1 by {}", username);
        Self {
            client: Client::new(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            username,
            password: password.into(),
            home_community: home_community.into(),
            user_agent,
            token_url: TOKEN_URL.to_string(),
            api_url: API_URL.to_string(),
        }
    }

    /// Override both API hosts, e.g. for an API-compatible proxy.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.token_url = format!("{}/api/v1/access_token", base_url);
        self.api_url = base_url;
        self
    }

    /// Obtain an access token through the password grant.
    #[instrument(skip(self))]
    async fn access_token(&self) -> SocialResult<String> {
        let response = self
            .client
            .post(&self.token_url)
            .basic_auth(&self.client_id, Some(&self.client_secret))
            .header("User-Agent", &self.user_agent)
            .form(&[
                ("grant_type", "password"),
                ("username", &self.username),
                ("password", &self.password),
            ])
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Token request failed");
                SocialError::new(SocialErrorKind::Http(format!("Request failed: {}", e)))
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            error!(status = status, body = %body, "Token grant returned error");
            return Err(SocialError::new(SocialErrorKind::AuthenticationFailed(
                format!("status {}: {}", status, body),
            )));
        }

        let token: TokenResponse = response.json().await.map_err(|e| {
            SocialError::new(SocialErrorKind::ResponseParsing(format!(
                "Failed to parse token response: {}",
                e
            )))
        })?;

        Ok(token.access_token)
    }

    /// Check that `name` resolves to a community of exactly that name.
    ///
    /// The lookup endpoint fuzzy-matches, so the returned display name is
    /// compared case-sensitively against the requested one.
    #[instrument(skip(self, token))]
    async fn community_exists(&self, name: &str, token: &str) -> SocialResult<bool> {
        let response = self
            .client
            .get(format!("{}/r/{}/about", self.api_url, name))
            .bearer_auth(token)
            .header("User-Agent", &self.user_agent)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Community lookup request failed");
                SocialError::new(SocialErrorKind::Http(format!("Request failed: {}", e)))
            })?;

        if !response.status().is_success() {
            debug!(community = %name, status = %response.status(), "Community lookup unsuccessful");
            return Ok(false);
        }

        let about: CommunityAbout = response.json().await.map_err(|e| {
            SocialError::new(SocialErrorKind::ResponseParsing(format!(
                "Failed to parse community lookup: {}",
                e
            )))
        })?;

        Ok(about
            .data
            .map(|d| d.display_name == name)
            .unwrap_or(false))
    }

    /// Submit the draft as a link post, returning the submission fullname.
    #[instrument(skip(self, draft, token), fields(slug = %draft.slug()))]
    async fn submit(&self, community: &str, draft: &PostDraft, token: &str) -> SocialResult<String> {
        let response = self
            .client
            .post(format!("{}/api/submit", self.api_url))
            .bearer_auth(token)
            .header("User-Agent", &self.user_agent)
            .form(&[
                ("sr", community),
                ("title", draft.title()),
                ("url", draft.url()),
                ("kind", "link"),
                ("sendreplies", "true"),
                ("api_type", "json"),
            ])
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Submit request failed");
                SocialError::new(SocialErrorKind::Http(format!("Request failed: {}", e)))
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            error!(status = status, body = %body, "Submit returned error");
            return Err(SocialError::new(SocialErrorKind::Api {
                status,
                message: body,
            }));
        }

        let submit: SubmitResponse = response.json().await.map_err(|e| {
            SocialError::new(SocialErrorKind::ResponseParsing(format!(
                "Failed to parse submit response: {}",
                e
            )))
        })?;

        if !submit.json.errors.is_empty() {
            let detail = serde_json::to_string(&submit.json.errors).unwrap_or_default();
            error!(community = %community, errors = %detail, "Submission rejected");
            return Err(SocialError::new(SocialErrorKind::SubmissionFailed(detail)));
        }

        submit
            .json
            .data
            .and_then(|d| d.name)
            .ok_or_else(|| {
                SocialError::new(SocialErrorKind::SubmissionFailed(
                    "response carried no submission name".to_string(),
                ))
            })
    }

    /// Moderator-approve a submission by fullname.
    #[instrument(skip(self, token))]
    async fn approve(&self, fullname: &str, token: &str) -> SocialResult<()> {
        let response = self
            .client
            .post(format!("{}/api/approve", self.api_url))
            .bearer_auth(token)
            .header("User-Agent", &self.user_agent)
            .form(&[("id", fullname)])
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Approve request failed");
                SocialError::new(SocialErrorKind::Http(format!("Request failed: {}", e)))
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            error!(status = status, body = %body, "Approve returned error");
            return Err(SocialError::new(SocialErrorKind::ApprovalFailed(format!(
                "status {}: {}",
                status, body
            ))));
        }

        Ok(())
    }

    /// Post to a single community, approving the submission when it lands
    /// in the home community.
    async fn post_to(&self, community: &str, draft: &PostDraft, token: &str) -> SocialResult<()> {
        let fullname = self.submit(community, draft, token).await?;
        if community == self.home_community {
            self.approve(&fullname, token).await?;
        }
        info!(community = %community, fullname = %fullname, "Posted link submission");
        Ok(())
    }
}

#[async_trait]
impl Forum for RedditClient {
    #[instrument(skip(self, draft), fields(slug = %draft.slug()))]
    async fn crosspost(&self, draft: &PostDraft) -> CrosspostOutcome {
        let mut outcome = CrosspostOutcome::default();
        let targets = select_targets(&self.home_community, &mut rand::thread_rng());

        let token = match self.access_token().await {
            Ok(token) => token,
            Err(e) => {
                warn!(error = %e, "Forum authentication failed; no targets attempted");
                for target in &targets {
                    outcome.record_failure(target, &e);
                }
                return outcome;
            }
        };

        for target in &targets {
            match self.community_exists(target, &token).await {
                Ok(true) => match self.post_to(target, draft, &token).await {
                    Ok(()) => outcome.record_success(target.clone()),
                    Err(e) => {
                        warn!(community = %target, error = %e, "Link submission failed");
                        outcome.record_failure(target, e);
                    }
                },
                // A failed lookup is indistinguishable from a missing
                // community for reporting purposes.
                Ok(false) => {
                    warn!(community = %target, "Community does not exist");
                    outcome.record_missing(target);
                }
                Err(e) => {
                    warn!(community = %target, error = %e, "Community lookup failed");
                    outcome.record_missing(target);
                }
            }
        }

        outcome
    }
}
