//! Environment-style configuration for a pipeline run.

use derive_getters::Getters;
use gazette_error::ConfigError;

/// Default completion model when `OPENAI_MODEL` is not set.
const DEFAULT_MODEL: &str = "gpt-3.5-turbo-instruct";

/// All configuration consumed by one pipeline invocation.
///
/// Every field is read from the environment by [`GazetteConfig::from_env`];
/// only the completion model has a default. Missing keys are reported as
/// `ConfigError` naming the variable.
#[derive(Debug, Clone, Getters)]
pub struct GazetteConfig {
    /// Site base URL; the slug is appended to form the post URL
    site_url: String,
    /// Site-wide hashtag appended to every microblog announcement
    site_hashtag: String,
    /// Human-readable site name used in the report email
    site_name: String,
    /// Completion API key
    openai_api_key: String,
    /// Completion model identifier
    openai_model: String,
    /// Image search access key
    unsplash_key: String,
    /// Content-store project identifier
    sanity_project_id: String,
    /// Content-store dataset name
    sanity_dataset: String,
    /// Content-store write token
    sanity_token: String,
    /// Document id of the author referenced by every published post
    sanity_author_id: String,
    /// Microblog OAuth consumer key
    twitter_app_key: String,
    /// Microblog OAuth consumer secret
    twitter_app_secret: String,
    /// Microblog OAuth access token
    twitter_access_token: String,
    /// Microblog OAuth access token secret
    twitter_access_secret: String,
    /// Forum API client id
    reddit_client_id: String,
    /// Forum API client secret
    reddit_client_secret: String,
    /// Forum account username
    reddit_username: String,
    /// Forum account password
    reddit_password: String,
    /// Home community that also receives post-submission approval
    reddit_subreddit: String,
    /// Email provider region, used to derive the SMTP relay host
    aws_region: String,
    /// SMTP username for the email relay
    ses_smtp_username: String,
    /// SMTP password for the email relay
    ses_smtp_password: String,
    /// Admin display name used in the report greeting
    admin_user: String,
    /// Report sender and recipient address
    admin_email: String,
}

impl GazetteConfig {
    /// Load configuration from the process environment.
    ///
    /// Call `dotenvy::dotenv()` beforehand to pick up a local `.env` file;
    /// the binary does this on startup.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` naming the first missing variable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            site_url: require("SITE_URL")?,
            site_hashtag: require("SITE_HASHTAG")?,
            site_name: require("SITE_NAME")?,
            openai_api_key: require("OPENAI_API_KEY")?,
            openai_model: std::env::var("OPENAI_MODEL")
                .unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            unsplash_key: require("UNSPLASH_KEY")?,
            sanity_project_id: require("SANITY_PROJECT_ID")?,
            sanity_dataset: require("SANITY_DATASET")?,
            sanity_token: require("SANITY_NODE_KEY")?,
            sanity_author_id: require("SANITY_AUTHOR_ID")?,
            twitter_app_key: require("TWITTER_APP_KEY")?,
            twitter_app_secret: require("TWITTER_APP_SECRET")?,
            twitter_access_token: require("TWITTER_ACCESS_TOKEN")?,
            twitter_access_secret: require("TWITTER_ACCESS_SECRET")?,
            reddit_client_id: require("REDDIT_CLIENT_ID")?,
            reddit_client_secret: require("REDDIT_CLIENT_SECRET")?,
            reddit_username: require("REDDIT_USERNAME")?,
            reddit_password: require("REDDIT_PASSWORD")?,
            reddit_subreddit: require("REDDIT_SUBREDDIT")?,
            aws_region: require("AWS_REGION")?,
            ses_smtp_username: require("SES_SMTP_USERNAME")?,
            ses_smtp_password: require("SES_SMTP_PASSWORD")?,
            admin_user: require("ADMIN_USER")?,
            admin_email: require("ADMIN_EMAIL")?,
        })
    }
}

fn require(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|e| ConfigError::new(format!("{} not set: {}", key, e)))
}
