//! Binary entry point: one invocation runs the pipeline once.

use gazette::{Pipeline, PipelineResponse};
use gazette_content::{ContentGenerator, OpenAiClient};
use gazette_core::{GazetteConfig, init_tracing};
use gazette_error::GazetteResult;
use gazette_images::UnsplashClient;
use gazette_notify::SesMailer;
use gazette_publish::SanityClient;
use gazette_social::{OAuth1Credentials, RedditClient, TwitterClient};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{error, info};

async fn run() -> GazetteResult<PipelineResponse> {
    let config = GazetteConfig::from_env()?;

    let driver = Arc::new(OpenAiClient::new(
        config.openai_api_key(),
        config.openai_model(),
    ));
    let generator = ContentGenerator::new(driver, config.site_url());

    let images = Arc::new(UnsplashClient::new(config.unsplash_key()));
    let store = Arc::new(SanityClient::new(
        config.sanity_project_id(),
        config.sanity_dataset(),
        config.sanity_token(),
        config.sanity_author_id(),
    ));
    let microblog = Arc::new(TwitterClient::new(
        OAuth1Credentials::new(
            config.twitter_app_key(),
            config.twitter_app_secret(),
            config.twitter_access_token(),
            config.twitter_access_secret(),
        ),
        config.site_hashtag(),
    ));
    let forum = Arc::new(RedditClient::new(
        config.reddit_client_id(),
        config.reddit_client_secret(),
        config.reddit_username(),
        config.reddit_password(),
        config.reddit_subreddit(),
    ));
    let mailer = Arc::new(SesMailer::new(
        config.aws_region(),
        config.ses_smtp_username(),
        config.ses_smtp_password(),
        config.site_name(),
        config.admin_user(),
        config.admin_email(),
    ));

    let pipeline = Pipeline::new(generator, images, store, microblog, forum, mailer);
    Ok(pipeline.run().await)
}

#[tokio::main]
async fn main() -> ExitCode {
    // Local .env is optional; production passes real environment variables.
    let _ = dotenvy::dotenv();
    if let Err(e) = init_tracing() {
        eprintln!("Failed to initialize tracing: {}", e);
        return ExitCode::FAILURE;
    }

    match run().await {
        Ok(PipelineResponse { status_code, body }) => {
            info!(status = status_code, body = %body, "Run finished");
            if status_code == 200 {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            error!(error = %e, "Run aborted before the pipeline started");
            ExitCode::FAILURE
        }
    }
}
