//! Unsplash search API client.

use crate::pick;
use async_trait::async_trait;
use derive_getters::Getters;
use gazette_core::CoverImage;
use gazette_error::{ImageError, ImageErrorKind, ImageResult};
use gazette_interface::ImageSource;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, error, instrument};

const UNSPLASH_SEARCH_URL: &str = "https://api.unsplash.com/search/photos";
const DEFAULT_CONTENT_TYPE: &str = "image/jpeg";

/// URLs for one search result at various resolutions.
#[derive(Debug, Clone, Deserialize, Getters)]
pub struct ImageUrls {
    /// Regular-resolution variant, the one the pipeline downloads
    regular: String,
}

/// One image search result.
#[derive(Debug, Clone, Deserialize, Getters)]
pub struct ImageSearchResult {
    /// Image URLs by resolution
    urls: ImageUrls,
}

/// Search endpoint response.
#[derive(Debug, Clone, Deserialize, Getters)]
pub struct SearchResponse {
    /// Result list, at most one page
    results: Vec<ImageSearchResult>,
}

/// Unsplash search API client.
#[derive(Debug, Clone)]
pub struct UnsplashClient {
    client: Client,
    access_key: String,
    base_url: String,
}

impl UnsplashClient {
    /// Creates a new Unsplash client.
    pub fn new(access_key: impl Into<String>) -> Self {
        debug!("Creating new Unsplash client");
        Self {
            client: Client::new(),
            access_key: access_key.into(),
            base_url: UNSPLASH_SEARCH_URL.to_string(),
        }
    }

    /// Override the search endpoint, e.g. for an API-compatible proxy.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Search for landscape photos matching `query`.
    #[instrument(skip(self))]
    async fn search(&self, query: &str) -> ImageResult<SearchResponse> {
        let response = self
            .client
            .get(&self.base_url)
            .header("Authorization", format!("Client-ID {}", self.access_key))
            .query(&[
                ("query", query),
                ("page", "1"),
                ("per_page", "8"),
                ("orientation", "landscape"),
            ])
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Image search request failed");
                ImageError::new(ImageErrorKind::Http(format!("Request failed: {}", e)))
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            error!(status = status, body = %body, "Image search returned error");
            return Err(ImageError::new(ImageErrorKind::Api {
                status,
                message: body,
            }));
        }

        response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse image search response");
            ImageError::new(ImageErrorKind::ResponseParsing(format!(
                "Failed to parse response: {}",
                e
            )))
        })
    }

    /// Download the image at `url` in full.
    #[instrument(skip(self))]
    async fn download(&self, url: &str) -> ImageResult<CoverImage> {
        let response = self.client.get(url).send().await.map_err(|e| {
            error!(error = ?e, "Image download request failed");
            ImageError::new(ImageErrorKind::Download(format!("Request failed: {}", e)))
        })?;

        if !response.status().is_success() {
            return Err(ImageError::new(ImageErrorKind::Download(format!(
                "Download returned status {}",
                response.status()
            ))));
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or(DEFAULT_CONTENT_TYPE)
            .to_string();

        let bytes = response.bytes().await.map_err(|e| {
            ImageError::new(ImageErrorKind::Download(format!("Body read failed: {}", e)))
        })?;

        debug!(byte_len = bytes.len(), content_type = %content_type, "Downloaded cover image");
        Ok(CoverImage::new(bytes.to_vec(), content_type))
    }
}

#[async_trait]
impl ImageSource for UnsplashClient {
    #[instrument(skip(self))]
    async fn fetch_cover(&self, keyword: &str) -> ImageResult<CoverImage> {
        let search = self.search(keyword).await?;

        let index = pick::pick_index(search.results().len(), &mut rand::thread_rng())
            .ok_or_else(|| ImageError::new(ImageErrorKind::NoResults(keyword.to_string())))?;

        // Index is clamped to the result count, so this lookup cannot miss.
        let chosen = &search.results()[index];
        self.download(chosen.urls().regular()).await
    }
}
