//! Sanity-style content store client.

use crate::content_key;
use async_trait::async_trait;
use chrono::Utc;
use gazette_core::{CoverImage, PostDraft};
use gazette_error::{PublishError, PublishErrorKind, PublishResult};
use gazette_interface::ContentStore;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{debug, error, info, instrument};

#[derive(Debug, Deserialize)]
struct AssetDocument {
    #[serde(rename = "_id")]
    id: String,
}

#[derive(Debug, Deserialize)]
struct AssetUploadResponse {
    document: AssetDocument,
}

#[derive(Debug, Deserialize)]
struct MutationResult {
    id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MutateResponse {
    #[serde(default)]
    results: Vec<MutationResult>,
}

/// Content store client for a Sanity-style HTTP API.
///
/// The API version path segment is date-stamped per request, matching the
/// store's convention of treating the current date as the latest version.
#[derive(Debug, Clone)]
pub struct SanityClient {
    client: Client,
    project_id: String,
    dataset: String,
    token: String,
    author_id: String,
    base_url: Option<String>,
}

impl SanityClient {
    /// Creates a new content store client.
    ///
    /// `author_id` is the document id patched into every post as the fixed
    /// author reference.
    pub fn new(
        project_id: impl Into<String>,
        dataset: impl Into<String>,
        token: impl Into<String>,
        author_id: impl Into<String>,
    ) -> Self {
        debug!("Creating new content store client");
        Self {
            client: Client::new(),
            project_id: project_id.into(),
            dataset: dataset.into(),
            token: token.into(),
            author_id: author_id.into(),
            base_url: None,
        }
    }

    /// Override the API host, e.g. for an API-compatible proxy.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    fn api_version() -> String {
        format!("v{}", Utc::now().format("%Y-%m-%d"))
    }

    fn host(&self) -> String {
        match &self.base_url {
            Some(url) => url.clone(),
            None => format!("https://{}.api.sanity.io", self.project_id),
        }
    }

    fn asset_url(&self) -> String {
        format!(
            "{}/{}/assets/images/{}",
            self.host(),
            Self::api_version(),
            self.dataset
        )
    }

    fn mutate_url(&self) -> String {
        format!(
            "{}/{}/data/mutate/{}?returnIds=true",
            self.host(),
            Self::api_version(),
            self.dataset
        )
    }

    /// Upload the cover image as a binary asset, returning the asset id.
    #[instrument(skip(self, cover), fields(byte_len = cover.bytes().len()))]
    async fn upload_asset(&self, cover: &CoverImage) -> PublishResult<String> {
        let response = self
            .client
            .post(self.asset_url())
            .bearer_auth(&self.token)
            .header("Content-Type", cover.content_type())
            .query(&[("filename", "image")])
            .body(cover.bytes().clone())
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Asset upload request failed");
                PublishError::new(PublishErrorKind::Http(format!("Request failed: {}", e)))
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            error!(status = status, body = %body, "Asset upload returned error");
            return Err(PublishError::new(PublishErrorKind::Api {
                status,
                message: body,
            }));
        }

        let upload: AssetUploadResponse = response.json().await.map_err(|e| {
            PublishError::new(PublishErrorKind::ResponseParsing(format!(
                "Failed to parse upload response: {}",
                e
            )))
        })?;

        debug!(asset_id = %upload.document.id, "Uploaded cover image asset");
        Ok(upload.document.id)
    }

    /// Issue a mutation request, returning the first result id when present.
    async fn mutate(&self, mutations: Value) -> PublishResult<Option<String>> {
        let response = self
            .client
            .post(self.mutate_url())
            .bearer_auth(&self.token)
            .json(&json!({ "mutations": mutations }))
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Mutation request failed");
                PublishError::new(PublishErrorKind::Http(format!("Request failed: {}", e)))
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            error!(status = status, body = %body, "Mutation returned error");
            return Err(PublishError::new(PublishErrorKind::Api {
                status,
                message: body,
            }));
        }

        let mutate: MutateResponse = response.json().await.map_err(|e| {
            PublishError::new(PublishErrorKind::ResponseParsing(format!(
                "Failed to parse mutation response: {}",
                e
            )))
        })?;

        Ok(mutate.results.into_iter().next().and_then(|r| r.id))
    }

    /// Create the post document, returning its id.
    #[instrument(skip(self, draft), fields(slug = %draft.slug()))]
    async fn create_document(&self, draft: &PostDraft) -> PublishResult<String> {
        let block_key = content_key(&mut rand::thread_rng());
        let span_key = content_key(&mut rand::thread_rng());

        let doc = json!({
            "_type": "post",
            "title": draft.title(),
            "slug": { "_type": "slug", "current": draft.slug() },
            "content": [{
                "_type": "block",
                "_key": block_key,
                "markDefs": [],
                "children": [{
                    "_type": "span",
                    "_key": span_key,
                    "text": draft.body(),
                }],
            }],
            "excerpt": draft.intro(),
            "date": Utc::now().to_rfc3339(),
        });

        let id = self
            .mutate(json!([{ "create": doc }]))
            .await?
            .ok_or_else(|| PublishError::new(PublishErrorKind::MissingDocumentId))?;

        debug!(document_id = %id, "Created post document");
        Ok(id)
    }

    /// Patch the document with the author reference and, when an asset was
    /// uploaded, the cover image reference.
    #[instrument(skip(self))]
    async fn patch_document(
        &self,
        document_id: &str,
        asset_id: Option<&str>,
    ) -> PublishResult<()> {
        let mut set = json!({
            "author": { "_type": "reference", "_ref": self.author_id },
        });

        if let Some(asset_id) = asset_id {
            set["coverImage"] = json!({
                "_type": "image",
                "asset": { "_type": "reference", "_ref": asset_id },
            });
        }

        self.mutate(json!([{ "patch": { "id": document_id, "set": set } }]))
            .await?;

        debug!(document_id = %document_id, "Patched post document");
        Ok(())
    }
}

#[async_trait]
impl ContentStore for SanityClient {
    #[instrument(skip(self, draft, cover), fields(slug = %draft.slug(), has_cover = cover.is_some()))]
    async fn publish(
        &self,
        draft: &PostDraft,
        cover: Option<&CoverImage>,
    ) -> PublishResult<String> {
        // Asset upload must precede the patch that references it; the
        // document tolerates an absent cover.
        let asset_id = match cover {
            Some(cover) => Some(self.upload_asset(cover).await?),
            None => None,
        };

        let document_id = self.create_document(draft).await?;
        self.patch_document(&document_id, asset_id.as_deref())
            .await?;

        info!(document_id = %document_id, "Published post document");
        Ok(document_id)
    }
}
