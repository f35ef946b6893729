//! Asset upload client
//!
//! HTTP implementation of the `AssetUploadApi` port. The upload backend
//! accepts raw bytes and returns the public URL plus storage key; the
//! profile manager only ever consumes the URL.

use async_trait::async_trait;
use stagelink_core::{AssetUploadApi, UploadedAsset};
use stagelink_domain::Result as DomainResult;
use tracing::{debug, info, instrument};

use super::client::ApiClientConfig;
use super::errors::ApiError;

/// HTTP client for the asset-upload endpoint
pub struct AssetUploadClient {
    http: reqwest::Client,
    config: ApiClientConfig,
}

impl AssetUploadClient {
    /// Create a new upload client
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Config` if the underlying HTTP client cannot
    /// be constructed.
    pub fn new(config: ApiClientConfig) -> Result<Self, ApiError> {
        // Timeouts are enforced per request in `upload_bytes`, not at
        // the builder level, so a slow upload maps to ApiError::Timeout.
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| ApiError::Config(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { http, config })
    }

    /// Upload raw bytes under a filename
    #[instrument(skip(self, bytes), fields(filename = %filename, size = bytes.len()))]
    pub async fn upload_bytes(
        &self,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<UploadedAsset, ApiError> {
        let url = format!("{}/uploads", self.config.base_url);
        debug!(url = %url, "uploading asset");

        let mut request = self
            .http
            .post(url)
            .query(&[("filename", filename)])
            .header("Content-Type", "application/octet-stream")
            .body(bytes);
        if let Some(token) = &self.config.auth_token {
            request = request.header("Authorization", format!("Bearer {token}"));
        }

        let response = match tokio::time::timeout(self.config.timeout, request.send()).await {
            Ok(Ok(resp)) => resp,
            Ok(Err(err)) => return Err(ApiError::Network(err.to_string())),
            Err(_) => return Err(ApiError::Timeout(self.config.timeout)),
        };

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Server(format!("upload returned status {status}: {body}")));
        }

        let asset: UploadedAsset = response
            .json()
            .await
            .map_err(|e| ApiError::Client(format!("failed to parse upload response: {e}")))?;

        info!(url = %asset.url, "asset uploaded");
        Ok(asset)
    }
}

#[async_trait]
impl AssetUploadApi for AssetUploadClient {
    async fn upload(&self, filename: &str, bytes: Vec<u8>) -> DomainResult<UploadedAsset> {
        self.upload_bytes(filename, bytes).await.map_err(Into::into)
    }
}
