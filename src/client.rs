//! HTTP client for the pest prediction backend. Every call resolves its URL
//! through the shared [`Config`], races the request against the configured
//! deadline, and decodes the body into a typed model.

use std::path::Path;

use reqwest::multipart;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::config::Config;
use crate::endpoint::{DETECTION_PATH, OUTBREAK_PATH, WEEK_PATH};
use crate::error::{ApiError, ApiResult};
use crate::models::{
    DetectionReport, ErrorBody, OutbreakFeatures, PestImage, PredictionEnvelope, WeekQuery,
};

/// Client for the prediction backend. Cheap to clone; all clones share one
/// connection pool.
#[derive(Debug, Clone)]
pub struct PestApiClient {
    http: reqwest::Client,
    config: Config,
}

impl PestApiClient {
    pub fn new(config: Config) -> ApiResult<Self> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Uploads an image and returns the backend's detection verdict.
    pub async fn detect(&self, image: &PestImage) -> ApiResult<DetectionReport> {
        let url = self.config.endpoint(DETECTION_PATH);
        info!("Uploading {} to {}", image.file_name(), url);

        let bytes = tokio::fs::read(image.path()).await?;
        let part = multipart::Part::bytes(bytes)
            .file_name(image.file_name())
            .mime_str(image.mime_type())?;
        let form = multipart::Form::new().part("image", part);

        let response = self
            .send_bounded(self.http.post(&url).multipart(form))
            .await?;
        self.read_json(response).await
    }

    /// Asks for an outbreak prediction from a set of survey features.
    pub async fn predict_outbreak(&self, features: &OutbreakFeatures) -> ApiResult<String> {
        let url = self.config.endpoint(OUTBREAK_PATH);
        info!("Requesting outbreak prediction from {}", url);

        let response = self
            .send_bounded(self.http.post(&url).json(features))
            .await?;
        let envelope: PredictionEnvelope = self.read_json(response).await?;
        Ok(envelope.surface_text())
    }

    /// Asks for the prediction associated with a week of the year.
    pub async fn predict_week(&self, query: &WeekQuery) -> ApiResult<String> {
        let url = self.config.endpoint(WEEK_PATH);
        info!("Requesting week prediction from {}", url);

        let response = self.send_bounded(self.http.post(&url).json(query)).await?;
        let envelope: PredictionEnvelope = self.read_json(response).await?;
        Ok(envelope.surface_text())
    }

    /// Downloads the annotated image a detection reported, writing it to
    /// `dest`. `image_path` is the server-relative path from
    /// [`DetectionReport::annotated_image`].
    pub async fn fetch_annotated_image(&self, image_path: &str, dest: &Path) -> ApiResult<()> {
        let url = self.config.endpoint(image_path);
        info!("Downloading annotated image from {}", url);

        let response = self.send_bounded(self.http.get(&url)).await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            return Err(api_error(status, &body));
        }
        let bytes = response.bytes().await?;
        tokio::fs::write(dest, &bytes).await?;
        Ok(())
    }

    /// Sends a request, racing it against the configured deadline. The
    /// deadline covers the connection and response headers; a request still
    /// pending when it fires is dropped and reported as [`ApiError::Timeout`].
    async fn send_bounded(&self, request: reqwest::RequestBuilder) -> ApiResult<reqwest::Response> {
        match tokio::time::timeout(self.config.timeout, request.send()).await {
            Ok(sent) => Ok(sent?),
            Err(_) => Err(ApiError::Timeout {
                waited: self.config.timeout,
            }),
        }
    }

    async fn read_json<T: DeserializeOwned>(&self, response: reqwest::Response) -> ApiResult<T> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(api_error(status, &body));
        }
        debug!("Response body: {}", body);
        serde_json::from_str(&body).map_err(|source| ApiError::UnexpectedBody { status, source })
    }
}

/// Builds the error for a non-success response. The body's own `error` text
/// wins when present; `details` is diagnostic only and never surfaced.
fn api_error(status: reqwest::StatusCode, body: &str) -> ApiError {
    let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
    if let Some(details) = parsed.details.as_deref() {
        debug!("Backend error details: {}", details);
    }
    let message = match parsed.error {
        Some(text) if !text.is_empty() => text,
        _ => format!("backend returned status {status}"),
    };
    ApiError::Api { status, message }
}
