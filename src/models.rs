use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::config::MAX_UPLOAD_BYTES;
use crate::error::{ApiError, ApiResult};

/// File extensions the backend accepts for detection uploads.
pub const ALLOWED_IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp"];

/// Text surfaced when a successful prediction body carries neither
/// `prediction` nor `message`.
pub const PREDICTION_FALLBACK: &str = "Prediction completed";

/// Request payload for the feature-based outbreak prediction endpoint.
/// Field names are the backend's wire names; the comments are the form
/// labels they correspond to.
#[derive(Debug, Clone, Serialize)]
pub struct OutbreakFeatures {
    pub feature1: String, // collection type
    pub feature2: String, // max temperature
    pub feature3: String, // min temperature
    pub feature4: String, // relative humidity (RH1)
    pub feature5: String, // geography / location
}

impl OutbreakFeatures {
    /// Validates that every field carries a value
    pub fn is_valid(&self) -> bool {
        [
            &self.feature1,
            &self.feature2,
            &self.feature3,
            &self.feature4,
            &self.feature5,
        ]
        .iter()
        .all(|field| !field.trim().is_empty())
    }
}

/// Request payload for the week prediction endpoint. The week travels as
/// text, exactly as the form input submits it.
#[derive(Debug, Clone, Serialize)]
pub struct WeekQuery {
    pub week: String,
}

impl WeekQuery {
    pub fn new(week: impl Into<String>) -> Self {
        Self { week: week.into() }
    }

    /// The week as a number, if it parses and lies in 1..=52.
    pub fn week_number(&self) -> Option<u32> {
        self.week
            .trim()
            .parse()
            .ok()
            .filter(|week| (1..=52).contains(week))
    }

    pub fn is_valid(&self) -> bool {
        self.week_number().is_some()
    }
}

/// A local image file selected for a detection upload.
#[derive(Debug, Clone)]
pub struct PestImage {
    path: PathBuf,
}

impl PestImage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name carried by the multipart part.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string())
    }

    /// MIME type derived from the extension. Callers only reach this after
    /// [`PestImage::validate`], so the jpeg fallback covers jpg/jpeg alone.
    pub fn mime_type(&self) -> &'static str {
        match self.extension().as_deref() {
            Some("png") => "image/png",
            Some("gif") => "image/gif",
            Some("bmp") => "image/bmp",
            _ => "image/jpeg",
        }
    }

    /// Checks the file exists, looks like an image, and fits the upload cap.
    /// Every failure is a validation error raised before any network call.
    pub fn validate(&self) -> ApiResult<()> {
        match self.extension() {
            Some(ext) if ALLOWED_IMAGE_EXTENSIONS.contains(&ext.as_str()) => {}
            _ => {
                return Err(ApiError::Validation(format!(
                    "Please select an image file: {} is not one of {}",
                    self.path.display(),
                    ALLOWED_IMAGE_EXTENSIONS.join(", ")
                )));
            }
        }
        let metadata = std::fs::metadata(&self.path).map_err(|_| {
            ApiError::Validation(format!(
                "Please select an image first: {} does not exist",
                self.path.display()
            ))
        })?;
        if metadata.len() > MAX_UPLOAD_BYTES {
            return Err(ApiError::Validation(format!(
                "{} exceeds the 16 MB upload limit",
                self.path.display()
            )));
        }
        Ok(())
    }

    fn extension(&self) -> Option<String> {
        self.path
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
    }
}

/// Successful response of the image detection endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct DetectionReport {
    pub pest_class: String,
    pub suggestion: String,
    /// Server-relative path of the annotated copy; the backend sends null
    /// when it saved nothing.
    pub annotated_image: Option<String>,
}

/// Body shape shared by the two text prediction endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictionEnvelope {
    pub prediction: Option<String>,
    pub message: Option<String>,
}

impl PredictionEnvelope {
    /// The text to present: `prediction`, else `message`, else the uniform
    /// fallback. Empty strings fall through like absent fields.
    pub fn surface_text(self) -> String {
        self.prediction
            .filter(|text| !text.is_empty())
            .or(self.message.filter(|text| !text.is_empty()))
            .unwrap_or_else(|| PREDICTION_FALLBACK.to_string())
    }
}

/// Body shape of a non-success response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    pub error: Option<String>,
    /// Diagnostic detail the backend attaches to 500s; logged, never shown.
    pub details: Option<String>,
}
