//! One submission flow per form. Each handler validates locally, and only a
//! submission that passes validation produces an outbound request.

use tracing::info;

use crate::client::PestApiClient;
use crate::models::{DetectionReport, OutbreakFeatures, PestImage, WeekQuery};
use crate::state::Submission;

/// Shown when any required prediction field is left empty.
pub const MSG_FILL_ALL_FIELDS: &str = "Please fill in all fields";

/// Shown when the week input is missing or outside 1-52.
pub const MSG_INVALID_WEEK: &str = "Please enter a valid week number (1-52)";

/// Detection flow: validate the selected image, then upload it.
pub async fn run_detection(
    client: &PestApiClient,
    image: &PestImage,
) -> Submission<DetectionReport> {
    let mut submission = Submission::new();

    if let Err(err) = image.validate() {
        submission.reject(err.to_string());
        return submission;
    }

    submission.begin();
    info!("Submitting detection for {}", image.file_name());
    submission.complete(client.detect(image).await);
    submission
}

/// Outbreak prediction flow: every field must carry a value.
pub async fn run_outbreak_prediction(
    client: &PestApiClient,
    features: &OutbreakFeatures,
) -> Submission<String> {
    let mut submission = Submission::new();

    if !features.is_valid() {
        submission.reject(MSG_FILL_ALL_FIELDS);
        return submission;
    }

    submission.begin();
    info!("Submitting outbreak prediction");
    submission.complete(client.predict_outbreak(features).await);
    submission
}

/// Week prediction flow: the week must be a number in 1-52.
pub async fn run_week_prediction(
    client: &PestApiClient,
    query: &WeekQuery,
) -> Submission<String> {
    let mut submission = Submission::new();

    if !query.is_valid() {
        submission.reject(MSG_INVALID_WEEK);
        return submission;
    }

    submission.begin();
    info!("Submitting prediction for week {}", query.week.trim());
    submission.complete(client.predict_week(query).await);
    submission
}
