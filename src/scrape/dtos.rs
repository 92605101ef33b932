use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::extractor::{DebugInfo, ExtractedReview, ResultRecord};

pub const MISSING_URL_MESSAGE: &str = "URL parameter is required";
pub const SCRAPE_FAILED_MESSAGE: &str = "Failed to scrape data";

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ScrapeParams {
    /// Absolute URL of the review page.
    pub url: Option<String>,
}

impl ScrapeParams {
    /// The trimmed URL, or `None` when missing or blank.
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref().map(str::trim).filter(|url| !url.is_empty())
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScrapeResponse {
    pub success: bool,
    pub data: ResultRecord,
    pub debug_info: DebugInfo,
}

impl From<ExtractedReview> for ScrapeResponse {
    fn from(review: ExtractedReview) -> Self {
        Self {
            success: true,
            data: review.record,
            debug_info: review.debug,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FailureDetails {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FailureResponse {
    pub success: bool,
    pub error: String,
    pub details: FailureDetails,
}

impl FailureResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: SCRAPE_FAILED_MESSAGE.to_string(),
            details: FailureDetails {
                message: message.into(),
            },
        }
    }
}
