use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Raw metadata pulled from the page. Absent values are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetaFields {
    pub name_content: String,
    pub description_content: String,
    pub page_lang: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedTitle {
    pub business_name: String,
    pub reviewer_name: String,
}

/// Rating and text derived from the description metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewBody {
    pub rating: u32,
    pub content: String,
    /// `content` is the locale placeholder rather than reviewer text.
    pub is_placeholder: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LanguageInfo {
    pub detected: String,
    pub page_lang: String,
}

/// The structured review returned to callers. Every field is always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResultRecord {
    pub business_name: String,
    pub reviewer_name: String,
    pub rating: u32,
    pub review_content: String,
    pub language: LanguageInfo,
}

/// Diagnostics describing what the extractor found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DebugInfo {
    pub has_business_name: bool,
    pub has_reviewer_name: bool,
    pub has_review_text: bool,
    pub status_code: u16,
    pub raw_name: String,
    pub raw_description: String,
    /// Encoding the page body was decoded from. Absent when extracting from
    /// HTML that was not fetched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charset: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, format = DateTime)]
    pub fetched_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedReview {
    pub record: ResultRecord,
    pub debug: DebugInfo,
}
