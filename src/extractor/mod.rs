pub mod assembler;
pub mod content;
pub mod entities;
pub mod language;
pub mod meta;
pub mod model;
pub mod title;

#[cfg(test)]
mod tests;

pub use model::{DebugInfo, ExtractedReview, LanguageInfo, ResultRecord};

use crate::fetcher::types::RawPage;

/// Extract from a fetched page, recording how and when it was fetched.
pub fn extract(page: &RawPage) -> ExtractedReview {
    let mut review = extract_review(&page.html, page.status_code());
    review.debug.charset = Some(page.charset.name().to_string());
    review.debug.fetched_at = Some(page.fetched_at);
    review
}

/// Run the whole pipeline over raw HTML. Never fails: fields that cannot be
/// found come back empty, zero or as the placeholder text.
pub fn extract_review(html: &str, status_code: u16) -> ExtractedReview {
    // 1. Pull name/description/lang out of the markup
    let meta = meta::extract_meta(html);

    // 2. Split the title into business and reviewer
    let title = title::parse_title(&meta.name_content);

    // 3. Stars and review text from the description
    let body = content::normalize_description(&meta.description_content, &meta.page_lang);

    // 4. Final record
    assembler::assemble(meta, title, body, status_code)
}
