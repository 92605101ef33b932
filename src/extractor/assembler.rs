use crate::extractor::{
    language::resolve_language,
    model::{DebugInfo, ExtractedReview, LanguageInfo, MetaFields, ParsedTitle, ReviewBody, ResultRecord},
};

/// Package the pipeline stages into the response record plus diagnostics.
pub fn assemble(
    meta: MetaFields,
    title: ParsedTitle,
    body: ReviewBody,
    status_code: u16,
) -> ExtractedReview {
    let review_text = (!body.is_placeholder).then_some(body.content.as_str());
    let detected = resolve_language(review_text, &meta.page_lang);

    let debug = DebugInfo {
        has_business_name: !title.business_name.is_empty(),
        has_reviewer_name: !title.reviewer_name.is_empty(),
        has_review_text: !body.is_placeholder,
        status_code,
        raw_name: meta.name_content,
        raw_description: meta.description_content,
        charset: None,
        fetched_at: None,
    };

    let record = ResultRecord {
        business_name: title.business_name,
        reviewer_name: title.reviewer_name,
        rating: body.rating,
        review_content: body.content,
        language: LanguageInfo {
            detected,
            page_lang: meta.page_lang,
        },
    };

    ExtractedReview { record, debug }
}
