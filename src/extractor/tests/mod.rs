use chrono::Utc;
use reqwest::StatusCode;
use std::fs;
use url::Url;

use crate::extractor::{content::PLACEHOLDER_DE, content::PLACEHOLDER_EN, extract, extract_review};
use crate::fetcher::types::{Charset, RawPage};

#[test]
fn test_extract_english_review() {
    let html = fs::read_to_string("src/extractor/tests/fixtures/review_en.html")
        .expect("Failed to read test fixture");

    let review = extract(&create_test_page(html, "https://maps.example.com/review/1"));
    let record = &review.record;

    assert_eq!(record.business_name, "Joe's Pizza & Pasta");
    assert_eq!(record.reviewer_name, "Jane Doe");
    assert_eq!(record.rating, 5);
    assert!(record.review_content.starts_with("Best slice in town."));
    assert!(record.review_content.ends_with("remember our order."));
    assert_eq!(record.language.page_lang, "en");
    assert_eq!(record.language.detected, "en");

    assert!(review.debug.has_business_name);
    assert!(review.debug.has_reviewer_name);
    assert!(review.debug.has_review_text);
    assert_eq!(review.debug.status_code, 200);
    assert_eq!(
        review.debug.raw_name,
        "Google review of Joe's Pizza & Pasta by Jane Doe"
    );
}

#[test]
fn test_extract_german_star_only_review() {
    let html = fs::read_to_string("src/extractor/tests/fixtures/review_de.html")
        .expect("Failed to read test fixture");

    let review = extract(&create_test_page(html, "https://maps.example.com/review/2"));
    let record = &review.record;

    assert_eq!(record.business_name, "Café Mitte");
    assert_eq!(record.reviewer_name, "Hans Müller");
    assert_eq!(record.rating, 2);
    assert_eq!(record.review_content, PLACEHOLDER_DE);
    assert_eq!(record.language.page_lang, "de");
    assert_eq!(record.language.detected, "de");
    assert!(!review.debug.has_review_text);
}

#[test]
fn test_extract_page_without_review_metadata() {
    let html = fs::read_to_string("src/extractor/tests/fixtures/no_metadata.html")
        .expect("Failed to read test fixture");

    let review = extract(&create_test_page(html, "https://consent.example.com/"));
    let record = &review.record;

    assert_eq!(record.business_name, "");
    assert_eq!(record.reviewer_name, "");
    assert_eq!(record.rating, 0);
    assert_eq!(record.review_content, PLACEHOLDER_EN);
    assert_eq!(record.language.page_lang, "en");
    assert_eq!(review.debug.raw_name, "");
    assert_eq!(review.debug.raw_description, "");
}

#[test]
fn test_unmatched_title_keeps_other_fields() {
    let html = r#"<html lang="fr"><meta itemprop="name" content="Avis Google sur Chez Paul de Marie">
        <meta itemprop="description" content="★★★★ &quot;Très bon&quot;"></html>"#;

    let review = extract_review(html, 200);

    assert_eq!(review.record.business_name, "");
    assert_eq!(review.record.reviewer_name, "");
    assert_eq!(review.record.rating, 4);
    assert_eq!(review.record.review_content, "Très bon");
    assert_eq!(review.record.language.detected, "fr");
    assert_eq!(review.debug.raw_name, "Avis Google sur Chez Paul de Marie");
}

#[test]
fn test_malformed_html() {
    let html = "<html lang=\"en\"><meta itemprop=\"name\" content=\"Google review of A by B".to_string();

    let review = extract(&create_test_page(html, "https://example.com/broken"));

    // unterminated tag: nothing to read, but no panic and a full record
    assert_eq!(review.record.business_name, "");
    assert_eq!(review.record.review_content, PLACEHOLDER_EN);
}

#[test]
fn test_fetch_details_in_debug_block() {
    let mut page = create_test_page("<html></html>".to_string(), "https://example.com/r");
    page.charset = Charset::Windows1252;
    let fetched_at = page.fetched_at;

    let review = extract(&page);

    assert_eq!(review.debug.charset.as_deref(), Some("windows-1252"));
    assert_eq!(review.debug.fetched_at, Some(fetched_at));
    let debug = serde_json::to_value(&review.debug).unwrap();
    assert_eq!(debug["charset"], "windows-1252");
    assert!(debug["fetchedAt"].is_string());
}

fn create_test_page(html: String, url: &str) -> RawPage {
    RawPage {
        url_final: Url::parse(url).unwrap(),
        status: StatusCode::OK,
        html,
        charset: Charset::Utf8,
        fetched_at: Utc::now(),
    }
}

#[cfg(feature = "fuzz")]
mod fuzz {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_extract_never_panics(html in ".*") {
            let review = extract_review(&html, 200);
            prop_assert!(!review.record.review_content.is_empty());
        }

        #[test]
        fn test_rating_counts_filled_stars(stars in 0usize..10, text in "[a-zA-Z ]{0,40}") {
            let html = format!(
                r#"<meta itemprop="description" content="{}{}">"#,
                "★".repeat(stars),
                text
            );
            let review = extract_review(&html, 200);
            prop_assert_eq!(review.record.rating as usize, stars);
            prop_assert!(!review.record.review_content.contains('★'));
        }
    }
}
