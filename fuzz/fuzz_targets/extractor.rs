#![no_main]

use libfuzzer_sys::fuzz_target;

use reviewlens::extractor::{entities::decode_entities, extract_review};

fuzz_target!(|data: &[u8]| {
    // Convert raw bytes to string, handling invalid UTF-8 gracefully
    let html = String::from_utf8_lossy(data);

    // The pipeline is total: any input yields a full record
    let review = extract_review(&html, 200);
    assert!(!review.record.review_content.is_empty());

    let _ = decode_entities(&html);
});
