use crate::extractor::model::ReviewBody;

pub const FILLED_STAR: char = '\u{2605}';
pub const EMPTY_STAR: char = '\u{2606}';

pub const PLACEHOLDER_EN: &str = "This is a star rating without any review text";
pub const PLACEHOLDER_DE: &str = "Es handelt sich um eine Sterne-Bewertung ohne Begründung";

/// Sentence used when a review carries stars but no words.
pub fn placeholder_for(lang: &str) -> &'static str {
    if lang.eq_ignore_ascii_case("de") {
        PLACEHOLDER_DE
    } else {
        PLACEHOLDER_EN
    }
}

/// Turn the decoded `description` metadata into a rating and review text.
///
/// Precedence: empty after removing stars -> placeholder; wrapped in one
/// pair of double quotes -> inner text; otherwise the stripped text itself.
pub fn normalize_description(description: &str, page_lang: &str) -> ReviewBody {
    let rating = description.chars().filter(|c| *c == FILLED_STAR).count() as u32;

    let stripped: String = description
        .chars()
        .filter(|c| *c != FILLED_STAR && *c != EMPTY_STAR)
        .collect();
    let working = stripped.trim();

    let text = unquote(working).unwrap_or(working).trim();
    if text.is_empty() {
        return ReviewBody {
            rating,
            content: placeholder_for(page_lang).to_string(),
            is_placeholder: true,
        };
    }

    ReviewBody {
        rating,
        content: text.to_string(),
        is_placeholder: false,
    }
}

/// Inner text when the whole string is one `"..."` pair.
fn unquote(text: &str) -> Option<&str> {
    if text.len() >= 2 {
        text.strip_prefix('"')?.strip_suffix('"')
    } else {
        None
    }
}
