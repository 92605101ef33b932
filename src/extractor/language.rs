use whatlang::{Lang, detect};

const MIN_CONFIDENCE: f64 = 0.25;
const MIN_TEXT_LENGTH: usize = 20;

pub fn detect_language(text: &str) -> Option<String> {
    // Reviews like "Great!" are too short to classify
    if text.trim().chars().count() < MIN_TEXT_LENGTH {
        return None;
    }

    if let Some(info) = detect(text)
        && info.confidence() >= MIN_CONFIDENCE
    {
        return Some(lang_to_code(info.lang()));
    }

    None
}

/// Statistical guess for real review text, else the page's declared language.
pub fn resolve_language(review_text: Option<&str>, page_lang: &str) -> String {
    review_text
        .and_then(detect_language)
        .unwrap_or_else(|| page_lang.to_string())
}

fn lang_to_code(lang: Lang) -> String {
    match lang {
        Lang::Eng => "en".to_string(),
        Lang::Rus => "ru".to_string(),
        Lang::Cmn => "zh".to_string(),
        Lang::Spa => "es".to_string(),
        Lang::Fra => "fr".to_string(),
        Lang::Deu => "de".to_string(),
        Lang::Jpn => "ja".to_string(),
        Lang::Kor => "ko".to_string(),
        Lang::Por => "pt".to_string(),
        Lang::Ita => "it".to_string(),
        Lang::Nld => "nl".to_string(),
        Lang::Pol => "pl".to_string(),
        Lang::Tur => "tr".to_string(),
        Lang::Swe => "sv".to_string(),
        Lang::Dan => "da".to_string(),
        Lang::Fin => "fi".to_string(),
        Lang::Heb => "he".to_string(),
        Lang::Ara => "ar".to_string(),
        Lang::Hin => "hi".to_string(),
        Lang::Tha => "th".to_string(),
        Lang::Vie => "vi".to_string(),
        _ => lang.code().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_english() {
        let text = "The pizza was excellent and the staff were friendly. We will come back again soon.";
        assert_eq!(detect_language(text), Some("en".to_string()));
    }

    #[test]
    fn test_detect_german() {
        let text = "Sehr freundliches Personal und der Kuchen war wirklich ausgezeichnet. Wir kommen gerne wieder.";
        assert_eq!(detect_language(text), Some("de".to_string()));
    }

    #[test]
    fn test_short_text_returns_none() {
        assert_eq!(detect_language("Great!"), None);
    }

    #[test]
    fn test_resolve_falls_back_to_page_lang() {
        assert_eq!(resolve_language(None, "de"), "de");
        assert_eq!(resolve_language(Some("Top"), "fr"), "fr");
        assert_eq!(
            resolve_language(
                Some("Sehr freundliches Personal und der Kuchen war wirklich ausgezeichnet. Wir kommen gerne wieder."),
                "en"
            ),
            "de"
        );
    }
}
