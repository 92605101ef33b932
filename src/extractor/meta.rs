use regex::Regex;
use std::sync::LazyLock;

use crate::extractor::{entities::decode_entities, model::MetaFields};

pub const DEFAULT_PAGE_LANG: &str = "en";

// A quoted attribute value may itself contain `>`, so tags are matched as a
// sequence of unquoted characters and whole quoted strings.
static META_TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<meta\b(?:[^>"']|"[^"]*"|'[^']*')*>"#).unwrap()
});

static HTML_TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<html\b(?:[^>"']|"[^"]*"|'[^']*')*>"#).unwrap()
});

// One attribute: whitespace, full name, optional value. Matching names as
// whole tokens keeps `data-content` from being read as `content`.
static ATTR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)\s([^\s"'<>/=]+)(?:\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'=<>`]+)))?"#)
        .unwrap()
});

/// Pull the review metadata out of raw page HTML.
pub fn extract_meta(html: &str) -> MetaFields {
    MetaFields {
        name_content: itemprop_content(html, "name"),
        description_content: itemprop_content(html, "description"),
        page_lang: page_lang(html),
    }
}

/// `content` of the first `<meta>` whose `itemprop` is `prop`.
fn itemprop_content(html: &str, prop: &str) -> String {
    META_TAG_REGEX
        .find_iter(html)
        .map(|tag| tag.as_str())
        .find(|tag| {
            attribute(tag, "itemprop").is_some_and(|value| value.trim().eq_ignore_ascii_case(prop))
        })
        .and_then(|tag| attribute(tag, "content"))
        .map(decode_entities)
        .unwrap_or_default()
}

fn page_lang(html: &str) -> String {
    HTML_TAG_REGEX
        .find(html)
        .and_then(|tag| attribute(tag.as_str(), "lang"))
        .and_then(primary_subtag)
        .unwrap_or_else(|| DEFAULT_PAGE_LANG.to_string())
}

/// Value of the first attribute called `name` (ASCII case-insensitive).
/// Attributes written without a value yield `None`.
fn attribute<'t>(tag: &'t str, name: &str) -> Option<&'t str> {
    ATTR_REGEX
        .captures_iter(tag)
        .find(|caps| caps[1].eq_ignore_ascii_case(name))
        .and_then(|caps| caps.get(2).or_else(|| caps.get(3)).or_else(|| caps.get(4)))
        .map(|m| m.as_str())
}

/// "en-US" -> "en", "pt_BR" -> "pt"
fn primary_subtag(lang: &str) -> Option<String> {
    let primary = lang.trim().split(['-', '_']).next()?.trim();
    if primary.is_empty() {
        None
    } else {
        Some(primary.to_ascii_lowercase())
    }
}
