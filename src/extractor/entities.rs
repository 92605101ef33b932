//! HTML character reference decoding.
//!
//! Named references come from a fixed table; anything else that looks like
//! `&#NNN;` or `&#xHH;` is decoded by code point. Unknown references pass
//! through untouched. Decoding is a single left-to-right pass, so the output
//! may itself contain entity-like text (`&amp;amp;` becomes `&amp;`).

use regex::{Captures, Regex};
use std::collections::HashMap;
use std::sync::LazyLock;

static ENTITY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&(?:#[0-9]+|#[xX][0-9A-Fa-f]+|[A-Za-z][A-Za-z0-9]*);").unwrap());

static NAMED_ENTITIES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("&amp;", "&"),
        ("&lt;", "<"),
        ("&gt;", ">"),
        ("&quot;", "\""),
        // apostrophe variants
        ("&#39;", "'"),
        ("&#x27;", "'"),
        ("&apos;", "'"),
        ("&nbsp;", "\u{00A0}"),
        ("&#x2F;", "/"),
        ("&#47;", "/"),
        ("&#x60;", "`"),
        ("&#96;", "`"),
        ("&lsquo;", "\u{2018}"),
        ("&rsquo;", "\u{2019}"),
        ("&ldquo;", "\u{201C}"),
        ("&rdquo;", "\u{201D}"),
        ("&ndash;", "\u{2013}"),
        ("&mdash;", "\u{2014}"),
    ])
});

/// Resolve HTML character references in `text`.
pub fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }

    ENTITY_REGEX
        .replace_all(text, |caps: &Captures| {
            let token = &caps[0];
            if let Some(literal) = NAMED_ENTITIES.get(token) {
                return (*literal).to_string();
            }
            decode_numeric(token).map_or_else(|| token.to_string(), String::from)
        })
        .into_owned()
}

fn decode_numeric(token: &str) -> Option<char> {
    let body = token.strip_prefix("&#")?.strip_suffix(';')?;
    let code = match body.strip_prefix(['x', 'X']) {
        Some(hex) => u32::from_str_radix(hex, 16).ok()?,
        None => body.parse::<u32>().ok()?,
    };
    char::from_u32(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_unchanged() {
        let text = "Joe's Pizza ★★★★ \"great\" <b> 100% & more";
        // a bare ampersand is not a reference
        assert_eq!(decode_entities(text), text);
        assert_eq!(decode_entities(""), "");
    }

    #[test]
    fn test_named_entities() {
        assert_eq!(decode_entities("Joe&#39;s &amp; Sons"), "Joe's & Sons");
        assert_eq!(decode_entities("&quot;Great&quot;"), "\"Great\"");
        assert_eq!(decode_entities("&lt;3 &gt;"), "<3 >");
        assert_eq!(decode_entities("a&nbsp;b"), "a\u{00A0}b");
        assert_eq!(decode_entities("&ldquo;hi&rdquo; &ndash; &mdash;"), "\u{201C}hi\u{201D} \u{2013} \u{2014}");
        assert_eq!(decode_entities("a&#x2F;b&#x60;"), "a/b`");
    }

    #[test]
    fn test_single_pass() {
        assert_eq!(decode_entities("&amp;amp;"), "&amp;");
        assert_eq!(decode_entities("&amp;#65;"), "&#65;");
    }

    #[test]
    fn test_numeric_entities() {
        assert_eq!(decode_entities("&#65;"), "A");
        assert_eq!(decode_entities("&#252;ber"), "über");
        assert_eq!(decode_entities("&#x2605;&#X2605;"), "★★");
    }

    #[test]
    fn test_unknown_entities_left_alone() {
        assert_eq!(decode_entities("&bogus; &copy;"), "&bogus; &copy;");
        // surrogate and out-of-range code points are not characters
        assert_eq!(decode_entities("&#55296;"), "&#55296;");
        assert_eq!(decode_entities("&#99999999999;"), "&#99999999999;");
        assert_eq!(decode_entities("&#;"), "&#;");
    }
}
