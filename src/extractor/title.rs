//! Splits the review page's `name` metadata into business and reviewer.
//!
//! Each supported locale contributes one row to a template table. The parser
//! walks the table in order and the first pattern that matches wins, so new
//! locales are added by appending a row.

use regex::{Regex, RegexBuilder};
use std::sync::LazyLock;

use crate::extractor::model::ParsedTitle;

/// One row of the template table.
#[derive(Debug, Clone, Copy)]
pub struct TitleTemplate {
    pub locale: &'static str,
    pub pattern: &'static str,
    pub business_group: usize,
    pub reviewer_group: usize,
}

pub const DEFAULT_TEMPLATES: &[TitleTemplate] = &[
    TitleTemplate {
        locale: "en",
        pattern: r"Google review of\s+(.+?)\s+by\s+(.+)",
        business_group: 1,
        reviewer_group: 2,
    },
    TitleTemplate {
        locale: "de",
        pattern: r"Google-Rezension\s+(?:über|zu)\s+(.+?)\s+von\s+(.+)",
        business_group: 1,
        reviewer_group: 2,
    },
];

static DEFAULT_PARSER: LazyLock<TitleParser> = LazyLock::new(|| {
    TitleParser::new(DEFAULT_TEMPLATES).expect("built-in title templates must compile")
});

struct CompiledTemplate {
    template: TitleTemplate,
    regex: Regex,
}

pub struct TitleParser {
    templates: Vec<CompiledTemplate>,
}

impl TitleParser {
    /// Compile a template table. Patterns are matched case-insensitively and
    /// anchored to the whole (trimmed) title.
    pub fn new(templates: &[TitleTemplate]) -> Result<Self, regex::Error> {
        let templates = templates
            .iter()
            .map(|template| -> Result<CompiledTemplate, regex::Error> {
                let regex = RegexBuilder::new(&format!(r"^\s*(?:{})\s*$", template.pattern))
                    .case_insensitive(true)
                    .dot_matches_new_line(true)
                    .build()?;
                Ok(CompiledTemplate {
                    template: *template,
                    regex,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { templates })
    }

    pub fn parse(&self, title: &str) -> ParsedTitle {
        self.parse_with_locale(title)
            .map(|(_, parsed)| parsed)
            .unwrap_or_default()
    }

    /// Like [`TitleParser::parse`] but also reports which locale matched.
    pub fn parse_with_locale(&self, title: &str) -> Option<(&'static str, ParsedTitle)> {
        self.templates.iter().find_map(|compiled| {
            let caps = compiled.regex.captures(title)?;
            let group = |index: usize| {
                caps.get(index)
                    .map(|m| m.as_str().trim().to_string())
                    .unwrap_or_default()
            };
            Some((
                compiled.template.locale,
                ParsedTitle {
                    business_name: group(compiled.template.business_group),
                    reviewer_name: group(compiled.template.reviewer_group),
                },
            ))
        })
    }
}

/// Parse with the built-in English and German templates.
pub fn parse_title(title: &str) -> ParsedTitle {
    DEFAULT_PARSER.parse(title)
}
