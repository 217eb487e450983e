//! Text normalization ahead of tokenization

use crate::config::ExtractionOptions;
use scraper::Html;

/// The three normalization toggles, in the order they are applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizeOptions {
    /// Leave markup in the text. When false, tags are stripped.
    pub include_markup: bool,
    /// Lowercase the whole text
    pub case_insensitive: bool,
    /// Collapse whitespace runs to one space and trim the ends
    pub normalize_whitespace: bool,
}

impl From<&ExtractionOptions> for NormalizeOptions {
    fn from(options: &ExtractionOptions) -> Self {
        Self {
            include_markup: options.include_markup,
            case_insensitive: options.case_insensitive,
            normalize_whitespace: options.normalize_whitespace,
        }
    }
}

/// Apply markup handling, then case folding, then whitespace collapsing
#[must_use]
pub fn normalize(text: &str, options: NormalizeOptions) -> String {
    let mut text = if options.include_markup {
        text.to_string()
    } else {
        strip_markup(text)
    };

    if options.case_insensitive {
        text = text.to_lowercase();
    }

    if options.normalize_whitespace {
        text = collapse_whitespace(&text);
    }

    text
}

/// Visible text content of an HTML document or fragment
#[must_use]
pub fn strip_markup(text: &str) -> String {
    Html::parse_document(text)
        .root_element()
        .text()
        .collect::<String>()
}

/// Replace every whitespace run with a single space and drop the ends
#[must_use]
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
