//! Small text helpers shared by the write paths and the feed renderers.

use regex::Regex;
use std::sync::LazyLock;

use crate::domain::article::ArticleContent;

static MARKUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("markup pattern compiles"));

pub const EXCERPT_CHARS: usize = 200;

/// `None` for missing or whitespace-only input, trimmed text otherwise.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// First `max` characters of `value`, cut on a character boundary.
pub fn truncate_chars(value: &str, max: usize) -> String {
    match value.char_indices().nth(max) {
        Some((idx, _)) => value[..idx].to_string(),
        None => value.to_string(),
    }
}

/// Removes tags and collapses the remaining whitespace.
pub fn strip_markup(value: &str) -> String {
    collapse_whitespace(&MARKUP.replace_all(value, " "))
}

pub fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Excerpt derived from the opening paragraph, with an ellipsis when cut.
pub fn derive_excerpt(content: &ArticleContent) -> String {
    let first = content.paragraphs().next().unwrap_or_default();
    let first = collapse_whitespace(first);
    if first.chars().count() <= EXCERPT_CHARS {
        first
    } else {
        format!("{}…", truncate_chars(&first, EXCERPT_CHARS).trim_end())
    }
}
