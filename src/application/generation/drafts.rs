//! Parsing and shape validation of generated drafts.

use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use super::categories::DRAFT_CATEGORY_SLUGS;
use crate::application::{
    dto::ArticleDraftDto,
    error::{ApplicationError, ApplicationResult},
};

pub const MAX_DRAFT_TAGS: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftShapeError {
    #[error("draft is not a JSON object")]
    NotAnObject,
    #[error("draft field `{0}` is missing or not a string")]
    MissingField(&'static str),
    #[error("draft field `{0}` is blank")]
    BlankField(&'static str),
}

/// One validated entry of a bulk generation answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedDraft {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub category: String,
    pub artist: Option<String>,
    pub year: Option<i32>,
    pub image_search: Option<String>,
}

fn required(
    object: &serde_json::Map<String, Value>,
    field: &'static str,
) -> Result<String, DraftShapeError> {
    let value = object
        .get(field)
        .and_then(Value::as_str)
        .ok_or(DraftShapeError::MissingField(field))?;
    let value = value.trim();
    if value.is_empty() {
        return Err(DraftShapeError::BlankField(field));
    }
    Ok(value.to_string())
}

fn optional(object: &serde_json::Map<String, Value>, field: &str) -> Option<String> {
    object
        .get(field)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

impl GeneratedDraft {
    pub fn from_value(value: &Value) -> Result<Self, DraftShapeError> {
        let object = value.as_object().ok_or(DraftShapeError::NotAnObject)?;
        let year = object.get("year").and_then(|year| match year {
            Value::Number(number) => number.as_i64().and_then(|y| i32::try_from(y).ok()),
            Value::String(text) => text.trim().parse().ok(),
            _ => None,
        });

        Ok(Self {
            title: required(object, "title")?,
            excerpt: required(object, "excerpt")?,
            content: required(object, "content")?,
            category: required(object, "category")?,
            artist: optional(object, "artist"),
            year,
            image_search: optional(object, "imageSearch"),
        })
    }
}

/// First balanced `open ... close` span, skipping delimiters inside JSON
/// strings. An opener that never closes is skipped in favour of the next one.
fn first_balanced(text: &str, open: char, close: char) -> Option<&str> {
    text.match_indices(open)
        .find_map(|(start, _)| balanced_from(text, start, open, close))
}

fn balanced_from(text: &str, start: usize, open: char, close: char) -> Option<&str> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in text[start..].char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }
        match ch {
            '"' => in_string = true,
            c if c == open => depth += 1,
            c if c == close => {
                depth -= 1;
                if depth == 0 {
                    let end = start + offset + ch.len_utf8();
                    return Some(&text[start..end]);
                }
            }
            _ => {}
        }
    }
    None
}

pub fn extract_json_array(text: &str) -> Option<&str> {
    first_balanced(text, '[', ']')
}

pub fn extract_json_object(text: &str) -> Option<&str> {
    first_balanced(text, '{', '}')
}

/// Validated drafts from a bulk answer. Entries with the wrong shape are
/// dropped; an answer without a parseable array is an error carrying the
/// raw text.
pub fn parse_drafts(text: &str) -> ApplicationResult<Vec<GeneratedDraft>> {
    let malformed = || ApplicationError::malformed("failed to parse AI response", text);
    let span = extract_json_array(text).ok_or_else(malformed)?;
    let value: Value = serde_json::from_str(span).map_err(|_| malformed())?;
    let entries = value.as_array().ok_or_else(malformed)?;

    Ok(entries
        .iter()
        .enumerate()
        .filter_map(|(idx, entry)| match GeneratedDraft::from_value(entry) {
            Ok(draft) => Some(draft),
            Err(err) => {
                debug!(index = idx, error = %err, "discarding generated draft");
                None
            }
        })
        .collect())
}

/// Single-article draft. Unknown category slugs file under `haber`; tags
/// are trimmed, de-duplicated and capped.
pub fn parse_article_draft(text: &str) -> ApplicationResult<ArticleDraftDto> {
    let malformed = || ApplicationError::malformed("failed to parse AI JSON", text);
    let span = extract_json_object(text).ok_or_else(malformed)?;
    let value: Value = serde_json::from_str(span).map_err(|_| malformed())?;
    let object = value.as_object().ok_or_else(malformed)?;

    let field = |name: &'static str| {
        required(object, name).map_err(|err| ApplicationError::malformed(err.to_string(), text))
    };

    let category_slug = optional(object, "categorySlug")
        .filter(|slug| DRAFT_CATEGORY_SLUGS.contains(&slug.as_str()))
        .unwrap_or_else(|| DRAFT_CATEGORY_SLUGS[0].to_string());

    let mut tags: Vec<String> = Vec::new();
    for tag in object
        .get("tags")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(Value::as_str)
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
    {
        if tags.len() == MAX_DRAFT_TAGS {
            break;
        }
        if !tags.iter().any(|existing| existing.eq_ignore_ascii_case(tag)) {
            tags.push(tag.to_string());
        }
    }

    Ok(ArticleDraftDto {
        title: field("title")?,
        excerpt: field("excerpt")?,
        content: field("content")?,
        category_slug,
        tags,
    })
}
