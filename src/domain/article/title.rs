//! Heuristics that pull the subject (usually an artist) out of a headline.
//!
//! Headlines are mostly Turkish, so the subject is typically the text in
//! front of a possessive or ablative suffix (`Mitski'nin ...`,
//! `Wet Leg'den ...`). These rules are approximate grouping signals tuned
//! against the fixture table in the tests below; they are not an entity
//! resolver.

use regex::Regex;
use std::sync::LazyLock;

/// Artists the newsroom covers often enough that a plain substring match is
/// more reliable than suffix stripping.
pub const KNOWN_ARTISTS: &[&str] = &[
    "Arctic Monkeys",
    "Taylor Swift",
    "Olivia Rodrigo",
    "Phoebe Bridgers",
    "Billie Eilish",
    "boygenius",
    "The National",
    "Tame Impala",
    "Lana Del Rey",
    "Fontaines D.C.",
    "Black Country New Road",
    "Wet Leg",
    "Fleet Foxes",
    "Bon Iver",
    "Radiohead",
];

static TURKISH_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(.*?)['’](?:in|ın|un|ün|nin|nın|nun|nün|dan|den|tan|ten)\b")
        .expect("turkish suffix pattern compiles")
});

static ENGLISH_POSSESSIVE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*?)['’]\s+").expect("english possessive pattern compiles"));

const MIN_CHUNK_CHARS: usize = 3;
const FALLBACK_QUERY: &str = "music";

/// Subject of a headline, or `None` when the headline is blank.
///
/// Tried in order: text before a Turkish suffix, text before an English
/// possessive, the chunk before the first `:` then `-` when it has at least
/// three characters, the whole headline.
pub fn extract_subject(title: &str) -> Option<String> {
    let title = title.trim();
    if title.is_empty() {
        return None;
    }

    for pattern in [&*TURKISH_SUFFIX, &*ENGLISH_POSSESSIVE] {
        if let Some(subject) = pattern
            .captures(title)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim())
            .filter(|subject| !subject.is_empty())
        {
            return Some(subject.to_string());
        }
    }

    let chunk = title
        .split(':')
        .next()
        .and_then(|head| head.split('-').next())
        .map(str::trim)
        .unwrap_or_default();
    if chunk.chars().count() >= MIN_CHUNK_CHARS {
        return Some(chunk.to_string());
    }

    Some(title.to_string())
}

/// Known artist mentioned anywhere in the headline, in canonical spelling.
pub fn known_artist(text: &str) -> Option<&'static str> {
    let lowered = text.to_lowercase();
    KNOWN_ARTISTS
        .iter()
        .copied()
        .find(|artist| lowered.contains(&artist.to_lowercase()))
}

/// Lower-cased grouping key used to keep one artist per feed section.
pub fn artist_key(title: &str) -> Option<String> {
    if title.trim().is_empty() {
        return None;
    }
    known_artist(title)
        .map(str::to_string)
        .or_else(|| extract_subject(title))
        .map(|key| key.to_lowercase())
}

/// Image search query derived from a headline; `"music"` for blank input.
pub fn title_query(title: &str) -> String {
    extract_subject(title).unwrap_or_else(|| FALLBACK_QUERY.to_string())
}
