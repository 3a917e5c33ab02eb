//! Picks a photographic image for an article from an external media index.

use std::{collections::HashMap, sync::Arc};

use tracing::{debug, warn};

use crate::{
    application::{
        error::ApplicationResult,
        ports::media::{MediaHit, MediaInfo, MediaSearch},
        text::{collapse_whitespace, truncate_chars},
    },
    domain::article::title::title_query,
};

pub const SEARCH_LIMIT: u32 = 8;
pub const MAX_QUERY_CHARS: usize = 120;

const CROWD_QUERY: &str = "music festival crowd";
const FALLBACK_QUERY: &str = "music";
const REJECTED_TITLE_WORDS: &[&str] = &["logo", "ticket"];
const ACCEPTED_MIME: &[&str] = &["image/jpeg", "image/png"];
const FESTIVAL_WORDS: &[&str] = &["festival", "konser", "concert"];

/// Artists whose name alone makes the best query when a query starts with it.
const LEADING_ARTISTS: &[&str] = &[
    "Taylor Swift",
    "Olivia Rodrigo",
    "Arctic Monkeys",
    "Phoebe Bridgers",
    "Billie Eilish",
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageHints {
    pub title: Option<String>,
    pub category: Option<String>,
    pub artist: Option<String>,
    pub search_hint: Option<String>,
}

impl ImageHints {
    pub fn for_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_artist(mut self, artist: Option<String>) -> Self {
        self.artist = artist;
        self
    }

    pub fn with_search_hint(mut self, hint: Option<String>) -> Self {
        self.search_hint = hint;
        self
    }
}

/// Canonical query text: known spellings fixed, whitespace collapsed,
/// length capped.
pub fn normalize_query(query: &str) -> String {
    let query = collapse_whitespace(query);
    if query.is_empty() {
        return query;
    }
    let lowered = query.to_lowercase();

    let normalized = if lowered.starts_with("arktik maymunlar") {
        "Arctic Monkeys".to_string()
    } else if let Some(artist) = LEADING_ARTISTS
        .iter()
        .find(|artist| lowered.starts_with(&artist.to_lowercase()))
    {
        (*artist).to_string()
    } else if lowered.contains("boygenius") {
        "boygenius".to_string()
    } else {
        query
    };

    truncate_chars(&normalized, MAX_QUERY_CHARS).trim_end().to_string()
}

fn is_festival_like(category: &str) -> bool {
    let lowered = category.to_lowercase();
    FESTIVAL_WORDS.iter().any(|word| lowered.contains(word))
}

/// Queries to try, best first. Blank hints are skipped and so are
/// queries that normalise to one already listed.
pub fn candidate_queries(hints: &ImageHints) -> Vec<String> {
    let category = hints
        .category
        .as_deref()
        .map(str::trim)
        .filter(|category| !category.is_empty());

    let mut raw: Vec<String> = Vec::with_capacity(6);
    if category.is_some_and(is_festival_like) {
        raw.push(CROWD_QUERY.to_string());
    }
    raw.extend(hints.search_hint.clone());
    raw.extend(hints.artist.clone());
    if let Some(title) = hints.title.as_deref().filter(|t| !t.trim().is_empty()) {
        raw.push(title_query(title));
    }
    raw.extend(category.map(str::to_string));
    raw.push(FALLBACK_QUERY.to_string());

    let mut queries: Vec<String> = Vec::with_capacity(raw.len());
    for candidate in raw {
        let normalized = normalize_query(&candidate);
        if !normalized.is_empty() && !queries.contains(&normalized) {
            queries.push(normalized);
        }
    }
    queries
}

fn is_rejected_title(title: &str) -> bool {
    let lowered = title.to_lowercase();
    lowered.is_empty() || REJECTED_TITLE_WORDS.iter().any(|word| lowered.contains(word))
}

/// First acceptable image, walking `hits` in relevance order.
pub fn pick_image(hits: &[MediaHit], infos: &[MediaInfo]) -> Option<String> {
    let by_id: HashMap<u64, &MediaInfo> = infos.iter().map(|info| (info.page_id, info)).collect();

    hits.iter().find_map(|hit| {
        let info = by_id.get(&hit.page_id)?;
        let title = if info.title.is_empty() {
            hit.title.as_str()
        } else {
            info.title.as_str()
        };
        if is_rejected_title(title) {
            return None;
        }
        let mime = info.mime.as_deref().unwrap_or_default();
        if !ACCEPTED_MIME.contains(&mime) {
            return None;
        }
        info.thumb_url
            .as_deref()
            .or(info.url.as_deref())
            .filter(|url| url.starts_with("https://"))
            .map(str::to_string)
    })
}

pub struct ImageResolver {
    media: Arc<dyn MediaSearch>,
}

impl ImageResolver {
    pub fn new(media: Arc<dyn MediaSearch>) -> Self {
        Self { media }
    }

    /// Tries each candidate query in turn. Provider failures count as "no
    /// result" for that query; `None` once every query is exhausted.
    pub async fn resolve(&self, hints: &ImageHints) -> Option<String> {
        for query in candidate_queries(hints) {
            match self.lookup(&query).await {
                Ok(Some(url)) => {
                    debug!(query = %query, url = %url, "image resolved");
                    return Some(url);
                }
                Ok(None) => {}
                Err(err) => warn!(query = %query, error = %err, "image search failed"),
            }
        }
        None
    }

    async fn lookup(&self, query: &str) -> ApplicationResult<Option<String>> {
        let hits = self.media.search(query, SEARCH_LIMIT).await?;
        if hits.is_empty() {
            return Ok(None);
        }
        let ids: Vec<u64> = hits.iter().map(|hit| hit.page_id).collect();
        let infos = self.media.describe(&ids).await?;
        Ok(pick_image(&hits, &infos))
    }
}
