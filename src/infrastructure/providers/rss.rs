use std::{sync::LazyLock, time::Duration};

use async_trait::async_trait;
use feed_rs::model::Entry;
use regex::Regex;
use tracing::debug;

use super::{build_client, status_error, transport_error};
use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::feeds::{FeedReader, FeedSource, SyndicatedItem},
    text::strip_markup,
};

const USER_AGENT: &str = "BenDinledim/1.0 (Music News Aggregator)";
/// Per-request ceiling; the aggregation deadline is usually shorter.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

static INLINE_IMAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<img[^>]+src=["']([^"']+)["']"#).expect("inline image pattern compiles")
});

/// Fetches and parses RSS or Atom documents.
pub struct HttpFeedReader {
    client: reqwest::Client,
}

impl HttpFeedReader {
    pub fn new() -> reqwest::Result<Self> {
        Ok(Self {
            client: build_client(USER_AGENT, REQUEST_TIMEOUT)?,
        })
    }
}

/// Parses a feed document into items attributed to `source`. Entries
/// without a title are dropped.
pub fn parse_feed(body: &[u8], source: &str) -> ApplicationResult<Vec<SyndicatedItem>> {
    let feed = feed_rs::parser::parse(body).map_err(|err| {
        ApplicationError::malformed(
            format!("{source} feed could not be parsed"),
            err.to_string(),
        )
    })?;
    Ok(feed
        .entries
        .into_iter()
        .filter_map(|entry| to_item(entry, source))
        .collect())
}

fn to_item(entry: Entry, source: &str) -> Option<SyndicatedItem> {
    let title = entry
        .title
        .as_ref()
        .map(|text| strip_markup(&text.content))
        .filter(|title| !title.is_empty())?;
    let link = entry
        .links
        .first()
        .map(|link| link.href.trim().to_string())
        .unwrap_or_default();
    let body = entry.content.as_ref().and_then(|content| content.body.clone());
    let description = entry
        .summary
        .as_ref()
        .map(|text| text.content.clone())
        .or_else(|| body.clone())
        .unwrap_or_default();
    let image_url = entry_image(&entry, body.as_deref().unwrap_or(&description));

    Some(SyndicatedItem {
        title,
        description,
        link,
        published_at: entry.published.or(entry.updated),
        source: source.to_string(),
        image_url,
    })
}

/// Inline `<img>` first, then media content or enclosures, then thumbnails.
fn entry_image(entry: &Entry, markup: &str) -> Option<String> {
    if let Some(src) = INLINE_IMAGE
        .captures(markup)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
    {
        return Some(src);
    }
    let media_content = entry
        .media
        .iter()
        .flat_map(|media| media.content.iter())
        .find_map(|content| content.url.as_ref().map(ToString::to_string));
    if media_content.is_some() {
        return media_content;
    }
    entry
        .media
        .iter()
        .flat_map(|media| media.thumbnails.iter())
        .map(|thumb| thumb.image.uri.clone())
        .find(|uri| !uri.trim().is_empty())
}

#[async_trait]
impl FeedReader for HttpFeedReader {
    async fn fetch(&self, source: &FeedSource) -> ApplicationResult<Vec<SyndicatedItem>> {
        let response = self
            .client
            .get(source.url)
            .send()
            .await
            .map_err(|err| transport_error(source.name, &err))?;
        if !response.status().is_success() {
            return Err(status_error(source.name, response).await);
        }
        let body = response
            .bytes()
            .await
            .map_err(|err| transport_error(source.name, &err))?;
        let items = parse_feed(&body, source.name)?;
        debug!(source = source.name, items = items.len(), "feed fetched");
        Ok(items)
    }
}
