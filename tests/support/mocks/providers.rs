// tests/support/mocks/providers.rs
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use bendinledim::application::{
    ApplicationError, ApplicationResult,
    ports::{
        feeds::{FeedReader, FeedSource, SyndicatedItem},
        language_model::{CompletionRequest, LanguageModel},
        media::{MediaHit, MediaInfo, MediaSearch},
    },
};
use chrono::{DateTime, Utc};

enum Reply {
    Text(String),
    Unavailable,
}

/// Language model that answers from a queue of canned replies and records
/// every request it receives. The last reply repeats once the queue runs dry.
pub struct FakeLanguageModel {
    replies: Mutex<VecDeque<Reply>>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl FakeLanguageModel {
    pub fn replying(text: impl Into<String>) -> Self {
        Self::with_replies([text.into()])
    }

    pub fn with_replies<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            replies: Mutex::new(replies.into_iter().map(|r| Reply::Text(r.into())).collect()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Behaves like a provider without an API key.
    pub fn unavailable() -> Self {
        Self {
            replies: Mutex::new(VecDeque::from([Reply::Unavailable])),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.requests.lock().unwrap().last().map(|r| r.prompt.clone())
    }
}

#[async_trait]
impl LanguageModel for FakeLanguageModel {
    fn provider(&self) -> &'static str {
        "fake"
    }

    async fn complete(&self, request: CompletionRequest) -> ApplicationResult<String> {
        self.requests.lock().unwrap().push(request);
        let mut replies = self.replies.lock().unwrap();
        let reply = if replies.len() > 1 {
            replies.pop_front()
        } else {
            replies.front().map(|r| match r {
                Reply::Text(text) => Reply::Text(text.clone()),
                Reply::Unavailable => Reply::Unavailable,
            })
        };
        match reply {
            Some(Reply::Text(text)) => Ok(text),
            Some(Reply::Unavailable) => Err(ApplicationError::upstream_unavailable(
                "FAKE_API_KEY is not configured",
            )),
            None => Ok(String::new()),
        }
    }
}

pub const FAKE_IMAGE_URL: &str =
    "https://upload.wikimedia.org/wikipedia/commons/thumb/a/ab/Stage.jpg/1400px-Stage.jpg";

/// Media index that either finds one usable photo for every query or none.
pub struct FakeMedia {
    url: Option<String>,
    queries: Mutex<Vec<String>>,
}

impl FakeMedia {
    pub fn with_image() -> Self {
        Self {
            url: Some(FAKE_IMAGE_URL.to_string()),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn empty() -> Self {
        Self {
            url: None,
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl MediaSearch for FakeMedia {
    async fn search(&self, query: &str, _limit: u32) -> ApplicationResult<Vec<MediaHit>> {
        self.queries.lock().unwrap().push(query.to_string());
        Ok(self
            .url
            .iter()
            .map(|_| MediaHit {
                page_id: 7,
                title: "File:Stage.jpg".into(),
            })
            .collect())
    }

    async fn describe(&self, page_ids: &[u64]) -> ApplicationResult<Vec<MediaInfo>> {
        Ok(page_ids
            .iter()
            .filter_map(|id| {
                self.url.as_ref().map(|url| MediaInfo {
                    page_id: *id,
                    title: "File:Stage.jpg".into(),
                    mime: Some("image/jpeg".into()),
                    url: Some(url.clone()),
                    thumb_url: Some(url.clone()),
                })
            })
            .collect())
    }
}

enum SourceBehavior {
    Items(Vec<SyndicatedItem>),
    Fails,
    Hangs,
}

/// Feed reader keyed by source name. Sources without a configured behavior
/// return no items.
#[derive(Default)]
pub struct FakeFeedReader {
    sources: HashMap<&'static str, SourceBehavior>,
}

impl FakeFeedReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(mut self, source: &'static str, items: Vec<SyndicatedItem>) -> Self {
        self.sources.insert(source, SourceBehavior::Items(items));
        self
    }

    pub fn failing(mut self, source: &'static str) -> Self {
        self.sources.insert(source, SourceBehavior::Fails);
        self
    }

    pub fn hanging(mut self, source: &'static str) -> Self {
        self.sources.insert(source, SourceBehavior::Hangs);
        self
    }
}

#[async_trait]
impl FeedReader for FakeFeedReader {
    async fn fetch(&self, source: &FeedSource) -> ApplicationResult<Vec<SyndicatedItem>> {
        match self.sources.get(source.name) {
            Some(SourceBehavior::Items(items)) => Ok(items.clone()),
            Some(SourceBehavior::Fails) => Err(ApplicationError::upstream(
                format!("{} returned 503", source.name),
                "Service Unavailable",
            )),
            Some(SourceBehavior::Hangs) => {
                tokio::time::sleep(Duration::from_secs(30)).await;
                Ok(Vec::new())
            }
            None => Ok(Vec::new()),
        }
    }
}

pub fn feed_item(
    source: &str,
    title: &str,
    published_at: Option<DateTime<Utc>>,
) -> SyndicatedItem {
    SyndicatedItem {
        title: title.to_string(),
        description: format!("<p>{title} <b>details</b></p>"),
        link: format!(
            "https://{}.example/{}",
            source.to_lowercase().replace(' ', "-"),
            title.len()
        ),
        published_at,
        source: source.to_string(),
        image_url: None,
    }
}
