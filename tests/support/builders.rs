// tests/support/builders.rs
use std::sync::Arc;

use bendinledim::{
    application::{
        ports::{
            feeds::FeedReader, language_model::LanguageModel, media::MediaSearch, time::Clock,
            util::SlugGenerator,
        },
        services::{ApplicationServices, ExternalPorts, Repositories},
        site::SiteUrl,
    },
    domain::{
        article::{
            Article, ArticleContent, ArticleSlug, ArticleTitle, ArticleWriteRepository,
            NewArticle,
        },
        taxonomy::{Category, CategoryRepository, NewCategory, NewTag, Tag, TagId, TagRepository},
    },
    infrastructure::util::DefaultSlugGenerator,
    presentation::http::{middleware::AccessPolicy, state::HttpState},
};
use chrono::{DateTime, Duration, Utc};
use std::time::Duration as StdDuration;

use super::mocks::{
    FakeFeedReader, FakeLanguageModel, FakeMedia, FixedClock, InMemoryStore, fixed_now,
};

pub const ADMIN_USER: &str = "editor";
pub const ADMIN_PASSWORD: &str = "s3cret";
pub const SITE: &str = "https://bendinledim.test";

/// Everything a test needs to drive the services and inspect their effects.
pub struct TestApp {
    pub store: Arc<InMemoryStore>,
    pub writer: Arc<FakeLanguageModel>,
    pub assistant: Arc<FakeLanguageModel>,
    pub media: Arc<FakeMedia>,
    pub services: Arc<ApplicationServices>,
    pub state: HttpState,
}

pub struct TestAppBuilder {
    store: Arc<InMemoryStore>,
    writer: FakeLanguageModel,
    assistant: FakeLanguageModel,
    media: FakeMedia,
    feeds: FakeFeedReader,
    access: AccessPolicy,
    feed_timeout: StdDuration,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self {
            store: Arc::new(InMemoryStore::new()),
            writer: FakeLanguageModel::unavailable(),
            assistant: FakeLanguageModel::unavailable(),
            media: FakeMedia::empty(),
            feeds: FakeFeedReader::new(),
            access: AccessPolicy::new(Some(ADMIN_USER), Some(ADMIN_PASSWORD)),
            feed_timeout: StdDuration::from_secs(2),
        }
    }
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn writer(mut self, writer: FakeLanguageModel) -> Self {
        self.writer = writer;
        self
    }

    pub fn assistant(mut self, assistant: FakeLanguageModel) -> Self {
        self.assistant = assistant;
        self
    }

    pub fn media(mut self, media: FakeMedia) -> Self {
        self.media = media;
        self
    }

    pub fn feeds(mut self, feeds: FakeFeedReader) -> Self {
        self.feeds = feeds;
        self
    }

    pub fn access(mut self, access: AccessPolicy) -> Self {
        self.access = access;
        self
    }

    pub fn feed_timeout(mut self, timeout: StdDuration) -> Self {
        self.feed_timeout = timeout;
        self
    }

    pub fn build(self) -> TestApp {
        let store = self.store;
        let writer = Arc::new(self.writer);
        let assistant = Arc::new(self.assistant);
        let media = Arc::new(self.media);

        let repos = Repositories {
            article_write: store.clone(),
            article_read: store.clone(),
            categories: store.clone(),
            tags: store.clone(),
            comments: store.clone(),
        };
        let ports = ExternalPorts {
            writer: writer.clone() as Arc<dyn LanguageModel>,
            assistant: assistant.clone() as Arc<dyn LanguageModel>,
            media: media.clone() as Arc<dyn MediaSearch>,
            feeds: Arc::new(self.feeds) as Arc<dyn FeedReader>,
        };
        let clock: Arc<dyn Clock> = Arc::new(FixedClock);
        let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);

        let services = Arc::new(ApplicationServices::new(
            repos,
            ports,
            clock,
            slugger,
            SiteUrl::new(SITE),
            self.feed_timeout,
        ));
        let state = HttpState::new(Arc::clone(&services), self.access);

        TestApp {
            store,
            writer,
            assistant,
            media,
            services,
            state,
        }
    }
}

impl TestApp {
    pub fn router(&self) -> axum::Router {
        bendinledim::presentation::http::routes::build_router_with_rate_limiter(
            self.state.clone(),
            false,
        )
    }

    pub async fn category(&self, name: &str, slug: &str) -> Category {
        CategoryRepository::upsert(
            self.store.as_ref(),
            NewCategory::new(name, slug, "#6b7280").unwrap(),
        )
        .await
        .unwrap()
    }

    pub async fn tag(&self, name: &str, slug: &str) -> Tag {
        TagRepository::upsert(self.store.as_ref(), NewTag::new(name, slug).unwrap())
            .await
            .unwrap()
    }

    pub async fn article(&self, seed: ArticleSeed) -> Article {
        ArticleWriteRepository::insert(self.store.as_ref(), seed.build())
            .await
            .unwrap()
    }
}

/// Article inserted straight into the store, bypassing the services.
#[derive(Debug, Clone)]
pub struct ArticleSeed {
    title: String,
    slug: String,
    content: String,
    category: Category,
    tags: Vec<TagId>,
    image_url: Option<String>,
    published: bool,
    featured: bool,
    editors_pick: bool,
    created_at: DateTime<Utc>,
}

impl ArticleSeed {
    pub fn new(title: &str, slug: &str, category: &Category) -> Self {
        Self {
            title: title.to_string(),
            slug: slug.to_string(),
            content: format!("{title} hakkında ilk paragraf.\n\nİkinci paragraf."),
            category: category.clone(),
            tags: Vec::new(),
            image_url: None,
            published: true,
            featured: false,
            editors_pick: false,
            created_at: fixed_now(),
        }
    }

    pub fn draft(mut self) -> Self {
        self.published = false;
        self
    }

    pub fn featured(mut self) -> Self {
        self.featured = true;
        self
    }

    pub fn editors_pick(mut self) -> Self {
        self.editors_pick = true;
        self
    }

    pub fn image(mut self, url: &str) -> Self {
        self.image_url = Some(url.to_string());
        self
    }

    pub fn tagged(mut self, tag: &Tag) -> Self {
        self.tags.push(tag.id);
        self
    }

    pub fn content(mut self, content: &str) -> Self {
        self.content = content.to_string();
        self
    }

    /// Shifts the creation time back by `minutes` from the fixed clock.
    pub fn minutes_ago(mut self, minutes: i64) -> Self {
        self.created_at = fixed_now() - Duration::minutes(minutes);
        self
    }

    pub fn build(self) -> NewArticle {
        NewArticle {
            title: ArticleTitle::new(self.title.clone()).unwrap(),
            title_en: None,
            slug: ArticleSlug::new(self.slug).unwrap(),
            content: ArticleContent::new(self.content).unwrap(),
            content_en: None,
            excerpt: format!("{} özeti", self.title),
            excerpt_en: None,
            image_url: self.image_url,
            author: "Editör Ekibi".into(),
            read_time: 3,
            published: self.published,
            featured: self.featured,
            editors_pick: self.editors_pick,
            category_id: self.category.id,
            tag_ids: self.tags,
            created_at: self.created_at,
            updated_at: self.created_at,
        }
    }
}
