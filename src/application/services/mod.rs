// src/application/services/mod.rs
use std::{sync::Arc, time::Duration};

use crate::{
    application::{
        assist::AssistService,
        commands::{
            articles::ArticleCommandService, comments::CommentCommandService,
            taxonomy::TaxonomyCommandService,
        },
        generation::ContentGenerationService,
        images::ImageResolver,
        ports::{
            feeds::FeedReader, language_model::LanguageModel, media::MediaSearch, time::Clock,
            util::SlugGenerator,
        },
        publishing::PublishingService,
        queries::{
            articles::ArticleQueryService, pages::PageQueryService, taxonomy::TaxonomyQueryService,
        },
        site::SiteUrl,
        syndication::SyndicationService,
    },
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository, services::ArticleSlugService},
        comment::CommentRepository,
        taxonomy::{CategoryRepository, TagRepository},
    },
};

/// Storage adapters shared by every service.
#[derive(Clone)]
pub struct Repositories {
    pub article_write: Arc<dyn ArticleWriteRepository>,
    pub article_read: Arc<dyn ArticleReadRepository>,
    pub categories: Arc<dyn CategoryRepository>,
    pub tags: Arc<dyn TagRepository>,
    pub comments: Arc<dyn CommentRepository>,
}

/// Outbound integrations. `writer` drafts articles; `assistant` translates
/// and edits text.
#[derive(Clone)]
pub struct ExternalPorts {
    pub writer: Arc<dyn LanguageModel>,
    pub assistant: Arc<dyn LanguageModel>,
    pub media: Arc<dyn MediaSearch>,
    pub feeds: Arc<dyn FeedReader>,
}

pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub comment_commands: Arc<CommentCommandService>,
    pub taxonomy_commands: Arc<TaxonomyCommandService>,
    pub taxonomy_queries: Arc<TaxonomyQueryService>,
    pub pages: Arc<PageQueryService>,
    pub generation: Arc<ContentGenerationService>,
    pub assist: Arc<AssistService>,
    pub syndication: Arc<SyndicationService>,
    pub publishing: Arc<PublishingService>,
    clock: Arc<dyn Clock>,
}

impl ApplicationServices {
    pub fn new(
        repos: Repositories,
        ports: ExternalPorts,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
        site: SiteUrl,
        feed_timeout: Duration,
    ) -> Self {
        let slug_service = Arc::new(ArticleSlugService::new(
            Arc::clone(&repos.article_read),
            Arc::clone(&slugger),
        ));
        let images = Arc::new(ImageResolver::new(Arc::clone(&ports.media)));

        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&repos.article_write),
            Arc::clone(&repos.article_read),
            Arc::clone(&repos.categories),
            Arc::clone(&slug_service),
            Arc::clone(&clock),
        ));

        let article_queries = Arc::new(ArticleQueryService::new(
            Arc::clone(&repos.article_read),
            Arc::clone(&repos.comments),
        ));

        let comment_commands = Arc::new(CommentCommandService::new(
            Arc::clone(&repos.comments),
            Arc::clone(&repos.article_read),
            Arc::clone(&clock),
        ));

        let taxonomy_commands = Arc::new(TaxonomyCommandService::new(
            Arc::clone(&repos.categories),
            Arc::clone(&repos.tags),
        ));
        let taxonomy_queries = Arc::new(TaxonomyQueryService::new(
            Arc::clone(&repos.categories),
            Arc::clone(&repos.tags),
        ));

        let pages = Arc::new(PageQueryService::new(
            Arc::clone(&repos.article_read),
            Arc::clone(&repos.categories),
            Arc::clone(&repos.tags),
            Arc::clone(&repos.comments),
            site.clone(),
        ));

        let generation = Arc::new(ContentGenerationService::new(
            Arc::clone(&ports.writer),
            Arc::clone(&repos.article_write),
            Arc::clone(&repos.article_read),
            Arc::clone(&repos.categories),
            Arc::clone(&slug_service),
            Arc::clone(&images),
            Arc::clone(&clock),
        ));

        let assist = Arc::new(AssistService::new(Arc::clone(&ports.assistant)));

        let syndication = Arc::new(SyndicationService::new(
            Arc::clone(&ports.feeds),
            Arc::clone(&ports.assistant),
            images,
            Arc::clone(&repos.article_write),
            Arc::clone(&repos.categories),
            slug_service,
            Arc::clone(&clock),
            feed_timeout,
        ));

        let publishing = Arc::new(PublishingService::new(
            Arc::clone(&repos.article_read),
            Arc::clone(&repos.categories),
            site,
        ));

        Self {
            article_commands,
            article_queries,
            comment_commands,
            taxonomy_commands,
            taxonomy_queries,
            pages,
            generation,
            assist,
            syndication,
            publishing,
            clock,
        }
    }

    pub fn clock(&self) -> Arc<dyn Clock> {
        Arc::clone(&self.clock)
    }
}
