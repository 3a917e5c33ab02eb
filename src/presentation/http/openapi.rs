// src/presentation/http/openapi.rs
use crate::presentation::http::controllers::{
    admin, articles, assist, comments, feeds, generation, public, syndication, taxonomy,
};
use axum::Router;
use serde::{Deserialize, Serialize};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        super::routes::health,
        public::home,
        public::article,
        public::category,
        public::tag,
        public::search,
        public::explore,
        comments::create_comment,
        syndication::list_feed_items,
        syndication::translate_item,
        syndication::import_item,
        feeds::rss,
        feeds::sitemap,
        feeds::robots,
        articles::list_articles,
        articles::create_article,
        articles::get_article,
        articles::update_article,
        articles::delete_article,
        articles::list_article_comments,
        articles::moderate_comment,
        taxonomy::list_categories,
        taxonomy::list_tags,
        taxonomy::bootstrap,
        generation::generate_articles,
        generation::recent_articles,
        generation::draft_article,
        assist::assist,
        admin::dashboard
    ),
    components(
        schemas(
            StatusResponse,
            MessageResponse,
            crate::presentation::http::error::ErrorResponse,
            articles::CreateArticleRequest,
            articles::UpdateArticleRequest,
            articles::ModerationRequest,
            comments::CreateCommentRequest,
            generation::GenerateRequest,
            generation::RecentArticlesResponse,
            generation::DraftRequest,
            generation::DraftResponse,
            assist::AssistRequest,
            assist::AssistResponse,
            syndication::TranslateItemRequest,
            syndication::ImportItemRequest,
            crate::application::assist::TargetLanguage,
            crate::application::assist::WritingStyle,
            crate::application::dto::ArticleDto,
            crate::application::dto::ArticleListDto,
            crate::application::dto::CommentDto,
            crate::application::dto::CategoryDto,
            crate::application::dto::CategoryCountDto,
            crate::application::dto::TagDto,
            crate::application::dto::TagCountDto,
            crate::application::dto::BootstrapDto,
            crate::application::dto::HomeFeedDto,
            crate::application::dto::ArticlePageDto,
            crate::application::dto::CategoryPageDto,
            crate::application::dto::TagPageDto,
            crate::application::dto::SearchResultsDto,
            crate::application::dto::ExploreDto,
            crate::application::dto::DashboardDto,
            crate::application::dto::GenerationReportDto,
            crate::application::dto::ArticleDraftDto,
            crate::application::dto::FeedItemDto,
            crate::application::dto::FeedListingDto,
            crate::application::dto::TranslatedItemDto
        )
    ),
    tags(
        (name = "Public", description = "Reader-facing pages"),
        (name = "Articles", description = "Article administration"),
        (name = "Comments", description = "Reader comments and moderation"),
        (name = "Taxonomy", description = "Categories and tags"),
        (name = "Generation", description = "Model-written articles"),
        (name = "Assist", description = "Editorial translation and rewriting"),
        (name = "Syndication", description = "External music news feeds"),
        (name = "Feeds", description = "RSS, sitemap and robots documents"),
        (name = "Admin", description = "Editorial dashboard"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    info(
        title = "Ben Dinledim API",
        description = "Music news content service",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        components.add_security_scheme(
            "basicAuth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Basic)),
        );
    }
}

/// Swagger UI at `/docs`, document at `/openapi.json`.
pub fn docs_router() -> Router {
    Router::new().merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
}
