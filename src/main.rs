use anyhow::Result;
use bendinledim::{
    application::{
        ports::{
            feeds::FeedReader, language_model::LanguageModel, media::MediaSearch, time::Clock,
            util::SlugGenerator,
        },
        services::{ApplicationServices, ExternalPorts, Repositories},
    },
    config::AppConfig,
    infrastructure::{
        database,
        providers::{CommonsMediaSearch, GeminiModel, HttpFeedReader, OpenAiChatModel},
        repositories::{
            SqliteArticleReadRepository, SqliteArticleWriteRepository, SqliteCategoryRepository,
            SqliteCommentRepository, SqliteTagRepository,
        },
        time::SystemClock,
        util::DefaultSlugGenerator,
    },
    presentation::http::{
        middleware::AccessPolicy,
        routes::build_router_with_rate_limiter,
        state::HttpState,
    },
};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;
    let pool = Arc::new(pool);

    let repos = Repositories {
        article_write: Arc::new(SqliteArticleWriteRepository::new(Arc::clone(&pool))),
        article_read: Arc::new(SqliteArticleReadRepository::new(Arc::clone(&pool))),
        categories: Arc::new(SqliteCategoryRepository::new(Arc::clone(&pool))),
        tags: Arc::new(SqliteTagRepository::new(Arc::clone(&pool))),
        comments: Arc::new(SqliteCommentRepository::new(Arc::clone(&pool))),
    };

    if config.openai_api_key().is_none() {
        tracing::warn!("OPENAI_API_KEY is not set; generation endpoints will fail");
    }
    if config.gemini_api_key().is_none() {
        tracing::warn!("GEMINI_API_KEY is not set; assist and feed translation will fail");
    }

    let writer: Arc<dyn LanguageModel> = Arc::new(OpenAiChatModel::new(
        config.openai_api_key(),
        config.openai_model(),
    )?);
    let assistant: Arc<dyn LanguageModel> = Arc::new(GeminiModel::new(
        config.gemini_api_key(),
        config.gemini_model(),
    )?);
    let media: Arc<dyn MediaSearch> = Arc::new(CommonsMediaSearch::new()?);
    let feeds: Arc<dyn FeedReader> = Arc::new(HttpFeedReader::new()?);

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);

    let services = Arc::new(ApplicationServices::new(
        repos,
        ExternalPorts {
            writer,
            assistant,
            media,
            feeds,
        },
        clock,
        slugger,
        config.site_url(),
        config.rss_fetch_timeout(),
    ));

    let access = AccessPolicy::new(config.admin_username(), config.admin_password())
        .with_production(config.is_production())
        .with_admin_dashboard(config.admin_dashboard_enabled());
    if !access.is_configured() {
        tracing::warn!("ADMIN_USERNAME / ADMIN_PASSWORD not set; protected routes answer 503");
    }

    let state = HttpState::new(services, access);
    let app = build_router_with_rate_limiter(state, config.rate_limit_enabled());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!(site = %config.site_url().base(), "listening on {address}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info,sqlx=warn"));

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
