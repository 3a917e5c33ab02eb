// src/config.rs
use std::{env, time::Duration};
use thiserror::Error;

use crate::application::{site::SiteUrl, syndication::DEFAULT_FETCH_TIMEOUT};
use crate::infrastructure::providers::{gemini, openai};

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: String,
    listen_addr: String,
    site_url: String,
    admin_username: Option<String>,
    admin_password: Option<String>,
    openai_api_key: Option<String>,
    openai_model: String,
    gemini_api_key: Option<String>,
    gemini_model: String,
    production: bool,
    admin_dashboard_enabled: bool,
    rate_limit_enabled: bool,
    rss_fetch_timeout: Duration,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_database_url() -> String {
    "sqlite://bendinledim.db?mode=rwc".into()
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_flag(
    key: &'static str,
    value: Option<String>,
    default: bool,
) -> Result<bool, ConfigError> {
    let Some(value) = non_empty(value) else {
        return Ok(default);
    };
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::Invalid(format!("{key} must be a boolean, got `{other}`"))),
    }
}

impl AppConfig {
    /// Build configuration from environment variables, after loading `.env`
    /// when present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] over an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = non_empty(lookup("DATABASE_URL")).unwrap_or_else(default_database_url);
        let listen_addr = non_empty(lookup("LISTEN_ADDR")).unwrap_or_else(default_listen_addr);
        let site_url = non_empty(lookup("SITE_URL"))
            .or_else(|| non_empty(lookup("NEXT_PUBLIC_SITE_URL")))
            .unwrap_or_else(|| SiteUrl::DEFAULT.to_string());

        let production = non_empty(lookup("APP_ENV"))
            .is_some_and(|value| value.eq_ignore_ascii_case("production"));
        let admin_dashboard_enabled =
            parse_flag("ENABLE_ADMIN_DASHBOARD", lookup("ENABLE_ADMIN_DASHBOARD"), false)?;
        let rate_limit_enabled =
            parse_flag("RATE_LIMIT_ENABLED", lookup("RATE_LIMIT_ENABLED"), true)?;

        let rss_fetch_timeout = match non_empty(lookup("RSS_FETCH_TIMEOUT_SECS")) {
            None => DEFAULT_FETCH_TIMEOUT,
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(ConfigError::Invalid(format!(
                        "RSS_FETCH_TIMEOUT_SECS must be a positive integer, got `{raw}`"
                    )));
                }
            },
        };

        Ok(Self {
            database_url,
            listen_addr,
            site_url,
            admin_username: non_empty(lookup("ADMIN_USERNAME")),
            admin_password: non_empty(lookup("ADMIN_PASSWORD")),
            openai_api_key: non_empty(lookup("OPENAI_API_KEY")),
            openai_model: non_empty(lookup("OPENAI_MODEL"))
                .unwrap_or_else(|| openai::DEFAULT_MODEL.to_string()),
            gemini_api_key: non_empty(lookup("GEMINI_API_KEY")),
            gemini_model: non_empty(lookup("GEMINI_MODEL"))
                .unwrap_or_else(|| gemini::DEFAULT_MODEL.to_string()),
            production,
            admin_dashboard_enabled,
            rate_limit_enabled,
            rss_fetch_timeout,
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn site_url(&self) -> SiteUrl {
        SiteUrl::new(self.site_url.clone())
    }

    pub fn admin_username(&self) -> Option<&str> {
        self.admin_username.as_deref()
    }

    pub fn admin_password(&self) -> Option<&str> {
        self.admin_password.as_deref()
    }

    pub fn openai_api_key(&self) -> Option<String> {
        self.openai_api_key.clone()
    }

    pub fn openai_model(&self) -> &str {
        &self.openai_model
    }

    pub fn gemini_api_key(&self) -> Option<String> {
        self.gemini_api_key.clone()
    }

    pub fn gemini_model(&self) -> &str {
        &self.gemini_model
    }

    pub fn is_production(&self) -> bool {
        self.production
    }

    pub fn admin_dashboard_enabled(&self) -> bool {
        self.admin_dashboard_enabled
    }

    pub fn rate_limit_enabled(&self) -> bool {
        self.rate_limit_enabled
    }

    pub fn rss_fetch_timeout(&self) -> Duration {
        self.rss_fetch_timeout
    }
}
