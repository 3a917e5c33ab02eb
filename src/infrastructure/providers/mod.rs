//! HTTP adapters for the outbound ports.

pub mod commons;
pub mod gemini;
pub mod openai;
pub mod rss;

use std::time::Duration;

pub use commons::CommonsMediaSearch;
pub use gemini::GeminiModel;
pub use openai::OpenAiChatModel;
pub use rss::HttpFeedReader;

use crate::application::error::ApplicationError;

pub(crate) fn build_client(
    user_agent: &str,
    timeout: Duration,
) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(user_agent)
        .timeout(timeout)
        .build()
}

/// Transport failures surface as upstream errors carrying the reqwest message.
pub(crate) fn transport_error(provider: &str, err: &reqwest::Error) -> ApplicationError {
    if err.is_timeout() {
        ApplicationError::upstream(format!("{provider} request timed out"), err.to_string())
    } else {
        ApplicationError::upstream(format!("{provider} request failed"), err.to_string())
    }
}

/// Reads a non-success response body into an upstream error.
pub(crate) async fn status_error(provider: &str, response: reqwest::Response) -> ApplicationError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    ApplicationError::upstream(format!("{provider} API error ({status})"), body)
}
