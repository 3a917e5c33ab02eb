use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{build_client, status_error, transport_error};
use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::language_model::{CompletionRequest, LanguageModel},
};

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
const CHAT_COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    #[serde(default)]
    content: Option<String>,
}

/// Chat-completions client. Without an API key every call fails with
/// `UpstreamUnavailable`.
pub struct OpenAiChatModel {
    client: reqwest::Client,
    api_key: Option<String>,
    model: String,
    endpoint: String,
}

impl OpenAiChatModel {
    pub fn new(api_key: Option<String>, model: impl Into<String>) -> reqwest::Result<Self> {
        Ok(Self {
            client: build_client(
                concat!("bendinledim/", env!("CARGO_PKG_VERSION")),
                REQUEST_TIMEOUT,
            )?,
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            model: model.into(),
            endpoint: CHAT_COMPLETIONS_URL.to_string(),
        })
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

#[async_trait]
impl LanguageModel for OpenAiChatModel {
    fn provider(&self) -> &'static str {
        "openai"
    }

    async fn complete(&self, request: CompletionRequest) -> ApplicationResult<String> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Err(ApplicationError::upstream_unavailable(
                "OPENAI_API_KEY is not configured",
            ));
        };

        let mut messages = Vec::with_capacity(2);
        if let Some(system) = request.system.as_deref() {
            messages.push(ChatMessage {
                role: "system",
                content: system,
            });
        }
        messages.push(ChatMessage {
            role: "user",
            content: &request.prompt,
        });
        let body = ChatRequest {
            model: &self.model,
            messages,
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };

        debug!(model = %self.model, "openai chat completion");
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|err| transport_error("OpenAI", &err))?;

        if !response.status().is_success() {
            return Err(status_error("OpenAI", response).await);
        }

        let raw = response
            .text()
            .await
            .map_err(|err| transport_error("OpenAI", &err))?;
        let parsed: ChatResponse = serde_json::from_str(&raw)
            .map_err(|_| ApplicationError::malformed("unexpected OpenAI response", raw.clone()))?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or_else(|| ApplicationError::malformed("empty AI response", raw))
    }
}
