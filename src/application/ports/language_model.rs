use crate::application::ApplicationResult;
use async_trait::async_trait;

/// Single-turn completion request sent to a text generation provider.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub system: Option<String>,
    pub prompt: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl CompletionRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            system: None,
            prompt: prompt.into(),
            temperature: 0.7,
            max_tokens: 2048,
        }
    }

    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}

/// Text generation provider.
///
/// Implementations report a missing key as
/// [`ApplicationError::UpstreamUnavailable`](crate::application::error::ApplicationError::UpstreamUnavailable)
/// and a non-success status as `Upstream` with the response body attached.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Short provider name used in logs.
    fn provider(&self) -> &'static str;

    async fn complete(&self, request: CompletionRequest) -> ApplicationResult<String>;
}
