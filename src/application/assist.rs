//! Editorial helpers backed by the assistant language model.

use std::{str::FromStr, sync::Arc};

use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::language_model::{CompletionRequest, LanguageModel},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TargetLanguage {
    #[default]
    En,
    Tr,
}

impl TargetLanguage {
    fn english_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Tr => "Turkish",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum WritingStyle {
    #[default]
    News,
    Review,
    Interview,
    Opinion,
}

impl WritingStyle {
    fn guide(self) -> &'static str {
        match self {
            Self::News => "haber yazısı formatında, objektif ve bilgilendirici",
            Self::Review => "müzik inceleme formatında, detaylı ve eleştirel",
            Self::Interview => "röportaj formatında, akıcı ve ilgi çekici",
            Self::Opinion => "köşe yazısı formatında, kişisel ve düşündürücü",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssistAction {
    Translate(TargetLanguage),
    Complete(WritingStyle),
    Improve,
    Excerpt,
}

impl AssistAction {
    /// Builds an action from its wire name and optional modifiers.
    pub fn parse(
        action: &str,
        target: Option<TargetLanguage>,
        style: Option<WritingStyle>,
    ) -> ApplicationResult<Self> {
        match action.trim() {
            "translate" => Ok(Self::Translate(target.unwrap_or_default())),
            "complete" => Ok(Self::Complete(style.unwrap_or_default())),
            "improve" => Ok(Self::Improve),
            "excerpt" => Ok(Self::Excerpt),
            other => Err(ApplicationError::validation(format!("invalid action `{other}`"))),
        }
    }

    fn prompt(self, text: &str) -> String {
        match self {
            Self::Translate(target) => format!(
                "Translate the following text to {}. Only return the translated text, nothing else:\n\n{text}",
                target.english_name()
            ),
            Self::Complete(style) => format!(
                "Sen bir müzik gazetecisisin. Aşağıdaki yarım kalmış Türkçe metni {} bir şekilde tamamla. \
Sadece devam eden metni yaz, baştan yazma:\n\n{text}",
                style.guide()
            ),
            Self::Improve => format!(
                "Sen bir müzik editörüsün. Aşağıdaki Türkçe metnin yazım hatalarını düzelt ve cümle yapısını \
geliştir; anlamı ve tonu koru. Sadece düzeltilmiş metni döndür:\n\n{text}"
            ),
            Self::Excerpt => format!(
                "Aşağıdaki makale içeriğinden 1-2 cümlelik kısa bir özet çıkar. Sadece özeti yaz:\n\n{text}"
            ),
        }
    }
}

impl FromStr for TargetLanguage {
    type Err = ApplicationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Self::En),
            "tr" => Ok(Self::Tr),
            other => Err(ApplicationError::validation(format!("unsupported language `{other}`"))),
        }
    }
}

pub struct AssistService {
    model: Arc<dyn LanguageModel>,
}

impl AssistService {
    pub fn new(model: Arc<dyn LanguageModel>) -> Self {
        Self { model }
    }

    pub async fn run(&self, action: AssistAction, text: &str) -> ApplicationResult<String> {
        if text.trim().is_empty() {
            return Err(ApplicationError::validation("text is required"));
        }
        debug!(?action, provider = self.model.provider(), "assist request");
        let answer = self
            .model
            .complete(CompletionRequest::new(action.prompt(text)))
            .await?;
        Ok(answer.trim().to_string())
    }

    pub async fn translate(&self, text: &str, target: TargetLanguage) -> ApplicationResult<String> {
        self.run(AssistAction::Translate(target), text).await
    }

    pub async fn complete(&self, text: &str, style: WritingStyle) -> ApplicationResult<String> {
        self.run(AssistAction::Complete(style), text).await
    }

    pub async fn improve(&self, text: &str) -> ApplicationResult<String> {
        self.run(AssistAction::Improve, text).await
    }

    pub async fn excerpt(&self, text: &str) -> ApplicationResult<String> {
        self.run(AssistAction::Excerpt, text).await
    }

    pub fn model(&self) -> Arc<dyn LanguageModel> {
        Arc::clone(&self.model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actions_parse_with_defaults() {
        assert_eq!(
            AssistAction::parse("translate", None, None).unwrap(),
            AssistAction::Translate(TargetLanguage::En)
        );
        assert_eq!(
            AssistAction::parse("complete", None, Some(WritingStyle::Review)).unwrap(),
            AssistAction::Complete(WritingStyle::Review)
        );
        assert!(matches!(
            AssistAction::parse("summon", None, None),
            Err(ApplicationError::Validation(_))
        ));
    }

    #[test]
    fn translate_prompt_names_the_language() {
        let prompt = AssistAction::Translate(TargetLanguage::Tr).prompt("Hello");
        assert!(prompt.contains("to Turkish"));
        assert!(prompt.ends_with("Hello"));
    }

    #[test]
    fn language_codes_parse_case_insensitively() {
        assert_eq!("TR".parse::<TargetLanguage>().unwrap(), TargetLanguage::Tr);
        assert!("de".parse::<TargetLanguage>().is_err());
    }
}
