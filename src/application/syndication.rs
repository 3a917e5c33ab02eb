//! Aggregation of external music-news feeds, plus translation and import of
//! single items into the newsroom.

use std::{sync::Arc, time::Duration};

use futures::future::join_all;
use serde::Deserialize;
use serde_json::Value;
use tokio::time::{Instant, timeout_at};
use tracing::{info, warn};

use crate::{
    application::{
        dto::{ArticleDto, FeedItemDto, FeedListingDto, TranslatedItemDto},
        error::{ApplicationError, ApplicationResult},
        generation::extract_json_object,
        images::{ImageHints, ImageResolver},
        ports::{
            feeds::{FEED_SOURCES, FeedReader, FeedSource, SyndicatedItem},
            language_model::{CompletionRequest, LanguageModel},
            time::Clock,
        },
        text::{non_blank, strip_markup, truncate_chars},
    },
    domain::{
        article::{
            ArticleContent, ArticleTitle, ArticleWriteRepository, DEFAULT_AUTHOR, NewArticle,
            services::ArticleSlugService,
        },
        taxonomy::{CategoryId, CategoryRepository},
    },
};

pub const DESCRIPTION_CHARS: usize = 300;
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Feed item chosen by an editor for import.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportFeedItemCommand {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    pub category_id: i64,
}

pub struct SyndicationService {
    reader: Arc<dyn FeedReader>,
    assistant: Arc<dyn LanguageModel>,
    images: Arc<ImageResolver>,
    write_repo: Arc<dyn ArticleWriteRepository>,
    category_repo: Arc<dyn CategoryRepository>,
    slug_service: Arc<ArticleSlugService>,
    clock: Arc<dyn Clock>,
    fetch_timeout: Duration,
}

impl SyndicationService {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        reader: Arc<dyn FeedReader>,
        assistant: Arc<dyn LanguageModel>,
        images: Arc<ImageResolver>,
        write_repo: Arc<dyn ArticleWriteRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        slug_service: Arc<ArticleSlugService>,
        clock: Arc<dyn Clock>,
        fetch_timeout: Duration,
    ) -> Self {
        Self {
            reader,
            assistant,
            images,
            write_repo,
            category_repo,
            slug_service,
            clock,
            fetch_timeout,
        }
    }

    /// Items from every configured source, or from the one whose name
    /// matches `source` ignoring case. Sources that fail or miss the shared
    /// deadline are skipped.
    pub async fn list(&self, source: Option<&str>) -> FeedListingDto {
        let wanted = source.map(str::trim).filter(|name| !name.is_empty());
        let sources: Vec<&FeedSource> = FEED_SOURCES
            .iter()
            .filter(|feed| wanted.is_none_or(|name| feed.name.eq_ignore_ascii_case(name)))
            .collect();

        let deadline = Instant::now() + self.fetch_timeout;
        let fetches = sources.iter().map(|feed| async move {
            match timeout_at(deadline, self.reader.fetch(feed)).await {
                Ok(Ok(items)) => items,
                Ok(Err(err)) => {
                    warn!(source = feed.name, error = %err, "feed fetch failed");
                    Vec::new()
                }
                Err(_) => {
                    warn!(source = feed.name, "feed fetch timed out");
                    Vec::new()
                }
            }
        });

        let mut items: Vec<SyndicatedItem> =
            join_all(fetches).await.into_iter().flatten().collect();
        for item in &mut items {
            item.description = truncate_chars(&strip_markup(&item.description), DESCRIPTION_CHARS);
        }
        sort_newest_first(&mut items);

        FeedListingDto {
            articles: items.into_iter().map(FeedItemDto::from).collect(),
            sources: FEED_SOURCES.iter().map(|feed| feed.name.to_string()).collect(),
        }
    }

    /// Turkish rendition of an English headline and summary.
    pub async fn translate_item(
        &self,
        title: &str,
        description: &str,
    ) -> ApplicationResult<TranslatedItemDto> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ApplicationError::validation("title is required"));
        }
        let description = description.trim();
        let answer = self
            .assistant
            .complete(translation_request(title, description))
            .await?;
        parse_translation(&answer, title, description)
    }

    /// Translates the item and stores it as an unpublished draft.
    pub async fn import_item(
        &self,
        command: ImportFeedItemCommand,
    ) -> ApplicationResult<ArticleDto> {
        let category_id = CategoryId::new(command.category_id)?;
        let category = self
            .category_repo
            .find_by_id(category_id)
            .await?
            .ok_or_else(|| {
                ApplicationError::validation(format!("unknown category {}", category_id.0))
            })?;

        let original_description = strip_markup(&command.description);
        let translated = self
            .translate_item(&command.title, &original_description)
            .await?;

        let mut body = if translated.description.trim().is_empty() {
            translated.title.clone()
        } else {
            translated.description.clone()
        };
        if let Some(link) = non_blank(command.link.clone()) {
            let source = non_blank(command.source.clone()).unwrap_or_else(|| "Kaynak".to_string());
            body.push_str(&format!("\n\nKaynak: {source} ({link})"));
        }

        let title = ArticleTitle::new(translated.title)?;
        let content = ArticleContent::new(body)?;
        let slug = self
            .slug_service
            .generate_unique_slug(title.as_str(), None)
            .await?;

        let image_url = match non_blank(command.image_url) {
            Some(url) => Some(url),
            None => {
                let hints = ImageHints::for_title(command.title.trim())
                    .with_category(category.name.clone());
                self.images.resolve(&hints).await
            }
        };

        let excerpt = truncate_chars(&translated.description, DESCRIPTION_CHARS);
        let now = self.clock.now();
        let article = NewArticle {
            read_time: content.estimated_read_time(),
            title,
            title_en: Some(command.title.trim().to_string()),
            slug,
            content,
            content_en: non_blank(Some(original_description.clone())),
            excerpt,
            excerpt_en: non_blank(Some(truncate_chars(&original_description, DESCRIPTION_CHARS))),
            image_url,
            author: DEFAULT_AUTHOR.to_string(),
            published: false,
            featured: false,
            editors_pick: false,
            category_id: category.id,
            tag_ids: Vec::new(),
            created_at: now,
            updated_at: now,
        };

        let saved = self.write_repo.insert(article).await?;
        info!(slug = %saved.slug, source = ?command.source, "feed item imported as draft");
        Ok(saved.into())
    }
}

fn sort_newest_first(items: &mut [SyndicatedItem]) {
    items.sort_by(|a, b| match (a.published_at, b.published_at) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });
}

fn translation_request(title: &str, description: &str) -> CompletionRequest {
    let mut prompt = String::from(
        "Sen profesyonel bir müzik gazetecisisin. Aşağıdaki İngilizce müzik haberini Türkçe'ye çevir.\n\n\
Kurallar:\n\
- Doğal ve akıcı Türkçe kullan\n\
- Sanatçı ve şarkı isimlerini orijinal İngilizce halleriyle bırak\n\
- Müzik terminolojisini uygun Türkçe karşılıklarıyla kullan\n\
- Sadece JSON formatında yanıt ver, başka hiçbir şey yazma\n\n",
    );
    prompt.push_str(&format!("Başlık: {title}\n"));
    if !description.is_empty() {
        prompt.push_str(&format!("İçerik: {description}\n"));
    }
    prompt.push_str(
        "\nJSON formatında yanıt ver:\n{\"title\": \"çevrilmiş başlık\", \"description\": \"çevrilmiş içerik\"}",
    );
    CompletionRequest::new(prompt)
}

fn parse_translation(
    answer: &str,
    title: &str,
    description: &str,
) -> ApplicationResult<TranslatedItemDto> {
    let Some(span) = extract_json_object(answer) else {
        return Err(ApplicationError::malformed("Translation format error", answer));
    };
    let value: Value = serde_json::from_str(span)
        .map_err(|_| ApplicationError::malformed("Translation format error", answer))?;

    let field = |name: &str| {
        value
            .get(name)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(str::to_string)
    };

    Ok(TranslatedItemDto {
        title: field("title").unwrap_or_else(|| title.to_string()),
        description: field("description").unwrap_or_else(|| description.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn item(title: &str, day: Option<u32>) -> SyndicatedItem {
        SyndicatedItem {
            title: title.to_string(),
            description: String::new(),
            link: format!("https://example.com/{title}"),
            published_at: day.map(|d| Utc.with_ymd_and_hms(2024, 5, d, 12, 0, 0).unwrap()),
            source: "NME".to_string(),
            image_url: None,
        }
    }

    #[test]
    fn undated_items_sort_last() {
        let mut items = vec![item("a", Some(1)), item("b", None), item("c", Some(9))];
        sort_newest_first(&mut items);
        let titles: Vec<_> = items.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["c", "a", "b"]);
    }

    #[test]
    fn translation_falls_back_to_the_originals() {
        let parsed = parse_translation(
            "Tabii! {\"title\": \"Yeni albüm\", \"description\": \"\"}",
            "New album",
            "Out now",
        )
        .unwrap();
        assert_eq!(parsed.title, "Yeni albüm");
        assert_eq!(parsed.description, "Out now");
    }

    #[test]
    fn reply_without_json_is_malformed() {
        let err = parse_translation("üzgünüm", "New album", "").unwrap_err();
        assert!(matches!(err, ApplicationError::MalformedResponse { .. }));
    }

    #[test]
    fn prompt_omits_missing_description() {
        let request = translation_request("New album", "");
        assert!(request.prompt.contains("Başlık: New album"));
        assert!(!request.prompt.contains("İçerik:"));
    }
}
