use std::sync::Arc;

use crate::{
    application::{
        dto::{BootstrapDto, CategoryDto, TagDto},
        error::ApplicationResult,
    },
    domain::taxonomy::{CategoryRepository, NewCategory, NewTag, TagRepository},
};
use tracing::info;

/// `(name, English name, slug, colour)`.
pub const DEFAULT_CATEGORIES: &[(&str, &str, &str, &str)] = &[
    ("Haber", "News", "haber", "#d97706"),
    ("Tur", "Tour", "tur", "#dc2626"),
    ("İnceleme", "Review", "inceleme", "#7c3aed"),
    ("Röportaj", "Interview", "roportaj", "#059669"),
    ("Ekipman", "Gear", "ekipman", "#2563eb"),
    ("Derinlemesine", "Deep Dive", "derinlemesine", "#d946ef"),
];

/// `(name, slug)`.
pub const DEFAULT_TAGS: &[(&str, &str)] = &[
    ("Vinil", "vinil"),
    ("Festival", "festival"),
    ("Analog", "analog"),
    ("Neo-Soul", "neo-soul"),
    ("Stüdyo", "studyo"),
    ("Pedalboard", "pedalboard"),
    ("Canlı Performans", "canli-performans"),
    ("Türkçe Müzik", "turkce-muzik"),
];

pub struct TaxonomyCommandService {
    category_repo: Arc<dyn CategoryRepository>,
    tag_repo: Arc<dyn TagRepository>,
}

impl TaxonomyCommandService {
    pub fn new(
        category_repo: Arc<dyn CategoryRepository>,
        tag_repo: Arc<dyn TagRepository>,
    ) -> Self {
        Self {
            category_repo,
            tag_repo,
        }
    }

    /// Upserts the default categories and tags; safe to call repeatedly.
    pub async fn bootstrap(&self) -> ApplicationResult<BootstrapDto> {
        for (name, name_en, slug, color) in DEFAULT_CATEGORIES {
            let category = NewCategory::new(*name, *slug, *color)?.with_name_en(*name_en);
            self.category_repo.upsert(category).await?;
        }
        for (name, slug) in DEFAULT_TAGS {
            self.tag_repo.upsert(NewTag::new(*name, *slug)?).await?;
        }

        let categories: Vec<CategoryDto> = self
            .category_repo
            .list_with_counts()
            .await?
            .into_iter()
            .map(|entry| entry.category.into())
            .collect();
        let tags: Vec<TagDto> = self
            .tag_repo
            .list_with_counts()
            .await?
            .into_iter()
            .map(|entry| entry.tag.into())
            .collect();

        info!(
            categories = categories.len(),
            tags = tags.len(),
            "taxonomy bootstrapped"
        );
        Ok(BootstrapDto {
            ok: true,
            categories,
            tags,
        })
    }
}
