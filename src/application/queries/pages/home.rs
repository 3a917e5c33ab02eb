use std::collections::HashSet;

use super::{PageQueryService, structured_data};
use crate::{
    application::{dto::HomeFeedDto, error::ApplicationResult},
    domain::article::{Article, ArticleFilter, FeedCurator},
};
use tracing::debug;

pub const HERO_SLOTS: usize = 1;
pub const LATEST_SLOTS: usize = 8;
pub const EDITORS_PICK_SLOTS: usize = 4;
/// Candidates fetched per slot so the curator has room to skip repeats.
pub const OVERFETCH_FACTOR: usize = 3;

impl PageQueryService {
    /// Hero, latest news and editors' picks, curated with one shared
    /// curator so a section does not repeat an artist or an image shown
    /// above it.
    pub async fn home(&self) -> ApplicationResult<HomeFeedDto> {
        let mut curator = FeedCurator::new();

        let featured = self
            .newest(
                &ArticleFilter::published().featured(true),
                HERO_SLOTS * OVERFETCH_FACTOR,
            )
            .await?;
        let hero = curator.select(&featured, HERO_SLOTS).into_iter().next();

        let latest_pool = self
            .newest(
                &ArticleFilter::published().featured(false),
                LATEST_SLOTS * OVERFETCH_FACTOR,
            )
            .await?;
        let latest = curator.select(&latest_pool, LATEST_SLOTS);

        let shown: HashSet<&str> = hero
            .iter()
            .chain(latest.iter())
            .map(|article| article.slug.as_str())
            .collect();
        let picks_pool: Vec<Article> = self
            .newest(
                &ArticleFilter::published().editors_pick(true),
                EDITORS_PICK_SLOTS * OVERFETCH_FACTOR,
            )
            .await?
            .into_iter()
            .filter(|article| !shown.contains(article.slug.as_str()))
            .collect();
        let editors_picks = curator.select(&picks_pool, EDITORS_PICK_SLOTS);

        debug!(
            hero = hero.is_some(),
            latest = latest.len(),
            editors_picks = editors_picks.len(),
            "home feed curated"
        );

        let structured_data = structured_data::item_list(&self.site, hero.as_ref(), &latest);
        Ok(HomeFeedDto {
            hero: hero.map(Into::into),
            latest: latest.into_iter().map(Into::into).collect(),
            editors_picks: editors_picks.into_iter().map(Into::into).collect(),
            structured_data,
        })
    }
}
