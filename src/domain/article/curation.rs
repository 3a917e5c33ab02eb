//! Selection of home-page sections with artist and image diversity.
//!
//! A [`FeedCurator`] is shared by the hero, latest and editors' pick
//! sections of a single render so that an artist or an image shown in one
//! section is avoided in the next ones. Each selection runs three passes
//! over the candidates and only relaxes a constraint when the stricter
//! pass could not fill the requested number of slots.

use std::collections::HashSet;

use crate::domain::article::entity::Article;
use crate::domain::article::title;

/// Anything that can be placed in a curated section.
pub trait Curatable {
    fn title(&self) -> &str;
    fn slug(&self) -> &str;
    fn image_url(&self) -> Option<&str>;
}

impl Curatable for Article {
    fn title(&self) -> &str {
        self.title.as_str()
    }

    fn slug(&self) -> &str {
        self.slug.as_str()
    }

    fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }
}

pub fn artist_key(item: &impl Curatable) -> Option<String> {
    title::artist_key(item.title())
}

/// Image URL without its query string; `None` when nothing is left.
pub fn image_key(url: Option<&str>) -> Option<String> {
    let url = url?.trim();
    let base = url.split('?').next().unwrap_or(url).trim();
    (!base.is_empty()).then(|| base.to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pass {
    Strict,
    AllowRepeatedImages,
    AllowAnything,
}

impl Pass {
    const ORDER: [Self; 3] = [Self::Strict, Self::AllowRepeatedImages, Self::AllowAnything];

    fn checks_artist(self) -> bool {
        !matches!(self, Self::AllowAnything)
    }

    fn checks_image(self) -> bool {
        matches!(self, Self::Strict)
    }
}

#[derive(Debug, Default, Clone)]
pub struct FeedCurator {
    seen_artists: HashSet<String>,
    seen_images: HashSet<String>,
}

impl FeedCurator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from keys already shown elsewhere. Artist keys are lower-cased
    /// and image keys lose their query string.
    pub fn with_seen<A, I>(artists: A, images: I) -> Self
    where
        A: IntoIterator,
        A::Item: AsRef<str>,
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let seen_artists = artists
            .into_iter()
            .map(|artist| artist.as_ref().trim().to_lowercase())
            .filter(|artist| !artist.is_empty())
            .collect();
        let seen_images = images
            .into_iter()
            .filter_map(|image| image_key(Some(image.as_ref())))
            .collect();
        Self {
            seen_artists,
            seen_images,
        }
    }

    /// Marks an item as shown without selecting it.
    pub fn observe(&mut self, item: &impl Curatable) {
        self.record(artist_key(item), image_key(item.image_url()));
    }

    pub fn has_seen_artist(&self, key: &str) -> bool {
        self.seen_artists.contains(key)
    }

    pub fn has_seen_image(&self, key: &str) -> bool {
        self.seen_images.contains(key)
    }

    /// Picks up to `limit` candidates, preserving candidate order within
    /// each pass and concatenating passes strict first.
    ///
    /// Every pick is recorded, so later calls on the same curator avoid the
    /// artists and images chosen here.
    pub fn select<T: Curatable + Clone>(&mut self, candidates: &[T], limit: usize) -> Vec<T> {
        if limit == 0 || candidates.is_empty() {
            return Vec::new();
        }

        let keyed: Vec<(&T, Option<String>, Option<String>)> = candidates
            .iter()
            .map(|candidate| {
                (
                    candidate,
                    artist_key(candidate),
                    image_key(candidate.image_url()),
                )
            })
            .collect();

        let mut taken: HashSet<&str> = HashSet::new();
        let mut picked: Vec<&T> = Vec::with_capacity(limit.min(candidates.len()));

        for pass in Pass::ORDER {
            for (candidate, artist, image) in &keyed {
                if picked.len() >= limit {
                    break;
                }
                if taken.contains(candidate.slug()) {
                    continue;
                }
                if pass.checks_artist()
                    && artist.as_ref().is_some_and(|key| self.seen_artists.contains(key))
                {
                    continue;
                }
                if pass.checks_image()
                    && image.as_ref().is_some_and(|key| self.seen_images.contains(key))
                {
                    continue;
                }

                taken.insert(candidate.slug());
                self.record(artist.clone(), image.clone());
                picked.push(*candidate);
            }
        }

        picked.into_iter().cloned().collect()
    }

    fn record(&mut self, artist: Option<String>, image: Option<String>) {
        if let Some(artist) = artist {
            self.seen_artists.insert(artist);
        }
        if let Some(image) = image {
            self.seen_images.insert(image);
        }
    }
}
