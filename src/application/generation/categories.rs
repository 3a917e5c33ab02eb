use crate::domain::{errors::DomainResult, taxonomy::NewCategory};

/// Category slugs a single-article draft may be filed under.
pub const DRAFT_CATEGORY_SLUGS: &[&str] = &[
    "haber",
    "tur",
    "inceleme",
    "roportaj",
    "ekipman",
    "derinlemesine",
];

/// Display categories the bulk generator may answer with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationCategory {
    NewAlbums,
    Reviews,
    Interviews,
    Concerts,
    Festival,
    News,
}

impl GenerationCategory {
    pub const ALL: [Self; 6] = [
        Self::NewAlbums,
        Self::Reviews,
        Self::Interviews,
        Self::Concerts,
        Self::Festival,
        Self::News,
    ];

    /// Exact display name match; anything else files under [`Self::News`].
    pub fn from_display_name(name: &str) -> Self {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.display_name() == name)
            .unwrap_or(Self::News)
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::NewAlbums => "Yeni Albümler",
            Self::Reviews => "İncelemeler",
            Self::Interviews => "Röportajlar",
            Self::Concerts => "Konserler",
            Self::Festival => "Festival",
            Self::News => "Haberler",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Self::NewAlbums => "yeni-albumler",
            Self::Reviews => "incelemeler",
            Self::Interviews => "roportajlar",
            Self::Concerts => "konserler",
            Self::Festival => "festival",
            Self::News => "haberler",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Self::NewAlbums => "#8b5cf6",
            Self::Reviews => "#ec4899",
            Self::Interviews => "#3b82f6",
            Self::Concerts => "#22c55e",
            Self::Festival => "#f59e0b",
            Self::News => "#d97706",
        }
    }

    pub fn to_new_category(self) -> DomainResult<NewCategory> {
        NewCategory::new(self.display_name(), self.slug(), self.color())
    }
}
