/// Public base URL used for absolute links in feeds and structured data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteUrl(String);

impl SiteUrl {
    pub const DEFAULT: &'static str = "https://bendinledim.com.tr";
    pub const NAME: &'static str = "Ben Dinledim";

    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        let trimmed = base.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            Self(Self::DEFAULT.to_string())
        } else {
            Self(trimmed.to_string())
        }
    }

    pub fn base(&self) -> &str {
        &self.0
    }

    /// Joins `path` onto the base, adding the leading slash when missing.
    pub fn absolute(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.0)
        } else {
            format!("{}/{path}", self.0)
        }
    }

    pub fn article(&self, slug: &str) -> String {
        self.absolute(&format!("/haber/{slug}"))
    }

    pub fn category(&self, slug: &str) -> String {
        self.absolute(&format!("/kategori/{slug}"))
    }
}

impl Default for SiteUrl {
    fn default() -> Self {
        Self::new(Self::DEFAULT)
    }
}
