//! Syndication documents served from the site root: `rss.xml`,
//! `sitemap.xml` and `robots.txt`.

use std::{fmt::Write as _, sync::Arc, time::SystemTime};

use chrono::{DateTime, SecondsFormat, Utc};

use crate::{
    application::{error::ApplicationResult, site::SiteUrl},
    domain::{
        article::{Article, ArticleFilter, ArticleReadRepository, PageRequest},
        taxonomy::{Category, CategoryRepository},
    },
};

pub const RSS_ITEMS: u32 = 30;
pub const RSS_CACHE_CONTROL: &str = "public, max-age=0, s-maxage=600";
pub const SITEMAP_CACHE_CONTROL: &str = "public, max-age=0, s-maxage=3600";
pub const ROBOTS_CACHE_CONTROL: &str = "public, max-age=0, s-maxage=86400";
pub const RSS_CONTENT_TYPE: &str = "application/rss+xml; charset=utf-8";
pub const SITEMAP_CONTENT_TYPE: &str = "application/xml; charset=utf-8";
pub const ROBOTS_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

const CHANNEL_DESCRIPTION: &str =
    "Yabancı indie müzik dünyasından en güncel haberler, albüm incelemeleri ve röportajlar.";

/// Escapes the five XML special characters.
pub fn escape_xml(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}

/// Text safe to place inside a CDATA section.
pub fn cdata(value: &str) -> String {
    value.replace("]]>", "]]&gt;")
}

fn http_date(at: DateTime<Utc>) -> String {
    httpdate::fmt_http_date(SystemTime::from(at))
}

/// RSS 2.0 channel for the given articles, newest first as passed in.
pub fn render_rss(site: &SiteUrl, articles: &[Article], now: DateTime<Utc>) -> String {
    let last_build = articles.first().map_or(now, |article| article.updated_at);

    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<rss version=\"2.0\">\n  <channel>\n",
    );
    let _ = writeln!(xml, "    <title>{}</title>", escape_xml(SiteUrl::NAME));
    let _ = writeln!(xml, "    <link>{}</link>", escape_xml(site.base()));
    let _ = writeln!(xml, "    <description>{}</description>", escape_xml(CHANNEL_DESCRIPTION));
    xml.push_str("    <language>tr</language>\n");
    let _ = writeln!(xml, "    <lastBuildDate>{}</lastBuildDate>", http_date(last_build));

    for article in articles {
        let link = escape_xml(&site.article(article.slug.as_str()));
        xml.push_str("    <item>\n");
        let _ = writeln!(xml, "      <title><![CDATA[{}]]></title>", cdata(article.title.as_str()));
        let _ = writeln!(xml, "      <link>{link}</link>");
        let _ = writeln!(xml, "      <guid isPermaLink=\"true\">{link}</guid>");
        let _ = writeln!(xml, "      <pubDate>{}</pubDate>", http_date(article.created_at));
        let _ = writeln!(
            xml,
            "      <description><![CDATA[{}]]></description>",
            cdata(&article.excerpt)
        );
        let _ = writeln!(
            xml,
            "      <category><![CDATA[{}]]></category>",
            cdata(&article.category.name)
        );
        if let Some(image) = article.image_url.as_deref().filter(|url| !url.trim().is_empty()) {
            let _ = writeln!(
                xml,
                "      <enclosure url=\"{}\" type=\"image/jpeg\" />",
                escape_xml(image)
            );
        }
        xml.push_str("    </item>\n");
    }

    xml.push_str("  </channel>\n</rss>\n");
    xml
}

/// Sitemap with the static entry points, every category and every
/// published article.
pub fn render_sitemap(site: &SiteUrl, categories: &[Category], articles: &[Article]) -> String {
    let mut urls: Vec<(String, Option<String>)> = vec![
        (site.base().to_string(), None),
        (site.absolute("/kesfet"), None),
        (site.absolute("/kategoriler"), None),
    ];
    urls.extend(categories.iter().map(|category| (site.category(&category.slug), None)));
    urls.extend(articles.iter().map(|article| {
        (
            site.article(article.slug.as_str()),
            Some(article.updated_at.to_rfc3339_opts(SecondsFormat::Millis, true)),
        )
    }));

    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for (loc, lastmod) in urls {
        xml.push_str("  <url>\n");
        let _ = writeln!(xml, "    <loc>{}</loc>", escape_xml(&loc));
        if let Some(lastmod) = lastmod {
            let _ = writeln!(xml, "    <lastmod>{}</lastmod>", escape_xml(&lastmod));
        }
        xml.push_str("  </url>\n");
    }
    xml.push_str("</urlset>\n");
    xml
}

pub fn render_robots(site: &SiteUrl) -> String {
    format!("User-agent: *\nAllow: /\nSitemap: {}/sitemap.xml\n", site.base())
}

pub struct PublishingService {
    article_repo: Arc<dyn ArticleReadRepository>,
    category_repo: Arc<dyn CategoryRepository>,
    site: SiteUrl,
}

impl PublishingService {
    pub fn new(
        article_repo: Arc<dyn ArticleReadRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        site: SiteUrl,
    ) -> Self {
        Self {
            article_repo,
            category_repo,
            site,
        }
    }

    pub async fn rss(&self, now: DateTime<Utc>) -> ApplicationResult<String> {
        let (articles, _) = self
            .article_repo
            .list_page(&ArticleFilter::published(), PageRequest::first(RSS_ITEMS))
            .await?;
        Ok(render_rss(&self.site, &articles, now))
    }

    pub async fn sitemap(&self) -> ApplicationResult<String> {
        let mut categories: Vec<Category> = self
            .category_repo
            .list_with_counts()
            .await?
            .into_iter()
            .map(|entry| entry.category)
            .collect();
        categories.sort_by(|a, b| a.slug.cmp(&b.slug));

        let mut articles = self.all_published().await?;
        articles.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(render_sitemap(&self.site, &categories, &articles))
    }

    pub fn robots(&self) -> String {
        render_robots(&self.site)
    }

    async fn all_published(&self) -> ApplicationResult<Vec<Article>> {
        let filter = ArticleFilter::published();
        let mut page = 1;
        let mut collected = Vec::new();
        loop {
            let (batch, total) = self
                .article_repo
                .list_page(&filter, PageRequest::new(page, PageRequest::MAX_LIMIT))
                .await?;
            let total = usize::try_from(total).unwrap_or(usize::MAX);
            let done = batch.is_empty() || collected.len() + batch.len() >= total;
            collected.extend(batch);
            if done {
                return Ok(collected);
            }
            page += 1;
        }
    }
}
