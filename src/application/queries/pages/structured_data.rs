use serde_json::{Value, json};

use crate::{application::site::SiteUrl, domain::article::Article};

fn list_entry(site: &SiteUrl, article: &Article, position: usize) -> Value {
    json!({
        "@type": "ListItem",
        "position": position,
        "item": {
            "@type": "NewsArticle",
            "headline": article.title.as_str(),
            "url": site.article(article.slug.as_str()),
            "image": article.image_url,
            "datePublished": article.created_at.to_rfc3339(),
            "author": { "@type": "Person", "name": article.author },
        },
    })
}

/// schema.org `ItemList` for the home page, hero first.
pub(super) fn item_list(site: &SiteUrl, hero: Option<&Article>, latest: &[Article]) -> Value {
    let elements: Vec<Value> = hero
        .into_iter()
        .chain(latest.iter())
        .enumerate()
        .map(|(idx, article)| list_entry(site, article, idx + 1))
        .collect();

    json!({
        "@context": "https://schema.org",
        "@type": "ItemList",
        "itemListElement": elements,
    })
}

/// schema.org `NewsArticle` for an article page.
pub(super) fn news_article(site: &SiteUrl, article: &Article) -> Value {
    let keywords = article
        .tags
        .iter()
        .map(|tag| tag.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    json!({
        "@context": "https://schema.org",
        "@type": "NewsArticle",
        "headline": article.title.as_str(),
        "description": article.excerpt,
        "image": article.image_url,
        "datePublished": article.created_at.to_rfc3339(),
        "dateModified": article.updated_at.to_rfc3339(),
        "author": { "@type": "Person", "name": article.author },
        "publisher": {
            "@type": "Organization",
            "name": SiteUrl::NAME,
            "logo": { "@type": "ImageObject", "url": site.absolute("/logo.png") },
        },
        "mainEntityOfPage": { "@type": "WebPage", "@id": site.article(article.slug.as_str()) },
        "articleSection": article.category.name,
        "keywords": keywords,
    })
}
