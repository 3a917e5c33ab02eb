use std::{collections::HashMap, time::Duration};

use async_trait::async_trait;
use serde::Deserialize;

use super::{build_client, status_error, transport_error};
use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::media::{MediaHit, MediaInfo, MediaSearch},
};

const COMMONS_API: &str = "https://commons.wikimedia.org/w/api.php";
const USER_AGENT: &str = "bendinledim/commons-image (server)";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(8);
const FILE_NAMESPACE: &str = "6";
const THUMB_WIDTH: &str = "1400";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    query: Option<SearchQuery>,
}

#[derive(Debug, Deserialize)]
struct SearchQuery {
    #[serde(default)]
    search: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    pageid: u64,
    #[serde(default)]
    title: String,
}

#[derive(Debug, Deserialize)]
struct InfoResponse {
    #[serde(default)]
    query: Option<InfoQuery>,
}

#[derive(Debug, Deserialize)]
struct InfoQuery {
    #[serde(default)]
    pages: HashMap<String, InfoPage>,
}

#[derive(Debug, Deserialize)]
struct InfoPage {
    #[serde(default)]
    pageid: Option<u64>,
    #[serde(default)]
    title: String,
    #[serde(default)]
    imageinfo: Vec<ImageInfo>,
}

#[derive(Debug, Deserialize)]
struct ImageInfo {
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    thumburl: Option<String>,
    #[serde(default)]
    mime: Option<String>,
}

impl InfoPage {
    fn into_media_info(self) -> Option<MediaInfo> {
        let page_id = self.pageid?;
        let info = self.imageinfo.into_iter().next().unwrap_or(ImageInfo {
            url: None,
            thumburl: None,
            mime: None,
        });
        Some(MediaInfo {
            page_id,
            title: self.title,
            mime: info.mime,
            url: info.url,
            thumb_url: info.thumburl,
        })
    }
}

/// Wikimedia Commons file search.
pub struct CommonsMediaSearch {
    client: reqwest::Client,
    endpoint: String,
}

impl CommonsMediaSearch {
    pub fn new() -> reqwest::Result<Self> {
        Ok(Self {
            client: build_client(USER_AGENT, REQUEST_TIMEOUT)?,
            endpoint: COMMONS_API.to_string(),
        })
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        params: &[(&str, &str)],
    ) -> ApplicationResult<T> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(params)
            .send()
            .await
            .map_err(|err| transport_error("Commons", &err))?;
        if !response.status().is_success() {
            return Err(status_error("Commons", response).await);
        }
        let raw = response
            .text()
            .await
            .map_err(|err| transport_error("Commons", &err))?;
        serde_json::from_str(&raw)
            .map_err(|_| ApplicationError::malformed("unexpected Commons response", raw))
    }
}

#[async_trait]
impl MediaSearch for CommonsMediaSearch {
    async fn search(&self, query: &str, limit: u32) -> ApplicationResult<Vec<MediaHit>> {
        let limit = limit.to_string();
        let response: SearchResponse = self
            .get_json(&[
                ("action", "query"),
                ("format", "json"),
                ("list", "search"),
                ("srnamespace", FILE_NAMESPACE),
                ("srlimit", limit.as_str()),
                ("srsearch", query),
                ("origin", "*"),
            ])
            .await?;

        Ok(response
            .query
            .map(|query| query.search)
            .unwrap_or_default()
            .into_iter()
            .map(|hit| MediaHit {
                page_id: hit.pageid,
                title: hit.title,
            })
            .collect())
    }

    async fn describe(&self, page_ids: &[u64]) -> ApplicationResult<Vec<MediaInfo>> {
        if page_ids.is_empty() {
            return Ok(Vec::new());
        }
        let ids = page_ids
            .iter()
            .map(u64::to_string)
            .collect::<Vec<_>>()
            .join("|");
        let response: InfoResponse = self
            .get_json(&[
                ("action", "query"),
                ("format", "json"),
                ("prop", "imageinfo"),
                ("pageids", ids.as_str()),
                ("iiprop", "url|mime"),
                ("iiurlwidth", THUMB_WIDTH),
                ("origin", "*"),
            ])
            .await?;

        Ok(response
            .query
            .map(|query| query.pages)
            .unwrap_or_default()
            .into_values()
            .filter_map(InfoPage::into_media_info)
            .collect())
    }
}
