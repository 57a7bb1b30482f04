//! Client for the USAJOBS search endpoint.

use std::sync::Arc;

use pipeline_logging::{pipeline_info, pipeline_warn};
use safejobs_core::JobPosting;
use serde::Deserialize;

use crate::{FetchError, FetchRequest, Fetcher};

pub const DEFAULT_SEARCH_ENDPOINT: &str = "https://data.usajobs.gov/api/Search";
pub const DEFAULT_USER_AGENT: &str = "safejobs/0.1 (job search client)";

const API_KEY_HEADER: &str = "Authorization-Key";
const KEYWORD_PARAM: &str = "Keyword";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSettings {
    pub endpoint: String,
    /// Sent as `Authorization-Key` when present.
    pub api_key: Option<String>,
    pub user_agent: String,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_SEARCH_ENDPOINT.to_string(),
            api_key: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("invalid search endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),
    #[error("search request failed: {0}")]
    Fetch(#[from] FetchError),
    #[error("malformed search response: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct SearchResponse {
    #[serde(default)]
    search_result: Option<SearchResult>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct SearchResult {
    #[serde(default)]
    search_result_items: Vec<SearchResultItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct SearchResultItem {
    matched_object_descriptor: MatchedObjectDescriptor,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct MatchedObjectDescriptor {
    #[serde(default)]
    position_title: Option<String>,
    #[serde(default)]
    organization_name: Option<String>,
    #[serde(default)]
    position_location_display: Option<String>,
}

impl From<MatchedObjectDescriptor> for JobPosting {
    fn from(descriptor: MatchedObjectDescriptor) -> Self {
        JobPosting {
            position_title: descriptor.position_title.unwrap_or_default(),
            organization: descriptor.organization_name.unwrap_or_default(),
            raw_location: descriptor.position_location_display.unwrap_or_default(),
        }
    }
}

/// Parses a search response body into postings, in API order.
///
/// A body without `SearchResult.SearchResultItems` yields no postings.
pub fn parse_search_response(body: &[u8]) -> Result<Vec<JobPosting>, serde_json::Error> {
    let response: SearchResponse = serde_json::from_slice(body)?;
    Ok(response
        .search_result
        .map(|result| result.search_result_items)
        .unwrap_or_default()
        .into_iter()
        .map(|item| item.matched_object_descriptor.into())
        .collect())
}

pub struct JobSearchClient {
    fetcher: Arc<dyn Fetcher>,
    settings: SearchSettings,
}

impl JobSearchClient {
    pub fn new(fetcher: Arc<dyn Fetcher>, settings: SearchSettings) -> Self {
        if settings.api_key.is_none() {
            pipeline_warn!("No API key configured; search requests will likely be rejected");
        }
        Self { fetcher, settings }
    }

    /// Builds the GET request for `keyword`, without sending it.
    pub fn request_for(&self, keyword: &str) -> Result<FetchRequest, SearchError> {
        let url = url::Url::parse_with_params(&self.settings.endpoint, [(KEYWORD_PARAM, keyword)])?;
        let mut request =
            FetchRequest::get(url.as_str()).with_header("User-Agent", &self.settings.user_agent);
        if let Some(key) = &self.settings.api_key {
            request = request.with_header(API_KEY_HEADER, key);
        }
        Ok(request)
    }

    pub async fn search(&self, keyword: &str) -> Result<Vec<JobPosting>, SearchError> {
        let request = self.request_for(keyword)?;
        let output = self.fetcher.fetch(&request).await?;
        let postings = parse_search_response(&output.bytes)?;
        pipeline_info!("Search '{}' returned {} postings", keyword, postings.len());
        Ok(postings)
    }
}
