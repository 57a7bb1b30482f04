use std::sync::Arc;

use pipeline_logging::{pipeline_info, pipeline_warn};
use safejobs_core::SafeStateList;

use crate::{decode_page, Extractor, FetchError, FetchRequest, Fetcher, HeadingExtractor};

/// Ranking page whose `h3` headings name the safest states.
pub const DEFAULT_SAFE_STATES_URL: &str =
    "https://www.mpamag.com/us/mortgage-industry/guides/which-are-the-safest-states-in-the-us/315091";

pub struct SafeStateScraper {
    fetcher: Arc<dyn Fetcher>,
    url: String,
    extractor: HeadingExtractor,
}

impl SafeStateScraper {
    pub fn new(fetcher: Arc<dyn Fetcher>, url: impl Into<String>) -> Self {
        Self {
            fetcher,
            url: url.into(),
            extractor: HeadingExtractor::default(),
        }
    }

    /// Only the fetch can fail; a page with bad bytes is still parsed.
    pub async fn try_scrape(&self) -> Result<Vec<String>, FetchError> {
        let output = self.fetcher.fetch(&FetchRequest::html(&self.url)).await?;
        let page = decode_page(&output.bytes, output.metadata.content_type.as_deref());
        if page.had_errors {
            pipeline_warn!(
                "Page {} has bytes invalid in {}; replaced them",
                self.url,
                page.encoding_label
            );
        }
        Ok(self.extractor.extract(&page.html))
    }

    /// Never fails: any error is logged and yields an empty list, which
    /// simply marks every job as not safe.
    pub async fn scrape(&self) -> SafeStateList {
        match self.try_scrape().await {
            Ok(headings) => {
                pipeline_info!("Scraped {} safe-state headings from {}", headings.len(), self.url);
                SafeStateList::new(headings)
            }
            Err(err) => {
                pipeline_warn!("Failed to scrape safe states from {}: {}", self.url, err);
                SafeStateList::default()
            }
        }
    }
}
