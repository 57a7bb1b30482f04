use std::io;
use std::sync::Arc;

use safejobs_core::{JobPosting, SafeStateList, Table};

use crate::{
    export_csv, ExportError, ExportOptions, ExportSummary, FetchSettings, Fetcher,
    JobSearchClient, ReqwestFetcher, SafeStateScraper, SearchError, SearchSettings,
    DEFAULT_SAFE_STATES_URL,
};

#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub fetch: FetchSettings,
    pub search: SearchSettings,
    pub safe_states_url: String,
    pub export: ExportOptions,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            fetch: FetchSettings::default(),
            search: SearchSettings::default(),
            safe_states_url: DEFAULT_SAFE_STATES_URL.to_string(),
            export: ExportOptions::default(),
        }
    }
}

/// Blocking facade over the async clients.
///
/// Owns a current-thread runtime; every call blocks until its request
/// finishes. Must not be used from inside another tokio runtime.
pub struct Engine {
    runtime: tokio::runtime::Runtime,
    scraper: SafeStateScraper,
    search: JobSearchClient,
    export: ExportOptions,
}

impl Engine {
    pub fn new(config: EngineConfig) -> io::Result<Self> {
        let fetcher = Arc::new(ReqwestFetcher::new(config.fetch.clone()));
        Self::with_fetcher(config, fetcher)
    }

    pub fn with_fetcher(config: EngineConfig, fetcher: Arc<dyn Fetcher>) -> io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        Ok(Self {
            runtime,
            scraper: SafeStateScraper::new(fetcher.clone(), config.safe_states_url),
            search: JobSearchClient::new(fetcher, config.search),
            export: config.export,
        })
    }

    pub fn scrape_safe_states(&self) -> SafeStateList {
        self.runtime.block_on(self.scraper.scrape())
    }

    pub fn search_jobs(&self, title: &str) -> Result<Vec<JobPosting>, SearchError> {
        self.runtime.block_on(self.search.search(title))
    }

    pub fn export(&self, table: &Table) -> Result<ExportSummary, ExportError> {
        export_csv(table, &self.export)
    }
}
