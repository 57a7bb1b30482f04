//! Safejobs engine: HTTP fetching, page scraping, job search and CSV export.
mod decode;
mod engine;
mod export;
mod extract;
mod fetch;
mod persist;
mod safe_states;
mod search;
mod types;

pub use decode::{decode_page, DecodedPage};
pub use engine::{Engine, EngineConfig};
pub use export::{
    export_csv, render_csv, ExportError, ExportOptions, ExportSummary, DEFAULT_CSV_FILENAME,
};
pub use extract::{Extractor, HeadingExtractor};
pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher};
pub use persist::{ensure_output_dir, AtomicFileWriter, PersistError};
pub use safe_states::{SafeStateScraper, DEFAULT_SAFE_STATES_URL};
pub use search::{
    parse_search_response, JobSearchClient, SearchError, SearchSettings,
    DEFAULT_SEARCH_ENDPOINT, DEFAULT_USER_AGENT,
};
pub use types::{FailureKind, FetchError, FetchMetadata, FetchOutput, FetchRequest};
