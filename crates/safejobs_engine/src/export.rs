use std::path::PathBuf;

use pipeline_logging::pipeline_info;
use safejobs_core::Table;

use crate::persist::{AtomicFileWriter, PersistError};

pub const DEFAULT_CSV_FILENAME: &str = "safest_states_jobs_job_listings.csv";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    pub output_dir: PathBuf,
    pub filename: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            filename: DEFAULT_CSV_FILENAME.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub row_count: usize,
    pub output_path: PathBuf,
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("csv buffer error: {0}")]
    Buffer(String),
    #[error("persist error: {0}")]
    Persist(#[from] PersistError),
}

/// Serializes the header row and every data row, without an index column.
pub fn render_csv(table: &Table) -> Result<Vec<u8>, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(table.headers())?;
    for row in table.rows() {
        writer.write_record(row.iter().map(ToString::to_string))?;
    }
    writer
        .into_inner()
        .map_err(|err| ExportError::Buffer(err.to_string()))
}

/// Writes the table to `{output_dir}/{filename}`, replacing any previous file.
pub fn export_csv(table: &Table, options: &ExportOptions) -> Result<ExportSummary, ExportError> {
    let content = render_csv(table)?;
    let writer = AtomicFileWriter::new(options.output_dir.clone());
    let output_path = writer.write(&options.filename, &content)?;
    pipeline_info!("Wrote {} rows to {:?}", table.len(), output_path);

    Ok(ExportSummary {
        row_count: table.len(),
        output_path,
    })
}
