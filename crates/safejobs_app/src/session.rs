//! Drives the core state machine against stdin/stdout and the engine.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use pipeline_logging::{pipeline_error, pipeline_info};
use safejobs_core::{update, AppState, Effect, ExitStatus, JobPosting, Msg, SafeStateList, Table};
use safejobs_engine::{Engine, ExportError, ExportSummary, SearchError};

pub const PROMPT: &str = "Enter the job title you are looking for: ";

/// The IO the session needs: search and export.
pub trait Backend {
    fn search_jobs(&self, title: &str) -> Result<Vec<JobPosting>, SearchError>;
    fn export(&self, table: &Table) -> Result<ExportSummary, ExportError>;
}

impl Backend for Engine {
    fn search_jobs(&self, title: &str) -> Result<Vec<JobPosting>, SearchError> {
        Engine::search_jobs(self, title)
    }

    fn export(&self, table: &Table) -> Result<ExportSummary, ExportError> {
        Engine::export(self, table)
    }
}

/// Runs one interactive session to completion and returns how it ended.
pub fn run_session<B, R, W>(
    backend: &B,
    safe_states: SafeStateList,
    max_attempts: u32,
    mut input: R,
    mut output: W,
) -> io::Result<ExitStatus>
where
    B: Backend,
    R: BufRead,
    W: Write,
{
    let mut state = AppState::new(safe_states, max_attempts);
    let mut inbox = VecDeque::from([Msg::Started]);

    while let Some(msg) = inbox.pop_front() {
        let (next, effects) = update(state, msg);
        state = next;

        for effect in effects {
            match effect {
                Effect::PromptForTitle => {
                    write!(output, "{PROMPT}")?;
                    output.flush()?;
                    let mut line = String::new();
                    if input.read_line(&mut line)? == 0 {
                        writeln!(output)?;
                        inbox.push_back(Msg::InputClosed);
                    } else {
                        inbox.push_back(Msg::TitleEntered(line));
                    }
                }
                Effect::SearchJobs { title } => match backend.search_jobs(&title) {
                    Ok(postings) => inbox.push_back(Msg::SearchCompleted { postings }),
                    Err(err) => {
                        writeln!(output, "Error: {err}")?;
                        inbox.push_back(Msg::SearchFailed {
                            reason: err.to_string(),
                        });
                    }
                },
                Effect::ShowPreview(preview) => writeln!(output, "{preview}")?,
                Effect::ExportRecords(table) => match backend.export(&table) {
                    Ok(summary) => inbox.push_back(Msg::ExportFinished {
                        rows: summary.row_count,
                        path: summary.output_path.display().to_string(),
                    }),
                    Err(err) => {
                        pipeline_error!("Export failed: {}", err);
                        inbox.push_back(Msg::ExportFailed {
                            reason: err.to_string(),
                        });
                    }
                },
                Effect::Notify(notice) => writeln!(output, "{notice}")?,
                Effect::Exit(status) => {
                    pipeline_info!(
                        "Session ended with {:?} after {} attempts",
                        status,
                        state.attempts()
                    );
                    return Ok(status);
                }
            }
        }
    }

    Ok(ExitStatus::Cancelled)
}
