use crate::JobPosting;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Session started; safe states are already loaded.
    Started,
    /// User answered the title prompt.
    TitleEntered(String),
    /// Search request failed (transport, status or parse).
    SearchFailed { reason: String },
    /// Search returned these postings, before relevance filtering.
    SearchCompleted { postings: Vec<JobPosting> },
    /// CSV written.
    ExportFinished { rows: usize, path: String },
    ExportFailed { reason: String },
    /// Standard input reached end of file.
    InputClosed,
}
