use std::fmt;

use crate::Table;

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    PromptForTitle,
    SearchJobs { title: String },
    ShowPreview(String),
    ExportRecords(Table),
    Notify(Notice),
    Exit(ExitStatus),
}

/// User-facing message printed to standard output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    BlankTitle,
    SearchFailed,
    JobNotFound,
    AttemptsExhausted { attempts: u32 },
    CsvSaved { rows: usize, path: String },
    ExportFailed { reason: String },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::BlankTitle => write!(f, "Please enter a job title."),
            Notice::SearchFailed => write!(f, "Error retrieving jobs. Please try again."),
            Notice::JobNotFound => write!(f, "Job not found. Please try again."),
            Notice::AttemptsExhausted { attempts } => {
                write!(f, "No jobs saved after {attempts} attempts. Giving up.")
            }
            Notice::CsvSaved { rows, path } => {
                write!(f, "CSV file has been saved ({rows} rows, {path}).")
            }
            Notice::ExportFailed { reason } => write!(f, "Could not save CSV file: {reason}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    GaveUp,
    Cancelled,
    Failed,
}

impl ExitStatus {
    pub fn code(self) -> i32 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::GaveUp => 2,
            ExitStatus::Cancelled | ExitStatus::Failed => 1,
        }
    }
}
