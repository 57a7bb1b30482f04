use crate::{JobRecord, SafeStateList};

/// Searches allowed before the session gives up.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    AwaitingTitle,
    Searching,
    Exporting,
    Done,
    GaveUp,
    Cancelled,
    Failed,
}

impl SessionState {
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            SessionState::Done | SessionState::GaveUp | SessionState::Cancelled | SessionState::Failed
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    session: SessionState,
    safe_states: SafeStateList,
    /// Zero means unbounded.
    max_attempts: u32,
    attempts: u32,
    current_title: Option<String>,
    records: Vec<JobRecord>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(SafeStateList::default(), DEFAULT_MAX_ATTEMPTS)
    }
}

impl AppState {
    pub fn new(safe_states: SafeStateList, max_attempts: u32) -> Self {
        Self {
            session: SessionState::Idle,
            safe_states,
            max_attempts,
            attempts: 0,
            current_title: None,
            records: Vec::new(),
        }
    }

    pub fn session(&self) -> SessionState {
        self.session
    }

    pub fn safe_states(&self) -> &SafeStateList {
        &self.safe_states
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn current_title(&self) -> Option<&str> {
        self.current_title.as_deref()
    }

    /// Records produced by the successful search, empty until then.
    pub fn records(&self) -> &[JobRecord] {
        &self.records
    }

    pub fn is_finished(&self) -> bool {
        self.session.is_terminal()
    }

    pub(crate) fn set_session(&mut self, session: SessionState) {
        self.session = session;
    }

    pub(crate) fn begin_search(&mut self, title: String) {
        self.attempts += 1;
        self.current_title = Some(title);
        self.session = SessionState::Searching;
    }

    pub(crate) fn attempts_exhausted(&self) -> bool {
        self.max_attempts != 0 && self.attempts >= self.max_attempts
    }

    pub(crate) fn set_records(&mut self, records: Vec<JobRecord>) {
        self.records = records;
    }
}
