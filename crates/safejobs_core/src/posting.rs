use std::fmt;

/// One job opening as returned by the search API.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct JobPosting {
    pub position_title: String,
    pub organization: String,
    pub raw_location: String,
}

impl JobPosting {
    pub fn new(
        position_title: impl Into<String>,
        organization: impl Into<String>,
        raw_location: impl Into<String>,
    ) -> Self {
        Self {
            position_title: position_title.into(),
            organization: organization.into(),
            raw_location: raw_location.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SafeState {
    Yes,
    #[default]
    No,
}

impl SafeState {
    pub fn as_str(self) -> &'static str {
        match self {
            SafeState::Yes => "Yes",
            SafeState::No => "No",
        }
    }
}

impl fmt::Display for SafeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output row: a posting with its location split and its safety flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobRecord {
    pub position_title: String,
    pub organization: String,
    pub city: String,
    pub state: String,
    pub safe_state: SafeState,
}
