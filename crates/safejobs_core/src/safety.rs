use pipeline_logging::pipeline_debug;

use crate::{split_location, JobPosting, JobRecord, SafeState};

/// Ordered heading texts scraped from the "safest states" page.
///
/// Entries are taken as-is; nothing checks that they name real states.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SafeStateList {
    entries: Vec<String>,
}

impl SafeStateList {
    pub fn new(entries: Vec<String>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First entry, in list order, contained case-insensitively in `location`.
    pub fn first_match(&self, location: &str) -> Option<&str> {
        let haystack = location.to_lowercase();
        self.entries
            .iter()
            .find(|entry| haystack.contains(&entry.to_lowercase()))
            .map(String::as_str)
    }

    pub fn classify(&self, location: &str) -> SafeState {
        match self.first_match(location) {
            Some(_) => SafeState::Yes,
            None => SafeState::No,
        }
    }
}

impl From<Vec<String>> for SafeStateList {
    fn from(entries: Vec<String>) -> Self {
        Self::new(entries)
    }
}

/// Builds the output row for one posting.
pub fn annotate(posting: &JobPosting, safe_states: &SafeStateList) -> JobRecord {
    let location = split_location(&posting.raw_location);
    let safe_state = match safe_states.first_match(&posting.raw_location) {
        Some(entry) => {
            pipeline_debug!(
                "'{}' at '{}' matched safe state '{}'",
                posting.position_title,
                posting.raw_location,
                entry
            );
            SafeState::Yes
        }
        None => SafeState::No,
    };

    JobRecord {
        position_title: posting.position_title.clone(),
        organization: posting.organization.clone(),
        city: location.city,
        state: location.state,
        safe_state,
    }
}

/// One record per posting, in posting order.
pub fn annotate_all(postings: &[JobPosting], safe_states: &SafeStateList) -> Vec<JobRecord> {
    postings
        .iter()
        .map(|posting| annotate(posting, safe_states))
        .collect()
}
