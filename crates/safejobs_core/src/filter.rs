use crate::JobPosting;

/// Case-insensitive substring test of the query against the posting title.
///
/// The query is used verbatim; the session trims user input before calling.
pub fn is_relevant(query: &str, posting: &JobPosting) -> bool {
    posting
        .position_title
        .to_lowercase()
        .contains(&query.to_lowercase())
}

/// Keeps postings whose title contains `query`, preserving API order.
/// Expects an already trimmed query.
pub fn filter_relevant(query: &str, postings: Vec<JobPosting>) -> Vec<JobPosting> {
    postings
        .into_iter()
        .filter(|posting| is_relevant(query, posting))
        .collect()
}
