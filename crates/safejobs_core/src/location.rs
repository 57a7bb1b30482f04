/// State value used when a location carries no `", "` separator.
pub const UNKNOWN_STATE: &str = "Unknown";

const SEPARATOR: &str = ", ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub city: String,
    pub state: String,
}

/// Splits a display location such as `"Austin, TX"` into city and state.
///
/// City is the text before the first `", "`, state the segment after it up
/// to the next separator. Without a separator the whole string is the city
/// and the state is [`UNKNOWN_STATE`].
pub fn split_location(raw: &str) -> Location {
    let mut parts = raw.split(SEPARATOR);
    let city = parts.next().unwrap_or_default().to_string();
    let state = parts
        .next()
        .map(str::to_string)
        .unwrap_or_else(|| UNKNOWN_STATE.to_string());
    Location { city, state }
}
