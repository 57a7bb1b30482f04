//! Safejobs core: pure job filtering, safety annotation, tabular shaping and
//! the interactive session state machine.
mod effect;
mod filter;
mod location;
mod msg;
mod posting;
mod safety;
mod state;
mod table;
mod update;

pub use effect::{Effect, ExitStatus, Notice};
pub use filter::{filter_relevant, is_relevant};
pub use location::{split_location, Location, UNKNOWN_STATE};
pub use msg::Msg;
pub use posting::{JobPosting, JobRecord, SafeState};
pub use safety::{annotate, annotate_all, SafeStateList};
pub use state::{AppState, SessionState, DEFAULT_MAX_ATTEMPTS};
pub use table::{title_case, Cell, ColumnKind, Table, PREVIEW_ROWS};
pub use update::update;
