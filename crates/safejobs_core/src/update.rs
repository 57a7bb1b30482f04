use pipeline_logging::{pipeline_info, pipeline_warn};

use crate::{
    annotate_all, filter_relevant, AppState, Effect, ExitStatus, Msg, Notice, SessionState,
    Table, PREVIEW_ROWS,
};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Started => {
            if state.session() == SessionState::Idle {
                state.set_session(SessionState::AwaitingTitle);
                vec![Effect::PromptForTitle]
            } else {
                Vec::new()
            }
        }
        Msg::TitleEntered(raw) => {
            if state.session() != SessionState::AwaitingTitle {
                return (state, Vec::new());
            }
            let title = raw.trim();
            if title.is_empty() {
                // Blank input does not count as an attempt.
                vec![Effect::Notify(Notice::BlankTitle), Effect::PromptForTitle]
            } else {
                state.begin_search(title.to_string());
                vec![Effect::SearchJobs {
                    title: title.to_string(),
                }]
            }
        }
        Msg::SearchFailed { reason } => {
            if state.session() != SessionState::Searching {
                return (state, Vec::new());
            }
            pipeline_warn!("Search attempt {} failed: {}", state.attempts(), reason);
            retry_or_give_up(&mut state, Notice::SearchFailed)
        }
        Msg::SearchCompleted { postings } => {
            if state.session() != SessionState::Searching {
                return (state, Vec::new());
            }
            let title = state.current_title().unwrap_or_default().to_string();
            let fetched = postings.len();
            let relevant = filter_relevant(&title, postings);
            pipeline_info!(
                "Search '{}' returned {} postings, {} relevant",
                title,
                fetched,
                relevant.len()
            );
            if relevant.is_empty() {
                retry_or_give_up(&mut state, Notice::JobNotFound)
            } else {
                let records = annotate_all(&relevant, state.safe_states());
                let table = Table::for_export(&records);
                state.set_records(records);
                state.set_session(SessionState::Exporting);
                vec![
                    Effect::ShowPreview(table.head(PREVIEW_ROWS)),
                    Effect::ExportRecords(table),
                ]
            }
        }
        Msg::ExportFinished { rows, path } => {
            if state.session() != SessionState::Exporting {
                return (state, Vec::new());
            }
            state.set_session(SessionState::Done);
            vec![
                Effect::Notify(Notice::CsvSaved { rows, path }),
                Effect::Exit(ExitStatus::Success),
            ]
        }
        Msg::ExportFailed { reason } => {
            if state.session() != SessionState::Exporting {
                return (state, Vec::new());
            }
            state.set_session(SessionState::Failed);
            vec![
                Effect::Notify(Notice::ExportFailed { reason }),
                Effect::Exit(ExitStatus::Failed),
            ]
        }
        Msg::InputClosed => {
            if state.is_finished() {
                Vec::new()
            } else {
                state.set_session(SessionState::Cancelled);
                vec![Effect::Exit(ExitStatus::Cancelled)]
            }
        }
    };

    (state, effects)
}

fn retry_or_give_up(state: &mut AppState, notice: Notice) -> Vec<Effect> {
    if state.attempts_exhausted() {
        state.set_session(SessionState::GaveUp);
        vec![
            Effect::Notify(notice),
            Effect::Notify(Notice::AttemptsExhausted {
                attempts: state.attempts(),
            }),
            Effect::Exit(ExitStatus::GaveUp),
        ]
    } else {
        state.set_session(SessionState::AwaitingTitle);
        vec![Effect::Notify(notice), Effect::PromptForTitle]
    }
}
