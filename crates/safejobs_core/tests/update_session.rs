use std::sync::Once;

use safejobs_core::{
    update, AppState, Effect, ExitStatus, JobPosting, Msg, Notice, SafeState, SafeStateList,
    SessionState,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(pipeline_logging::initialize_for_tests);
}

fn started(max_attempts: u32) -> AppState {
    let list = SafeStateList::new(vec!["Minnesota".to_string()]);
    let (state, effects) = update(AppState::new(list, max_attempts), Msg::Started);
    assert_eq!(effects, vec![Effect::PromptForTitle]);
    state
}

fn search(state: AppState, title: &str) -> AppState {
    let (state, effects) = update(state, Msg::TitleEntered(title.to_string()));
    assert_eq!(
        effects,
        vec![Effect::SearchJobs {
            title: title.trim().to_string()
        }]
    );
    state
}

fn analysts() -> Vec<JobPosting> {
    vec![
        JobPosting::new("Data Analyst", "Census Bureau", "Minneapolis, Minnesota"),
        JobPosting::new("Senior Data Analyst", "Treasury", "Austin, TX"),
        JobPosting::new("Program Manager", "Treasury", "Remote"),
    ]
}

#[test]
fn started_is_only_handled_once() {
    init_logging();
    let state = started(3);
    assert_eq!(state.session(), SessionState::AwaitingTitle);
    let (state, effects) = update(state, Msg::Started);
    assert!(effects.is_empty());
    assert_eq!(state.session(), SessionState::AwaitingTitle);
}

#[test]
fn blank_title_reprompts_without_spending_an_attempt() {
    init_logging();
    let state = started(3);
    let (state, effects) = update(state, Msg::TitleEntered("   \n".to_string()));
    assert_eq!(
        effects,
        vec![Effect::Notify(Notice::BlankTitle), Effect::PromptForTitle]
    );
    assert_eq!(state.attempts(), 0);
    assert_eq!(state.session(), SessionState::AwaitingTitle);
}

#[test]
fn title_is_trimmed_before_searching() {
    init_logging();
    let state = search(started(3), "  Data Analyst \n");
    assert_eq!(state.current_title(), Some("Data Analyst"));
    assert_eq!(state.session(), SessionState::Searching);
    assert_eq!(state.attempts(), 1);
}

#[test]
fn search_failure_reprompts() {
    init_logging();
    let state = search(started(3), "Data Analyst");
    let (state, effects) = update(
        state,
        Msg::SearchFailed {
            reason: "http status 401".to_string(),
        },
    );
    assert_eq!(
        effects,
        vec![Effect::Notify(Notice::SearchFailed), Effect::PromptForTitle]
    );
    assert_eq!(state.session(), SessionState::AwaitingTitle);
}

#[test]
fn no_relevant_jobs_reprompts() {
    init_logging();
    let state = search(started(3), "Astronaut");
    let (state, effects) = update(state, Msg::SearchCompleted { postings: analysts() });
    assert_eq!(
        effects,
        vec![Effect::Notify(Notice::JobNotFound), Effect::PromptForTitle]
    );
    assert_eq!(state.session(), SessionState::AwaitingTitle);
    assert!(state.records().is_empty());
}

#[test]
fn relevant_jobs_are_previewed_then_exported() {
    init_logging();
    let state = search(started(3), "data analyst");
    let (state, effects) = update(state, Msg::SearchCompleted { postings: analysts() });

    assert_eq!(state.session(), SessionState::Exporting);
    assert_eq!(state.records().len(), 2);
    assert_eq!(state.records()[0].safe_state, SafeState::Yes);
    assert_eq!(state.records()[1].safe_state, SafeState::No);

    assert_eq!(effects.len(), 2);
    match (&effects[0], &effects[1]) {
        (Effect::ShowPreview(preview), Effect::ExportRecords(table)) => {
            assert!(preview.contains("Senior Data Analyst"));
            assert_eq!(table.len(), 2);
            assert_eq!(table.headers()[0], "Position Title");
        }
        other => panic!("unexpected effects: {other:?}"),
    }

    let (state, effects) = update(
        state,
        Msg::ExportFinished {
            rows: 2,
            path: "out.csv".to_string(),
        },
    );
    assert_eq!(state.session(), SessionState::Done);
    assert_eq!(
        effects,
        vec![
            Effect::Notify(Notice::CsvSaved {
                rows: 2,
                path: "out.csv".to_string()
            }),
            Effect::Exit(ExitStatus::Success),
        ]
    );
}

#[test]
fn attempts_are_bounded() {
    init_logging();
    let mut state = started(2);
    state = search(state, "Astronaut");
    let (next, _) = update(state, Msg::SearchCompleted { postings: Vec::new() });
    state = search(next, "Astronaut");
    let (state, effects) = update(
        state,
        Msg::SearchFailed {
            reason: "timeout".to_string(),
        },
    );

    assert_eq!(state.session(), SessionState::GaveUp);
    assert_eq!(
        effects,
        vec![
            Effect::Notify(Notice::SearchFailed),
            Effect::Notify(Notice::AttemptsExhausted { attempts: 2 }),
            Effect::Exit(ExitStatus::GaveUp),
        ]
    );
    assert_eq!(ExitStatus::GaveUp.code(), 2);
}

#[test]
fn zero_max_attempts_retries_forever() {
    init_logging();
    let mut state = started(0);
    for _ in 0..20 {
        state = search(state, "Astronaut");
        let (next, effects) = update(state, Msg::SearchCompleted { postings: analysts() });
        assert_eq!(effects.last(), Some(&Effect::PromptForTitle));
        state = next;
    }
    assert_eq!(state.attempts(), 20);
}

#[test]
fn export_failure_ends_session() {
    init_logging();
    let state = search(started(3), "Data Analyst");
    let (state, _) = update(state, Msg::SearchCompleted { postings: analysts() });
    let (state, effects) = update(
        state,
        Msg::ExportFailed {
            reason: "disk full".to_string(),
        },
    );
    assert_eq!(state.session(), SessionState::Failed);
    assert_eq!(effects.last(), Some(&Effect::Exit(ExitStatus::Failed)));
}

#[test]
fn input_closed_cancels_unless_finished() {
    init_logging();
    let state = started(3);
    let (state, effects) = update(state, Msg::InputClosed);
    assert_eq!(state.session(), SessionState::Cancelled);
    assert_eq!(effects, vec![Effect::Exit(ExitStatus::Cancelled)]);

    let (state, effects) = update(state, Msg::InputClosed);
    assert_eq!(state.session(), SessionState::Cancelled);
    assert!(effects.is_empty());
}

#[test]
fn stray_messages_are_ignored() {
    init_logging();
    let state = started(3);
    let (next, effects) = update(state.clone(), Msg::SearchCompleted { postings: analysts() });
    assert_eq!(next, state);
    assert!(effects.is_empty());

    let (next, effects) = update(
        state.clone(),
        Msg::ExportFinished {
            rows: 1,
            path: "out.csv".to_string(),
        },
    );
    assert_eq!(next, state);
    assert!(effects.is_empty());
}
