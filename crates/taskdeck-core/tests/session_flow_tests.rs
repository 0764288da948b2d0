/*
[INPUT]:  Session actions issued the way screens issue them
[OUTPUT]: Test results for navigation, store, form, and row behavior
[POS]:    Integration tests - end-to-end session flow
[UPDATE]: When screen flows or session contracts change
*/

mod common;

use common::{add_task, session_on_list};
use taskdeck_core::{Screen, Session, SubmitOutcome, Task};

#[test]
fn test_fresh_session_starts_on_onboarding() {
    let session = Session::new();
    assert_eq!(session.screen(), Screen::Onboarding);
    assert!(session.tasks().is_empty());
}

#[test]
fn test_onboarding_advances_exactly_once() {
    let mut session = Session::new();
    assert!(session.continue_onboarding());
    assert_eq!(session.screen(), Screen::List);

    assert!(!session.continue_onboarding());
    assert_eq!(session.screen(), Screen::List);
}

#[test]
fn test_submit_name_only() {
    let mut session = session_on_list();
    let outcome = add_task(&mut session, "Buy milk", "");

    assert_eq!(outcome, SubmitOutcome::Added(Task::new("Buy milk", "")));
    assert_eq!(session.tasks(), &[Task::new("Buy milk", "")]);
    assert_eq!(session.screen(), Screen::List);
}

#[test]
fn test_submit_both_empty_is_rejected() {
    let mut session = session_on_list();
    let outcome = add_task(&mut session, "", "");

    assert_eq!(outcome, SubmitOutcome::Rejected);
    assert!(session.tasks().is_empty());
    assert_eq!(session.screen(), Screen::AddForm);
    assert_eq!(session.store().revision(), 0);
}

#[test]
fn test_submit_detail_only() {
    let mut session = session_on_list();
    let outcome = add_task(&mut session, "", "Call mom");

    assert_eq!(outcome, SubmitOutcome::Added(Task::new("", "Call mom")));
    assert_eq!(session.tasks(), &[Task::new("", "Call mom")]);
    assert_eq!(session.screen(), Screen::List);
}

#[test]
fn test_tasks_keep_insertion_order() {
    let mut session = session_on_list();
    let expected: Vec<Task> = (1..=10)
        .map(|i| Task::new(format!("Task {i}"), format!("Detail {i}")))
        .collect();

    for task in &expected {
        let outcome = add_task(&mut session, task.name(), task.detail());
        assert_eq!(outcome, SubmitOutcome::Added(task.clone()));
    }

    assert_eq!(session.tasks(), expected.as_slice());
    assert_eq!(session.store().revision(), 10);
}

#[test]
fn test_toggle_is_row_local() {
    let mut session = session_on_list();
    add_task(&mut session, "One", "1");
    add_task(&mut session, "Two", "2");
    add_task(&mut session, "Three", "3");
    let before = session.tasks().to_vec();

    assert!(session.toggle_row(1));

    assert!(!session.rows().is_expanded(0));
    assert!(session.rows().is_expanded(1));
    assert!(!session.rows().is_expanded(2));
    assert_eq!(session.tasks(), before.as_slice());
}

#[test]
fn test_new_row_starts_collapsed() {
    let mut session = session_on_list();
    add_task(&mut session, "One", "1");
    session.toggle_row(0);

    add_task(&mut session, "Two", "2");

    assert_eq!(session.rows().len(), 2);
    assert!(!session.rows().is_expanded(1));
    assert_eq!(session.rows().get(1).map(|row| row.padding()), Some(0));
}

#[test]
fn test_rows_collapse_after_cancelled_form() {
    let mut session = Session::with_tasks(vec![Task::new("A", "detail")]);
    session.continue_onboarding();
    session.toggle_row(0);
    while session.tick() {}
    assert!(session.rows().is_expanded(0));

    session.request_add_task();
    session.cancel_task();

    assert_eq!(session.screen(), Screen::List);
    assert!(!session.rows().is_expanded(0));
    assert_eq!(session.rows().get(0).map(|row| row.padding()), Some(0));
}

#[test]
fn test_rows_collapse_after_submitted_form() {
    let mut session = Session::with_tasks(vec![Task::new("A", "detail")]);
    session.continue_onboarding();
    session.toggle_row(0);

    add_task(&mut session, "B", "");

    assert_eq!(session.rows().len(), 2);
    assert!(session.rows().iter().all(|row| !row.expanded()));
}

#[tokio::test]
async fn test_observers_follow_session_changes() {
    let mut session = Session::new();
    let mut screen_rx = session.subscribe_screen();
    let mut tasks_rx = session.subscribe_tasks();

    session.continue_onboarding();
    screen_rx.changed().await.expect("session alive");
    assert_eq!(*screen_rx.borrow_and_update(), Screen::List);

    add_task(&mut session, "Buy milk", "");
    tasks_rx.changed().await.expect("session alive");
    assert_eq!(*tasks_rx.borrow_and_update(), 1);
    assert_eq!(*screen_rx.borrow_and_update(), Screen::List);
}
