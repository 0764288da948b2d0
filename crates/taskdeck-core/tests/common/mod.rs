/*
[INPUT]:  Test fixtures for session flows
[OUTPUT]: Shared helpers to drive a Session through its screens
[POS]:    Test infrastructure - shared across integration tests
[UPDATE]: When adding new test patterns or fixtures
*/

use taskdeck_core::{FormField, Session, SubmitOutcome};

/// Session advanced past onboarding onto the list screen
pub fn session_on_list() -> Session {
    let mut session = Session::new();
    assert!(session.continue_onboarding());
    session
}

/// Opens the form, fills both fields, and submits
pub fn add_task(session: &mut Session, name: &str, detail: &str) -> SubmitOutcome {
    session.request_add_task();
    let form = session.form_mut().expect("add form should be open");
    form.set_value(FormField::Name, name);
    form.set_value(FormField::Detail, detail);
    session.submit_task()
}
