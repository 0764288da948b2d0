/*
[INPUT]:  Crossterm key events and the active screen
[OUTPUT]: Session actions routed per screen; quit requests
[POS]:    TUI key handling
[UPDATE]: When keybindings or screen actions change
*/

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use taskdeck_core::{InputRequest, Screen};

use super::app::AppState;

/// Handles key events for the TUI.
///
/// Returns `true` if quit is requested, `false` otherwise.
pub(super) fn handle_key_event(app: &mut AppState, key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }
    if key.code == KeyCode::F(2) {
        app.toggle_logs();
        return false;
    }

    match app.screen() {
        Screen::Onboarding => handle_onboarding_key(app, key.code),
        Screen::List => handle_list_key(app, key.code),
        Screen::AddForm => {
            handle_form_key(app, key);
            false
        }
    }
}

fn handle_onboarding_key(app: &mut AppState, key: KeyCode) -> bool {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('c') => {
            app.continue_onboarding();
            false
        }
        _ => false,
    }
}

fn handle_list_key(app: &mut AppState, key: KeyCode) -> bool {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('a') | KeyCode::Char('+') => {
            app.open_add_form();
            false
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.toggle_selected();
            false
        }
        KeyCode::Char('L') => {
            app.toggle_logs();
            false
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.move_selection(-1);
            false
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.move_selection(1);
            false
        }
        _ => false,
    }
}

fn handle_form_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.cancel_form(),
        KeyCode::Enter => app.submit_form(),
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            if let Some(form) = app.session.form_mut() {
                form.next_field();
            }
        }
        code => {
            if let Some(request) = input_request(code, key.modifiers) {
                if let Some(form) = app.session.form_mut() {
                    form.edit(request);
                }
            }
        }
    }
}

fn input_request(code: KeyCode, modifiers: KeyModifiers) -> Option<InputRequest> {
    let ctrl = modifiers.contains(KeyModifiers::CONTROL);
    match code {
        KeyCode::Char('u') if ctrl => Some(InputRequest::DeleteLine),
        KeyCode::Char('w') if ctrl => Some(InputRequest::DeletePrevWord),
        KeyCode::Char(_) if ctrl => None,
        KeyCode::Char(ch) => Some(InputRequest::InsertChar(ch)),
        KeyCode::Backspace => Some(InputRequest::DeletePrevChar),
        KeyCode::Delete => Some(InputRequest::DeleteNextChar),
        KeyCode::Left => Some(InputRequest::GoToPrevChar),
        KeyCode::Right => Some(InputRequest::GoToNextChar),
        KeyCode::Home => Some(InputRequest::GoToStart),
        KeyCode::End => Some(InputRequest::GoToEnd),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use taskdeck::TaskdeckConfig;
    use taskdeck_core::Task;

    use crate::tui::LogBuffer;

    fn app_with(config: &TaskdeckConfig) -> AppState {
        AppState::new(config, Arc::new(Mutex::new(LogBuffer::new(16))))
    }

    fn press(app: &mut AppState, code: KeyCode) -> bool {
        handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(app: &mut AppState, text: &str) {
        for ch in text.chars() {
            press(app, KeyCode::Char(ch));
        }
    }

    #[test]
    fn enter_leaves_onboarding() {
        let mut app = app_with(&TaskdeckConfig::default());
        assert_eq!(app.screen(), Screen::Onboarding);

        assert!(!press(&mut app, KeyCode::Enter));
        assert_eq!(app.screen(), Screen::List);
    }

    #[test]
    fn typed_task_is_added_and_selected() {
        let mut app = app_with(&TaskdeckConfig::default());
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.screen(), Screen::AddForm);

        type_text(&mut app, "Buy milk");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "2L");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.screen(), Screen::List);
        assert_eq!(app.session.tasks(), &[Task::new("Buy milk", "2L")]);
        assert_eq!(app.status_message, "task added: Buy milk");
    }

    #[test]
    fn letters_are_text_inside_the_form() {
        let mut app = app_with(&TaskdeckConfig::default());
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('a'));

        // 'q' quits elsewhere but is plain text here
        assert!(!press(&mut app, KeyCode::Char('q')));
        let form = app.session.form().expect("form open");
        assert_eq!(form.name(), "q");
    }

    #[test]
    fn empty_submit_stays_on_form() {
        let mut app = app_with(&TaskdeckConfig::default());
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.screen(), Screen::AddForm);
        assert!(app.session.tasks().is_empty());
        assert_eq!(app.status_message, "enter a name or a detail first");
    }

    #[test]
    fn escape_cancels_form() {
        let mut app = app_with(&TaskdeckConfig::default());
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('a'));
        type_text(&mut app, "Draft");

        assert!(!press(&mut app, KeyCode::Esc));
        assert_eq!(app.screen(), Screen::List);
        assert!(app.session.tasks().is_empty());
    }

    #[test]
    fn list_navigation_toggles_selected_row() {
        let config = TaskdeckConfig {
            seed_tasks: vec![Task::new("One", "1"), Task::new("Two", "2")],
            ..TaskdeckConfig::default()
        };
        let mut app = app_with(&config);
        press(&mut app, KeyCode::Enter);

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.selected(), Some(1));
        assert!(!app.session.rows().is_expanded(0));
        assert!(app.session.rows().is_expanded(1));
    }

    #[test]
    fn ticks_request_redraw_only_while_a_row_animates() {
        let config = TaskdeckConfig {
            seed_tasks: vec![Task::new("One", "1")],
            ..TaskdeckConfig::default()
        };
        let mut app = app_with(&config);
        press(&mut app, KeyCode::Enter);
        assert!(!app.on_tick());

        press(&mut app, KeyCode::Enter);
        assert!(app.on_tick());
        while app.on_tick() {}
        assert!(!app.on_tick());
    }

    #[test]
    fn expanded_row_collapses_after_form_round_trip() {
        let config = TaskdeckConfig {
            seed_tasks: vec![Task::new("One", "1")],
            ..TaskdeckConfig::default()
        };
        let mut app = app_with(&config);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        assert!(app.session.rows().is_expanded(0));

        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Esc);

        assert_eq!(app.screen(), Screen::List);
        assert!(!app.session.rows().is_expanded(0));
    }

    #[test]
    fn quit_keys() {
        let mut app = app_with(&TaskdeckConfig::default());
        assert!(press(&mut app, KeyCode::Char('q')));
        assert!(handle_key_event(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)
        ));
    }
}
