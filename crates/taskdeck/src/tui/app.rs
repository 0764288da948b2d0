/*
[INPUT]:  TaskdeckConfig (labels, seed tasks), Session, log buffer
[OUTPUT]: AppState wrapping the session with list selection and status line
[POS]:    TUI app state - view-side state around the session
[UPDATE]: When screen actions or view-side state change
*/

use ratatui::widgets::ListState;
use taskdeck_core::{Screen, Session, SubmitOutcome};
use tracing::{debug, info};

use taskdeck::{Labels, TaskdeckConfig};

use crate::tui::LogBufferHandle;

pub(super) struct AppState {
    pub(super) session: Session,
    pub(super) labels: Labels,
    pub(super) log_buffer: LogBufferHandle,
    pub(super) list_state: ListState,
    pub(super) show_logs: bool,
    pub(super) status_message: String,
}

impl AppState {
    pub(super) fn new(config: &TaskdeckConfig, log_buffer: LogBufferHandle) -> Self {
        let session = Session::with_tasks(config.seed_tasks.iter().cloned());
        let mut list_state = ListState::default();
        if !session.tasks().is_empty() {
            list_state.select(Some(0));
        }
        Self {
            session,
            labels: config.labels.clone(),
            log_buffer,
            list_state,
            show_logs: false,
            status_message: "Ready".to_string(),
        }
    }

    pub(super) fn screen(&self) -> Screen {
        self.session.screen()
    }

    pub(super) fn selected(&self) -> Option<usize> {
        self.list_state
            .selected()
            .filter(|index| *index < self.session.tasks().len())
    }

    pub(super) fn continue_onboarding(&mut self) {
        self.session.continue_onboarding();
    }

    pub(super) fn open_add_form(&mut self) {
        self.session.request_add_task();
    }

    pub(super) fn submit_form(&mut self) {
        match self.session.submit_task() {
            SubmitOutcome::Added(task) => {
                self.status_message = format!("task added: {}", display_name(task.name()));
            }
            SubmitOutcome::Rejected => {
                self.status_message = "enter a name or a detail first".to_string();
            }
            SubmitOutcome::NotOnForm => {}
        }
    }

    pub(super) fn cancel_form(&mut self) {
        if self.session.cancel_task() {
            self.status_message = "add task cancelled".to_string();
        }
    }

    pub(super) fn toggle_selected(&mut self) {
        if let Some(index) = self.selected() {
            self.session.toggle_row(index);
        }
    }

    pub(super) fn toggle_logs(&mut self) {
        self.show_logs = !self.show_logs;
    }

    pub(super) fn move_selection(&mut self, delta: isize) {
        let len = self.session.tasks().len();
        if len == 0 {
            self.list_state.select(None);
            return;
        }
        let current = self.list_state.selected().unwrap_or(0) as isize;
        let next = (current + delta).clamp(0, (len - 1) as isize) as usize;
        self.list_state.select(Some(next));
    }

    /// Returns whether a row animation moved and the frame needs redrawing.
    pub(super) fn on_tick(&mut self) -> bool {
        self.session.tick()
    }

    /// Store changed: follow the newest task.
    pub(super) fn on_tasks_changed(&mut self, revision: u64) {
        let len = self.session.tasks().len();
        if len > 0 {
            self.list_state.select(Some(len - 1));
        }
        debug!(revision, len, "task list changed");
    }

    pub(super) fn on_screen_changed(&mut self, screen: Screen) {
        info!(?screen, "screen changed");
        if screen == Screen::AddForm {
            self.status_message = "fill in the form, [Enter] to submit".to_string();
        }
    }
}

pub(super) fn display_name(name: &str) -> &str {
    if name.is_empty() { "(untitled)" } else { name }
}
