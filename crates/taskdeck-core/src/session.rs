/*
[INPUT]:  Screen actions (continue, add, submit, cancel, toggle) and UI ticks
[OUTPUT]: Session-scoped navigation, task store, form, and row state
[POS]:    Session layer - the state object injected into the view layer
[UPDATE]: When screen flows or session-owned state change
*/

use tokio::sync::watch;
use tracing::{debug, info};

use crate::form::AddTaskForm;
use crate::navigation::{Navigator, Screen};
use crate::rows::RowStates;
use crate::store::TaskStore;
use crate::types::Task;

/// Result of [`Session::submit_task`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Task appended; navigation is back on the list.
    Added(Task),
    /// Both fields were empty; still on the form.
    Rejected,
    /// Submit requested while no form is open.
    NotOnForm,
}

/// All state that lives for one session: created at launch, kept across
/// redraws and terminal resizes, dropped on exit.
///
/// The add-task form exists only while the navigator is on
/// [`Screen::AddForm`], so every entry into the form starts empty.
#[derive(Debug, Default)]
pub struct Session {
    navigator: Navigator,
    store: TaskStore,
    form: Option<AddTaskForm>,
    rows: RowStates,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Session with preloaded tasks. Navigation still starts on onboarding.
    pub fn with_tasks(tasks: impl IntoIterator<Item = Task>) -> Self {
        let store = TaskStore::with_tasks(tasks.into_iter().collect());
        let rows = RowStates::new(store.len());
        Self {
            navigator: Navigator::new(),
            store,
            form: None,
            rows,
        }
    }

    pub fn screen(&self) -> Screen {
        self.navigator.current()
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn tasks(&self) -> &[Task] {
        self.store.all()
    }

    pub fn rows(&self) -> &RowStates {
        &self.rows
    }

    pub fn form(&self) -> Option<&AddTaskForm> {
        self.form.as_ref()
    }

    pub fn form_mut(&mut self) -> Option<&mut AddTaskForm> {
        self.form.as_mut()
    }

    pub fn continue_onboarding(&mut self) -> bool {
        let moved = self.navigator.complete_onboarding();
        if moved {
            info!(tasks = self.store.len(), "onboarding completed");
        }
        moved
    }

    pub fn request_add_task(&mut self) -> bool {
        let moved = self.navigator.request_add_task();
        if moved {
            self.form = Some(AddTaskForm::new());
        }
        moved
    }

    pub fn submit_task(&mut self) -> SubmitOutcome {
        let submitted = match self.form.as_mut() {
            Some(form) => form.submit(),
            None => {
                debug!(screen = ?self.screen(), "submit ignored outside add form");
                return SubmitOutcome::NotOnForm;
            }
        };

        match submitted {
            Ok(task) => {
                self.form = None;
                self.store.add(task.clone());
                self.return_to_list();
                info!(
                    name = %task.name(),
                    total = self.store.len(),
                    "task added"
                );
                SubmitOutcome::Added(task)
            }
            Err(err) => {
                debug!(error = %err, "task submission rejected");
                SubmitOutcome::Rejected
            }
        }
    }

    /// Leaves the form without adding anything.
    pub fn cancel_task(&mut self) -> bool {
        if self.form.take().is_none() {
            return false;
        }
        let moved = self.return_to_list();
        if moved {
            debug!("add task cancelled");
        }
        moved
    }

    /// `AddForm -> List`. The list screen is recreated, so every row comes
    /// back collapsed.
    fn return_to_list(&mut self) -> bool {
        let moved = self.navigator.submit_or_cancel_task();
        if moved {
            self.rows.rebuild(self.store.len());
        }
        moved
    }

    pub fn toggle_row(&mut self, index: usize) -> bool {
        if self.screen() != Screen::List {
            return false;
        }
        self.rows.toggle(index)
    }

    /// Advances row animations. Returns whether anything moved.
    pub fn tick(&mut self) -> bool {
        if self.screen() != Screen::List || !self.rows.is_animating() {
            return false;
        }
        self.rows.tick()
    }

    pub fn subscribe_screen(&self) -> watch::Receiver<Screen> {
        self.navigator.subscribe()
    }

    pub fn subscribe_tasks(&self) -> watch::Receiver<u64> {
        self.store.subscribe()
    }
}
