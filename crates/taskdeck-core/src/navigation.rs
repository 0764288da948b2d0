/*
[INPUT]:  NavAction requests raised by screen completion callbacks
[OUTPUT]: Validated Screen transitions and change notifications
[POS]:    Navigation state holder - single source of truth for the active screen
[UPDATE]: When screens or navigation edges change
*/

use thiserror::Error;
use tokio::sync::watch;
use tracing::debug;

/// Screen currently occupying the whole surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    #[default]
    Onboarding,
    List,
    AddForm,
}

impl Screen {
    pub fn title(self) -> &'static str {
        match self {
            Screen::Onboarding => "Welcome",
            Screen::List => "Tasks",
            Screen::AddForm => "Add task",
        }
    }
}

/// User actions that move between screens, one per navigation edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    CompleteOnboarding,
    RequestAddTask,
    SubmitOrCancelTask,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("Invalid transition: {from:?} -> {action:?}")]
    InvalidTransition { from: Screen, action: NavAction },
}

/// State machine over [`Screen`].
///
/// The named edge operations (`complete_onboarding` and friends) are no-ops
/// when the edge is not defined for the current screen. [`Navigator::transition`]
/// reports the rejection instead.
#[derive(Debug)]
pub struct Navigator {
    current: Screen,
    notify: watch::Sender<Screen>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    pub fn new() -> Self {
        let (notify, _) = watch::channel(Screen::Onboarding);
        Self {
            current: Screen::Onboarding,
            notify,
        }
    }

    pub fn current(&self) -> Screen {
        self.current
    }

    pub fn can_transition(&self, action: NavAction) -> bool {
        next_screen(self.current, action).is_some()
    }

    pub fn transition(&mut self, action: NavAction) -> Result<Screen, NavigationError> {
        let from = self.current;
        let next = next_screen(from, action)
            .ok_or(NavigationError::InvalidTransition { from, action })?;

        debug!(?from, to = ?next, ?action, "screen transition");
        self.current = next;
        self.notify.send_replace(next);
        Ok(next)
    }

    /// `Onboarding -> List`
    pub fn complete_onboarding(&mut self) -> bool {
        self.apply(NavAction::CompleteOnboarding)
    }

    /// `List -> AddForm`
    pub fn request_add_task(&mut self) -> bool {
        self.apply(NavAction::RequestAddTask)
    }

    /// `AddForm -> List`
    pub fn submit_or_cancel_task(&mut self) -> bool {
        self.apply(NavAction::SubmitOrCancelTask)
    }

    /// Receiver that always holds the latest screen.
    pub fn subscribe(&self) -> watch::Receiver<Screen> {
        self.notify.subscribe()
    }

    fn apply(&mut self, action: NavAction) -> bool {
        if !self.can_transition(action) {
            debug!(from = ?self.current, ?action, "ignoring navigation action");
            return false;
        }
        self.transition(action).is_ok()
    }
}

fn next_screen(from: Screen, action: NavAction) -> Option<Screen> {
    match (from, action) {
        (Screen::Onboarding, NavAction::CompleteOnboarding) => Some(Screen::List),
        (Screen::List, NavAction::RequestAddTask) => Some(Screen::AddForm),
        (Screen::AddForm, NavAction::SubmitOrCancelTask) => Some(Screen::List),
        _ => None,
    }
}
