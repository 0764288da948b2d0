/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public taskdeck-core surface: tasks, navigation, store, form, rows, session
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod form;
pub mod navigation;
pub mod rows;
pub mod session;
pub mod store;
pub mod types;

pub use form::{AddTaskForm, FormError, FormField};
pub use navigation::{NavAction, NavigationError, Navigator, Screen};
pub use rows::{EXPANDED_PADDING, RowState, RowStates};
pub use session::{Session, SubmitOutcome};
pub use store::TaskStore;
pub use types::Task;

// Re-exported so view layers can drive form edits without naming tui-input
pub use tui_input::{Input, InputRequest};
