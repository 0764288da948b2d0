/*
[INPUT]:  Session state, config labels, and log buffer
[OUTPUT]: Ratatui-based TUI for onboarding, task list, and add-task form
[POS]:    TUI module for the taskdeck binary
[UPDATE]: When changing TUI layout, keybindings, or runtime controls
*/

mod app;
mod events;
mod runtime;
mod terminal;
mod ui;

pub use runtime::{
    LOG_BUFFER_CAPACITY, LogBuffer, LogBufferHandle, LogWriterFactory, run_tui_with_log,
};
