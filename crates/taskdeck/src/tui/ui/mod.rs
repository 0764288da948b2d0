/*
[INPUT]:  TUI app state, config labels, and log buffer
[OUTPUT]: Screen render functions and module exports
[POS]:    TUI UI module root
[UPDATE]: When adding screens or shared panels
*/

mod add_form;
mod layout;
mod logs;
mod onboarding;
mod task_list;

pub(in crate::tui) use add_form::draw_add_form;
pub(in crate::tui) use layout::draw_header;
pub(in crate::tui) use logs::draw_logs;
pub(in crate::tui) use onboarding::draw_onboarding;
pub(in crate::tui) use task_list::draw_task_list;
