/*
[INPUT]:  Text edit requests for the name and detail scratch fields
[OUTPUT]: Validated Task on submit, or FormError on an empty submission
[POS]:    Add-task form state - scratch fields owned by the AddForm screen
[UPDATE]: When form fields or validation rules change
*/

use thiserror::Error;
use tui_input::{Input, InputRequest};

use crate::types::Task;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Task name and detail are both empty")]
    EmptySubmission,
}

/// Which scratch field receives edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    Detail,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            FormField::Name => FormField::Detail,
            FormField::Detail => FormField::Name,
        }
    }
}

/// Scratch state for the add-task screen.
///
/// Values are kept verbatim: whitespace counts as content.
#[derive(Debug, Clone, Default)]
pub struct AddTaskForm {
    name: Input,
    detail: Input,
    focus: FormField,
}

impl AddTaskForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&self) -> &str {
        self.name.value()
    }

    pub fn detail(&self) -> &str {
        self.detail.value()
    }

    pub fn focus(&self) -> FormField {
        self.focus
    }

    pub fn set_focus(&mut self, field: FormField) {
        self.focus = field;
    }

    pub fn next_field(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn input(&self, field: FormField) -> &Input {
        match field {
            FormField::Name => &self.name,
            FormField::Detail => &self.detail,
        }
    }

    /// Applies a text edit to the focused field.
    pub fn edit(&mut self, request: InputRequest) {
        let input = match self.focus {
            FormField::Name => &mut self.name,
            FormField::Detail => &mut self.detail,
        };
        input.handle(request);
    }

    pub fn set_value(&mut self, field: FormField, value: impl Into<String>) {
        let input = Input::new(value.into());
        match field {
            FormField::Name => self.name = input,
            FormField::Detail => self.detail = input,
        }
    }

    /// Rejected only when both fields are empty.
    pub fn can_submit(&self) -> bool {
        !self.name().is_empty() || !self.detail().is_empty()
    }

    /// Builds the task from the current values, then clears the fields.
    pub fn submit(&mut self) -> Result<Task, FormError> {
        if !self.can_submit() {
            return Err(FormError::EmptySubmission);
        }
        let task = Task::new(self.name(), self.detail());
        self.clear();
        Ok(task)
    }

    pub fn clear(&mut self) {
        self.name.reset();
        self.detail.reset();
        self.focus = FormField::Name;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn type_text(form: &mut AddTaskForm, text: &str) {
        for ch in text.chars() {
            form.edit(InputRequest::InsertChar(ch));
        }
    }

    #[test]
    fn new_form_is_empty() {
        let form = AddTaskForm::new();
        assert_eq!(form.name(), "");
        assert_eq!(form.detail(), "");
        assert_eq!(form.focus(), FormField::Name);
        assert!(!form.can_submit());
    }

    #[rstest]
    #[case("Buy milk", "", true)]
    #[case("", "Call mom", true)]
    #[case("Buy milk", "2 litres", true)]
    #[case(" ", "", true)]
    #[case("", "", false)]
    fn submission_rejected_only_when_both_empty(
        #[case] name: &str,
        #[case] detail: &str,
        #[case] accepted: bool,
    ) {
        let mut form = AddTaskForm::new();
        form.set_value(FormField::Name, name);
        form.set_value(FormField::Detail, detail);

        let result = form.submit();
        if accepted {
            assert_eq!(result, Ok(Task::new(name, detail)));
        } else {
            assert_eq!(result, Err(FormError::EmptySubmission));
        }
    }

    #[test]
    fn submit_uses_values_before_clearing() {
        let mut form = AddTaskForm::new();
        type_text(&mut form, "Buy milk");
        form.next_field();
        type_text(&mut form, "semi-skimmed");

        let task = form.submit().expect("non-empty form");
        assert_eq!(task, Task::new("Buy milk", "semi-skimmed"));
        assert_eq!(form.name(), "");
        assert_eq!(form.detail(), "");
        assert_eq!(form.focus(), FormField::Name);
    }

    #[test]
    fn rejected_submit_keeps_state() {
        let mut form = AddTaskForm::new();
        form.next_field();
        assert_eq!(form.submit(), Err(FormError::EmptySubmission));
        assert_eq!(form.focus(), FormField::Detail);
    }

    #[test]
    fn edits_go_to_focused_field() {
        let mut form = AddTaskForm::new();
        type_text(&mut form, "abc");
        form.edit(InputRequest::DeletePrevChar);
        form.set_focus(FormField::Detail);
        type_text(&mut form, "xyz");

        assert_eq!(form.name(), "ab");
        assert_eq!(form.detail(), "xyz");
        assert_eq!(form.input(FormField::Detail).value(), "xyz");
    }
}
