/*
[INPUT]:  Name and detail text captured by the add-task form or config seeds
[OUTPUT]: Immutable Task value with value equality
[POS]:    Data layer - task record
[UPDATE]: When the task record gains fields
*/

use serde::{Deserialize, Serialize};

/// A single entry in the task list.
///
/// Tasks are never edited after creation; equality is by value, so two tasks
/// with the same name and detail compare equal even when added separately.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Task {
    name: String,
    #[serde(default)]
    detail: String,
}

impl Task {
    pub fn new(name: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            detail: detail.into(),
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn detail(&self) -> &str {
        self.detail.as_str()
    }

    /// True when the task carries detail text worth revealing on expand.
    pub fn has_detail(&self) -> bool {
        !self.detail.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn tasks_compare_by_value() {
        assert_eq!(Task::new("Buy milk", ""), Task::new("Buy milk", ""));
        assert_ne!(Task::new("Buy milk", ""), Task::new("Buy milk", "2L"));
    }

    #[test]
    fn task_deserializes_without_detail() {
        let task: Task =
            serde_json::from_value(json!({ "name": "Call mom" })).expect("task should deserialize");

        assert_eq!(task.name(), "Call mom");
        assert_eq!(task.detail(), "");
        assert!(!task.has_detail());
    }
}
