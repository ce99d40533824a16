use serde::{Deserialize, Serialize};
use taskgen::{TaskColor, TaskDate, TaskDraft};

/// A stored calendar task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: String,
    pub date: TaskDate,
    #[serde(default)]
    pub color: TaskColor,
}

impl Task {
    /// Attach a freshly generated id to a draft.
    pub fn from_draft(draft: TaskDraft) -> Self {
        Self::with_id(new_task_id(), draft)
    }

    pub fn with_id(id: impl Into<String>, draft: TaskDraft) -> Self {
        Self {
            id: id.into(),
            title: draft.title,
            description: draft.description,
            date: draft.date,
            color: draft.color,
        }
    }
}

pub fn new_task_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
