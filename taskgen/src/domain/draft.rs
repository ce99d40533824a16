use serde::{Deserialize, Serialize};

use super::{TaskColor, TaskDate};

/// A task payload before an id has been assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub date: TaskDate,
    #[serde(default)]
    pub color: TaskColor,
}

impl TaskDraft {
    pub fn new(title: impl Into<String>, date: TaskDate) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            date,
            color: TaskColor::default(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_color(mut self, color: TaskColor) -> Self {
        self.color = color;
        self
    }
}
