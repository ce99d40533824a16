use std::collections::HashSet;
use std::sync::Arc;

use crate::storage::{KeyValueStore, TASKS_KEY};
use crate::types::Task;

/// Ordered task collection mirrored to the key-value store after every mutation.
pub struct TaskStore {
    tasks: Vec<Task>,
    backend: Arc<dyn KeyValueStore>,
}

impl TaskStore {
    /// Read the persisted collection. Missing or corrupt data loads as empty.
    pub fn load(backend: Arc<dyn KeyValueStore>) -> Self {
        let tasks = match backend.get(TASKS_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<Task>>(&raw) {
                Ok(tasks) => dedupe_ids(tasks),
                Err(e) => {
                    tracing::warn!(error = %e, "stored tasks are unreadable, starting empty");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "could not read stored tasks, starting empty");
                Vec::new()
            }
        };
        tracing::debug!(count = tasks.len(), "loaded tasks");
        Self { tasks, backend }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn append(&mut self, new_tasks: impl IntoIterator<Item = Task>) {
        let before = self.tasks.len();
        self.tasks.extend(new_tasks);
        if self.tasks.len() != before {
            self.persist();
        }
    }

    /// Replace the task with a matching id in place. No-op if absent.
    pub fn replace(&mut self, id: &str, updated: Task) {
        let Some(slot) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return;
        };
        *slot = Task {
            id: id.to_string(),
            ..updated
        };
        self.persist();
    }

    /// Remove the task with a matching id. No-op if absent.
    pub fn remove(&mut self, id: &str) {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.tasks.len() != before {
            self.persist();
        }
    }

    /// Overwrite the stored collection. Failures are logged, never surfaced.
    pub fn persist(&self) {
        let raw = match serde_json::to_string(&self.tasks) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::error!(error = %e, "failed to serialize tasks");
                return;
            }
        };
        if let Err(e) = self.backend.set(TASKS_KEY, &raw) {
            tracing::error!(error = %e, "failed to persist tasks");
        }
    }
}

fn dedupe_ids(tasks: Vec<Task>) -> Vec<Task> {
    let mut seen = HashSet::new();
    let before = tasks.len();
    let tasks: Vec<Task> = tasks
        .into_iter()
        .filter(|t| seen.insert(t.id.clone()))
        .collect();
    if tasks.len() != before {
        tracing::warn!(dropped = before - tasks.len(), "dropped tasks with duplicate ids");
    }
    tasks
}
