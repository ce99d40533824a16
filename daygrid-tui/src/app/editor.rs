use taskgen::TaskDraft;
use thiserror::Error;

use super::*;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditorError {
    #[error("Title cannot be empty")]
    EmptyTitle,
    #[error("Date must be a valid YYYY-MM-DD date (got \"{0}\")")]
    InvalidDate(String),
}

impl EditorState {
    /// Input for the focused text field; `None` when the color picker has focus.
    pub fn focused_input_mut(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            EditorField::Title => Some(&mut self.title),
            EditorField::Date => Some(&mut self.date),
            EditorField::Description => Some(&mut self.description),
            EditorField::Color => None,
        }
    }

    pub fn focus_next_field(&mut self) {
        self.focused_field = self.focused_field.next();
    }

    pub fn focus_previous_field(&mut self) {
        self.focused_field = self.focused_field.previous();
    }

    pub fn cycle_color(&mut self, forward: bool) {
        self.color = if forward {
            self.color.next()
        } else {
            self.color.previous()
        };
    }

    pub fn to_draft(&self) -> Result<TaskDraft, EditorError> {
        let title = self.title.value.trim();
        if title.is_empty() {
            return Err(EditorError::EmptyTitle);
        }
        let raw_date = self.date.value.trim();
        let date = TaskDate::parse(raw_date)
            .map_err(|_| EditorError::InvalidDate(raw_date.to_string()))?;
        Ok(TaskDraft::new(title, date)
            .with_description(self.description.value.trim())
            .with_color(self.color))
    }
}

impl App {
    pub fn open_editor_for_new(&mut self, date: Date) {
        self.popover = None;
        self.editor = Some(EditorState::for_new(TaskDate::new(date)));
        self.navigate_to(View::Editor);
    }

    pub fn open_editor_for_edit(&mut self, id: &str) {
        let Some(task) = self.store.get(id) else {
            tracing::warn!(id, "tried to edit a task that no longer exists");
            return;
        };
        self.editor = Some(EditorState::for_task(task));
        self.popover = None;
        self.navigate_to(View::Editor);
    }

    pub fn close_editor(&mut self) {
        self.editor = None;
        self.navigate_to(View::Calendar);
    }

    /// Validate and commit the editor. On failure nothing is mutated and the
    /// message is kept on the editor for display.
    pub fn save_editor(&mut self) -> Result<(), EditorError> {
        let Some(editor) = self.editor.as_mut() else {
            return Ok(());
        };
        let draft = match editor.to_draft() {
            Ok(draft) => draft,
            Err(e) => {
                editor.validation_error = Some(e.to_string());
                return Err(e);
            }
        };

        match editor.mode.clone() {
            EditorMode::Edit { id } => {
                tracing::debug!(%id, "updating task");
                let task = Task::with_id(id.clone(), draft);
                self.store.replace(&id, task);
                self.close_editor();
                self.set_status("Task updated".to_string());
            }
            EditorMode::Create => {
                let task = Task::from_draft(draft);
                tracing::debug!(id = %task.id, "creating task");
                self.store.append([task]);
                self.close_editor();
                self.set_status("Task created".to_string());
            }
        }
        self.clamp_focus();
        Ok(())
    }

    /// Ask for confirmation before deleting the task open in the editor.
    /// Only available when editing an existing task.
    pub fn request_delete(&mut self) {
        let Some(EditorMode::Edit { id }) = self.editor.as_ref().map(|e| &e.mode) else {
            return;
        };
        let Some(task) = self.store.get(id) else {
            return;
        };
        self.delete_context = Some(DeleteContext {
            task_id: task.id.clone(),
            display_title: task.title.clone(),
            display_date: task.date.to_string(),
        });
        self.navigate_to(View::ConfirmDelete);
    }

    pub fn confirm_delete(&mut self) {
        let Some(ctx) = self.delete_context.take() else {
            return;
        };
        self.store.remove(&ctx.task_id);
        tracing::debug!(id = %ctx.task_id, "deleted task");
        self.editor = None;
        self.popover = None;
        self.clamp_focus();
        self.navigate_to(View::Calendar);
        self.set_status(format!("Deleted \"{}\"", ctx.display_title));
    }

    pub fn cancel_delete(&mut self) {
        self.delete_context = None;
        if self.editor.is_some() {
            self.navigate_to(View::Editor);
        } else {
            self.navigate_to(View::Calendar);
        }
    }
}
