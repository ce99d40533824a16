use taskgen::{GenerationError, TaskDraft};

use super::*;

impl App {
    /// Move `Idle -> Pending` and hand back what to send to the generator.
    ///
    /// Returns `None` (and leaves state untouched) for a blank prompt or while a
    /// request is already in flight.
    pub fn submit_generation(&mut self) -> Option<GenerationRequest> {
        if self.is_generating() {
            self.set_status("Still generating tasks, please wait".to_string());
            return None;
        }
        let prompt = self.prompt_input.value.trim().to_string();
        if prompt.is_empty() {
            return None;
        }

        self.error_message = None;
        self.generation = GenerationState::Pending;
        self.prompt_input.clear();
        self.set_status("Generating tasks...".to_string());

        let reference_date = TaskDate::new(self.view_date);
        tracing::info!(%reference_date, prompt_len = prompt.len(), "submitting generation request");
        Some(GenerationRequest {
            prompt,
            reference_date,
        })
    }

    /// Apply a generator result: drafts get fresh ids and are appended, or the
    /// failure is surfaced in the error box. Either way the state returns to Idle.
    pub fn finish_generation(&mut self, result: Result<Vec<TaskDraft>, GenerationError>) {
        self.generation = GenerationState::Idle;
        match result {
            Ok(drafts) => {
                let tasks: Vec<Task> = drafts.into_iter().map(Task::from_draft).collect();
                let count = tasks.len();
                self.store.append(tasks);
                self.error_message = None;
                tracing::info!(count, "generated tasks added");
                self.set_status(match count {
                    0 => "No tasks were generated".to_string(),
                    1 => "Added 1 task".to_string(),
                    n => format!("Added {n} tasks"),
                });
            }
            Err(e) => {
                tracing::error!(error = %e, "task generation failed");
                self.error_message = Some(e.user_message().to_string());
                self.clear_status();
            }
        }
    }
}
