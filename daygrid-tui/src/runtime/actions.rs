use crate::app::{App, GenerationRequest};
use std::sync::Arc;
use taskgen::TaskGenerator;

use super::action_queue::{Action, ActionTx};

pub(super) fn run_action(
    action: Action,
    app: &mut App,
    generator: &Arc<dyn TaskGenerator>,
    action_tx: &ActionTx,
) {
    match action {
        Action::SubmitGeneration => {
            if let Some(request) = app.submit_generation() {
                spawn_generation(Arc::clone(generator), request, action_tx.clone());
            }
        }
        Action::GenerationFinished { result } => {
            app.finish_generation(result);
        }
        Action::SaveEditor => {
            if let Err(e) = app.save_editor() {
                tracing::debug!(error = %e, "editor save refused");
            }
        }
        Action::ConfirmDelete => {
            app.confirm_delete();
        }
    }
}

/// Run the generator off the event loop; the result comes back as an action.
/// If the app has quit by then the send fails and the result is dropped.
fn spawn_generation(
    generator: Arc<dyn TaskGenerator>,
    request: GenerationRequest,
    action_tx: ActionTx,
) {
    tokio::spawn(async move {
        let result = generator
            .generate(&request.prompt, request.reference_date)
            .await;
        if action_tx
            .send(Action::GenerationFinished { result })
            .is_err()
        {
            tracing::debug!("generation finished after shutdown, result dropped");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::super::action_queue::channel;
    use super::*;
    use crate::app::{GenerationState, TextInput, View};
    use crate::storage::MemoryStore;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use taskgen::{GenerationError, TaskDate, TaskDraft};
    use time::macros::date;

    /// Generator returning a canned result and recording what it was asked.
    struct MockGenerator {
        result: Result<Vec<TaskDraft>, GenerationError>,
        calls: AtomicUsize,
        last_request: Mutex<Option<(String, TaskDate)>>,
    }

    impl MockGenerator {
        fn returning(result: Result<Vec<TaskDraft>, GenerationError>) -> Arc<Self> {
            Arc::new(Self {
                result,
                calls: AtomicUsize::new(0),
                last_request: Mutex::new(None),
            })
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl TaskGenerator for MockGenerator {
        async fn generate(
            &self,
            prompt: &str,
            reference_date: TaskDate,
        ) -> Result<Vec<TaskDraft>, GenerationError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_request.lock().unwrap() = Some((prompt.to_string(), reference_date));
            self.result.clone()
        }
    }

    fn test_app() -> App {
        let mut app = App::new(Arc::new(MemoryStore::new()), date!(2024 - 07 - 01));
        app.current_view = View::Prompt;
        app
    }

    async fn submit_and_finish(app: &mut App, generator: Arc<dyn TaskGenerator>) {
        let (tx, mut rx) = channel();
        run_action(Action::SubmitGeneration, app, &generator, &tx);
        assert_eq!(app.generation, GenerationState::Pending);

        let finished = rx.recv().await.expect("generation result");
        assert!(matches!(finished, Action::GenerationFinished { .. }));
        run_action(finished, app, &generator, &tx);
    }

    #[tokio::test]
    async fn generated_drafts_are_stored_with_fresh_ids() {
        let draft = TaskDraft::new(
            "Doctor's Appointment",
            TaskDate::parse("2024-07-25").unwrap(),
        );
        let mock = MockGenerator::returning(Ok(vec![draft]));
        let mut app = test_app();
        app.prompt_input = TextInput::with_value("Doctor's appointment on the 25th at 2pm");

        submit_and_finish(&mut app, mock.clone()).await;

        assert_eq!(mock.call_count(), 1);
        let (prompt, reference) = mock.last_request.lock().unwrap().clone().unwrap();
        assert_eq!(prompt, "Doctor's appointment on the 25th at 2pm");
        assert_eq!(reference.to_string(), "2024-07-01");

        assert_eq!(app.generation, GenerationState::Idle);
        assert!(app.error_message.is_none());
        assert_eq!(app.tasks().len(), 1);
        assert_eq!(app.tasks()[0].date.to_string(), "2024-07-25");
        assert!(!app.tasks()[0].id.is_empty());
    }

    #[tokio::test]
    async fn failed_generation_leaves_store_untouched() {
        let mock = MockGenerator::returning(Err(GenerationError::Malformed(
            "expected an array".to_string(),
        )));
        let mut app = test_app();
        app.prompt_input = TextInput::with_value("Something");

        submit_and_finish(&mut app, mock).await;

        assert_eq!(app.generation, GenerationState::Idle);
        assert!(app.tasks().is_empty());
        assert!(app.error_message.is_some());
    }

    #[tokio::test]
    async fn submit_while_pending_does_not_call_generator_again() {
        let mock = MockGenerator::returning(Ok(vec![]));
        let generator: Arc<dyn TaskGenerator> = mock.clone();
        let mut app = test_app();
        let (tx, mut rx) = channel();

        app.prompt_input = TextInput::with_value("First");
        run_action(Action::SubmitGeneration, &mut app, &generator, &tx);
        app.prompt_input = TextInput::with_value("Second");
        run_action(Action::SubmitGeneration, &mut app, &generator, &tx);

        let finished = rx.recv().await.expect("generation result");
        run_action(finished, &mut app, &generator, &tx);
        assert!(rx.try_recv().is_err());
        assert_eq!(mock.call_count(), 1);
        assert_eq!(app.prompt_input.value, "Second");
    }

    #[tokio::test]
    async fn dev_generator_round_trip() {
        let generator: Arc<dyn TaskGenerator> = Arc::new(crate::api::DevGenerator::instant());
        let mut app = test_app();
        app.prompt_input = TextInput::with_value("Gym on 2024-07-03 and 2024-07-05");

        submit_and_finish(&mut app, generator).await;

        let dates: Vec<String> = app.tasks().iter().map(|t| t.date.to_string()).collect();
        assert_eq!(dates, ["2024-07-03", "2024-07-05"]);
    }
}
