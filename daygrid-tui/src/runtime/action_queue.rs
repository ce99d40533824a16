use taskgen::{GenerationError, TaskDraft};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

#[derive(Debug, Clone)]
pub(super) enum Action {
    SubmitGeneration,
    GenerationFinished {
        result: Result<Vec<TaskDraft>, GenerationError>,
    },
    SaveEditor,
    ConfirmDelete,
}

pub(super) type ActionTx = UnboundedSender<Action>;
pub(super) type ActionRx = UnboundedReceiver<Action>;

pub(super) fn channel() -> (ActionTx, ActionRx) {
    mpsc::unbounded_channel()
}
