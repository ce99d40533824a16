use async_trait::async_trait;

use crate::domain::{TaskDate, TaskDraft};
use crate::GenerationError;

/// Turns a natural-language request into task drafts.
///
/// Abstracts the completion provider so the UI can run against an offline
/// generator in dev mode and a stub in tests.
#[async_trait]
pub trait TaskGenerator: Send + Sync {
    /// Interpret `prompt` relative to `reference_date` and return one draft per occurrence.
    async fn generate(
        &self,
        prompt: &str,
        reference_date: TaskDate,
    ) -> Result<Vec<TaskDraft>, GenerationError>;
}
