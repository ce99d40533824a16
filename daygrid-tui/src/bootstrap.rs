use anyhow::{Context, Result};
use std::sync::Arc;
use taskgen::TaskGenerator;
use time::Date;

use crate::api;
use crate::app::App;
use crate::cli::RunMode;
use crate::config::DaygridConfig;
use crate::storage::{FileStore, KeyValueStore, MemoryStore, TASKS_KEY};

/// Build the app state and generator for `mode`.
pub fn prepare(
    mode: RunMode,
    cfg: &DaygridConfig,
    today: Date,
) -> Result<(App, Arc<dyn TaskGenerator>)> {
    let (backend, generator): (Arc<dyn KeyValueStore>, Arc<dyn TaskGenerator>) = match mode {
        RunMode::Dev => (seeded_memory_store(today)?, api::dev_generator()),
        RunMode::Live => {
            let store = FileStore::new(cfg.data_dir()?);
            tracing::info!(data_dir = %store.root().display(), "using file storage");
            (Arc::new(store), api::gemini_generator(cfg)?)
        }
    };

    let app = App::new(backend, today);
    tracing::info!(tasks = app.task_count(), theme = %app.theme, "app state ready");
    Ok((app, generator))
}

fn seeded_memory_store(today: Date) -> Result<Arc<dyn KeyValueStore>> {
    let store = MemoryStore::new();
    let seed = serde_json::to_string(&api::seed_dev_tasks(today))
        .context("Failed to serialize dev tasks")?;
    store.set(TASKS_KEY, &seed)?;
    Ok(Arc::new(store))
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn dev_mode_starts_with_seed_tasks() {
        let (app, _generator) =
            prepare(RunMode::Dev, &DaygridConfig::default(), date!(2024 - 07 - 10)).unwrap();
        assert_eq!(app.tasks().len(), 5);
        assert!(app.tasks_on(date!(2024 - 07 - 10)).len() >= 2);
    }
}
