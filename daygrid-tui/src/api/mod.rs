mod dev_backend;

use anyhow::{Context, Result};
use std::sync::Arc;
use taskgen::{GeminiClient, TaskGenerator};

use crate::config::DaygridConfig;

pub use dev_backend::{seed_dev_tasks, DevGenerator};

/// Generator backed by the Gemini API, configured from `cfg`.
pub fn gemini_generator(cfg: &DaygridConfig) -> Result<Arc<dyn TaskGenerator>> {
    let api_key = cfg
        .resolve_api_key()
        .context("No Gemini API key found. Set GEMINI_API_KEY or api_key in the config file.")?;
    let client = GeminiClient::new(cfg.gemini_settings(api_key))
        .context("Failed to create Gemini client")?;
    tracing::info!(model = client.model(), "using Gemini task generator");
    Ok(Arc::new(client))
}

pub fn dev_generator() -> Arc<dyn TaskGenerator> {
    tracing::info!("using offline dev task generator");
    Arc::new(DevGenerator::new())
}
