use crate::config::Config;
use crate::services::{OllamaClient, TemplateEngine};
use anyhow::Result;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub ollama: OllamaClient,
    pub templates: Arc<TemplateEngine>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        tracing::info!("[STATE] Ollama backend: {}", config.ollama_url);
        tracing::info!("[STATE] Model: {}", config.model);

        let ollama = OllamaClient::new(&config);
        let templates = TemplateEngine::new()?;

        Ok(Self {
            config: Arc::new(config),
            ollama,
            templates: Arc::new(templates),
        })
    }
}
