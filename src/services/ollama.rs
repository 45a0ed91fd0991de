//! Streaming client for the Ollama generate API

use crate::config::Config;
use crate::services::streaming::NdjsonReassembler;
use crate::types::GenerateRequest;
use anyhow::{Context, Result};
use bytes::Bytes;
use futures::stream::{BoxStream, StreamExt};

/// Client for a local Ollama server.
#[derive(Clone)]
pub struct OllamaClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
}

impl OllamaClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.ollama_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
        }
    }

    /// Start a streaming generation and return the decoded text stream.
    ///
    /// Each item is the `response` text of one complete backend line, yielded
    /// as soon as the chunk carrying its newline arrives. Backend failures
    /// are raised here, before the stream exists, so a failed request never
    /// turns into a half-written response body. Dropping the stream drops the
    /// underlying connection, which stops the backend pull.
    pub async fn generate_stream(&self, prompt: String) -> Result<BoxStream<'static, Result<Bytes>>> {
        let url = format!("{}/api/generate", self.base_url);
        let request = GenerateRequest {
            model: self.model.clone(),
            prompt,
            stream: true,
        };

        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .with_context(|| format!("sending generate request to {url}"))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Ollama returned an error: {} {}", status, body);
            anyhow::bail!("Ollama API error: {status} - {body}");
        }

        if response.content_length() == Some(0) {
            anyhow::bail!("Ollama returned an empty response body");
        }

        let mut upstream = response.bytes_stream();
        let stream = async_stream::try_stream! {
            let mut reassembler = NdjsonReassembler::new();
            while let Some(chunk) = upstream.next().await {
                let chunk = chunk.context("reading Ollama response stream")?;
                for fragment in reassembler.push(&chunk) {
                    if !fragment.response.is_empty() {
                        yield Bytes::from(fragment.response);
                    }
                }
            }
            // Transport end-of-stream; a partial trailing line is dropped here.
            reassembler.finish();
        };

        Ok(stream.boxed())
    }
}
