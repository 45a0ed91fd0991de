//! Terminal-side consumer for the review relay

use crate::services::streaming::Utf8Decoder;
use crate::types::{ErrorResponse, ReviewRequest};
use anyhow::{bail, Context, Result};
use futures::stream::StreamExt;

/// Client for the relay's review endpoint.
pub struct ReviewClient {
    http: reqwest::Client,
    base_url: String,
}

impl ReviewClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Submit a review and hand each decoded text chunk to `on_chunk` as it
    /// arrives, in arrival order. The end of the byte stream is the sole
    /// termination signal. On a non-success response the relay's JSON error
    /// envelope is surfaced as the error message.
    pub async fn review<F>(&self, code: &str, prompt: &str, mut on_chunk: F) -> Result<()>
    where
        F: FnMut(&str),
    {
        let url = format!("{}/api/review", self.base_url);
        let request = ReviewRequest {
            code: code.to_string(),
            prompt: prompt.to_string(),
        };

        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .with_context(|| format!("sending review request to {url}"))?;

        let status = response.status();
        if !status.is_success() {
            let message = match response.json::<ErrorResponse>().await {
                Ok(envelope) => envelope.error,
                Err(_) => format!("relay returned {status}"),
            };
            bail!(message);
        }

        let mut body = response.bytes_stream();
        let mut decoder = Utf8Decoder::new();
        while let Some(chunk) = body.next().await {
            let chunk = chunk.context("reading review stream")?;
            let text = decoder.decode(&chunk);
            if !text.is_empty() {
                on_chunk(&text);
            }
        }

        Ok(())
    }
}
