use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::{ModelConfig, entities::app_errors::CoreError},
    recommendation::ports::ModelClient,
};

/// Text-completion client against an Ollama-compatible `/api/generate`
/// endpoint.
#[derive(Debug, Clone)]
pub struct OllamaModelClient {
    base_url: String,
    model: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct GenerateRequest {
    model: String,
    prompt: String,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: String,
}

impl OllamaModelClient {
    pub fn new(config: &ModelConfig) -> Result<Self, anyhow::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_owned(),
            model: config.model.clone(),
            client,
        })
    }

    fn map_transport_err(&self, e: reqwest::Error) -> CoreError {
        // Timeouts stay distinguishable from a down service so callers can
        // retry only the slow case.
        if e.is_timeout() {
            tracing::error!("Model request timed out: {e}");
            return CoreError::ModelTimeout(format!("{} did not answer in time", self.base_url));
        }

        tracing::error!("Model request failed: {e}");
        CoreError::ModelUnavailable(format!("could not reach model at {}", self.base_url))
    }
}

impl ModelClient for OllamaModelClient {
    async fn complete(&self, prompt: String) -> Result<String, CoreError> {
        let url = format!("{}/api/generate", self.base_url);
        let request = GenerateRequest {
            model: self.model.clone(),
            prompt,
            stream: false,
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| self.map_transport_err(e))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Model API error: {status} - {error_text}");
            return Err(CoreError::ModelUnavailable(format!(
                "model returned error status {status}"
            )));
        }

        let generated: GenerateResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse model response: {e}");
            CoreError::ModelUnavailable("could not parse model response".to_owned())
        })?;

        Ok(generated.response.trim().to_owned())
    }
}
