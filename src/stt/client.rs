use std::path::Path;

use anyhow::{Context, Result};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::audio::AudioConfig;
use crate::config::Config;

/// Configuration for the recognition service client
#[derive(Debug, Clone)]
pub struct SttConfig {
    /// API key of the service key pair
    pub api_key: String,
    /// Secret key of the service key pair
    pub secret_key: String,
    /// Recognition endpoint URL
    pub endpoint: String,
}

impl SttConfig {
    pub fn new(config: &Config) -> Self {
        Self {
            api_key: config.api_key.clone(),
            secret_key: config.secret_key.clone(),
            endpoint: config.endpoint.clone(),
        }
    }
}

/// Speech-to-text service client
pub struct SttClient {
    client: Client,
    config: SttConfig,
}

impl SttClient {
    pub fn new(config: SttConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Submit one recording and return the working transcript
    ///
    /// Blocks until the service responds; no retry. The transcript is the
    /// first result's first alternative; a response carrying no results
    /// yields the empty string.
    pub async fn recognize(&self, path: &Path, audio: &AudioConfig) -> Result<String> {
        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read audio file: {:?}", path))?;

        let request = RecognizeRequest {
            config: audio.clone(),
            audio: AudioContent {
                content: BASE64.encode(&bytes),
            },
        };

        debug!(
            endpoint = %self.config.endpoint,
            bytes = bytes.len(),
            "Submitting audio for recognition"
        );

        let response = self
            .client
            .post(&self.config.endpoint)
            .basic_auth(&self.config.api_key, Some(&self.config.secret_key))
            .json(&request)
            .send()
            .await
            .context("Failed to send request to the recognition service")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Recognition service error: {} - {}", status, body);
        }

        let response: RecognizeResponse = response
            .json()
            .await
            .context("Failed to parse recognition response")?;

        Ok(response.first_transcript().to_string())
    }
}

#[derive(Debug, Serialize)]
struct RecognizeRequest {
    config: AudioConfig,
    audio: AudioContent,
}

#[derive(Debug, Serialize)]
struct AudioContent {
    content: String,
}

/// Recognition results as returned by the service
#[derive(Debug, Deserialize)]
pub struct RecognizeResponse {
    #[serde(default)]
    pub results: Vec<RecognitionResult>,
}

/// One recognized segment with alternatives ranked by confidence
#[derive(Debug, Deserialize)]
pub struct RecognitionResult {
    #[serde(default)]
    pub alternatives: Vec<RecognitionAlternative>,
}

#[derive(Debug, Deserialize)]
pub struct RecognitionAlternative {
    pub transcript: String,
    #[serde(default)]
    pub confidence: Option<f64>,
}

impl RecognizeResponse {
    /// First segment's first alternative; empty when the service returned
    /// no segments
    pub fn first_transcript(&self) -> &str {
        self.results
            .first()
            .and_then(|r| r.alternatives.first())
            .map(|a| a.transcript.as_str())
            .unwrap_or("")
    }
}
