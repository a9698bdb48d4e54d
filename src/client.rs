//! Prediction service client
//!
//! Thin wrapper over the remote service: one outbound request per call, no
//! retries, no caching. Failures are normalized into the two user-facing
//! error shapes and surfaced, never swallowed.

use std::time::Duration;

use reqwest::{Client, StatusCode};

use crate::config::Config;
use crate::models::{ExplanationRecord, PatientRecord, PredictionResult};

/// Result of one full submission: the prediction, then its explanation
#[derive(Debug, Clone)]
pub struct Assessment {
    pub prediction: PredictionResult,
    pub explanation: ExplanationRecord,
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Transport-level failure (connection, timeout, malformed body)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-2xx response; the message is the service's own `detail` when
    /// present, else a fixed per-endpoint default
    #[error("{message}")]
    Service { status: StatusCode, message: String },
}

#[derive(Clone)]
pub struct PredictionClient {
    client: Client,
    base_url: String,
}

impl PredictionClient {
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url: config.api_base_url.clone(),
        })
    }

    /// For testing: point the client at a mock server.
    #[cfg(test)]
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    pub async fn predict(&self, record: &PatientRecord) -> Result<PredictionResult, ClientError> {
        self.post_json("/predict", record, "Failed to get prediction").await
    }

    pub async fn explain(&self, record: &PatientRecord) -> Result<ExplanationRecord, ClientError> {
        self.post_json("/explain", record, "Failed to get explanation").await
    }

    /// The full submission flow: exactly one `/predict` call, then exactly
    /// one `/explain` call. A prediction failure short-circuits before
    /// `/explain` is ever issued.
    pub async fn assess(&self, record: &PatientRecord) -> Result<Assessment, ClientError> {
        let prediction = self.predict(record).await?;
        let explanation = self.explain(record).await?;
        Ok(Assessment {
            prediction,
            explanation,
        })
    }

    async fn post_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        record: &PatientRecord,
        default_message: &str,
    ) -> Result<T, ClientError> {
        let url = format!("{}{}", self.base_url, path);

        let response = self.client.post(&url).json(record).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("{} returned {}: {}", path, status, body);
            return Err(ClientError::Service {
                status,
                message: service_message(&body, default_message),
            });
        }

        response.json::<T>().await.map_err(ClientError::Network)
    }
}

/// Prefer the service's own `detail` message, verbatim; fall back to the
/// fixed default.
fn service_message(body: &str, default_message: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("detail").and_then(|d| d.as_str()).map(String::from))
        .unwrap_or_else(|| default_message.to_string())
}
