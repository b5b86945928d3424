use std::time::Duration;

use mindcheck_core::models::risk::{RiskRequest, RiskScores};
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use tracing::{debug, warn};

use crate::config::PredictConfig;
use crate::error::PredictError;
use crate::response::{parse_scores, rejection_detail};
use crate::RiskPredictor;

/// HTTP client for `POST {base_url}/predict_risk`.
#[derive(Debug, Clone)]
pub struct PredictClient {
    endpoint: String,
    http: Client,
}

impl PredictClient {
    pub fn new(config: &PredictConfig) -> Result<Self, PredictError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| PredictError::Config(e.to_string()))?;

        Ok(Self {
            endpoint: config.endpoint(),
            http,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send one prediction request. Never retries.
    pub async fn predict_risk(&self, request: &RiskRequest) -> Result<RiskScores, PredictError> {
        debug!(endpoint = %self.endpoint, ?request, "requesting risk prediction");

        let resp = self
            .http
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await?;

        let status = resp.status();
        let raw = resp.text().await?;

        if !status.is_success() {
            warn!(status = status.as_u16(), "prediction service rejected request");
            return Err(PredictError::Rejected {
                status: status.as_u16(),
                detail: rejection_detail(&raw),
            });
        }

        parse_scores(&raw)
    }
}

impl RiskPredictor for PredictClient {
    async fn predict(&self, request: &RiskRequest) -> Result<RiskScores, PredictError> {
        self.predict_risk(request).await
    }
}
