// src/client/http.rs

use reqwest::header::ACCEPT;
use reqwest::{Client, Response};
use std::time::Instant;

use crate::client::Predictor;
use crate::config::ClientConfig;
use crate::errors::{PredictError, Result};
use crate::models::{ErrorBody, PredictionResponse, RequestPayload};

/// Talks to the prediction service over HTTP with JSON bodies.
pub struct HttpPredictor {
    client: Client,
    config: ClientConfig,
}

impl HttpPredictor {
    /// Creates a new `HttpPredictor`.
    pub fn new(client: Client, config: ClientConfig) -> Self {
        Self { client, config }
    }
}

impl Predictor for HttpPredictor {
    /// POSTs the payload and classifies the outcome.
    async fn send(&self, payload: &RequestPayload) -> Result<PredictionResponse> {
        let url = self.config.endpoint();

        log::debug!("📡 Calling prediction service: {}", url);

        let start = Instant::now();

        let resp = self
            .client
            .post(&url)
            .header(ACCEPT, "application/json")
            .json(payload)
            .send()
            .await
            .map_err(classify_send_error)?;

        let status = resp.status();
        let latency_ms = start.elapsed().as_millis() as u64;

        log::info!("📥 Prediction service response status: {} ({}ms)", status, latency_ms);

        if !status.is_success() {
            let message = read_error_message(resp).await;
            return Err(PredictError::application(status.as_u16(), message));
        }

        let body = resp.bytes().await.map_err(|e| {
            log::error!("Failed to read prediction response body: {}", e);
            PredictError::invalid_response()
        })?;

        serde_json::from_slice(&body).map_err(|e| {
            log::error!("Prediction response is not valid JSON: {}", e);
            PredictError::invalid_response()
        })
    }
}

/// A request that never got built is our fault; anything else from `send`
/// means the exchange itself failed.
fn classify_send_error(err: reqwest::Error) -> PredictError {
    if err.is_builder() {
        PredictError::Unexpected(err.to_string())
    } else {
        PredictError::Transport(err)
    }
}

async fn read_error_message(resp: Response) -> Option<String> {
    match resp.json::<ErrorBody>().await {
        Ok(body) => body.message(),
        Err(e) => {
            log::debug!("Error response carried no usable body: {}", e);
            None
        }
    }
}
