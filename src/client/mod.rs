// src/client/mod.rs

use crate::errors::Result;
use crate::models::{PredictionResponse, RequestPayload};

pub mod http;

pub use http::HttpPredictor;

/// A backend that turns a request payload into a prediction response.
///
/// Implementations perform exactly one exchange per call: no retry, no
/// timeout and no cancellation. Failures come back as a categorized
/// [`PredictError`](crate::errors::PredictError); a response without a
/// `prediction` is still `Ok` and left for the caller to judge.
pub trait Predictor: Send + Sync {
    fn send(&self, payload: &RequestPayload) -> impl std::future::Future<Output = Result<PredictionResponse>> + Send;
}
