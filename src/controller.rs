// src/controller.rs
use std::sync::atomic::{AtomicBool, Ordering};
use uuid::Uuid;

use crate::client::Predictor;
use crate::errors::{ErrorKind, PredictError, Result};
use crate::models::{RawFormValues, RequestPayload};
use crate::payload;
use crate::presentation::{round_to_tenth, PresentationSurface};
use crate::validator;

/// How a single trigger ended.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    /// A prediction was rendered, rounded to one decimal.
    Predicted { minutes: f64 },
    /// An error message was rendered.
    Failed { kind: ErrorKind, message: String },
    /// Another submission was in flight; nothing happened.
    Ignored,
}

impl SubmissionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionOutcome::Predicted { .. })
    }
}

/// Drives one submission at a time from raw form values to a rendered
/// result or error.
pub struct SubmissionController<P, S> {
    predictor: P,
    surface: S,
    in_flight: AtomicBool,
}

impl<P, S> SubmissionController<P, S>
where
    P: Predictor,
    S: PresentationSurface,
{
    pub fn new(predictor: P, surface: S) -> Self {
        Self {
            predictor,
            surface,
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Handles one trigger.
    ///
    /// A trigger that arrives while another submission is in flight is
    /// ignored outright. Otherwise stale messages are cleared and the input
    /// validated; validation failures render without entering the loading
    /// state. Once loading is shown it is always hidden again before this
    /// returns, whatever the outcome.
    pub async fn submit(&self, raw: RawFormValues) -> SubmissionOutcome {
        let Some(mut flight) = Flight::claim(&self.in_flight, &self.surface) else {
            log::warn!("Submission ignored: a prediction is already in flight");
            return SubmissionOutcome::Ignored;
        };

        let submission_id = Uuid::new_v4();
        self.surface.hide_messages();

        let input = match validator::validate(&raw) {
            Ok(input) => input,
            Err(e) => {
                log::warn!("[{}] Rejected input: {}", submission_id, e);
                return self.fail(PredictError::from(e));
            }
        };

        flight.show_loading();

        let payload = payload::build(input);
        log::debug!("[{}] Requesting prediction for {:?}", submission_id, payload);

        match self.request(&payload).await {
            Ok(minutes) => {
                log::info!("[{}] Predicted delivery time: {} minutes", submission_id, minutes);
                self.surface.show_result(minutes);
                SubmissionOutcome::Predicted { minutes }
            }
            Err(e) => {
                log::error!("[{}] Prediction error ({}): {:?}", submission_id, e.kind(), e);
                self.fail(e)
            }
        }
    }

    async fn request(&self, payload: &RequestPayload) -> Result<f64> {
        let response = self.predictor.send(payload).await?;
        response
            .prediction
            .map(round_to_tenth)
            .ok_or_else(PredictError::invalid_response)
    }

    fn fail(&self, err: PredictError) -> SubmissionOutcome {
        let message = err.user_message();
        self.surface.show_error(&message);
        SubmissionOutcome::Failed {
            kind: err.kind(),
            message,
        }
    }
}

/// Holds the in-flight flag for one submission. Dropping it hides the
/// loading indicator (if shown) and releases the flag, on every exit path.
struct Flight<'a, S: PresentationSurface> {
    in_flight: &'a AtomicBool,
    surface: &'a S,
    loading: bool,
}

impl<'a, S: PresentationSurface> Flight<'a, S> {
    fn claim(in_flight: &'a AtomicBool, surface: &'a S) -> Option<Self> {
        in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()?;
        Some(Self {
            in_flight,
            surface,
            loading: false,
        })
    }

    fn show_loading(&mut self) {
        self.surface.show_loading();
        self.loading = true;
    }
}

impl<S: PresentationSurface> Drop for Flight<'_, S> {
    fn drop(&mut self) {
        if self.loading {
            self.surface.hide_loading();
        }
        self.in_flight.store(false, Ordering::Release);
    }
}
