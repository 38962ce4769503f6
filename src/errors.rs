// src/errors.rs
use std::fmt;
use thiserror::Error;

/// Shown when the prediction endpoint cannot be reached at all.
pub const CONNECTION_MESSAGE: &str = "Unable to connect to the server. Please check your connection.";

/// Shown when a success response cannot be used.
pub const INVALID_RESPONSE_MESSAGE: &str = "Invalid response from server";

/// Fallback for failures that carry no message of their own.
pub const GENERIC_MESSAGE: &str = "An unexpected error occurred. Please try again.";

/// Input problems detected before anything is sent.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill in all required fields.")]
    MissingFields,

    #[error("Distance cannot be negative.")]
    NegativeDistance,

    #[error("Preparation time cannot be negative.")]
    NegativePrepTime,

    #[error("Courier experience cannot be negative.")]
    NegativeExperience,
}

/// Failure categories a submission can end in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Transport,
    Application,
    Unexpected,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Validation => write!(f, "validation"),
            ErrorKind::Transport => write!(f, "transport"),
            ErrorKind::Application => write!(f, "application"),
            ErrorKind::Unexpected => write!(f, "unexpected"),
        }
    }
}

/// Everything that can go wrong between a trigger and a rendered result.
/// The `Display` output is the message the user sees.
#[derive(Error, Debug)]
pub enum PredictError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Unable to connect to the server. Please check your connection.")]
    Transport(#[source] reqwest::Error),

    #[error("{message}")]
    Application { status: u16, message: String },

    #[error("{0}")]
    Unexpected(String),
}

impl PredictError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PredictError::Validation(_) => ErrorKind::Validation,
            PredictError::Transport(_) => ErrorKind::Transport,
            PredictError::Application { .. } => ErrorKind::Application,
            PredictError::Unexpected(_) => ErrorKind::Unexpected,
        }
    }

    /// Builds an application error, falling back to the status code when the
    /// server did not say what went wrong.
    pub fn application(status: u16, message: Option<String>) -> Self {
        let message = message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| format!("server error: {}", status));
        PredictError::Application { status, message }
    }

    pub fn invalid_response() -> Self {
        PredictError::Unexpected(INVALID_RESPONSE_MESSAGE.to_string())
    }

    /// The text handed to the presentation surface. Never empty.
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            GENERIC_MESSAGE.to_string()
        } else {
            message
        }
    }
}

/// Problems loading configuration or form files.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Invalid(String),
}

pub type Result<T> = std::result::Result<T, PredictError>;
