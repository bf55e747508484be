use reqwest::StatusCode;
use thiserror::Error;

/// Shown when the service answered with a non-success HTTP status.
pub const NETWORK_NOT_OK_MESSAGE: &str = "Network response was not OK";

/// Fallback for transport failures that carry no description of their own.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong";

/// Shown when the service answered 2xx but the body was not the expected
/// prediction object.
pub const MALFORMED_RESPONSE_MESSAGE: &str = "Unexpected response from the predictor service";

#[derive(Error, Debug)]
pub enum PrawncastError {
    /// A field's text did not parse as a finite number. Caught before any
    /// request is sent.
    #[error("{field} is not a number: {value:?}")]
    Validation { field: &'static str, value: String },

    /// The service was reached but answered outside the 2xx range.
    #[error("predictor returned HTTP {0}")]
    BadStatus(StatusCode),

    /// The request never completed: DNS, refused connection, timeout,
    /// dropped connection mid-body.
    #[error("transport error: {0}")]
    Transport(String),

    /// A 2xx response whose body failed to decode as a prediction.
    #[error("malformed predictor response: {0}")]
    MalformedResponse(#[from] serde_json::Error),
}

impl PrawncastError {
    /// Collapses the error into the single line the result box shows.
    /// Transport descriptions pass through verbatim; everything else maps to
    /// a fixed message so server internals never leak into the UI.
    pub fn user_message(&self) -> String {
        match self {
            PrawncastError::Validation { .. } => self.to_string(),
            PrawncastError::BadStatus(_) => NETWORK_NOT_OK_MESSAGE.to_string(),
            PrawncastError::Transport(description) => {
                if description.trim().is_empty() {
                    GENERIC_FAILURE_MESSAGE.to_string()
                } else {
                    description.clone()
                }
            }
            PrawncastError::MalformedResponse(_) => MALFORMED_RESPONSE_MESSAGE.to_string(),
        }
    }
}

impl From<reqwest::Error> for PrawncastError {
    fn from(error: reqwest::Error) -> Self {
        PrawncastError::Transport(error.to_string())
    }
}
