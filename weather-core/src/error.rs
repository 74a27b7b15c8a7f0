use thiserror::Error;

/// Why a weather fetch produced no record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request never got an HTTP response (DNS, connect, TLS, body read).
    #[error("network unavailable: {0}")]
    Transport(String),

    #[error("city '{0}' was not found by the weather provider")]
    CityNotFound(String),

    #[error("weather provider rejected the API key")]
    Unauthorized,

    #[error("weather provider returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// 2xx response whose body does not match the expected schema.
    #[error("malformed weather response: {0}")]
    Malformed(String),
}

impl FetchError {
    /// Short heading suitable for the error view.
    pub fn title(&self) -> &'static str {
        match self {
            FetchError::Transport(_) => "Network unavailable",
            FetchError::CityNotFound(_) => "City not found",
            FetchError::Unauthorized => "Invalid API key",
            FetchError::Status { .. } => "Weather service error",
            FetchError::Malformed(_) => "Unexpected weather data",
        }
    }
}
