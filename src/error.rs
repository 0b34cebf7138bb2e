use crate::validation::ValidationError;

/// Represents the possible errors that can occur when using the ModelsLab SDK.
#[derive(Debug, thiserror::Error)]
pub enum ModelsLabError {
    #[error("API key is missing. Please provide it or set the MODELSLAB_API_KEY environment variable.")]
    MissingApiKey,
    /// The client configuration is out of bounds. Raised at construction, never at first use.
    #[error("Invalid client configuration: {0}")]
    InvalidConfig(#[source] ValidationError),
    /// A request payload broke one of its declared field constraints. Nothing was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The HTTP transport failed (DNS, connection refused, reset, timeout).
    #[error("Network request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The API answered with a status other than 200.
    #[error("API error {status_code}: Request failed - {details}")]
    Remote { status_code: u16, details: String },
    #[error("Failed to parse API response: {0}")]
    Decode(#[from] serde_json::Error),
    /// A fetch attempt came back without `status == "success"`.
    #[error("fetch failed: {message}")]
    FetchFailed { message: String },
    /// The polling budget ran out. `source` is the last error that was observed.
    #[error("fetch failed after {attempts} retries: {source}")]
    PollExhausted {
        attempts: u32,
        #[source]
        source: Box<ModelsLabError>,
    },
    #[error("operation canceled")]
    Canceled,
    #[error("{operation} is only available for enterprise users")]
    EnterpriseOnly { operation: &'static str },
    #[error("URL parsing failed: {0}")]
    UrlParseFailed(#[from] url::ParseError),
    #[error("File I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to decode base64 data: {0}")]
    Base64(#[from] base64::DecodeError),
}

impl ModelsLabError {
    /// Returns `true` for errors produced by caller cancellation.
    pub fn is_canceled(&self) -> bool {
        matches!(self, ModelsLabError::Canceled)
    }
}
