use thiserror::Error;

/// Errors returned by [`crate::AnalysisClient`].
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// No completion key configured. Raised before any network call.
    #[error("Gemini API Key is missing. Set GEMINI_API_KEY in the environment or .env file.")]
    MissingApiKey,

    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx status from the service.
    #[error("completion service returned {status}: {message}")]
    Api { status: u16, message: String },

    /// The service answered without any candidate text.
    #[error("completion service returned no content: {0}")]
    EmptyResponse(String),

    /// Candidate text is not JSON matching the response schema.
    #[error("analysis response did not match the expected schema: {source}")]
    Malformed {
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid completion base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}
