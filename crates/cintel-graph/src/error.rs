use thiserror::Error;

/// Failures along the three-step discovery chain.
///
/// The `Display` text of each variant is what ends up in
/// [`cintel_core::ExtractedSignal::error`].
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("Meta Access Token is missing. Set META_ACCESS_TOKEN or run 'cintel settings set-token'.")]
    MissingToken,

    #[error("Auth Error: {0}")]
    Auth(String),

    #[error("Access token is valid but no FB Page with IG permissions was found.")]
    NoPage,

    #[error("The linked FB Page does not have an Instagram Business account associated.")]
    NoBusinessAccount,

    #[error("Discovery Error: {0}")]
    Discovery(String),

    #[error("Discovery Error: no public profile returned for {0}")]
    NoProfile(String),

    /// Transport failure or an unreadable response body.
    #[error("Network connection error to Meta Graph API.")]
    Http(#[from] reqwest::Error),

    #[error("invalid graph base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}
