use serde::{Deserialize, Serialize};

/// Live profile signals fetched for one handle.
///
/// A populated `error` means the lookup failed; the other optional fields are
/// then empty and the record is excluded from the prompt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedSignal {
    pub handle: String,
    pub name: Option<String>,
    pub biography: Option<String>,
    pub follower_count: Option<u64>,
    pub media_count: Option<u64>,
    pub profile_picture_url: Option<String>,
    #[serde(default)]
    pub recent_captions: Vec<String>,
    pub error: Option<String>,
}

impl ExtractedSignal {
    /// A failed lookup for `handle`.
    #[must_use]
    pub fn failed(handle: &str, error: impl Into<String>) -> Self {
        Self {
            handle: handle.to_string(),
            error: Some(error.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}
