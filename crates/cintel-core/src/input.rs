//! The unified payload handed from the normalizer to the analysis pipeline.

use serde::{Deserialize, Serialize};

/// Whether an attachment is sent to the completion service as an image or a
/// document part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttachmentKind {
    Image,
    Document,
}

/// A binary file kept for multimodal submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    /// Base64-encoded payload (standard alphabet, padded).
    pub data: String,
    pub mime_type: String,
    pub name: String,
    pub kind: AttachmentKind,
}

/// Roster text plus any binary attachments, ready for analysis.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RosterInput {
    pub text: String,
    pub attachments: Vec<Attachment>,
}

impl RosterInput {
    #[must_use]
    pub fn new(text: impl Into<String>, attachments: Vec<Attachment>) -> Self {
        Self {
            text: text.into(),
            attachments,
        }
    }

    /// True when there is nothing to analyse: blank text and no attachments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty() && self.attachments.is_empty()
    }
}
