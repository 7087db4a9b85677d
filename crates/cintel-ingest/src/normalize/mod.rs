//! Format handlers and the accumulating [`Normalizer`].
//!
//! Each handler claims files by MIME type or extension and turns one file into
//! a text fragment, an attachment, or both. Structured office formats are
//! converted to text here and never forwarded as binary; images and PDFs are
//! forwarded as base64 attachments for multimodal submission.

mod binary;
mod document;
mod image;
mod spreadsheet;
mod text;

pub use binary::BinaryPassthroughHandler;
pub use document::DocumentHandler;
pub use image::ImageHandler;
pub use spreadsheet::SpreadsheetHandler;
pub use text::TextHandler;

use base64::Engine;
use cintel_core::{Attachment, AttachmentKind, RosterInput};

use crate::error::NormalizeError;
use crate::file::InputFile;

/// Output of one handler for one file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parsed {
    pub text: Option<String>,
    pub attachment: Option<Attachment>,
}

impl Parsed {
    #[must_use]
    pub fn text(fragment: String) -> Self {
        Self {
            text: Some(fragment),
            attachment: None,
        }
    }

    #[must_use]
    pub fn attachment(attachment: Attachment) -> Self {
        Self {
            text: None,
            attachment: Some(attachment),
        }
    }
}

/// Converts files of one family into [`Parsed`] output.
pub trait FormatHandler: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    fn accepts(&self, file: &InputFile) -> bool;

    /// # Errors
    ///
    /// Returns [`NormalizeError`] when the file claims this format but cannot
    /// be decoded.
    fn parse(&self, file: &InputFile) -> Result<Parsed, NormalizeError>;
}

pub(crate) fn encode_attachment(file: &InputFile, kind: AttachmentKind) -> Attachment {
    Attachment {
        data: base64::engine::general_purpose::STANDARD.encode(&file.bytes),
        mime_type: file.mime_type.clone(),
        name: file.name.clone(),
        kind,
    }
}

/// A file that a handler claimed but failed to parse.
#[derive(Debug)]
pub struct FileFailure {
    pub name: String,
    pub handler: &'static str,
    pub error: NormalizeError,
}

/// Accumulates roster text and attachments across many files.
pub struct Normalizer {
    handlers: Vec<Box<dyn FormatHandler>>,
    text: String,
    attachments: Vec<Attachment>,
    failures: Vec<FileFailure>,
    skipped: Vec<String>,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Normalizer {
    /// A normalizer with the built-in handlers, checked in order: text,
    /// spreadsheet, document, image, binary passthrough.
    #[must_use]
    pub fn new() -> Self {
        Self::with_handlers(vec![
            Box::new(TextHandler),
            Box::new(SpreadsheetHandler),
            Box::new(DocumentHandler),
            Box::new(ImageHandler),
            Box::new(BinaryPassthroughHandler),
        ])
    }

    #[must_use]
    pub fn with_handlers(handlers: Vec<Box<dyn FormatHandler>>) -> Self {
        Self {
            handlers,
            text: String::new(),
            attachments: Vec::new(),
            failures: Vec::new(),
            skipped: Vec::new(),
        }
    }

    /// Appends pasted text to the buffer.
    pub fn push_text(&mut self, fragment: &str) {
        if fragment.is_empty() {
            return;
        }
        if !self.text.is_empty() {
            self.text.push('\n');
        }
        self.text.push_str(fragment);
    }

    /// Routes `file` to the first handler that accepts it.
    ///
    /// Unrecognized files are skipped. A parse failure is logged and recorded
    /// in [`Self::failures`] without affecting files already ingested or yet
    /// to come.
    pub fn ingest(&mut self, file: &InputFile) {
        let Some(handler) = self.handlers.iter().find(|h| h.accepts(file)) else {
            tracing::debug!(file = %file.name, mime = %file.mime_type, "skipping unrecognized file type");
            self.skipped.push(file.name.clone());
            return;
        };
        let handler_name = handler.name();

        match handler.parse(file) {
            Ok(parsed) => {
                tracing::debug!(
                    file = %file.name,
                    handler = handler_name,
                    has_text = parsed.text.is_some(),
                    has_attachment = parsed.attachment.is_some(),
                    "normalized file"
                );
                if let Some(fragment) = parsed.text {
                    self.push_text(&fragment);
                }
                if let Some(attachment) = parsed.attachment {
                    self.attachments.push(attachment);
                }
            }
            Err(error) => {
                tracing::warn!(
                    file = %file.name,
                    handler = handler_name,
                    error = %error,
                    "failed to parse file; continuing with remaining files"
                );
                self.failures.push(FileFailure {
                    name: file.name.clone(),
                    handler: handler_name,
                    error,
                });
            }
        }
    }

    pub fn ingest_all<'a>(&mut self, files: impl IntoIterator<Item = &'a InputFile>) {
        for file in files {
            self.ingest(file);
        }
    }

    /// Drops the attachment at `index`; out-of-range indices are ignored.
    pub fn remove_attachment(&mut self, index: usize) -> Option<Attachment> {
        (index < self.attachments.len()).then(|| self.attachments.remove(index))
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn attachments(&self) -> &[Attachment] {
        &self.attachments
    }

    #[must_use]
    pub fn failures(&self) -> &[FileFailure] {
        &self.failures
    }

    /// Names of files no handler accepted.
    #[must_use]
    pub fn skipped(&self) -> &[String] {
        &self.skipped
    }

    #[must_use]
    pub fn into_input(self) -> RosterInput {
        RosterInput::new(self.text, self.attachments)
    }
}
