use cintel_core::AttachmentKind;

use crate::error::NormalizeError;
use crate::file::InputFile;

use super::{encode_attachment, FormatHandler, Parsed};

/// PDFs, which the completion service reads natively.
pub struct BinaryPassthroughHandler;

impl FormatHandler for BinaryPassthroughHandler {
    fn name(&self) -> &'static str {
        "binary-passthrough"
    }

    fn accepts(&self, file: &InputFile) -> bool {
        file.mime_type == "application/pdf" || file.has_extension(&["pdf"])
    }

    fn parse(&self, file: &InputFile) -> Result<Parsed, NormalizeError> {
        let mut attachment = encode_attachment(file, AttachmentKind::Document);
        attachment.mime_type = "application/pdf".to_string();
        Ok(Parsed::attachment(attachment))
    }
}
