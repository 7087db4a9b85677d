use cintel_core::AttachmentKind;

use crate::error::NormalizeError;
use crate::file::InputFile;

use super::{encode_attachment, FormatHandler, Parsed};

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "bmp", "heic", "heif"];

/// Screenshots and photos, forwarded as base64 image parts.
pub struct ImageHandler;

impl FormatHandler for ImageHandler {
    fn name(&self) -> &'static str {
        "image"
    }

    fn accepts(&self, file: &InputFile) -> bool {
        file.mime_type.starts_with("image/") || file.has_extension(IMAGE_EXTENSIONS)
    }

    fn parse(&self, file: &InputFile) -> Result<Parsed, NormalizeError> {
        Ok(Parsed::attachment(encode_attachment(
            file,
            AttachmentKind::Image,
        )))
    }
}
