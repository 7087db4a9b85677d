use crate::error::NormalizeError;
use crate::file::InputFile;

use super::{FormatHandler, Parsed};

/// Plain text and CSV, decoded as UTF-8 (invalid sequences replaced).
pub struct TextHandler;

impl FormatHandler for TextHandler {
    fn name(&self) -> &'static str {
        "text"
    }

    fn accepts(&self, file: &InputFile) -> bool {
        matches!(file.mime_type.as_str(), "text/plain" | "text/csv")
            || file.has_extension(&["txt", "csv"])
    }

    fn parse(&self, file: &InputFile) -> Result<Parsed, NormalizeError> {
        let body = String::from_utf8_lossy(&file.bytes);
        // Spreadsheet exports often carry a UTF-8 BOM.
        let body = body.strip_prefix('\u{feff}').unwrap_or(&body);
        Ok(Parsed::text(body.to_string()))
    }
}
