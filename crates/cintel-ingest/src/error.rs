use thiserror::Error;

/// Failure to turn one uploaded file into text or an attachment.
#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("spreadsheet error: {0}")]
    Spreadsheet(#[from] calamine::Error),

    #[error("document archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("document XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unsupported format for {name}: {reason}")]
    UnsupportedFormat { name: String, reason: String },
}
