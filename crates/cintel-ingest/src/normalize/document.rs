use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::NormalizeError;
use crate::file::InputFile;

use super::{FormatHandler, Parsed};

const DOCX_MIME: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
const DOC_MIME: &str = "application/msword";
const BODY_PART: &str = "word/document.xml";

/// Word documents. Only the OOXML `.docx` container is readable; legacy
/// binary `.doc` files are claimed so they fail loudly instead of being
/// skipped.
pub struct DocumentHandler;

impl FormatHandler for DocumentHandler {
    fn name(&self) -> &'static str {
        "document"
    }

    fn accepts(&self, file: &InputFile) -> bool {
        matches!(file.mime_type.as_str(), DOCX_MIME | DOC_MIME) || file.has_extension(&["docx", "doc"])
    }

    fn parse(&self, file: &InputFile) -> Result<Parsed, NormalizeError> {
        if file.mime_type == DOC_MIME || file.has_extension(&["doc"]) {
            return Err(NormalizeError::UnsupportedFormat {
                name: file.name.clone(),
                reason: "legacy binary .doc; save as .docx or PDF".to_string(),
            });
        }

        let mut archive = zip::ZipArchive::new(Cursor::new(file.bytes.as_slice()))?;
        let mut xml = String::new();
        archive.by_name(BODY_PART)?.read_to_string(&mut xml)?;

        Ok(Parsed::text(extract_body_text(&xml)?))
    }
}

/// Collects run text from a `word/document.xml` body, one line per paragraph.
pub(crate) fn extract_body_text(xml: &str) -> Result<String, NormalizeError> {
    let mut reader = Reader::from_str(xml);
    let mut out = String::new();
    let mut in_run = false;
    let mut in_text = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"r" => in_run = true,
                b"t" => in_text = true,
                _ => {}
            },
            Event::End(e) => match e.local_name().as_ref() {
                b"r" => in_run = false,
                b"t" => in_text = false,
                b"p" => out.push('\n'),
                _ => {}
            },
            Event::Empty(e) if e.local_name().as_ref() == b"p" => out.push('\n'),
            // Tab stops in paragraph properties are also `w:tab`; only count
            // the ones inside a run.
            Event::Empty(e) if in_run => match e.local_name().as_ref() {
                b"tab" => out.push('\t'),
                b"br" | b"cr" => out.push('\n'),
                _ => {}
            },
            Event::Text(t) if in_text => out.push_str(&t.unescape()?),
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(out.trim_end().to_string())
}
