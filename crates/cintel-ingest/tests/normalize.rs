//! End-to-end normalization of a mixed upload batch.

use std::io::{Cursor, Write};

use cintel_core::AttachmentKind;
use cintel_ingest::{extract_handles, InputFile, Normalizer};
use zip::write::SimpleFileOptions;

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
  <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
  <Default Extension="xml" ContentType="application/xml"/>
  <Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>
  <Override PartName="/xl/worksheets/sheet1.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>
</Types>"#;

const ROOT_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/>
</Relationships>"#;

const WORKBOOK: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">
  <sheets><sheet name="Roster" sheetId="1" r:id="rId1"/></sheets>
</workbook>"#;

const WORKBOOK_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/>
</Relationships>"#;

const SHEET: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">
  <sheetData>
    <row r="1">
      <c r="A1" t="inlineStr"><is><t>Creator</t></is></c>
      <c r="B1" t="inlineStr"><is><t>Handle</t></is></c>
    </row>
    <row r="2">
      <c r="A2" t="inlineStr"><is><t>Asha</t></is></c>
      <c r="B2" t="inlineStr"><is><t>@asha.cooks</t></is></c>
    </row>
    <row r="3">
      <c r="A3" t="inlineStr"><is><t>Ravi</t></is></c>
      <c r="B3" t="inlineStr"><is><t>@ravi_fit</t></is></c>
    </row>
  </sheetData>
</worksheet>"#;

fn xlsx_bytes() -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);
    for (name, body) in [
        ("[Content_Types].xml", CONTENT_TYPES),
        ("_rels/.rels", ROOT_RELS),
        ("xl/workbook.xml", WORKBOOK),
        ("xl/_rels/workbook.xml.rels", WORKBOOK_RELS),
        ("xl/worksheets/sheet1.xml", SHEET),
    ] {
        writer.start_file(name, options).expect("start zip entry");
        writer.write_all(body.as_bytes()).expect("write zip entry");
    }
    writer.finish().expect("finish zip").into_inner()
}

#[test]
fn spreadsheet_rows_become_csv_text() {
    let mut normalizer = Normalizer::new();
    normalizer.ingest(&InputFile::new("roster.xlsx", xlsx_bytes()));

    assert!(normalizer.failures().is_empty(), "{:?}", normalizer.failures());
    assert!(normalizer.attachments().is_empty());
    assert_eq!(
        normalizer.text(),
        "--- Sheet: Roster ---\nCreator,Handle\nAsha,@asha.cooks\nRavi,@ravi_fit\n"
    );
}

#[test]
fn mixed_batch_merges_text_and_attachments() {
    let mut normalizer = Normalizer::new();
    normalizer.push_text("@pasted_first");

    let files = vec![
        InputFile::new("roster.xlsx", xlsx_bytes()),
        InputFile::new("more.csv", b"@csv_creator".to_vec()),
        InputFile::new("story.jpg", vec![0xFF, 0xD8, 0xFF]),
        InputFile::new("media-kit.pdf", b"%PDF".to_vec()),
        InputFile::new("music.mp3", vec![0, 1, 2]),
        InputFile::new("legacy.doc", vec![0xD0, 0xCF]),
    ];
    normalizer.ingest_all(&files);

    assert_eq!(normalizer.skipped(), ["music.mp3".to_string()]);
    assert_eq!(normalizer.failures().len(), 1);
    assert_eq!(normalizer.failures()[0].name, "legacy.doc");

    let input = normalizer.into_input();
    assert_eq!(
        extract_handles(&input.text),
        vec!["@pasted_first", "@asha.cooks", "@ravi_fit", "@csv_creator"]
    );
    let kinds: Vec<AttachmentKind> = input.attachments.iter().map(|a| a.kind).collect();
    assert_eq!(kinds, vec![AttachmentKind::Image, AttachmentKind::Document]);
}
