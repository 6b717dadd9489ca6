// src/xlsx.rs
// Minimal XLSX writer. An XLSX file is a deflate-compressed OOXML package;
// five of its six parts never change between runs and are kept here as
// template constants. Only the worksheet part (and the A1-style cell
// references inside it) is generated.

use std::{
    fs::{self, File},
    io::Write,
    path::Path,
};

use zip::{CompressionMethod, ZipWriter, write::SimpleFileOptions};

use crate::error::ScrapeError;
use crate::store::PresenceRecord;

const CONTENT_TYPES_XML: &str = r#"<?xml version='1.0' encoding='UTF-8' standalone='yes'?>
<Types xmlns='http://schemas.openxmlformats.org/package/2006/content-types'>
  <Default Extension='rels' ContentType='application/vnd.openxmlformats-package.relationships+xml'/>
  <Default Extension='xml' ContentType='application/xml'/>
  <Override PartName='/xl/workbook.xml' ContentType='application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml'/>
  <Override PartName='/xl/worksheets/sheet1.xml' ContentType='application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml'/>
  <Override PartName='/xl/styles.xml' ContentType='application/vnd.openxmlformats-officedocument.spreadsheetml.styles+xml'/>
</Types>
"#;

const RELS_XML: &str = r#"<?xml version='1.0' encoding='UTF-8' standalone='yes'?>
<Relationships xmlns='http://schemas.openxmlformats.org/package/2006/relationships'>
  <Relationship Id='rId1' Type='http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument' Target='xl/workbook.xml'/>
</Relationships>
"#;

const WORKBOOK_XML: &str = r#"<?xml version='1.0' encoding='UTF-8' standalone='yes'?>
<workbook xmlns='http://schemas.openxmlformats.org/spreadsheetml/2006/main' xmlns:r='http://schemas.openxmlformats.org/officeDocument/2006/relationships'>
  <sheets>
    <sheet name='Presencia' sheetId='1' r:id='rId1'/>
  </sheets>
</workbook>
"#;

const WORKBOOK_RELS_XML: &str = r#"<?xml version='1.0' encoding='UTF-8' standalone='yes'?>
<Relationships xmlns='http://schemas.openxmlformats.org/package/2006/relationships'>
  <Relationship Id='rId1' Type='http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet' Target='worksheets/sheet1.xml'/>
  <Relationship Id='rId2' Type='http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles' Target='styles.xml'/>
</Relationships>
"#;

// One default font/fill/border/cell-format; enough for the package to be
// valid without any rich formatting.
const STYLES_XML: &str = r#"<?xml version='1.0' encoding='UTF-8' standalone='yes'?>
<styleSheet xmlns='http://schemas.openxmlformats.org/spreadsheetml/2006/main'>
  <fonts count='1'>
    <font>
      <sz val='11'/>
      <color theme='1'/>
      <name val='Calibri'/>
      <family val='2'/>
    </font>
  </fonts>
  <fills count='2'>
    <fill>
      <patternFill patternType='none'/>
    </fill>
    <fill>
      <patternFill patternType='gray125'/>
    </fill>
  </fills>
  <borders count='1'>
    <border>
      <left/>
      <right/>
      <top/>
      <bottom/>
      <diagonal/>
    </border>
  </borders>
  <cellStyleXfs count='1'>
    <xf numFmtId='0' fontId='0' fillId='0' borderId='0'/>
  </cellStyleXfs>
  <cellXfs count='1'>
    <xf numFmtId='0' fontId='0' fillId='0' borderId='0' xfId='0'/>
  </cellXfs>
  <cellStyles count='1'>
    <cellStyle name='Normal' xfId='0' builtinId='0'/>
  </cellStyles>
</styleSheet>
"#;

/// Write the whole history into a single-sheet workbook at `path`,
/// creating parent directories and overwriting any previous file.
pub fn write_workbook(records: &[PresenceRecord], path: &Path) -> Result<(), ScrapeError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let sheet_xml = build_sheet_xml(records);
    let mut zip = ZipWriter::new(File::create(path)?);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let parts: [(&str, &str); 6] = [
        ("[Content_Types].xml", CONTENT_TYPES_XML),
        ("_rels/.rels", RELS_XML),
        ("xl/workbook.xml", WORKBOOK_XML),
        ("xl/_rels/workbook.xml.rels", WORKBOOK_RELS_XML),
        ("xl/styles.xml", STYLES_XML),
        ("xl/worksheets/sheet1.xml", &sheet_xml),
    ];
    for (name, contents) in parts {
        zip.start_file(name, options)?;
        zip.write_all(contents.as_bytes())?;
    }
    zip.finish()?;
    Ok(())
}

/// Worksheet part: a fixed Fecha/Presencia header row, then one row per
/// record, all as inline string cells.
fn build_sheet_xml(records: &[PresenceRecord]) -> String {
    let mut rows_xml = String::new();
    rows_xml.push_str(&row_xml(1, &["Fecha", "Presencia"]));
    for (i, record) in records.iter().enumerate() {
        rows_xml.push_str(&row_xml(i + 2, &[&record.date, &record.presence]));
    }
    format!(
        "<?xml version='1.0' encoding='UTF-8' standalone='yes'?>\
         <worksheet xmlns='http://schemas.openxmlformats.org/spreadsheetml/2006/main'>\
         <sheetData>{rows_xml}</sheetData>\
         </worksheet>"
    )
}

fn row_xml(row_index: usize, values: &[&str]) -> String {
    let mut cells = String::new();
    for (column_index, value) in values.iter().enumerate() {
        let cell_ref = format!("{}{}", column_letter(column_index), row_index);
        cells.push_str(&format!(
            "<c r=\"{cell_ref}\" t=\"inlineStr\"><is><t>{}</t></is></c>",
            escape_xml(value)
        ));
    }
    format!("<row r=\"{row_index}\">{cells}</row>")
}

/// Bijective base-26 column letters from a zero-based index:
/// 0 → A, 25 → Z, 26 → AA, 701 → ZZ.
pub fn column_letter(index: usize) -> String {
    let mut n = index + 1;
    let mut out = String::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        out.insert(0, (b'A' + rem as u8) as char);
        n = (n - 1) / 26;
    }
    out
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}
