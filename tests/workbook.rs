// tests/workbook.rs

use std::fs::{self, File};
use std::io::Read;
use std::path::PathBuf;

use presencia_scrape::store::PresenceRecord;
use presencia_scrape::xlsx::{column_letter, write_workbook};
use zip::ZipArchive;

fn record(date: &str, presence: &str) -> PresenceRecord {
    PresenceRecord {
        date: date.into(),
        presence: presence.into(),
    }
}

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("presencia_xlsx_{name}"));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn read_part(archive: &mut ZipArchive<File>, name: &str) -> String {
    let mut part = archive.by_name(name).unwrap();
    let mut text = String::new();
    part.read_to_string(&mut text).unwrap();
    text
}

#[test]
fn workbook_contains_all_parts_and_record_values() {
    let dir = tmp_dir("basic");
    let path = dir.join("presence.xlsx");

    let records = vec![record("2024-05-01", "87%"), record("2024-05-02", "88%")];
    write_workbook(&records, &path).unwrap();

    let mut archive = ZipArchive::new(File::open(&path).unwrap()).unwrap();
    let names: Vec<String> = (0..archive.len())
        .map(|i| archive.by_index(i).unwrap().name().to_string())
        .collect();
    for expected in [
        "[Content_Types].xml",
        "_rels/.rels",
        "xl/workbook.xml",
        "xl/_rels/workbook.xml.rels",
        "xl/styles.xml",
        "xl/worksheets/sheet1.xml",
    ] {
        assert!(names.iter().any(|n| n == expected), "missing {expected}");
    }

    let sheet = read_part(&mut archive, "xl/worksheets/sheet1.xml");
    assert!(sheet.contains("Fecha"));
    assert!(sheet.contains("Presencia"));
    assert!(sheet.contains("2024-05-01"));
    assert!(sheet.contains("87%"));
    assert!(sheet.contains("2024-05-02"));
    assert!(sheet.contains("88%"));

    // Header lands in row 1, first record in row 2
    assert!(sheet.contains(r#"<row r="1">"#));
    assert!(sheet.contains(r#"<c r="A2" t="inlineStr">"#));
    assert!(sheet.contains(r#"<c r="B2" t="inlineStr">"#));
}

#[test]
fn workbook_overwrites_and_creates_parent_dirs() {
    let dir = tmp_dir("overwrite");
    let path = dir.join("nested").join("out").join("presence.xlsx");

    write_workbook(&[record("2024-05-01", "87%")], &path).unwrap();
    write_workbook(&[record("2024-05-02", "88%")], &path).unwrap();

    let mut archive = ZipArchive::new(File::open(&path).unwrap()).unwrap();
    let sheet = read_part(&mut archive, "xl/worksheets/sheet1.xml");
    assert!(sheet.contains("2024-05-02"));
    assert!(!sheet.contains("2024-05-01"));
}

#[test]
fn cell_text_is_xml_escaped() {
    let dir = tmp_dir("escape");
    let path = dir.join("presence.xlsx");

    write_workbook(&[record("2024-05-01", "<87% & \"falling\">")], &path).unwrap();

    let mut archive = ZipArchive::new(File::open(&path).unwrap()).unwrap();
    let sheet = read_part(&mut archive, "xl/worksheets/sheet1.xml");
    assert!(sheet.contains("&lt;87% &amp; &quot;falling&quot;&gt;"));
}

#[test]
fn empty_history_still_writes_the_header_row() {
    let dir = tmp_dir("empty");
    let path = dir.join("presence.xlsx");

    write_workbook(&[], &path).unwrap();

    let mut archive = ZipArchive::new(File::open(&path).unwrap()).unwrap();
    let sheet = read_part(&mut archive, "xl/worksheets/sheet1.xml");
    assert!(sheet.contains("Fecha"));
    assert!(sheet.contains(r#"<row r="1">"#));
    assert!(!sheet.contains(r#"<row r="2">"#));
}

#[test]
fn column_letters_follow_bijective_base_26() {
    assert_eq!(column_letter(0), "A");
    assert_eq!(column_letter(1), "B");
    assert_eq!(column_letter(25), "Z");
    assert_eq!(column_letter(26), "AA");
    assert_eq!(column_letter(27), "AB");
    assert_eq!(column_letter(51), "AZ");
    assert_eq!(column_letter(52), "BA");
    assert_eq!(column_letter(701), "ZZ");
    assert_eq!(column_letter(702), "AAA");
}
