//! End-to-end export checks: raw API row JSON through normalization to
//! files on disk.

use notion_tabular::{build_from_database_rows, to_csv, to_spreadsheet, CsvEncoding, DatabaseRow};
use serde_json::json;

fn fetched_rows() -> Vec<DatabaseRow> {
    serde_json::from_value(json!([
        {
            "id": "r1",
            "created_time": "2024-06-01T00:00:00.000Z",
            "last_edited_time": "2024-06-02T00:00:00.000Z",
            "url": "https://www.notion.so/r1",
            "properties": {
                "名前": { "type": "title", "title": [{ "plain_text": "山田, 太郎" }] },
                "Score": { "type": "number", "number": 88.5 }
            }
        },
        {
            "id": "r2",
            "created_time": "2024-06-03T00:00:00.000Z",
            "last_edited_time": "2024-06-03T00:00:00.000Z",
            "url": "https://www.notion.so/r2",
            "properties": {
                "Score": { "type": "number", "number": 12 }
            }
        }
    ]))
    .unwrap()
}

#[test]
fn csv_export_preserves_columns_and_quoting() {
    let table = build_from_database_rows(&fetched_rows());
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rows.csv");

    assert!(to_csv(&table, &path, CsvEncoding::Utf8));

    let content = std::fs::read_to_string(&path).unwrap();
    let mut reader = csv::Reader::from_reader(content.as_bytes());
    let headers = reader.headers().unwrap().clone();
    assert_eq!(
        headers.iter().collect::<Vec<_>>(),
        vec!["ID", "作成日時", "最終更新日時", "URL", "Score", "名前"]
    );

    let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(records.len(), 2);
    // the comma inside the title survives the round trip
    assert_eq!(&records[0][5], "山田, 太郎");
    // the missing title in row 2 is an empty cell, not a short record
    assert_eq!(records[1].len(), headers.len());
    assert_eq!(&records[1][5], "");
}

#[test]
fn csv_export_succeeds_when_a_property_shadows_a_reserved_column() {
    let rows: Vec<DatabaseRow> = serde_json::from_value(json!([
        {
            "id": "r1",
            "url": "https://www.notion.so/r1",
            "properties": {
                "URL": { "type": "url", "url": "https://example.com" }
            }
        }
    ]))
    .unwrap();
    let table = build_from_database_rows(&rows);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rows.csv");

    assert!(to_csv(&table, &path, CsvEncoding::Utf8));

    let content = std::fs::read_to_string(&path).unwrap();
    let mut reader = csv::Reader::from_reader(content.as_bytes());
    let headers = reader.headers().unwrap().clone();
    assert_eq!(headers.iter().filter(|h| *h == "URL").count(), 1);
    for record in reader.records() {
        assert_eq!(record.unwrap().len(), headers.len());
    }
}

#[test]
fn bom_encoding_is_still_readable_utf8() {
    let table = build_from_database_rows(&fetched_rows());
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rows.csv");

    assert!(to_csv(&table, &path, CsvEncoding::Utf8Bom));

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(&bytes[..3], &[0xEF, 0xBB, 0xBF]);
    let text = String::from_utf8(bytes[3..].to_vec()).unwrap();
    assert!(text.starts_with("ID,"));
}

#[test]
fn spreadsheet_export_produces_a_workbook() {
    let table = build_from_database_rows(&fetched_rows());
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rows.xlsx");

    assert!(to_spreadsheet(&table, &path));
    // xlsx files are zip archives; check the magic header
    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(&bytes[..2], b"PK");
}
