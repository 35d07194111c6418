//! Ingestion tests - header handling, padding, ragged input, failure

mod common;

use std::io::{Seek, SeekFrom, Write};

use common::{generated_tsv, test_model};
use tsvgrid::table::{parse_tsv, IngestError, Table};

#[test]
fn test_every_row_has_col_count_cells() {
    let input = "a\tb\n1\n1\t2\t3\t4\n\n1\t2\n";
    let table = Table::new(parse_tsv(input.as_bytes()).unwrap());

    assert_eq!(table.col_count(), 4);
    assert_eq!(table.headers().len(), 4);
    // The blank line is a row of empty cells
    assert_eq!(table.row_count(), 4);
    assert_eq!(table.rows()[2].cells(), ["", "", "", ""]);
    for row in table.rows() {
        assert_eq!(row.len(), 4);
    }
    assert_eq!(table.headers()[2], "Col 3");
    assert_eq!(table.headers()[3], "Col 4");
    assert_eq!(table.cell(0, 3), Some(""));
}

#[test]
fn test_load_example() {
    let table = Table::new(parse_tsv("Name\tAge\nBob\t30\nAlice\t25\n".as_bytes()).unwrap());

    assert_eq!(table.headers(), &["Name".to_string(), "Age".to_string()]);
    assert_eq!(table.cell(0, 0), Some("Bob"));
    assert_eq!(table.cell(1, 1), Some("25"));
    assert_eq!(table.sort_column(), None);
}

#[test]
fn test_snapshot_matches_loaded_rows() {
    let table = Table::new(parse_tsv(generated_tsv(50, 3).as_bytes()).unwrap());
    assert_eq!(table.rows(), table.original_rows());
}

#[test]
fn test_crlf_file_input() {
    let mut file = tempfile::tempfile().unwrap();
    file.write_all(b"id\tname\r\n1\tone\r\n2\ttwo\r\n").unwrap();
    file.seek(SeekFrom::Start(0)).unwrap();

    let table = Table::new(parse_tsv(file).unwrap());

    assert_eq!(table.headers()[1], "name");
    assert_eq!(table.cell(1, 1), Some("two"));
}

#[test]
fn test_empty_input_is_fatal() {
    let err = parse_tsv(&b""[..]).unwrap_err();
    assert!(matches!(err, IngestError::Empty));
    assert_eq!(err.to_string(), "No TSV data on stdin.");
}

#[test]
fn test_header_only_input_gives_empty_grid() {
    let mut model = test_model("a\tb\tc\n");

    assert_eq!(model.table.row_count(), 0);
    assert_eq!(model.table.col_count(), 3);

    // Interacting with an empty grid is harmless
    let mut driver = common::Driver::default();
    assert_eq!(driver.click(&mut model, 50.0, 200.0), None);
    assert_eq!(model.grid.hover, None);
}

#[test]
fn test_widths_measured_once_at_font_apply() {
    let model = test_model("Name\tAge\nBob\t30\nAlice\t25\n");

    // "Alice" 50px + " ^" 20px + 22px padding; "Age" floors at 80px
    assert_eq!(model.table.col_widths(), &[92.0, 80.0]);
    assert_eq!(model.table.content_width(), 172.0);
}
