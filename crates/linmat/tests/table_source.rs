//! Integration tests for the table source and its configuration.

use std::io::Write;

use linmat::config::{load_table_source_config, Delimiter, TableSourceConfig};
use linmat::io::{DelimitedTableSource, MatrixSource};
use linmat::multiply;

fn write_table(dir: &std::path::Path, name: &str, content: &str) {
    let mut file = std::fs::File::create(dir.join(name)).unwrap();
    file.write_all(content.as_bytes()).unwrap();
}

// ---------------------------------------------------------------------------
// DelimitedTableSource
// ---------------------------------------------------------------------------

#[test]
fn load_all_columns() {
    let dir = tempfile::tempdir().unwrap();
    write_table(dir.path(), "prices.tsv", "a\tb\tc\n1\t2\t3\n4\t5\t6\n");
    let source = DelimitedTableSource::new(TableSourceConfig::new(dir.path(), Delimiter::Tab));

    let m = source.load_matrix("prices", &[]).unwrap();
    assert_eq!(m.shape(), (2, 3));
    assert_eq!(m.get_cell(2, 3).unwrap(), 6.0);
}

#[test]
fn load_selected_columns_in_requested_order() {
    let dir = tempfile::tempdir().unwrap();
    write_table(dir.path(), "prices.csv", "a,b,c\n1,2,3\n4,5,6\n");
    let source = DelimitedTableSource::new(TableSourceConfig::new(dir.path(), Delimiter::Comma));

    let m = source.load_matrix("prices", &["c", "a"]).unwrap();
    assert_eq!(m.to_rows(), vec![vec![3.0, 1.0], vec![6.0, 4.0]]);
}

#[test]
fn loaded_matrices_feed_the_multiplication_engine() {
    let dir = tempfile::tempdir().unwrap();
    write_table(dir.path(), "left.tsv", "x\ty\ty2\n2\t2\t2\n2\t2\t2\n");
    write_table(dir.path(), "right.tsv", "p\tq\n2\t2\n2\t2\n2\t2\n");
    let source = DelimitedTableSource::new(TableSourceConfig::new(dir.path(), Delimiter::Tab));

    let a = source.load_matrix("left", &[]).unwrap();
    let b = source.load_matrix("right", &[]).unwrap();
    let product = multiply(&[(&a).into(), (&b).into()]).unwrap();
    assert_eq!(product.to_rows(), vec![vec![12.0, 12.0], vec![12.0, 12.0]]);
}

#[test]
fn missing_table_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let source = DelimitedTableSource::new(TableSourceConfig::new(dir.path(), Delimiter::Tab));
    assert!(source.load_matrix("nope", &[]).is_err());
}

#[test]
fn unknown_column_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    write_table(dir.path(), "t.tsv", "a\tb\n1\t2\n");
    let source = DelimitedTableSource::new(TableSourceConfig::new(dir.path(), Delimiter::Tab));
    let err = source.load_matrix("t", &["z"]).unwrap_err();
    assert!(err.to_string().contains("Unknown column 'z'"));
}

#[test]
fn non_numeric_cell_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    write_table(dir.path(), "t.tsv", "a\tb\n1\tx\n");
    let source = DelimitedTableSource::new(TableSourceConfig::new(dir.path(), Delimiter::Tab));
    assert!(source.load_matrix("t", &[]).is_err());
}

#[test]
fn header_only_table_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    write_table(dir.path(), "t.tsv", "a\tb\n");
    let source = DelimitedTableSource::new(TableSourceConfig::new(dir.path(), Delimiter::Tab));
    assert!(source.load_matrix("t", &[]).is_err());
}

// ---------------------------------------------------------------------------
// TableSourceConfig
// ---------------------------------------------------------------------------

#[test]
fn config_defaults_to_tsv_in_working_directory() {
    let cfg = TableSourceConfig::default();
    assert_eq!(cfg.delimiter, Delimiter::Tab);
    assert_eq!(cfg.extension(), "tsv");
    assert_eq!(cfg.table_path("m"), std::path::Path::new(".").join("m.tsv"));
}

#[test]
fn delimiter_from_str() {
    assert_eq!("TAB".parse::<Delimiter>().unwrap(), Delimiter::Tab);
    assert_eq!("csv".parse::<Delimiter>().unwrap(), Delimiter::Comma);
    assert!("pipe".parse::<Delimiter>().is_err());
}

#[test]
fn config_loads_from_json_with_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("source.json");
    write_table(dir.path(), "source.json", r#"{"root": "/data", "delimiter": "comma"}"#);

    let cfg = load_table_source_config(&path).unwrap();
    assert_eq!(cfg.root, std::path::PathBuf::from("/data"));
    assert_eq!(cfg.delimiter, Delimiter::Comma);
    // extension follows the delimiter when not given
    assert_eq!(cfg.extension, None);
    assert_eq!(cfg.extension(), "csv");
    assert_eq!(cfg.table_path("m"), std::path::PathBuf::from("/data/m.csv"));
}

#[test]
fn config_explicit_extension_wins_over_delimiter() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("source.json");
    write_table(
        dir.path(),
        "source.json",
        r#"{"root": "/data", "delimiter": "tab", "extension": "txt"}"#,
    );

    let cfg = load_table_source_config(&path).unwrap();
    assert_eq!(cfg.extension(), "txt");
    assert_eq!(cfg.table_path("m"), std::path::PathBuf::from("/data/m.txt"));
}

#[test]
fn comma_config_from_json_reads_csv_tables() {
    let dir = tempfile::tempdir().unwrap();
    write_table(dir.path(), "t.csv", "a,b\n1,2\n");
    let json = format!(
        r#"{{"root": {}, "delimiter": "comma"}}"#,
        serde_json::to_string(&dir.path()).unwrap()
    );
    let cfg: TableSourceConfig = serde_json::from_str(&json).unwrap();
    let source = DelimitedTableSource::new(cfg);

    let m = source.load_matrix("t", &[]).unwrap();
    assert_eq!(m.to_rows(), vec![vec![1.0, 2.0]]);
}

#[test]
fn config_round_trips_through_json() {
    let cfg = TableSourceConfig::new("/tmp/tables", Delimiter::Comma);
    let json = serde_json::to_string(&cfg).unwrap();
    let cfg2: TableSourceConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(cfg, cfg2);
}

#[test]
fn config_load_missing_file_errors() {
    assert!(load_table_source_config("/nonexistent/source.json").is_err());
}
