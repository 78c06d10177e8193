//! Output adapters.
//!
//! A table is written as CSV or JSON depending on the destination
//! extension. An unrecognized extension is not an error: the table is
//! written as CSV beside the requested path so a run never aborts over
//! a file name.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use docket_types::{Cell, Table};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("destination already exists: {0}")]
    AlreadyExists(PathBuf),

    #[error("failed to write table: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode csv: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to encode json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Write one table to `dest`, picking the format from the extension.
/// Returns the path actually written, which differs from `dest` only
/// when an unsupported extension was downgraded to CSV.
pub fn write_table(table: &Table, dest: &Path, overwrite: bool) -> Result<PathBuf, ExportError> {
    let ext = dest
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();
    let dest = match ext.as_str() {
        "csv" | "json" => dest.to_path_buf(),
        _ => {
            let fallback = dest.with_extension("csv");
            warn!(
                requested = %dest.display(),
                writing = %fallback.display(),
                "unsupported output extension, writing csv instead"
            );
            fallback
        }
    };
    if !overwrite && dest.exists() {
        return Err(ExportError::AlreadyExists(dest));
    }
    if dest.extension().and_then(|e| e.to_str()) == Some("json") {
        write_json(table, &dest)?;
    } else {
        write_csv(table, &dest)?;
    }
    info!(table = %table.name, rows = table.row_count(), path = %dest.display(), "wrote table");
    Ok(dest)
}

fn write_csv(table: &Table, dest: &Path) -> Result<(), ExportError> {
    let mut writer = csv::Writer::from_path(dest)?;
    writer.write_record(table.column_names())?;
    for idx in 0..table.row_count() {
        let record: Vec<String> = table.row(idx).iter().map(|c| c.to_string()).collect();
        writer.write_record(&record)?;
    }
    writer.flush()?;
    Ok(())
}

/// JSON output is an array of objects keyed by column name, one per
/// row, nulls kept explicit.
fn write_json(table: &Table, dest: &Path) -> Result<(), ExportError> {
    let mut rows = Vec::with_capacity(table.row_count());
    for idx in 0..table.row_count() {
        let mut obj = serde_json::Map::new();
        for (col, cell) in table.columns.iter().zip(table.row(idx)) {
            obj.insert(col.name.clone(), cell_to_json(cell));
        }
        rows.push(serde_json::Value::Object(obj));
    }
    let mut out = BufWriter::new(File::create(dest)?);
    serde_json::to_writer_pretty(&mut out, &rows)?;
    out.flush()?;
    Ok(())
}

fn cell_to_json(cell: &Cell) -> serde_json::Value {
    match cell {
        Cell::Null => serde_json::Value::Null,
        Cell::Str(s) => serde_json::Value::String(s.clone()),
        Cell::Int(i) => serde_json::Value::from(*i),
        Cell::Float(f) => serde_json::Value::from(*f),
        Cell::Bool(b) => serde_json::Value::Bool(*b),
        Cell::Date(d) => serde_json::Value::String(d.format("%m/%d/%Y").to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docket_types::Tabular;
    use pretty_assertions::assert_eq;

    struct Row {
        name: String,
        balance: Option<f64>,
    }

    impl Tabular for Row {
        const COLUMNS: &'static [&'static str] = &["Name", "Balance"];

        fn cells(&self) -> Vec<Cell> {
            vec![self.name.clone().into(), Cell::from_opt_float(self.balance)]
        }
    }

    fn sample() -> Table {
        Table::from_rows(
            "sample",
            &[
                Row {
                    name: "DOE JOHN".into(),
                    balance: Some(12.5),
                },
                Row {
                    name: "ROE JANE".into(),
                    balance: None,
                },
            ],
        )
    }

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("table-engine-export-{}-{}", std::process::id(), name))
    }

    #[test]
    fn csv_round_trips_header_and_rows() -> anyhow::Result<()> {
        let dest = temp_path("out.csv");
        let written = write_table(&sample(), &dest, true)?;
        assert_eq!(written, dest);
        let body = std::fs::read_to_string(&dest)?;
        let mut lines = body.lines();
        assert_eq!(lines.next(), Some("Name,Balance"));
        assert_eq!(lines.next(), Some("DOE JOHN,12.50"));
        assert_eq!(lines.next(), Some("ROE JANE,"));
        std::fs::remove_file(&dest).ok();
        Ok(())
    }

    #[test]
    fn json_keeps_nulls_explicit() -> anyhow::Result<()> {
        let dest = temp_path("out.json");
        write_table(&sample(), &dest, true)?;
        let body = std::fs::read_to_string(&dest)?;
        let rows: Vec<serde_json::Value> = serde_json::from_str(&body)?;
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["Name"], "DOE JOHN");
        assert!(rows[1]["Balance"].is_null());
        std::fs::remove_file(&dest).ok();
        Ok(())
    }

    #[test]
    fn unsupported_extension_degrades_to_csv() {
        let dest = temp_path("out.xlsx");
        let written = write_table(&sample(), &dest, true).unwrap();
        assert_eq!(written.extension().unwrap(), "csv");
        assert!(written.exists());
        std::fs::remove_file(&written).ok();
    }

    #[test]
    fn refuses_to_clobber_without_overwrite() {
        let dest = temp_path("exists.csv");
        std::fs::write(&dest, "old").unwrap();
        let err = write_table(&sample(), &dest, false).unwrap_err();
        assert!(matches!(err, ExportError::AlreadyExists(_)));
        let body = std::fs::read_to_string(&dest).unwrap();
        assert_eq!(body, "old");
        std::fs::remove_file(&dest).ok();
    }
}
