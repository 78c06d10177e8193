//! Columnar table container handed to output adapters.
//!
//! The pipeline materializes every entity kind as one named `Table`
//! with a consistent row count across columns; adapters only ever see
//! fully populated rows (missing values are explicit [`Cell::Null`]).

use chrono::NaiveDate;

use crate::error::TableError;

/// One typed value in a table cell. Absent fields are `Null`, never a
/// sentinel string.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Null,
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Date(NaiveDate),
}

impl Cell {
    pub fn from_opt_str(v: Option<String>) -> Self {
        match v {
            Some(s) => Cell::Str(s),
            None => Cell::Null,
        }
    }

    pub fn from_opt_date(v: Option<NaiveDate>) -> Self {
        match v {
            Some(d) => Cell::Date(d),
            None => Cell::Null,
        }
    }

    pub fn from_opt_float(v: Option<f64>) -> Self {
        match v {
            Some(f) => Cell::Float(f),
            None => Cell::Null,
        }
    }

    pub fn from_opt_int(v: Option<i64>) -> Self {
        match v {
            Some(i) => Cell::Int(i),
            None => Cell::Null,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Cell::Null)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Null => Ok(()),
            Cell::Str(s) => write!(f, "{s}"),
            Cell::Int(i) => write!(f, "{i}"),
            Cell::Float(v) => write!(f, "{v:.2}"),
            Cell::Bool(b) => write!(f, "{b}"),
            Cell::Date(d) => write!(f, "{}", d.format("%m/%d/%Y")),
        }
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::Str(s)
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Str(s.to_string())
    }
}

impl From<bool> for Cell {
    fn from(b: bool) -> Self {
        Cell::Bool(b)
    }
}

impl From<f64> for Cell {
    fn from(v: f64) -> Self {
        Cell::Float(v)
    }
}

impl From<i64> for Cell {
    fn from(v: i64) -> Self {
        Cell::Int(v)
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Column {
    pub name: String,
    pub cells: Vec<Cell>,
}

/// A named table: every column has the same number of cells.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Table {
    pub name: String,
    pub columns: Vec<Column>,
}

/// Row types that know their column layout. Implemented by every
/// entity row (case record, charge row, fee row, ...).
pub trait Tabular {
    const COLUMNS: &'static [&'static str];

    fn cells(&self) -> Vec<Cell>;
}

impl Table {
    /// Build a table from typed rows. The `Tabular` contract guarantees
    /// the row-consistency invariant.
    pub fn from_rows<R: Tabular>(name: impl Into<String>, rows: &[R]) -> Self {
        let mut columns: Vec<Column> = R::COLUMNS
            .iter()
            .map(|c| Column {
                name: c.to_string(),
                cells: Vec::with_capacity(rows.len()),
            })
            .collect();
        for row in rows {
            let cells = row.cells();
            debug_assert_eq!(cells.len(), R::COLUMNS.len());
            for (col, cell) in columns.iter_mut().zip(cells) {
                col.cells.push(cell);
            }
        }
        Self {
            name: name.into(),
            columns,
        }
    }

    /// Build from raw columns, validating the row-count invariant.
    pub fn from_columns(
        name: impl Into<String>,
        columns: Vec<Column>,
    ) -> Result<Self, TableError> {
        if let Some(first) = columns.first() {
            let expect = first.cells.len();
            for col in &columns {
                if col.cells.len() != expect {
                    return Err(TableError::ColumnLengthMismatch {
                        column: col.name.clone(),
                        expected: expect,
                        found: col.cells.len(),
                    });
                }
            }
        }
        Ok(Self {
            name: name.into(),
            columns,
        })
    }

    pub fn row_count(&self) -> usize {
        self.columns.first().map(|c| c.cells.len()).unwrap_or(0)
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// One row as cells, in column order.
    pub fn row(&self, idx: usize) -> Vec<&Cell> {
        self.columns.iter().map(|c| &c.cells[idx]).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    struct TestRow {
        a: String,
        b: Option<f64>,
    }

    impl Tabular for TestRow {
        const COLUMNS: &'static [&'static str] = &["A", "B"];

        fn cells(&self) -> Vec<Cell> {
            vec![self.a.clone().into(), Cell::from_opt_float(self.b)]
        }
    }

    #[test]
    fn from_rows_preserves_order_and_counts() {
        let rows = vec![
            TestRow {
                a: "x".into(),
                b: Some(1.5),
            },
            TestRow {
                a: "y".into(),
                b: None,
            },
        ];
        let t = Table::from_rows("test", &rows);
        assert_eq!(t.row_count(), 2);
        assert_eq!(t.column_names(), vec!["A", "B"]);
        assert_eq!(t.column("B").unwrap().cells[1], Cell::Null);
        assert_eq!(t.column("A").unwrap().cells[0], Cell::Str("x".into()));
    }

    #[test]
    fn from_columns_rejects_ragged_input() {
        let cols = vec![
            Column {
                name: "A".into(),
                cells: vec![Cell::Int(1)],
            },
            Column {
                name: "B".into(),
                cells: vec![],
            },
        ];
        assert!(Table::from_columns("bad", cols).is_err());
    }

    #[test]
    fn null_cell_displays_empty() {
        assert_eq!(Cell::Null.to_string(), "");
        assert_eq!(Cell::Float(3.0).to_string(), "3.00");
        assert_eq!(Cell::Bool(true).to_string(), "true");
    }
}
