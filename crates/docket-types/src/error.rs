use thiserror::Error;

#[derive(Error, Debug)]
pub enum TableError {
    #[error("column {column} has {found} cells, expected {expected}")]
    ColumnLengthMismatch {
        column: String,
        expected: usize,
        found: usize,
    },
}
