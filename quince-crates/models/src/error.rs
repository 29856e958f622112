use quince_core::basic_types::ModelError;
use thiserror::Error;

/// Errors that can occur when building a model of a Tenner grid.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TennerError {
    #[error("A Tenner board needs at least one row")]
    EmptyBoard,
    #[error("The cell in row {row} and column {column} holds {value}, which is not a digit")]
    InvalidCellValue { row: usize, column: usize, value: u8 },
    #[error("The column sum {sum} of column {column} cannot be reached with {rows} rows")]
    UnreachableColumnSum { column: usize, sum: u32, rows: usize },
    #[error(transparent)]
    Model(#[from] ModelError),
}
