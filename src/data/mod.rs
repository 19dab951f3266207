pub mod columns;

pub use columns::{format_value, ColumnData};

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataError {
  #[error("{}: {source}", .path.display())]
  Io {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error(transparent)]
  Stream(#[from] io::Error),

  #[error("line {line}: could not parse {token:?} as a number")]
  Parse { line: usize, token: String },

  #[error("line {line}: expected {expected} columns, found {found}")]
  RaggedRow {
    line: usize,
    expected: usize,
    found: usize,
  },

  #[error("column {column} out of range, data has {available} columns")]
  ColumnOutOfRange { column: usize, available: usize },

  #[error("column {column} has {found} rows, expected {expected}")]
  LengthMismatch {
    column: usize,
    expected: usize,
    found: usize,
  },
}
