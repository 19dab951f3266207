use crate::data::DataError;
use crate::ode::S;
use log::{debug, info};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs::File;
use std::io::{prelude::*, BufReader, BufWriter};
use std::path::Path;

/// Everything before a `#` comment.
static ROW_DATA: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"^([^#]*)").expect("row pattern is valid"));

/// Equal length columns of a whitespace delimited text table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnData {
  columns: Vec<Vec<S>>,
}

impl ColumnData {
  pub fn from_columns(columns: Vec<Vec<S>>) -> Result<Self, DataError> {
    if let Some(expected) = columns.first().map(Vec::len) {
      if let Some((i, column)) = columns
        .iter()
        .enumerate()
        .find(|(_, column)| column.len() != expected)
      {
        return Err(DataError::LengthMismatch {
          column: i + 1,
          expected,
          found: column.len(),
        });
      }
    }

    Ok(Self { columns })
  }

  pub fn num_columns(&self) -> usize {
    self.columns.len()
  }

  pub fn num_rows(&self) -> usize {
    self.columns.first().map_or(0, Vec::len)
  }

  pub fn columns(&self) -> &[Vec<S>] {
    &self.columns
  }

  /// Column by 1-based index.
  pub fn column(&self, column: usize) -> Result<&[S], DataError> {
    column
      .checked_sub(1)
      .and_then(|i| self.columns.get(i))
      .map(Vec::as_slice)
      .ok_or(DataError::ColumnOutOfRange {
        column,
        available: self.num_columns(),
      })
  }

  /// Parse rows of numbers; `#` starts a comment and blank lines are skipped.
  pub fn parse<R: BufRead>(reader: R) -> Result<Self, DataError> {
    let mut columns: Vec<Vec<S>> = Vec::new();

    for (i, line) in reader.lines().enumerate() {
      let line = line?;
      let line_number = i + 1;
      let data = ROW_DATA
        .captures(&line)
        .and_then(|captures| captures.get(1))
        .map_or("", |m| m.as_str());

      let row = data
        .split_whitespace()
        .map(|token| {
          token.parse::<S>().map_err(|_| DataError::Parse {
            line: line_number,
            token: token.to_string(),
          })
        })
        .collect::<Result<Vec<_>, _>>()?;

      if row.is_empty() {
        continue;
      }

      if columns.is_empty() {
        columns = vec![Vec::new(); row.len()];
      } else if row.len() != columns.len() {
        return Err(DataError::RaggedRow {
          line: line_number,
          expected: columns.len(),
          found: row.len(),
        });
      }

      for (column, value) in columns.iter_mut().zip(row) {
        column.push(value);
      }
    }

    Ok(Self { columns })
  }

  pub fn load(path: &Path) -> Result<Self, DataError> {
    let file = File::open(path).map_err(|source| DataError::Io {
      path: path.to_path_buf(),
      source,
    })?;
    let data = Self::parse(BufReader::new(file))?;
    debug!(
      "read {} rows x {} columns from {}",
      data.num_rows(),
      data.num_columns(),
      path.display()
    );
    Ok(data)
  }

  pub fn write<W: Write>(&self, writer: &mut W) -> Result<(), DataError> {
    for row in 0..self.num_rows() {
      let line = self
        .columns
        .iter()
        .map(|column| format_value(column[row]))
        .collect::<Vec<_>>()
        .join(" ");
      writeln!(writer, "{}", line)?;
    }
    Ok(())
  }

  pub fn save(&self, path: &Path) -> Result<(), DataError> {
    let io_error = |source| DataError::Io {
      path: path.to_path_buf(),
      source,
    };

    let mut writer = BufWriter::new(File::create(path).map_err(io_error)?);
    self.write(&mut writer)?;
    writer.flush().map_err(io_error)?;

    info!(
      "wrote {} rows x {} columns to {}",
      self.num_rows(),
      self.num_columns(),
      path.display()
    );
    Ok(())
  }
}

/// `%.18e` style: `1.000000000000000000e+00`, `nan`, `-inf`.
pub fn format_value(value: S) -> String {
  if value.is_nan() {
    return "nan".to_string();
  }
  if value.is_infinite() {
    return if value > 0.0 { "inf" } else { "-inf" }.to_string();
  }

  let formatted = format!("{:.18e}", value);
  match formatted.split_once('e') {
    Some((mantissa, exponent)) => {
      let exponent: i32 = exponent.parse().unwrap_or(0);
      let sign = if exponent < 0 { '-' } else { '+' };
      format!("{}e{}{:02}", mantissa, sign, exponent.abs())
    }
    None => formatted,
  }
}

#[cfg(test)]
use proptest::prelude::*;

#[test]
fn format_matches_fixed_exponent_layout() {
  assert_eq!(format_value(1.0), "1.000000000000000000e+00");
  assert_eq!(format_value(-0.0025), "-2.500000000000000052e-03");
  assert_eq!(format_value(1.5e123), "1.500000000000000040e+123");
  assert_eq!(format_value(0.0), "0.000000000000000000e+00");
  assert_eq!(format_value(S::NAN), "nan");
  assert_eq!(format_value(S::NEG_INFINITY), "-inf");
}

#[test]
fn row_data_stops_at_comment() {
  let data = |line: &str| ROW_DATA.captures(line).map(|c| c[1].to_string());
  assert_eq!(data("1 2 # 3 4").as_deref(), Some("1 2 "));
  assert_eq!(data("# only a comment").as_deref(), Some(""));
  assert_eq!(data("5e-3\t6").as_deref(), Some("5e-3\t6"));
}

#[test]
fn parse_skips_comments_and_blank_lines() {
  let text = "# x y\n0.0 1.0\n\n  0.5\t2.5  # midpoint\n1 -3e2\n";
  let data = ColumnData::parse(text.as_bytes()).unwrap();

  assert_eq!(data.num_columns(), 2);
  assert_eq!(data.num_rows(), 3);
  assert_eq!(data.column(1).unwrap(), &[0.0, 0.5, 1.0]);
  assert_eq!(data.column(2).unwrap(), &[1.0, 2.5, -300.0]);
}

#[test]
fn parse_errors_carry_line_numbers() {
  match ColumnData::parse("1 2\n3 4 5\n".as_bytes()) {
    Err(DataError::RaggedRow {
      line: 2,
      expected: 2,
      found: 3,
    }) => {}
    other => panic!("unexpected {:?}", other),
  }

  match ColumnData::parse("1 2\n\n3 x\n".as_bytes()) {
    Err(DataError::Parse { line: 3, token }) => assert_eq!(token, "x"),
    other => panic!("unexpected {:?}", other),
  }
}

#[test]
fn column_lookup_is_one_based() {
  let data =
    ColumnData::from_columns(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();

  assert_eq!(data.column(2).unwrap(), &[3.0, 4.0]);
  assert!(matches!(
    data.column(0),
    Err(DataError::ColumnOutOfRange {
      column: 0,
      available: 2
    })
  ));
  assert!(matches!(
    data.column(3),
    Err(DataError::ColumnOutOfRange { column: 3, .. })
  ));
}

#[test]
fn mismatched_columns_are_rejected() {
  assert!(matches!(
    ColumnData::from_columns(vec![vec![1.0], vec![1.0, 2.0]]),
    Err(DataError::LengthMismatch {
      column: 2,
      expected: 1,
      found: 2
    })
  ));
}

#[test]
fn empty_input_has_no_columns() {
  let data = ColumnData::parse("# nothing here\n\n".as_bytes()).unwrap();
  assert_eq!(data.num_columns(), 0);
  assert_eq!(data.num_rows(), 0);
}

#[test]
fn load_reports_missing_path() {
  let err = ColumnData::load(Path::new("/nonexistent/data.txt")).unwrap_err();
  assert!(err.to_string().starts_with("/nonexistent/data.txt: "));
}

#[test]
fn save_then_load_through_file() {
  let path = std::env::temp_dir()
    .join(format!("lane_emden_columns_{}.txt", std::process::id()));
  let data = ColumnData::from_columns(vec![
    vec![0.0, 0.1, 0.2],
    vec![1.0, S::NAN, -2.0e-300],
  ])
  .unwrap();

  data.save(&path).unwrap();
  let text = std::fs::read_to_string(&path).unwrap();
  let loaded = ColumnData::load(&path).unwrap();
  std::fs::remove_file(&path).unwrap();

  assert_eq!(text.lines().count(), 3);
  assert_eq!(loaded.column(1).unwrap(), data.column(1).unwrap());
  assert!(loaded.column(2).unwrap()[1].is_nan());
  assert_eq!(loaded.column(2).unwrap()[2], -2.0e-300);
}

#[cfg(test)]
proptest! {
#[test]
fn formatted_values_parse_back_exactly(value in proptest::num::f64::NORMAL) {
  prop_assert_eq!(format_value(value).parse::<S>().unwrap(), value);
}
}
