use std::collections::HashMap;
use std::fs::File;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, StringRecordsIntoIter, Trim};
use regex::Regex;

use crate::config::Config;
use crate::error::{CensusError, FileProblem};
use crate::row_shape::RowShape;
use crate::value::{INTEGER_PATTERN, Row, Value};

/// Single pass reader over the data rows of a census file.
///
/// The extension and header are validated when the iterator is created, every data row is
/// validated when it is yielded. Reading the file again requires a new iterator.
pub struct RowIterator {
    path: PathBuf,
    shape: RowShape,
    records: StringRecordsIntoIter<File>,
    integer_pattern: Regex,
}

impl RowIterator {
    /// Open the file at `path` and validate its extension and header against `shape`.
    pub fn new(path: &Path, shape: RowShape, config: &Config) -> Result<RowIterator, CensusError> {
        Self::check_extension(path, config)?;

        let mut reader = ReaderBuilder::new()
            .delimiter(config.delimiter())
            .trim(if config.trim() { Trim::All } else { Trim::None })
            .has_headers(true)
            .from_path(path)
            .map_err(|e| Self::csv_problem(path, e))?;

        let headers = reader.headers()
            .map_err(|e| Self::csv_problem(path, e))?
            .clone();
        if let Some(mismatch) = shape.mismatch(headers.iter()) {
            return Err(
                CensusError::file_problem(
                    FileProblem::HeaderMismatch,
                    format!("path: {}, error: {mismatch}", path.display()),
                )
            );
        }

        let integer_pattern = Regex::new(INTEGER_PATTERN)
            .map_err(|e| CensusError::file_problem(FileProblem::TypeMismatch, e.to_string()))?;

        Ok(
            RowIterator {
                path: path.to_path_buf(),
                shape,
                records: reader.into_records(),
                integer_pattern,
            }
        )
    }

    fn check_extension(path: &Path, config: &Config) -> Result<(), CensusError> {
        let matches = path.extension()
            .and_then(|e| e.to_str())
            .map(|e| e.eq_ignore_ascii_case(config.extension()))
            .unwrap_or(false);
        if matches {
            Ok(())
        } else {
            Err(
                CensusError::file_problem(
                    FileProblem::WrongExtension,
                    format!("path: {}, expected a .{} file", path.display(), config.extension()),
                )
            )
        }
    }

    fn csv_problem(path: &Path, e: csv::Error) -> CensusError {
        let problem = match e.kind() {
            csv::ErrorKind::UnequalLengths { .. } => FileProblem::FieldCountMismatch,
            csv::ErrorKind::Utf8 { .. } => FileProblem::TypeMismatch,
            _ => FileProblem::Unreadable,
        };
        CensusError::file_problem(problem, format!("path: {}, error: {e}", path.display()))
    }

    fn to_row(&self, record: StringRecord) -> Result<Row, CensusError> {
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let mut values = HashMap::new();
        for (column, cell) in self.shape.columns().iter().zip(record.iter()) {
            let value = Value::parse(cell, column.field_type(), &self.integer_pattern)
                .map_err(|e| {
                    CensusError::file_problem(
                        FileProblem::TypeMismatch,
                        format!("path: {}, line: {line}, column: {}, error: {e}", self.path.display(), column.header()),
                    )
                })?;
            if let Some(field) = column.field() {
                values.insert(field.to_string(), value);
            }
        }
        Ok(Row::new(line, values))
    }
}

impl Iterator for RowIterator {
    type Item = Result<Row, CensusError>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = self.records.next()?;
        Some(
            record
                .map_err(|e| Self::csv_problem(&self.path, e))
                .and_then(|record| self.to_row(record))
        )
    }
}
