use std::collections::HashMap;
use std::str::FromStr;

use regex::Regex;

use crate::error::{CensusError, FileProblem};
use crate::field_type::FieldType;

/// Matches the integer cells accepted by [FieldType::Integer].
pub(crate) const INTEGER_PATTERN: &str = r"^[0-9]+$";

/// A typed cell value.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    String(String),
    Integer(u64),
    Number(f64),
}

impl Value {
    pub(crate) fn parse(cell: &str, field_type: FieldType, integer_pattern: &Regex) -> Result<Value, String> {
        match field_type {
            FieldType::String => {
                Ok(Value::String(cell.to_string()))
            }
            FieldType::Integer => {
                if !integer_pattern.is_match(cell) {
                    return Err(format!("'{cell}' is not an integer"));
                }
                u64::from_str(cell)
                    .map(Value::Integer)
                    .map_err(|e| format!("'{cell}': {e}"))
            }
            FieldType::Number => {
                let n = f64::from_str(cell)
                    .map_err(|e| format!("'{cell}': {e}"))?;
                if n.is_nan() || n.is_infinite() || n < 0.0 {
                    Err(format!("'{cell}' is not a non-negative number"))
                } else {
                    Ok(Value::Number(n))
                }
            }
        }
    }
}

/// The typed, bound fields of one data row.
#[derive(Clone, Debug)]
pub struct Row {
    line: u64,
    values: HashMap<String, Value>,
}

impl Row {
    pub(crate) fn new(line: u64, values: HashMap<String, Value>) -> Row {
        Row {
            line,
            values,
        }
    }

    /// The 1-based line of the source file this row was read from.
    pub fn line(&self) -> u64 {
        self.line
    }

    /// Get the value bound to `field`.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.values.get(field)
    }

    /// Get the string bound to `field`, failing with a type mismatch otherwise.
    pub fn string(&self, field: &str) -> Result<String, CensusError> {
        match self.get(field) {
            Some(Value::String(s)) => Ok(s.clone()),
            other => Err(self.wrong_type(field, "string", other)),
        }
    }

    /// Get the integer bound to `field`, failing with a type mismatch otherwise.
    pub fn integer(&self, field: &str) -> Result<u64, CensusError> {
        match self.get(field) {
            Some(Value::Integer(i)) => Ok(*i),
            other => Err(self.wrong_type(field, "integer", other)),
        }
    }

    /// Get the number bound to `field`. Integers are widened to numbers.
    pub fn number(&self, field: &str) -> Result<f64, CensusError> {
        match self.get(field) {
            Some(Value::Number(n)) => Ok(*n),
            Some(Value::Integer(i)) => Ok(*i as f64),
            other => Err(self.wrong_type(field, "number", other)),
        }
    }

    fn wrong_type(&self, field: &str, expected: &str, found: Option<&Value>) -> CensusError {
        CensusError::file_problem(
            FileProblem::TypeMismatch,
            format!("line: {}, field {field} is not a {expected}: {found:?}", self.line),
        )
    }
}
