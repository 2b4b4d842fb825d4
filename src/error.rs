use std::fmt::{Display, Formatter};

use thiserror::Error;

/// Category of a [CensusError]. Consumers branch on the kind, not on the message text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The country selector was not recognized
    InvalidCountry,
    /// A census or state code file could not be read or is malformed
    FileProblem,
    /// Sorted records could not be converted to or from JSON
    Serialization,
}

/// The named cause behind an [ErrorKind::FileProblem].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileProblem {
    /// No path was given
    MissingPath,
    /// The file does not exist or cannot be read
    Unreadable,
    /// The file does not carry the expected extension
    WrongExtension,
    /// The header does not match the expected row shape
    HeaderMismatch,
    /// A data row has a different number of fields than the header
    FieldCountMismatch,
    /// A field could not be converted to its declared type
    TypeMismatch,
}

impl Display for FileProblem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            FileProblem::MissingPath => "missing path",
            FileProblem::Unreadable => "unreadable file",
            FileProblem::WrongExtension => "wrong extension",
            FileProblem::HeaderMismatch => "header mismatch",
            FileProblem::FieldCountMismatch => "field count mismatch",
            FileProblem::TypeMismatch => "type mismatch",
        };
        write!(f, "{name}")
    }
}

#[derive(Debug, Error)]
pub enum CensusError {
    #[error("invalid country: {country}")]
    InvalidCountry {
        country: String
    },
    #[error("{problem}: {message}")]
    FileProblem {
        problem: FileProblem,
        message: String,
    },
    #[error("serialization: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CensusError {
    pub(crate) fn file_problem(problem: FileProblem, message: impl Into<String>) -> CensusError {
        CensusError::FileProblem {
            problem,
            message: message.into(),
        }
    }

    /// Get the [ErrorKind] of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CensusError::InvalidCountry { .. } => ErrorKind::InvalidCountry,
            CensusError::FileProblem { .. } => ErrorKind::FileProblem,
            CensusError::Serialization(_) => ErrorKind::Serialization,
        }
    }

    /// Get the named cause when this error is a [ErrorKind::FileProblem].
    pub fn problem(&self) -> Option<FileProblem> {
        match self {
            CensusError::FileProblem { problem, .. } => Some(*problem),
            _ => None,
        }
    }

    /// Get the human readable message without the kind prefix.
    pub fn message(&self) -> String {
        match self {
            CensusError::InvalidCountry { country } => format!("Incorrect country: {country}"),
            CensusError::FileProblem { message, .. } => message.clone(),
            CensusError::Serialization(e) => e.to_string(),
        }
    }
}
