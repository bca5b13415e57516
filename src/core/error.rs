use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum IngestError {
    #[error("malformed position label '{label}'")]
    MalformedPosition { label: String },

    #[error("adapter column {column} has no adapter name")]
    UnattributedAdapterColumn { column: usize },

    #[error("malformed {field} value '{value}'")]
    MalformedValue { field: &'static str, value: String },

    #[error("expected {expected} columns, found {found}")]
    MissingColumns { expected: usize, found: usize },

    #[error("report is empty")]
    EmptyReport,

    #[error("no FastQC reports found")]
    NoReportsFound,
}

impl IngestError {
    pub(crate) fn value(field: &'static str, value: &str) -> Self {
        IngestError::MalformedValue {
            field,
            value: value.to_string(),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DuplicateSampleName {
    pub name: String,
}

impl fmt::Display for DuplicateSampleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "duplicate sample name '{}', overwriting", self.name)
    }
}
