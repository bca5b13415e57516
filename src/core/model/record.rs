use super::{ReportSection, Status};
use crate::core::sections::SectionTable;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SequenceLength {
    Fixed(u64),
    /// Range label such as `35-151`, kept verbatim.
    Range(String),
}

impl SequenceLength {
    pub fn from_label(label: &str) -> Self {
        match label.parse::<u64>() {
            Ok(n) => SequenceLength::Fixed(n),
            Err(_) => SequenceLength::Range(label.to_string()),
        }
    }
}

impl fmt::Display for SequenceLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SequenceLength::Fixed(n) => write!(f, "{}", n),
            SequenceLength::Range(s) => f.write_str(s),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ScalarValue {
    Number(f64),
    Text(String),
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarValue::Number(v) => write!(f, "{}", v),
            ScalarValue::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct BasicStats {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_sequences: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence_length: Option<SequenceLength>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent_gc: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent_duplicates: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_sequence_length: Option<f64>,
}

impl BasicStats {
    pub const FIELDS: [&'static str; 6] = [
        "filename",
        "total_sequences",
        "sequence_length",
        "percent_gc",
        "percent_duplicates",
        "avg_sequence_length",
    ];

    pub fn value(&self, field: &str) -> Option<ScalarValue> {
        match field {
            "filename" => self.filename.clone().map(ScalarValue::Text),
            "total_sequences" => self.total_sequences.map(|n| ScalarValue::Number(n as f64)),
            "sequence_length" => self.sequence_length.as_ref().map(|l| match l {
                SequenceLength::Fixed(n) => ScalarValue::Number(*n as f64),
                SequenceLength::Range(s) => ScalarValue::Text(s.clone()),
            }),
            "percent_gc" => self.percent_gc.map(ScalarValue::Number),
            "percent_duplicates" => self.percent_duplicates.map(ScalarValue::Number),
            "avg_sequence_length" => self.avg_sequence_length.map(ScalarValue::Number),
            _ => None,
        }
    }

    pub fn entries(&self) -> Vec<(&'static str, ScalarValue)> {
        Self::FIELDS
            .iter()
            .filter_map(|&name| self.value(name).map(|v| (name, v)))
            .collect()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ParseNotes {
    pub skipped_lines: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub truncated_section: Option<ReportSection>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SampleRecord {
    pub name: String,
    pub stats: BasicStats,
    pub tables: BTreeMap<ReportSection, SectionTable>,
    pub statuses: BTreeMap<ReportSection, Status>,
    pub notes: ParseNotes,
}

impl SampleRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            stats: BasicStats::default(),
            tables: BTreeMap::new(),
            statuses: BTreeMap::new(),
            notes: ParseNotes::default(),
        }
    }

    pub fn status(&self, section: ReportSection) -> Status {
        self.statuses.get(&section).copied().unwrap_or_default()
    }

    pub fn table(&self, section: ReportSection) -> Option<&SectionTable> {
        self.tables.get(&section)
    }

    pub fn has_tables(&self) -> bool {
        !self.tables.is_empty()
    }
}
