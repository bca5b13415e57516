use crate::core::error::IngestError;
use crate::core::model::{PositionBucket, ReportSection};
use serde::Serialize;
use std::collections::BTreeMap;

mod adapter_content;
mod duplication;
mod kmer_content;
mod length_dist;
mod per_base_content;
mod per_base_n;
mod per_base_qual;
mod per_seq_gc;
mod per_seq_qual;

pub use adapter_content::AdapterContent;
pub use duplication::{DuplicationLevels, DuplicationRow};
pub use length_dist::LengthDistribution;
pub use per_base_content::PerBaseContentRow;
pub use per_base_qual::PerBaseQualRow;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SectionTable {
    BaseQuality(BTreeMap<PositionBucket, PerBaseQualRow>),
    SequenceQuality(BTreeMap<u32, f64>),
    BaseContent(BTreeMap<PositionBucket, PerBaseContentRow>),
    SequenceGc(BTreeMap<u32, f64>),
    BaseN(BTreeMap<PositionBucket, f64>),
    LengthDistribution(LengthDistribution),
    DuplicationLevels(DuplicationLevels),
    AdapterContent(AdapterContent),
}

impl SectionTable {
    pub fn len(&self) -> usize {
        match self {
            SectionTable::BaseQuality(m) => m.len(),
            SectionTable::SequenceQuality(m) => m.len(),
            SectionTable::BaseContent(m) => m.len(),
            SectionTable::SequenceGc(m) => m.len(),
            SectionTable::BaseN(m) => m.len(),
            SectionTable::LengthDistribution(t) => t.counts.len(),
            SectionTable::DuplicationLevels(t) => t.rows.len(),
            SectionTable::AdapterContent(t) => t.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug)]
pub enum SectionExtractor {
    BaseQuality(per_base_qual::Extractor),
    SequenceQuality(per_seq_qual::Extractor),
    BaseContent(per_base_content::Extractor),
    SequenceGc(per_seq_gc::Extractor),
    BaseN(per_base_n::Extractor),
    LengthDistribution(length_dist::Extractor),
    DuplicationLevels(duplication::Extractor),
    AdapterContent(adapter_content::Extractor),
    KmerContent(kmer_content::Extractor),
}

impl SectionExtractor {
    pub fn for_section(section: ReportSection) -> Self {
        match section {
            ReportSection::BaseQuality => Self::BaseQuality(Default::default()),
            ReportSection::SequenceQuality => Self::SequenceQuality(Default::default()),
            ReportSection::BaseContent => Self::BaseContent(Default::default()),
            ReportSection::SequenceGc => Self::SequenceGc(Default::default()),
            ReportSection::BaseN => Self::BaseN(Default::default()),
            ReportSection::LengthDistribution => Self::LengthDistribution(Default::default()),
            ReportSection::DuplicationLevels => Self::DuplicationLevels(Default::default()),
            ReportSection::AdapterContent => Self::AdapterContent(Default::default()),
            ReportSection::KmerContent => Self::KmerContent(Default::default()),
        }
    }

    pub fn section(&self) -> ReportSection {
        match self {
            Self::BaseQuality(_) => ReportSection::BaseQuality,
            Self::SequenceQuality(_) => ReportSection::SequenceQuality,
            Self::BaseContent(_) => ReportSection::BaseContent,
            Self::SequenceGc(_) => ReportSection::SequenceGc,
            Self::BaseN(_) => ReportSection::BaseN,
            Self::LengthDistribution(_) => ReportSection::LengthDistribution,
            Self::DuplicationLevels(_) => ReportSection::DuplicationLevels,
            Self::AdapterContent(_) => ReportSection::AdapterContent,
            Self::KmerContent(_) => ReportSection::KmerContent,
        }
    }

    pub fn push(&mut self, line: &str) -> Result<(), IngestError> {
        if line.trim().is_empty() {
            return Ok(());
        }
        if line.starts_with('#') {
            match self {
                Self::DuplicationLevels(x) => x.header(line),
                Self::AdapterContent(x) => x.header(line),
                _ => {}
            }
            return Ok(());
        }
        match self {
            Self::BaseQuality(x) => x.push(line),
            Self::SequenceQuality(x) => x.push(line),
            Self::BaseContent(x) => x.push(line),
            Self::SequenceGc(x) => x.push(line),
            Self::BaseN(x) => x.push(line),
            Self::LengthDistribution(x) => x.push(line),
            Self::DuplicationLevels(x) => x.push(line),
            Self::AdapterContent(x) => x.push(line),
            Self::KmerContent(x) => x.push(line),
        }
    }

    pub fn finish(self) -> Option<SectionTable> {
        match self {
            Self::BaseQuality(x) => Some(SectionTable::BaseQuality(x.finish())),
            Self::SequenceQuality(x) => Some(SectionTable::SequenceQuality(x.finish())),
            Self::BaseContent(x) => Some(SectionTable::BaseContent(x.finish())),
            Self::SequenceGc(x) => Some(SectionTable::SequenceGc(x.finish())),
            Self::BaseN(x) => Some(SectionTable::BaseN(x.finish())),
            Self::LengthDistribution(x) => Some(SectionTable::LengthDistribution(x.finish())),
            Self::DuplicationLevels(x) => Some(SectionTable::DuplicationLevels(x.finish())),
            Self::AdapterContent(x) => Some(SectionTable::AdapterContent(x.finish())),
            Self::KmerContent(_) => None,
        }
    }
}

fn columns(line: &str, expected: usize) -> Result<Vec<&str>, IngestError> {
    let cols: Vec<&str> = line.split_whitespace().collect();
    if cols.len() < expected {
        return Err(IngestError::MissingColumns {
            expected,
            found: cols.len(),
        });
    }
    Ok(cols)
}

fn number(field: &'static str, raw: &str) -> Result<f64, IngestError> {
    raw.parse::<f64>().map_err(|_| IngestError::value(field, raw))
}

fn integer(field: &'static str, raw: &str) -> Result<u32, IngestError> {
    raw.parse::<u32>().map_err(|_| IngestError::value(field, raw))
}
