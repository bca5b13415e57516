use serde::Serialize;
use std::fmt;

mod record;

pub use record::{BasicStats, ParseNotes, SampleRecord, ScalarValue, SequenceLength};

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Pass,
    Warn,
    Fail,
    #[default]
    Default,
}

impl Status {
    pub fn from_token(token: &str) -> Self {
        if token.eq_ignore_ascii_case("pass") {
            Status::Pass
        } else if token.eq_ignore_ascii_case("warn") {
            Status::Warn
        } else if token.eq_ignore_ascii_case("fail") {
            Status::Fail
        } else {
            Status::Default
        }
    }

    pub fn as_str_lower(self) -> &'static str {
        match self {
            Status::Pass => "pass",
            Status::Warn => "warn",
            Status::Fail => "fail",
            Status::Default => "default",
        }
    }

    pub fn as_str_upper(self) -> &'static str {
        match self {
            Status::Pass => "PASS",
            Status::Warn => "WARN",
            Status::Fail => "FAIL",
            Status::Default => "DEFAULT",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportSection {
    BaseQuality,
    SequenceQuality,
    BaseContent,
    SequenceGc,
    BaseN,
    LengthDistribution,
    DuplicationLevels,
    AdapterContent,
    KmerContent,
}

impl ReportSection {
    /// Declared order; header matching walks this list and the first hit wins.
    pub const ALL: [ReportSection; 9] = [
        ReportSection::BaseQuality,
        ReportSection::SequenceQuality,
        ReportSection::BaseContent,
        ReportSection::SequenceGc,
        ReportSection::BaseN,
        ReportSection::LengthDistribution,
        ReportSection::DuplicationLevels,
        ReportSection::AdapterContent,
        ReportSection::KmerContent,
    ];

    pub fn title(self) -> &'static str {
        match self {
            ReportSection::BaseQuality => "Per base sequence quality",
            ReportSection::SequenceQuality => "Per sequence quality scores",
            ReportSection::BaseContent => "Per base sequence content",
            ReportSection::SequenceGc => "Per sequence GC content",
            ReportSection::BaseN => "Per base N content",
            ReportSection::LengthDistribution => "Sequence Length Distribution",
            ReportSection::DuplicationLevels => "Sequence Duplication Levels",
            ReportSection::AdapterContent => "Adapter Content",
            ReportSection::KmerContent => "Kmer Content",
        }
    }

}

impl fmt::Display for ReportSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize)]
pub struct PositionBucket(pub i64);

impl PositionBucket {
    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for PositionBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
