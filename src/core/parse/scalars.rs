use crate::core::model::{BasicStats, SequenceLength};
use regex::Regex;
use std::sync::OnceLock;

#[derive(Clone, Debug, PartialEq)]
pub enum ScalarUpdate {
    Filename(String),
    TotalSequences(u64),
    SequenceLength(SequenceLength),
    PercentGc(f64),
    PercentDuplicates(f64),
}

#[derive(Clone, Copy)]
enum Field {
    Filename,
    TotalSequences,
    SequenceLength,
    PercentGc,
    PercentDuplicates,
}

fn patterns() -> &'static [(Field, Regex)] {
    static PATTERNS: OnceLock<Vec<(Field, Regex)>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        [
            (Field::Filename, r"^Filename\s+(.+)$"),
            (Field::TotalSequences, r"Total Sequences\s+(\d+)"),
            (Field::SequenceLength, r"Sequence length\s+([\d-]+)"),
            (Field::PercentGc, r"%GC\s+([\d.]+)"),
            (Field::PercentDuplicates, r"#Total Deduplicated Percentage\s+([\d.]+)"),
        ]
        .into_iter()
        .map(|(field, p)| (field, Regex::new(p).expect("scalar pattern")))
        .collect()
    })
}

pub fn scan(line: &str) -> Vec<ScalarUpdate> {
    let mut updates = Vec::new();
    for (field, re) in patterns() {
        let Some(caps) = re.captures(line) else {
            continue;
        };
        let raw = caps[1].trim_end();
        let update = match field {
            Field::Filename => {
                (!raw.trim().is_empty()).then(|| ScalarUpdate::Filename(raw.to_string()))
            }
            Field::TotalSequences => raw.parse().ok().map(ScalarUpdate::TotalSequences),
            Field::SequenceLength => Some(ScalarUpdate::SequenceLength(
                SequenceLength::from_label(raw),
            )),
            Field::PercentGc => raw.parse().ok().map(ScalarUpdate::PercentGc),
            Field::PercentDuplicates => raw.parse().ok().map(ScalarUpdate::PercentDuplicates),
        };
        updates.extend(update);
    }
    updates
}

impl BasicStats {
    pub fn apply(&mut self, update: ScalarUpdate) {
        match update {
            ScalarUpdate::Filename(v) => self.filename = Some(v),
            ScalarUpdate::TotalSequences(v) => self.total_sequences = Some(v),
            ScalarUpdate::SequenceLength(v) => self.sequence_length = Some(v),
            ScalarUpdate::PercentGc(v) => self.percent_gc = Some(v),
            ScalarUpdate::PercentDuplicates(v) => self.percent_duplicates = Some(v),
        }
    }
}
