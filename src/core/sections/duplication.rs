use super::{columns, number};
use crate::core::error::IngestError;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DuplicationRow {
    pub level: String,
    pub percent_total: f64,
    pub percent_dedup: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct DuplicationLevels {
    pub rows: Vec<DuplicationRow>,
}

impl DuplicationLevels {
    pub fn get(&self, level: &str) -> Option<&DuplicationRow> {
        self.rows.iter().find(|r| r.level == level)
    }

    pub fn total(&self) -> impl Iterator<Item = (&str, f64)> {
        self.rows.iter().map(|r| (r.level.as_str(), r.percent_total))
    }

    pub fn deduplicated(&self) -> impl Iterator<Item = (&str, f64)> {
        self.rows.iter().map(|r| (r.level.as_str(), r.percent_dedup))
    }
}

#[derive(Debug, Default)]
pub struct Extractor {
    table: DuplicationLevels,
    dedup_first: bool,
}

impl Extractor {
    // FastQC 0.11 puts "Percentage of deduplicated" before "Percentage of total".
    pub fn header(&mut self, line: &str) {
        let lower = line.to_ascii_lowercase();
        if !lower.contains("percentage of") {
            return;
        }
        if let (Some(d), Some(t)) = (lower.find("deduplicated"), lower.find("total")) {
            self.dedup_first = d < t;
        }
    }

    pub fn push(&mut self, line: &str) -> Result<(), IngestError> {
        let cols = columns(line, 3)?;
        let first = number("duplication percent", cols[1])?;
        let second = number("duplication percent", cols[2])?;
        let (percent_total, percent_dedup) = if self.dedup_first {
            (second, first)
        } else {
            (first, second)
        };
        let row = DuplicationRow {
            level: cols[0].to_string(),
            percent_total,
            percent_dedup,
        };
        match self.table.rows.iter_mut().find(|r| r.level == row.level) {
            Some(existing) => *existing = row,
            None => self.table.rows.push(row),
        }
        Ok(())
    }

    pub fn finish(self) -> DuplicationLevels {
        self.table
    }
}
