use super::number;
use crate::core::error::IngestError;
use crate::core::model::PositionBucket;
use crate::core::parse::range::resolve;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::OnceLock;
use tracing::debug;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PerBaseQualRow {
    pub mean: f64,
    pub median: f64,
    pub lower_quart: f64,
    pub upper_quart: f64,
    pub p10: f64,
    pub p90: f64,
}

fn row_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\s*([\d-]+)\s+([\d.]+)\s+([\d.]+)\s+([\d.]+)\s+([\d.]+)\s+([\d.]+)\s+([\d.]+)\s*$")
            .expect("quality row pattern")
    })
}

#[derive(Debug, Default)]
pub struct Extractor {
    rows: BTreeMap<PositionBucket, PerBaseQualRow>,
}

impl Extractor {
    // Lines that are not seven numeric fields are skipped without counting as errors.
    pub fn push(&mut self, line: &str) -> Result<(), IngestError> {
        let Some(caps) = row_pattern().captures(line) else {
            debug!("skipping quality line '{}'", line);
            return Ok(());
        };
        let base = resolve(&caps[1])?;
        let row = PerBaseQualRow {
            mean: number("mean", &caps[2])?,
            median: number("median", &caps[3])?,
            lower_quart: number("lower quartile", &caps[4])?,
            upper_quart: number("upper quartile", &caps[5])?,
            p10: number("10th percentile", &caps[6])?,
            p90: number("90th percentile", &caps[7])?,
        };
        self.rows.insert(base, row);
        Ok(())
    }

    pub fn finish(self) -> BTreeMap<PositionBucket, PerBaseQualRow> {
        self.rows
    }
}
