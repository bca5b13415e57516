use super::{columns, number};
use crate::core::error::IngestError;
use crate::core::model::PositionBucket;
use crate::core::parse::range::resolve;
use std::collections::BTreeMap;

#[derive(Debug, Default)]
pub struct Extractor {
    percents: BTreeMap<PositionBucket, f64>,
}

impl Extractor {
    pub fn push(&mut self, line: &str) -> Result<(), IngestError> {
        let cols = columns(line, 2)?;
        let base = resolve(cols[0])?;
        let percent = number("N percent", cols[1])?;
        self.percents.insert(base, percent);
        Ok(())
    }

    pub fn finish(self) -> BTreeMap<PositionBucket, f64> {
        self.percents
    }
}
