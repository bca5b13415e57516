use super::{columns, integer, number};
use crate::core::error::IngestError;
use std::collections::BTreeMap;

#[derive(Debug, Default)]
pub struct Extractor {
    counts: BTreeMap<u32, f64>,
}

impl Extractor {
    pub fn push(&mut self, line: &str) -> Result<(), IngestError> {
        let cols = columns(line, 2)?;
        let gc = integer("GC percent", cols[0])?;
        let count = number("count", cols[1])?;
        self.counts.insert(gc, count);
        Ok(())
    }

    pub fn finish(self) -> BTreeMap<u32, f64> {
        self.counts
    }
}
