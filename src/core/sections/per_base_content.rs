use super::{columns, number};
use crate::core::error::IngestError;
use crate::core::model::PositionBucket;
use crate::core::parse::range::resolve;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PerBaseContentRow {
    pub g: f64,
    pub a: f64,
    pub t: f64,
    pub c: f64,
}

#[derive(Debug, Default)]
pub struct Extractor {
    rows: BTreeMap<PositionBucket, PerBaseContentRow>,
}

impl Extractor {
    pub fn push(&mut self, line: &str) -> Result<(), IngestError> {
        let line = line.replace("NaN", "0");
        let cols = columns(&line, 5)?;
        let base = resolve(cols[0])?;
        let row = PerBaseContentRow {
            g: number("G", cols[1])?,
            a: number("A", cols[2])?,
            t: number("T", cols[3])?,
            c: number("C", cols[4])?,
        };
        self.rows.insert(base, row);
        Ok(())
    }

    pub fn finish(self) -> BTreeMap<PositionBucket, PerBaseContentRow> {
        self.rows
    }
}
