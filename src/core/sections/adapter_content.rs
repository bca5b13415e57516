use super::number;
use crate::core::error::IngestError;
use crate::core::model::PositionBucket;
use crate::core::parse::range::range_start;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct AdapterContent {
    pub adapters: Vec<String>,
    pub series: BTreeMap<String, BTreeMap<PositionBucket, f64>>,
}

impl AdapterContent {
    pub fn get(&self, adapter: &str, position: i64) -> Option<f64> {
        self.series
            .get(adapter)
            .and_then(|s| s.get(&PositionBucket(position)))
            .copied()
    }

    pub fn len(&self) -> usize {
        self.series.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn split_cells(line: &str) -> Vec<&str> {
    if line.contains('\t') {
        line.split('\t').map(str::trim).collect()
    } else {
        line.split_whitespace().collect()
    }
}

#[derive(Debug, Default)]
pub struct Extractor {
    table: AdapterContent,
}

impl Extractor {
    pub fn header(&mut self, line: &str) {
        let cells = split_cells(line.trim_start_matches('#'));
        let adapters: Vec<String> = cells
            .into_iter()
            .skip(1)
            .filter(|c| !c.is_empty())
            .map(str::to_string)
            .collect();
        for name in &adapters {
            self.table.series.entry(name.clone()).or_default();
        }
        self.table.adapters = adapters;
    }

    pub fn push(&mut self, line: &str) -> Result<(), IngestError> {
        let cells = split_cells(line.trim());
        let Some((first, values)) = cells.split_first() else {
            return Ok(());
        };
        let position = range_start(first)?;
        if values.len() > self.table.adapters.len() {
            return Err(IngestError::UnattributedAdapterColumn {
                column: self.table.adapters.len() + 1,
            });
        }
        let parsed = values
            .iter()
            .map(|v| number("adapter percent", v))
            .collect::<Result<Vec<f64>, _>>()?;
        for (name, value) in self.table.adapters.iter().zip(parsed) {
            self.table
                .series
                .entry(name.clone())
                .or_default()
                .insert(position, value);
        }
        Ok(())
    }

    pub fn finish(self) -> AdapterContent {
        self.table
    }
}
