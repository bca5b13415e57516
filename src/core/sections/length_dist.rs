use super::{columns, number};
use crate::core::error::IngestError;
use crate::core::model::PositionBucket;
use crate::core::parse::range::resolve;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct LengthDistribution {
    pub counts: BTreeMap<PositionBucket, f64>,
    #[serde(skip)]
    bp_sum: f64,
    #[serde(skip)]
    count_sum: f64,
}

impl LengthDistribution {
    pub fn mean_length(&self) -> Option<f64> {
        (self.count_sum > 0.0).then(|| self.bp_sum / self.count_sum)
    }
}

#[derive(Debug, Default)]
pub struct Extractor {
    table: LengthDistribution,
}

impl Extractor {
    pub fn push(&mut self, line: &str) -> Result<(), IngestError> {
        let cols = columns(line, 2)?;
        let bucket = resolve(cols[0])?;
        let count = number("count", cols[1])?;
        let t = &mut self.table;
        // The mean counts every row, even when two labels share a bucket.
        t.counts.insert(bucket, count);
        t.bp_sum += count * bucket.get() as f64;
        t.count_sum += count;
        Ok(())
    }

    pub fn finish(self) -> LengthDistribution {
        self.table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weighted_mean() {
        let mut x = Extractor::default();
        x.push("10\t100").unwrap();
        x.push("20\t50").unwrap();
        let t = x.finish();
        let mean = t.mean_length().unwrap();
        assert!((mean - 2000.0 / 150.0).abs() < 1e-9);
        assert!((mean - 13.33).abs() < 0.01);
    }

    #[test]
    fn ranges_use_midpoint_buckets() {
        let mut x = Extractor::default();
        x.push("30-34\t2.0").unwrap();
        x.push("150-151\t1.0E2").unwrap();
        let t = x.finish();
        assert_eq!(t.counts.get(&PositionBucket(32)), Some(&2.0));
        assert_eq!(t.counts.get(&PositionBucket(150)), Some(&100.0));
    }

    #[test]
    fn overlapping_labels_all_count_toward_mean() {
        let mut x = Extractor::default();
        x.push("10\t100").unwrap();
        x.push("9-11\t50").unwrap();
        x.push("20\t50").unwrap();
        let t = x.finish();
        assert_eq!(t.counts.get(&PositionBucket(10)), Some(&50.0));
        assert_eq!(t.mean_length(), Some(12.5));
    }

    #[test]
    fn zero_counts_have_no_mean() {
        let mut x = Extractor::default();
        x.push("76\t0.0").unwrap();
        let t = x.finish();
        assert_eq!(t.counts.len(), 1);
        assert_eq!(t.mean_length(), None);
    }
}
