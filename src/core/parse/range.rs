use crate::core::error::IngestError;
use crate::core::model::PositionBucket;

/// Resolves `n` to `n` and `a-b` to `a + floor((b - a) / 2)`.
pub fn resolve(label: &str) -> Result<PositionBucket, IngestError> {
    let label = label.trim();
    if let Some((a, b)) = label.split_once('-') {
        if let (Ok(a), Ok(b)) = (a.parse::<u32>(), b.parse::<u32>()) {
            let (a, b) = (i64::from(a), i64::from(b));
            return Ok(PositionBucket(a + (b - a).div_euclid(2)));
        }
    }
    label
        .parse::<i64>()
        .map(PositionBucket)
        .map_err(|_| IngestError::MalformedPosition {
            label: label.to_string(),
        })
}

pub fn range_start(label: &str) -> Result<PositionBucket, IngestError> {
    let label = label.trim();
    let start = label.split('-').next().unwrap_or(label);
    start
        .parse::<i64>()
        .map(PositionBucket)
        .map_err(|_| IngestError::MalformedPosition {
            label: label.to_string(),
        })
}
