use crate::core::error::{DuplicateSampleName, IngestError};
use crate::core::model::{ReportSection, SampleRecord, Status};
use crate::core::naming::SampleNaming;
use crate::core::parse::assemble;
use crate::core::sections::SectionTable;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::warn;

#[derive(Clone, Debug, Default, Serialize)]
#[serde(transparent)]
pub struct Collection {
    samples: BTreeMap<String, SampleRecord>,
}

impl Collection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last write wins; the replaced name is reported back and logged.
    pub fn ingest(&mut self, record: SampleRecord) -> Option<DuplicateSampleName> {
        let name = record.name.clone();
        self.samples.insert(name.clone(), record).map(|_| {
            let dup = DuplicateSampleName { name };
            warn!("{}", dup);
            dup
        })
    }

    pub fn ingest_text(
        &mut self,
        text: &str,
        fallback_name: &str,
        naming: &SampleNaming,
    ) -> Result<Option<DuplicateSampleName>, IngestError> {
        let record = assemble(text, fallback_name, naming)?;
        Ok(self.ingest(record))
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn get(&self, name: &str) -> Option<&SampleRecord> {
        self.samples.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SampleRecord> {
        self.samples.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.samples.keys().map(String::as_str)
    }

    pub fn statuses(&self, section: ReportSection) -> BTreeMap<&str, Status> {
        self.samples
            .iter()
            .map(|(name, rec)| (name.as_str(), rec.status(section)))
            .collect()
    }

    pub fn tables(&self, section: ReportSection) -> BTreeMap<&str, &SectionTable> {
        self.samples
            .iter()
            .filter_map(|(name, rec)| rec.table(section).map(|t| (name.as_str(), t)))
            .collect()
    }

    pub fn require_samples(self) -> Result<Self, IngestError> {
        if self.is_empty() {
            return Err(IngestError::NoReportsFound);
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(filename: &str, total: u64) -> String {
        format!(
            "Filename\t{}\nTotal Sequences\t{}\n>>Per base N content\tpass\n1\t0.0\n>>END_MODULE\n",
            filename, total
        )
    }

    #[test]
    fn duplicate_name_last_write_wins() {
        let naming = SampleNaming::default();
        let mut c = Collection::new();
        let first = c
            .ingest_text(&report("sampleA.fastq", 10), "a", &naming)
            .unwrap();
        assert!(first.is_none());
        let second = c
            .ingest_text(&report("sampleA.fq.gz", 20), "b", &naming)
            .unwrap();
        assert_eq!(
            second,
            Some(DuplicateSampleName {
                name: "sampleA".to_string()
            })
        );
        assert_eq!(c.len(), 1);
        assert_eq!(c.get("sampleA").unwrap().stats.total_sequences, Some(20));
    }

    #[test]
    fn empty_report_adds_nothing() {
        let mut c = Collection::new();
        let res = c.ingest_text("", "x", &SampleNaming::default());
        assert_eq!(res, Err(IngestError::EmptyReport));
        assert!(c.is_empty());
        assert_eq!(c.require_samples().err(), Some(IngestError::NoReportsFound));
    }

    #[test]
    fn per_section_views() {
        let naming = SampleNaming::default();
        let mut c = Collection::new();
        c.ingest_text(&report("b.fq", 1), "", &naming).unwrap();
        c.ingest_text("Filename\ta.fq\n", "", &naming).unwrap();
        assert_eq!(c.names().collect::<Vec<_>>(), vec!["a", "b"]);

        let statuses = c.statuses(ReportSection::BaseN);
        assert_eq!(statuses["a"], Status::Default);
        assert_eq!(statuses["b"], Status::Pass);

        let tables = c.tables(ReportSection::BaseN);
        assert_eq!(tables.len(), 1);
        assert!(tables.contains_key("b"));
        assert!(c.require_samples().is_ok());
    }
}
