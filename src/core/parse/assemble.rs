use super::classify::{LineClassifier, LineKind, ParseState};
use super::scalars;
use crate::core::error::IngestError;
use crate::core::model::{ReportSection, SampleRecord};
use crate::core::naming::SampleNaming;
use crate::core::sections::{SectionExtractor, SectionTable};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Only input without any lines fails; bad data lines are counted in `notes.skipped_lines`.
pub fn assemble(
    text: &str,
    fallback_name: &str,
    naming: &SampleNaming,
) -> Result<SampleRecord, IngestError> {
    if text.lines().next().is_none() {
        return Err(IngestError::EmptyReport);
    }

    let mut record = SampleRecord::new(fallback_name);
    let mut classifier = LineClassifier::new();
    let mut active: Option<SectionExtractor> = None;

    for (idx, line) in text.lines().enumerate() {
        for update in scalars::scan(line) {
            record.stats.apply(update);
        }
        match classifier.classify(line) {
            LineKind::SectionStart {
                section, status, ..
            } => {
                if let Some(open) = active.take() {
                    store(&mut record.tables, open);
                }
                record.statuses.insert(section, status);
                active = Some(SectionExtractor::for_section(section));
            }
            LineKind::SectionData(section, data) => {
                let Some(extractor) = active.as_mut() else {
                    continue;
                };
                if let Err(e) = extractor.push(data) {
                    debug!("line {} in '{}' skipped: {}", idx + 1, section.title(), e);
                    record.notes.skipped_lines += 1;
                }
            }
            LineKind::SectionEnd(_) => {
                if let Some(done) = active.take() {
                    store(&mut record.tables, done);
                }
            }
            LineKind::Unclassified(_) => {}
        }
    }

    if let ParseState::InSection(section) = classifier.state() {
        record.notes.truncated_section = Some(section);
    }
    if let Some(open) = active.take() {
        store(&mut record.tables, open);
    }

    if let Some(SectionTable::LengthDistribution(dist)) =
        record.tables.get(&ReportSection::LengthDistribution)
    {
        record.stats.avg_sequence_length = dist.mean_length();
    }

    if let Some(filename) = record
        .stats
        .filename
        .as_deref()
        .filter(|f| !f.trim().is_empty())
    {
        record.name = naming.clean(filename);
    }

    if let Some(section) = record.notes.truncated_section {
        warn!(
            "{}: report truncated inside '{}' (no {})",
            record.name,
            section.title(),
            super::classify::END_MARKER
        );
    }
    if record.notes.skipped_lines > 0 {
        debug!(
            "{}: skipped {} malformed data lines",
            record.name, record.notes.skipped_lines
        );
    }

    Ok(record)
}

fn store(tables: &mut BTreeMap<ReportSection, SectionTable>, extractor: SectionExtractor) {
    let section = extractor.section();
    if let Some(table) = extractor.finish() {
        tables.insert(section, table);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::{PositionBucket, SequenceLength, Status};

    const REPORT: &str = "##FastQC\t0.11.9
>>Basic Statistics\tpass
#Measure\tValue
Filename\tsampleA_R1.fastq.gz
File type\tConventional base calls
Encoding\tSanger / Illumina 1.9
Total Sequences\t1000
Sequences flagged as poor quality\t0
Sequence length\t10-20
%GC\t48
>>END_MODULE
>>Per base sequence quality\tpass
#Base\tMean\tMedian\tLower Quartile\tUpper Quartile\t10th Percentile\t90th Percentile
1\t32.0\t33.0\t31.0\t34.0\t30.0\t34.0
2-3\t33.5\t34.0\t32.0\t35.0\t31.0\t35.0
>>END_MODULE
>>Per sequence quality scores\twarn
#Quality\tCount
30\t100.0
36\t900.0
>>END_MODULE
>>Per base sequence content\tfail
#Base\tG\tA\tT\tC
1\t20.0\t30.0\tNaN\t25.0
>>END_MODULE
>>Per sequence GC content\tpass
#GC Content\tCount
47\t1.5E2
>>END_MODULE
>>Per base N content\tpass
#Base\tN-Count
1\t0.0
>>END_MODULE
>>Sequence Length Distribution\twarn
#Length\tCount
10\t100.0
20\t50.0
>>END_MODULE
>>Sequence Duplication Levels\tpass
#Total Deduplicated Percentage\t85.5
#Duplication Level\tPercentage of deduplicated\tPercentage of total
1\t90.0\t80.0
>10\t0.5\t3.0
>>END_MODULE
>>Overrepresented sequences\tpass
>>END_MODULE
>>Adapter Content\tpass
#Position\tIllumina Universal Adapter\tNextera Transposase Sequence
1\t0.0\t0.0
2-3\t0.1\t0.05
>>END_MODULE
>>Kmer Content\tfail
#Sequence\tCount\tPValue\tObs/Exp Max\tMax Obs/Exp Position
ACGTA\t50\t0.0\t12.3\t4
>>END_MODULE
";

    fn naming() -> SampleNaming {
        SampleNaming::default()
    }

    #[test]
    fn full_report() {
        let rec = assemble(REPORT, "fallback", &naming()).unwrap();
        assert_eq!(rec.name, "sampleA_R1");
        assert_eq!(rec.stats.total_sequences, Some(1000));
        assert_eq!(
            rec.stats.sequence_length,
            Some(SequenceLength::Range("10-20".to_string()))
        );
        assert_eq!(rec.stats.percent_gc, Some(48.0));
        assert_eq!(rec.stats.percent_duplicates, Some(85.5));
        let avg = rec.stats.avg_sequence_length.unwrap();
        assert!((avg - 2000.0 / 150.0).abs() < 1e-9);

        assert_eq!(rec.tables.len(), 8);
        assert!(!rec.tables.contains_key(&ReportSection::KmerContent));
        assert_eq!(rec.status(ReportSection::KmerContent), Status::Fail);
        assert_eq!(rec.status(ReportSection::SequenceQuality), Status::Warn);
        assert_eq!(rec.status(ReportSection::BaseContent), Status::Fail);
        assert_eq!(rec.notes.skipped_lines, 0);
        assert_eq!(rec.notes.truncated_section, None);

        let Some(SectionTable::BaseQuality(q)) = rec.table(ReportSection::BaseQuality) else {
            panic!("quality table missing");
        };
        assert_eq!(q[&PositionBucket(2)].mean, 33.5);

        let Some(SectionTable::BaseContent(c)) = rec.table(ReportSection::BaseContent) else {
            panic!("content table missing");
        };
        assert_eq!(c[&PositionBucket(1)].t, 0.0);

        let Some(SectionTable::DuplicationLevels(d)) = rec.table(ReportSection::DuplicationLevels)
        else {
            panic!("duplication table missing");
        };
        assert_eq!(d.get(">10").unwrap().percent_total, 3.0);

        let Some(SectionTable::AdapterContent(a)) = rec.table(ReportSection::AdapterContent) else {
            panic!("adapter table missing");
        };
        assert_eq!(a.get("Nextera Transposase Sequence", 2), Some(0.05));
    }

    fn reverse_sections(report: &str) -> String {
        let mut lines = report.lines();
        let preamble = lines.next().unwrap_or_default();
        let mut blocks = Vec::new();
        let mut current = String::new();
        for line in lines {
            current.push_str(line);
            current.push('\n');
            if line == ">>END_MODULE" {
                blocks.push(std::mem::take(&mut current));
            }
        }
        blocks.reverse();
        format!("{}\n{}", preamble, blocks.concat())
    }

    #[test]
    fn section_order_does_not_matter() {
        let reversed = reverse_sections(REPORT);
        assert_ne!(reversed, REPORT);
        let a = assemble(REPORT, "x", &naming()).unwrap();
        let b = assemble(&reversed, "x", &naming()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn missing_section_is_absent_not_error() {
        let text = "Filename\ts.fq\n>>Per base N content\tpass\n1\t0.0\n>>END_MODULE\n";
        let rec = assemble(text, "x", &naming()).unwrap();
        assert_eq!(rec.tables.len(), 1);
        assert!(rec.table(ReportSection::AdapterContent).is_none());
        assert_eq!(rec.status(ReportSection::AdapterContent), Status::Default);
        assert_eq!(rec.stats.avg_sequence_length, None);
    }

    #[test]
    fn empty_input() {
        assert_eq!(
            assemble("", "x", &naming()),
            Err(IngestError::EmptyReport)
        );
    }

    #[test]
    fn fallback_name_without_filename() {
        let rec = assemble(">>Per base N content\tpass\n>>END_MODULE\n", "fromdir", &naming())
            .unwrap();
        assert_eq!(rec.name, "fromdir");
    }

    #[test]
    fn blank_filename_falls_back() {
        let text = "Filename\t \n>>Per base N content\tpass\n1\t0.0\n>>END_MODULE\n";
        let rec = assemble(text, "fromdir", &naming()).unwrap();
        assert_eq!(rec.name, "fromdir");
        assert_eq!(rec.stats.filename, None);
    }

    #[test]
    fn truncated_section_is_kept() {
        let text = ">>Sequence Length Distribution\tpass\n#Length\tCount\n50\t10\n";
        let rec = assemble(text, "x", &naming()).unwrap();
        assert_eq!(
            rec.notes.truncated_section,
            Some(ReportSection::LengthDistribution)
        );
        assert_eq!(rec.stats.avg_sequence_length, Some(50.0));
    }

    #[test]
    fn malformed_lines_do_not_spoil_the_rest() {
        let text = "\
>>Per base N content\tpass
1\t0.0
x-y\t1.0
2\tbad
3\t0.5
>>END_MODULE
>>Adapter Content\tpass
1\t0.3
#Position\tIllumina
2\t0.4
>>END_MODULE
";
        let rec = assemble(text, "x", &naming()).unwrap();
        assert_eq!(rec.notes.skipped_lines, 3);
        let Some(SectionTable::BaseN(n)) = rec.table(ReportSection::BaseN) else {
            panic!("N table missing");
        };
        assert_eq!(n.len(), 2);
        let Some(SectionTable::AdapterContent(a)) = rec.table(ReportSection::AdapterContent) else {
            panic!("adapter table missing");
        };
        assert_eq!(a.get("Illumina", 1), None);
        assert_eq!(a.get("Illumina", 2), Some(0.4));
    }

    #[test]
    fn missing_end_marker_between_sections() {
        let text = "\
>>Per sequence GC content\tpass
40\t10
>>Per base N content\twarn
1\t0.0
>>END_MODULE
";
        let rec = assemble(text, "x", &naming()).unwrap();
        assert_eq!(rec.tables.len(), 2);
        assert_eq!(rec.status(ReportSection::BaseN), Status::Warn);
        assert_eq!(rec.notes.truncated_section, None);
    }

    #[test]
    fn report_without_sections_is_valid() {
        let rec = assemble("Filename\tonly.fastq\nTotal Sequences\t5\n", "x", &naming()).unwrap();
        assert!(!rec.has_tables());
        assert_eq!(rec.name, "only");
    }
}
