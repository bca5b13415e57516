use crate::core::collection::Collection;
use crate::core::model::ReportSection;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub const FILE_NAME: &str = "fastqc_summary.txt";

pub fn write(path: &Path, collection: &Collection) -> Result<()> {
    let mut w =
        BufWriter::new(File::create(path).with_context(|| "create fastqc_summary.txt failed")?);
    write_to(&mut w, collection)?;
    w.flush()?;
    Ok(())
}

pub fn write_to(w: &mut dyn Write, collection: &Collection) -> Result<()> {
    for record in collection.iter() {
        for section in ReportSection::ALL {
            writeln!(
                w,
                "{}\t{}\t{}",
                record.status(section).as_str_upper(),
                section.title(),
                record.name
            )?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::naming::SampleNaming;

    #[test]
    fn statuses_per_sample_and_section() {
        let mut c = Collection::new();
        c.ingest_text(
            "Filename\ts1.fq\n>>Adapter Content\twarn\n>>END_MODULE\n",
            "",
            &SampleNaming::default(),
        )
        .unwrap();
        let mut out = Vec::new();
        write_to(&mut out, &c).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), ReportSection::ALL.len());
        assert_eq!(lines[0], "DEFAULT\tPer base sequence quality\ts1");
        assert!(lines.contains(&"WARN\tAdapter Content\ts1"));
    }
}
