use crate::core::collection::Collection;
use crate::core::model::BasicStats;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub const FILE_NAME: &str = "fastqc_general_stats.txt";

pub fn write(path: &Path, collection: &Collection) -> Result<()> {
    let mut w = BufWriter::new(
        File::create(path).with_context(|| "create fastqc_general_stats.txt failed")?,
    );
    write_to(&mut w, collection)?;
    w.flush()?;
    Ok(())
}

pub fn write_to(w: &mut dyn Write, collection: &Collection) -> Result<()> {
    write!(w, "Sample")?;
    for field in BasicStats::FIELDS {
        write!(w, "\t{}", field)?;
    }
    writeln!(w)?;
    for record in collection.iter() {
        write!(w, "{}", record.name)?;
        for field in BasicStats::FIELDS {
            match record.stats.value(field) {
                Some(v) => write!(w, "\t{}", v)?,
                None => write!(w, "\t")?,
            }
        }
        writeln!(w)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::naming::SampleNaming;

    #[test]
    fn one_row_per_sample_with_blanks() {
        let naming = SampleNaming::default();
        let mut c = Collection::new();
        c.ingest_text(
            "Filename\tb.fastq\nTotal Sequences\t1000\nSequence length\t50-76\n%GC\t41\n",
            "",
            &naming,
        )
        .unwrap();
        c.ingest_text(
            "Filename\ta.fastq\n>>Sequence Length Distribution\tpass\n10\t100\n20\t50\n>>END_MODULE\n",
            "",
            &naming,
        )
        .unwrap();
        let mut out = Vec::new();
        write_to(&mut out, &c).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(
            lines[0],
            "Sample\tfilename\ttotal_sequences\tsequence_length\tpercent_gc\tpercent_duplicates\tavg_sequence_length"
        );
        assert!(lines[1].starts_with("a\ta.fastq\t\t\t\t\t13.33"));
        assert_eq!(lines[2], "b\tb.fastq\t1000\t50-76\t41\t\t");
    }
}
