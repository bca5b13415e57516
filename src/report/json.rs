use crate::core::collection::Collection;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub const FILE_NAME: &str = "fastqc_data.json";

pub fn write(path: &Path, collection: &Collection) -> Result<()> {
    let mut w = BufWriter::new(File::create(path).with_context(|| "create fastqc_data.json failed")?);
    serde_json::to_writer_pretty(&mut w, collection).with_context(|| "serialize collection failed")?;
    writeln!(w)?;
    w.flush()?;
    Ok(())
}
