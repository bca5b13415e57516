use crate::core::io::{self, REPORT_FILE_NAME};
use crate::core::naming::SampleNaming;
use anyhow::{Context, Result, bail};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

pub const ZIP_SUFFIX: &str = "_fastqc.zip";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SourceKind {
    Plain,
    Zip,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReportSource {
    /// Position in discovery order; later sources win name collisions.
    pub index: usize,
    pub path: PathBuf,
    pub kind: SourceKind,
    pub name_hint: String,
}

impl ReportSource {
    pub fn load(&self) -> Result<String> {
        match self.kind {
            SourceKind::Plain => io::read_plain(&self.path),
            SourceKind::Zip => io::read_zipped(&self.path),
        }
    }
}

fn classify(path: &Path, naming: &SampleNaming) -> Option<(SourceKind, String)> {
    let file_name = path.file_name()?.to_str()?;
    if file_name == REPORT_FILE_NAME {
        let parent = path
            .parent()
            .and_then(|p| p.file_name())
            .and_then(|s| s.to_str())
            .unwrap_or(file_name);
        return Some((SourceKind::Plain, naming.clean(parent)));
    }
    if let Some(stem) = file_name.strip_suffix(ZIP_SUFFIX) {
        if !stem.is_empty() {
            return Some((SourceKind::Zip, naming.clean(stem)));
        }
    }
    None
}

pub fn discover(inputs: &[PathBuf], naming: &SampleNaming) -> Result<Vec<ReportSource>> {
    let mut seen = HashSet::new();
    let mut sources = Vec::new();
    for input in inputs {
        if !input.exists() {
            bail!("input path not found: {}", input.display());
        }
        for entry in WalkDir::new(input).follow_links(true).sort_by_file_name() {
            let entry =
                entry.with_context(|| format!("failed to walk {}", input.display()))?;
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            let Some((kind, name_hint)) = classify(path, naming) else {
                continue;
            };
            let key = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
            if !seen.insert(key) {
                continue;
            }
            debug!("found {:?} report {}", kind, path.display());
            sources.push(ReportSource {
                index: sources.len(),
                path: path.to_path_buf(),
                kind,
                name_hint,
            });
        }
    }
    Ok(sources)
}
