use anyhow::{Context, Result, anyhow};
use memmap2::Mmap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

pub const REPORT_FILE_NAME: &str = "fastqc_data.txt";

const MAX_PREALLOC: u64 = 1 << 20;

// Declared zip sizes are untrusted; read_to_end grows past the cap as needed.
fn prealloc(declared: u64) -> usize {
    declared.min(MAX_PREALLOC) as usize
}

pub struct MmapSource {
    mmap: Option<Mmap>,
}

impl MmapSource {
    pub fn open(path: &Path) -> Result<Self> {
        let file =
            File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
        let len = file
            .metadata()
            .with_context(|| format!("failed to stat {}", path.display()))?
            .len();
        if len == 0 {
            return Ok(Self { mmap: None });
        }
        // SAFETY: read-only file mapping.
        let mmap = unsafe { Mmap::map(&file) }.with_context(|| "mmap failed")?;
        Ok(Self { mmap: Some(mmap) })
    }

    pub fn bytes(&self) -> &[u8] {
        self.mmap.as_deref().unwrap_or(&[])
    }
}

pub fn read_plain(path: &Path) -> Result<String> {
    let source = MmapSource::open(path)?;
    Ok(String::from_utf8_lossy(source.bytes()).into_owned())
}

// `<root>` is the top-level directory of the archive's first entry.
pub fn read_zipped(path: &Path) -> Result<String> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let mut archive = zip::ZipArchive::new(file)
        .with_context(|| format!("failed to read zip {}", path.display()))?;
    if archive.len() == 0 {
        return Err(anyhow!("zip {} has no entries", path.display()));
    }
    let root = {
        let first = archive
            .by_index(0)
            .with_context(|| format!("failed to read first entry of {}", path.display()))?;
        first
            .name()
            .split('/')
            .next()
            .unwrap_or_default()
            .to_string()
    };
    let member = if root.is_empty() {
        REPORT_FILE_NAME.to_string()
    } else {
        format!("{}/{}", root, REPORT_FILE_NAME)
    };
    let mut entry = archive
        .by_name(&member)
        .with_context(|| format!("can't find {} in {}", member, path.display()))?;
    let mut buf = Vec::with_capacity(prealloc(entry.size()));
    entry
        .read_to_end(&mut buf)
        .with_context(|| format!("failed to read {} from {}", member, path.display()))?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
