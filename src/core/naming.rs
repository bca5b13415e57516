pub const DEFAULT_TRIM_SUFFIXES: [&str; 9] = [
    ".gz", ".bz2", ".fastq", ".fq", ".bam", ".sam", ".txt", ".zip", "_fastqc",
];

/// Turns file names into sample names by stripping known suffixes.
#[derive(Clone, Debug)]
pub struct SampleNaming {
    trim_suffixes: Vec<String>,
}

impl Default for SampleNaming {
    fn default() -> Self {
        Self::new(std::iter::empty::<String>())
    }
}

impl SampleNaming {
    pub fn new<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut trim_suffixes: Vec<String> =
            DEFAULT_TRIM_SUFFIXES.iter().map(|s| s.to_string()).collect();
        for s in extra {
            let s = s.into();
            if !s.is_empty() && !trim_suffixes.contains(&s) {
                trim_suffixes.push(s);
            }
        }
        Self { trim_suffixes }
    }

    pub fn clean(&self, raw: &str) -> String {
        let base = raw
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(raw)
            .trim();
        let mut name = base;
        loop {
            let stripped = self
                .trim_suffixes
                .iter()
                .find_map(|suffix| name.strip_suffix(suffix.as_str()))
                .filter(|rest| !rest.is_empty());
            match stripped {
                Some(rest) => name = rest,
                None => break,
            }
        }
        if name.is_empty() {
            base.to_string()
        } else {
            name.to_string()
        }
    }
}
