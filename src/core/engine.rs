use crate::core::collection::Collection;
use crate::core::discover::{self, ReportSource};
use crate::core::model::SampleRecord;
use crate::core::naming::SampleNaming;
use crate::core::parse::assemble;
use anyhow::{Context, Result, anyhow};
use crossbeam_channel as channel;
use std::path::PathBuf;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

pub struct RunConfig {
    pub inputs: Vec<PathBuf>,
    pub threads: usize,
    pub naming: SampleNaming,
}

pub struct RunOutput {
    pub collection: Collection,
    pub discovered: usize,
    pub failed: usize,
    pub duplicates: usize,
}

type Outcome = (usize, Result<SampleRecord>);

pub fn run(cfg: RunConfig) -> Result<RunOutput> {
    let t_total = Instant::now();
    let naming = Arc::new(cfg.naming);

    let t_discover = Instant::now();
    let sources = discover::discover(&cfg.inputs, &naming)?;
    log_stage("engine.discover", t_discover);
    info!("Discovered {} FastQC report sources", sources.len());

    let t_parse = Instant::now();
    let parts = assemble_all(&sources, cfg.threads.max(1), &naming)?;
    log_stage("engine.assemble", t_parse);

    let t_merge = Instant::now();
    let mut collection = Collection::new();
    let mut failed = 0usize;
    let mut duplicates = 0usize;
    for (source, outcome) in sources.iter().zip(parts) {
        match outcome {
            Some(Ok(record)) => {
                if !record.has_tables() {
                    warn!(
                        "{}: no recognised sections in {}",
                        record.name,
                        source.path.display()
                    );
                }
                if collection.ingest(record).is_some() {
                    duplicates += 1;
                }
            }
            Some(Err(e)) => {
                failed += 1;
                warn!("skipping {}: {:#}", source.path.display(), e);
            }
            None => {
                failed += 1;
                warn!("no result for {}", source.path.display());
            }
        }
    }
    log_stage("engine.merge", t_merge);

    let collection = collection.require_samples().map_err(|e| {
        anyhow::Error::new(e).context(format!(
            "searched {} input path(s), {} candidate file(s)",
            cfg.inputs.len(),
            sources.len()
        ))
    })?;
    info!("Found {} reports", collection.len());
    log_stage("engine.total", t_total);

    Ok(RunOutput {
        collection,
        discovered: sources.len(),
        failed,
        duplicates,
    })
}

// Results are slotted by discovery index, so ingest order ignores thread timing.
fn assemble_all(
    sources: &[ReportSource],
    threads: usize,
    naming: &Arc<SampleNaming>,
) -> Result<Vec<Option<Result<SampleRecord>>>> {
    let mut parts: Vec<Option<Result<SampleRecord>>> = Vec::new();
    parts.resize_with(sources.len(), || None);
    if sources.is_empty() {
        return Ok(parts);
    }

    let (job_tx, job_rx) = channel::bounded::<ReportSource>(threads * 2);
    let (result_tx, result_rx) = channel::unbounded::<Outcome>();

    let jobs: Vec<ReportSource> = sources.to_vec();
    let producer = thread::spawn(move || {
        for job in jobs {
            if job_tx.send(job).is_err() {
                return;
            }
        }
    });

    let mut workers = Vec::with_capacity(threads);
    for _ in 0..threads {
        let rx = job_rx.clone();
        let tx = result_tx.clone();
        let naming = Arc::clone(naming);
        workers.push(thread::spawn(move || {
            for source in rx.iter() {
                let outcome = load_and_assemble(&source, &naming);
                if tx.send((source.index, outcome)).is_err() {
                    break;
                }
            }
        }));
    }
    drop(result_tx);
    drop(job_rx);

    let mut wait_time = Duration::ZERO;
    for _ in 0..sources.len() {
        let t_wait = Instant::now();
        let (index, outcome) = result_rx
            .recv()
            .context("worker pool stopped before all reports were parsed")?;
        wait_time += t_wait.elapsed();
        if index >= parts.len() {
            return Err(anyhow!("invalid report index {}", index));
        }
        parts[index] = Some(outcome);
    }

    let _ = producer.join();
    for worker in workers {
        let _ = worker.join();
    }
    debug!("collector.wait={}", fmt_dur(wait_time));

    Ok(parts)
}

fn load_and_assemble(source: &ReportSource, naming: &SampleNaming) -> Result<SampleRecord> {
    let text = source
        .load()
        .with_context(|| format!("failed to load {}", source.path.display()))?;
    assemble(&text, &source.name_hint, naming)
        .with_context(|| format!("failed to parse {}", source.path.display()))
}

fn log_stage(name: &str, t: Instant) {
    debug!("stage={} time={}", name, fmt_dur(t.elapsed()));
}

pub(crate) fn fmt_dur(d: Duration) -> String {
    if d.as_secs_f64() < 1.0 {
        format!("{}ms", d.as_millis())
    } else {
        format!("{:.3}s", d.as_secs_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::IngestError;
    use crate::core::io::REPORT_FILE_NAME;
    use std::fs;

    fn report(filename: &str, total: u64) -> String {
        format!(
            "Filename\t{}\nTotal Sequences\t{}\n>>Sequence Length Distribution\tpass\n100\t{}\n>>END_MODULE\n",
            filename, total, total
        )
    }

    fn write_report(dir: &std::path::Path, sub: &str, body: &str) {
        fs::create_dir_all(dir.join(sub)).unwrap();
        fs::write(dir.join(sub).join(REPORT_FILE_NAME), body).unwrap();
    }

    #[test]
    fn duplicates_resolve_by_discovery_order() {
        let dir = tempfile::tempdir().unwrap();
        for i in 0..12 {
            write_report(dir.path(), &format!("run{:02}", i), &report("shared.fq", i + 1));
        }
        let out = run(RunConfig {
            inputs: vec![dir.path().to_path_buf()],
            threads: 4,
            naming: SampleNaming::default(),
        })
        .unwrap();
        assert_eq!(out.discovered, 12);
        assert_eq!(out.duplicates, 11);
        assert_eq!(out.collection.len(), 1);
        let rec = out.collection.get("shared").unwrap();
        assert_eq!(rec.stats.total_sequences, Some(12));
    }

    #[test]
    fn bad_reports_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        write_report(dir.path(), "empty_fastqc", "");
        write_report(dir.path(), "good_fastqc", &report("good.fastq.gz", 5));
        let out = run(RunConfig {
            inputs: vec![dir.path().to_path_buf()],
            threads: 2,
            naming: SampleNaming::default(),
        })
        .unwrap();
        assert_eq!(out.failed, 1);
        assert_eq!(out.collection.len(), 1);
        assert_eq!(
            out.collection.get("good").unwrap().stats.avg_sequence_length,
            Some(100.0)
        );
    }

    #[test]
    fn nothing_found_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("readme.md"), "nothing here").unwrap();
        let err = run(RunConfig {
            inputs: vec![dir.path().to_path_buf()],
            threads: 1,
            naming: SampleNaming::default(),
        })
        .err()
        .unwrap();
        let root = err.downcast_ref::<IngestError>();
        assert_eq!(root, Some(&IngestError::NoReportsFound));
    }
}
