use crate::cli::args::{Cli, Commands, ScanArgs};
use crate::core::engine::{self, RunConfig, fmt_dur};
use crate::core::naming::SampleNaming;
use crate::report;
use anyhow::{Context, Result, bail};
use clap::Parser;
use std::fs;
use std::time::Instant;
use tracing::{debug, info};

pub fn entry() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.command {
        Commands::Scan(args) => scan(args),
    }
}

fn init_logging(verbose: bool) {
    let log_level = if verbose { "debug" } else { "info" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(log_level))
        .with_writer(std::io::stderr)
        .try_init();
}

fn scan(args: ScanArgs) -> Result<()> {
    let t0 = Instant::now();

    stage("preflight", || {
        if args.threads == 0 {
            bail!("--threads must be >= 1");
        }
        for input in &args.inputs {
            if !input.exists() {
                bail!("input path not found: {}", input.display());
            }
        }
        Ok(())
    })?;

    let t_out = Instant::now();
    fs::create_dir_all(&args.out)
        .with_context(|| format!("failed to create output dir {}", args.out.display()))?;
    stage_done("mkdir", t_out);

    let config = RunConfig {
        inputs: args.inputs.clone(),
        threads: args.threads,
        naming: SampleNaming::new(args.trim_suffixes.iter().cloned()),
    };

    let t_engine = Instant::now();
    let output = engine::run(config)?;
    stage_done("engine", t_engine);
    info!(
        "{} samples from {} sources ({} skipped, {} duplicate names)",
        output.collection.len(),
        output.discovered,
        output.failed,
        output.duplicates
    );

    let stats_path = args.out.join(report::stats_txt::FILE_NAME);
    let t_stats = Instant::now();
    report::stats_txt::write(&stats_path, &output.collection)
        .with_context(|| format!("failed to write {}", stats_path.display()))?;
    stage_done("general_stats", t_stats);

    let summary_path = args.out.join(report::summary_txt::FILE_NAME);
    let t_summary = Instant::now();
    report::summary_txt::write(&summary_path, &output.collection)
        .with_context(|| format!("failed to write {}", summary_path.display()))?;
    stage_done("summary", t_summary);

    if !args.no_json {
        let json_path = args.out.join(report::json::FILE_NAME);
        let t_json = Instant::now();
        report::json::write(&json_path, &output.collection)
            .with_context(|| format!("failed to write {}", json_path.display()))?;
        stage_done("json", t_json);
        if let Ok(meta) = fs::metadata(&json_path) {
            debug!("output json={} bytes={}", json_path.display(), meta.len());
        }
    }

    debug!("output_dir={} total={}", args.out.display(), fmt_dur(t0.elapsed()));
    Ok(())
}

fn stage<F>(name: &str, f: F) -> Result<()>
where
    F: FnOnce() -> Result<()>,
{
    let t = Instant::now();
    let res = f();
    stage_done(name, t);
    res
}

fn stage_done(name: &str, t: Instant) {
    debug!("stage={} time={}", name, fmt_dur(t.elapsed()));
}
