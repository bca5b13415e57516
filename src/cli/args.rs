use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "kira-qc-collect",
    version,
    about = "Collect FastQC reports into cross-sample tables"
)]
pub struct Cli {
    #[arg(long, short, global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    Scan(ScanArgs),
}

#[derive(Parser)]
pub struct ScanArgs {
    /// Files or directories holding `fastqc_data.txt` or `*_fastqc.zip`.
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    #[arg(long)]
    pub out: PathBuf,

    #[arg(long, default_value_t = num_cpus::get())]
    pub threads: usize,

    /// Extra suffix to strip from sample names; repeatable.
    #[arg(long = "trim-suffix")]
    pub trim_suffixes: Vec<String>,

    #[arg(long, default_value_t = false)]
    pub no_json: bool,
}
