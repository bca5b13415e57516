//! Parses FastQC `fastqc_data.txt` reports into a per-sample data model and
//! aggregates them into a [`Collection`](crate::core::collection::Collection) keyed by sample name.

pub mod cli;
pub mod core;
pub mod report;
