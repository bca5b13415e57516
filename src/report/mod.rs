pub mod json;
pub mod stats_txt;
pub mod summary_txt;
