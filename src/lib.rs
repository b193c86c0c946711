#[macro_use]
mod macros;

pub mod analyzer;
pub mod args;
pub mod config;
pub mod duration;
pub mod io_utils;
pub mod line;
pub mod logging;
pub mod model;
pub mod report;
pub mod stats;

pub use analyzer::{analyze_file, analyze_reader, LogAnalyzer};
pub use model::{Metric, SampleSets};
pub use report::write_report;
