use anyhow::Result;
use clap::Parser;
use std::io::{self, Write};

use payload_latency_rs::analyze_file;
use payload_latency_rs::args::Args;
use payload_latency_rs::io_utils::default_log_path;
use payload_latency_rs::logging::init_logging;
use payload_latency_rs::report::{write_analyzing, write_not_found, write_report};

fn main() -> Result<()> {
    let _args = Args::parse();
    init_logging();

    let log_file = default_log_path()?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    // A missing log is reported, not treated as a failure.
    if !log_file.exists() {
        tracing::debug!(path = %log_file.display(), "log file not found");
        write_not_found(&mut out, &log_file)?;
        return Ok(());
    }

    write_analyzing(&mut out, &log_file)?;
    out.flush()?;

    let samples = analyze_file(&log_file)?;
    write_report(&mut out, &samples)?;
    out.flush()?;

    Ok(())
}
