use std::io::{self, Write};
use std::path::Path;

use crate::config::BANNER_WIDTH;
use crate::model::{Metric, SampleSets};
use crate::stats::statistics_from_samples;

pub fn write_statistics<W: Write>(out: &mut W, name: &str, samples: &[f64]) -> io::Result<()> {
    let Some(s) = statistics_from_samples(samples) else {
        return writeln!(out, "\n{}: No data found", name);
    };

    writeln!(out, "\n{}:", name)?;
    writeln!(out, "  Count:   {}", s.cnt)?;
    writeln!(out, "  Average: {:.3} ms", s.avg)?;
    writeln!(out, "  Median:  {:.3} ms", s.median)?;
    writeln!(out, "  Min:     {:.3} ms", s.min)?;
    writeln!(out, "  Max:     {:.3} ms", s.max)?;
    writeln!(out, "  Std Dev: {:.3} ms", s.std_dev)
}

fn banner() -> String {
    "=".repeat(BANNER_WIDTH)
}

pub fn write_analyzing<W: Write>(out: &mut W, log_file: &Path) -> io::Result<()> {
    writeln!(out, "Analyzing {}...", log_file.display())
}

pub fn write_not_found<W: Write>(out: &mut W, log_file: &Path) -> io::Result<()> {
    writeln!(out, "Error: {} not found", log_file.display())
}

/// Writes the results block: header banner, one section per metric in
/// report order, closing banner.
pub fn write_report<W: Write>(out: &mut W, samples: &SampleSets) -> io::Result<()> {
    writeln!(out, "\n{}", banner())?;
    writeln!(out, "LOG ANALYSIS RESULTS")?;
    writeln!(out, "{}", banner())?;

    for metric in Metric::all_in_order() {
        write_statistics(out, metric.name(), samples.get(*metric))?;
    }

    writeln!(out, "\n{}", banner())
}
