use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use regex::Regex;
use std::io::BufRead;
use std::path::Path;
use std::time::Instant;

use crate::config::GENESIS_CHILD_BLOCK;
use crate::duration::elapsed_field_ms;
use crate::io_utils::open_log;
use crate::line::LogLine;
use crate::model::{LogEvent, Metric, PendingBuilds, SampleSets, ScanCounters};

fn captured_u64(re: &Regex, line: &str) -> Option<u64> {
    let caps = re.captures(line)?;
    match caps[1].parse::<u64>() {
        Ok(v) => Some(v),
        Err(e) => {
            tracing::debug!(value = &caps[1], error = %e, "dropping unparsable block number");
            None
        }
    }
}

fn parent_number(line: &str) -> Option<u64> {
    captured_u64(regex!(r"parent_number\s*=\s*(\d+)"), line)
}

/// First `number = <int>` in the line, which is also satisfied by a
/// preceding `parent_number` field.
fn block_number(line: &str) -> Option<u64> {
    captured_u64(regex!(r"number\s*=\s*(\d+)"), line)
}

fn elapsed_ms_between(start: DateTime<Utc>, end: DateTime<Utc>) -> f64 {
    let delta = end - start;
    match delta.num_microseconds() {
        Some(us) => us as f64 / 1000.0,
        None => delta.num_milliseconds() as f64,
    }
}

/// Single-pass scanner. Feed it lines in file order with [`process_line`]
/// and collect the samples with [`finish`].
///
/// [`process_line`]: LogAnalyzer::process_line
/// [`finish`]: LogAnalyzer::finish
#[derive(Debug, Default)]
pub struct LogAnalyzer {
    pending: PendingBuilds,
    samples: SampleSets,
    counters: ScanCounters,
}

impl LogAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn process_line(&mut self, raw: &str) {
        self.counters.lines += 1;
        let line = LogLine::parse(raw);
        if line.timestamp.is_some() {
            self.counters.timestamped += 1;
        }

        let Some(event) = LogEvent::classify(&line.text) else {
            return;
        };
        self.counters.count_event(event);

        match event {
            LogEvent::BuiltPayload => self.on_built_payload(&line),
            LogEvent::ReceivedBlock => self.on_received_block(&line),
            LogEvent::StateRootFinished => self.push_elapsed(&line, Metric::StateRootTask),
            LogEvent::BlockAdded => self.push_elapsed(&line, Metric::BlockAdded),
        }
    }

    fn on_built_payload(&mut self, line: &LogLine<'_>) {
        if let (Some(parent), Some(ts)) = (parent_number(&line.text), line.timestamp) {
            match parent.checked_add(1) {
                Some(GENESIS_CHILD_BLOCK) | None => {}
                Some(block) => self.pending.record(block, ts),
            }
        }

        self.push_elapsed(line, Metric::BuildPayload);
    }

    fn on_received_block(&mut self, line: &LogLine<'_>) {
        let (Some(block), Some(ts)) = (block_number(&line.text), line.timestamp) else {
            return;
        };
        if block == GENESIS_CHILD_BLOCK {
            return;
        }

        match self.pending.take(block) {
            Some(built_at) => {
                self.samples
                    .push(Metric::BuildToReceived, elapsed_ms_between(built_at, ts));
            }
            None => self.counters.unmatched_received += 1,
        }
    }

    fn push_elapsed(&mut self, line: &LogLine<'_>, metric: Metric) {
        if let Some(ms) = elapsed_field_ms(&line.text) {
            self.samples.push(metric, ms);
        }
    }

    pub fn counters(&self) -> &ScanCounters {
        &self.counters
    }

    pub fn pending_builds(&self) -> usize {
        self.pending.len()
    }

    /// Returns the collected samples. Builds never matched by a received
    /// line are dropped here.
    pub fn finish(self) -> SampleSets {
        let c = self.counters;
        tracing::info!(
            lines = c.lines,
            timestamped = c.timestamped,
            built_payload = c.built_payload,
            received_block = c.received_block,
            state_root_finished = c.state_root_finished,
            block_added = c.block_added,
            unmatched_received = c.unmatched_received,
            "scan finished"
        );
        if !self.pending.is_empty() {
            tracing::debug!(
                unconsumed = self.pending.len(),
                "discarding builds without a received block"
            );
        }
        self.samples
    }
}

/// Scans a whole log stream. Invalid UTF-8 is decoded lossily so a single
/// bad line never aborts the run.
pub fn analyze_reader<R: BufRead>(mut reader: R) -> Result<SampleSets> {
    let t0 = Instant::now();
    let mut analyzer = LogAnalyzer::new();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        let n = reader
            .read_until(b'\n', &mut buf)
            .context("failed to read log line")?;
        if n == 0 {
            break;
        }
        analyzer.process_line(&String::from_utf8_lossy(&buf));
    }

    tracing::debug!(elapsed_s = t0.elapsed().as_secs_f64(), "log scanned");
    Ok(analyzer.finish())
}

pub fn analyze_file(path: &Path) -> Result<SampleSets> {
    let reader = open_log(path)?;
    analyze_reader(reader).with_context(|| format!("analyze {}", path.display()))
}
