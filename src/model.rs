use chrono::{DateTime, Utc};
use std::collections::HashMap;

use crate::config::{
    BLOCK_ADDED_MARKER, BUILT_PAYLOAD_MARKER, RECEIVED_BLOCK_MARKER, STATE_ROOT_MARKER,
};

/// The four kinds of log lines the scanner cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogEvent {
    BuiltPayload,
    ReceivedBlock,
    StateRootFinished,
    BlockAdded,
}

impl LogEvent {
    /// Classification priority. The markers are distinct literals that do not
    /// co-occur in one line, so the first hit decides.
    pub fn all_in_order() -> &'static [LogEvent] {
        use LogEvent::*;
        &[BuiltPayload, ReceivedBlock, StateRootFinished, BlockAdded]
    }

    pub fn marker(self) -> &'static str {
        match self {
            LogEvent::BuiltPayload => BUILT_PAYLOAD_MARKER,
            LogEvent::ReceivedBlock => RECEIVED_BLOCK_MARKER,
            LogEvent::StateRootFinished => STATE_ROOT_MARKER,
            LogEvent::BlockAdded => BLOCK_ADDED_MARKER,
        }
    }

    pub fn classify(clean: &str) -> Option<LogEvent> {
        LogEvent::all_in_order()
            .iter()
            .copied()
            .find(|event| clean.contains(event.marker()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    BuildPayload,
    BuildToReceived,
    StateRootTask,
    BlockAdded,
}

impl Metric {
    /// Report order.
    pub fn all_in_order() -> &'static [Metric] {
        use Metric::*;
        &[BuildPayload, BuildToReceived, StateRootTask, BlockAdded]
    }

    pub fn name(self) -> &'static str {
        match self {
            Metric::BuildPayload => "Build Payload Time",
            Metric::BuildToReceived => {
                "State Root Computation Time (Built Payload -> Received Block)"
            }
            Metric::StateRootTask => "Explicit State Root Task Time",
            Metric::BlockAdded => "Block Added to Canonical Chain Time",
        }
    }
}

/// Millisecond samples collected during one scan.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SampleSets {
    pub build_payload: Vec<f64>,
    pub build_to_received: Vec<f64>,
    pub state_root_task: Vec<f64>,
    pub block_added: Vec<f64>,
}

impl SampleSets {
    pub fn get(&self, metric: Metric) -> &[f64] {
        match metric {
            Metric::BuildPayload => &self.build_payload,
            Metric::BuildToReceived => &self.build_to_received,
            Metric::StateRootTask => &self.state_root_task,
            Metric::BlockAdded => &self.block_added,
        }
    }

    pub fn push(&mut self, metric: Metric, sample_ms: f64) {
        match metric {
            Metric::BuildPayload => self.build_payload.push(sample_ms),
            Metric::BuildToReceived => self.build_to_received.push(sample_ms),
            Metric::StateRootTask => self.state_root_task.push(sample_ms),
            Metric::BlockAdded => self.block_added.push(sample_ms),
        }
    }
}

/// Build timestamps waiting for their "received" line, keyed by the number
/// of the block being built.
#[derive(Debug, Default)]
pub struct PendingBuilds {
    started: HashMap<u64, DateTime<Utc>>,
}

impl PendingBuilds {
    /// Later builds for the same block overwrite the earlier timestamp.
    pub fn record(&mut self, block: u64, at: DateTime<Utc>) {
        if let Some(previous) = self.started.insert(block, at) {
            tracing::debug!(block, %previous, %at, "overwriting pending build");
        }
    }

    /// Consumes the entry, so each build is matched at most once.
    pub fn take(&mut self, block: u64) -> Option<DateTime<Utc>> {
        self.started.remove(&block)
    }

    pub fn len(&self) -> usize {
        self.started.len()
    }

    pub fn is_empty(&self) -> bool {
        self.started.is_empty()
    }
}

/// Per-scan counters, only used for diagnostics.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScanCounters {
    pub lines: usize,
    pub timestamped: usize,
    pub built_payload: usize,
    pub received_block: usize,
    pub state_root_finished: usize,
    pub block_added: usize,
    pub unmatched_received: usize,
}

impl ScanCounters {
    pub fn count_event(&mut self, event: LogEvent) {
        match event {
            LogEvent::BuiltPayload => self.built_payload += 1,
            LogEvent::ReceivedBlock => self.received_block += 1,
            LogEvent::StateRootFinished => self.state_root_finished += 1,
            LogEvent::BlockAdded => self.block_added += 1,
        }
    }
}
