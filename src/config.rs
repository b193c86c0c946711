/// Log file analysed on every run, looked up next to the executable.
pub const LOG_FILE_NAME: &str = "debug.log";

pub const BUILT_PAYLOAD_MARKER: &str = "Built payload";
pub const RECEIVED_BLOCK_MARKER: &str = "Received block from consensus engine";
pub const STATE_ROOT_MARKER: &str = "State root task finished";
pub const BLOCK_ADDED_MARKER: &str = "Block added to canonical chain";

/// Block 1 has no meaningful predecessor, so it never takes part in
/// build-to-received correlation.
pub const GENESIS_CHILD_BLOCK: u64 = 1;

pub const BANNER_WIDTH: usize = 60;

pub const DEFAULT_LOG_FILTER: &str = "warn";
