use clap::Parser;

/// The analysis takes no options: it always reads `debug.log` next to the
/// executable.
#[derive(Parser, Debug)]
#[command(
    about = "Summarise payload build, state root and canonical insertion latencies from debug.log",
    version
)]
pub struct Args {}
