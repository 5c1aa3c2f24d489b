//! Command-line flags.
//!
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Parser)]
#[command(name = "bus-roster", version, about = "Manage a bus fleet through its REST API")]
pub struct Cli {
    /// Base URL of the backend; `/api/buses` is appended.
    #[arg(long, env = "BUS_ROSTER_URL", default_value = "http://localhost:3000")]
    pub base_url: String,

    /// Log file (defaults to bus-roster.log in the config directory).
    #[arg(long, env = "BUS_ROSTER_LOG")]
    pub log_file: Option<PathBuf>,

    /// Per-request timeout in seconds; 0 (the default) waits forever.
    #[arg(long, env = "BUS_ROSTER_TIMEOUT", default_value_t = 0)]
    pub timeout_secs: u64,
}

impl Cli {
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}
