use clap::Parser;
use std::path::PathBuf;

/// Default configuration file, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config.json";

#[derive(Parser, Debug)]
#[command(
    name = "depgraph",
    version,
    about = "Dependency graph visualizer (proto), stage 1: configuration loader",
    long_about = "Reads a JSON configuration file, checks the required fields \
                  (package_name, repo, test_mode, version, max_depth) and prints \
                  the normalized values as key=value lines.\n\n\
                  Exit codes: 0 success, 2 configuration error, 3 unexpected error."
)]
pub struct Cli {
    /// Path to JSON config file
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = DEFAULT_CONFIG_PATH,
        env = "DEPGRAPH_CONFIG"
    )]
    pub config: PathBuf,

    /// Log filter (e.g. "debug", "depgraph_config=trace")
    #[arg(short, long, default_value = "error", env = "RUST_LOG")]
    pub log_level: String,

    /// Enable JSON logging
    #[arg(long, env = "DEPGRAPH_JSON_LOGS")]
    pub json_logs: bool,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
