// src/main.rs

use depgraph_config::{execute, init_tracing, Cli};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    // --- Initialize Tracing (stderr) ---
    init_tracing(&cli.log_level, cli.json_logs);

    let stdout = io::stdout();
    let stderr = io::stderr();
    let code = execute(&cli.config, &mut stdout.lock(), &mut stderr.lock());

    ExitCode::from(code)
}
