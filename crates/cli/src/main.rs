//! splunk-fields - Extract the field catalog of a Splunk instance.
//!
//! Responsibilities:
//! - Load `.env`, parse arguments and set up per-run logging.
//! - Run one extraction and translate the outcome into an exit code.
//!
//! Does NOT handle:
//! - REST API details (see `crates/client`).
//! - Configuration validation (see `crates/config`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing and configuration loading.
//! - The log guard is dropped before `std::process::exit` so file lines are flushed.
//! - Requests run one at a time on a single-threaded runtime.

mod app;
mod args;
mod error;
mod logging;
mod output;
mod pipeline;

use args::Cli;
use clap::Parser;
use error::{ExitCode, ExitCodeExt};
use splunk_config::ConfigLoader;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::ConfigError.as_i32());
    }

    let cli = Cli::parse();

    let log_guard = match logging::init(&cli.log_dir) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {}", e);
            std::process::exit(ExitCode::OutputError.as_i32());
        }
    };
    tracing::info!(log_file = %log_guard.path().display(), "Starting splunk-fields");

    let exit_code = match app::run(&cli).await {
        Ok(_) => ExitCode::Success,
        Err(e) => {
            tracing::error!("{:#}", e);
            e.exit_code()
        }
    };

    drop(log_guard);
    std::process::exit(exit_code.as_i32());
}
