//! simple-s3 - a small command-line client for basic S3 operations
//!
//! Creates, inspects and deletes buckets and moves single files in and out
//! of them, using credentials resolved by the AWS SDK.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod commands;
mod exit_code;
mod output;

use commands::Cli;

/// Log filter used when `--debug` is passed and `RUST_LOG` is unset
const DEBUG_FILTER: &str = "ss_core=debug,ss_s3=debug,simple_s3=debug";

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.debug { DEBUG_FILTER } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    // Logs go to stderr so stdout stays parseable
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();

    let exit_code = commands::execute(cli).await;

    std::process::exit(exit_code.as_i32());
}
