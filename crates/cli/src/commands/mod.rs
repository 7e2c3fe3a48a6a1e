//! CLI command definitions and execution
//!
//! This module contains the command tree and the single dispatch point.
//! All storage operations live under the `bucket` command.

use clap::{Parser, Subcommand};
use ss_core::{ClientFactory, ConfigManager, Defaults};
use ss_s3::AwsClientFactory;

use crate::exit_code::ExitCode;
use crate::output::{Formatter, OutputConfig};

pub mod bucket;
mod completions;

/// simple-s3 - a simple CLI for basic S3 operations
///
/// Credentials are resolved by the AWS SDK from the environment, the shared
/// config files, or the instance metadata service.
#[derive(Parser, Debug)]
#[command(name = "simple-s3")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format: human-readable or JSON
    #[arg(long, global = true, default_value = "false")]
    pub json: bool,

    /// Disable colored output
    #[arg(long, global = true, default_value = "false")]
    pub no_color: bool,

    /// Disable progress spinners
    #[arg(long, global = true, default_value = "false")]
    pub no_progress: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true, default_value = "false")]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, global = true, default_value = "false")]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Operate on an S3 bucket and its objects
    Bucket(bucket::BucketArgs),

    /// Generate shell completion scripts
    Completions(completions::CompletionsArgs),
}

impl Cli {
    /// Merge the global output flags with configuration defaults
    ///
    /// Flags can only switch features on or off in the direction the flag
    /// names; the config file fills in the rest.
    pub fn output_config(&self, defaults: &Defaults) -> OutputConfig {
        OutputConfig {
            json: self.json || defaults.json_output(),
            no_color: self.no_color || defaults.color_disabled(),
            no_progress: self.no_progress || !defaults.progress,
            quiet: self.quiet,
        }
    }
}

/// Execute the CLI command and return an exit code
pub async fn execute(cli: Cli) -> ExitCode {
    let config = match ConfigManager::new().and_then(|manager| manager.load()) {
        Ok(config) => config,
        Err(e) => {
            let formatter = Formatter::new(cli.output_config(&Defaults::default()));
            formatter.error(&format!("Failed to load configuration: {e}"));
            return ExitCode::from(&e);
        }
    };

    let output_config = cli.output_config(&config.defaults);
    if config.defaults.color.eq_ignore_ascii_case("always") && !output_config.no_color {
        console::set_colors_enabled(true);
        console::set_colors_enabled_stderr(true);
    }

    dispatch(
        cli.command,
        &config.defaults,
        &AwsClientFactory,
        Formatter::new(output_config),
    )
    .await
}

/// Route a parsed command to its handler
pub async fn dispatch(
    command: Commands,
    defaults: &Defaults,
    factory: &dyn ClientFactory,
    formatter: Formatter,
) -> ExitCode {
    match command {
        Commands::Bucket(args) => bucket::execute(args, defaults, factory, formatter).await,
        Commands::Completions(args) => completions::execute(args),
    }
}
