//! Bucket commands
//!
//! Every subcommand of `bucket` shares the persistent `--name`, `--region`,
//! `--profile` and `--endpoint-url` flags. Each handler validates its flags,
//! builds a fresh client through the injected [`ClientFactory`], issues a
//! single storage call and reports the outcome.

mod create;
mod delete;
mod delete_object;
mod download;
mod info;
mod list;
mod list_objects;
mod upload;

#[cfg(test)]
pub(crate) mod testing;

use clap::Subcommand;
use ss_core::{ClientFactory, Defaults, Error, ObjectStore, Session, Target};

use crate::exit_code::ExitCode;
use crate::output::Formatter;

/// Bucket name, region and profile shared by all bucket subcommands
#[derive(clap::Args, Debug, Clone, Default)]
pub struct SessionArgs {
    /// S3 bucket name (required by all commands except `list`)
    #[arg(long, global = true)]
    pub name: Option<String>,

    /// S3 region (required by all commands except `list`)
    #[arg(long, global = true)]
    pub region: Option<String>,

    /// AWS profile from the shared config files
    #[arg(long, global = true)]
    pub profile: Option<String>,

    /// Endpoint URL of an S3-compatible server
    #[arg(long, global = true, env = "SIMPLE_S3_ENDPOINT_URL")]
    pub endpoint_url: Option<String>,
}

/// Arguments for the `bucket` command
#[derive(clap::Args, Debug)]
pub struct BucketArgs {
    #[command(flatten)]
    pub session: SessionArgs,

    #[command(subcommand)]
    pub command: BucketCommands,
}

/// Bucket subcommands
#[derive(Subcommand, Debug)]
pub enum BucketCommands {
    /// Create the selected bucket
    Create,

    /// Delete the selected bucket
    Delete,

    /// List all buckets in the account
    List,

    /// Show the region of the selected bucket
    Info,

    /// Upload a local file to the selected bucket
    Upload(upload::UploadArgs),

    /// Download an object from the selected bucket
    Download(download::DownloadArgs),

    /// List objects in the selected bucket
    #[command(name = "list-objects")]
    ListObjects(list_objects::ListObjectsArgs),

    /// Delete an object from the selected bucket
    #[command(name = "delete-object")]
    DeleteObject(delete_object::DeleteObjectArgs),
}

/// Everything a bucket handler needs for one invocation
pub struct CommandContext<'a> {
    pub session: Session,
    pub factory: &'a dyn ClientFactory,
    pub formatter: Formatter,
}

/// Execute a bucket subcommand
pub async fn execute(
    args: BucketArgs,
    defaults: &Defaults,
    factory: &dyn ClientFactory,
    formatter: Formatter,
) -> ExitCode {
    let SessionArgs {
        name,
        region,
        profile,
        endpoint_url,
    } = args.session;

    let session = Session::new(name, region, profile, endpoint_url)
        .with_default_profile(defaults.profile.as_deref());

    let ctx = CommandContext {
        session,
        factory,
        formatter,
    };

    match args.command {
        BucketCommands::Create => create::execute(&ctx).await,
        BucketCommands::Delete => delete::execute(&ctx).await,
        BucketCommands::List => list::execute(&ctx).await,
        BucketCommands::Info => info::execute(&ctx).await,
        BucketCommands::Upload(upload_args) => upload::execute(&upload_args, &ctx).await,
        BucketCommands::Download(download_args) => download::execute(&download_args, &ctx).await,
        BucketCommands::ListObjects(list_args) => list_objects::execute(&list_args, &ctx).await,
        BucketCommands::DeleteObject(delete_args) => {
            delete_object::execute(&delete_args, &ctx).await
        }
    }
}

/// Validate bucket and region, reporting a usage error if either is missing
pub(crate) fn require_target(ctx: &CommandContext<'_>) -> Result<Target, ExitCode> {
    match ctx.session.target() {
        Ok(target) => {
            tracing::info!("Using bucket: {} in {}", target.bucket, target.region);
            if let Some(profile) = ctx.session.profile() {
                tracing::info!("Using AWS profile: {profile}");
            }
            Ok(target)
        }
        Err(e) => Err(usage_error(ctx, &e.to_string())),
    }
}

/// Report a validation failure
pub(crate) fn usage_error(ctx: &CommandContext<'_>, message: &str) -> ExitCode {
    ctx.formatter.error(message);
    ExitCode::UsageError
}

/// Build a storage client for this invocation
pub(crate) async fn connect(ctx: &CommandContext<'_>) -> Result<Box<dyn ObjectStore>, ExitCode> {
    let options = match ctx.session.client_options() {
        Ok(options) => options,
        Err(e) => {
            ctx.formatter.error(&e.to_string());
            return Err(ExitCode::from(&e));
        }
    };

    match ctx.factory.connect(&options).await {
        Ok(client) => Ok(client),
        Err(e) => Err(report_error(ctx, "Error loading AWS config", &e)),
    }
}

/// Print a provider or I/O failure with a short prefix
pub(crate) fn report_error(ctx: &CommandContext<'_>, prefix: &str, err: &Error) -> ExitCode {
    tracing::debug!(error = ?err, "{prefix}");
    ctx.formatter.error(&format!("{prefix}: {err}"));
    ExitCode::from(err)
}
