//! download command - Save an object to a local file

use std::path::{Path, PathBuf};

use clap::Args;
use serde::Serialize;
use ss_core::{Error, ObjectBody, non_empty};
use tokio::io::AsyncWriteExt;

use super::{CommandContext, connect, report_error, require_target, usage_error};
use crate::exit_code::ExitCode;
use crate::output::ProgressBar;

/// Download an object to a local file
#[derive(Args, Debug)]
pub struct DownloadArgs {
    /// Object key to download
    #[arg(long)]
    pub key: Option<String>,

    /// Local file to write (created or truncated)
    #[arg(long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct DownloadOutput {
    status: &'static str,
    bucket: String,
    key: String,
    output: String,
    size_bytes: u64,
}

/// Failure while writing a downloaded body to disk
#[derive(Debug)]
enum SaveError {
    Create(std::io::Error),
    Copy(std::io::Error),
}

/// Execute the download command
pub async fn execute(args: &DownloadArgs, ctx: &CommandContext<'_>) -> ExitCode {
    let target = match require_target(ctx) {
        Ok(target) => target,
        Err(code) => return code,
    };

    let output = args.output.as_deref().filter(|p| !p.as_os_str().is_empty());
    let (key, output) = match (non_empty(&args.key), output) {
        (Some(key), Some(output)) => (key, output),
        _ => return usage_error(ctx, "You must provide both --key and --output"),
    };

    let client = match connect(ctx).await {
        Ok(client) => client,
        Err(code) => return code,
    };

    let spinner = ProgressBar::spinner(ctx.formatter.config(), &format!("Downloading {key}"));

    // The local file is only created once the object is known to exist
    let body = match client.get_object(&target.bucket, key).await {
        Ok(body) => body,
        Err(e) => {
            spinner.finish_and_clear();
            return report_error(ctx, "Error downloading file", &e);
        }
    };

    let saved = save_body(body, output).await;
    spinner.finish_and_clear();

    match saved {
        Ok(bytes) => {
            tracing::debug!(key, output = %output.display(), bytes, "download complete");
            if ctx.formatter.is_json() {
                ctx.formatter.json(&DownloadOutput {
                    status: "success",
                    bucket: target.bucket,
                    key: key.to_string(),
                    output: output.display().to_string(),
                    size_bytes: bytes,
                });
            } else {
                ctx.formatter.success(&format!(
                    "File downloaded successfully: {}",
                    output.display()
                ));
            }
            ExitCode::Success
        }
        Err(SaveError::Create(e)) => report_error(ctx, "Error creating output file", &Error::from(e)),
        Err(SaveError::Copy(e)) => report_error(ctx, "Error saving file", &Error::from(e)),
    }
}

/// Stream `body` into a newly created or truncated file at `path`
///
/// The body is consumed and dropped before returning, whether or not the
/// copy succeeds. A failed copy leaves the partial file in place.
async fn save_body(mut body: ObjectBody, path: &Path) -> Result<u64, SaveError> {
    let mut file = tokio::fs::File::create(path)
        .await
        .map_err(SaveError::Create)?;

    let written = tokio::io::copy(&mut body, &mut file)
        .await
        .map_err(SaveError::Copy)?;
    file.flush().await.map_err(SaveError::Copy)?;

    Ok(written)
}
