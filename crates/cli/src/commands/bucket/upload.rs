//! upload command - Put a local file
//!
//! Streams a local file to a key in the selected bucket.

use std::path::{Path, PathBuf};

use clap::Args;
use serde::Serialize;
use ss_core::{Error, UploadBody, non_empty};

use super::{CommandContext, connect, report_error, require_target, usage_error};
use crate::exit_code::ExitCode;
use crate::output::ProgressBar;

/// Upload a local file
#[derive(Args, Debug)]
pub struct UploadArgs {
    /// Local file path to upload
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Object key to upload to
    #[arg(long)]
    pub key: Option<String>,

    /// Content type (guessed from the file extension by default)
    #[arg(long)]
    pub content_type: Option<String>,
}

#[derive(Debug, Serialize)]
struct UploadOutput {
    status: &'static str,
    bucket: String,
    key: String,
    size_bytes: i64,
    size_human: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    etag: Option<String>,
}

/// Execute the upload command
pub async fn execute(args: &UploadArgs, ctx: &CommandContext<'_>) -> ExitCode {
    let target = match require_target(ctx) {
        Ok(target) => target,
        Err(code) => return code,
    };

    let file_path = args.file.as_deref().filter(|p| !p.as_os_str().is_empty());
    let (file_path, key) = match (file_path, non_empty(&args.key)) {
        (Some(file_path), Some(key)) => (file_path, key),
        _ => return usage_error(ctx, "You must provide both --file and --key"),
    };

    let client = match connect(ctx).await {
        Ok(client) => client,
        Err(code) => return code,
    };

    let body = match open_upload(file_path, args.content_type.as_deref()).await {
        Ok(body) => body,
        Err(e) => return report_error(ctx, "Error opening file", &e),
    };

    tracing::debug!(
        file = %file_path.display(),
        key,
        length = body.length,
        content_type = ?body.content_type,
        "uploading"
    );

    let spinner = ProgressBar::spinner(ctx.formatter.config(), &format!("Uploading {key}"));
    let result = client.put_object(&target.bucket, key, body).await;
    spinner.finish_and_clear();

    match result {
        Ok(info) => {
            if ctx.formatter.is_json() {
                ctx.formatter.json(&UploadOutput {
                    status: "success",
                    bucket: target.bucket,
                    key: info.key,
                    size_bytes: info.size_bytes,
                    size_human: info.size_human,
                    etag: info.etag,
                });
            } else {
                ctx.formatter
                    .success(&format!("File uploaded successfully: {key}"));
            }
            ExitCode::Success
        }
        Err(e) => report_error(ctx, "Error uploading file", &e),
    }
}

/// Open `path` for upload and work out its length and content type
async fn open_upload(path: &Path, content_type: Option<&str>) -> Result<UploadBody, Error> {
    let file = tokio::fs::File::open(path).await?;
    let metadata = file.metadata().await?;

    if metadata.is_dir() {
        return Err(Error::General(format!("{} is a directory", path.display())));
    }

    let content_type = content_type
        .filter(|ct| !ct.is_empty())
        .map(str::to_string)
        .or_else(|| {
            mime_guess::from_path(path)
                .first()
                .map(|m| m.essence_str().to_string())
        });

    Ok(UploadBody {
        file,
        length: metadata.len(),
        content_type,
    })
}
