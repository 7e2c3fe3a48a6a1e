//! list-objects command - List keys in the bucket
//!
//! Issues a single list call; when the server reports more keys beyond the
//! first page a warning is printed instead of paging further.

use clap::Args;
use serde::Serialize;
use ss_core::{ListOptions, ObjectInfo, non_empty};

use super::{CommandContext, connect, report_error, require_target};
use crate::exit_code::ExitCode;

/// List objects in the bucket
#[derive(Args, Debug)]
pub struct ListObjectsArgs {
    /// Only list keys starting with this prefix
    #[arg(long)]
    pub prefix: Option<String>,
}

#[derive(Debug, Serialize)]
struct ListObjectsOutput {
    bucket: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    prefix: Option<String>,
    items: Vec<ObjectInfo>,
    truncated: bool,
}

/// Execute the list-objects command
pub async fn execute(args: &ListObjectsArgs, ctx: &CommandContext<'_>) -> ExitCode {
    let target = match require_target(ctx) {
        Ok(target) => target,
        Err(code) => return code,
    };

    let client = match connect(ctx).await {
        Ok(client) => client,
        Err(code) => return code,
    };

    let options = ListOptions {
        prefix: non_empty(&args.prefix).map(str::to_string),
        ..Default::default()
    };

    let result = match client.list_objects(&target.bucket, &options).await {
        Ok(result) => result,
        Err(e) => return report_error(ctx, "Error listing objects", &e),
    };

    if ctx.formatter.is_json() {
        ctx.formatter.json(&ListObjectsOutput {
            bucket: target.bucket,
            prefix: options.prefix,
            items: result.items,
            truncated: result.truncated,
        });
        return ExitCode::Success;
    }

    if result.items.is_empty() {
        ctx.formatter.println("No objects found in bucket");
    } else {
        ctx.formatter.println("Objects:");
        for item in &result.items {
            ctx.formatter
                .println(&format!(" - {} (size: {})", item.key, item.size_bytes));
        }
    }

    if result.truncated {
        ctx.formatter
            .warning("Result truncated: only the first page of objects is shown");
    }

    ExitCode::Success
}
