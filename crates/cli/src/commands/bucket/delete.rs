//! delete command - Remove bucket

use serde::Serialize;

use super::{CommandContext, connect, report_error, require_target};
use crate::exit_code::ExitCode;

#[derive(Debug, Serialize)]
struct DeleteOutput {
    status: &'static str,
    bucket: String,
}

/// Execute the delete command
pub async fn execute(ctx: &CommandContext<'_>) -> ExitCode {
    let target = match require_target(ctx) {
        Ok(target) => target,
        Err(code) => return code,
    };

    let client = match connect(ctx).await {
        Ok(client) => client,
        Err(code) => return code,
    };

    match client.delete_bucket(&target.bucket).await {
        Ok(()) => {
            if ctx.formatter.is_json() {
                ctx.formatter.json(&DeleteOutput {
                    status: "success",
                    bucket: target.bucket,
                });
            } else {
                ctx.formatter
                    .success(&format!("Bucket deleted successfully: {}", target.bucket));
            }
            ExitCode::Success
        }
        Err(e) => report_error(ctx, "Error deleting bucket", &e),
    }
}
