//! info command - Show bucket region

use serde::Serialize;
use ss_core::resolve_location;

use super::{CommandContext, connect, report_error, require_target};
use crate::exit_code::ExitCode;

#[derive(Debug, Serialize)]
struct InfoOutput {
    bucket: String,
    region: String,
}

/// Execute the info command
pub async fn execute(ctx: &CommandContext<'_>) -> ExitCode {
    let target = match require_target(ctx) {
        Ok(target) => target,
        Err(code) => return code,
    };

    let client = match connect(ctx).await {
        Ok(client) => client,
        Err(code) => return code,
    };

    match client.bucket_location(&target.bucket).await {
        Ok(location) => {
            let region = resolve_location(location.as_deref());
            if ctx.formatter.is_json() {
                ctx.formatter.json(&InfoOutput {
                    bucket: target.bucket,
                    region,
                });
            } else {
                ctx.formatter.println(&format!("Bucket: {}", target.bucket));
                ctx.formatter.println(&format!("Region: {region}"));
            }
            ExitCode::Success
        }
        Err(e) => report_error(ctx, "Error getting bucket location", &e),
    }
}
