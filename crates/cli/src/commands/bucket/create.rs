//! create command - Make bucket
//!
//! Creates the selected bucket. Buckets outside the default region carry an
//! explicit location constraint.

use serde::Serialize;
use ss_core::CreateBucketRequest;

use super::{CommandContext, connect, report_error, require_target};
use crate::exit_code::ExitCode;

#[derive(Debug, Serialize)]
struct CreateOutput {
    status: &'static str,
    bucket: String,
    region: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    location_constraint: Option<String>,
}

/// Execute the create command
pub async fn execute(ctx: &CommandContext<'_>) -> ExitCode {
    let target = match require_target(ctx) {
        Ok(target) => target,
        Err(code) => return code,
    };

    let client = match connect(ctx).await {
        Ok(client) => client,
        Err(code) => return code,
    };

    let request = CreateBucketRequest::for_region(&target.bucket, &target.region);
    let location_constraint = request.location_constraint.clone();
    tracing::debug!(?request, "creating bucket");

    match client.create_bucket(request).await {
        Ok(()) => {
            if ctx.formatter.is_json() {
                ctx.formatter.json(&CreateOutput {
                    status: "success",
                    bucket: target.bucket,
                    region: target.region,
                    location_constraint,
                });
            } else {
                ctx.formatter
                    .success(&format!("Bucket created successfully: {}", target.bucket));
            }
            ExitCode::Success
        }
        Err(e) => report_error(ctx, "Error creating bucket", &e),
    }
}
